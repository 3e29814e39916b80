// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared input generators for the Rectiline benches.

/// Deterministic xorshift generator so runs see identical inputs.
#[derive(Clone, Debug)]
pub struct Rng(u64);

impl Rng {
    /// Seed the generator. The seed must be non-zero.
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next raw value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform-ish value in `[0, n)`.
    pub fn below(&mut self, n: i64) -> i64 {
        (self.next_u64() % n as u64) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Rng::new(0xC0FFEE);
        let mut b = Rng::new(0xC0FFEE);
        for _ in 0..64 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn below_stays_in_range() {
        let mut rng = Rng::new(7);
        for n in [1_i64, 2, 3, 17, 1024] {
            for _ in 0..256 {
                let v = rng.below(n);
                assert!((0..n).contains(&v), "{v} outside [0, {n})");
            }
        }
    }
}
