//! RNG module - injectable random sources for deck shuffling
//!
//! The session only ever asks for bounded integers, so any source that can
//! produce a `u32` stream plugs in. [`SimpleRng`] is a seeded LCG used for
//! deterministic tests and reproducible play; [`SimpleRng::from_entropy`]
//! seeds it from the OS for normal play.

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits of the draw; the low bits of an LCG have short
    /// periods. `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Shuffle a slice in place using Fisher-Yates
    fn shuffle<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG seeded from the thread-local OS-backed generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u32>())
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_coerced() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..50 {
            assert!(rng.next_range(max) < max);
        }
    }

    #[test]
    fn test_two_element_shuffles_do_not_alternate() {
        let mut rng = SimpleRng::new(12345);
        let firsts: Vec<u8> = (0..64)
            .map(|_| {
                let mut pair = [0u8, 1];
                rng.shuffle(&mut pair);
                pair[0]
            })
            .collect();
        assert!(firsts.windows(2).any(|w| w[0] == w[1]));
        assert!(firsts.contains(&0) && firsts.contains(&1));
    }

    #[test]
    fn test_shuffle_keeps_every_element() {
        let mut rng = SimpleRng::new(99);
        let mut values: Vec<u32> = (0..32).collect();
        rng.shuffle(&mut values);
        values.sort_unstable();
        assert_eq!(values, (0..32).collect::<Vec<_>>());
    }
}
