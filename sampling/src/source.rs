use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_core::RngCore;

use crate::binary::{BinarySource, SourceError};

/// Seeded ChaCha8 stream backing every random draw of the protocol.
pub struct Source {
    source: ChaCha8Rng,
}

/// Returns a fresh seed drawn from the OS-seeded thread generator.
pub fn new_seed() -> [u8; 32] {
    let mut seed = [0u8; 32];
    rand::rng().fill_bytes(&mut seed);
    seed
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn from_u64(seed: u64) -> Source {
        Source {
            source: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn branch(&mut self) -> ([u8; 32], Self) {
        let seed: [u8; 32] = self.new_seed();
        (seed, Source::new(seed))
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.fill_bytes(&mut seed);
        seed
    }

    /// Returns a uniform value in [0, max) by rejection on `next_u64() & mask`.
    #[inline(always)]
    pub fn next_u64n(&mut self, max: u64, mask: u64) -> u64 {
        let mut x: u64 = self.next_u64() & mask;
        while x >= max {
            x = self.next_u64() & mask;
        }
        x
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}

impl BinarySource for Source {
    #[inline(always)]
    fn try_next_word(&mut self) -> Result<u32, SourceError> {
        Ok(self.next_u32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a: Source = Source::new([7u8; 32]);
        let mut b: Source = Source::new([7u8; 32]);
        assert_eq!(a.produce_binary(64).unwrap(), b.produce_binary(64).unwrap());
    }

    #[test]
    fn branch_diverges_from_parent() {
        let mut parent: Source = Source::new([1u8; 32]);
        let (seed, mut child) = parent.branch();
        assert_eq!(Source::new(seed).next_u64(), child.next_u64());
        assert_ne!(parent.new_seed(), seed);
    }

    #[test]
    fn next_u64n_stays_below_max() {
        let mut source: Source = Source::from_u64(3);
        (0..1000).for_each(|_| assert!(source.next_u64n(7681, 0x1fff) < 7681));
    }

    #[test]
    fn binary_draws_are_balanced() {
        let mut source: Source = Source::new([42u8; 32]);
        let bits: Vec<u8> = source.produce_binary(4096).unwrap();
        assert!(bits.iter().all(|b| *b <= 1));
        let ones: usize = bits.iter().filter(|b| **b == 1).count();
        assert!((1800..2300).contains(&ones), "ones = {}", ones);
    }
}
