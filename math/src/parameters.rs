use std::fmt;

use crate::error::Error;
use crate::modulus::is_prime;
use crate::{NTT_Q_MAX, SCHOOLBOOK_Q_MAX};

/// Multiplication algorithm used by [crate::Ring::mul].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MulStrategy {
    /// O(n^2) negacyclic convolution, any modulus.
    #[default]
    Schoolbook,
    /// One length-n NTT per operand.
    NttFull,
    /// Four length-n/4 NTTs per operand recombined by bowtie products.
    NttSplit,
}

impl fmt::Display for MulStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MulStrategy::Schoolbook => write!(f, "schoolbook"),
            MulStrategy::NttFull => write!(f, "ntt-full"),
            MulStrategy::NttSplit => write!(f, "ntt-split"),
        }
    }
}

/// Ring dimension, modulus and multiplication strategy, fixed together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parameters {
    pub n: usize,
    pub q: u16,
    pub strategy: MulStrategy,
}

impl Parameters {
    pub const ENC1: Parameters = Parameters::new(256, 128, MulStrategy::Schoolbook);
    pub const ENC2: Parameters = Parameters::new(256, 256, MulStrategy::Schoolbook);
    pub const ENC3: Parameters = Parameters::new(512, 256, MulStrategy::Schoolbook);
    /// Four-coefficient test bench.
    pub const ENCT: Parameters = Parameters::new(4, 256, MulStrategy::Schoolbook);
    pub const NTT128: Parameters = Parameters::new(128, 7681, MulStrategy::NttSplit);
    pub const NTT256: Parameters = Parameters::new(256, 7681, MulStrategy::NttFull);

    pub const fn new(n: usize, q: u16, strategy: MulStrategy) -> Self {
        Self { n, q, strategy }
    }

    pub const fn with_strategy(self, strategy: MulStrategy) -> Self {
        Self { strategy, ..self }
    }

    /// Looks up a named preset (case-insensitive).
    pub fn preset(name: &str) -> Option<Parameters> {
        match name.to_ascii_lowercase().as_str() {
            "enc1" => Some(Self::ENC1),
            "enc2" => Some(Self::ENC2),
            "enc3" => Some(Self::ENC3),
            "enct" => Some(Self::ENCT),
            "ntt128" => Some(Self::NTT128),
            "ntt256" => Some(Self::NTT256),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        let invalid = |reason: &'static str| Error::InvalidParameters {
            n: self.n,
            q: self.q,
            reason,
        };

        if !self.n.is_power_of_two() || self.n < 4 {
            return Err(invalid("n must be a power of two >= 4"));
        }

        match self.strategy {
            MulStrategy::Schoolbook => {
                if self.q < 2 || self.q > SCHOOLBOOK_Q_MAX {
                    return Err(invalid("schoolbook modulus must lie in [2, 2^14]"));
                }
            }
            MulStrategy::NttFull | MulStrategy::NttSplit => {
                if self.q > NTT_Q_MAX || self.q == 2 || !is_prime(self.q) {
                    return Err(invalid("ntt modulus must be an odd prime <= 12289"));
                }
                let transform: usize = match self.strategy {
                    MulStrategy::NttFull => self.n,
                    _ => self.n / 4,
                };
                if (self.q as usize - 1) % (2 * transform) != 0 {
                    return Err(invalid("ntt modulus must satisfy q = 1 mod 2n"));
                }
            }
        }

        Ok(())
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::ENC2
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={} q={} strategy={}", self.n, self.q, self.strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for p in [
            Parameters::ENC1,
            Parameters::ENC2,
            Parameters::ENC3,
            Parameters::ENCT,
            Parameters::NTT128,
            Parameters::NTT256,
        ] {
            assert_eq!(p.validate(), Ok(()), "{}", p);
        }
        assert_eq!(Parameters::preset("NTT128"), Some(Parameters::NTT128));
        assert_eq!(Parameters::preset("enc9"), None);
    }

    #[test]
    fn ntt_rejects_power_of_two_modulus() {
        let p: Parameters = Parameters::ENC2.with_strategy(MulStrategy::NttFull);
        assert!(matches!(p.validate(), Err(Error::InvalidParameters { .. })));
    }

    #[test]
    fn ntt_rejects_missing_roots() {
        // 7680 = 2^9 * 15: no 2048-th root of unity.
        let p: Parameters = Parameters::new(1024, 7681, MulStrategy::NttFull);
        assert!(p.validate().is_err());
        // The split strategy only needs roots for n/4.
        let p: Parameters = Parameters::new(1024, 7681, MulStrategy::NttSplit);
        assert_eq!(p.validate(), Ok(()));
    }

    #[test]
    fn rejects_small_or_odd_dimension() {
        assert!(Parameters::new(2, 256, MulStrategy::Schoolbook).validate().is_err());
        assert!(Parameters::new(12, 256, MulStrategy::Schoolbook).validate().is_err());
    }
}
