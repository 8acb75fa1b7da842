pub mod arithmetic;
pub mod init;
pub mod sampling;

use tracing::debug;

use crate::dft::ntt::Table;
use crate::dft::split::SplitTable;
use crate::error::Error;
use crate::modulus::montgomery::MontgomeryPrecomp;
use crate::parameters::{MulStrategy, Parameters};
use crate::poly::Poly;

/// Transform state selected by the multiplication strategy.
pub(crate) enum Multiplier {
    Schoolbook,
    Ntt(Table),
    Split(SplitTable),
}

/// Z_q[x]/(x^n+1) together with the tables of its multiplication strategy.
pub struct Ring {
    params: Parameters,
    multiplier: Multiplier,
}

impl Ring {
    /// Validates params and builds the transform tables they require.
    pub fn new(params: Parameters) -> Result<Self, Error> {
        params.validate()?;

        let multiplier: Multiplier = match params.strategy {
            MulStrategy::Schoolbook => Multiplier::Schoolbook,
            MulStrategy::NttFull => {
                Multiplier::Ntt(Table::new(MontgomeryPrecomp::new(params.q), params.n))
            }
            MulStrategy::NttSplit => {
                Multiplier::Split(SplitTable::new(MontgomeryPrecomp::new(params.q), params.n))
            }
        };

        debug!(n = params.n, q = params.q, strategy = %params.strategy, "ring ready");

        Ok(Self { params, multiplier })
    }

    pub fn n(&self) -> usize {
        self.params.n
    }

    pub fn q(&self) -> u16 {
        self.params.q
    }

    pub fn strategy(&self) -> MulStrategy {
        self.params.strategy
    }

    /// Returns a zero polynomial of length n.
    pub fn new_poly(&self) -> Result<Poly, Error> {
        Poly::try_new(self.n())
    }

    /// Fails with [Error::InvalidLength] unless a has n elements.
    #[inline(always)]
    pub fn check_len<T>(&self, a: &[T]) -> Result<(), Error> {
        if a.len() != self.n() {
            return Err(Error::InvalidLength {
                expected: self.n(),
                actual: a.len(),
            });
        }
        Ok(())
    }

    /// Fails unless a has n coefficients, each in [0, q).
    pub fn check_poly(&self, a: &Poly) -> Result<(), Error> {
        self.check_len(&a.0)?;
        match a.0.iter().position(|c| *c >= self.q()) {
            Some(index) => Err(Error::InvalidCoefficient {
                index,
                value: a.0[index],
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn multiplier(&self) -> &Multiplier {
        &self.multiplier
    }
}
