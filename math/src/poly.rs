use std::fmt;

use zeroize::Zeroize;

use crate::error::Error;

/// Ring polynomial: n coefficients, coefficient i at index i.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Poly(pub Vec<u16>);

impl Poly {
    pub fn new(n: usize) -> Self {
        Self(vec![0; n])
    }

    /// Returns a zero polynomial, reporting allocation failure instead of aborting.
    pub fn try_new(n: usize) -> Result<Self, Error> {
        let mut coeffs: Vec<u16> = Vec::new();
        coeffs
            .try_reserve_exact(n)
            .map_err(|_| Error::AllocationFailure { requested: n })?;
        coeffs.resize(n, 0);
        Ok(Self(coeffs))
    }

    pub fn n(&self) -> usize {
        self.0.len()
    }

    pub fn coeffs(&self) -> &[u16] {
        &self.0
    }

    pub fn set_all(&mut self, v: u16) {
        self.0.fill(v)
    }

    pub fn zero(&mut self) {
        self.set_all(0)
    }

    pub fn copy_from(&mut self, other: &Poly) {
        if std::ptr::eq(self, other) {
            return;
        }
        self.0.resize(other.n(), 0);
        self.0.copy_from_slice(&other.0)
    }
}

impl AsRef<[u16]> for Poly {
    fn as_ref(&self) -> &[u16] {
        &self.0
    }
}

impl Zeroize for Poly {
    fn zeroize(&mut self) {
        self.0.as_mut_slice().zeroize()
    }
}

/// Two hex digits per coefficient (more when q > 256), a space after
/// every fourth coefficient and a newline after every sixteenth.
impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            write!(f, "{:02x}", c)?;
            let j: usize = i + 1;
            if j % 16 == 0 {
                writeln!(f)?;
            } else if j % 4 == 0 {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}
