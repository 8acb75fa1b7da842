use itertools::izip;

use crate::dft::DFT;
use crate::error::Error;
use crate::poly::Poly;
use crate::ring::{Multiplier, Ring};

// Inputs may hold any u16 value; every output coefficient lies in [0, q).
impl Ring {
    /// Assigns a + b mod q to c.
    pub fn add(&self, a: &Poly, b: &Poly, c: &mut Poly) -> Result<(), Error> {
        self.check_len(&a.0)?;
        self.check_len(&b.0)?;
        self.check_len(&c.0)?;
        let q: u32 = self.q() as u32;
        izip!(&a.0, &b.0, &mut c.0).for_each(|(a, b, c)| {
            *c = ((*a as u32 + *b as u32) % q) as u16;
        });
        Ok(())
    }

    /// Assigns a + b mod q to b.
    pub fn add_inplace(&self, a: &Poly, b: &mut Poly) -> Result<(), Error> {
        self.check_len(&a.0)?;
        self.check_len(&b.0)?;
        let q: u32 = self.q() as u32;
        izip!(&a.0, &mut b.0).for_each(|(a, b)| {
            *b = ((*a as u32 + *b as u32) % q) as u16;
        });
        Ok(())
    }

    /// Assigns a - b mod q to c.
    pub fn sub(&self, a: &Poly, b: &Poly, c: &mut Poly) -> Result<(), Error> {
        self.check_len(&a.0)?;
        self.check_len(&b.0)?;
        self.check_len(&c.0)?;
        let q: u32 = self.q() as u32;
        izip!(&a.0, &b.0, &mut c.0).for_each(|(a, b, c)| {
            *c = ((*a as u32 + q - *b as u32 % q) % q) as u16;
        });
        Ok(())
    }

    /// Assigns a - b mod q to b.
    pub fn sub_inplace(&self, a: &Poly, b: &mut Poly) -> Result<(), Error> {
        self.check_len(&a.0)?;
        self.check_len(&b.0)?;
        let q: u32 = self.q() as u32;
        izip!(&a.0, &mut b.0).for_each(|(a, b)| {
            *b = ((*a as u32 + q - *b as u32 % q) % q) as u16;
        });
        Ok(())
    }

    /// Assigns -a mod q to b.
    pub fn neg(&self, a: &Poly, b: &mut Poly) -> Result<(), Error> {
        self.check_len(&a.0)?;
        self.check_len(&b.0)?;
        let q: u32 = self.q() as u32;
        izip!(&a.0, &mut b.0).for_each(|(a, b)| {
            *b = ((q - *a as u32 % q) % q) as u16;
        });
        Ok(())
    }

    /// Assigns a * b mod (x^n + 1, q) to c by negacyclic convolution.
    /// Zero coefficients of b are skipped, so binary b costs about half
    /// of n^2 additions.
    pub fn mul_schoolbook(&self, a: &Poly, b: &Poly, c: &mut Poly) -> Result<(), Error> {
        self.check_len(&a.0)?;
        self.check_len(&b.0)?;
        self.check_len(&c.0)?;
        let n: usize = self.n();
        let q: u32 = self.q() as u32;

        c.zero();

        b.0.iter()
            .enumerate()
            .filter(|(_, bi)| **bi as u32 % q != 0)
            .for_each(|(i, bi)| {
                let bi: u32 = *bi as u32 % q;
                // a[j] lands on i + j when i + j < n, else on i + j - n negated.
                let (direct, wrapped) = a.0.split_at(n - i);
                let (c_wrapped, c_direct) = c.0.split_at_mut(i);
                izip!(c_direct.iter_mut(), direct).for_each(|(c, a)| {
                    *c = ((*c as u32 + (*a as u32 % q) * bi) % q) as u16;
                });
                izip!(c_wrapped.iter_mut(), wrapped).for_each(|(c, a)| {
                    *c = ((*c as u32 + (q - *a as u32 % q) * bi) % q) as u16;
                });
            });

        Ok(())
    }

    /// Assigns a * b mod (x^n + 1, q) to c with the strategy the ring was
    /// built with. All strategies agree coefficient for coefficient.
    pub fn mul(&self, a: &Poly, b: &Poly, c: &mut Poly) -> Result<(), Error> {
        self.check_len(&a.0)?;
        self.check_len(&b.0)?;
        self.check_len(&c.0)?;

        match self.multiplier() {
            Multiplier::Schoolbook => self.mul_schoolbook(a, b, c),
            Multiplier::Ntt(table) => {
                let mut a_hat: Poly = self.reduced_copy(a)?;
                let mut b_hat: Poly = self.reduced_copy(b)?;
                table.forward_inplace(&mut a_hat.0);
                table.forward_inplace(&mut b_hat.0);
                table.mul_pointwise(&a_hat.0, &b_hat.0, &mut c.0);
                table.backward_inplace(&mut c.0);
                Ok(())
            }
            Multiplier::Split(split) => {
                let a_red: Poly = self.reduced_copy(a)?;
                let b_red: Poly = self.reduced_copy(b)?;
                split.mul(&a_red.0, &b_red.0, &mut c.0);
                Ok(())
            }
        }
    }

    /// Returns a copy of a with every coefficient reduced into [0, q).
    fn reduced_copy(&self, a: &Poly) -> Result<Poly, Error> {
        let mut b: Poly = self.new_poly()?;
        let q: u16 = self.q();
        izip!(&a.0, &mut b.0).for_each(|(a, b)| *b = a % q);
        Ok(b)
    }
}
