use sampling::{BinarySource, Source};

use crate::error::Error;
use crate::modulus::WordOps;
use crate::poly::Poly;
use crate::ring::Ring;

impl Ring {
    /// Fills a with independent uniform bits, consuming n/4 words of source.
    pub fn fill_binary<S: BinarySource + ?Sized>(
        &self,
        source: &mut S,
        a: &mut Poly,
    ) -> Result<(), Error> {
        self.check_len(&a.0)?;
        let mut bits: Vec<u8> = Vec::new();
        bits.try_reserve_exact(self.n())
            .map_err(|_| Error::AllocationFailure {
                requested: self.n(),
            })?;
        bits.resize(self.n(), 0);
        source.fill_binary(&mut bits)?;
        a.0.iter_mut()
            .zip(bits.iter())
            .for_each(|(a, b)| *a = *b as u16);
        Ok(())
    }

    /// Fills a with coefficients uniform in [0, q).
    pub fn fill_uniform(&self, source: &mut Source, a: &mut Poly) -> Result<(), Error> {
        self.check_len(&a.0)?;
        let max: u64 = self.q() as u64;
        let mask: u64 = (self.q() as usize).mask() as u64;
        a.0.iter_mut()
            .for_each(|a| *a = source.next_u64n(max, mask) as u16);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sampling::{LimitedSource, Source, SourceError};

    use crate::error::Error;
    use crate::parameters::Parameters;
    use crate::poly::Poly;
    use crate::ring::Ring;

    #[test]
    fn fill_binary_consumes_quarter_n_words() {
        let ring: Ring = Ring::new(Parameters::ENC2).unwrap();
        let mut source = LimitedSource::new(Source::new([5u8; 32]), 64);
        let mut a: Poly = ring.new_poly().unwrap();
        ring.fill_binary(&mut source, &mut a).unwrap();
        assert!(a.0.iter().all(|c| *c <= 1));
        assert_eq!(source.remaining(), 0);
        assert_eq!(
            ring.fill_binary(&mut source, &mut a),
            Err(Error::RandomSourceExhausted(SourceError::Exhausted {
                drawn: 64
            }))
        );
    }

    #[test]
    fn fill_uniform_stays_below_q() {
        let ring: Ring = Ring::new(Parameters::NTT256).unwrap();
        let mut source: Source = Source::new([9u8; 32]);
        let mut a: Poly = ring.new_poly().unwrap();
        ring.fill_uniform(&mut source, &mut a).unwrap();
        assert!(a.0.iter().all(|c| *c < 7681));
        assert!(a.0.iter().any(|c| *c >= 4096));
    }
}
