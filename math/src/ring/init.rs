use crate::error::Error;
use crate::poly::Poly;
use crate::ring::Ring;

impl Ring {
    /// Zero-fills a.
    pub fn init(&self, a: &mut Poly) -> Result<(), Error> {
        self.check_len(&a.0)?;
        a.zero();
        Ok(())
    }

    /// Loads n bytes, each reduced mod q. With `reversed`, bytes[n-1]
    /// becomes coefficient 0.
    pub fn init_hex(&self, bytes: &[u8], reversed: bool) -> Result<Poly, Error> {
        self.check_len(bytes)?;
        self.load(bytes.iter().map(|b| *b as u16), reversed)
    }

    /// Same as [Ring::init_hex] for 16-bit words.
    pub fn init_words(&self, words: &[u16], reversed: bool) -> Result<Poly, Error> {
        self.check_len(words)?;
        self.load(words.iter().copied(), reversed)
    }

    /// Takes ownership of coefficients already in [0, q).
    pub fn from_coefficients(&self, coeffs: Vec<u16>) -> Result<Poly, Error> {
        let a: Poly = Poly(coeffs);
        self.check_poly(&a)?;
        Ok(a)
    }

    fn load<I>(&self, values: I, reversed: bool) -> Result<Poly, Error>
    where
        I: DoubleEndedIterator<Item = u16>,
    {
        let mut a: Poly = self.new_poly()?;
        let q: u16 = self.q();
        let reduce = |(c, v): (&mut u16, u16)| *c = v % q;
        if reversed {
            a.0.iter_mut().zip(values.rev()).for_each(reduce);
        } else {
            a.0.iter_mut().zip(values).for_each(reduce);
        }
        Ok(a)
    }
}
