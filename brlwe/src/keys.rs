use std::fmt;

use math::{Error, Poly, Ring};
use sampling::BinarySource;
use tracing::{debug_span, trace};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// pk = r1 - a*sk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(pub Poly);

/// Binary secret polynomial, wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(Poly);

impl SecretKey {
    /// Wraps poly after checking it has n binary coefficients.
    pub fn from_poly(ring: &Ring, poly: Poly) -> Result<Self, Error> {
        ring.check_len(&poly.0)?;
        if let Some(index) = poly.0.iter().position(|c| *c > 1) {
            return Err(Error::InvalidCoefficient {
                index,
                value: poly.0[index],
            });
        }
        Ok(Self(poly))
    }

    pub fn as_poly(&self) -> &Poly {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("n", &self.0.n())
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct KeyPair {
    pub public: PublicKey,
    pub secret: SecretKey,
}

/// Samples a binary secret sk and a binary error r1 from source, in that
/// order, and returns (r1 - a*sk, sk).
pub fn keygen<S: BinarySource + ?Sized>(
    ring: &Ring,
    a: &Poly,
    source: &mut S,
) -> Result<KeyPair, Error> {
    let span = debug_span!("keygen", n = ring.n(), q = ring.q());
    let _guard = span.enter();

    ring.check_len(&a.0)?;

    let mut secret: SecretKey = SecretKey(ring.new_poly()?);
    ring.fill_binary(source, &mut secret.0)?;
    trace!("secret sampled");

    let mut pk: Poly = ring.new_poly()?;
    ring.mul(a, &secret.0, &mut pk)?;
    trace!("a*sk computed");

    let mut r1: Poly = ring.new_poly()?;
    ring.fill_binary(source, &mut r1)?;
    ring.sub_inplace(&r1, &mut pk)?;
    r1.zeroize();
    trace!("public key ready");

    Ok(KeyPair {
        public: PublicKey(pk),
        secret,
    })
}

#[cfg(test)]
mod tests {
    use math::Parameters;
    use sampling::{LimitedSource, Source};

    use super::*;

    #[test]
    fn secret_is_binary_and_public_in_range() {
        let ring: Ring = Ring::new(Parameters::ENC2).unwrap();
        let mut source: Source = Source::new([3u8; 32]);
        let mut a: Poly = ring.new_poly().unwrap();
        ring.fill_uniform(&mut source, &mut a).unwrap();
        let keys: KeyPair = keygen(&ring, &a, &mut source).unwrap();
        assert!(keys.secret.as_poly().0.iter().all(|c| *c <= 1));
        assert_eq!(ring.check_poly(&keys.public.0), Ok(()));
    }

    #[test]
    fn public_key_satisfies_relation() {
        let ring: Ring = Ring::new(Parameters::ENCT).unwrap();
        let a: Poly = Poly(vec![30, 20, 150, 80]);
        let mut source: Source = Source::new([9u8; 32]);
        let keys: KeyPair = keygen(&ring, &a, &mut source).unwrap();

        // pk + a*sk must be binary.
        let mut r1: Poly = ring.new_poly().unwrap();
        ring.mul(&a, keys.secret.as_poly(), &mut r1).unwrap();
        ring.add_inplace(&keys.public.0, &mut r1).unwrap();
        assert!(r1.0.iter().all(|c| *c <= 1));
    }

    #[test]
    fn keygen_draws_two_binary_polys() {
        let ring: Ring = Ring::new(Parameters::ENC2).unwrap();
        let a: Poly = ring.new_poly().unwrap();

        let mut limited = LimitedSource::new(Source::new([0u8; 32]), 128);
        assert!(keygen(&ring, &a, &mut limited).is_ok());
        assert_eq!(limited.remaining(), 0);

        let mut limited = LimitedSource::new(Source::new([0u8; 32]), 127);
        assert!(matches!(
            keygen(&ring, &a, &mut limited),
            Err(Error::RandomSourceExhausted(_))
        ));
    }

    #[test]
    fn secret_debug_hides_coefficients() {
        let ring: Ring = Ring::new(Parameters::ENCT).unwrap();
        let secret: SecretKey = SecretKey::from_poly(&ring, Poly(vec![1, 0, 1, 1])).unwrap();
        assert_eq!(format!("{:?}", secret), "SecretKey { n: 4, .. }");
        assert!(SecretKey::from_poly(&ring, Poly(vec![1, 0, 1])).is_err());
    }

    #[test]
    fn secret_must_be_binary() {
        let ring: Ring = Ring::new(Parameters::ENCT).unwrap();
        assert_eq!(
            SecretKey::from_poly(&ring, Poly(vec![1, 0, 2, 1])).err(),
            Some(Error::InvalidCoefficient { index: 2, value: 2 })
        );
        assert_eq!(
            SecretKey::from_poly(&ring, Poly(vec![0, 255, 0, 0])).err(),
            Some(Error::InvalidCoefficient {
                index: 1,
                value: 255
            })
        );
        assert!(SecretKey::from_poly(&ring, Poly(vec![0, 1, 1, 0])).is_ok());
    }
}
