use math::{Error, Poly, Ring};
use sampling::BinarySource;
use tracing::{debug_span, trace};
use zeroize::Zeroize;

use crate::encoding::{check_message, encode_into};
use crate::keys::PublicKey;

/// c1 = a*e1 + e2 and c2 = pk*e1 + e3 + encode(m).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    pub c1: Poly,
    pub c2: Poly,
}

/// Encrypts an n-bit message under pk.
///
/// The message is validated before any randomness is drawn. The binary
/// polynomials e1, e2 and e3 are then sampled from source in that order.
pub fn encrypt<S: BinarySource + ?Sized>(
    ring: &Ring,
    a: &Poly,
    pk: &PublicKey,
    message: &[u8],
    source: &mut S,
) -> Result<Ciphertext, Error> {
    let span = debug_span!("encrypt", n = ring.n(), q = ring.q());
    let _guard = span.enter();

    check_message(ring, message)?;
    ring.check_len(&a.0)?;
    ring.check_len(&pk.0.0)?;

    let mut e1: Poly = ring.new_poly()?;
    ring.fill_binary(source, &mut e1)?;
    let mut c1: Poly = ring.new_poly()?;
    ring.mul(a, &e1, &mut c1)?;
    trace!("a*e1 computed");

    let mut noise: Poly = ring.new_poly()?;
    ring.fill_binary(source, &mut noise)?;
    ring.add_inplace(&noise, &mut c1)?;
    trace!("c1 ready");

    let mut c2: Poly = ring.new_poly()?;
    ring.mul(&pk.0, &e1, &mut c2)?;
    e1.zeroize();

    ring.fill_binary(source, &mut noise)?;
    ring.add_inplace(&noise, &mut c2)?;
    noise.zeroize();

    encode_into(ring, message, &mut c2)?;
    trace!("c2 ready");

    Ok(Ciphertext { c1, c2 })
}

#[cfg(test)]
mod tests {
    use math::Parameters;
    use sampling::{LimitedSource, Source};

    use super::*;
    use crate::keys::{KeyPair, keygen};

    #[test]
    fn invalid_message_draws_nothing() {
        let ring: Ring = Ring::new(Parameters::ENCT).unwrap();
        let a: Poly = Poly(vec![30, 20, 150, 80]);
        let pk: PublicKey = PublicKey(ring.new_poly().unwrap());
        let mut limited = LimitedSource::new(Source::new([0u8; 32]), 3);

        assert_eq!(
            encrypt(&ring, &a, &pk, &[1, 0, 3, 1], &mut limited),
            Err(Error::InvalidCoefficient { index: 2, value: 3 })
        );
        assert_eq!(limited.remaining(), 3);

        assert!(encrypt(&ring, &a, &pk, &[1, 0, 1, 1], &mut limited).is_ok());
        assert_eq!(limited.remaining(), 0);
    }

    #[test]
    fn ciphertext_lies_in_ring() {
        let ring: Ring = Ring::new(Parameters::ENC2).unwrap();
        let mut source: Source = Source::new([5u8; 32]);
        let mut a: Poly = ring.new_poly().unwrap();
        ring.fill_uniform(&mut source, &mut a).unwrap();
        let keys: KeyPair = keygen(&ring, &a, &mut source).unwrap();
        let message: Vec<u8> = (0..ring.n()).map(|i| (i % 3 == 0) as u8).collect();
        let ct: Ciphertext = encrypt(&ring, &a, &keys.public, &message, &mut source).unwrap();
        assert_eq!(ring.check_poly(&ct.c1), Ok(()));
        assert_eq!(ring.check_poly(&ct.c2), Ok(()));
    }

    #[test]
    fn same_seed_same_ciphertext() {
        let ring: Ring = Ring::new(Parameters::ENCT).unwrap();
        let a: Poly = Poly(vec![30, 20, 150, 80]);
        let pk: PublicKey = PublicKey(Poly(vec![7, 200, 31, 99]));
        let encrypt_with = |seed: [u8; 32]| {
            encrypt(&ring, &a, &pk, &[1, 0, 1, 1], &mut Source::new(seed)).unwrap()
        };
        assert_eq!(encrypt_with([1u8; 32]), encrypt_with([1u8; 32]));
    }
}
