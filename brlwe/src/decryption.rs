use itertools::izip;
use math::{Error, Poly, Ring};
use tracing::{debug_span, trace};
use zeroize::Zeroize;

use crate::encoding::decode;
use crate::encryption::Ciphertext;
use crate::keys::SecretKey;

/// Recovers the message bits as decode(c1*sk + c2).
pub fn decrypt(ring: &Ring, ct: &Ciphertext, sk: &SecretKey) -> Result<Vec<u8>, Error> {
    let span = debug_span!("decrypt", n = ring.n(), q = ring.q());
    let _guard = span.enter();

    ring.check_len(&ct.c2.0)?;

    let mut recovered: Poly = ring.new_poly()?;
    ring.mul(&ct.c1, sk.as_poly(), &mut recovered)?;
    ring.add_inplace(&ct.c2, &mut recovered)?;
    trace!("c1*sk + c2 computed");

    let bits: Vec<u8> = decode(ring, &recovered)?;
    recovered.zeroize();
    Ok(bits)
}

/// Number of positions where the two n-bit messages differ.
pub fn count_errors(ring: &Ring, expected: &[u8], actual: &[u8]) -> Result<usize, Error> {
    ring.check_len(expected)?;
    ring.check_len(actual)?;
    Ok(izip!(expected, actual).filter(|(e, a)| e != a).count())
}
