use itertools::izip;
use math::{Error, Poly, Ring};

/// Decoder band: a coefficient decodes to 1 iff low < v < high.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    pub low: u16,
    pub high: u16,
}

impl Thresholds {
    /// low = q >> 2 and high = (q + (q << 1)) >> 2.
    pub fn new(q: u16) -> Self {
        let q: u32 = q as u32;
        Self {
            low: (q >> 2) as u16,
            high: ((q + (q << 1)) >> 2) as u16,
        }
    }

    #[inline(always)]
    pub fn decode(&self, v: u16) -> u8 {
        (v > self.low && v < self.high) as u8
    }
}

/// Fails unless message holds n values in {0,1}.
pub fn check_message(ring: &Ring, message: &[u8]) -> Result<(), Error> {
    ring.check_len(message)?;
    match message.iter().position(|m| *m > 1) {
        Some(index) => Err(Error::InvalidCoefficient {
            index,
            value: message[index] as u16,
        }),
        None => Ok(()),
    }
}

/// Offset q + n/2 - 1 - index (mod q) added to coefficient `index`.
/// It cancels the index-dependent mean of the decryption noise, whose
/// negacyclic products contribute index + 1 - n/2 on average.
pub fn bias(ring: &Ring, index: usize) -> u16 {
    let q: i64 = ring.q() as i64;
    (q + (ring.n() as i64 >> 1) - 1 - index as i64).rem_euclid(q) as u16
}

/// Adds the encoding of message to c: q/2 on every set bit, plus [bias].
pub fn encode_into(ring: &Ring, message: &[u8], c: &mut Poly) -> Result<(), Error> {
    check_message(ring, message)?;
    ring.check_len(&c.0)?;
    let q: u32 = ring.q() as u32;
    let half: u32 = q >> 1;
    izip!(c.0.iter_mut(), message)
        .enumerate()
        .for_each(|(i, (c, m))| {
            *c = ((*c as u32 % q + half * *m as u32 + bias(ring, i) as u32) % q) as u16;
        });
    Ok(())
}

/// Maps every coefficient of recovered to a message bit.
pub fn decode(ring: &Ring, recovered: &Poly) -> Result<Vec<u8>, Error> {
    ring.check_len(&recovered.0)?;
    let thresholds: Thresholds = Thresholds::new(ring.q());
    Ok(recovered.0.iter().map(|v| thresholds.decode(*v)).collect())
}
