use std::time::{Duration, Instant};

use math::{Error, Parameters, Poly, Ring};
use sampling::{BinarySource, Source};
use tracing::debug;

use crate::decryption::{count_errors, decrypt};
use crate::encryption::{Ciphertext, encrypt};
use crate::keys::{KeyPair, PublicKey, SecretKey, keygen};

/// A ring, its public polynomial a and a seeded source driving every draw.
pub struct Session {
    ring: Ring,
    a: Poly,
    source: Source,
}

/// Outcome of [Session::run].
#[derive(Clone, Debug)]
pub struct Report {
    pub recovered: Vec<u8>,
    pub errors: usize,
    pub keygen: Duration,
    pub encrypt: Duration,
    pub decrypt: Duration,
}

impl Report {
    pub fn success(&self) -> bool {
        self.errors == 0
    }
}

impl Session {
    /// Draws a uniformly from the source seeded with seed.
    pub fn new(params: Parameters, seed: [u8; 32]) -> Result<Self, Error> {
        let ring: Ring = Ring::new(params)?;
        let mut source: Source = Source::new(seed);
        let mut a: Poly = ring.new_poly()?;
        ring.fill_uniform(&mut source, &mut a)?;
        Ok(Self { ring, a, source })
    }

    /// Uses the n bytes of a, reduced mod q, as the public polynomial.
    pub fn with_public(params: Parameters, a: &[u8], seed: [u8; 32]) -> Result<Self, Error> {
        let ring: Ring = Ring::new(params)?;
        let a: Poly = ring.init_hex(a, false)?;
        Ok(Self {
            ring,
            a,
            source: Source::new(seed),
        })
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn a(&self) -> &Poly {
        &self.a
    }

    pub fn keygen(&mut self) -> Result<KeyPair, Error> {
        keygen(&self.ring, &self.a, &mut self.source)
    }

    pub fn encrypt(&mut self, pk: &PublicKey, message: &[u8]) -> Result<Ciphertext, Error> {
        encrypt(&self.ring, &self.a, pk, message, &mut self.source)
    }

    pub fn decrypt(&self, ct: &Ciphertext, sk: &SecretKey) -> Result<Vec<u8>, Error> {
        decrypt(&self.ring, ct, sk)
    }

    /// Overwrites message with uniform bits drawn from the session source.
    pub fn fill_message(&mut self, message: &mut [u8]) -> Result<(), Error> {
        self.source.fill_binary(message)?;
        Ok(())
    }

    /// Generates fresh keys, then encrypts and decrypts message, timing each step.
    pub fn run(&mut self, message: &[u8]) -> Result<Report, Error> {
        let now: Instant = Instant::now();
        let keys: KeyPair = self.keygen()?;
        let keygen: Duration = now.elapsed();

        let now: Instant = Instant::now();
        let ct: Ciphertext = self.encrypt(&keys.public, message)?;
        let encrypt: Duration = now.elapsed();

        let now: Instant = Instant::now();
        let recovered: Vec<u8> = self.decrypt(&ct, &keys.secret)?;
        let decrypt: Duration = now.elapsed();

        let errors: usize = count_errors(&self.ring, message, &recovered)?;
        debug!(errors, ?keygen, ?encrypt, ?decrypt, "round trip done");

        Ok(Report {
            recovered,
            errors,
            keygen,
            encrypt,
            decrypt,
        })
    }
}
