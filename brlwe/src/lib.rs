//! BRLWE: public-key encryption over Z_q[x]/(x^n+1) with binary secrets
//! and binary noise.
//!
//! ```no_run
//! use brlwe::{Parameters, Session};
//!
//! let mut session = Session::new(Parameters::ENC2, sampling::new_seed())?;
//! let message = vec![1u8; session.ring().n()];
//! let report = session.run(&message)?;
//! assert!(report.errors <= 2);
//! # Ok::<(), brlwe::Error>(())
//! ```

pub mod decryption;
pub mod encoding;
pub mod encryption;
pub mod keys;
pub mod session;
pub mod vectors;

pub use decryption::{count_errors, decrypt};
pub use encoding::{Thresholds, decode, encode_into};
pub use encryption::{Ciphertext, encrypt};
pub use keys::{KeyPair, PublicKey, SecretKey, keygen};
pub use math::{Error, MulStrategy, Parameters, Poly, Ring};
pub use sampling::{BinarySource, LimitedSource, Source, SourceError};
pub use session::{Report, Session};
