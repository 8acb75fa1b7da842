pub mod dft;
pub mod error;
pub mod modulus;
pub mod parameters;
pub mod poly;
pub mod ring;

pub use error::Error;
pub use parameters::{MulStrategy, Parameters};
pub use poly::Poly;
pub use ring::Ring;

/// Largest prime accepted by the NTT strategies. Keeps every lazy butterfly
/// value inside a u16 and every Montgomery input below
/// [modulus::montgomery::REDUCE_INPUT_MAX].
pub const NTT_Q_MAX: u16 = 12289;

/// Largest modulus accepted by the schoolbook strategy.
pub const SCHOOLBOOK_Q_MAX: u16 = 1 << 14;
