pub mod binary;
pub mod source;

pub use binary::{BinarySource, LimitedSource, SourceError};
pub use source::{new_seed, Source};
