use thiserror::Error;

/// Number of output bits extracted from one 32-bit draw.
pub const BITS_PER_WORD: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("random source exhausted after {drawn} words")]
    Exhausted { drawn: usize },
}

/// Capability producing independent uniform bits.
///
/// Implementors supply 32-bit words; bits are extracted four per word,
/// the j-th bit of a batch being the low bit of the j-th byte counted
/// from the most significant end.
pub trait BinarySource {
    fn try_next_word(&mut self) -> Result<u32, SourceError>;

    /// Fills `bits` with values in {0,1}. A trailing batch shorter than
    /// [BITS_PER_WORD] still consumes a whole word.
    fn fill_binary(&mut self, bits: &mut [u8]) -> Result<(), SourceError> {
        for batch in bits.chunks_mut(BITS_PER_WORD) {
            let word: u32 = self.try_next_word()?;
            batch
                .iter_mut()
                .enumerate()
                .for_each(|(j, b)| *b = word_bit(word, j));
        }
        Ok(())
    }

    fn produce_binary(&mut self, count: usize) -> Result<Vec<u8>, SourceError> {
        let mut bits: Vec<u8> = vec![0u8; count];
        self.fill_binary(&mut bits)?;
        Ok(bits)
    }
}

impl<S: BinarySource + ?Sized> BinarySource for &mut S {
    #[inline(always)]
    fn try_next_word(&mut self) -> Result<u32, SourceError> {
        (**self).try_next_word()
    }
}

/// Returns bit `j` (0..4) of a batch drawn from `word`.
#[inline(always)]
pub fn word_bit(word: u32, j: usize) -> u8 {
    debug_assert!(j < BITS_PER_WORD, "invalid batch index: {}", j);
    ((word >> (24 - 8 * j)) & 1) as u8
}

/// Wraps a [BinarySource] with a fixed budget of words.
pub struct LimitedSource<S> {
    inner: S,
    remaining: usize,
    drawn: usize,
}

impl<S> LimitedSource<S> {
    pub fn new(inner: S, words: usize) -> Self {
        Self {
            inner,
            remaining: words,
            drawn: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<S: BinarySource> BinarySource for LimitedSource<S> {
    fn try_next_word(&mut self) -> Result<u32, SourceError> {
        if self.remaining == 0 {
            return Err(SourceError::Exhausted { drawn: self.drawn });
        }
        self.remaining -= 1;
        self.drawn += 1;
        self.inner.try_next_word()
    }
}
