//! Random operand generation using OS randomness.

use crate::word::{words_from_le_bytes, Word, WORD_BITS, WORD_BYTES};
use redc_types::RedcError;
use zeroize::Zeroize;

/// Generate `len` uniformly random words.
pub fn random_words(len: usize) -> Result<Vec<Word>, RedcError> {
    let mut buf = vec![0u8; len * WORD_BYTES];
    getrandom::getrandom(&mut buf).map_err(|_| RedcError::RandGenFail)?;
    let words = words_from_le_bytes(&buf).ok_or(RedcError::RandGenFail);
    buf.zeroize();
    words
}

/// Generate a random `len`-word modulus.
///
/// The low bit is forced to 1 so a Montgomery constant exists, and the top
/// bit is set so the modulus is exactly `len * WORD_BITS` bits long.
pub fn random_modulus(len: usize) -> Result<Vec<Word>, RedcError> {
    if len == 0 {
        return Err(RedcError::OperandSize {
            what: "p",
            need: 1,
            got: 0,
        });
    }
    let mut p = random_words(len)?;
    p[0] |= 1;
    p[len - 1] |= 1 << (WORD_BITS - 1);
    Ok(p)
}
