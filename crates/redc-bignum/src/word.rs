//! Machine word model.

/// Word type for big integer digits (native register width).
#[cfg(target_pointer_width = "64")]
pub type Word = u64;
/// Double-width type for multiplication intermediates.
#[cfg(target_pointer_width = "64")]
pub type DoubleWord = u128;

/// Word type for big integer digits (native register width).
#[cfg(not(target_pointer_width = "64"))]
pub type Word = u32;
/// Double-width type for multiplication intermediates.
#[cfg(not(target_pointer_width = "64"))]
pub type DoubleWord = u64;

/// Bits per word.
pub const WORD_BITS: usize = Word::BITS as usize;

/// Bytes per word.
pub const WORD_BYTES: usize = core::mem::size_of::<Word>();

/// Split little-endian bytes into words.
///
/// Returns `None` unless `bytes` is a whole number of words.
pub fn words_from_le_bytes(bytes: &[u8]) -> Option<Vec<Word>> {
    if bytes.len() % WORD_BYTES != 0 {
        return None;
    }
    let words = bytes
        .chunks_exact(WORD_BYTES)
        .map(|chunk| {
            let mut buf = [0u8; WORD_BYTES];
            buf.copy_from_slice(chunk);
            Word::from_le_bytes(buf)
        })
        .collect();
    Some(words)
}

/// Serialize words as little-endian bytes.
pub fn words_to_le_bytes(words: &[Word]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}
