//! Routing of raw fuzz inputs to a size class.

use redc_bignum::WORD_BYTES;
use redc_types::SizeClass;

/// Map a total input word count to its size class.
pub fn select_class(total_words: usize) -> Option<SizeClass> {
    SizeClass::from_input_words(total_words)
}

/// Pick the size class of a raw fuzz input.
///
/// Empty inputs, inputs that are not a whole number of words, and word counts
/// that match no class are unusable and yield `None`. These are not bugs.
pub fn classify(bytes: &[u8]) -> Option<SizeClass> {
    if bytes.is_empty() || bytes.len() % WORD_BYTES != 0 {
        log::trace!("skipping input of {} bytes: not whole words", bytes.len());
        return None;
    }
    let words = bytes.len() / WORD_BYTES;
    let class = select_class(words);
    log::trace!("input of {words} words routed to {class:?}");
    class
}
