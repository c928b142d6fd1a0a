#![doc = "Montgomery reduction kernels: one generic reference and fixed-size specializations."]

mod accum;
mod ct;
mod montgomery;
mod random;
mod word;

pub use montgomery::{
    monty_inverse, monty_redc_16, monty_redc_24, monty_redc_32, monty_redc_4, monty_redc_6,
    monty_redc_8, monty_redc_generic,
};
pub use random::{random_modulus, random_words};
pub use word::{words_from_le_bytes, words_to_le_bytes, DoubleWord, Word, WORD_BITS, WORD_BYTES};
