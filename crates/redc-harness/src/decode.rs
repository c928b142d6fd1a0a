//! Fuzz input decoding into REDC operands.

use redc_bignum::{
    monty_inverse, random_modulus, random_words, words_from_le_bytes, words_to_le_bytes, Word,
    WORD_BYTES,
};
use redc_types::{RedcError, SizeClass};

/// Operands of one differential check.
///
/// `z` is always `2N` words and `p` always `N` words for the stored class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operands {
    class: SizeClass,
    z: Vec<Word>,
    p: Vec<Word>,
    p_dash: Word,
}

impl Operands {
    /// Build operands, checking the shapes against `class`.
    pub fn new(class: SizeClass, z: Vec<Word>, p: Vec<Word>, p_dash: Word) -> Result<Self, RedcError> {
        if z.len() != class.wide_words() {
            return Err(RedcError::OperandSize {
                what: "z",
                need: class.wide_words(),
                got: z.len(),
            });
        }
        if p.len() != class.words() {
            return Err(RedcError::OperandSize {
                what: "p",
                need: class.words(),
                got: p.len(),
            });
        }
        Ok(Self {
            class,
            z,
            p,
            p_dash,
        })
    }

    /// Generate well-formed operands: an odd full-width modulus, its
    /// Montgomery constant and a product `z < p * R`.
    pub fn random(class: SizeClass) -> Result<Self, RedcError> {
        let p = random_modulus(class.words())?;
        let p_dash = monty_inverse(p[0])?;
        let mut z = random_words(class.wide_words())?;
        // p has its top bit set, so clearing z's top bit keeps z below p * R
        if let Some(top) = z.last_mut() {
            *top &= Word::MAX >> 1;
        }
        Self::new(class, z, p, p_dash)
    }

    pub fn class(&self) -> SizeClass {
        self.class
    }

    /// Double-width product, least significant word first.
    pub fn z(&self) -> &[Word] {
        &self.z
    }

    /// Modulus, least significant word first.
    pub fn p(&self) -> &[Word] {
        &self.p
    }

    pub fn p_dash(&self) -> Word {
        self.p_dash
    }

    /// Encode as a fuzz input. Exact inverse of [`decode`].
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.class.input_len(WORD_BYTES));
        out.extend_from_slice(&words_to_le_bytes(&self.z));
        out.extend_from_slice(&words_to_le_bytes(&self.p));
        out.extend_from_slice(&self.p_dash.to_le_bytes());
        out
    }
}

/// Split a fuzz input of the given class into `z`, `p` and `p_dash`.
///
/// The input must be exactly `(3N + 1)` little-endian words; any other length
/// means the input does not belong to this class. No numeric validation is
/// done: every bit pattern is passed through to the kernels.
pub fn decode(bytes: &[u8], class: SizeClass) -> Result<Operands, RedcError> {
    let expected = class.input_len(WORD_BYTES);
    let length_error = RedcError::InputLength {
        expected,
        got: bytes.len(),
    };
    if bytes.len() != expected {
        return Err(length_error);
    }

    let words = words_from_le_bytes(bytes).ok_or(length_error)?;
    let (z, rest) = words.split_at(class.wide_words());
    let (p, tail) = rest.split_at(class.words());

    Ok(Operands {
        class,
        z: z.to_vec(),
        p: p.to_vec(),
        p_dash: tail[0],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use redc_bignum::WORD_BITS;

    fn counting_input(class: SizeClass) -> Vec<u8> {
        let words: Vec<Word> = (1..=class.input_words() as Word).collect();
        words_to_le_bytes(&words)
    }

    #[test]
    fn test_decode_layout() {
        let class = SizeClass::W4;
        let ops = decode(&counting_input(class), class).unwrap();

        assert_eq!(ops.class(), class);
        assert_eq!(ops.z(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(ops.p(), &[9, 10, 11, 12]);
        assert_eq!(ops.p_dash(), 13);
    }

    #[test]
    fn test_decode_little_endian_words() {
        let class = SizeClass::W4;
        let mut bytes = vec![0u8; class.input_len(WORD_BYTES)];
        bytes[0] = 0xAB;
        bytes[1] = 0xCD;
        let ops = decode(&bytes, class).unwrap();
        assert_eq!(ops.z()[0], 0xCDAB);
    }

    #[test]
    fn test_decode_wrong_length() {
        let class = SizeClass::W8;
        let expected = class.input_len(WORD_BYTES);
        for got in [0, WORD_BYTES, expected - 1, expected + 1, expected + WORD_BYTES] {
            let err = decode(&vec![0u8; got], class).unwrap_err();
            assert_eq!(err, RedcError::InputLength { expected, got });
        }
        // A valid input of another class is not this class
        assert!(decode(&counting_input(SizeClass::W4), SizeClass::W6).is_err());
    }

    #[test]
    fn test_to_bytes_inverts_decode() {
        for class in SizeClass::ALL {
            let bytes = counting_input(class);
            assert_eq!(decode(&bytes, class).unwrap().to_bytes(), bytes);
        }
    }

    #[test]
    fn test_new_checks_shapes() {
        let class = SizeClass::W4;
        assert!(Operands::new(class, vec![0; 8], vec![0; 4], 0).is_ok());
        assert!(Operands::new(class, vec![0; 7], vec![0; 4], 0).is_err());
        assert!(Operands::new(class, vec![0; 8], vec![0; 6], 0).is_err());
    }

    #[test]
    fn test_random_operands_well_formed() {
        for class in SizeClass::ALL {
            let ops = Operands::random(class).unwrap();
            assert_eq!(ops.z().len(), class.wide_words());
            assert_eq!(ops.p().len(), class.words());
            assert_eq!(ops.p()[0].wrapping_mul(ops.p_dash()), Word::MAX);
            assert_eq!(ops.z()[class.wide_words() - 1] >> (WORD_BITS - 1), 0);
        }
    }
}
