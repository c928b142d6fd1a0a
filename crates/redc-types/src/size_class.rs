//! Supported Montgomery reduction size classes.

use crate::RedcError;
use std::fmt;
use std::str::FromStr;

/// Modulus width, in words, of one fuzz iteration.
///
/// The set is closed: it mirrors the fixed-size kernels that exist. Sizes
/// such as 12 or 20 words have no kernel and are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeClass {
    W4,
    W6,
    W8,
    W16,
    W24,
    W32,
}

impl SizeClass {
    /// Every supported class, smallest first.
    pub const ALL: [SizeClass; 6] = [
        SizeClass::W4,
        SizeClass::W6,
        SizeClass::W8,
        SizeClass::W16,
        SizeClass::W24,
        SizeClass::W32,
    ];

    /// Number of words N in the modulus and in the result.
    pub const fn words(self) -> usize {
        match self {
            SizeClass::W4 => 4,
            SizeClass::W6 => 6,
            SizeClass::W8 => 8,
            SizeClass::W16 => 16,
            SizeClass::W24 => 24,
            SizeClass::W32 => 32,
        }
    }

    /// Number of words in the double-width product `z` (2N).
    pub const fn wide_words(self) -> usize {
        2 * self.words()
    }

    /// Scratch words handed to the kernels (2(N+1)).
    pub const fn workspace_words(self) -> usize {
        2 * (self.words() + 1)
    }

    /// Number of words in a fuzz input of this class: z, p and p_dash (3N+1).
    pub const fn input_words(self) -> usize {
        3 * self.words() + 1
    }

    /// Input length in bytes for a given word size.
    pub const fn input_len(self, word_bytes: usize) -> usize {
        self.input_words() * word_bytes
    }

    /// Look up the class whose modulus is `words` wide.
    pub fn from_words(words: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.words() == words)
    }

    /// Look up the class whose fuzz input is exactly `count` words long.
    pub fn from_input_words(count: usize) -> Option<Self> {
        match count {
            13 => Some(SizeClass::W4),
            19 => Some(SizeClass::W6),
            25 => Some(SizeClass::W8),
            49 => Some(SizeClass::W16),
            73 => Some(SizeClass::W24),
            97 => Some(SizeClass::W32),
            _ => None,
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N={}", self.words())
    }
}

impl FromStr for SizeClass {
    type Err = RedcError;

    /// Accepts either the bare word count (`"8"`) or the display form (`"N=8"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        let digits = digits
            .strip_prefix("N=")
            .or_else(|| digits.strip_prefix("n="))
            .unwrap_or(digits);
        let words: usize = digits
            .parse()
            .map_err(|_| RedcError::UnsupportedSize(0))?;
        Self::from_words(words).ok_or(RedcError::UnsupportedSize(words))
    }
}
