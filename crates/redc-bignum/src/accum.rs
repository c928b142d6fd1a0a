//! Three-word column accumulator for product-scanning arithmetic.

use crate::word::{DoubleWord, Word, WORD_BITS};

/// Running column sum `w2:w1:w0`.
///
/// A column of an N-word product scan adds at most 2N double-width terms, so
/// the top word never wraps for any supported size.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Word3 {
    w0: Word,
    w1: Word,
    w2: Word,
}

impl Word3 {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Accumulate `x * y`.
    pub(crate) fn mul(&mut self, x: Word, y: Word) {
        self.add_double(x as DoubleWord * y as DoubleWord);
    }

    /// Accumulate a single word.
    pub(crate) fn add(&mut self, x: Word) {
        self.add_double(x as DoubleWord);
    }

    fn add_double(&mut self, v: DoubleWord) {
        let lo = v as Word;
        let hi = (v >> WORD_BITS) as Word;

        let (w0, c0) = self.w0.overflowing_add(lo);
        let (t, c1) = self.w1.overflowing_add(hi);
        let (w1, c2) = t.overflowing_add(c0 as Word);

        self.w0 = w0;
        self.w1 = w1;
        self.w2 = self.w2.wrapping_add(c1 as Word + c2 as Word);
    }

    /// One Montgomery step: pick `q = w0 * p_dash`, add `q * p0`, drop the
    /// low word and return `q`.
    ///
    /// The dropped word is zero only when `p_dash` is the true Montgomery
    /// constant of `p0`; it is discarded either way.
    pub(crate) fn monty_step(&mut self, p0: Word, p_dash: Word) -> Word {
        let q = self.w0.wrapping_mul(p_dash);
        self.mul(q, p0);
        self.shift();
        q
    }

    /// Pop the low word and shift the accumulator down by one word.
    pub(crate) fn extract(&mut self) -> Word {
        let r = self.w0;
        self.shift();
        r
    }

    fn shift(&mut self) {
        self.w0 = self.w1;
        self.w1 = self.w2;
        self.w2 = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_carries_into_top_word() {
        let mut acc = Word3::new();
        acc.mul(Word::MAX, Word::MAX);
        acc.mul(Word::MAX, Word::MAX);
        // 2 * (B-1)^2 = 2B^2 - 4B + 2
        assert_eq!(acc.extract(), 2);
        assert_eq!(acc.extract(), Word::MAX - 3);
        assert_eq!(acc.extract(), 1);
        assert_eq!(acc.extract(), 0);
    }

    #[test]
    fn test_add_ripples() {
        let mut acc = Word3::new();
        acc.add(Word::MAX);
        acc.add(1);
        assert_eq!(acc.extract(), 0);
        assert_eq!(acc.extract(), 1);
    }

    #[test]
    fn test_monty_step_clears_low_word() {
        // p0 = 1 has p_dash = -1: q = w0 * (-1) makes w0 + q * p0 == 0 mod B.
        let mut acc = Word3::new();
        acc.add(5);
        let q = acc.monty_step(1, Word::MAX);
        assert_eq!(q, (5 as Word).wrapping_neg());
        // 5 + (B - 5) = B, so the carry survives as the new low word.
        assert_eq!(acc.extract(), 1);
    }
}
