//! Constant-time helpers shared by the reduction kernels.
//!
//! These avoid data-dependent branching so the final correction step of REDC
//! does not leak whether the subtraction happened.

use crate::word::Word;
use subtle::{Choice, ConditionallySelectable};

/// Final REDC correction.
///
/// Treats `x0:x` as an (N+1)-word value and writes `x0:x - p` into `r` when
/// that does not underflow, otherwise `x`. Only the low N words are kept.
/// `r`, `x` and `p` must have the same length.
pub(crate) fn monty_maybe_sub(r: &mut [Word], x0: Word, x: &[Word], p: &[Word]) {
    debug_assert_eq!(r.len(), x.len());
    debug_assert_eq!(r.len(), p.len());

    let mut borrow: Word = 0;
    for ((ri, &xi), &pi) in r.iter_mut().zip(x).zip(p) {
        let (d1, b1) = xi.overflowing_sub(pi);
        let (d2, b2) = d1.overflowing_sub(borrow);
        *ri = d2;
        borrow = (b1 | b2) as Word;
    }
    let (_, underflow) = x0.overflowing_sub(borrow);

    // Underflow means x0:x < p: keep x
    let keep = Choice::from(underflow as u8);
    for (ri, &xi) in r.iter_mut().zip(x) {
        ri.conditional_assign(&xi, keep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maybe_sub_below_modulus_keeps_value() {
        let p = [97, 0];
        let x = [50, 0];
        let mut r = [0; 2];
        monty_maybe_sub(&mut r, 0, &x, &p);
        assert_eq!(r, [50, 0]);
    }

    #[test]
    fn test_maybe_sub_at_and_above_modulus() {
        let p = [97, 0];
        let mut r = [0; 2];

        monty_maybe_sub(&mut r, 0, &[97, 0], &p);
        assert_eq!(r, [0, 0]);

        monty_maybe_sub(&mut r, 0, &[100, 0], &p);
        assert_eq!(r, [3, 0]);
    }

    #[test]
    fn test_maybe_sub_uses_carry_word() {
        // x0:x = B^2 + 1, p = B^2 - 1 (both low words MAX): result 2
        let p = [Word::MAX, Word::MAX];
        let mut r = [0; 2];
        monty_maybe_sub(&mut r, 1, &[1, 0], &p);
        assert_eq!(r, [2, 0]);
    }

    #[test]
    fn test_maybe_sub_borrow_across_words() {
        // x = B, p = 1 -> B - 1
        let p = [1, 0];
        let mut r = [0; 2];
        monty_maybe_sub(&mut r, 0, &[0, 1], &p);
        assert_eq!(r, [Word::MAX, 0]);
    }
}
