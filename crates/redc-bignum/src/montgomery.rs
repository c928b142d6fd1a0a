//! Montgomery reduction (REDC) kernels.
//!
//! Given a 2N-word product `z`, an N-word modulus `p` and the Montgomery
//! constant `p_dash = -p[0]^-1 mod B`, REDC computes `z * R^-1 mod p` with
//! `R = B^N`, returning a value in `[0, p)` when `z < p * R`.
//!
//! Two independent algorithms live here:
//! - [`monty_redc_generic`] scans by column with a three-word accumulator and
//!   accepts any modulus length.
//! - `monty_redc_{4,6,8,16,24,32}` scan by row (HAC 14.32) over fixed-size
//!   arrays and are monomorphized per size.
//!
//! Both are total for arbitrary bit patterns, including even or zero moduli
//! and a wrong `p_dash`. For such inputs they still agree word for word: each
//! returns `floor((z + q * p) / R)` followed by the same conditional
//! subtraction, where the quotient digits `q` are derived identically.

use crate::accum::Word3;
use crate::ct::monty_maybe_sub;
use crate::word::{DoubleWord, Word, WORD_BITS};
use redc_types::RedcError;

/// Variable-length reference REDC.
///
/// Writes `p.len()` words into `r`. Reads exactly `2 * p.len()` words of
/// `z` and uses `p.len()` words of `ws` as scratch.
pub fn monty_redc_generic(
    r: &mut [Word],
    z: &[Word],
    p: &[Word],
    p_dash: Word,
    ws: &mut [Word],
) -> Result<(), RedcError> {
    let n = p.len();
    if n == 0 {
        return Err(RedcError::OperandSize {
            what: "p",
            need: 1,
            got: 0,
        });
    }
    check_len("z", z.len(), 2 * n)?;
    check_len("r", r.len(), n)?;
    check_len("ws", ws.len(), n)?;

    let ws = &mut ws[..n];
    let mut accum = Word3::new();

    accum.add(z[0]);
    ws[0] = accum.monty_step(p[0], p_dash);

    for i in 1..n {
        for j in 0..i {
            accum.mul(ws[j], p[i - j]);
        }
        accum.add(z[i]);
        ws[i] = accum.monty_step(p[0], p_dash);
    }

    // Quotient digits are consumed low to high, so ws[i] can be overwritten
    // with the result digit once column n + i is complete.
    for i in 0..n - 1 {
        for j in i + 1..n {
            accum.mul(ws[j], p[n + i - j]);
        }
        accum.add(z[n + i]);
        ws[i] = accum.extract();
    }

    accum.add(z[2 * n - 1]);
    ws[n - 1] = accum.extract();
    let top = accum.extract();

    monty_maybe_sub(&mut r[..n], top, ws, p);
    Ok(())
}

fn check_len(what: &'static str, got: usize, need: usize) -> Result<(), RedcError> {
    if got < need {
        return Err(RedcError::OperandSize { what, need, got });
    }
    Ok(())
}

/// Row-wise REDC over a fixed modulus size.
///
/// `ws` holds `z` while the quotient rows are folded in; `top` carries the
/// overflow out of word `i + N` into the next row.
#[inline(always)]
fn redc_fixed<const N: usize>(
    r: &mut [Word; N],
    z: &[Word],
    p: &[Word; N],
    p_dash: Word,
    ws: &mut [Word],
) {
    let ws = &mut ws[..2 * N];
    ws.copy_from_slice(&z[..2 * N]);

    let mut top: Word = 0;
    for i in 0..N {
        let q = ws[i].wrapping_mul(p_dash);

        let mut carry: Word = 0;
        for j in 0..N {
            let t = q as DoubleWord * p[j] as DoubleWord
                + ws[i + j] as DoubleWord
                + carry as DoubleWord;
            ws[i + j] = t as Word;
            carry = (t >> WORD_BITS) as Word;
        }

        let t = ws[i + N] as DoubleWord + carry as DoubleWord + top as DoubleWord;
        ws[i + N] = t as Word;
        top = (t >> WORD_BITS) as Word;
    }

    let (_, hi) = ws.split_at(N);
    monty_maybe_sub(r, top, hi, p);
}

macro_rules! monty_redc_kernel {
    ($(#[$doc:meta])* $name:ident, $n:literal, $wide:literal, $scratch:literal) => {
        $(#[$doc])*
        pub fn $name(
            r: &mut [Word; $n],
            z: &[Word; $wide],
            p: &[Word; $n],
            p_dash: Word,
            ws: &mut [Word; $scratch],
        ) {
            redc_fixed::<$n>(r, z, p, p_dash, ws);
        }
    };
}

monty_redc_kernel!(
    /// REDC for a 4-word modulus.
    monty_redc_4, 4, 8, 10
);
monty_redc_kernel!(
    /// REDC for a 6-word modulus.
    monty_redc_6, 6, 12, 14
);
monty_redc_kernel!(
    /// REDC for an 8-word modulus.
    monty_redc_8, 8, 16, 18
);
monty_redc_kernel!(
    /// REDC for a 16-word modulus.
    monty_redc_16, 16, 32, 34
);
monty_redc_kernel!(
    /// REDC for a 24-word modulus.
    monty_redc_24, 24, 48, 50
);
monty_redc_kernel!(
    /// REDC for a 32-word modulus.
    monty_redc_32, 32, 64, 66
);

/// Compute the Montgomery constant `-p0^-1 mod B` for an odd low word.
///
/// Newton iteration `x = x * (2 - p0 * x)` doubles the number of correct low
/// bits each round, starting from `x = p0` (correct to 3 bits for odd `p0`).
pub fn monty_inverse(p0: Word) -> Result<Word, RedcError> {
    if p0 & 1 == 0 {
        return Err(RedcError::EvenModulus);
    }
    let mut x = p0;
    let mut bits = 3;
    while bits < WORD_BITS {
        x = x.wrapping_mul((2 as Word).wrapping_sub(p0.wrapping_mul(x)));
        bits *= 2;
    }
    Ok(x.wrapping_neg())
}
