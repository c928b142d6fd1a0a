//! Kernels under test, behind a pluggable backend.

use redc_bignum::{
    monty_redc_16, monty_redc_24, monty_redc_32, monty_redc_4, monty_redc_6, monty_redc_8,
    monty_redc_generic, Word,
};
use redc_types::{RedcError, SizeClass};

/// The pair of REDC implementations compared by the harness.
///
/// Slices are sized by the caller from the size class: `r` and `p` hold N
/// words, `z` holds 2N and `ws` holds 2(N+1).
pub trait RedcBackend {
    /// Run the fixed-size kernel for `class`.
    fn specialized(
        &self,
        class: SizeClass,
        r: &mut [Word],
        z: &[Word],
        p: &[Word],
        p_dash: Word,
        ws: &mut [Word],
    ) -> Result<(), RedcError>;

    /// Run the variable-length reference.
    fn generic(
        &self,
        r: &mut [Word],
        z: &[Word],
        p: &[Word],
        p_dash: Word,
        ws: &mut [Word],
    ) -> Result<(), RedcError>;
}

/// The in-tree kernels from `redc-bignum`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Native;

impl RedcBackend for Native {
    fn specialized(
        &self,
        class: SizeClass,
        r: &mut [Word],
        z: &[Word],
        p: &[Word],
        p_dash: Word,
        ws: &mut [Word],
    ) -> Result<(), RedcError> {
        match class {
            SizeClass::W4 => monty_redc_4(
                fixed_mut("r", r)?,
                fixed("z", z)?,
                fixed("p", p)?,
                p_dash,
                fixed_mut("ws", ws)?,
            ),
            SizeClass::W6 => monty_redc_6(
                fixed_mut("r", r)?,
                fixed("z", z)?,
                fixed("p", p)?,
                p_dash,
                fixed_mut("ws", ws)?,
            ),
            SizeClass::W8 => monty_redc_8(
                fixed_mut("r", r)?,
                fixed("z", z)?,
                fixed("p", p)?,
                p_dash,
                fixed_mut("ws", ws)?,
            ),
            SizeClass::W16 => monty_redc_16(
                fixed_mut("r", r)?,
                fixed("z", z)?,
                fixed("p", p)?,
                p_dash,
                fixed_mut("ws", ws)?,
            ),
            SizeClass::W24 => monty_redc_24(
                fixed_mut("r", r)?,
                fixed("z", z)?,
                fixed("p", p)?,
                p_dash,
                fixed_mut("ws", ws)?,
            ),
            SizeClass::W32 => monty_redc_32(
                fixed_mut("r", r)?,
                fixed("z", z)?,
                fixed("p", p)?,
                p_dash,
                fixed_mut("ws", ws)?,
            ),
        }
        Ok(())
    }

    fn generic(
        &self,
        r: &mut [Word],
        z: &[Word],
        p: &[Word],
        p_dash: Word,
        ws: &mut [Word],
    ) -> Result<(), RedcError> {
        monty_redc_generic(r, z, p, p_dash, ws)
    }
}

/// View the first `L` words of `s` as an array.
fn fixed<'a, const L: usize>(what: &'static str, s: &'a [Word]) -> Result<&'a [Word; L], RedcError> {
    let got = s.len();
    s.get(..L)
        .and_then(|s| s.try_into().ok())
        .ok_or(RedcError::OperandSize { what, need: L, got })
}

fn fixed_mut<'a, const L: usize>(
    what: &'static str,
    s: &'a mut [Word],
) -> Result<&'a mut [Word; L], RedcError> {
    let got = s.len();
    s.get_mut(..L)
        .and_then(|s| s.try_into().ok())
        .ok_or(RedcError::OperandSize { what, need: L, got })
}
