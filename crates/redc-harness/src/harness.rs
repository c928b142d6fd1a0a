//! The differential check pipeline and its fuzz entry points.

use crate::backend::{Native, RedcBackend};
use crate::decode::decode;
use crate::dispatch::classify;
use crate::exec::run_pair;
use crate::report::{compare, Divergence};
use redc_types::{RedcError, SizeClass};

/// Outcome of a check that did not find a defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The input length matches no size class; nothing was run.
    Skipped,
    /// Both kernels ran and agreed.
    Agreed(SizeClass),
}

/// A finding that must stop the fuzzer.
#[derive(Debug, thiserror::Error)]
pub enum Fatal {
    #[error(transparent)]
    Divergence(#[from] Divergence),
    #[error("harness error: {0}")]
    Harness(#[from] RedcError),
}

/// Run one differential check against the in-tree kernels.
pub fn check(data: &[u8]) -> Result<Verdict, Fatal> {
    check_with(&Native, data)
}

/// Run one differential check against `backend`.
///
/// Unusable input lengths are skipped without touching either kernel.
pub fn check_with<B: RedcBackend + ?Sized>(backend: &B, data: &[u8]) -> Result<Verdict, Fatal> {
    let Some(class) = classify(data) else {
        return Ok(Verdict::Skipped);
    };

    let operands = decode(data, class)?;
    let outputs = run_pair(backend, &operands)?;
    compare(&operands, &outputs)?;

    Ok(Verdict::Agreed(class))
}

/// libFuzzer entry point.
pub fn fuzz(data: &[u8]) {
    fuzz_with(&Native, data);
}

/// Fuzz entry point with a pluggable backend.
///
/// # Panics
///
/// Panics with the full operand dump when the kernels disagree or a kernel
/// rejects well-shaped operands. libFuzzer turns the panic into an abort and
/// saves the input.
pub fn fuzz_with<B: RedcBackend + ?Sized>(backend: &B, data: &[u8]) {
    if let Err(fatal) = check_with(backend, data) {
        log::error!("{fatal}");
        panic!("{fatal}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redc_bignum::{Word, WORD_BYTES};

    #[test]
    fn test_check_skips_unusable_lengths() {
        assert_eq!(check(&[]).unwrap(), Verdict::Skipped);
        assert_eq!(check(&[0u8; 1]).unwrap(), Verdict::Skipped);
        assert_eq!(check(&[0u8; WORD_BYTES]).unwrap(), Verdict::Skipped);
        assert_eq!(check(&vec![0u8; 14 * WORD_BYTES]).unwrap(), Verdict::Skipped);
    }

    #[test]
    fn test_check_zero_input_agrees() {
        let data = vec![0u8; 13 * WORD_BYTES];
        assert_eq!(check(&data).unwrap(), Verdict::Agreed(SizeClass::W4));
    }

    #[test]
    fn test_fuzz_accepts_garbage() {
        for class in SizeClass::ALL {
            let data: Vec<u8> = (0..class.input_len(WORD_BYTES))
                .map(|i| (i as u8).wrapping_mul(151).wrapping_add(7))
                .collect();
            fuzz(&data);
        }
    }

    struct Rejecting;

    impl RedcBackend for Rejecting {
        fn specialized(
            &self,
            _class: SizeClass,
            _r: &mut [Word],
            _z: &[Word],
            _p: &[Word],
            _p_dash: Word,
            _ws: &mut [Word],
        ) -> Result<(), RedcError> {
            Err(RedcError::UnsupportedSize(4))
        }

        fn generic(
            &self,
            _r: &mut [Word],
            _z: &[Word],
            _p: &[Word],
            _p_dash: Word,
            _ws: &mut [Word],
        ) -> Result<(), RedcError> {
            Ok(())
        }
    }

    #[test]
    fn test_backend_error_is_fatal() {
        let data = vec![0u8; 13 * WORD_BYTES];
        assert!(matches!(
            check_with(&Rejecting, &data),
            Err(Fatal::Harness(RedcError::UnsupportedSize(4)))
        ));
    }

    #[test]
    #[should_panic(expected = "harness error")]
    fn test_fuzz_panics_on_backend_error() {
        fuzz_with(&Rejecting, &vec![0u8; 13 * WORD_BYTES]);
    }
}
