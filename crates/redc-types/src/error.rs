/// Errors raised by the reduction kernels and the harness plumbing.
///
/// A divergence between kernels is deliberately not part of this enum: it is
/// a fatal finding, not a recoverable error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RedcError {
    // Input shape errors
    #[error("input length mismatch: expected {expected} bytes, got {got}")]
    InputLength { expected: usize, got: usize },
    #[error("unsupported size class: {0} words")]
    UnsupportedSize(usize),

    // Kernel argument errors
    #[error("operand {what} too small: need {need} words, got {got}")]
    OperandSize {
        what: &'static str,
        need: usize,
        got: usize,
    },
    #[error("montgomery: modulus must be odd")]
    EvenModulus,

    // Randomness
    #[error("random word generation failed")]
    RandGenFail,
}
