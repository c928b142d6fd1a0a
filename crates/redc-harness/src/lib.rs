#![forbid(unsafe_code)]
#![doc = "Differential fuzzing harness for fixed-size Montgomery reduction kernels."]
//!
//! A fuzz input of `(3N + 1)` little-endian words for N in {4, 6, 8, 16, 24, 32}
//! is split into a 2N-word product `z`, an N-word modulus `p` and the
//! Montgomery constant `p_dash`. The fixed-size kernel for N and the generic
//! reference both reduce it, and any difference in the N result words is
//! fatal. Inputs of any other length are ignored.

mod backend;
mod decode;
mod dispatch;
mod exec;
mod harness;
mod report;

pub use backend::{Native, RedcBackend};
pub use decode::{decode, Operands};
pub use dispatch::{classify, select_class};
pub use exec::{run_pair, Outputs};
pub use harness::{check, check_with, fuzz, fuzz_with, Fatal, Verdict};
pub use report::{compare, dump_words, Divergence};
