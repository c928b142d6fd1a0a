#![forbid(unsafe_code)]
#![doc = "Common types and error codes for the Montgomery reduction harness."]

pub mod error;
pub mod size_class;

pub use error::*;
pub use size_class::*;
