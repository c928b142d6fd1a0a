//! Result comparison and divergence dumps.

use crate::decode::Operands;
use crate::exec::Outputs;
use redc_bignum::{Word, WORD_BYTES};
use std::fmt;

/// Render a labeled word vector, one fixed-width hex literal per word.
///
/// Every word is printed so a failing input can be rebuilt from the dump.
pub fn dump_words(label: &str, words: &[Word]) -> String {
    let width = 2 + 2 * WORD_BYTES;
    let body = words
        .iter()
        .map(|w| format!("{w:#0width$x}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{label} = [{body}]")
}

/// Specialized and generic REDC disagreed on some input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    operands: Operands,
    specialized: Vec<Word>,
    generic: Vec<Word>,
    first_mismatch: usize,
}

impl Divergence {
    pub fn operands(&self) -> &Operands {
        &self.operands
    }

    pub fn specialized(&self) -> &[Word] {
        &self.specialized
    }

    pub fn generic(&self) -> &[Word] {
        &self.generic
    }

    /// Index of the lowest differing result word.
    pub fn first_mismatch(&self) -> usize {
        self.first_mismatch
    }
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "redc divergence ({}) at word {}",
            self.operands.class(),
            self.first_mismatch
        )?;
        writeln!(f, "{}", dump_words("input", self.operands.z()))?;
        writeln!(f, "{}", dump_words("r_specialized", &self.specialized))?;
        writeln!(f, "{}", dump_words("r_generic", &self.generic))?;
        writeln!(f, "{}", dump_words("p", self.operands.p()))?;
        write!(f, "{}", dump_words("p_dash", &[self.operands.p_dash()]))
    }
}

impl std::error::Error for Divergence {}

/// Compare both results over exactly N words.
pub fn compare(operands: &Operands, outputs: &Outputs) -> Result<(), Divergence> {
    let n = operands.class().words();
    let specialized = &outputs.specialized[..n.min(outputs.specialized.len())];
    let generic = &outputs.generic[..n.min(outputs.generic.len())];

    let mismatch = specialized
        .iter()
        .zip(generic)
        .position(|(a, b)| a != b)
        .or_else(|| {
            (specialized.len() != generic.len()).then(|| specialized.len().min(generic.len()))
        });

    match mismatch {
        None => Ok(()),
        Some(first_mismatch) => Err(Divergence {
            operands: operands.clone(),
            specialized: specialized.to_vec(),
            generic: generic.to_vec(),
            first_mismatch,
        }),
    }
}
