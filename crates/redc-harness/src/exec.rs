//! Differential executor: run both kernels on identical operands.

use crate::backend::RedcBackend;
use crate::decode::Operands;
use redc_bignum::Word;
use redc_types::RedcError;
use zeroize::Zeroizing;

/// The two N-word results of one differential run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outputs {
    pub specialized: Vec<Word>,
    pub generic: Vec<Word>,
}

/// Run the specialized kernel for the operands' class and the generic
/// reference on the same operands.
///
/// Kernels only borrow `z` and `p` immutably, so neither run can observe the
/// other's side effects. Each gets its own zeroed scratch buffer, wiped when
/// the call returns.
pub fn run_pair<B: RedcBackend + ?Sized>(
    backend: &B,
    operands: &Operands,
) -> Result<Outputs, RedcError> {
    let class = operands.class();
    let n = class.words();

    let mut specialized = vec![0; n];
    {
        let mut ws = Zeroizing::new(vec![0; class.workspace_words()]);
        backend.specialized(
            class,
            &mut specialized,
            operands.z(),
            operands.p(),
            operands.p_dash(),
            &mut ws,
        )?;
    }

    let mut generic = vec![0; n];
    {
        let mut ws = Zeroizing::new(vec![0; class.workspace_words()]);
        backend.generic(
            &mut generic,
            operands.z(),
            operands.p(),
            operands.p_dash(),
            &mut ws,
        )?;
    }

    log::debug!("{class}: ran specialized and generic redc");
    Ok(Outputs {
        specialized,
        generic,
    })
}
