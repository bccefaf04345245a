pub(crate) mod describe;
pub(crate) mod eval;

use thiserror::Error;

/// Why an evaluation produced no value. All of these are recoverable: the
/// stack is left as pushed and the caller may bind variables, pop tokens or
/// push more operands and evaluate again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("variable {0} is not set")]
    VariableUnset(String),
    #[error("{0}")]
    GuardFailed(&'static str),
    #[error("not enough operands")]
    InsufficientOperands,
}
