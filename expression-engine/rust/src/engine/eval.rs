use std::collections::HashMap;

use crate::engine::EvalError;
use crate::Token;

/// Evaluates the tail of `ops` recursively and returns the outcome together
/// with the unconsumed head of the slice.
///
/// The slice is consumed strictly back-to-front: an operator token pops the
/// recursive evaluation of whatever precedes it, so for a binary operator the
/// first recursive result is the right-hand operand and the second the
/// left-hand one. An empty slice here means an operator ran out of operands;
/// the empty-stack case is handled by the caller before recursion starts.
pub(crate) fn eval<'a>(
    ops: &'a [Token],
    variables: &HashMap<String, f64>,
) -> (Result<f64, EvalError>, &'a [Token]) {
    let Some((token, rest)) = ops.split_last() else {
        return (Err(EvalError::InsufficientOperands), ops);
    };

    match token {
        Token::Operand(value) => (Ok(*value), rest),
        Token::Constant(_, value) => (Ok(*value), rest),
        Token::Variable(symbol) => match variables.get(symbol) {
            Some(value) => (Ok(*value), rest),
            None => (Err(EvalError::VariableUnset(symbol.clone())), rest),
        },
        Token::Unary { apply, guard, .. } => {
            let (operand, rest) = eval(rest, variables);
            let operand = match operand {
                Ok(operand) => operand,
                Err(error) => return (Err(error), rest),
            };
            if let Some(message) = guard.and_then(|check| check(operand)) {
                return (Err(EvalError::GuardFailed(message)), rest);
            }
            (Ok(apply(operand)), rest)
        }
        Token::Binary { apply, guard, .. } => {
            let (rhs, rest) = eval(rest, variables);
            let rhs = match rhs {
                Ok(value) => value,
                Err(error) => return (Err(error), rest),
            };
            let (lhs, rest) = eval(rest, variables);
            let lhs = match lhs {
                Ok(value) => value,
                Err(error) => return (Err(error), rest),
            };
            if let Some(message) = guard.and_then(|check| check(rhs, lhs)) {
                return (Err(EvalError::GuardFailed(message)), rest);
            }
            (Ok(apply(rhs, lhs)), rest)
        }
    }
}
