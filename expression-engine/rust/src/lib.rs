use std::collections::HashMap;
use std::fmt;

use tracing::debug;

pub mod engine;
mod registry;

pub use engine::EvalError;

use registry::Registry;

/// Numeric function applied by a unary operator.
pub type UnaryFn = fn(f64) -> f64;
/// Numeric function applied by a binary operator. Arguments arrive in pop
/// order: the first is the operand popped first (the right-hand side of the
/// rendered expression), the second the operand popped after it (the
/// left-hand side).
pub type BinaryFn = fn(f64, f64) -> f64;
/// Checks a unary operand before the operator runs; a returned message
/// aborts evaluation with that message.
pub type UnaryGuard = fn(f64) -> Option<&'static str>;
/// Checks binary operands (in pop order) before the operator runs.
pub type BinaryGuard = fn(f64, f64) -> Option<&'static str>;

/// One element of the operand stack.
#[derive(Clone, Debug)]
pub enum Token {
    /// A literal number.
    Operand(f64),
    /// A named immutable constant, e.g. π.
    Constant(&'static str, f64),
    /// A reference resolved against the engine's variable table at
    /// evaluation time. An unbound symbol is an evaluation error, never 0.
    Variable(String),
    Unary {
        symbol: &'static str,
        apply: UnaryFn,
        guard: Option<UnaryGuard>,
    },
    Binary {
        symbol: &'static str,
        precedence: i32,
        apply: BinaryFn,
        guard: Option<BinaryGuard>,
    },
}

impl Token {
    /// Rank of everything that never needs parenthesizing when rendered.
    pub(crate) const MAX_PRECEDENCE: i32 = i32::MAX;

    pub fn precedence(&self) -> i32 {
        match self {
            Token::Binary { precedence, .. } => *precedence,
            _ => Self::MAX_PRECEDENCE,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(value) => write!(f, "{value}"),
            Token::Constant(symbol, _) => f.write_str(symbol),
            Token::Variable(symbol) => f.write_str(symbol),
            Token::Unary { symbol, .. } => f.write_str(symbol),
            Token::Binary { symbol, .. } => f.write_str(symbol),
        }
    }
}

/// A postfix expression engine: callers push operands, variable references
/// and operator symbols, and read back a numeric result plus an infix
/// rendering of everything still pending on the stack.
///
/// Every mutation re-evaluates the whole stack from scratch; there is no
/// cached state, so the same stack can be re-evaluated after the variable
/// table changes and yield a different result.
pub struct ExpressionEngine {
    stack: Vec<Token>,
    registry: Registry,
    variables: HashMap<String, f64>,
}

impl Default for ExpressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionEngine {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            registry: Registry::standard(),
            variables: HashMap::new(),
        }
    }

    /// Pushes a literal number and returns a full re-evaluation.
    pub fn push_operand(&mut self, value: f64) -> Option<f64> {
        self.stack.push(Token::Operand(value));
        self.evaluate()
    }

    /// Pushes a variable reference and returns a full re-evaluation.
    pub fn push_variable(&mut self, symbol: impl Into<String>) -> Option<f64> {
        self.stack.push(Token::Variable(symbol.into()));
        self.evaluate()
    }

    /// Pushes the operator or constant registered under `symbol`. An
    /// unrecognized symbol leaves the stack untouched; either way the return
    /// value is a full re-evaluation, so callers must check it rather than
    /// assume a rejected symbol is signaled.
    pub fn perform_operation(&mut self, symbol: &str) -> Option<f64> {
        if let Some(operation) = self.registry.lookup(symbol) {
            self.stack.push(operation.clone());
        }
        self.evaluate()
    }

    /// Removes the most recently pushed token. No-op on an empty stack.
    pub fn pop_last(&mut self) {
        self.stack.pop();
    }

    pub fn clear_stack(&mut self) {
        self.stack.clear();
    }

    /// Binds `symbol` in the variable table. The stack is untouched, but any
    /// `Variable` token already on it resolves to the new value from now on.
    pub fn set_variable(&mut self, symbol: impl Into<String>, value: f64) {
        self.variables.insert(symbol.into(), value);
    }

    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    /// Evaluates the whole stack tail-first. `None` both for an empty stack
    /// and for any evaluation error; use [`Self::evaluate_and_report_error`]
    /// to tell the two apart.
    pub fn evaluate(&self) -> Option<f64> {
        if self.stack.is_empty() {
            return None;
        }
        let (result, remainder) = engine::eval::eval(&self.stack, &self.variables);
        debug!(?result, unconsumed = remainder.len(), "evaluated operand stack");
        result.ok()
    }

    /// `Some(message)` exactly when evaluation failed; `None` on success and
    /// on an empty stack (absence of a value is not an error).
    pub fn evaluate_and_report_error(&self) -> Option<String> {
        if self.stack.is_empty() {
            return None;
        }
        let (result, _) = engine::eval::eval(&self.stack, &self.variables);
        result.err().map(|error| error.to_string())
    }

    /// Infix rendering of every expression pending on the stack, oldest
    /// first, suffixed `" ="`. Never fails; incomplete expressions render
    /// with `"?"` placeholders and an empty stack renders as `" "`.
    pub fn description(&self) -> String {
        engine::describe::description(&self.stack)
    }
}
