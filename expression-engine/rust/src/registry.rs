use std::collections::HashMap;

use crate::Token;

/// The fixed operator and constant table. Seeded once at engine
/// construction; symbols are unique keys and nothing is ever removed.
pub(crate) struct Registry {
    ops: HashMap<&'static str, Token>,
}

impl Registry {
    pub(crate) fn standard() -> Self {
        let mut ops = HashMap::new();
        for token in [
            Token::Binary {
                symbol: "×",
                precedence: 2,
                apply: |rhs, lhs| lhs * rhs,
                guard: None,
            },
            Token::Binary {
                symbol: "÷",
                precedence: 2,
                apply: |rhs, lhs| lhs / rhs,
                guard: Some(|divisor, _| (divisor == 0.0).then_some("division by zero")),
            },
            Token::Binary {
                symbol: "+",
                precedence: 1,
                apply: |rhs, lhs| lhs + rhs,
                guard: None,
            },
            Token::Binary {
                symbol: "−",
                precedence: 1,
                apply: |rhs, lhs| lhs - rhs,
                guard: None,
            },
            Token::Unary {
                symbol: "√",
                apply: f64::sqrt,
                guard: Some(|operand| {
                    (operand < 0.0).then_some("square root of a negative number")
                }),
            },
            Token::Unary {
                symbol: "sin",
                apply: f64::sin,
                guard: None,
            },
            Token::Unary {
                symbol: "cos",
                apply: f64::cos,
                guard: None,
            },
            Token::Unary {
                symbol: "±",
                apply: |operand| -operand,
                guard: None,
            },
            Token::Constant("π", std::f64::consts::PI),
        ] {
            learn(&mut ops, token);
        }
        Self { ops }
    }

    pub(crate) fn lookup(&self, symbol: &str) -> Option<&Token> {
        self.ops.get(symbol)
    }
}

fn learn(ops: &mut HashMap<&'static str, Token>, token: Token) {
    let symbol = match &token {
        Token::Constant(symbol, _) => *symbol,
        Token::Unary { symbol, .. } => *symbol,
        Token::Binary { symbol, .. } => *symbol,
        // operands and variable references are pushed by callers, not registered
        Token::Operand(_) | Token::Variable(_) => return,
    };
    ops.insert(symbol, token);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_knows_every_symbol() {
        let registry = Registry::standard();
        for symbol in ["×", "÷", "+", "−", "√", "sin", "cos", "±", "π"] {
            assert!(registry.lookup(symbol).is_some(), "missing {symbol}");
        }
    }

    #[test]
    fn lookup_of_unknown_symbol_is_none() {
        let registry = Registry::standard();
        assert!(registry.lookup("%").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn multiplicative_operators_outrank_additive_ones() {
        let registry = Registry::standard();
        let rank = |symbol: &str| registry.lookup(symbol).unwrap().precedence();
        assert_eq!(rank("×"), rank("÷"));
        assert_eq!(rank("+"), rank("−"));
        assert!(rank("×") > rank("+"));
    }

    #[test]
    fn non_binary_tokens_never_need_parenthesizing() {
        let registry = Registry::standard();
        assert_eq!(Token::MAX_PRECEDENCE, registry.lookup("√").unwrap().precedence());
        assert_eq!(Token::MAX_PRECEDENCE, registry.lookup("π").unwrap().precedence());
    }
}
