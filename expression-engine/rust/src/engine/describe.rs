use tinyvec::tiny_vec;

use crate::Token;

/// Renders every expression pending on the stack. Segments come out of
/// [`describe`] newest-first, so the list is joined in reverse to read
/// oldest-first, then suffixed `" ="` to mark it pending. An empty stack
/// renders as a single blank placeholder with no suffix.
pub(crate) fn description(ops: &[Token]) -> String {
    if ops.is_empty() {
        return " ".to_owned();
    }

    let mut segments = tiny_vec!([String; 4]);
    let mut rest = ops;
    while !rest.is_empty() {
        let (text, remainder, _) = describe(rest);
        segments.push(text);
        rest = remainder;
    }

    let mut out = String::new();
    for (i, segment) in segments.iter().rev().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(segment);
    }
    out.push_str(" =");
    out
}

/// Renders one expression off the tail of `ops` as infix text, returning the
/// unconsumed head and the precedence of the outermost operator so an
/// enclosing binary operator can decide whether to parenthesize it.
pub(crate) fn describe(ops: &[Token]) -> (String, &[Token], i32) {
    let Some((token, rest)) = ops.split_last() else {
        return ("?".to_owned(), ops, Token::MAX_PRECEDENCE);
    };

    match token {
        Token::Operand(value) => (format!("{value}"), rest, Token::MAX_PRECEDENCE),
        Token::Unary { symbol, .. } => {
            let (inner, rest, _) = describe(rest);
            (format!("{symbol}({inner})"), rest, Token::MAX_PRECEDENCE)
        }
        Token::Binary {
            symbol, precedence, ..
        } => {
            let (rhs, rest, rhs_precedence) = describe(rest);
            let rhs = parenthesized_if(rhs, rhs_precedence < *precedence);
            let (lhs, rest, lhs_precedence) = describe(rest);
            let lhs = parenthesized_if(lhs, lhs_precedence < *precedence);
            (format!("{lhs} {symbol} {rhs}"), rest, *precedence)
        }
        // constants and variable references render as their bare symbol
        _ => (token.to_string(), rest, token.precedence()),
    }
}

fn parenthesized_if(text: String, wrap: bool) -> String {
    if wrap {
        format!("({text})")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use crate::ExpressionEngine;

    #[test]
    fn lower_precedence_subtree_is_parenthesized() {
        let mut engine = ExpressionEngine::new();
        engine.push_operand(2.0);
        engine.push_operand(3.0);
        engine.perform_operation("+");
        engine.push_operand(4.0);
        engine.perform_operation("×");
        assert_eq!("(2 + 3) × 4 =", engine.description());
    }

    #[test]
    fn tighter_binding_right_subtree_needs_no_parens() {
        let mut engine = ExpressionEngine::new();
        engine.push_operand(2.0);
        engine.push_operand(3.0);
        engine.push_operand(4.0);
        engine.perform_operation("×");
        engine.perform_operation("+");
        assert_eq!("2 + 3 × 4 =", engine.description());
    }

    #[test]
    fn equal_precedence_needs_no_parens() {
        let mut engine = ExpressionEngine::new();
        engine.push_operand(6.0);
        engine.push_operand(2.0);
        engine.perform_operation("÷");
        engine.push_operand(3.0);
        engine.perform_operation("×");
        assert_eq!("6 ÷ 2 × 3 =", engine.description());
    }

    #[test]
    fn unary_operators_render_function_call_style() {
        let mut engine = ExpressionEngine::new();
        engine.push_operand(4.0);
        engine.perform_operation("√");
        assert_eq!("√(4) =", engine.description());

        let mut engine = ExpressionEngine::new();
        engine.push_variable("x");
        engine.perform_operation("cos");
        assert_eq!("cos(x) =", engine.description());
    }

    #[test]
    fn constants_render_as_their_symbol() {
        let mut engine = ExpressionEngine::new();
        engine.perform_operation("π");
        engine.perform_operation("cos");
        assert_eq!("cos(π) =", engine.description());
    }

    #[test]
    fn operands_render_compactly() {
        let mut engine = ExpressionEngine::new();
        engine.push_operand(4.0);
        engine.push_operand(3.5);
        engine.perform_operation("+");
        assert_eq!("4 + 3.5 =", engine.description());
    }

    #[test]
    fn missing_operand_renders_as_placeholder() {
        let mut engine = ExpressionEngine::new();
        engine.push_operand(3.0);
        engine.perform_operation("+");
        assert_eq!("? + 3 =", engine.description());
    }

    #[test]
    fn several_pending_expressions_list_oldest_first() {
        let mut engine = ExpressionEngine::new();
        engine.push_operand(1.0);
        engine.push_operand(2.0);
        engine.push_operand(3.0);
        engine.perform_operation("+");
        assert_eq!("1, 2 + 3 =", engine.description());
    }

    #[test]
    fn description_is_idempotent() {
        let mut engine = ExpressionEngine::new();
        engine.push_operand(2.0);
        engine.push_operand(3.0);
        engine.perform_operation("×");
        assert_eq!(engine.description(), engine.description());
    }

    #[test]
    fn empty_stack_renders_as_blank_placeholder() {
        let engine = ExpressionEngine::new();
        assert_eq!(" ", engine.description());
    }
}
