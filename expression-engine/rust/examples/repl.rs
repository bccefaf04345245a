//! Line-oriented driver for the expression engine, standing in for the UI
//! layer: each line pushes one token (or runs one editing command) and the
//! running description plus result are printed back.
//!
//! Commands: a number pushes an operand, `var <name>` pushes a variable
//! reference, `set <name> <value>` binds a variable, `pop` and `clear` edit
//! the stack, anything else is tried as an operator symbol (e.g. `+`, `×`,
//! `√`, `π`).

use std::io::{self, BufRead};

use anyhow::Result;
use expression_engine::ExpressionEngine;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut engine = ExpressionEngine::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else { continue };

        match word {
            "pop" => engine.pop_last(),
            "clear" => {
                engine.clear_stack();
                engine.clear_variables();
            }
            "set" => {
                if let (Some(symbol), Some(value)) = (words.next(), words.next()) {
                    engine.set_variable(symbol, value.parse()?);
                }
            }
            "var" => {
                if let Some(symbol) = words.next() {
                    engine.push_variable(symbol);
                }
            }
            _ => {
                if let Ok(value) = word.parse::<f64>() {
                    engine.push_operand(value);
                } else {
                    engine.perform_operation(word);
                }
            }
        }

        match (engine.evaluate(), engine.evaluate_and_report_error()) {
            (Some(result), _) => println!("{} {result}", engine.description()),
            (None, Some(message)) => println!("{} {message}", engine.description()),
            (None, None) => println!("{}", engine.description()),
        }
    }

    Ok(())
}
