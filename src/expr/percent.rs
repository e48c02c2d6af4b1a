//! Percent resolution.
//!
//! Runs between tokenizing and parsing and removes every `%` token:
//!
//! - `a + b%` / `a - b%` becomes `a + (a*b/100)` / `a - (a*b/100)`, where `a`
//!   is the number literal directly before the operator (the last operand
//!   before the last operator, not the running total);
//! - any other `b%` becomes `b/100`.
//!
//! A number produced by a percent never serves as `a` and cannot take a
//! second `%`.

use super::error::EvalError;
use super::tokens::{Tok, Token};

pub fn resolve_percent(tokens: &[Token]) -> Result<Vec<Token>, EvalError> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    // Parallel to `out`: true for numbers that came out of a percent.
    let mut derived: Vec<bool> = Vec::with_capacity(tokens.len());

    for token in tokens {
        if token.tok != Tok::Percent {
            out.push(*token);
            derived.push(false);
            continue;
        }

        let percent = match (out.last(), derived.last()) {
            (Some(Token { tok: Tok::Num(b), .. }), Some(false)) => *b,
            _ => return Err(EvalError::MisplacedPercent(token.pos)),
        };
        let operand = out.pop().map(|t| t.pos).unwrap_or(token.pos);
        derived.pop();

        let n = out.len();
        let base = out.get(n.wrapping_sub(2)).map(|t| t.tok);
        let op = out.last().map(|t| t.tok);
        let value = match (base, op) {
            (Some(Tok::Num(a)), Some(Tok::Plus | Tok::Minus)) if !derived[n - 2] => {
                a * percent / 100.0
            }
            _ => percent / 100.0,
        };

        out.push(Token {
            tok: Tok::Num(value),
            pos: operand,
        });
        derived.push(true);
    }

    Ok(out)
}
