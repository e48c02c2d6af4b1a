// Recursive-descent evaluation over percent-resolved tokens.
//
// expr    := term (('+' | '-') term)*
// term    := unary (('*' | '/') unary)*
// unary   := ('+' | '-') unary | primary
// primary := number | '(' expr ')'

use super::error::EvalError;
use super::tokens::{Tok, Token};

/// Deepest nesting of parentheses and unary signs accepted.
pub const MAX_DEPTH: usize = 256;

pub fn evaluate_tokens(tokens: &[Token]) -> Result<f64, EvalError> {
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser {
        tokens,
        index: 0,
        depth: 0,
    };
    let value = parser.expr()?;

    if let Some(token) = parser.peek() {
        return Err(match token.tok {
            Tok::RPar => EvalError::UnbalancedParens,
            tok => EvalError::UnexpectedToken(tok.to_string(), token.pos),
        });
    }

    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(value)
}

struct Parser<'a> {
    tokens: &'a [Token],
    index: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.index);
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn nested<F>(&mut self, parse: F) -> Result<f64, EvalError>
    where
        F: FnOnce(&mut Self) -> Result<f64, EvalError>,
    {
        if self.depth >= MAX_DEPTH {
            return Err(EvalError::TooDeep(MAX_DEPTH));
        }
        self.depth += 1;
        let value = parse(self);
        self.depth -= 1;
        value
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some(token) = self.peek() {
            match token.tok {
                Tok::Plus => {
                    self.index += 1;
                    value += self.term()?;
                }
                Tok::Minus => {
                    self.index += 1;
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.unary()?;
        while let Some(token) = self.peek() {
            match token.tok {
                Tok::Star => {
                    self.index += 1;
                    value *= self.unary()?;
                }
                Tok::Slash => {
                    self.index += 1;
                    let divisor = self.unary()?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, EvalError> {
        match self.peek().map(|t| t.tok) {
            Some(Tok::Minus) => {
                self.index += 1;
                Ok(-self.nested(Self::unary)?)
            }
            Some(Tok::Plus) => {
                self.index += 1;
                self.nested(Self::unary)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64, EvalError> {
        let token = self.advance().ok_or(EvalError::UnexpectedEnd)?;
        match token.tok {
            Tok::Num(n) => Ok(n),
            Tok::LPar => {
                let value = self.nested(Self::expr)?;
                match self.advance() {
                    Some(Token { tok: Tok::RPar, .. }) => Ok(value),
                    Some(other) => Err(EvalError::UnexpectedToken(
                        other.tok.to_string(),
                        other.pos,
                    )),
                    None => Err(EvalError::UnbalancedParens),
                }
            }
            tok => Err(EvalError::UnexpectedToken(tok.to_string(), token.pos)),
        }
    }
}
