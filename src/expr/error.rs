use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    Empty,
    InvalidCharacter(char, usize),
    MalformedNumber(String),
    MisplacedPercent(usize),
    UnexpectedToken(String, usize),
    UnexpectedEnd,
    UnbalancedParens,
    DivisionByZero,
    NonFinite,
    TooDeep(usize),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Empty => write!(f, "Expression is empty"),
            EvalError::InvalidCharacter(c, pos) => {
                write!(f, "Invalid character '{}' at position {}", c, pos)
            }
            EvalError::MalformedNumber(s) => write!(f, "Malformed number: {}", s),
            EvalError::MisplacedPercent(pos) => {
                write!(f, "Percent sign at position {} does not follow a number", pos)
            }
            EvalError::UnexpectedToken(tok, pos) => {
                write!(f, "Unexpected '{}' at position {}", tok, pos)
            }
            EvalError::UnexpectedEnd => write!(f, "Unexpected end of expression"),
            EvalError::UnbalancedParens => write!(f, "Unbalanced parentheses"),
            EvalError::DivisionByZero => write!(f, "Division by zero"),
            EvalError::NonFinite => write!(f, "Result is not a finite number"),
            EvalError::TooDeep(limit) => {
                write!(f, "Expression nests deeper than {} levels", limit)
            }
        }
    }
}

impl std::error::Error for EvalError {}
