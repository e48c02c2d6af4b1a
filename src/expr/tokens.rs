use super::error::EvalError;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// Characters an arithmetic string may hold once display glyphs are replaced.
    static ref ALLOWED_CHARS: Regex = Regex::new(r"^[0-9+\-*/().%]*$").unwrap();

    /// Any binary operator or percent sign.
    static ref OPERATOR: Regex = Regex::new(r"[+\-*/%]").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tok {
    Num(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(n) => write!(f, "{}", n),
            Tok::Plus => write!(f, "+"),
            Tok::Minus => write!(f, "-"),
            Tok::Star => write!(f, "*"),
            Tok::Slash => write!(f, "/"),
            Tok::Percent => write!(f, "%"),
            Tok::LPar => write!(f, "("),
            Tok::RPar => write!(f, ")"),
        }
    }
}

/// A token and the character offset it starts at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub tok: Tok,
    pub pos: usize,
}

/// Replace the keypad's display glyphs with their ASCII operators.
pub fn normalize_glyphs(display: &str) -> String {
    display
        .chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '−' => '-',
            _ => c,
        })
        .collect()
}

/// True when an already-normalized string holds at least one operator.
pub fn has_operator(normalized: &str) -> bool {
    OPERATOR.is_match(normalized)
}

/// Split a normalized arithmetic string into tokens.
///
/// Numbers are `12`, `12.5`, `.5` or `12.`. Whitespace and every other
/// character outside `[0-9+\-*/().%]` are rejected.
pub fn tokenize(s: &str) -> Result<Vec<Token>, EvalError> {
    if !ALLOWED_CHARS.is_match(s) {
        let (pos, c) = s
            .chars()
            .enumerate()
            .find(|(_, c)| !is_allowed(*c))
            .unwrap_or((0, '?'));
        return Err(EvalError::InvalidCharacter(c, pos));
    }

    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let tok = match c {
            '+' => Tok::Plus,
            '-' => Tok::Minus,
            '*' => Tok::Star,
            '/' => Tok::Slash,
            '%' => Tok::Percent,
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            _ => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let text: String = chars[start..i].iter().collect();
                out.push(Token {
                    tok: Tok::Num(parse_number(&text)?),
                    pos: start,
                });
                continue;
            }
        };
        out.push(Token { tok, pos: i });
        i += 1;
    }

    Ok(out)
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || "+-*/().%".contains(c)
}

fn parse_number(text: &str) -> Result<f64, EvalError> {
    if text.matches('.').count() > 1 || !text.chars().any(|c| c.is_ascii_digit()) {
        return Err(EvalError::MalformedNumber(text.to_string()));
    }
    text.parse::<f64>()
        .map_err(|_| EvalError::MalformedNumber(text.to_string()))
}

/// Render tokens back to a compact arithmetic string (debug output).
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.tok.to_string()).collect()
}
