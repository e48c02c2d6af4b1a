use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Glyph written to the display.
    pub fn glyph(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '−',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    DoubleZero,
    Decimal,
    Operator(Operator),
    Percent,
    LParen,
    RParen,
    Clear,
    Backspace,
    Equals,
}

impl Key {
    /// Text appended to the display, for keys that append.
    pub fn text(&self) -> Option<String> {
        match self {
            Key::Digit(d) => Some(d.to_string()),
            Key::DoubleZero => Some("00".to_string()),
            Key::Decimal => Some(".".to_string()),
            Key::Operator(op) => Some(op.glyph().to_string()),
            Key::Percent => Some("%".to_string()),
            Key::LParen => Some("(".to_string()),
            Key::RParen => Some(")".to_string()),
            Key::Clear | Key::Backspace | Key::Equals => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Clear => write!(f, "C"),
            Key::Backspace => write!(f, "back"),
            Key::Equals => write!(f, "="),
            _ => write!(f, "{}", self.text().unwrap_or_default()),
        }
    }
}

impl FromStr for Key {
    type Err = String;

    /// Accepts keypad labels and their ASCII spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.trim() {
            "00" => Key::DoubleZero,
            "." => Key::Decimal,
            "+" => Key::Operator(Operator::Add),
            "-" | "−" => Key::Operator(Operator::Subtract),
            "*" | "×" | "x" => Key::Operator(Operator::Multiply),
            "/" | "÷" => Key::Operator(Operator::Divide),
            "%" => Key::Percent,
            "(" => Key::LParen,
            ")" => Key::RParen,
            "C" | "c" | "AC" => Key::Clear,
            "back" | "⌫" => Key::Backspace,
            "=" => Key::Equals,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(d), None) if d.is_ascii_digit() => Key::Digit(d),
                    _ => return Err(format!("Unknown key: '{}'", other)),
                }
            }
        };
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        assert_eq!("7".parse::<Key>(), Ok(Key::Digit('7')));
        assert_eq!("00".parse::<Key>(), Ok(Key::DoubleZero));
        assert_eq!("×".parse::<Key>(), Ok(Key::Operator(Operator::Multiply)));
        assert_eq!("-".parse::<Key>(), Ok(Key::Operator(Operator::Subtract)));
        assert_eq!("back".parse::<Key>(), Ok(Key::Backspace));
        assert_eq!("=".parse::<Key>(), Ok(Key::Equals));
        assert!("77".parse::<Key>().is_err());
        assert!("sin".parse::<Key>().is_err());
    }

    #[test]
    fn test_key_text_uses_display_glyphs() {
        assert_eq!(
            Key::Operator(Operator::Subtract).text(),
            Some("−".to_string())
        );
        assert_eq!(Key::Operator(Operator::Divide).to_string(), "÷");
        assert_eq!(Key::Equals.text(), None);
    }
}
