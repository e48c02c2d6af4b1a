use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    UnknownCategory(String),
    InvalidUnit { category: String, unit: String },
    InvalidAmount(String),
    InvalidTable(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnknownCategory(name) => write!(f, "Unknown category: {}", name),
            ConvertError::InvalidUnit { category, unit } => {
                write!(f, "Invalid unit '{}' for category {}", unit, category)
            }
            ConvertError::InvalidAmount(msg) => write!(f, "Invalid amount: {}", msg),
            ConvertError::InvalidTable(msg) => write!(f, "Invalid conversion table: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {}
