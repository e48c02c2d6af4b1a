use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TaxError {
    InvalidAmount(String),
    InvalidRate(f64),
}

impl fmt::Display for TaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxError::InvalidAmount(s) => write!(f, "Invalid amount: {}", s),
            TaxError::InvalidRate(r) => write!(f, "Invalid GST rate: {} (expected 0-100)", r),
        }
    }
}

impl std::error::Error for TaxError {}
