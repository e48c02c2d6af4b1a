pub mod error;
pub mod evaluator;
pub mod format;
pub mod parser;
pub mod percent;
pub mod tokens;


pub use error::*;
pub use evaluator::*;
pub use format::{format_number, round_decimals, round_significant};
