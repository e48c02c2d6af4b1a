// Unit conversion through a per-category base-unit pivot.
// Unit codes only exist inside their category's table, so a length unit can
// never be looked up while converting weights.

pub mod converter;
pub mod error;
pub mod table;

#[cfg(test)]
mod tests;

pub use converter::*;
pub use error::ConvertError;
pub use table::*;
