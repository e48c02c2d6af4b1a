use crate::convert::error::ConvertError;
use crate::convert::table::{default_table, Category, ConversionTable};
use crate::expr::round_decimals;
use tracing::debug;

/// Decimal places kept in a converted value.
pub const CONVERSION_DECIMALS: i32 = 4;

/// Convert with the built-in table.
pub fn convert(value: f64, category: Category, from: &str, to: &str) -> Result<f64, ConvertError> {
    default_table().convert(value, category, from, to)
}

impl ConversionTable {
    /// `value * factor(from) / factor(to)`, rounded to four decimals.
    ///
    /// Converting a unit to itself returns `value` untouched.
    pub fn convert(
        &self,
        value: f64,
        category: Category,
        from: &str,
        to: &str,
    ) -> Result<f64, ConvertError> {
        if !value.is_finite() {
            return Err(ConvertError::InvalidAmount(value.to_string()));
        }

        let units = self
            .get(category)
            .ok_or_else(|| ConvertError::UnknownCategory(category.to_string()))?;
        let lookup = |code: &str| {
            units.factor(code).ok_or_else(|| {
                debug!(%category, unit = code, "unit not in category table");
                ConvertError::InvalidUnit {
                    category: category.to_string(),
                    unit: code.to_string(),
                }
            })
        };
        let from_factor = lookup(from)?;
        let to_factor = lookup(to)?;

        if from == to {
            return Ok(value);
        }

        let base_value = value * from_factor;
        Ok(round_decimals(base_value / to_factor, CONVERSION_DECIMALS))
    }
}
