use crate::convert::error::ConvertError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Area,
    Volume,
    Weight,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Area,
        Category::Volume,
        Category::Weight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Area => "area",
            Category::Volume => "volume",
            Category::Weight => "weight",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| ConvertError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UnitDef {
    pub code: String,
    pub label: String,
    /// Multiplier to the category's base unit.
    pub factor: f64,
}

impl UnitDef {
    fn new(code: &str, label: &str, factor: f64) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
            factor,
        }
    }
}

/// Units of one category, in display order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConversionCategory {
    pub base: String,
    pub units: Vec<UnitDef>,
}

impl ConversionCategory {
    pub fn unit(&self, code: &str) -> Option<&UnitDef> {
        self.units.iter().find(|u| u.code == code)
    }

    pub fn factor(&self, code: &str) -> Option<f64> {
        self.unit(code).map(|u| u.factor)
    }

    /// Checks the base unit is listed with a factor of exactly 1, every factor
    /// is finite and positive, and no code appears twice.
    pub fn validate(&self, category: Category) -> Result<(), ConvertError> {
        match self.factor(&self.base) {
            Some(f) if f == 1.0 => {}
            Some(f) => {
                return Err(ConvertError::InvalidTable(format!(
                    "{}: base unit '{}' has factor {}, expected 1",
                    category, self.base, f
                )))
            }
            None => {
                return Err(ConvertError::InvalidTable(format!(
                    "{}: base unit '{}' is not listed",
                    category, self.base
                )))
            }
        }

        for (i, unit) in self.units.iter().enumerate() {
            if !unit.factor.is_finite() || unit.factor <= 0.0 {
                return Err(ConvertError::InvalidTable(format!(
                    "{}: unit '{}' has invalid factor {}",
                    category, unit.code, unit.factor
                )));
            }
            if self.units[..i].iter().any(|u| u.code == unit.code) {
                return Err(ConvertError::InvalidTable(format!(
                    "{}: unit '{}' is listed twice",
                    category, unit.code
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConversionTable {
    categories: BTreeMap<Category, ConversionCategory>,
}

lazy_static! {
    static ref DEFAULT_TABLE: ConversionTable = ConversionTable::builtin();
}

/// The built-in table shared by every caller.
pub fn default_table() -> &'static ConversionTable {
    &DEFAULT_TABLE
}

impl Default for ConversionTable {
    fn default() -> Self {
        default_table().clone()
    }
}

impl ConversionTable {
    fn builtin() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(
            Category::Length,
            ConversionCategory {
                base: "m".to_string(),
                units: vec![
                    UnitDef::new("mm", "Millimeter", 0.001),
                    UnitDef::new("cm", "Centimeter", 0.01),
                    UnitDef::new("m", "Meter", 1.0),
                    UnitDef::new("in", "Inch", 0.0254),
                    UnitDef::new("ft", "Feet", 0.3048),
                ],
            },
        );
        categories.insert(
            Category::Area,
            ConversionCategory {
                base: "sqm".to_string(),
                units: vec![
                    UnitDef::new("sqm", "Square Meter", 1.0),
                    UnitDef::new("sqft", "Square Feet", 0.092903),
                    UnitDef::new("sqin", "Square Inch", 0.00064516),
                ],
            },
        );
        categories.insert(
            Category::Volume,
            ConversionCategory {
                base: "l".to_string(),
                units: vec![
                    UnitDef::new("l", "Liter", 1.0),
                    UnitDef::new("ml", "Milliliter", 0.001),
                    UnitDef::new("m3", "Cubic Meter", 1000.0),
                    UnitDef::new("ft3", "Cubic Feet", 28.3168),
                ],
            },
        );
        categories.insert(
            Category::Weight,
            ConversionCategory {
                base: "kg".to_string(),
                units: vec![
                    UnitDef::new("g", "Gram", 0.001),
                    UnitDef::new("kg", "Kilogram", 1.0),
                    UnitDef::new("ton", "Ton", 1000.0),
                    UnitDef::new("lb", "Pound", 0.453592),
                ],
            },
        );
        Self { categories }
    }

    pub fn get(&self, category: Category) -> Option<&ConversionCategory> {
        self.categories.get(&category)
    }

    /// Replace one category after validating it.
    pub fn set(
        &mut self,
        category: Category,
        table: ConversionCategory,
    ) -> Result<(), ConvertError> {
        table.validate(category)?;
        self.categories.insert(category, table);
        Ok(())
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    /// Initial from/to selection for a category: its first two units.
    pub fn default_pair(&self, category: Category) -> Option<(&str, &str)> {
        let units = &self.get(category)?.units;
        let from = units.first()?;
        let to = units.get(1).unwrap_or(from);
        Some((from.code.as_str(), to.code.as_str()))
    }
}
