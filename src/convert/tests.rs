#[cfg(test)]
mod tests {
    use super::super::converter::convert;
    use super::super::error::ConvertError;
    use super::super::table::{default_table, Category};

    #[test]
    fn test_length_conversions() {
        assert_eq!(convert(1.0, Category::Length, "m", "cm"), Ok(100.0));
        assert_eq!(convert(12.0, Category::Length, "in", "ft"), Ok(1.0));
        assert_eq!(convert(1.0, Category::Length, "ft", "cm"), Ok(30.48));
        assert_eq!(convert(1.0, Category::Length, "m", "ft"), Ok(3.2808));
    }

    #[test]
    fn test_weight_conversions() {
        assert_eq!(convert(1.0, Category::Weight, "kg", "ton"), Ok(0.001));
        assert_eq!(convert(1.0, Category::Weight, "lb", "g"), Ok(453.592));
        assert_eq!(convert(2500.0, Category::Weight, "g", "kg"), Ok(2.5));
    }

    #[test]
    fn test_area_and_volume() {
        assert_eq!(convert(1.0, Category::Area, "sqft", "sqin"), Ok(143.9999));
        assert_eq!(convert(1.0, Category::Volume, "m3", "l"), Ok(1000.0));
        assert_eq!(convert(500.0, Category::Volume, "ml", "l"), Ok(0.5));
    }

    #[test]
    fn test_rounds_to_four_decimals() {
        let v = convert(1.0, Category::Length, "mm", "ft").unwrap();
        assert_eq!(v, 0.0033);
        let v = convert(1.0, Category::Area, "sqin", "sqm").unwrap();
        assert_eq!(v, 0.0006);
    }

    #[test]
    fn test_self_conversion_is_identity() {
        let table = default_table();
        for category in Category::ALL {
            for unit in &table.get(category).unwrap().units {
                for v in [0.0, 1.0, 12.5, -3.75, 0.123456789, 1e9] {
                    assert_eq!(
                        convert(v, category, &unit.code, &unit.code),
                        Ok(v),
                        "{} {}",
                        category,
                        unit.code
                    );
                }
            }
        }
    }

    #[test]
    fn test_unknown_unit_is_rejected() {
        assert_eq!(
            convert(1.0, Category::Length, "m", "parsec"),
            Err(ConvertError::InvalidUnit {
                category: "length".to_string(),
                unit: "parsec".to_string(),
            })
        );
    }

    #[test]
    fn test_cross_category_units_are_rejected() {
        // kg exists, but only in the weight table.
        assert_eq!(
            convert(1.0, Category::Length, "kg", "m"),
            Err(ConvertError::InvalidUnit {
                category: "length".to_string(),
                unit: "kg".to_string(),
            })
        );
        assert!(convert(1.0, Category::Weight, "kg", "kg").is_ok());
        assert!(convert(1.0, Category::Area, "m", "m").is_err());
    }

    #[test]
    fn test_non_finite_value() {
        assert!(matches!(
            convert(f64::NAN, Category::Length, "m", "cm"),
            Err(ConvertError::InvalidAmount(_))
        ));
    }
}
