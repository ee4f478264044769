//! Convertor Units - Unit registry and conversion
//!
//! Every unit normalizes to its category's base unit and back out to any
//! other unit of the same category.
//!
//! Categories:
//! - Length (METER, KM, MILE)
//! - Weight (KG, POUND, OUNCE)
//! - Temperature (CELSIUS, FAHRENHEIT, KELVIN)
//! - Pressure (PASCAL, BAR, ATM)
//!
//! The free functions below work on the shared [`STANDARD_UNITS`] table.
//! Build a [`UnitRegistry`] directly when you need an isolated or custom set
//! of units.

mod unit;
mod registry;
mod units;
mod limits;

pub use unit::UnitDefinition;
pub use registry::UnitRegistry;
pub use units::STANDARD_UNITS;
pub use limits::{LimitWarning, check_physical_limits, limit_warning};
pub use convertor_core::{Category, CategoryInfo, Conversion, ConversionError, RegistryError};

fn standard_units() -> &'static UnitRegistry {
    &STANDARD_UNITS
}

/// Convert `value` between two standard units
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    standard_units().convert(value, from, to)
}

/// Metadata of a standard unit
pub fn get_unit_info(key: &str) -> Result<&'static UnitDefinition, ConversionError> {
    standard_units().get_unit_info(key)
}

/// Standard unit keys in `category`, in menu order
pub fn keys_by_category(category: Category) -> Vec<&'static str> {
    standard_units().keys_by_category(category)
}

/// The four categories
pub fn list_categories() -> Vec<CategoryInfo> {
    standard_units().categories()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions() {
        assert_eq!(convert(1000.0, "meter", "km"), Ok(1.0));
        assert_eq!(get_unit_info("fahrenheit").unwrap().short_name(), "Fahrenheit");
        assert_eq!(keys_by_category(Category::Pressure), vec!["PASCAL", "BAR", "ATM"]);
        assert_eq!(list_categories().len(), 4);
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            convert(1.0, "NOTAUNIT", "METER"),
            Err(ConversionError::UnknownUnit("NOTAUNIT".to_string()))
        );
        assert!(get_unit_info("").is_err());
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UnitRegistry>();
    }
}
