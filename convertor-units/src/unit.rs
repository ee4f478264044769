//! Unit representation with display metadata and conversion formula

use std::fmt;
use serde::{Serialize, Deserialize};
use convertor_core::{Category, Conversion};

/// Represents one unit: its labels, its category, and how it maps to the
/// category's base unit.
///
/// Definitions are immutable once built. The registry hands out shared
/// references only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    key: String,
    name: String,
    plural: String,
    symbol: String,
    category: Category,
    conversion: Conversion,
}

impl UnitDefinition {
    /// Create a new unit definition
    pub fn new(
        key: &str,
        name: &str,
        plural: &str,
        symbol: &str,
        category: Category,
        conversion: Conversion,
    ) -> Self {
        UnitDefinition {
            key: key.to_uppercase(),
            name: name.to_string(),
            plural: plural.to_string(),
            symbol: symbol.to_string(),
            category,
            conversion,
        }
    }

    /// Canonical (uppercase) registry key, e.g. "KM"
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Singular display label, e.g. "Degree Celsius"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plural display label, e.g. "Degrees Celsius"
    pub fn plural(&self) -> &str {
        &self.plural
    }

    /// Short symbol, e.g. "°C"
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn conversion(&self) -> Conversion {
        self.conversion
    }

    /// Last word of the name ("Celsius" for "Degree Celsius"), used in menus
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or(&self.name)
    }

    /// Label agreeing in number with `value`
    pub fn label(&self, value: f64) -> &str {
        if value.abs() == 1.0 {
            &self.name
        } else {
            &self.plural
        }
    }

    /// Check if this is the base unit of its category
    pub fn is_base(&self) -> bool {
        self.conversion.is_identity()
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &UnitDefinition) -> bool {
        self.category == other.category
    }

    /// Convert a value in this unit to the category's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        self.conversion.to_base(value)
    }

    /// Convert a value in the category's base unit to this unit
    pub fn from_base(&self, base: f64) -> f64 {
        self.conversion.from_base(base)
    }

    pub(crate) fn rekey(mut self, key: String) -> Self {
        self.key = key;
        self
    }
}

impl fmt::Display for UnitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
