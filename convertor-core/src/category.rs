//! Measurement categories
//!
//! Every unit belongs to exactly one category, and conversions are only
//! defined between units of the same category. Each category normalizes
//! through a fixed base unit.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Absolute zero in degrees Celsius, the temperature base unit
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// A measurement category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Pressure,
}

impl Category {
    /// All categories, in menu order
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Pressure,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Pressure => "Pressure",
        }
    }

    /// Registry key of the unit every conversion in this category passes through
    pub fn base_unit(&self) -> &'static str {
        match self {
            Category::Length => "METER",
            Category::Weight => "KG",
            Category::Temperature => "CELSIUS",
            Category::Pressure => "PASCAL",
        }
    }

    /// Smallest physically meaningful value, in base units.
    ///
    /// Only consulted by advisory checks; conversion never clamps.
    pub fn physical_minimum(&self) -> f64 {
        match self {
            Category::Temperature => ABSOLUTE_ZERO_CELSIUS,
            _ => 0.0,
        }
    }

    /// Hard physical lower bound, if the category has one.
    ///
    /// Temperature is bounded by absolute zero. The zero floor of the other
    /// categories is a measurement convention and is not reported here.
    pub fn lower_bound(&self) -> Option<f64> {
        match self {
            Category::Temperature => Some(ABSOLUTE_ZERO_CELSIUS),
            _ => None,
        }
    }

    /// 1-based position in the interactive menu
    pub fn menu_option(&self) -> usize {
        match self {
            Category::Length => 1,
            Category::Weight => 2,
            Category::Temperature => 3,
            Category::Pressure => 4,
        }
    }

    /// Look up a category by its 1-based menu position
    pub fn from_menu_option(option: usize) -> Option<Category> {
        option
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
    }

    /// Summary record used for listings
    pub fn info(&self) -> CategoryInfo {
        CategoryInfo {
            category: *self,
            name: self.display_name().to_string(),
            base_unit: self.base_unit().to_string(),
            lower_bound: self.lower_bound(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a category name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}' (expected length, weight, temperature or pressure)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(Category::Length),
            "weight" | "mass" => Ok(Category::Weight),
            "temperature" | "temp" => Ok(Category::Temperature),
            "pressure" => Ok(Category::Pressure),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Public description of a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub category: Category,
    /// Display name (e.g., "Temperature")
    pub name: String,
    /// Base unit key (e.g., "CELSIUS")
    pub base_unit: String,
    /// Physical lower bound in base units (temperature only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<f64>,
}
