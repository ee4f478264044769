//! Conversion formulas between a unit and its category's base unit
//!
//! Formulas are plain data rather than closures, so a unit table can be
//! printed, serialized and tested without building a registry. The inverse
//! direction is derived from the same parameters, which keeps every unit's
//! `from_base(to_base(x))` round trip consistent.

use serde::{Serialize, Deserialize};

/// How a quantity in some unit maps onto the category's base unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Conversion {
    /// The unit is the base unit
    #[default]
    Identity,
    /// base = value * factor
    Linear { factor: f64 },
    /// base = (value - zero) * scale
    ///
    /// `zero` is the reading, in this unit, that corresponds to base zero
    /// (32 for Fahrenheit against Celsius).
    Affine { scale: f64, zero: f64 },
}

impl Conversion {
    /// Proportional conversion
    pub fn linear(factor: f64) -> Self {
        Conversion::Linear { factor }
    }

    /// Conversion with a shifted zero point (temperature scales)
    pub fn affine(scale: f64, zero: f64) -> Self {
        Conversion::Affine { scale, zero }
    }

    /// Convert a value in this unit to the base unit
    pub fn to_base(&self, value: f64) -> f64 {
        match *self {
            Conversion::Identity => value,
            Conversion::Linear { factor } => value * factor,
            Conversion::Affine { scale, zero } => (value - zero) * scale,
        }
    }

    /// Convert a value in the base unit to this unit
    pub fn from_base(&self, base: f64) -> f64 {
        match *self {
            Conversion::Identity => base,
            Conversion::Linear { factor } => base / factor,
            Conversion::Affine { scale, zero } => base / scale + zero,
        }
    }

    /// Check if this conversion is the identity
    pub fn is_identity(&self) -> bool {
        matches!(self, Conversion::Identity)
    }
}
