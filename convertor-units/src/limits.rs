//! Physical-limit advisories
//!
//! Flags inputs that convert fine but make no physical sense: temperatures
//! below absolute zero, negative lengths, weights or pressures, and values
//! that are not finite. A warning never changes or blocks the converted
//! result.

use std::fmt;
use serde::{Serialize, Deserialize};
use convertor_core::{Category, ConversionError};
use tracing::warn;
use crate::{UnitDefinition, UnitRegistry};

/// Slack, in base units, before a value counts as below the minimum.
/// Keeps -459.67 °F from tripping the absolute-zero check.
const TOLERANCE: f64 = 1e-9;

/// Advisory produced for a physically implausible input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LimitWarning {
    /// Input is infinite or NaN
    NonFinite,
    /// Temperature below absolute zero
    BelowAbsoluteZero {
        /// Absolute zero expressed in the input's unit
        minimum: f64,
        /// Symbol of the input's unit
        unit: String,
    },
    /// Negative length, weight or pressure
    Negative { category: Category },
}

impl fmt::Display for LimitWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitWarning::NonFinite => {
                write!(f, "Input is not a finite number.")
            }
            LimitWarning::BelowAbsoluteZero { minimum, unit } => {
                write!(f, "Physics violation: value is below absolute zero ({:.2} {}).", minimum, unit)
            }
            LimitWarning::Negative { category } => {
                write!(f, "Physical limitation: {} usually cannot be negative.", category.display_name().to_lowercase())
            }
        }
    }
}

/// Check `value`, expressed in `unit`, against its category's physical minimum
pub fn limit_warning(unit: &UnitDefinition, value: f64) -> Option<LimitWarning> {
    if !value.is_finite() {
        return Some(LimitWarning::NonFinite);
    }

    let category = unit.category();
    let minimum = category.physical_minimum();
    if unit.to_base(value) >= minimum - TOLERANCE {
        return None;
    }

    match category {
        Category::Temperature => Some(LimitWarning::BelowAbsoluteZero {
            minimum: unit.from_base(minimum),
            unit: unit.symbol().to_string(),
        }),
        _ => Some(LimitWarning::Negative { category }),
    }
}

/// Look up `key` and check `value` against the unit's physical limits.
///
/// Fails only if the unit is unknown; a plausible value yields `Ok(None)`.
pub fn check_physical_limits(
    registry: &UnitRegistry,
    value: f64,
    key: &str,
) -> Result<Option<LimitWarning>, ConversionError> {
    let unit = registry.get_unit_info(key)?;
    let warning = limit_warning(unit, value);
    if let Some(ref w) = warning {
        warn!(value, unit = unit.key(), "{}", w);
    }
    Ok(warning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plausible_values() {
        let registry = UnitRegistry::standard();
        for (value, key) in [(0.0, "METER"), (12.0, "KG"), (-273.15, "CELSIUS"), (0.0, "KELVIN"), (1.0, "ATM")] {
            assert_eq!(check_physical_limits(&registry, value, key), Ok(None), "{} {}", value, key);
        }
    }

    #[test]
    fn test_fahrenheit_absolute_zero_not_flagged() {
        let registry = UnitRegistry::standard();
        assert_eq!(check_physical_limits(&registry, -459.67, "F"), Ok(None));
    }

    #[test]
    fn test_below_absolute_zero() {
        let registry = UnitRegistry::standard();
        match check_physical_limits(&registry, -300.0, "CELSIUS").unwrap() {
            Some(LimitWarning::BelowAbsoluteZero { minimum, unit }) => {
                assert_relative_eq!(minimum, -273.15);
                assert_eq!(unit, "°C");
            }
            other => panic!("unexpected: {:?}", other),
        }

        match check_physical_limits(&registry, -500.0, "FAHRENHEIT").unwrap() {
            Some(LimitWarning::BelowAbsoluteZero { minimum, .. }) => {
                assert_relative_eq!(minimum, -459.67, max_relative = 1e-12);
            }
            other => panic!("unexpected: {:?}", other),
        }

        match check_physical_limits(&registry, -1.0, "KELVIN").unwrap() {
            Some(LimitWarning::BelowAbsoluteZero { minimum, .. }) => {
                assert_relative_eq!(minimum, 0.0, epsilon = 1e-9);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_negative_scalars() {
        let registry = UnitRegistry::standard();
        assert_eq!(
            check_physical_limits(&registry, -1.0, "mile"),
            Ok(Some(LimitWarning::Negative { category: Category::Length }))
        );
        assert_eq!(
            check_physical_limits(&registry, -0.5, "oz"),
            Ok(Some(LimitWarning::Negative { category: Category::Weight }))
        );
        assert_eq!(
            check_physical_limits(&registry, -2.0, "BAR"),
            Ok(Some(LimitWarning::Negative { category: Category::Pressure }))
        );
    }

    #[test]
    fn test_non_finite() {
        let registry = UnitRegistry::standard();
        assert_eq!(check_physical_limits(&registry, f64::INFINITY, "KM"), Ok(Some(LimitWarning::NonFinite)));
        assert_eq!(check_physical_limits(&registry, f64::NAN, "C"), Ok(Some(LimitWarning::NonFinite)));
    }

    #[test]
    fn test_unknown_unit() {
        let registry = UnitRegistry::standard();
        assert_eq!(
            check_physical_limits(&registry, 1.0, "cubit"),
            Err(ConversionError::UnknownUnit("cubit".to_string()))
        );
    }

    #[test]
    fn test_messages() {
        let w = LimitWarning::BelowAbsoluteZero { minimum: -459.66999999999996, unit: "°F".to_string() };
        assert_eq!(w.to_string(), "Physics violation: value is below absolute zero (-459.67 °F).");
        let w = LimitWarning::Negative { category: Category::Pressure };
        assert_eq!(w.to_string(), "Physical limitation: pressure usually cannot be negative.");
        assert_eq!(LimitWarning::NonFinite.to_string(), "Input is not a finite number.");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(LimitWarning::Negative { category: Category::Length }).unwrap();
        assert_eq!(json["kind"], "negative");
        assert_eq!(json["category"], "length");
    }
}
