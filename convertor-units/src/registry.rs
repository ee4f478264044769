//! Unit registry
//!
//! Maps case-insensitive unit keys (and aliases) to their definitions and
//! performs conversions through each category's base unit.

use std::collections::HashMap;
use convertor_core::{Category, CategoryInfo, ConversionError, RegistryError};
use tracing::debug;
use crate::UnitDefinition;

/// Registry of known units.
///
/// Lookups uppercase the key first, so "km", "Km" and "KM" are the same
/// unit. Iteration follows registration order.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: HashMap<String, UnitDefinition>,
    order: Vec<String>,
    aliases: HashMap<String, String>,
}

impl UnitRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a unit under `key`.
    ///
    /// Fails with `DuplicateUnit` if the key (after uppercasing) is already
    /// used by a unit or an alias. Use [`UnitRegistry::replace`] to override
    /// a definition on purpose.
    pub fn register(&mut self, key: &str, definition: UnitDefinition) -> Result<(), RegistryError> {
        let key = key.to_uppercase();
        if self.units.contains_key(&key) || self.aliases.contains_key(&key) {
            return Err(RegistryError::DuplicateUnit(key));
        }
        self.insert(key, definition);
        Ok(())
    }

    /// Register or overwrite the unit under `key`, returning the previous
    /// definition if there was one.
    pub fn replace(
        &mut self,
        key: &str,
        definition: UnitDefinition,
    ) -> Result<Option<UnitDefinition>, RegistryError> {
        let key = key.to_uppercase();
        if self.aliases.contains_key(&key) {
            return Err(RegistryError::DuplicateUnit(key));
        }
        let previous = self.units.remove(&key);
        if previous.is_some() {
            debug!(key = %key, "replacing unit definition");
            self.units.insert(key.clone(), definition.rekey(key));
        } else {
            self.insert(key, definition);
        }
        Ok(previous)
    }

    /// Make `alias` resolve to the unit registered under `key`
    pub fn alias(&mut self, alias: &str, key: &str) -> Result<(), RegistryError> {
        let alias = alias.to_uppercase();
        let key = key.to_uppercase();
        if !self.units.contains_key(&key) {
            return Err(RegistryError::UnknownUnit(key));
        }
        if self.units.contains_key(&alias) || self.aliases.contains_key(&alias) {
            return Err(RegistryError::DuplicateUnit(alias));
        }
        self.aliases.insert(alias, key);
        Ok(())
    }

    /// Get a unit by key or alias
    pub fn get(&self, key: &str) -> Option<&UnitDefinition> {
        let key = key.to_uppercase();
        // Try direct lookup first
        if let Some(unit) = self.units.get(&key) {
            return Some(unit);
        }
        self.aliases.get(&key).and_then(|canonical| self.units.get(canonical))
    }

    /// Check if a key or alias resolves to a unit
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Get a unit's metadata, failing with `UnknownUnit` if absent
    pub fn get_unit_info(&self, key: &str) -> Result<&UnitDefinition, ConversionError> {
        self.get(key).ok_or_else(|| ConversionError::unknown_unit(key))
    }

    /// Convert `value` from one unit to another of the same category.
    ///
    /// No rounding is applied and non-finite values are passed through the
    /// formulas unchanged. Converting a unit to itself returns `value` as is.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        let source = self.get_unit_info(from)?;
        let target = self.get_unit_info(to)?;

        if !source.is_compatible(target) {
            return Err(ConversionError::IncompatibleCategory {
                from: source.key().to_string(),
                to: target.key().to_string(),
                from_category: source.category(),
                to_category: target.category(),
            });
        }

        if source.key() == target.key() {
            return Ok(value);
        }

        let result = target.from_base(source.to_base(value));
        debug!(value, from = source.key(), to = target.key(), result, "converted");
        Ok(result)
    }

    /// Express `value` (in the unit `key`) in its category's base unit
    pub fn to_base(&self, value: f64, key: &str) -> Result<f64, ConversionError> {
        Ok(self.get_unit_info(key)?.to_base(value))
    }

    /// Keys of every unit in `category`, in registration order
    pub fn keys_by_category(&self, category: Category) -> Vec<&str> {
        self.units_by_category(category)
            .into_iter()
            .map(|u| u.key())
            .collect()
    }

    /// Every unit in `category`, in registration order
    pub fn units_by_category(&self, category: Category) -> Vec<&UnitDefinition> {
        self.iter().filter(|u| u.category() == category).collect()
    }

    /// The four categories with their display names and bounds
    pub fn categories(&self) -> Vec<CategoryInfo> {
        Category::ALL.iter().map(|c| c.info()).collect()
    }

    /// All units, in registration order
    pub fn iter(&self) -> impl Iterator<Item = &UnitDefinition> {
        self.order.iter().filter_map(|key| self.units.get(key))
    }

    /// All registered keys (aliases excluded), in registration order
    pub fn keys(&self) -> Vec<&str> {
        self.order.iter().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Insert without collision checks. Callers guarantee `key` is new.
    pub(crate) fn insert(&mut self, key: String, definition: UnitDefinition) {
        debug!(key = %key, category = %definition.category(), "registering unit");
        self.order.push(key.clone());
        self.units.insert(key.clone(), definition.rekey(key));
    }

    /// Alias insert without collision checks, for the built-in table
    pub(crate) fn insert_alias(&mut self, alias: &str, key: &str) {
        self.aliases.insert(alias.to_uppercase(), key.to_uppercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use convertor_core::Conversion;

    fn meter() -> UnitDefinition {
        UnitDefinition::new("METER", "Meter", "Meters", "m", Category::Length, Conversion::Identity)
    }

    fn kilometer() -> UnitDefinition {
        UnitDefinition::new("KM", "Kilometer", "Kilometers", "km", Category::Length, Conversion::linear(1000.0))
    }

    fn kilogram() -> UnitDefinition {
        UnitDefinition::new("KG", "Kilogram", "Kilograms", "kg", Category::Weight, Conversion::Identity)
    }

    fn small_registry() -> UnitRegistry {
        let mut registry = UnitRegistry::new();
        registry.register("meter", meter()).unwrap();
        registry.register("km", kilometer()).unwrap();
        registry.register("kg", kilogram()).unwrap();
        registry
    }

    #[test]
    fn test_empty_registry_rejects_everything() {
        let registry = UnitRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(
            registry.convert(1.0, "METER", "METER"),
            Err(ConversionError::UnknownUnit("METER".to_string()))
        );
    }

    #[test]
    fn test_register_uppercases_key() {
        let registry = small_registry();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.keys(), vec!["METER", "KM", "KG"]);
        assert_eq!(registry.get("Km").map(|u| u.key()), Some("KM"));
    }

    #[test]
    fn test_register_duplicate_fails() {
        let mut registry = small_registry();
        let err = registry.register("Km", kilometer()).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateUnit("KM".to_string()));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_replace_overrides() {
        let mut registry = small_registry();
        let klick = UnitDefinition::new("KM", "Klick", "Klicks", "k", Category::Length, Conversion::linear(1000.0));
        let previous = registry.replace("km", klick).unwrap();
        assert_eq!(previous.map(|u| u.name().to_string()), Some("Kilometer".to_string()));
        assert_eq!(registry.get_unit_info("KM").unwrap().name(), "Klick");
        // Order is kept on replace
        assert_eq!(registry.keys(), vec!["METER", "KM", "KG"]);
    }

    #[test]
    fn test_replace_new_key_registers() {
        let mut registry = small_registry();
        let mile = UnitDefinition::new("MILE", "Mile", "Miles", "mi", Category::Length, Conversion::linear(1609.344));
        assert_eq!(registry.replace("mile", mile).unwrap(), None);
        assert_eq!(registry.keys_by_category(Category::Length), vec!["METER", "KM", "MILE"]);
    }

    #[test]
    fn test_register_rekeys_definition() {
        let mut registry = UnitRegistry::new();
        registry.register("kilometre", kilometer()).unwrap();
        assert_eq!(registry.get_unit_info("KILOMETRE").unwrap().key(), "KILOMETRE");
    }

    #[test]
    fn test_alias() {
        let mut registry = small_registry();
        registry.alias("kilometers", "KM").unwrap();
        assert_eq!(registry.get("KILOMETERS").map(|u| u.key()), Some("KM"));
        assert_eq!(registry.convert(2.0, "kilometers", "meter"), Ok(2000.0));
        // Aliases are not listed as keys
        assert_eq!(registry.keys_by_category(Category::Length), vec!["METER", "KM"]);
    }

    #[test]
    fn test_alias_collisions() {
        let mut registry = small_registry();
        assert_eq!(
            registry.alias("km", "METER"),
            Err(RegistryError::DuplicateUnit("KM".to_string()))
        );
        assert_eq!(
            registry.alias("furlongs", "FURLONG"),
            Err(RegistryError::UnknownUnit("FURLONG".to_string()))
        );
        registry.alias("m", "meter").unwrap();
        assert_eq!(
            registry.register("M", meter()),
            Err(RegistryError::DuplicateUnit("M".to_string()))
        );
        assert!(registry.replace("m", meter()).is_err());
    }

    #[test]
    fn test_convert() {
        let registry = small_registry();
        assert_eq!(registry.convert(1000.0, "METER", "KM"), Ok(1.0));
        assert_eq!(registry.convert(2.5, "km", "meter"), Ok(2500.0));
    }

    #[test]
    fn test_convert_identity_is_exact() {
        let registry = small_registry();
        assert_eq!(registry.convert(0.1, "KM", "km"), Ok(0.1));
        assert!(registry.convert(f64::NAN, "KM", "KM").unwrap().is_nan());
    }

    #[test]
    fn test_convert_incompatible() {
        let registry = small_registry();
        let err = registry.convert(1.0, "km", "kg").unwrap_err();
        assert_eq!(
            err,
            ConversionError::IncompatibleCategory {
                from: "KM".to_string(),
                to: "KG".to_string(),
                from_category: Category::Length,
                to_category: Category::Weight,
            }
        );
    }

    #[test]
    fn test_convert_unknown_unit() {
        let registry = small_registry();
        assert_eq!(
            registry.convert(1.0, "NOTAUNIT", "METER"),
            Err(ConversionError::UnknownUnit("NOTAUNIT".to_string()))
        );
        assert_eq!(
            registry.convert(1.0, "METER", "parsec"),
            Err(ConversionError::UnknownUnit("parsec".to_string()))
        );
    }

    #[test]
    fn test_unknown_checked_before_category() {
        let registry = small_registry();
        assert_eq!(
            registry.convert(1.0, "kg", "nope").unwrap_err().code(),
            "UNKNOWN_UNIT"
        );
    }

    #[test]
    fn test_to_base() {
        let registry = small_registry();
        assert_eq!(registry.to_base(3.0, "KM"), Ok(3000.0));
        assert!(registry.to_base(3.0, "X").is_err());
    }

    #[test]
    fn test_categories_are_fixed() {
        let registry = UnitRegistry::new();
        let names: Vec<String> = registry.categories().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Length", "Weight", "Temperature", "Pressure"]);
    }

    #[test]
    fn test_units_by_category() {
        let registry = small_registry();
        let weights = registry.units_by_category(Category::Weight);
        assert_eq!(weights.len(), 1);
        assert_eq!(weights[0].name(), "Kilogram");
        assert!(registry.units_by_category(Category::Pressure).is_empty());
    }
}
