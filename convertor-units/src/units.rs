//! Unit definitions - three units per category

use std::sync::LazyLock;
use convertor_core::{Category, Conversion};
use crate::{UnitDefinition, UnitRegistry};

/// Global unit registry, built on first use and read-only afterwards
pub static STANDARD_UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::standard);

impl UnitRegistry {
    /// Build a fresh registry holding the standard unit table.
    ///
    /// Each call returns an independent instance, so tests can work on their
    /// own copy instead of the shared [`STANDARD_UNITS`].
    pub fn standard() -> Self {
        let mut registry = UnitRegistry::new();
        registry.register_length_units();
        registry.register_weight_units();
        registry.register_temperature_units();
        registry.register_pressure_units();
        registry
    }

    fn unit(&mut self, key: &str, name: &str, plural: &str, symbol: &str, category: Category, conversion: Conversion) {
        let definition = UnitDefinition::new(key, name, plural, symbol, category, conversion);
        self.insert(key.to_uppercase(), definition);
    }

    fn aliases(&mut self, key: &str, aliases: &[&str]) {
        for alias in aliases {
            self.insert_alias(alias, key);
        }
    }

    fn register_length_units(&mut self) {
        use Category::Length;
        self.unit("METER", "Meter", "Meters", "m", Length, Conversion::Identity);
        self.unit("KM", "Kilometer", "Kilometers", "km", Length, Conversion::linear(1000.0));
        self.unit("MILE", "Mile", "Miles", "mi", Length, Conversion::linear(1609.344));

        self.aliases("METER", &["M", "METERS", "METRE", "METRES"]);
        self.aliases("KM", &["KILOMETER", "KILOMETERS", "KILOMETRE", "KILOMETRES"]);
        self.aliases("MILE", &["MI", "MILES"]);
    }

    fn register_weight_units(&mut self) {
        use Category::Weight;
        self.unit("KG", "Kilogram", "Kilograms", "kg", Weight, Conversion::Identity);
        self.unit("POUND", "Pound", "Pounds", "lb", Weight, Conversion::linear(0.45359237));
        self.unit("OUNCE", "Ounce", "Ounces", "oz", Weight, Conversion::linear(0.028349523125));

        self.aliases("KG", &["KILOGRAM", "KILOGRAMS"]);
        self.aliases("POUND", &["LB", "LBS", "POUNDS"]);
        self.aliases("OUNCE", &["OZ", "OUNCES"]);
    }

    fn register_temperature_units(&mut self) {
        use Category::Temperature;
        self.unit("CELSIUS", "Degree Celsius", "Degrees Celsius", "°C", Temperature, Conversion::Identity);
        self.unit("FAHRENHEIT", "Degree Fahrenheit", "Degrees Fahrenheit", "°F", Temperature,
            Conversion::affine(5.0 / 9.0, 32.0));
        self.unit("KELVIN", "Kelvin", "Kelvins", "K", Temperature, Conversion::affine(1.0, 273.15));

        self.aliases("CELSIUS", &["C"]);
        self.aliases("FAHRENHEIT", &["F"]);
        self.aliases("KELVIN", &["K", "KELVINS"]);
    }

    fn register_pressure_units(&mut self) {
        use Category::Pressure;
        self.unit("PASCAL", "Pascal", "Pascals", "Pa", Pressure, Conversion::Identity);
        self.unit("BAR", "Bar", "Bars", "bar", Pressure, Conversion::linear(100_000.0));
        self.unit("ATM", "Atmosphere", "Atmospheres", "atm", Pressure, Conversion::linear(101_325.0));

        self.aliases("PASCAL", &["PA", "PASCALS"]);
        self.aliases("BAR", &["BARS"]);
        self.aliases("ATM", &["ATMOSPHERE", "ATMOSPHERES"]);
    }
}
