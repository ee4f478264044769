//! Terminal and JSON rendering
//!
//! Renders conversion results, warnings and unit listings. Color is applied
//! through crossterm and can be switched off entirely.

use std::io::{self, IsTerminal};
use crossterm::style::Stylize;
use convertor_units::{CategoryInfo, LimitWarning, UnitDefinition, UnitRegistry};
use serde_json::{json, Value as JsonValue};

const DOUBLE_ARROW: &str = "\u{2194}";

/// Applies terminal colors, or passes text through when disabled
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Painter for stdout: colored only on a terminal, and never when
    /// `disabled` or `NO_COLOR` is set
    pub fn for_stdout(disabled: bool) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some();
        if color_enabled(disabled, no_color_env, io::stdout().is_terminal()) {
            Self::new(true)
        } else {
            Self::plain()
        }
    }

    pub fn is_colored(&self) -> bool {
        self.color
    }

    pub fn prompt(&self, text: &str) -> String {
        if self.color { text.blue().bold().to_string() } else { text.to_string() }
    }

    pub fn title(&self, text: &str) -> String {
        if self.color { text.green().to_string() } else { text.to_string() }
    }

    pub fn label(&self, text: &str) -> String {
        if self.color { text.green().bold().to_string() } else { text.to_string() }
    }

    pub fn number(&self, text: &str) -> String {
        if self.color { text.yellow().to_string() } else { text.to_string() }
    }

    pub fn warning(&self, text: &str) -> String {
        if self.color { text.yellow().to_string() } else { text.to_string() }
    }

    pub fn error(&self, text: &str) -> String {
        if self.color { text.red().bold().to_string() } else { text.to_string() }
    }
}

fn color_enabled(disabled: bool, no_color_env: bool, is_terminal: bool) -> bool {
    !disabled && !no_color_env && is_terminal
}

/// Format `value` with `precision` decimals, as it will be shown
pub fn format_value(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Displayed text and the label that agrees with it
fn displayed<'u>(value: f64, unit: &'u UnitDefinition, precision: usize) -> (String, &'u str) {
    let shown = format_value(value, precision);
    let rounded = shown.parse::<f64>().unwrap_or(value);
    (shown, unit.label(rounded))
}

/// "212.00 Degrees Fahrenheit"
pub fn format_quantity(value: f64, unit: &UnitDefinition, precision: usize) -> String {
    let (shown, label) = displayed(value, unit, precision);
    format!("{} {}", shown, label)
}

/// "Result: 212.00 Degrees Fahrenheit"
pub fn result_line(painter: &Painter, value: f64, unit: &UnitDefinition, precision: usize) -> String {
    let (shown, label) = displayed(value, unit, precision);
    format!("{} {} {}", painter.label("Result:"), painter.number(&shown), label)
}

pub fn warning_line(painter: &Painter, warning: &LimitWarning) -> String {
    painter.warning(&format!("[WARNING] {}", warning))
}

/// Main menu entries: one per category, then Exit
pub fn menu_lines(registry: &UnitRegistry) -> Vec<String> {
    let categories = registry.categories();
    let mut lines: Vec<String> = categories
        .iter()
        .map(|info| {
            let units: Vec<&str> = registry
                .units_by_category(info.category)
                .into_iter()
                .map(|u| u.short_name())
                .collect();
            format!(
                "{}. {} ({})",
                info.category.menu_option(),
                info.name,
                units.join(&format!(" {} ", DOUBLE_ARROW))
            )
        })
        .collect();
    lines.push(format!("{}. Exit", categories.len() + 1));
    lines
}

/// Numbered unit choices for one category
pub fn unit_choice_lines(units: &[&UnitDefinition]) -> Vec<String> {
    units
        .iter()
        .enumerate()
        .map(|(i, u)| format!("{}. {}", i + 1, u.short_name()))
        .collect()
}

/// Table rows for `convertor list`
pub fn unit_table(units: &[&UnitDefinition]) -> Vec<String> {
    let key_width = units.iter().map(|u| u.key().len()).max().unwrap_or(0);
    let symbol_width = units.iter().map(|u| u.symbol().chars().count()).max().unwrap_or(0);
    units
        .iter()
        .map(|u| {
            let pad = symbol_width - u.symbol().chars().count();
            format!(
                "{:<key_width$}  {}{}  {:<12} {}",
                u.key(),
                u.symbol(),
                " ".repeat(pad),
                u.category().display_name(),
                u.name(),
                key_width = key_width
            )
        })
        .collect()
}

/// Rows for `convertor categories`
pub fn category_lines(categories: &[CategoryInfo]) -> Vec<String> {
    categories
        .iter()
        .map(|info| match info.lower_bound {
            Some(bound) => format!("{:<12} base {} (min {})", info.name, info.base_unit, bound),
            None => format!("{:<12} base {}", info.name, info.base_unit),
        })
        .collect()
}

/// JSON numbers cannot hold NaN or infinities, so those become the strings
/// "NaN", "inf" and "-inf"
fn json_number(value: f64) -> JsonValue {
    if value.is_finite() {
        json!(value)
    } else {
        JsonValue::String(value.to_string())
    }
}

pub fn conversion_json(
    value: f64,
    from: &UnitDefinition,
    to: &UnitDefinition,
    result: f64,
    precision: usize,
    warning: Option<&LimitWarning>,
) -> JsonValue {
    json!({
        "value": json_number(value),
        "finite": value.is_finite() && result.is_finite(),
        "from": from.key(),
        "to": to.key(),
        "category": from.category(),
        "result": json_number(result),
        "display": format_quantity(result, to, precision),
        "warning": warning.map(|w| json!({ "detail": w, "message": w.to_string() })),
    })
}

pub fn units_json(units: &[&UnitDefinition]) -> JsonValue {
    json!(units)
}

pub fn categories_json(categories: &[CategoryInfo]) -> JsonValue {
    json!(categories)
}
