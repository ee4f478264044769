//! Structured conversion errors
//!
//! Every failed lookup or conversion resolves to one of two kinds. Errors
//! carry a machine-readable code and a suggestion so callers can render
//! them for people or for JSON consumers.

use thiserror::Error;
use crate::Category;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INCOMPATIBLE_CATEGORY: &str = "INCOMPATIBLE_CATEGORY";
    pub const DUPLICATE_UNIT: &str = "DUPLICATE_UNIT";
}

/// Errors that can occur during unit lookup and conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The key matched no registered unit after case normalization
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Source and target units belong to different categories
    #[error("cannot convert {from} ({from_category}) to {to} ({to_category}): incompatible categories")]
    IncompatibleCategory {
        from: String,
        to: String,
        from_category: Category,
        to_category: Category,
    },
}

impl ConversionError {
    pub fn unknown_unit(key: &str) -> Self {
        ConversionError::UnknownUnit(key.to_string())
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::UnknownUnit(_) => codes::UNKNOWN_UNIT,
            ConversionError::IncompatibleCategory { .. } => codes::INCOMPATIBLE_CATEGORY,
        }
    }

    /// Suggestion for fixing the error
    pub fn suggestion(&self) -> String {
        match self {
            ConversionError::UnknownUnit(_) => {
                "Check spelling or run `convertor list` for available units".to_string()
            }
            ConversionError::IncompatibleCategory { from_category, .. } => {
                format!("Pick a target unit from the {} category", from_category)
            }
        }
    }
}

/// Errors raised while populating a registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Key or alias is already taken
    #[error("unit '{0}' is already registered")]
    DuplicateUnit(String),

    /// Alias points at a key that has not been registered
    #[error("cannot alias unknown unit: {0}")]
    UnknownUnit(String),
}

impl RegistryError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::DuplicateUnit(_) => codes::DUPLICATE_UNIT,
            RegistryError::UnknownUnit(_) => codes::UNKNOWN_UNIT,
        }
    }
}
