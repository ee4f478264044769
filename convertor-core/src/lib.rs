//! Convertor Core - Fundamental types
//!
//! This crate provides the core types used throughout Convertor:
//! - `Category`: The four measurement categories and their base units
//! - `Conversion`: Inspectable to-base/from-base formulas
//! - `ConversionError`, `RegistryError`: Structured errors with stable codes

mod category;
mod conversion;
mod error;

pub use category::{Category, CategoryInfo, ParseCategoryError, ABSOLUTE_ZERO_CELSIUS};
pub use conversion::Conversion;
pub use error::{ConversionError, RegistryError, codes};
