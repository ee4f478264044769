//! CLI errors

use convertor_units::ConversionError;
use serde_json::{json, Value as JsonValue};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Conversion(e) => e.code(),
            CliError::Io(_) => "IO_ERROR",
            CliError::Json(_) => "INTERNAL",
        }
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Conversion(e) => Some(e.suggestion()),
            _ => None,
        }
    }

    /// Error body for `--json` output
    pub fn to_json(&self) -> JsonValue {
        json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "suggestion": self.suggestion(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_json() {
        let err = CliError::from(ConversionError::unknown_unit("cubit"));
        let json = err.to_json();
        assert_eq!(json["error"]["code"], "UNKNOWN_UNIT");
        assert_eq!(json["error"]["message"], "unknown unit: cubit");
        assert!(json["error"]["suggestion"].is_string());
    }

    #[test]
    fn test_io_error() {
        let err = CliError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.code(), "IO_ERROR");
        assert!(err.to_json()["error"]["suggestion"].is_null());
    }
}
