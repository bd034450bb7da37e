//! Error types for the trip expense engine.
//!
//! The calculation functions themselves are total and never fail; these
//! errors come from configuration loading, the ledger, and the API layer.

use thiserror::Error;

/// The main error type for the trip expense engine.
///
/// # Example
///
/// ```
/// use trip_expense::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configured or supplied rate was out of range.
    #[error("Invalid rate '{field}': {message}")]
    InvalidRate {
        /// The rate field that was invalid.
        field: String,
        /// A description of what made the rate invalid.
        message: String,
    },

    /// The trip period yields no billable days, so nothing can be saved.
    #[error("Invalid trip period '{start}' ~ '{end}': no billable days")]
    InvalidPeriod {
        /// The supplied start date.
        start: String,
        /// The supplied end date.
        end: String,
    },

    /// A route import produced no usable rows.
    #[error("No valid routes found in CSV input")]
    NoRoutesFound,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rates.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rates.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_rate_displays_field_and_message() {
        let error = EngineError::InvalidRate {
            field: "daily_rate".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rate 'daily_rate': must not be negative"
        );
    }

    #[test]
    fn test_invalid_period_displays_dates() {
        let error = EngineError::InvalidPeriod {
            start: "2025-09-11".to_string(),
            end: "2025-09-10".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid trip period '2025-09-11' ~ '2025-09-10': no billable days"
        );
    }

    #[test]
    fn test_no_routes_found_message() {
        assert_eq!(
            EngineError::NoRoutesFound.to_string(),
            "No valid routes found in CSV input"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_no_routes() -> EngineResult<()> {
            Err(EngineError::NoRoutesFound)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_no_routes()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
