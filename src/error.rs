//! Error types for the worklog engine.
//!
//! Errors come from configuration loading, boundary validation, Decimal
//! overflow on extreme inputs, time entry state transitions and CSV export.

use thiserror::Error;

/// The main error type for the worklog engine.
///
/// # Example
///
/// ```
/// use worklog_engine::error::EngineError;
///
/// let error = EngineError::InvalidMonth { month: 13 };
/// assert_eq!(error.to_string(), "Invalid month: 13 (expected 1-12)");
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

    /// A month number outside 1-12 reached a boundary that validates it.
    #[error("Invalid month: {month} (expected 1-12)")]
    InvalidMonth {
        /// The rejected month number.
        month: u32,
    },

    /// A fiscal year label could not be parsed.
    #[error("Invalid fiscal year label: '{label}'")]
    InvalidFiscalYear {
        /// The rejected label.
        label: String,
    },

    /// A work type's daily series does not line up with the days axis.
    #[error(
        "Series length mismatch for work type '{work_type}': {series} has {actual} values, expected {expected}"
    )]
    SeriesLengthMismatch {
        /// The work type whose series is misaligned.
        work_type: String,
        /// Which series ("pv_daily" or "ac_daily").
        series: String,
        /// The length of the days axis.
        expected: usize,
        /// The actual length of the series.
        actual: usize,
    },

    /// A Decimal sum, product or quotient left the representable range.
    #[error("Arithmetic overflow while computing {operation}")]
    ArithmeticOverflow {
        /// What was being computed.
        operation: String,
    },

    /// A time entry transition was not allowed.
    #[error("Invalid time entry '{entry_id}': {message}")]
    InvalidTimeEntry {
        /// The ID of the time entry.
        entry_id: String,
        /// A description of what was wrong.
        message: String,
    },

    /// An update carried no fields to apply.
    #[error("Update for {entity} '{id}' contains no fields")]
    EmptyUpdate {
        /// The kind of record being updated.
        entity: String,
        /// The ID of the record.
        id: String,
    },

    /// An update carried a field value that cannot be applied.
    #[error("Invalid update field '{field}': {message}")]
    InvalidUpdate {
        /// The rejected field.
        field: String,
        /// A description of what was wrong.
        message: String,
    },

    /// Writing an export failed.
    #[error("Export failed: {message}")]
    ExportError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/work_rules.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/work_rules.yaml"
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
    fn test_invalid_fiscal_year_displays_label() {
        let error = EngineError::InvalidFiscalYear {
            label: "2025".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid fiscal year label: '2025'");
    }

    #[test]
    fn test_series_length_mismatch_displays_lengths() {
        let error = EngineError::SeriesLengthMismatch {
            work_type: "design".to_string(),
            series: "ac_daily".to_string(),
            expected: 30,
            actual: 29,
        };
        assert_eq!(
            error.to_string(),
            "Series length mismatch for work type 'design': ac_daily has 29 values, expected 30"
        );
    }

    #[test]
    fn test_arithmetic_overflow_displays_operation() {
        let error = EngineError::ArithmeticOverflow {
            operation: "cumulative sum".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Arithmetic overflow while computing cumulative sum"
        );
    }

    #[test]
    fn test_invalid_time_entry_displays_id_and_message() {
        let error = EngineError::InvalidTimeEntry {
            entry_id: "te_001".to_string(),
            message: "entry is already closed".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time entry 'te_001': entry is already closed"
        );
    }

    #[test]
    fn test_empty_update_displays_entity() {
        let error = EngineError::EmptyUpdate {
            entity: "task".to_string(),
            id: "task_001".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Update for task 'task_001' contains no fields"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_month() -> EngineResult<()> {
            Err(EngineError::InvalidMonth { month: 0 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_month()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
