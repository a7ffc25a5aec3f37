//! Response types for the worklog engine API.
//!
//! This module defines the small endpoint-specific response bodies, the
//! error response structures, and the mapping from engine errors to HTTP.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::WbsSummary;
use crate::error::EngineError;

/// Response body for `/fiscal-year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYearResponse {
    /// The `FY{yy}` label.
    pub label: String,
    /// The calendar year the fiscal year starts in.
    pub start_year: i32,
}

/// Response body for `/wbs-summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WbsSummaryResponse {
    /// One group per (project, WBS) pair, in first-seen order.
    pub groups: Vec<WbsSummary>,
}

/// Response body for `/weekly-report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyReportResponse {
    /// The converted and wrapped text.
    pub text: String,
    /// The wrapped text split into lines.
    pub lines: Vec<String>,
}

/// Response body for `/time-entries/duration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryDurationResponse {
    /// Elapsed seconds up to the end time, or up to now when it was omitted.
    pub duration: i64,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidMonth { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_MONTH", message))
            }
            EngineError::InvalidFiscalYear { .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_FISCAL_YEAR",
                    message,
                    "Fiscal years are written as FY followed by two digits, e.g. FY25",
                ))
            }
            EngineError::SeriesLengthMismatch { .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "SERIES_LENGTH_MISMATCH",
                    message,
                    "Every daily series must have one value per entry in days",
                ))
            }
            EngineError::ArithmeticOverflow { .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "ARITHMETIC_OVERFLOW",
                    message,
                    "Input values are too large to combine",
                ))
            }
            EngineError::InvalidTimeEntry { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_TIME_ENTRY", message))
            }
            EngineError::EmptyUpdate { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("EMPTY_UPDATE", message))
            }
            EngineError::InvalidUpdate { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_UPDATE", message))
            }
            EngineError::ExportError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_ERROR", "Export failed", message),
            },
        }
    }
}
