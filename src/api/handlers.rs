//! HTTP request handlers for the worklog engine API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! endpoint is a stateless calculation over the request body.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    FiscalYear, KadminSheet, aggregate_by_wbs, calculate_monthly_summary,
    calculate_work_type_ratios, calculate_working_days, elapsed_seconds, export_attendance_csv,
    to_full_width, wrap_text,
};
use crate::error::{EngineError, EngineResult};
use crate::models::WorkHoursRecord;

use super::request::{
    AttendanceCsvRequest, FiscalYearRequest, KadminRequest, MonthlySummaryRequest,
    TimeEntryDurationRequest, WbsSummaryRequest, WeeklyReportRequest, WorkTypeRatioRequest,
    WorkingDaysRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, FiscalYearResponse, TimeEntryDurationResponse, WbsSummaryResponse,
    WeeklyReportResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/fiscal-year", post(fiscal_year_handler))
        .route("/working-days", post(working_days_handler))
        .route("/monthly-summary", post(monthly_summary_handler))
        .route("/wbs-summary", post(wbs_summary_handler))
        .route("/work-type-ratios", post(work_type_ratios_handler))
        .route("/kadmin", post(kadmin_handler))
        .route("/weekly-report", post(weekly_report_handler))
        .route("/time-entries/duration", post(time_entry_duration_handler))
        .route("/attendance/csv", post(attendance_csv_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn validate_month(month: u32) -> EngineResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(EngineError::InvalidMonth { month })
    }
}

/// Handler for POST /fiscal-year.
async fn fiscal_year_handler(
    payload: Result<Json<FiscalYearRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing fiscal year request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = validate_month(request.month) {
        return error_response(correlation_id, err);
    }

    let fiscal_year = FiscalYear::from_year_month(request.year, request.month);
    json_response(FiscalYearResponse {
        label: fiscal_year.label(),
        start_year: fiscal_year.start_year(),
    })
}

/// Handler for POST /working-days.
async fn working_days_handler(
    payload: Result<Json<WorkingDaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing working days request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let fiscal_year: FiscalYear = match request.fiscal_year.parse() {
        Ok(fy) => fy,
        Err(err) => return error_response(correlation_id, err),
    };

    let table = calculate_working_days(fiscal_year, &request.holidays);
    info!(
        correlation_id = %correlation_id,
        fiscal_year = %fiscal_year,
        holidays_count = request.holidays.len(),
        total_working_days = table.total(),
        "Working days calculated"
    );
    json_response(table)
}

/// Handler for POST /monthly-summary.
async fn monthly_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlySummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let summary = match calculate_monthly_summary(
        &request.records,
        request.working_days,
        request.vacation_hours.unwrap_or(Decimal::ZERO),
        state.config().standard_hours_per_day(),
    ) {
        Ok(summary) => summary,
        Err(err) => return error_response(correlation_id, err),
    };
    info!(
        correlation_id = %correlation_id,
        records_count = request.records.len(),
        worked_days = summary.worked_days,
        actual_hours = %summary.actual_hours,
        duration_us = start_time.elapsed().as_micros(),
        "Monthly summary calculated"
    );
    json_response(summary)
}

/// Handler for POST /wbs-summary.
async fn wbs_summary_handler(payload: Result<Json<WbsSummaryRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing WBS summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let groups = aggregate_by_wbs(&request.entries);
    info!(
        correlation_id = %correlation_id,
        entries_count = request.entries.len(),
        groups_count = groups.len(),
        duration_us = start_time.elapsed().as_micros(),
        "WBS summary calculated"
    );
    json_response(WbsSummaryResponse { groups })
}

/// Handler for POST /work-type-ratios.
async fn work_type_ratios_handler(
    payload: Result<Json<WorkTypeRatioRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing work type ratio request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());
    let start_time = Instant::now();
    match calculate_work_type_ratios(&request.days, &request.work_types, today) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                days_count = report.days.len(),
                work_types_count = report.work_types.len(),
                elapsed_days = report.elapsed_days,
                duration_us = start_time.elapsed().as_micros(),
                "Work type ratios calculated"
            );
            json_response(report)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /kadmin.
///
/// Working days come from the request, then the configured defaults.
async fn kadmin_handler(
    State(state): State<AppState>,
    payload: Result<Json<KadminRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing Kadmin sheet request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let fiscal_year: FiscalYear = match request.fiscal_year.parse() {
        Ok(fy) => fy,
        Err(err) => return error_response(correlation_id, err),
    };

    let months = request
        .work_hours
        .iter()
        .map(|row| row.month)
        .chain(request.vacation_hours.iter().map(|row| row.month))
        .chain(request.working_days.keys().copied());
    for month in months {
        if let Err(err) = validate_month(month) {
            return error_response(correlation_id, err);
        }
    }

    let label = fiscal_year.label();
    let rows: Vec<WorkHoursRecord> = request
        .work_hours
        .iter()
        .filter(|row| row.fiscal_year == label)
        .cloned()
        .collect();
    let vacation: Vec<_> = request
        .vacation_hours
        .iter()
        .filter(|row| row.fiscal_year == label)
        .cloned()
        .collect();

    let start_time = Instant::now();
    let config = state.config();
    let sheet = KadminSheet::new(
        &request.projects,
        &rows,
        &vacation,
        &request.working_days,
        config.default_working_days(),
        config.standard_hours_per_day(),
    );
    let summary = match sheet.summarize() {
        Ok(summary) => summary,
        Err(err) => return error_response(correlation_id, err),
    };

    info!(
        correlation_id = %correlation_id,
        fiscal_year = %label,
        projects_count = request.projects.len(),
        rows_count = rows.len(),
        rows_skipped = request.work_hours.len() - rows.len(),
        year_overtime_hours = %summary.year_overtime_hours,
        duration_us = start_time.elapsed().as_micros(),
        "Kadmin sheet calculated"
    );
    json_response(summary)
}

/// Handler for POST /weekly-report.
async fn weekly_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<WeeklyReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing weekly report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let text = wrap_text(
        &to_full_width(&request.text),
        state.config().report_wrap_columns(),
    );
    let lines: Vec<String> = if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').map(str::to_string).collect()
    };

    info!(
        correlation_id = %correlation_id,
        lines_count = lines.len(),
        "Weekly report formatted"
    );
    json_response(WeeklyReportResponse { text, lines })
}

/// Handler for POST /time-entries/duration.
///
/// An omitted end time means the entry is being closed now.
async fn time_entry_duration_handler(
    payload: Result<Json<TimeEntryDurationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing time entry duration request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let end_time = request.end_time.unwrap_or_else(Utc::now);
    let duration = elapsed_seconds(request.start_time, end_time);
    info!(
        correlation_id = %correlation_id,
        end_time_given = request.end_time.is_some(),
        duration,
        "Time entry duration calculated"
    );
    json_response(TimeEntryDurationResponse { duration })
}

/// Handler for POST /attendance/csv.
async fn attendance_csv_handler(
    payload: Result<Json<AttendanceCsvRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance CSV request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match export_attendance_csv(&request.records) {
        Ok(csv) => {
            info!(
                correlation_id = %correlation_id,
                records_count = request.records.len(),
                bytes = csv.len(),
                "Attendance CSV exported"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
                csv,
            )
                .into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{
        body::{Body, to_bytes},
        http::Request,
    };
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/standard").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_fiscal_year_march_belongs_to_previous_year() {
        let (status, json) = post_json("/fiscal-year", r#"{"year": 2025, "month": 3}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["label"], "FY24");
        assert_eq!(json["start_year"], 2024);
    }

    #[tokio::test]
    async fn test_fiscal_year_invalid_month() {
        let (status, json) = post_json("/fiscal-year", r#"{"year": 2025, "month": 13}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_MONTH");
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let (status, json) = post_json("/fiscal-year", r#"{"year": 2025}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["message"].as_str().unwrap().contains("month"));
    }

    #[tokio::test]
    async fn test_syntax_error_is_malformed_json() {
        let (status, json) = post_json("/weekly-report", r#"{"text": "#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_weekly_report_uses_configured_width() {
        let body = serde_json::json!({ "text": "a".repeat(19) }).to_string();
        let (status, json) = post_json("/weekly-report", &body).await;

        assert_eq!(status, StatusCode::OK);
        let lines = json["lines"].as_array().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].as_str().unwrap().chars().count(), 18);
    }

    #[tokio::test]
    async fn test_kadmin_rejects_invalid_override_month() {
        let body = r#"{
            "fiscal_year": "FY25",
            "projects": [],
            "working_days": {"0": 20}
        }"#;
        let (status, json) = post_json("/kadmin", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_MONTH");
    }

    #[tokio::test]
    async fn test_duration_without_end_runs_to_now() {
        let start = Utc::now() - chrono::Duration::minutes(5);
        let body = serde_json::json!({ "start_time": start }).to_string();
        let (status, json) = post_json("/time-entries/duration", &body).await;

        assert_eq!(status, StatusCode::OK);
        let duration = json["duration"].as_i64().unwrap();
        assert!((300..360).contains(&duration));
    }

    #[tokio::test]
    async fn test_monthly_summary_overflow_is_bad_request() {
        let body = serde_json::json!({
            "records": [],
            "working_days": 20,
            "vacation_hours": Decimal::MIN.to_string()
        })
        .to_string();
        let (status, json) = post_json("/monthly-summary", &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "ARITHMETIC_OVERFLOW");
    }

    #[tokio::test]
    async fn test_kadmin_overflow_is_bad_request() {
        let huge = Decimal::MAX.to_string();
        let body = serde_json::json!({
            "fiscal_year": "FY25",
            "projects": [{"id": "P1", "name": "Portal"}, {"id": "P2", "name": "Batch"}],
            "work_hours": [
                {"project_id": "P1", "fiscal_year": "FY25", "month": 4, "actual_hours": huge},
                {"project_id": "P2", "fiscal_year": "FY25", "month": 4, "actual_hours": huge}
            ]
        })
        .to_string();
        let (status, json) = post_json("/kadmin", &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "ARITHMETIC_OVERFLOW");
    }

    #[test]
    fn test_validate_month_bounds() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }
}
