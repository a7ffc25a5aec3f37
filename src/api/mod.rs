//! HTTP API module for the worklog engine.
//!
//! This module exposes each calculation as a JSON `POST` endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceCsvRequest, FiscalYearRequest, KadminRequest, MonthlySummaryRequest,
    TimeEntryDurationRequest, WbsSummaryRequest, WeeklyReportRequest, WorkTypeRatioRequest,
    WorkingDaysRequest,
};
pub use response::{
    ApiError, FiscalYearResponse, TimeEntryDurationResponse, WbsSummaryResponse,
    WeeklyReportResponse,
};
pub use state::AppState;
