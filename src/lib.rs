//! Worklog Engine for attendance and work-hour reporting
//!
//! This crate derives reporting metrics from raw worklog records: fiscal year
//! labels, working days, monthly attendance summaries, WBS time totals,
//! work-type PV/AC/BAC ratios, the project work-hours sheet, and weekly report
//! text. An HTTP API exposes the calculations as stateless endpoints.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
