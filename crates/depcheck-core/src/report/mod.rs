//! Category result record and its human-readable failure text.

pub mod check_report;
pub mod output_text;

pub use check_report::CheckReport;
pub use output_text::{describe_reason, render_failure_line, render_output_text, ReportContext};
