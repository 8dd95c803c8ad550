//! One line of text per failure, in failure order.

use crate::model::{Failure, FailureReason, RequestedResource};

/// Values interpolated into failure lines that are not part of the failure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportContext {
    /// Backend region named in table and workflow lines; empty when unset
    pub region: Option<String>,
}

impl ReportContext {
    pub fn new(region: Option<String>) -> Self {
        Self { region }
    }

    fn region(&self) -> &str {
        self.region.as_deref().unwrap_or("")
    }
}

/// Render the text for a single failure
pub fn render_failure_line(failure: &Failure, ctx: &ReportContext) -> String {
    match &failure.requested {
        RequestedResource::Template(req) => {
            // Shown as the manifest wrote it, so "2.0" stays "v2.0"
            let version = match (&req.min_version_text, req.min_version) {
                (Some(text), _) => text.clone(),
                (None, Some(v)) => v.to_string(),
                (None, None) => "(Any)".to_string(),
            };
            format!(
                "Requested template {} v{}: Not loaded in ThunderheadNow or SmartCommunications",
                req.doc_code, version
            )
        }
        RequestedResource::DataQuery(req) => format!(
            "Requested Letter Data Query doesn't exist for DocCode {}",
            req.doc_code
        ),
        RequestedResource::TableStructure(req) => format!(
            "Requested structure {}.{} ({}): Not everything in place in DB2 Region {}",
            req.schema,
            req.table,
            req.columns.join(","),
            ctx.region()
        ),
        RequestedResource::TablePermission(req) => format!(
            "Requested permissions ({}) not available for {}.{} in DB2 Region {}",
            req.permissions.labels().join(", "),
            req.schema,
            req.table,
            ctx.region()
        ),
        RequestedResource::WorkflowMap(req) => match req.modified_since {
            Some(since) => format!(
                "Requested workflow map '{}' not loaded or modified since {} in emVision region {}",
                req.name,
                since.format("%Y-%m-%d"),
                ctx.region()
            ),
            None => format!(
                "Requested workflow map '{}' not loaded in emVision region {}",
                req.name,
                ctx.region()
            ),
        },
    }
}

/// Render all failures, newline-separated; empty input yields an empty string
pub fn render_output_text(failures: &[Failure], ctx: &ReportContext) -> String {
    failures
        .iter()
        .map(|f| render_failure_line(f, ctx))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reason-specific detail, used by log output rather than the report text
pub fn describe_reason(reason: &FailureReason) -> String {
    match reason {
        FailureReason::Missing => "missing".to_string(),
        FailureReason::VersionBelowMinimum { found } => format!("found version {}", found),
        FailureReason::MissingColumns { columns } => {
            format!("missing columns {}", columns.join(","))
        }
        FailureReason::PermissionsNotGranted { missing } => {
            format!("not granted {}", missing.labels().join(", "))
        }
        FailureReason::NotModifiedSince { modified } => match modified {
            Some(date) => format!("last modified {}", date.format("%Y-%m-%d")),
            None => "no modification date".to_string(),
        },
    }
}
