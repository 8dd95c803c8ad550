use crate::errors::Result;
use crate::model::{Category, Failure};
use crate::report::output_text::{render_output_text, ReportContext};
use serde::Serialize;

/// Outcome of one category check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: Category,
    /// Number of requested resources examined
    #[serde(rename = "Count")]
    pub count: usize,
    #[serde(rename = "Passed")]
    pub passed: bool,
    #[serde(rename = "FailureData")]
    pub failures: Vec<Failure>,
    #[serde(rename = "OutputText")]
    pub output_text: String,
}

impl CheckReport {
    /// Assemble a report; `passed` holds exactly when there are no failures
    pub fn new(
        category: Category,
        count: usize,
        failures: Vec<Failure>,
        ctx: &ReportContext,
    ) -> Self {
        let output_text = render_output_text(&failures, ctx);
        Self {
            name: category.name().to_string(),
            category,
            count,
            passed: failures.is_empty(),
            failures,
            output_text,
        }
    }

    /// JSON encoding with the result-record field names
    ///
    /// # Errors
    ///
    /// `Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
