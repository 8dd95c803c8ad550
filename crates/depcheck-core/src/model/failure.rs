use crate::matching::Version;
use crate::model::{PermissionSet, RequestedResource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Why a requested resource is not satisfied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason")]
pub enum FailureReason {
    /// No provisioned counterpart (or no matching grant at all)
    Missing,
    VersionBelowMinimum { found: Version },
    MissingColumns { columns: Vec<String> },
    PermissionsNotGranted { missing: PermissionSet },
    NotModifiedSince { modified: Option<NaiveDate> },
}

/// An unsatisfied request, carrying the full requested record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub requested: RequestedResource,
    #[serde(flatten)]
    pub reason: FailureReason,
}

impl Failure {
    pub fn new(requested: impl Into<RequestedResource>, reason: FailureReason) -> Self {
        Self {
            requested: requested.into(),
            reason,
        }
    }

    pub fn missing(requested: impl Into<RequestedResource>) -> Self {
        Self::new(requested, FailureReason::Missing)
    }
}
