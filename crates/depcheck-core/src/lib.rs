//! depcheck core - reconciliation kernel for dependency provisioning checks
//!
//! This crate holds everything that does not touch a backend:
//! - typed requested/provisioned resource records and keyed collections
//! - matching primitives (versions, wildcards, column sets, dates)
//! - one reconciler per resource category
//! - the category result record and its failure text
//! - the error and logging facilities shared by the workspace
//! - the port traits backend adapters implement

pub mod errors;
pub mod logging_facility;
pub mod matching;
pub mod model;
pub mod ports;
pub mod reconcile;
pub mod report;

pub use depcheck_core_types;

// Re-export commonly used types
pub use errors::{DepCheckError, ExError, ExErrorKind, Result};
pub use matching::{Version, WildcardPattern};
pub use model::{Category, Failure, FailureReason, Keyed, KeyedCollection, PermissionSet};
pub use ports::{DocumentApi, DocumentSummary, SqlExecutor, SqlValue, VersionRecord};
pub use report::{CheckReport, ReportContext};
