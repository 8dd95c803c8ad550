//! Backend interfaces the checks are written against.
//!
//! Adapters live in `depcheck-backends`; tests substitute in-memory fakes.

use crate::errors::ExError;
use depcheck_core_types::Sensitive;

/// A single SQL result cell
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    /// Text rendering of the cell; `None` for SQL NULL
    pub fn to_text(&self) -> Option<String> {
        match self {
            SqlValue::Null => None,
            SqlValue::Integer(i) => Some(i.to_string()),
            SqlValue::Real(r) => Some(r.to_string()),
            SqlValue::Text(s) => Some(s.clone()),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::Text(s)
    }
}

impl From<i64> for SqlValue {
    fn from(i: i64) -> Self {
        SqlValue::Integer(i)
    }
}

/// Read-only SQL access
#[allow(clippy::result_large_err)]
pub trait SqlExecutor {
    /// Run `query` with positional parameters bound as `?1..?n`
    ///
    /// # Errors
    ///
    /// `Backend` when the connection cannot be opened or the query fails.
    fn select(
        &self,
        connection: &Sensitive<String>,
        query: &str,
        params: &[SqlValue],
    ) -> Result<Vec<Vec<SqlValue>>, ExError>;
}

/// Document listed by a document-management search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
    pub id: String,
    /// Document name; equals the manifest doc code
    pub name: String,
}

/// One loaded version of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRecord {
    pub major: u64,
    pub minor: u64,
    pub revision: u64,
}

/// Document-management REST backend
#[allow(clippy::result_large_err)]
pub trait DocumentApi {
    /// Backend label used in logs
    fn backend_name(&self) -> &str;

    /// List every document template
    ///
    /// # Errors
    ///
    /// `Backend` on transport failure or non-success status.
    fn search_documents(&self) -> Result<Vec<DocumentSummary>, ExError>;

    /// List the versions loaded for one document id
    ///
    /// # Errors
    ///
    /// `Backend` on transport failure or non-success status.
    fn get_versions(&self, id: &str) -> Result<Vec<VersionRecord>, ExError>;
}
