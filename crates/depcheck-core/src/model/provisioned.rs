//! Resources a backend reports as actually present.

use crate::matching::Version;
use crate::model::requested::table_key;
use crate::model::{Keyed, PermissionSet};
use chrono::NaiveDate;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedTemplate {
    pub doc_code: String,
    /// Backend-specific document id
    pub id: String,
    /// Highest loaded version, when it was looked up
    pub max_version: Option<Version>,
}

impl ProvisionedTemplate {
    /// Highest version, with unknown treated as [`Version::FLOOR`]
    pub fn effective_version(&self) -> Version {
        self.max_version.unwrap_or(Version::FLOOR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedDataQuery {
    pub doc_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedTableStructure {
    pub schema: String,
    pub table: String,
    pub columns: BTreeSet<String>,
}

/// One grant row; several rows may cover the same table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedTablePermission {
    pub schema: String,
    pub table: String,
    pub permissions: PermissionSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedWorkflowMap {
    pub name: String,
    /// `None` when the backend holds no creation date
    pub modified: Option<NaiveDate>,
}

impl Keyed for ProvisionedTemplate {
    fn key(&self) -> String {
        self.doc_code.clone()
    }
}

impl Keyed for ProvisionedDataQuery {
    fn key(&self) -> String {
        self.doc_code.clone()
    }
}

impl Keyed for ProvisionedTableStructure {
    fn key(&self) -> String {
        table_key(&self.schema, &self.table)
    }
}

impl Keyed for ProvisionedWorkflowMap {
    fn key(&self) -> String {
        self.name.clone()
    }
}
