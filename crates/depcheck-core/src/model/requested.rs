//! Resources an application declares it needs.

use crate::matching::Version;
use crate::model::{Category, Keyed, PermissionSet};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedTemplate {
    pub doc_code: String,
    /// Lowest acceptable version; `None` accepts any
    pub min_version: Option<Version>,
    /// `min_version` as written in the manifest, used for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_version_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedDataQuery {
    pub doc_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedTableStructure {
    pub schema: String,
    pub table: String,
    /// Columns in manifest order; empty means only the table must exist
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedTablePermission {
    /// May contain wildcards
    pub schema: String,
    /// May contain wildcards
    pub table: String,
    pub permissions: PermissionSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedWorkflowMap {
    pub name: String,
    pub modified_since: Option<NaiveDate>,
}

impl Keyed for RequestedTemplate {
    fn key(&self) -> String {
        self.doc_code.clone()
    }
}

impl Keyed for RequestedDataQuery {
    fn key(&self) -> String {
        self.doc_code.clone()
    }
}

impl Keyed for RequestedTableStructure {
    fn key(&self) -> String {
        table_key(&self.schema, &self.table)
    }
}

impl Keyed for RequestedTablePermission {
    fn key(&self) -> String {
        table_key(&self.schema, &self.table)
    }
}

impl Keyed for RequestedWorkflowMap {
    fn key(&self) -> String {
        self.name.clone()
    }
}

/// `schema.table` identity key
pub fn table_key(schema: &str, table: &str) -> String {
    format!("{}.{}", schema, table)
}

/// Any requested record, tagged by category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RequestedResource {
    Template(RequestedTemplate),
    DataQuery(RequestedDataQuery),
    TableStructure(RequestedTableStructure),
    TablePermission(RequestedTablePermission),
    WorkflowMap(RequestedWorkflowMap),
}

impl RequestedResource {
    pub fn category(&self) -> Category {
        match self {
            RequestedResource::Template(_) => Category::Template,
            RequestedResource::DataQuery(_) => Category::DataQuery,
            RequestedResource::TableStructure(_) => Category::TableStructure,
            RequestedResource::TablePermission(_) => Category::TablePermission,
            RequestedResource::WorkflowMap(_) => Category::WorkflowMap,
        }
    }
}

impl Keyed for RequestedResource {
    fn key(&self) -> String {
        match self {
            RequestedResource::Template(r) => r.key(),
            RequestedResource::DataQuery(r) => r.key(),
            RequestedResource::TableStructure(r) => r.key(),
            RequestedResource::TablePermission(r) => r.key(),
            RequestedResource::WorkflowMap(r) => r.key(),
        }
    }
}

impl From<RequestedTemplate> for RequestedResource {
    fn from(r: RequestedTemplate) -> Self {
        RequestedResource::Template(r)
    }
}

impl From<RequestedDataQuery> for RequestedResource {
    fn from(r: RequestedDataQuery) -> Self {
        RequestedResource::DataQuery(r)
    }
}

impl From<RequestedTableStructure> for RequestedResource {
    fn from(r: RequestedTableStructure) -> Self {
        RequestedResource::TableStructure(r)
    }
}

impl From<RequestedTablePermission> for RequestedResource {
    fn from(r: RequestedTablePermission) -> Self {
        RequestedResource::TablePermission(r)
    }
}

impl From<RequestedWorkflowMap> for RequestedResource {
    fn from(r: RequestedWorkflowMap) -> Self {
        RequestedResource::WorkflowMap(r)
    }
}
