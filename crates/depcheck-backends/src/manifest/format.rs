//! Manifest XML schema
//!
//! Attributes are kept as raw optional strings here; typed validation happens
//! per category so a bad value only fails the check that reads it.

use serde::Deserialize;

/// Document root; sections may repeat and appear in any order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManifestDocument {
    #[serde(rename = "documentTemplates", default)]
    pub document_templates: Vec<DocumentTemplatesSection>,

    #[serde(rename = "tableStructure", default)]
    pub table_structure: Vec<TableStructureSection>,

    #[serde(rename = "tablePermissions", default)]
    pub table_permissions: Vec<TablePermissionsSection>,

    #[serde(rename = "workflowMaps", default)]
    pub workflow_maps: Vec<WorkflowMapsSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentTemplatesSection {
    #[serde(rename = "document", default)]
    pub documents: Vec<DocumentElement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentElement {
    #[serde(rename = "@docCode")]
    pub doc_code: Option<String>,

    #[serde(rename = "@version")]
    pub version: Option<String>,

    #[serde(rename = "@dataQueryRequired")]
    pub data_query_required: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableStructureSection {
    #[serde(rename = "table", default)]
    pub tables: Vec<StructureTableElement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StructureTableElement {
    #[serde(rename = "@schema")]
    pub schema: Option<String>,

    #[serde(rename = "@name")]
    pub name: Option<String>,

    #[serde(rename = "column", default)]
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TablePermissionsSection {
    #[serde(rename = "table", default)]
    pub tables: Vec<PermissionTableElement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PermissionTableElement {
    #[serde(rename = "@schema")]
    pub schema: Option<String>,

    #[serde(rename = "@name")]
    pub name: Option<String>,

    /// Each element may hold several tokens, comma or whitespace separated
    #[serde(rename = "permission", default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkflowMapsSection {
    #[serde(rename = "workflowMap", default)]
    pub workflow_maps: Vec<WorkflowMapElement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkflowMapElement {
    #[serde(rename = "@name")]
    pub name: Option<String>,

    #[serde(rename = "@modifiedSince")]
    pub modified_since: Option<String>,
}
