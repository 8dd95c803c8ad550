use depcheck_core::matching::{parse_date, Version};
use depcheck_core::model::{
    PermissionSet, ProvisionedTablePermission, ProvisionedTemplate, ProvisionedWorkflowMap,
    RequestedTablePermission, RequestedTemplate, RequestedWorkflowMap,
};

/// Requested template with an optional minimum version
#[allow(dead_code)]
pub fn requested_template(doc_code: &str, min_version: Option<&str>) -> RequestedTemplate {
    RequestedTemplate {
        doc_code: doc_code.to_string(),
        min_version: min_version.map(|v| Version::parse(v).unwrap()),
        min_version_text: min_version.map(str::to_string),
    }
}

/// Provisioned template with an optional resolved maximum version
#[allow(dead_code)]
pub fn provisioned_template(doc_code: &str, max_version: Option<&str>) -> ProvisionedTemplate {
    ProvisionedTemplate {
        doc_code: doc_code.to_string(),
        id: format!("{}-id", doc_code.to_lowercase()),
        max_version: max_version.map(|v| Version::parse(v).unwrap()),
    }
}

#[allow(dead_code)]
pub fn requested_workflow(name: &str, since: Option<&str>) -> RequestedWorkflowMap {
    RequestedWorkflowMap {
        name: name.to_string(),
        modified_since: since.map(|s| parse_date(s).unwrap()),
    }
}

#[allow(dead_code)]
pub fn provisioned_workflow(name: &str, modified: &str) -> ProvisionedWorkflowMap {
    ProvisionedWorkflowMap {
        name: name.to_string(),
        modified: Some(parse_date(modified).unwrap()),
    }
}

/// Permission set from manifest tokens, e.g. `&["SELECT", "INSERT"]`
#[allow(dead_code)]
pub fn perms(tokens: &[&str]) -> PermissionSet {
    tokens.iter().fold(PermissionSet::NONE, |acc, t| {
        acc.union(PermissionSet::from_manifest_token(t).unwrap())
    })
}

#[allow(dead_code)]
pub fn requested_permission(schema: &str, table: &str, tokens: &[&str]) -> RequestedTablePermission {
    RequestedTablePermission {
        schema: schema.to_string(),
        table: table.to_string(),
        permissions: perms(tokens),
    }
}

/// Grant row with flags from a RACF access code
#[allow(dead_code)]
pub fn grant(schema: &str, table: &str, access: &str) -> ProvisionedTablePermission {
    ProvisionedTablePermission {
        schema: schema.to_string(),
        table: table.to_string(),
        permissions: PermissionSet::from_access_code(access),
    }
}
