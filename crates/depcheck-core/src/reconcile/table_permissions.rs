//! Wildcard-aware permission reconciliation.
//!
//! Two identifiers match when either one, read as a wildcard pattern, matches
//! the other. A requested `ACCT*` therefore covers a literal `ACCTHIST` grant,
//! and a `DBA.*` grant covers a literal requested `DBA.ACCOUNT`. Flags are
//! OR-ed over every matching grant row before comparing with the request.

use crate::errors::{ExError, Result};
use crate::matching::WildcardPattern;
use crate::model::{
    table_key, Category, Failure, FailureReason, KeyedCollection, PermissionSet,
    ProvisionedTablePermission, RequestedTablePermission,
};

struct CompiledGrant<'a> {
    schema: WildcardPattern,
    table: WildcardPattern,
    row: &'a ProvisionedTablePermission,
}

fn identifiers_match(a_pattern: &WildcardPattern, b_pattern: &WildcardPattern) -> bool {
    a_pattern.matches(b_pattern.as_str()) || b_pattern.matches(a_pattern.as_str())
}

fn compile_pair(schema: &str, table: &str) -> Result<(WildcardPattern, WildcardPattern)> {
    let key = table_key(schema, table);
    let schema = WildcardPattern::compile(schema).map_err(|e| {
        ExError::from(e)
            .with_category(Category::TablePermission)
            .with_resource_key(key.clone())
    })?;
    let table = WildcardPattern::compile(table).map_err(|e| {
        ExError::from(e)
            .with_category(Category::TablePermission)
            .with_resource_key(key.clone())
    })?;
    Ok((schema, table))
}

/// Check that every requested permission is granted by some matching row
///
/// Each requested record yields at most one failure: `Missing` when no grant
/// row matches, otherwise `PermissionsNotGranted` with the flags still absent
/// after the union. A record requesting no flags always passes.
///
/// # Errors
///
/// A `Validation` error when a requested identifier is not a valid pattern.
/// The offending `schema.table` is logged before returning.
pub fn reconcile_table_permissions(
    requested: &KeyedCollection<RequestedTablePermission>,
    provisioned: &[ProvisionedTablePermission],
) -> Result<Vec<Failure>> {
    // Grant identifiers are backend data; a malformed class is read literally
    let grants: Vec<CompiledGrant<'_>> = provisioned
        .iter()
        .map(|row| CompiledGrant {
            schema: WildcardPattern::compile_lenient(&row.schema),
            table: WildcardPattern::compile_lenient(&row.table),
            row,
        })
        .collect();

    let mut failures = Vec::new();
    for req in requested {
        let (schema, table) = compile_pair(&req.schema, &req.table).map_err(log_key)?;
        if req.permissions.is_empty() {
            continue;
        }

        let mut matched = 0usize;
        let mut granted = PermissionSet::NONE;
        for grant in &grants {
            if identifiers_match(&schema, &grant.schema) && identifiers_match(&table, &grant.table)
            {
                matched += 1;
                granted = granted.union(grant.row.permissions);
            }
        }

        if matched == 0 {
            failures.push(Failure::missing(req.clone()));
            continue;
        }

        let missing = req.permissions.missing_from(granted);
        if !missing.is_empty() {
            tracing::debug!(
                resource_key = %table_key(&req.schema, &req.table),
                matched,
                missing = ?missing.labels(),
                "permissions not granted"
            );
            failures.push(Failure::new(
                req.clone(),
                FailureReason::PermissionsNotGranted { missing },
            ));
        }
    }

    Ok(failures)
}

fn log_key(err: ExError) -> ExError {
    tracing::error!(
        resource_key = err.resource_key().unwrap_or_default(),
        err.code = err.code(),
        "failed evaluating requested permissions: {}",
        err.message()
    );
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    fn req(schema: &str, table: &str, perms: PermissionSet) -> RequestedTablePermission {
        RequestedTablePermission {
            schema: schema.to_string(),
            table: table.to_string(),
            permissions: perms,
        }
    }

    fn grant(schema: &str, table: &str, perms: PermissionSet) -> ProvisionedTablePermission {
        ProvisionedTablePermission {
            schema: schema.to_string(),
            table: table.to_string(),
            permissions: perms,
        }
    }

    #[test]
    fn test_wildcard_schema_and_table() {
        let requested: KeyedCollection<_> =
            vec![req("SCH*", "TBL?", PermissionSet::READ)].into_iter().collect();

        let hit = vec![grant("SCHEMA", "TBL1", PermissionSet::READ)];
        assert!(reconcile_table_permissions(&requested, &hit).unwrap().is_empty());

        let miss = vec![grant("OTHER", "TBL1", PermissionSet::READ)];
        let failures = reconcile_table_permissions(&requested, &miss).unwrap();
        assert_eq!(failures[0].reason, FailureReason::Missing);
    }

    #[test]
    fn test_union_across_rows() {
        let wanted = PermissionSet::READ.union(PermissionSet::CREATE);
        let requested: KeyedCollection<_> = vec![req("DBA", "ACCT*", wanted)].into_iter().collect();
        let provisioned = vec![
            grant("DBA", "ACCT1", PermissionSet::READ),
            grant("DBA", "ACCT2", PermissionSet::CREATE),
        ];

        assert!(reconcile_table_permissions(&requested, &provisioned)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_grant_pattern_covers_literal_request() {
        let requested: KeyedCollection<_> =
            vec![req("DBA", "ACCOUNT", PermissionSet::UPDATE)].into_iter().collect();
        let provisioned = vec![grant("DBA", "*", PermissionSet::from_access_code("IUD"))];

        assert!(reconcile_table_permissions(&requested, &provisioned)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_partial_grant_reports_missing_flags_once() {
        let wanted = PermissionSet::READ
            .union(PermissionSet::UPDATE)
            .union(PermissionSet::DELETE);
        let requested: KeyedCollection<_> = vec![req("DBA", "T1", wanted)].into_iter().collect();
        let provisioned = vec![grant("DBA", "T1", PermissionSet::READ)];

        let failures = reconcile_table_permissions(&requested, &provisioned).unwrap();
        assert_eq!(failures.len(), 1);
        match &failures[0].reason {
            FailureReason::PermissionsNotGranted { missing } => {
                assert_eq!(missing.labels(), vec!["UPDATE", "DELETE"]);
            }
            other => panic!("unexpected reason {:?}", other),
        }
    }

    #[test]
    fn test_request_without_flags_passes_unmatched() {
        let requested: KeyedCollection<_> =
            vec![req("DBA", "NOPE", PermissionSet::NONE)].into_iter().collect();
        let provisioned = vec![grant("DBA", "ACCOUNT", PermissionSet::READ)];

        assert!(reconcile_table_permissions(&requested, &provisioned)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_malformed_grant_identifier_is_read_literally() {
        let requested: KeyedCollection<_> = vec![
            req("DBA", "T*", PermissionSet::READ),
            req("DBA", "ACCOUNT", PermissionSet::READ),
        ]
        .into_iter()
        .collect();
        let provisioned = vec![
            grant("DBA", "T[1", PermissionSet::READ),
            grant("DBA", "ACCOUNT", PermissionSet::READ),
        ];

        assert!(reconcile_table_permissions(&requested, &provisioned)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_validation_error_with_key() {
        let requested: KeyedCollection<_> =
            vec![req("DBA", "T[1", PermissionSet::READ)].into_iter().collect();
        let err = reconcile_table_permissions(&requested, &[]).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::Validation);
        assert_eq!(err.resource_key(), Some("DBA.T[1"));
        assert_eq!(err.category(), Some(Category::TablePermission));
    }
}
