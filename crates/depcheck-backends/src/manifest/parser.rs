//! Manifest loading and per-category extraction
//!
//! Files are read once at load time. Each `requested_*` call parses the XML
//! again and validates only the section its category owns.

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, manifest_parse, Result};
use crate::manifest::format::ManifestDocument;
use depcheck_core::errors::{DepCheckError, ExError};
use depcheck_core::matching::{parse_date, Version};
use depcheck_core::model::{
    Category, Keyed, KeyedCollection, PermissionSet, RequestedDataQuery, RequestedTablePermission,
    RequestedTableStructure, RequestedTemplate, RequestedWorkflowMap,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Raw text of one manifest file
#[derive(Debug, Clone)]
pub struct ManifestFile {
    pub path: PathBuf,
    pub content: String,
}

/// Manifest made of one or more XML files, in read order
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    files: Vec<ManifestFile>,
}

impl Manifest {
    /// Load a single XML file, or every `*.xml` file of a directory in name order
    pub fn load(path: &Path) -> Result<Manifest> {
        let metadata = fs::metadata(path).map_err(|e| io_error("manifest_load", path, e))?;

        let paths = if metadata.is_dir() {
            let mut paths: Vec<PathBuf> = fs::read_dir(path)
                .map_err(|e| io_error("manifest_load", path, e))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| {
                    p.is_file()
                        && p.extension()
                            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
                })
                .collect();
            paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
            paths
        } else {
            vec![path.to_path_buf()]
        };

        let mut files = Vec::with_capacity(paths.len());
        for p in paths {
            let content =
                fs::read_to_string(&p).map_err(|e| io_error("manifest_load", &p, e))?;
            files.push(ManifestFile { path: p, content });
        }

        tracing::debug!(files = files.len(), path = %path.display(), "manifest loaded");
        Ok(Manifest { files })
    }

    /// Manifest from in-memory text
    pub fn from_text(name: impl Into<PathBuf>, content: impl Into<String>) -> Manifest {
        Manifest {
            files: vec![ManifestFile {
                path: name.into(),
                content: content.into(),
            }],
        }
    }

    pub fn files(&self) -> &[ManifestFile] {
        &self.files
    }

    fn documents(&self) -> Result<Vec<ManifestDocument>> {
        self.files
            .iter()
            .map(|file| {
                quick_xml::de::from_str::<ManifestDocument>(&file.content)
                    .map_err(|e| manifest_parse(&file.path, e))
            })
            .collect()
    }

    /// `<documentTemplates>/<document>` entries
    pub fn requested_templates(&self) -> Result<KeyedCollection<RequestedTemplate>> {
        let category = Category::Template;
        let mut out = KeyedCollection::new();
        for doc in self.documents()? {
            for element in doc.document_templates.iter().flat_map(|s| &s.documents) {
                let doc_code = required("document", "docCode", &element.doc_code, category)?;
                let min_version_text = non_empty(&element.version).map(str::to_string);
                let min_version = match non_empty(&element.version) {
                    Some(text) => Some(Version::parse(text).map_err(|e| {
                        ExError::from(e)
                            .with_category(category)
                            .with_resource_key(doc_code.clone())
                    })?),
                    None => None,
                };
                insert_warn(
                    &mut out,
                    category,
                    RequestedTemplate {
                        doc_code,
                        min_version,
                        min_version_text,
                    },
                );
            }
        }
        Ok(out)
    }

    /// Documents flagged `dataQueryRequired="true"`
    pub fn requested_data_queries(&self) -> Result<KeyedCollection<RequestedDataQuery>> {
        let category = Category::DataQuery;
        let mut out = KeyedCollection::new();
        for doc in self.documents()? {
            for element in doc.document_templates.iter().flat_map(|s| &s.documents) {
                let doc_code = required("document", "docCode", &element.doc_code, category)?;
                let flagged = match non_empty(&element.data_query_required) {
                    Some(value) => parse_flag("dataQueryRequired", value).map_err(|e| {
                        ExError::from(e)
                            .with_category(category)
                            .with_resource_key(doc_code.clone())
                    })?,
                    None => false,
                };
                if flagged {
                    insert_warn(&mut out, category, RequestedDataQuery { doc_code });
                }
            }
        }
        Ok(out)
    }

    /// `<tableStructure>/<table>` entries with their `<column>` children
    pub fn requested_table_structures(&self) -> Result<KeyedCollection<RequestedTableStructure>> {
        let category = Category::TableStructure;
        let mut out = KeyedCollection::new();
        for doc in self.documents()? {
            for element in doc.table_structure.iter().flat_map(|s| &s.tables) {
                let schema = required("table", "schema", &element.schema, category)?;
                let table = required("table", "name", &element.name, category)?;
                let columns = element
                    .columns
                    .iter()
                    .map(|c| c.trim())
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect();
                insert_warn(
                    &mut out,
                    category,
                    RequestedTableStructure {
                        schema,
                        table,
                        columns,
                    },
                );
            }
        }
        Ok(out)
    }

    /// `<tablePermissions>/<table>` entries with their `<permission>` children
    pub fn requested_table_permissions(
        &self,
    ) -> Result<KeyedCollection<RequestedTablePermission>> {
        let category = Category::TablePermission;
        let mut out = KeyedCollection::new();
        for doc in self.documents()? {
            for element in doc.table_permissions.iter().flat_map(|s| &s.tables) {
                let schema = required("table", "schema", &element.schema, category)?;
                let table = required("table", "name", &element.name, category)?;

                let mut permissions = PermissionSet::NONE;
                for token in element
                    .permissions
                    .iter()
                    .flat_map(|p| p.split(|c: char| c == ',' || c.is_whitespace()))
                    .filter(|t| !t.is_empty())
                {
                    let flag = PermissionSet::from_manifest_token(token).map_err(|e| {
                        ExError::from(e)
                            .with_category(category)
                            .with_resource_key(format!("{}.{}", schema, table))
                    })?;
                    permissions = permissions.union(flag);
                }

                insert_warn(
                    &mut out,
                    category,
                    RequestedTablePermission {
                        schema,
                        table,
                        permissions,
                    },
                );
            }
        }
        Ok(out)
    }

    /// `<workflowMaps>/<workflowMap>` entries
    pub fn requested_workflow_maps(&self) -> Result<KeyedCollection<RequestedWorkflowMap>> {
        let category = Category::WorkflowMap;
        let mut out = KeyedCollection::new();
        for doc in self.documents()? {
            for element in doc.workflow_maps.iter().flat_map(|s| &s.workflow_maps) {
                let name = required("workflowMap", "name", &element.name, category)?;
                let modified_since = match non_empty(&element.modified_since) {
                    Some(text) => Some(parse_date(text).map_err(|e| {
                        ExError::from(e)
                            .with_category(category)
                            .with_resource_key(name.clone())
                    })?),
                    None => None,
                };
                insert_warn(
                    &mut out,
                    category,
                    RequestedWorkflowMap {
                        name,
                        modified_since,
                    },
                );
            }
        }
        Ok(out)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required(
    element: &str,
    attribute: &str,
    value: &Option<String>,
    category: Category,
) -> Result<String> {
    non_empty(value).map(str::to_string).ok_or_else(|| {
        ExError::from(DepCheckError::MissingAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
        })
        .with_op("manifest_parse")
        .with_category(category)
    })
}

/// Strict true/false; any other value is rejected rather than read as unflagged
fn parse_flag(attribute: &str, value: &str) -> std::result::Result<bool, DepCheckError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(DepCheckError::InvalidFlag {
            attribute: attribute.to_string(),
            value: value.to_string(),
        })
    }
}

fn insert_warn<T: Keyed>(out: &mut KeyedCollection<T>, category: Category, item: T) {
    let key = item.key();
    if out.insert(item).is_some() {
        tracing::warn!(
            category = category.name(),
            resource_key = %key,
            "duplicate manifest entry, last definition wins"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depcheck_core::ExErrorKind;

    const SAMPLE: &str = r#"<?xml version="1.0"?>
<application>
  <documentTemplates>
    <document docCode="DOC1" version="2.0.0" dataQueryRequired="true"/>
    <document docCode="DOC2"/>
    <document docCode="DOC3" version="1.2" dataQueryRequired="FALSE"/>
  </documentTemplates>
  <tableStructure>
    <table schema="DBA" name="ACCOUNT"><column>ID</column><column> NAME </column></table>
    <table schema="OPERS" name="AUDIT"/>
  </tableStructure>
  <tablePermissions>
    <table schema="DBA" name="ACCT*"><permission>SELECT</permission><permission>insert, update</permission></table>
  </tablePermissions>
  <workflowMaps>
    <workflowMap name="WF1" modifiedSince="2024-01-01"/>
    <workflowMap name="WF2"/>
  </workflowMaps>
</application>
"#;

    fn sample() -> Manifest {
        Manifest::from_text("sample.xml", SAMPLE)
    }

    #[test]
    fn test_templates() {
        let templates = sample().requested_templates().unwrap();
        assert_eq!(templates.len(), 3);
        assert_eq!(
            templates.get("DOC1").unwrap().min_version,
            Some(Version::new(2, 0, 0))
        );
        assert_eq!(templates.get("DOC2").unwrap().min_version, None);
        assert_eq!(
            templates.get("DOC3").unwrap().min_version,
            Some(Version::new(1, 2, 0))
        );
        assert_eq!(
            templates.get("DOC3").unwrap().min_version_text.as_deref(),
            Some("1.2")
        );
    }

    #[test]
    fn test_data_queries_follow_flag() {
        let queries = sample().requested_data_queries().unwrap();
        let keys: Vec<_> = queries.iter().map(|q| q.doc_code.as_str()).collect();
        assert_eq!(keys, vec!["DOC1"]);
    }

    #[test]
    fn test_table_structures() {
        let tables = sample().requested_table_structures().unwrap();
        assert_eq!(
            tables.get("DBA.ACCOUNT").unwrap().columns,
            vec!["ID".to_string(), "NAME".to_string()]
        );
        assert!(tables.get("OPERS.AUDIT").unwrap().columns.is_empty());
    }

    #[test]
    fn test_table_permissions_tokens() {
        let perms = sample().requested_table_permissions().unwrap();
        let acct = perms.get("DBA.ACCT*").unwrap();
        assert_eq!(acct.permissions.labels(), vec!["READ", "CREATE", "UPDATE"]);
    }

    #[test]
    fn test_workflow_maps() {
        let maps = sample().requested_workflow_maps().unwrap();
        assert_eq!(maps.len(), 2);
        assert_eq!(
            maps.get("WF1").unwrap().modified_since,
            Some(parse_date("2024-01-01").unwrap())
        );
        assert_eq!(maps.get("WF2").unwrap().modified_since, None);
    }

    #[test]
    fn test_bad_section_only_fails_its_category() {
        let manifest = Manifest::from_text(
            "bad.xml",
            r#"<application>
                 <documentTemplates><document docCode="DOC1" version="two"/></documentTemplates>
                 <workflowMaps><workflowMap name="WF1"/></workflowMaps>
               </application>"#,
        );

        let err = manifest.requested_templates().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Validation);
        assert_eq!(err.category(), Some(Category::Template));
        assert_eq!(err.resource_key(), Some("DOC1"));

        assert_eq!(manifest.requested_workflow_maps().unwrap().len(), 1);
        assert!(manifest.requested_data_queries().unwrap().is_empty());
    }

    #[test]
    fn test_missing_attribute_is_parse_error() {
        let manifest = Manifest::from_text(
            "bad.xml",
            r#"<application><workflowMaps><workflowMap modifiedSince="2024-01-01"/></workflowMaps></application>"#,
        );
        let err = manifest.requested_workflow_maps().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Parse);
        assert!(err.message().contains("name"));
    }

    #[test]
    fn test_unknown_permission_and_bad_flag() {
        let manifest = Manifest::from_text(
            "bad.xml",
            r#"<application>
                 <documentTemplates><document docCode="D" dataQueryRequired="yes"/></documentTemplates>
                 <tablePermissions><table schema="DBA" name="T"><permission>GRANT</permission></table></tablePermissions>
               </application>"#,
        );
        assert_eq!(
            manifest.requested_data_queries().unwrap_err().kind(),
            ExErrorKind::Parse
        );
        assert_eq!(
            manifest.requested_table_permissions().unwrap_err().kind(),
            ExErrorKind::Parse
        );
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let manifest = Manifest::from_text(
            "dup.xml",
            r#"<application>
                 <documentTemplates><document docCode="DOC1" version="1.0"/></documentTemplates>
                 <workflowMaps><workflowMap name="WF1"/></workflowMaps>
                 <documentTemplates><document docCode="DOC1" version="3.0"/></documentTemplates>
               </application>"#,
        );
        let templates = manifest.requested_templates().unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(
            templates.get("DOC1").unwrap().min_version,
            Some(Version::new(3, 0, 0))
        );
    }

    #[test]
    fn test_malformed_xml_is_parse_error() {
        let manifest = Manifest::from_text("broken.xml", "<application><documentTemplates></application>");
        let err = manifest.requested_templates().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Parse);
        assert_eq!(err.resource_key(), Some("broken.xml"));
    }
}
