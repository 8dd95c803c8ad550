use depcheck_backends::{Config, Manifest};
use depcheck_core::errors::{ExError, ExErrorKind};
use depcheck_core::ports::{DocumentApi, DocumentSummary, SqlExecutor, SqlValue, VersionRecord};
use depcheck_core_types::Sensitive;
use std::cell::RefCell;
use std::collections::HashMap;

/// Configuration whose query overrides are the keys `FakeSql` answers to
#[allow(dead_code)]
pub const CONFIG: &str = r#"
[DB2]
connection_string = "fake-db2"
query = "data queries"
columns_query = "catalog columns"
tables_query = "catalog tables"

[DB2.T1]
connection_string = "fake-db2-{region}"
region = "t1"

[SQLServer_RACFUnload]
connection_string = "fake-racf"
query = "grants"

[SQLServer_emVision]
connection_string = "fake-emvision"
database = "EMV_TEST"
query = "workflows"
"#;

#[allow(dead_code)]
pub fn config() -> Config {
    Config::parse(CONFIG).unwrap()
}

#[allow(dead_code)]
pub fn manifest(xml: &str) -> Manifest {
    Manifest::from_text("app.xml", xml)
}

/// Recorded `select` call: connection string, query, params
pub type SqlCall = (String, String, Vec<SqlValue>);

/// In-memory SQL executor answering canned rows per query text
///
/// Unknown queries fail like a broken connection would.
#[derive(Default)]
pub struct FakeSql {
    rows: HashMap<String, Vec<Vec<SqlValue>>>,
    calls: RefCell<Vec<SqlCall>>,
}

#[allow(dead_code)]
impl FakeSql {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, query: &str, rows: &[&[&str]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|cell| SqlValue::from(*cell)).collect())
            .collect();
        self.rows.insert(query.to_string(), rows);
        self
    }

    /// Canned rows that may hold SQL NULL cells
    pub fn with_value_rows(mut self, query: &str, rows: Vec<Vec<SqlValue>>) -> Self {
        self.rows.insert(query.to_string(), rows);
        self
    }

    pub fn calls(&self) -> Vec<SqlCall> {
        self.calls.borrow().clone()
    }
}

impl SqlExecutor for FakeSql {
    fn select(
        &self,
        connection: &Sensitive<String>,
        query: &str,
        params: &[SqlValue],
    ) -> Result<Vec<Vec<SqlValue>>, ExError> {
        self.calls.borrow_mut().push((
            connection.expose().clone(),
            query.to_string(),
            params.to_vec(),
        ));
        self.rows.get(query).cloned().ok_or_else(|| {
            ExError::new(ExErrorKind::Backend)
                .with_op("fake_select")
                .with_message(format!("no such table for query '{}'", query))
        })
    }
}

/// In-memory document-management backend
pub struct FakeDocs {
    name: &'static str,
    documents: Vec<DocumentSummary>,
    versions: HashMap<String, Vec<VersionRecord>>,
    version_lookups: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl FakeDocs {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            documents: Vec::new(),
            versions: HashMap::new(),
            version_lookups: RefCell::new(Vec::new()),
        }
    }

    /// Add a document with `(major, minor, revision)` versions
    pub fn with_document(mut self, name: &str, versions: &[(u64, u64, u64)]) -> Self {
        let id = format!("{}-{}", self.name, name);
        self.documents.push(DocumentSummary {
            id: id.clone(),
            name: name.to_string(),
        });
        self.versions.insert(
            id,
            versions
                .iter()
                .map(|&(major, minor, revision)| VersionRecord {
                    major,
                    minor,
                    revision,
                })
                .collect(),
        );
        self
    }

    pub fn version_lookups(&self) -> Vec<String> {
        self.version_lookups.borrow().clone()
    }
}

impl DocumentApi for FakeDocs {
    fn backend_name(&self) -> &str {
        self.name
    }

    fn search_documents(&self) -> Result<Vec<DocumentSummary>, ExError> {
        Ok(self.documents.clone())
    }

    fn get_versions(&self, id: &str) -> Result<Vec<VersionRecord>, ExError> {
        self.version_lookups.borrow_mut().push(id.to_string());
        Ok(self.versions.get(id).cloned().unwrap_or_default())
    }
}
