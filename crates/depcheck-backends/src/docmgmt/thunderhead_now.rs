//! ThunderheadNow document search client.

#![allow(clippy::result_large_err)]

use crate::config::ConfigSection;
use crate::docmgmt::{lenient_id, RestSettings, RestTransport};
use crate::errors::Result;
use depcheck_core::errors::ExError;
use depcheck_core::ports::{DocumentApi, DocumentSummary, VersionRecord};
use serde::Deserialize;

pub const SECTION: &str = "API_ThunderheadNow";
const DEFAULT_SEARCH_PATH: &str = "/api/v1/documents";
const DEFAULT_VERSIONS_PATH: &str = "/api/v1/documents/{id}/versions";

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(deserialize_with = "lenient_id")]
    id: String,
    name: String,
}

/// Client for the ThunderheadNow REST API
#[derive(Debug, Clone)]
pub struct ThunderheadNowClient {
    transport: RestTransport,
}

impl ThunderheadNowClient {
    pub fn new(settings: RestSettings) -> Result<Self> {
        Ok(Self {
            transport: RestTransport::new("ThunderheadNow", settings)?,
        })
    }

    /// Build from the `[API_ThunderheadNow]` section
    pub fn from_section(section: &ConfigSection) -> Result<Self> {
        Self::new(RestSettings::from_section(
            section,
            DEFAULT_SEARCH_PATH,
            DEFAULT_VERSIONS_PATH,
        )?)
    }
}

impl DocumentApi for ThunderheadNowClient {
    fn backend_name(&self) -> &str {
        self.transport.backend()
    }

    fn search_documents(&self) -> std::result::Result<Vec<DocumentSummary>, ExError> {
        let items: Vec<SearchItem> = self
            .transport
            .get_json(&self.transport.settings().search_path, &[])?;
        Ok(items
            .into_iter()
            .map(|item| DocumentSummary {
                id: item.id,
                name: item.name,
            })
            .collect())
    }

    fn get_versions(&self, id: &str) -> std::result::Result<Vec<VersionRecord>, ExError> {
        self.transport.versions(id)
    }
}
