//! SmartCommunications content search client.

#![allow(clippy::result_large_err)]

use crate::config::ConfigSection;
use crate::docmgmt::{lenient_id, RestSettings, RestTransport};
use crate::errors::Result;
use depcheck_core::errors::ExError;
use depcheck_core::ports::{DocumentApi, DocumentSummary, VersionRecord};
use serde::Deserialize;

pub const SECTION: &str = "API_SmartCommunications";
/// Content type of document templates in the SmartCommunications repository
pub const TEMPLATE_CONTENT_TYPE: &str = "application/x-thunderhead-ddv";
const DEFAULT_SEARCH_PATH: &str = "/api/v1/content/search";
const DEFAULT_VERSIONS_PATH: &str = "/api/v1/content/{id}/versions";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItem {
    #[serde(deserialize_with = "lenient_id")]
    item_id: String,
    item_name: String,
}

/// Client for the SmartCommunications REST API
#[derive(Debug, Clone)]
pub struct SmartCommClient {
    transport: RestTransport,
}

impl SmartCommClient {
    pub fn new(settings: RestSettings) -> Result<Self> {
        Ok(Self {
            transport: RestTransport::new("SmartCommunications", settings)?,
        })
    }

    /// Build from the `[API_SmartCommunications]` section
    pub fn from_section(section: &ConfigSection) -> Result<Self> {
        Self::new(RestSettings::from_section(
            section,
            DEFAULT_SEARCH_PATH,
            DEFAULT_VERSIONS_PATH,
        )?)
    }
}

impl DocumentApi for SmartCommClient {
    fn backend_name(&self) -> &str {
        self.transport.backend()
    }

    fn search_documents(&self) -> std::result::Result<Vec<DocumentSummary>, ExError> {
        let items: Vec<SearchItem> = self.transport.get_json(
            &self.transport.settings().search_path,
            &[("type", TEMPLATE_CONTENT_TYPE)],
        )?;
        Ok(items
            .into_iter()
            .map(|item| DocumentSummary {
                id: item.item_id,
                name: item.item_name,
            })
            .collect())
    }

    fn get_versions(&self, id: &str) -> std::result::Result<Vec<VersionRecord>, ExError> {
        self.transport.versions(id)
    }
}
