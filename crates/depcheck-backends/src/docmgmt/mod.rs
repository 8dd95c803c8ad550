//! Document-management REST backends
//!
//! Both backends list document templates and their loaded versions over
//! plain blocking HTTP GETs with optional basic auth.

#![allow(clippy::result_large_err)]

pub mod smart_comm;
pub mod thunderhead_now;

pub use smart_comm::SmartCommClient;
pub use thunderhead_now::ThunderheadNowClient;

use crate::config::ConfigSection;
use crate::errors::{backend_data, from_reqwest, http_status, Result};
use depcheck_core::ports::VersionRecord;
use depcheck_core_types::Sensitive;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Connection settings shared by the REST backends
#[derive(Debug, Clone)]
pub struct RestSettings {
    pub base_url: String,
    pub username: Option<String>,
    pub password: Option<Sensitive<String>>,
    pub search_path: String,
    /// Path template with an `{id}` placeholder
    pub versions_path: String,
}

impl RestSettings {
    /// Read settings from a config section, falling back to backend defaults for paths
    pub fn from_section(
        section: &ConfigSection,
        default_search_path: &str,
        default_versions_path: &str,
    ) -> Result<Self> {
        Ok(Self {
            base_url: section.require("base_url")?.trim_end_matches('/').to_string(),
            username: section.get("username").map(str::to_string),
            password: section.secret("password").cloned(),
            search_path: section
                .get("search_path")
                .unwrap_or(default_search_path)
                .to_string(),
            versions_path: section
                .get("versions_path")
                .unwrap_or(default_versions_path)
                .to_string(),
        })
    }
}

/// Blocking JSON GET shared by both clients
#[derive(Debug, Clone)]
pub(crate) struct RestTransport {
    backend: &'static str,
    settings: RestSettings,
    client: reqwest::blocking::Client,
}

impl RestTransport {
    pub(crate) fn new(backend: &'static str, settings: RestSettings) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| from_reqwest(backend, e))?;
        Ok(Self {
            backend,
            settings,
            client,
        })
    }

    pub(crate) fn backend(&self) -> &'static str {
        self.backend
    }

    pub(crate) fn settings(&self) -> &RestSettings {
        &self.settings
    }

    pub(crate) fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.settings.base_url, path);
        let mut request = self.client.get(&url).query(query);
        if let Some(username) = &self.settings.username {
            request = request.basic_auth(
                username,
                self.settings.password.as_ref().map(|p| p.expose().as_str()),
            );
        }

        tracing::debug!(backend = self.backend, path, "http get");
        let response = request.send().map_err(|e| from_reqwest(self.backend, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(http_status(self.backend, status, path));
        }

        let body = response.text().map_err(|e| from_reqwest(self.backend, e))?;
        serde_json::from_str(&body).map_err(|e| {
            backend_data(
                "http_decode",
                format!("{} returned an unexpected payload for {}: {}", self.backend, path, e),
            )
            .with_resource_key(self.backend)
        })
    }

    /// Versions of one document from the versions endpoint
    pub(crate) fn versions(&self, id: &str) -> Result<Vec<VersionRecord>> {
        let path = self.settings.versions_path.replace("{id}", id);
        let payload: Vec<VersionPayload> = self.get_json(&path, &[])?;
        Ok(payload.into_iter().map(VersionRecord::from).collect())
    }
}

/// Version entry as both backends return it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VersionPayload {
    #[serde(deserialize_with = "lenient_u64")]
    pub version_major: u64,
    #[serde(deserialize_with = "lenient_u64", default)]
    pub version_minor: u64,
    #[serde(deserialize_with = "lenient_u64", default)]
    pub version_revision: u64,
}

impl From<VersionPayload> for VersionRecord {
    fn from(p: VersionPayload) -> Self {
        VersionRecord {
            major: p.version_major,
            minor: p.version_minor,
            revision: p.version_revision,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u64),
    Text(String),
}

/// Accept `3` or `"3"`
pub(crate) fn lenient_u64<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("'{}' is not a version number", s))),
    }
}

/// Accept `42` or `"42"` as an identifier
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n.to_string()),
        NumberOrText::Text(s) => Ok(s),
    }
}
