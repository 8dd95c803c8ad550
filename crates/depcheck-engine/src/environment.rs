//! Everything a category check reads from.

#![allow(clippy::result_large_err)]

use depcheck_backends::{Config, Manifest};
use depcheck_core::errors::{ExError, ExErrorKind, Result};
use depcheck_core::ports::{DocumentApi, SqlExecutor};
use depcheck_core::Category;
use depcheck_core_types::RunContext;

/// Configuration section names
pub mod sections {
    pub const DB2: &str = "DB2";
    pub const RACF_UNLOAD: &str = "SQLServer_RACFUnload";
    pub const EMVISION: &str = "SQLServer_emVision";
    pub const THUNDERHEAD_NOW: &str = depcheck_backends::docmgmt::thunderhead_now::SECTION;
    pub const SMART_COMM: &str = depcheck_backends::docmgmt::smart_comm::SECTION;
}

/// Inputs shared by every category check of one run
///
/// Document APIs are optional so callers only build HTTP clients when the
/// template check is selected.
pub struct CheckEnvironment<'a> {
    pub config: &'a Config,
    pub manifest: &'a Manifest,
    pub sql: &'a dyn SqlExecutor,
    /// ThunderheadNow
    pub primary_docs: Option<&'a dyn DocumentApi>,
    /// SmartCommunications; overrides the primary on shared doc codes
    pub secondary_docs: Option<&'a dyn DocumentApi>,
    pub db2_region: Option<String>,
    pub user_id: Option<String>,
    pub run: RunContext,
}

impl<'a> CheckEnvironment<'a> {
    pub fn new(config: &'a Config, manifest: &'a Manifest, sql: &'a dyn SqlExecutor) -> Self {
        Self {
            config,
            manifest,
            sql,
            primary_docs: None,
            secondary_docs: None,
            db2_region: None,
            user_id: None,
            run: RunContext::new(),
        }
    }

    pub fn with_document_apis(
        mut self,
        primary: &'a dyn DocumentApi,
        secondary: &'a dyn DocumentApi,
    ) -> Self {
        self.primary_docs = Some(primary);
        self.secondary_docs = Some(secondary);
        self
    }

    pub fn with_db2_region(mut self, region: impl Into<String>) -> Self {
        let region = region.into();
        self.run = self.run.with_region(region.clone());
        self.db2_region = Some(region);
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_run(mut self, run: RunContext) -> Self {
        self.run = run;
        self
    }

    pub(crate) fn require_user_id(&self, category: Category) -> Result<&str> {
        self.user_id.as_deref().ok_or_else(|| {
            ExError::new(ExErrorKind::Config)
                .with_op("require_user_id")
                .with_category(category)
                .with_message("a user id is required to look up granted permissions")
        })
    }

    pub(crate) fn require_document_apis(
        &self,
    ) -> Result<(&'a dyn DocumentApi, &'a dyn DocumentApi)> {
        match (self.primary_docs, self.secondary_docs) {
            (Some(primary), Some(secondary)) => Ok((primary, secondary)),
            _ => Err(ExError::new(ExErrorKind::Config)
                .with_op("require_document_apis")
                .with_category(Category::Template)
                .with_message("document-management backends are not configured")),
        }
    }
}
