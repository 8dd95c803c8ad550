//! TOML backend configuration.
//!
//! Each top-level table names a backend. A nested table named after a region
//! overrides that backend's keys for the region:
//!
//! ```toml
//! [DB2]
//! connection_string = "{path}"
//!
//! [DB2.T1]
//! path = "/var/lib/depcheck/db2-t1.sqlite"
//! ```
//!
//! String values may reference other keys of the same merged section with
//! `{key}` placeholders; `{{` and `}}` produce literal braces.

#![allow(clippy::result_large_err)]

use crate::errors::{config_invalid, config_missing, io_error, Result};
use depcheck_core_types::Sensitive;
use std::collections::BTreeMap;
use std::path::Path;

/// Keys whose values are always held as [`Sensitive`]
const SECRET_KEYS: &[&str] = &["password", "secret", "token", "api_key"];

pub const CONNECTION_STRING_KEY: &str = "connection_string";

fn is_secret_key(key: &str) -> bool {
    SECRET_KEYS.contains(&key.to_ascii_lowercase().as_str())
}

/// Parsed configuration file
#[derive(Debug, Clone)]
pub struct Config {
    root: toml::Table,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Config> {
        let content =
            std::fs::read_to_string(path).map_err(|e| io_error("config_load", path, e))?;
        Self::parse(&content).map_err(|e| {
            let message = format!("{}: {}", path.display(), e.message());
            e.with_message(message)
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Config> {
        let root: toml::Table =
            toml::from_str(content).map_err(|e| config_invalid("<root>", e.to_string()))?;
        Ok(Config { root })
    }

    /// Whether a top-level section exists
    pub fn has_section(&self, name: &str) -> bool {
        matches!(self.root.get(name), Some(toml::Value::Table(_)))
    }

    /// Merged key/value view of `[name]` overlaid with `[name.region]`
    ///
    /// # Errors
    ///
    /// `Config` when `[name]` is absent or not a table.
    pub fn section(&self, name: &str, region: Option<&str>) -> Result<ConfigSection> {
        let table = match self.root.get(name) {
            Some(toml::Value::Table(table)) => table,
            Some(_) => return Err(config_invalid(name, format!("[{}] is not a table", name))),
            None => return Err(config_missing(name, None)),
        };

        let mut section = ConfigSection::new(name);
        section.absorb(table);

        if let Some(region) = region {
            match table.get(region) {
                Some(toml::Value::Table(overrides)) => section.absorb(overrides),
                Some(_) => {
                    return Err(config_invalid(
                        name,
                        format!("[{}.{}] is not a table", name, region),
                    ))
                }
                None => {
                    tracing::debug!(section = name, region, "no region overrides configured");
                }
            }
        }

        Ok(section)
    }
}

/// Flattened settings of one backend
#[derive(Debug, Clone, Default)]
pub struct ConfigSection {
    name: String,
    plain: BTreeMap<String, String>,
    secrets: BTreeMap<String, Sensitive<String>>,
}

impl ConfigSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder used by tests and callers that assemble sections by hand
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value.into());
        self
    }

    fn set(&mut self, key: &str, value: String) {
        if is_secret_key(key) {
            self.plain.remove(key);
            self.secrets.insert(key.to_string(), Sensitive::new(value));
        } else {
            self.plain.insert(key.to_string(), value);
        }
    }

    // Scalars only; nested tables are region overrides and arrays are not settings
    fn absorb(&mut self, table: &toml::Table) {
        for (key, value) in table {
            let text = match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Datetime(d) => d.to_string(),
                toml::Value::Array(_) | toml::Value::Table(_) => continue,
            };
            self.set(key, text);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Non-secret value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.plain.get(key).map(String::as_str)
    }

    /// Non-secret value that must be present
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| config_missing(&self.name, Some(key)))
    }

    /// Secret value
    pub fn secret(&self, key: &str) -> Option<&Sensitive<String>> {
        self.secrets.get(key)
    }

    /// Fill `{key}` placeholders in `template` from this section
    ///
    /// # Errors
    ///
    /// `Config` for unknown placeholders or unbalanced braces.
    pub fn render(&self, template: &str) -> Result<Sensitive<String>> {
        let mut out = String::with_capacity(template.len());
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    out.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    out.push('}');
                }
                '{' => {
                    let mut key = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(k) => key.push(k),
                            None => {
                                return Err(config_invalid(
                                    &self.name,
                                    "unterminated placeholder in template",
                                ))
                            }
                        }
                    }
                    let value = self
                        .plain
                        .get(&key)
                        .map(String::as_str)
                        .or_else(|| self.secrets.get(&key).map(|s| s.expose().as_str()))
                        .ok_or_else(|| {
                            config_invalid(&self.name, format!("unknown placeholder {{{}}}", key))
                        })?;
                    out.push_str(value);
                }
                '}' => {
                    return Err(config_invalid(&self.name, "unmatched '}' in template"));
                }
                other => out.push(other),
            }
        }

        Ok(Sensitive::new(out))
    }

    /// Rendered `connection_string`
    pub fn connection_string(&self) -> Result<Sensitive<String>> {
        let template = self.require(CONNECTION_STRING_KEY)?;
        self.render(template)
    }

    /// Rendered query override under `key`, or the rendered default
    pub fn query(&self, key: &str, default: &str) -> Result<String> {
        let template = self.get(key).unwrap_or(default);
        Ok(self.render(template)?.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depcheck_core::ExErrorKind;

    const SAMPLE: &str = r#"
[DB2]
connection_string = "sqlite://{path}"
path = "default.sqlite"

[DB2.T1]
path = "t1.sqlite"

[API_ThunderheadNow]
base_url = "https://th.example"
username = "svc"
password = "hunter2"
port = 8443
"#;

    #[test]
    fn test_region_overrides_base_keys() {
        let config = Config::parse(SAMPLE).unwrap();

        let t1 = config.section("DB2", Some("T1")).unwrap();
        assert_eq!(t1.get("path"), Some("t1.sqlite"));
        assert_eq!(t1.connection_string().unwrap().expose(), "sqlite://t1.sqlite");

        let base = config.section("DB2", None).unwrap();
        assert_eq!(base.get("path"), Some("default.sqlite"));
        assert!(base.get("T1").is_none());
    }

    #[test]
    fn test_missing_section_is_config_error() {
        let config = Config::parse(SAMPLE).unwrap();
        let err = config.section("SQLServer_emVision", None).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Config);
        assert_eq!(err.resource_key(), Some("SQLServer_emVision"));
    }

    #[test]
    fn test_secrets_are_redacted() {
        let config = Config::parse(SAMPLE).unwrap();
        let section = config.section("API_ThunderheadNow", None).unwrap();

        assert!(section.get("password").is_none());
        assert_eq!(section.secret("password").unwrap().expose(), "hunter2");
        assert_eq!(section.get("port"), Some("8443"));
        assert!(!format!("{:?}", section).contains("hunter2"));
    }

    #[test]
    fn test_render_escapes_and_errors() {
        let section = ConfigSection::new("S")
            .with("database", "EMV")
            .with("password", "pw");

        assert_eq!(
            section.render("[{database}].{{x}};PWD={password}").unwrap().expose(),
            "[EMV].{x};PWD=pw"
        );
        assert_eq!(
            section.render("{nope}").unwrap_err().kind(),
            ExErrorKind::Config
        );
        assert!(section.render("{database").is_err());
        assert!(section.render("a}b").is_err());
    }

    #[test]
    fn test_query_override_falls_back_to_default() {
        let section = ConfigSection::new("S").with("query", "SELECT 1");
        assert_eq!(section.query("query", "SELECT 2").unwrap(), "SELECT 1");
        assert_eq!(section.query("tables_query", "SELECT 2").unwrap(), "SELECT 2");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Config::parse("[DB2\nx = 1").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Config);
    }
}
