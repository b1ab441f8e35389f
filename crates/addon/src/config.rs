//! Addon configuration loaded from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

/// Top-level addon configuration.
///
/// Every field has a default, so an absent or empty config file yields the
/// full addon.
#[derive(Debug, Clone, Deserialize)]
pub struct AddonConfig {
    /// Host nav section the SEO entry is placed under.
    #[serde(default = "default_nav_section")]
    pub nav_section: String,

    /// Locale used when resolving nav labels.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Settings groups to enable; empty means all of them.
    #[serde(default)]
    pub enabled_groups: Vec<String>,

    /// Whether to inject SEO fields into entry blueprints.
    #[serde(default = "default_true")]
    pub entry_fields: bool,

    /// Whether to inject SEO fields into term blueprints.
    #[serde(default = "default_true")]
    pub term_fields: bool,
}

fn default_nav_section() -> String {
    "Tools".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AddonConfig {
    fn default() -> Self {
        Self {
            nav_section: default_nav_section(),
            locale: default_locale(),
            enabled_groups: Vec::new(),
            entry_fields: true,
            term_fields: true,
        }
    }
}

impl AddonConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml: &str) -> Result<Self> {
        toml::from_str(toml).map_err(|e| Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_yields_defaults() {
        let config = AddonConfig::parse("").unwrap();
        assert_eq!(config.nav_section, "Tools");
        assert_eq!(config.locale, "en");
        assert!(config.enabled_groups.is_empty());
        assert!(config.entry_fields);
        assert!(config.term_fields);
    }

    #[test]
    fn test_partial_config() {
        let config = AddonConfig::parse(
            r#"
nav_section = "Site"
enabled_groups = ["general", "sitemap"]
term_fields = false
"#,
        )
        .unwrap();
        assert_eq!(config.nav_section, "Site");
        assert_eq!(config.enabled_groups, ["general", "sitemap"]);
        assert!(config.entry_fields);
        assert!(!config.term_fields);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(matches!(
            AddonConfig::parse("nav_section = ["),
            Err(Error::Config(_))
        ));
    }
}
