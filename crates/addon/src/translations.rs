//! Locale-keyed label tables.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

/// Translated labels, keyed by locale then message key.
///
/// This is the seam for the host's label resolver: the addon ships a TOML
/// table per locale and the host may merge or replace it. Lookups never
/// fail; a missing key falls back to the caller's default.
///
/// ```toml
/// [en]
/// "general.index" = "General"
///
/// [fr]
/// "general.index" = "Général"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Translations {
    #[serde(flatten)]
    locales: HashMap<String, HashMap<String, String>>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a translation table from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse a translation table from a TOML string.
    pub fn parse(toml: &str) -> Result<Self> {
        toml::from_str(toml).map_err(|e| Error::Translations(e.to_string()))
    }

    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Look up a label, falling back to `default` when missing.
    pub fn get_or(&self, locale: &str, key: &str, default: &str) -> String {
        self.get(locale, key).unwrap_or(default).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_lookup() {
        let t = Translations::parse(
            r#"
[en]
"general.index" = "General"
"sitemap.singular" = "Sitemap"

[fr]
"general.index" = "Général"
"#,
        )
        .unwrap();

        assert_eq!(t.get("en", "general.index"), Some("General"));
        assert_eq!(t.get("fr", "general.index"), Some("Général"));
        assert_eq!(t.get("fr", "sitemap.singular"), None);
    }

    #[test]
    fn test_get_or_falls_back() {
        let mut t = Translations::new();
        t.insert("en", "general.index", "General");

        assert_eq!(t.get_or("en", "general.index", "???"), "General");
        assert_eq!(t.get_or("de", "general.index", "General (default)"), "General (default)");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(matches!(
            Translations::parse("[en\nbroken"),
            Err(Error::Translations(_))
        ));
    }
}
