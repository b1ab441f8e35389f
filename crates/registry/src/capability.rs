//! Capability identifiers and concrete capabilities.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::{Error, Result};

/// A validated, concrete capability identifier.
///
/// Construction fails for empty strings and for strings that still contain
/// `{placeholder}` braces, so a typo'd placeholder name or a template that
/// never got substituted surfaces at registration time rather than as a
/// capability nobody can ever hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CapabilityId(String);

impl CapabilityId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::InvalidId {
                id,
                reason: "identifier is empty".to_string(),
            });
        }
        if id.contains('{') || id.contains('}') {
            return Err(Error::InvalidId {
                id,
                reason: "identifier contains an unresolved placeholder".to_string(),
            });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CapabilityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Allows `HashMap<CapabilityId, _>` lookups keyed by plain `&str`.
impl Borrow<str> for CapabilityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for CapabilityId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CapabilityId::new(s).map_err(de::Error::custom)
    }
}

/// One materialization of a placeholder: the `value` is substituted into
/// identifier templates, the `label` into label templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub value: String,
    pub label: String,
}

impl Replacement {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A materialized capability in the registry.
///
/// `parent` and `children` hold identifiers, not owned nodes; the registry
/// owns every capability and the references exist for tree lookup only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Capability {
    pub id: CapabilityId,
    pub label: String,
    pub parent: Option<CapabilityId>,
    pub children: Vec<CapabilityId>,
    pub group: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_id() {
        let id = CapabilityId::new("configure settings").unwrap();
        assert_eq!(id.as_str(), "configure settings");
        assert_eq!(id.to_string(), "configure settings");
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(matches!(
            CapabilityId::new("   "),
            Err(Error::InvalidId { .. })
        ));
    }

    #[test]
    fn test_unresolved_placeholder_rejected() {
        let err = CapabilityId::new("view {settings_group} settings").unwrap_err();
        assert!(matches!(err, Error::InvalidId { .. }));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: CapabilityId = serde_json::from_str("\"view general settings\"").unwrap();
        assert_eq!(ok.as_str(), "view general settings");

        let bad = serde_json::from_str::<CapabilityId>("\"view {group} settings\"");
        assert!(bad.is_err());
    }
}
