//! Blueprint data model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

/// A content blueprint: the field layout the host renders for a piece of
/// content. Exchanged with the host as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Blueprint {
    pub fn new(handle: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn section(&self, handle: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.handle == handle)
    }

    pub fn has_section(&self, handle: &str) -> bool {
        self.section(handle).is_some()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A named group of fields within a blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub handle: String,
    pub display: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Section {
    pub fn new(handle: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            display: display.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, handle: impl Into<String>, config: Value) -> Self {
        self.fields.push(Field {
            handle: handle.into(),
            config,
        });
        self
    }

    pub fn field(&self, handle: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.handle == handle)
    }
}

/// A single field. The config is opaque JSON, mirroring how the host stores
/// field options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub handle: String,
    #[serde(default)]
    pub config: Value,
}
