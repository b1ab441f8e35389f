//! Settings groups and capability identifiers.

use registry::Replacement;
use serde::{Deserialize, Serialize};

/// Root capability gating the whole settings area.
pub const CONFIGURE_SETTINGS: &str = "configure seo settings";

/// Placeholder name used by the per-group capability templates.
pub const SETTINGS_GROUP: &str = "settings_group";

pub(crate) const VIEW_SETTINGS_TEMPLATE: &str = "view seo {settings_group} settings";
pub(crate) const UPDATE_SETTINGS_TEMPLATE: &str = "update seo {settings_group} settings";

/// Concrete identifier for viewing one settings group.
pub fn view_settings(group: &str) -> String {
    format!("view seo {group} settings")
}

/// Concrete identifier for updating one settings group.
pub fn update_settings(group: &str) -> String {
    format!("update seo {group} settings")
}

/// One screen in the settings area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsGroup {
    pub value: String,
    pub label: String,
}

impl SettingsGroup {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn replacement(&self) -> Replacement {
        Replacement::new(self.value.clone(), self.label.clone())
    }
}

/// The settings screens this addon ships.
pub fn settings_groups() -> Vec<SettingsGroup> {
    vec![
        SettingsGroup::new("general", "General"),
        SettingsGroup::new("marketing", "Marketing"),
        SettingsGroup::new("sitemap", "Sitemap"),
        SettingsGroup::new("defaults", "Defaults"),
        SettingsGroup::new("blueprints", "Blueprints"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_helpers_match_templates() {
        assert_eq!(view_settings("general"), "view seo general settings");
        assert_eq!(update_settings("sitemap"), "update seo sitemap settings");
        assert_eq!(
            VIEW_SETTINGS_TEMPLATE.replace("{settings_group}", "general"),
            view_settings("general")
        );
    }

    #[test]
    fn test_five_groups_shipped() {
        let groups = settings_groups();
        assert_eq!(groups.len(), 5);
        assert_eq!(groups[0].replacement(), Replacement::new("general", "General"));
    }
}
