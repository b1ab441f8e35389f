//! Addon boot: the single startup routine.

use registry::{CapabilityId, Node, Registry, Replacement};
use schema::{BlueprintEvent, EntrySeoFields, HookSet, TermSeoFields};

use crate::settings::{
    self, CONFIGURE_SETTINGS, SETTINGS_GROUP, UPDATE_SETTINGS_TEMPLATE, VIEW_SETTINGS_TEMPLATE,
};
use crate::{AddonConfig, NavItem, Result, SettingsGroup, Translations};

/// Everything the host consumes, assembled once.
///
/// Construction fails fast: any capability registration error aborts boot
/// before the host sees a partially built addon. The finished value is
/// immutable; concurrent reads are safe.
pub struct Addon {
    pub registry: Registry,
    pub nav: NavItem,
    pub hooks: HookSet,
    pub translations: Translations,
    pub config: AddonConfig,
}

impl Addon {
    /// Boot with the addon's built-in (untranslated) labels.
    pub fn boot(config: AddonConfig) -> Result<Self> {
        Self::boot_with(config, Translations::new())
    }

    /// Boot with a translation table for nav labels.
    pub fn boot_with(config: AddonConfig, translations: Translations) -> Result<Self> {
        let groups = enabled_groups(&config);
        let registry = boot_registry(&groups)?;
        let nav = boot_nav(&config, &translations, &groups)?;
        let hooks = boot_hooks(&config);
        Ok(Self {
            registry,
            nav,
            hooks,
            translations,
            config,
        })
    }
}

fn enabled_groups(config: &AddonConfig) -> Vec<SettingsGroup> {
    let all = settings::settings_groups();
    if config.enabled_groups.is_empty() {
        return all;
    }
    all.into_iter()
        .filter(|group| config.enabled_groups.contains(&group.value))
        .collect()
}

/// One root, one parameterized `view` child per enabled group, each with an
/// `update` child sharing the group's substitution.
fn boot_registry(groups: &[SettingsGroup]) -> Result<Registry> {
    let replacements: Vec<Replacement> = groups.iter().map(SettingsGroup::replacement).collect();

    let mut registry = Registry::new();
    registry.register_in(
        "seo",
        "SEO",
        CONFIGURE_SETTINGS,
        "Configure SEO Settings",
        move |root| {
            root.child(VIEW_SETTINGS_TEMPLATE, "View :settings_group Settings")
                .with_replacements(SETTINGS_GROUP, move || Ok(replacements.clone()))
                .with_children(vec![Node::new(
                    UPDATE_SETTINGS_TEMPLATE,
                    "Update :settings_group Settings",
                )]);
        },
    )?;
    Ok(registry)
}

fn boot_nav(
    config: &AddonConfig,
    translations: &Translations,
    groups: &[SettingsGroup],
) -> Result<NavItem> {
    let locale = config.locale.as_str();
    let mut nav = NavItem::new(translations.get_or(locale, "seo.index", "SEO"), "seo.settings")
        .section(config.nav_section.clone())
        .icon("seo-search-graph")
        .gated(CapabilityId::new(CONFIGURE_SETTINGS)?);

    for group in groups {
        let key = format!("{}.index", group.value);
        nav = nav.child(
            NavItem::new(
                translations.get_or(locale, &key, &group.label),
                format!("seo.{}.index", group.value),
            )
            .gated(CapabilityId::new(settings::view_settings(&group.value))?),
        );
    }
    Ok(nav)
}

fn boot_hooks(config: &AddonConfig) -> HookSet {
    let mut hooks = HookSet::new();
    if config.entry_fields {
        hooks.on(BlueprintEvent::EntryFound, EntrySeoFields);
    }
    if config.term_fields {
        hooks.on(BlueprintEvent::TermFound, TermSeoFields);
    }
    hooks
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry::GrantSet;
    use schema::Blueprint;

    #[test]
    fn test_boot_registers_full_capability_tree() {
        let addon = Addon::boot(AddonConfig::default()).unwrap();

        // Root + (view + update) per group.
        assert_eq!(addon.registry.len(), 11);
        assert!(addon.registry.contains(CONFIGURE_SETTINGS));
        for group in settings::settings_groups() {
            assert!(addon.registry.contains(&settings::view_settings(&group.value)));
            assert!(addon.registry.contains(&settings::update_settings(&group.value)));
        }

        let view = addon.registry.lookup("view seo sitemap settings").unwrap();
        assert_eq!(view.label, "View Sitemap Settings");
        assert_eq!(view.group.as_deref(), Some("seo"));
    }

    #[test]
    fn test_boot_builds_nav_per_group() {
        let addon = Addon::boot(AddonConfig::default()).unwrap();

        assert_eq!(addon.nav.title, "SEO");
        assert_eq!(addon.nav.section.as_deref(), Some("Tools"));
        assert_eq!(addon.nav.children.len(), 5);
        assert_eq!(addon.nav.children[0].route, "seo.general.index");

        // Every child gate resolves to a registered capability.
        for child in &addon.nav.children {
            let gate = child.gate.as_ref().unwrap();
            assert!(addon.registry.contains(gate.as_str()));
        }
    }

    #[test]
    fn test_boot_subscribes_blueprint_hooks() {
        let addon = Addon::boot(AddonConfig::default()).unwrap();
        assert_eq!(addon.hooks.count(BlueprintEvent::EntryFound), 1);
        assert_eq!(addon.hooks.count(BlueprintEvent::TermFound), 1);

        let bp = addon
            .hooks
            .apply(BlueprintEvent::EntryFound, Blueprint::new("article", "Article"));
        assert!(bp.has_section(schema::SEO_SECTION));
    }

    #[test]
    fn test_enabled_groups_limit_everything() {
        let config = AddonConfig {
            enabled_groups: vec!["general".to_string(), "sitemap".to_string()],
            ..AddonConfig::default()
        };
        let addon = Addon::boot(config).unwrap();

        assert_eq!(addon.registry.len(), 5);
        assert!(addon.registry.contains("view seo general settings"));
        assert!(!addon.registry.contains("view seo marketing settings"));
        assert_eq!(addon.nav.children.len(), 2);
    }

    #[test]
    fn test_hooks_respect_config_toggles() {
        let config = AddonConfig {
            term_fields: false,
            ..AddonConfig::default()
        };
        let addon = Addon::boot(config).unwrap();
        assert_eq!(addon.hooks.count(BlueprintEvent::EntryFound), 1);
        assert_eq!(addon.hooks.count(BlueprintEvent::TermFound), 0);

        let bp = addon
            .hooks
            .apply(BlueprintEvent::TermFound, Blueprint::new("tag", "Tag"));
        assert!(bp.sections.is_empty());
    }

    #[test]
    fn test_nav_visibility_follows_grants() {
        let addon = Addon::boot(AddonConfig::default()).unwrap();

        assert!(addon.nav.visible_for(&GrantSet::new()).is_none());

        let mut grants = GrantSet::new();
        grants.grant(CapabilityId::new(CONFIGURE_SETTINGS).unwrap());
        grants.grant(CapabilityId::new(settings::view_settings("general")).unwrap());

        let visible = addon.nav.visible_for(&grants).unwrap();
        assert_eq!(visible.children.len(), 1);
        assert_eq!(visible.children[0].route, "seo.general.index");

        let mut all = GrantSet::new();
        all.grant_subtree(&addon.registry, CONFIGURE_SETTINGS);
        assert_eq!(addon.nav.visible_for(&all).unwrap().children.len(), 5);
    }

    #[test]
    fn test_translated_nav_labels() {
        let translations = Translations::parse(
            r#"
[fr]
"seo.index" = "Référencement"
"general.index" = "Général"
"#,
        )
        .unwrap();
        let config = AddonConfig {
            locale: "fr".to_string(),
            ..AddonConfig::default()
        };
        let addon = Addon::boot_with(config, translations).unwrap();

        assert_eq!(addon.nav.title, "Référencement");
        assert_eq!(addon.nav.children[0].title, "Général");
        // Untranslated keys fall back to the group label.
        assert_eq!(addon.nav.children[1].title, "Marketing");
    }
}
