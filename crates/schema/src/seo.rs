//! SEO field injection hooks.

use serde_json::json;

use crate::{Blueprint, Section, SchemaHook};

/// Handle of the section the SEO hooks append.
pub const SEO_SECTION: &str = "seo";

fn base_fields(section: Section) -> Section {
    section
        .with_field("meta_title", json!({"type": "text", "display": "Meta Title"}))
        .with_field(
            "meta_description",
            json!({"type": "textarea", "display": "Meta Description", "character_limit": 160}),
        )
        .with_field(
            "no_index_page",
            json!({"type": "toggle", "display": "Hide from search engines"}),
        )
        .with_field(
            "no_follow_links",
            json!({"type": "toggle", "display": "Do not follow links on this page"}),
        )
        .with_field("og_title", json!({"type": "text", "display": "Open Graph Title"}))
        .with_field(
            "og_description",
            json!({"type": "textarea", "display": "Open Graph Description"}),
        )
        .with_field("og_image", json!({"type": "assets", "display": "Open Graph Image", "max_files": 1}))
}

/// Appends the SEO section to entry blueprints.
///
/// No-op when the blueprint already carries the section, so firing the same
/// event twice for one blueprint does not duplicate fields.
pub struct EntrySeoFields;

impl SchemaHook for EntrySeoFields {
    fn augment(&self, blueprint: Blueprint) -> Blueprint {
        if blueprint.has_section(SEO_SECTION) {
            return blueprint;
        }
        let section = base_fields(Section::new(SEO_SECTION, "SEO"))
            .with_field(
                "canonical_url",
                json!({"type": "text", "display": "Canonical URL"}),
            )
            .with_field(
                "sitemap_priority",
                json!({"type": "select", "display": "Sitemap Priority", "default": "0.5"}),
            )
            .with_field(
                "sitemap_change_frequency",
                json!({"type": "select", "display": "Sitemap Change Frequency", "default": "monthly"}),
            );
        blueprint.with_section(section)
    }
}

/// Appends the SEO section to taxonomy term blueprints. Terms get the base
/// field set without the entry-only sitemap and canonical fields.
pub struct TermSeoFields;

impl SchemaHook for TermSeoFields {
    fn augment(&self, blueprint: Blueprint) -> Blueprint {
        if blueprint.has_section(SEO_SECTION) {
            return blueprint;
        }
        blueprint.with_section(base_fields(Section::new(SEO_SECTION, "SEO")))
    }
}
