//! SEO addon assembly.
//!
//! Everything the host consumes — the capability tree, the control-panel
//! navigation, the blueprint hooks, translations — is built here in one
//! explicit startup routine, [`Addon::boot`]. No ambient registries: the
//! host receives plain values and wires them into its own extension points.

mod boot;
mod config;
mod error;
mod nav;
mod settings;
mod translations;

pub use boot::Addon;
pub use config::AddonConfig;
pub use error::{Error, Result};
pub use nav::NavItem;
pub use settings::{
    CONFIGURE_SETTINGS, SettingsGroup, settings_groups, update_settings, view_settings,
};
pub use translations::Translations;
