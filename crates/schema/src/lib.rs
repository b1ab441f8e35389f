//! Blueprint model and schema augmentation hooks.
//!
//! The host CMS owns blueprint storage and the events that fire when one is
//! loaded; this crate owns what gets injected. Hooks are pure functions over
//! a [`Blueprint`] value, so they are testable without the host, and a
//! [`HookSet`] stands in for the host's event bus during assembly.

mod blueprint;
mod error;
mod hook;
mod seo;

pub use blueprint::{Blueprint, Field, Section};
pub use error::{Error, Result};
pub use hook::{BlueprintEvent, HookSet, SchemaHook};
pub use seo::{EntrySeoFields, SEO_SECTION, TermSeoFields};
