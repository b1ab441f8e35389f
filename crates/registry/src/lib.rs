//! Hierarchical capability registry.
//!
//! Core principle: **every checkable permission is a named capability,
//! materialized once at boot and immutable afterwards.**
//!
//! Capabilities are declared as a template tree. A node may be parameterized
//! by a replacement set, in which case it expands into one concrete
//! capability per replacement, with the same child subtree stamped out under
//! each instance. After [`Registry::register`] returns, the tree is frozen;
//! concurrent reads need no synchronization.

mod capability;
mod error;
mod grants;
mod node;
mod registry;

pub use capability::{Capability, CapabilityId, Replacement};
pub use error::{Error, Result};
pub use grants::GrantSet;
pub use node::Node;
pub use registry::Registry;
