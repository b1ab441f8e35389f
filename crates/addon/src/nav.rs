//! Control-panel navigation items.

use registry::{CapabilityId, GrantSet};
use serde::Serialize;

/// A navigation entry handed to the host's nav builder.
///
/// Items are plain values built by [`Addon::boot`](crate::Addon::boot);
/// visibility filtering against an actor's grants happens here so the host
/// only ever renders what the actor may see.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub title: String,
    pub route: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate: Option<CapabilityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn new(title: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            route: route.into(),
            gate: None,
            icon: None,
            section: None,
            children: Vec::new(),
        }
    }

    /// Require a capability for this item to be visible.
    pub fn gated(mut self, capability: CapabilityId) -> Self {
        self.gate = Some(capability);
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn child(mut self, item: NavItem) -> Self {
        self.children.push(item);
        self
    }

    pub fn children(mut self, items: Vec<NavItem>) -> Self {
        self.children.extend(items);
        self
    }

    /// The item as the given actor sees it: `None` when the gate is not
    /// held, otherwise a copy with invisible children pruned.
    pub fn visible_for(&self, grants: &GrantSet) -> Option<NavItem> {
        if let Some(gate) = &self.gate {
            if !grants.has(gate.as_str()) {
                return None;
            }
        }
        let mut item = self.clone();
        item.children = self
            .children
            .iter()
            .filter_map(|child| child.visible_for(grants))
            .collect();
        Some(item)
    }
}
