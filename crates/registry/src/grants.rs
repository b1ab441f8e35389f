//! Grant sets held by an actor.

use std::collections::HashSet;

use crate::{Capability, CapabilityId};

/// The capabilities granted to one actor.
///
/// Authorization checks are total over all possible identifiers: an unknown
/// or unregistered identifier is simply not granted, never an error.
#[derive(Debug, Clone, Default)]
pub struct GrantSet {
    inner: HashSet<CapabilityId>,
}

impl GrantSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&mut self, id: CapabilityId) {
        self.inner.insert(id);
    }

    /// Grant a capability and everything below it.
    pub fn grant_subtree(&mut self, registry: &crate::Registry, id: &str) {
        if let Some(cap) = registry.get(id) {
            self.grant(cap.id.clone());
            for child in &cap.children {
                self.grant_subtree(registry, child.as_str());
            }
        }
    }

    pub fn has(&self, id: &str) -> bool {
        self.inner.contains(id)
    }

    pub fn all(&self) -> impl Iterator<Item = &CapabilityId> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl FromIterator<CapabilityId> for GrantSet {
    fn from_iter<I: IntoIterator<Item = CapabilityId>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a Capability> for GrantSet {
    fn from_iter<I: IntoIterator<Item = &'a Capability>>(iter: I) -> Self {
        iter.into_iter().map(|cap| cap.id.clone()).collect()
    }
}
