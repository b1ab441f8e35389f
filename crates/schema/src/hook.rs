//! Schema augmentation extension points.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Blueprint;

/// A schema augmentation hook.
///
/// Implementations are pure: they take a blueprint and return the augmented
/// blueprint, with no hidden state. This is the boundary the host invokes
/// when it fires a blueprint event.
pub trait SchemaHook: Send + Sync {
    fn augment(&self, blueprint: Blueprint) -> Blueprint;
}

/// Host events a hook can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlueprintEvent {
    /// An entry blueprint was loaded.
    EntryFound,
    /// A taxonomy term blueprint was loaded.
    TermFound,
}

/// Hooks subscribed per event, applied in subscription order.
#[derive(Default)]
pub struct HookSet {
    hooks: HashMap<BlueprintEvent, Vec<Box<dyn SchemaHook>>>,
}

impl HookSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&mut self, event: BlueprintEvent, hook: impl SchemaHook + 'static) {
        self.hooks.entry(event).or_default().push(Box::new(hook));
    }

    /// Run every hook subscribed to `event` over the blueprint, in order.
    pub fn apply(&self, event: BlueprintEvent, blueprint: Blueprint) -> Blueprint {
        match self.hooks.get(&event) {
            Some(hooks) => hooks
                .iter()
                .fold(blueprint, |bp, hook| hook.augment(bp)),
            None => blueprint,
        }
    }

    pub fn count(&self, event: BlueprintEvent) -> usize {
        self.hooks.get(&event).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for HookSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<_, _> = self.hooks.iter().map(|(e, h)| (e, h.len())).collect();
        f.debug_struct("HookSet").field("hooks", &counts).finish()
    }
}
