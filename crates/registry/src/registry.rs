//! Registry construction and materialization.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::{Capability, CapabilityId, Error, Node, Replacement, Result};

/// The materialized capability tree.
///
/// Built once at boot by one or more `register` calls, then read-only.
/// Each `register` call commits atomically: if materialization fails for any
/// reason, nothing from that call is inserted and earlier registrations are
/// untouched.
#[derive(Debug, Default)]
pub struct Registry {
    caps: Vec<Capability>,
    index: HashMap<CapabilityId, usize>,
    roots: Vec<CapabilityId>,
    groups: BTreeMap<String, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a root capability and its subtree.
    ///
    /// `build` receives the root template node and declares the subtree under
    /// it; the tree is materialized depth-first when `build` returns.
    pub fn register<F>(&mut self, id: &str, label: &str, build: F) -> Result<()>
    where
        F: FnOnce(&mut Node),
    {
        self.commit(id, label, build, None)
    }

    /// Register a root capability under a named group.
    ///
    /// The group is display metadata recorded on every capability in the
    /// subtree; it does not nest identifiers.
    pub fn register_in<F>(
        &mut self,
        group: &str,
        group_label: &str,
        id: &str,
        label: &str,
        build: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut Node),
    {
        self.commit(id, label, build, Some((group, group_label)))
    }

    fn commit<F>(
        &mut self,
        id: &str,
        label: &str,
        build: F,
        group: Option<(&str, &str)>,
    ) -> Result<()>
    where
        F: FnOnce(&mut Node),
    {
        let mut root = Node::new(id, label);
        build(&mut root);

        let mut batch = Vec::new();
        let group_name = group.map(|(name, _)| name);
        let root_ids = materialize(&root, None, &[], group_name, &mut batch)?;

        // Uniqueness is registry-wide: check the batch against itself and
        // against everything already committed before touching state.
        let mut seen = HashSet::new();
        for cap in &batch {
            if self.index.contains_key(cap.id.as_str()) || !seen.insert(cap.id.clone()) {
                return Err(Error::Duplicate(cap.id.to_string()));
            }
        }

        if let Some((name, label)) = group {
            self.groups.insert(name.to_string(), label.to_string());
        }
        self.roots.extend(root_ids);
        for cap in batch {
            self.index.insert(cap.id.clone(), self.caps.len());
            self.caps.push(cap);
        }
        Ok(())
    }

    /// Look up a capability, failing on unknown identifiers.
    pub fn lookup(&self, id: &str) -> Result<&Capability> {
        self.get(id).ok_or_else(|| Error::Unknown(id.to_string()))
    }

    pub fn get(&self, id: &str) -> Option<&Capability> {
        self.index.get(id).map(|&i| &self.caps[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Root identifiers in registration order.
    pub fn roots(&self) -> &[CapabilityId] {
        &self.roots
    }

    /// All capabilities in materialization (depth-first) order.
    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.caps.iter()
    }

    /// Direct children of a capability; empty for unknown identifiers.
    pub fn children_of<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Capability> {
        self.get(id)
            .into_iter()
            .flat_map(|cap| cap.children.iter())
            .filter_map(|child| self.get(child.as_str()))
    }

    /// Registered group names and labels.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &str)> {
        self.groups
            .iter()
            .map(|(name, label)| (name.as_str(), label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.caps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caps.is_empty()
    }
}

/// Depth-first materialization of a template node.
///
/// `ctx` is the substitution context inherited from parameterized ancestors;
/// a parameterized node pushes its own replacement before recursing, so
/// nested placeholders resolve against the full stack. Returns the
/// identifiers emitted for this node (one for a static node, one per
/// replacement for a parameterized one).
fn materialize(
    node: &Node,
    parent: Option<&CapabilityId>,
    ctx: &[(String, Replacement)],
    group: Option<&str>,
    out: &mut Vec<Capability>,
) -> Result<Vec<CapabilityId>> {
    match &node.replacements {
        None => {
            let id = emit(node, parent, ctx, group, out)?;
            Ok(vec![id])
        }
        Some((placeholder, provider)) => {
            let replacements = provider().map_err(|message| Error::Provider {
                placeholder: placeholder.clone(),
                message,
            })?;

            // An empty replacement set materializes nothing, children included.
            let mut ids = Vec::with_capacity(replacements.len());
            for replacement in replacements {
                let mut inner = ctx.to_vec();
                inner.push((placeholder.clone(), replacement));
                ids.push(emit(node, parent, &inner, group, out)?);
            }
            Ok(ids)
        }
    }
}

/// Emit one concrete capability for `node` under the given substitution
/// context, then recurse into its children.
fn emit(
    node: &Node,
    parent: Option<&CapabilityId>,
    ctx: &[(String, Replacement)],
    group: Option<&str>,
    out: &mut Vec<Capability>,
) -> Result<CapabilityId> {
    let id = CapabilityId::new(substitute_id(&node.id_template, ctx))?;
    let label = substitute_label(&node.label_template, ctx);

    let slot = out.len();
    out.push(Capability {
        id: id.clone(),
        label,
        parent: parent.cloned(),
        children: Vec::new(),
        group: group.map(str::to_string),
    });

    let mut children = Vec::new();
    for child in &node.children {
        children.extend(materialize(child, Some(&id), ctx, group, out)?);
    }
    out[slot].children = children;
    Ok(id)
}

/// `{placeholder}` markers take the replacement's value.
fn substitute_id(template: &str, ctx: &[(String, Replacement)]) -> String {
    let mut id = template.to_string();
    for (placeholder, replacement) in ctx {
        id = id.replace(&format!("{{{placeholder}}}"), &replacement.value);
    }
    id
}

/// `:placeholder` markers take the replacement's label. Plain token
/// replacement, no templating syntax beyond that.
fn substitute_label(template: &str, ctx: &[(String, Replacement)]) -> String {
    let mut label = template.to_string();
    for (placeholder, replacement) in ctx {
        label = label.replace(&format!(":{placeholder}"), &replacement.label);
    }
    label
}
