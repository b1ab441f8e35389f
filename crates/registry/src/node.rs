//! Template nodes and the builder surface used inside `Registry::register`.

use std::fmt;

use crate::Replacement;

/// Produces the replacement set for a parameterized node.
///
/// Invoked at materialization time; an `Err` aborts the whole `register`
/// call that is materializing the tree.
pub(crate) type ReplacementProvider =
    Box<dyn Fn() -> std::result::Result<Vec<Replacement>, String>>;

/// A declared capability template.
///
/// The identifier template may contain `{placeholder}` markers and the label
/// template the matching `:placeholder` markers; both are substituted during
/// materialization when the node (or an ancestor) carries a replacement set.
pub struct Node {
    pub(crate) id_template: String,
    pub(crate) label_template: String,
    pub(crate) replacements: Option<(String, ReplacementProvider)>,
    pub(crate) children: Vec<Node>,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id_template: id.into(),
            label_template: label.into(),
            replacements: None,
            children: Vec::new(),
        }
    }

    /// Append a static child and return a handle to it for further chaining.
    pub fn child(&mut self, id: impl Into<String>, label: impl Into<String>) -> &mut Node {
        let idx = self.children.len();
        self.children.push(Node::new(id, label));
        &mut self.children[idx]
    }

    /// Mark this node as parameterized over `placeholder`.
    ///
    /// Every replacement the provider returns produces one concrete
    /// capability, each with its own copy of this node's child subtree.
    pub fn with_replacements<F>(&mut self, placeholder: impl Into<String>, provider: F) -> &mut Self
    where
        F: Fn() -> std::result::Result<Vec<Replacement>, String> + 'static,
    {
        self.replacements = Some((placeholder.into(), Box::new(provider)));
        self
    }

    /// Attach a pre-built subtree, shared across every materialized instance
    /// of this node.
    pub fn with_children(&mut self, children: Vec<Node>) -> &mut Self {
        self.children.extend(children);
        self
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id_template", &self.id_template)
            .field("label_template", &self.label_template)
            .field(
                "placeholder",
                &self.replacements.as_ref().map(|(name, _)| name),
            )
            .field("children", &self.children)
            .finish()
    }
}
