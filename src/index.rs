//! Nested namespace tree for the API index page.

use indexmap::IndexMap;

use crate::base::names::{NAMESPACE_SEPARATOR, segments};

/// One level of the namespace hierarchy. Leaves have no children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamespaceTree {
    children: IndexMap<String, NamespaceTree>,
}

/// A flattened tree node, as emitted by [`NamespaceTree::entries`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    /// Nesting level; top-level segments are at depth 0.
    pub depth: usize,
    pub segment: String,
    /// Qualified name of this node (`App\Model` for the `Model` segment).
    pub full_name: String,
}

impl NamespaceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from qualified names, in the order given.
    pub fn build<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tree = Self::new();
        for name in names {
            tree.insert(name);
        }
        tree
    }

    /// Add a qualified name. Empty segments are dropped.
    pub fn insert(&mut self, name: &str) {
        let mut node = self;
        for segment in segments(name) {
            node = node.children.entry(segment.to_string()).or_default();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Sub-tree for one segment at this level.
    pub fn child(&self, segment: &str) -> Option<&NamespaceTree> {
        self.children.get(segment)
    }

    /// Segment names at this level, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// Depth-first flattening. With `sorted`, every level is visited in
    /// lexical order instead of insertion order.
    pub fn entries(&self, sorted: bool) -> Vec<IndexEntry> {
        let mut out = Vec::new();
        self.collect_entries(sorted, 0, "", &mut out);
        out
    }

    fn collect_entries(&self, sorted: bool, depth: usize, prefix: &str, out: &mut Vec<IndexEntry>) {
        let mut keys: Vec<&String> = self.children.keys().collect();
        if sorted {
            keys.sort();
        }

        for key in keys {
            let full_name = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}{NAMESPACE_SEPARATOR}{key}")
            };
            out.push(IndexEntry {
                depth,
                segment: key.clone(),
                full_name: full_name.clone(),
            });
            if let Some(child) = self.children.get(key) {
                child.collect_entries(sorted, depth + 1, &full_name, out);
            }
        }
    }
}
