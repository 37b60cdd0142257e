//! Name-keyed collection of definitions for one run.
//!
//! A registry is filled once from a metadata tree. After that only the
//! inheritance resolver mutates it (through the crate-private
//! [`Registry::get_mut`]); everything else sees a read-only view.

use indexmap::IndexMap;

use crate::extract::Extractor;
use crate::metadata::MetadataTree;
use crate::model::Definition;

/// Definitions keyed by [`Definition::name`], in metadata order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registry<D: Definition> {
    entries: IndexMap<String, D>,
}

impl<D: Definition> Default for Registry<D> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<D: Definition> Registry<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `extractor` over every file entry of `tree`.
    ///
    /// A later definition with the same name replaces an earlier one, in the
    /// position of the first.
    pub fn build<E>(tree: &MetadataTree, extractor: &E) -> Self
    where
        E: Extractor<Definition = D>,
    {
        let mut registry = Self::new();
        for file in tree.files() {
            for node in extractor.candidates(file) {
                let definition = extractor.extract(file, node);
                registry.insert(definition);
            }
        }
        tracing::debug!("Registered {} definitions", registry.len());
        registry
    }

    /// Add a definition under its own name.
    pub fn insert(&mut self, definition: D) -> Option<D> {
        let name = definition.name().to_string();
        let previous = self.entries.insert(name, definition);
        if let Some(previous) = &previous {
            tracing::warn!("Duplicate definition {}; keeping the last one", previous.name());
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&D> {
        self.entries.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut D> {
        self.entries.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &D> {
        self.entries.values()
    }
}

impl<D: Definition> FromIterator<D> for Registry<D> {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        let mut registry = Self::new();
        for definition in iter {
            registry.insert(definition);
        }
        registry
    }
}
