//! Builders for models and registries from fixture XML.

use phpdocmd::{
    ApiModel, ClassDefinition, ClassExtractor, MetadataTree, Registry,
};

pub fn tree(xml: &str) -> MetadataTree {
    MetadataTree::parse(xml.as_bytes()).expect("fixture should parse")
}

/// Class registry without inheritance expansion.
pub fn raw_classes(xml: &str) -> Registry<ClassDefinition> {
    Registry::build(&tree(xml), &ClassExtractor)
}

/// Fully built model (classes expanded).
pub fn model(xml: &str) -> ApiModel {
    ApiModel::from_tree(&tree(xml))
}

pub fn class<'a>(model: &'a ApiModel, name: &str) -> &'a ClassDefinition {
    model
        .classes()
        .get(name)
        .unwrap_or_else(|| panic!("class {name} should be registered"))
}
