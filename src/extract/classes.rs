//! Extraction of classes, interfaces and traits.

use indexmap::IndexMap;

use super::Extractor;
use super::docblock::{arguments, description, non_empty, return_info, see_references, tag_type};
use crate::base::names;
use crate::metadata::Node;
use crate::model::{
    ClassDefinition, ClassKind, Constant, MIXED, Method, Property, Visibility,
    arguments_to_string,
};

/// Extracts `file/class`, `file/interface` and `file/trait` entries.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassExtractor;

impl Extractor for ClassExtractor {
    type Definition = ClassDefinition;

    fn candidates<'a>(&self, file: &'a Node) -> Vec<&'a Node> {
        file.children
            .iter()
            .filter(|child| ClassKind::from_element(&child.name).is_some())
            .collect()
    }

    fn extract(&self, file: &Node, node: &Node) -> ClassDefinition {
        let kind = ClassKind::from_element(&node.name).unwrap_or_default();
        let short_name = node.child_text("name").trim();
        let namespace = names::normalize_name(node.attr_or_empty("namespace"));

        let full_name = names::normalize_name(node.child_text("full_name"));
        let name = if full_name.is_empty() && !short_name.is_empty() {
            names::qualify(namespace, short_name)
        } else {
            full_name.to_string()
        };

        if name.is_empty() {
            tracing::warn!(
                "{} without a name in {}; extracting with empty fields",
                kind.as_str(),
                file.attr_or_empty("path")
            );
        }

        let mut class = ClassDefinition::new(name, kind);
        if !short_name.is_empty() {
            class.short_name = short_name.to_string();
        }
        class.namespace = namespace.to_string();
        class.summary = node.summary().trim().to_string();
        class.long_description = node.long_description().trim().to_string();
        class.is_abstract = node.attr_is_true("abstract");
        class.is_final = node.attr_is_true("final");
        class.is_deprecated = node.has_docblock_tag("deprecated");
        class.extends = referenced_names(node, "extends");
        class.implements = referenced_names(node, "implements");
        class.methods = extract_methods(&class, node);
        class.properties = extract_properties(&class, node);
        class.constants = extract_constants(&class, node);

        tracing::trace!(
            "extracted {} {} ({} methods, {} properties, {} constants)",
            class.kind.as_str(),
            class.name,
            class.methods.len(),
            class.properties.len(),
            class.constants.len()
        );
        class
    }
}

/// Normalised, non-empty texts of every `<element>` child.
fn referenced_names(node: &Node, element: &str) -> Vec<String> {
    node.children(element)
        .map(|c| names::normalize_name(&c.text))
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

/// Members inherit the entity-scope deprecation flag and add their own.
fn member_deprecated(class: &ClassDefinition, member: &Node) -> bool {
    class.is_deprecated || member.has_docblock_tag("deprecated")
}

fn extract_methods(class: &ClassDefinition, node: &Node) -> IndexMap<String, Method> {
    let mut methods = IndexMap::new();

    for method in node.children("method") {
        let Some(name) = non_empty(method.child_text("name")) else {
            tracing::warn!("method without a name on {}; skipped", class.name);
            continue;
        };

        let returns = return_info(method);
        let arguments = arguments(method);
        let signature = format!(
            "{} {}::{}({})",
            returns.type_name,
            class.name,
            name,
            arguments_to_string(&arguments)
        );

        methods.insert(
            name.to_string(),
            Method {
                name: name.to_string(),
                visibility: Visibility::parse(method.attr_or_empty("visibility")),
                is_static: method.attr_is_true("static"),
                is_abstract: method.attr_is_true("abstract"),
                is_final: method.attr_is_true("final"),
                is_deprecated: member_deprecated(class, method),
                returns,
                arguments,
                signature,
                description: description(method),
                see: see_references(method),
                defined_by: class.name.clone(),
            },
        );
    }

    methods
}

fn extract_properties(class: &ClassDefinition, node: &Node) -> IndexMap<String, Property> {
    let mut properties = IndexMap::new();

    for property in node.children("property") {
        let Some(name) = non_empty(property.child_text("name")) else {
            tracing::warn!("property without a name on {}; skipped", class.name);
            continue;
        };

        let type_name = property
            .docblock_tag("var")
            .and_then(tag_type)
            .or_else(|| non_empty(property.child_text("type")))
            .unwrap_or(MIXED)
            .to_string();
        let visibility = Visibility::parse(property.attr_or_empty("visibility"));
        let default = non_empty(property.child_text("default")).map(str::to_string);

        let mut signature = format!("{visibility} {type_name} {name}");
        if let Some(default) = &default {
            signature.push_str(" = ");
            signature.push_str(default);
        }

        properties.insert(
            name.to_string(),
            Property {
                name: name.to_string(),
                visibility,
                is_static: property.attr_is_true("static"),
                is_deprecated: member_deprecated(class, property),
                type_name,
                default,
                signature,
                description: description(property),
                defined_by: class.name.clone(),
            },
        );
    }

    properties
}

fn extract_constants(class: &ClassDefinition, node: &Node) -> IndexMap<String, Constant> {
    let mut constants = IndexMap::new();

    for constant in node.children("constant") {
        let Some(name) = non_empty(constant.child_text("name")) else {
            tracing::warn!("constant without a name on {}; skipped", class.name);
            continue;
        };
        let value = constant.child_text("value").trim().to_string();

        constants.insert(
            name.to_string(),
            Constant {
                name: name.to_string(),
                signature: format!("const {name} = {value}"),
                value,
                description: description(constant),
                is_deprecated: member_deprecated(class, constant),
                defined_by: class.name.clone(),
            },
        );
    }

    constants
}
