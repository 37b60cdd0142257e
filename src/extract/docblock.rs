//! Docblock helpers shared by class and function extraction.
//!
//! Documentation tags win over raw declarations; when neither says anything
//! the type falls back to [`MIXED`].

use crate::metadata::Node;
use crate::model::{Argument, MIXED, ReturnInfo};

/// `Some(trimmed)` for non-blank strings.
pub(crate) fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Summary and long description joined by a blank line.
pub(crate) fn description(node: &Node) -> String {
    [node.summary(), node.long_description()]
        .into_iter()
        .filter_map(non_empty)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Type carried by a tag: the `type` attribute, else a nested `<type>` element.
pub(crate) fn tag_type(tag: &Node) -> Option<&str> {
    tag.attr("type")
        .and_then(non_empty)
        .or_else(|| non_empty(tag.child_text("type")))
}

/// Return type and description of a method or function.
pub(crate) fn return_info(node: &Node) -> ReturnInfo {
    let tag = node.docblock_tag("return");
    let type_name = tag
        .and_then(tag_type)
        .or_else(|| non_empty(node.child_text("type")))
        .unwrap_or(MIXED)
        .to_string();
    let description = tag
        .and_then(|t| t.attr("description"))
        .and_then(non_empty)
        .map(str::to_string);

    ReturnInfo {
        type_name,
        description,
    }
}

/// Arguments with `@param` overrides applied.
///
/// Each raw `(type, name)` pair is matched to a `@param` tag by variable
/// name; the tag's non-empty type, description and variable replace the
/// raw values.
pub(crate) fn arguments(node: &Node) -> Vec<Argument> {
    node.children("argument")
        .map(|raw| {
            let mut argument = Argument::new(raw.child_text("type").trim(), raw.child_text("name").trim());
            argument.default = non_empty(raw.child_text("default")).map(str::to_string);

            if let Some(tag) = node.param_tag(&argument.name) {
                if let Some(type_name) = tag_type(tag) {
                    argument.type_name = type_name.to_string();
                }
                if let Some(description) = tag.attr("description").and_then(non_empty) {
                    argument.description = Some(description.to_string());
                }
                if let Some(variable) = tag.attr("variable").and_then(non_empty) {
                    argument.name = variable.to_string();
                }
            }
            argument
        })
        .collect()
}

/// `@see` references: the `link` attribute, else `refers`, else the description.
pub(crate) fn see_references(node: &Node) -> Vec<String> {
    node.docblock_tags("see")
        .filter_map(|tag| {
            tag.attr("link")
                .and_then(non_empty)
                .or_else(|| tag.attr("refers").and_then(non_empty))
                .or_else(|| tag.attr("description").and_then(non_empty))
                .map(str::to_string)
        })
        .collect()
}
