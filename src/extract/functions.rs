//! Extraction of free functions, grouped per source file.

use super::Extractor;
use super::docblock::{arguments, description, non_empty, return_info};
use crate::metadata::Node;
use crate::model::{Function, FunctionFile, arguments_to_string};

/// Extracts one [`FunctionFile`] for every `file` entry declaring functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct FunctionExtractor;

impl Extractor for FunctionExtractor {
    type Definition = FunctionFile;

    fn candidates<'a>(&self, file: &'a Node) -> Vec<&'a Node> {
        if file.child("function").is_some() {
            vec![file]
        } else {
            Vec::new()
        }
    }

    fn extract(&self, file: &Node, _node: &Node) -> FunctionFile {
        let path = file.attr_or_empty("path");
        if path.is_empty() {
            tracing::warn!("file entry with functions but no path attribute");
        }

        let mut functions = FunctionFile::new(path);

        for function in file.children("function") {
            let Some(name) = non_empty(function.child_text("name")) else {
                tracing::warn!("function without a name in {}; skipped", path);
                continue;
            };

            let returns = return_info(function);
            let arguments = arguments(function);
            let signature = format!(
                "{} {}({})",
                returns.type_name,
                name,
                arguments_to_string(&arguments)
            );

            functions.functions.insert(
                name.to_string(),
                Function {
                    name: name.to_string(),
                    is_deprecated: function.has_docblock_tag("deprecated"),
                    returns,
                    arguments,
                    signature,
                    description: description(function),
                    defined_by: path.to_string(),
                },
            );
        }

        tracing::trace!(
            "extracted {} functions from {}",
            functions.functions.len(),
            functions.path
        );
        functions
    }
}
