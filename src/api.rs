//! The frozen API model handed to the renderer.

use crate::extract::{ClassExtractor, FunctionExtractor};
use crate::inherit::{self, ExpansionStats};
use crate::metadata::MetadataTree;
use crate::model::{ClassDefinition, FunctionFile};
use crate::registry::Registry;

/// Class and function registries for one run, with inheritance applied.
#[derive(Clone, Debug, Default)]
pub struct ApiModel {
    classes: Registry<ClassDefinition>,
    functions: Registry<FunctionFile>,
    expansion: ExpansionStats,
}

impl ApiModel {
    /// Extract every definition from `tree` and expand inheritance.
    pub fn from_tree(tree: &MetadataTree) -> Self {
        let mut classes = Registry::build(tree, &ClassExtractor);
        let expansion = inherit::expand(&mut classes);
        let functions = Registry::build(tree, &FunctionExtractor);

        Self::from_parts(classes, functions, expansion)
    }

    /// Assemble a model from registries built elsewhere. The class registry
    /// is expected to be expanded already.
    pub fn from_parts(
        classes: Registry<ClassDefinition>,
        functions: Registry<FunctionFile>,
        expansion: ExpansionStats,
    ) -> Self {
        Self {
            classes,
            functions,
            expansion,
        }
    }

    pub fn classes(&self) -> &Registry<ClassDefinition> {
        &self.classes
    }

    pub fn functions(&self) -> &Registry<FunctionFile> {
        &self.functions
    }

    /// What inheritance expansion added while building the model.
    pub fn expansion(&self) -> ExpansionStats {
        self.expansion
    }
}
