//! Metadata extraction: pure functions from metadata nodes to definitions.
//!
//! Each extractor reads only what an entity declares itself; inherited
//! members are added later by [`crate::inherit`]. Extraction is total: a
//! malformed entity yields empty fields and a warning, never an error.

mod classes;
mod docblock;
mod functions;

use crate::metadata::Node;
use crate::model::Definition;

pub use classes::ClassExtractor;
pub use functions::FunctionExtractor;

/// A component that turns metadata nodes into registry definitions.
///
/// The associated type is bound by [`Definition`], so the registry can only
/// be built from extractors that produce a registrable record.
pub trait Extractor {
    type Definition: Definition;

    /// Nodes within one `file` entry that each produce a definition.
    fn candidates<'a>(&self, file: &'a Node) -> Vec<&'a Node>;

    /// Build a definition from one candidate node of `file`.
    fn extract(&self, file: &Node, node: &Node) -> Self::Definition;
}
