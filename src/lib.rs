//! # phpdocmd
//!
//! Cross-linked Markdown API documentation from phpDocumentor's
//! `structure.xml`.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! generate  → Pipeline: load, build model, render, write pages
//!   ↓
//! render    → Markdown pages for classes, members, function files and the index
//!   ↓
//! api       → Frozen class and function registries
//!   ↓
//! link / index / options → Cross-references, namespace tree, settings
//!   ↓
//! inherit   → Inheritance expansion over the class registry
//!   ↓
//! registry  → Name-keyed definition collections
//!   ↓
//! extract   → Metadata nodes to definitions
//!   ↓
//! model     → Definitions and members
//!   ↓
//! metadata  → quick-xml reader, navigable node tree
//!   ↓
//! base      → Qualified names, file naming rule
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use phpdocmd::{Generator, Options};
//!
//! let report = Generator::new(Options::default()).run("docs/structure.xml", "docs/api")?;
//! println!("{} class pages", report.class_pages);
//! ```

// ============================================================================
// MODULES (dependency order: base → metadata → model → ... → generate)
// ============================================================================

/// Foundation helpers: namespace separators, file naming
pub mod base;

/// Metadata loading: XML reader and node queries
pub mod metadata;

/// Definition and member records
pub mod model;

/// Extractors turning metadata nodes into definitions
pub mod extract;

/// Name-keyed definition registries
pub mod registry;

/// Inheritance expansion
pub mod inherit;

/// Namespace tree for the index page
pub mod index;

/// Cross-reference linking of type expressions
pub mod link;

/// Generation options (JSON config)
pub mod options;

/// The expanded API model
pub mod api;

/// Markdown rendering
pub mod render;

/// End-to-end generation
pub mod generate;

pub use api::ApiModel;
pub use extract::{ClassExtractor, Extractor, FunctionExtractor};
pub use generate::{GenerateError, GenerationReport, Generator, load_options};
pub use index::{IndexEntry, NamespaceTree};
pub use inherit::{ExpansionStats, expand};
pub use link::{LinkTemplate, Linker};
pub use metadata::{MetadataError, MetadataTree, Node};
pub use model::{ClassDefinition, ClassKind, Definition, FunctionFile, Visibility};
pub use options::{Level, Options};
pub use registry::Registry;
pub use render::{ComponentKind, ComponentPage, MarkdownRenderer};
