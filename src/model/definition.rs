//! Definition records: class-like entities and function files.

use indexmap::IndexMap;

use super::member::{Constant, Function, Method, Property};
use crate::base::names;

/// Capability every registry entry must provide.
///
/// Extractors are bound to produce a `Definition`, so a component that does
/// not satisfy this contract is rejected at compile time.
pub trait Definition {
    /// Key under which the definition is registered.
    fn name(&self) -> &str;

    /// Name of the generated document for this definition.
    fn file_name(&self) -> &str;
}

// ============================================================================
// CLASS-LIKE DEFINITIONS
// ============================================================================

/// What kind of class-like entity a definition describes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Trait,
}

impl ClassKind {
    /// Map a metadata element name (`class`, `interface`, `trait`).
    pub fn from_element(name: &str) -> Option<Self> {
        match name {
            "class" => Some(Self::Class),
            "interface" => Some(Self::Interface),
            "trait" => Some(Self::Trait),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Trait => "trait",
        }
    }
}

/// A class, interface or trait with its member maps.
///
/// Member maps preserve declaration order; inherited members are appended
/// after the definition's own members.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassDefinition {
    /// Fully-qualified name without the leading separator.
    pub name: String,
    /// Name without namespace.
    pub short_name: String,
    pub namespace: String,
    /// Output document name derived from [`Self::name`].
    pub file_name: String,
    pub summary: String,
    pub long_description: String,
    pub kind: ClassKind,
    pub is_abstract: bool,
    pub is_final: bool,
    pub is_deprecated: bool,
    /// Directly declared parents. Interfaces may extend several.
    pub extends: Vec<String>,
    /// Directly declared interfaces.
    pub implements: Vec<String>,
    pub methods: IndexMap<String, Method>,
    pub properties: IndexMap<String, Property>,
    pub constants: IndexMap<String, Constant>,
}

impl ClassDefinition {
    /// Create an empty definition; the file name is derived from `name`.
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        let name = name.into();
        let name = names::normalize_name(&name).to_string();
        Self {
            file_name: names::file_name_for(&name),
            short_name: names::segments(&name).last().unwrap_or("").to_string(),
            name,
            kind,
            ..Self::default()
        }
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    /// Declared ancestors in merge order: parents first, then interfaces.
    pub fn ancestors(&self) -> impl Iterator<Item = &str> {
        self.extends
            .iter()
            .chain(self.implements.iter())
            .map(String::as_str)
    }

    /// Methods declared by this definition itself.
    pub fn own_methods(&self) -> impl Iterator<Item = &Method> {
        self.methods.values().filter(|m| m.defined_by == self.name)
    }

    /// Methods received through inheritance.
    pub fn inherited_methods(&self) -> impl Iterator<Item = &Method> {
        self.methods.values().filter(|m| m.defined_by != self.name)
    }

    /// Properties declared by this definition itself.
    pub fn own_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties
            .values()
            .filter(|p| p.defined_by == self.name)
    }

    /// Properties received through inheritance.
    pub fn inherited_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties
            .values()
            .filter(|p| p.defined_by != self.name)
    }
}

impl Definition for ClassDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }
}

// ============================================================================
// FUNCTION FILES
// ============================================================================

/// All free functions declared in one source file.
///
/// The file path doubles as a pseudo namespace: `src/util/strings.php`
/// registers as `src\util\strings`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionFile {
    /// Pseudo-namespace key derived from the path.
    pub name: String,
    /// Source path as recorded in the metadata.
    pub path: String,
    pub file_name: String,
    pub functions: IndexMap<String, Function>,
}

impl FunctionFile {
    /// Create an empty function file for a source path.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let stem = path.strip_suffix(".php").unwrap_or(&path);
        let name = stem.replace(['/', '\\'], &names::NAMESPACE_SEPARATOR.to_string());
        Self {
            file_name: names::file_name_for(&name),
            name: names::normalize_name(&name).to_string(),
            path,
            functions: IndexMap::new(),
        }
    }
}

impl Definition for FunctionFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }
}
