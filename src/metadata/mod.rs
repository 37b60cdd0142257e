//! Navigable tree for phpDocumentor `structure.xml` metadata.
//!
//! The document is read once into owned [`Node`]s; extraction then walks
//! the tree with a handful of structural queries instead of XPath.
//!
//! ## Structure
//!
//! ```xml
//! <project>
//!   <file path="src/Model/User.php">
//!     <class namespace="App\Model" abstract="false">
//!       <name>User</name>
//!       <full_name>\App\Model\User</full_name>
//!       <extends>\App\Model\Base</extends>
//!       <docblock>
//!         <description>A user.</description>
//!         <tag name="deprecated"/>
//!       </docblock>
//!       <method visibility="public" static="false">...</method>
//!     </class>
//!     <function>...</function>
//!   </file>
//! </project>
//! ```

mod error;
mod reader;

use std::path::Path;

use indexmap::IndexMap;

pub use error::MetadataError;

/// One XML element with its attributes, trimmed text and child elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    /// Element name (`class`, `method`, `tag`, ...).
    pub name: String,
    /// Attributes in document order.
    pub attributes: IndexMap<String, String>,
    /// Concatenated, unescaped text content.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty element. Mostly useful for building fixtures.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add an attribute (builder style).
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Set the text content (builder style).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Append a child element (builder style).
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// All direct children with the given element name.
    pub fn children<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Node> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// The first direct child with the given element name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text of the first child with the given name, or `""` when absent.
    pub fn child_text(&self, name: &str) -> &str {
        self.child(name).map(|c| c.text.as_str()).unwrap_or("")
    }

    /// Attribute value, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attribute value, or `""` when absent.
    pub fn attr_or_empty(&self, name: &str) -> &str {
        self.attr(name).unwrap_or("")
    }

    /// True when the attribute is present and equals `"true"`.
    pub fn attr_is_true(&self, name: &str) -> bool {
        self.attr(name) == Some("true")
    }

    /// The element's own `docblock` child.
    pub fn docblock(&self) -> Option<&Node> {
        self.child("docblock")
    }

    /// All `docblock/tag[@name=X]` elements.
    pub fn docblock_tags<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a Node> {
        self.docblock()
            .into_iter()
            .flat_map(|doc| doc.children("tag"))
            .filter(move |t| t.attr("name") == Some(tag))
    }

    /// The first `docblock/tag[@name=X]` element.
    pub fn docblock_tag(&self, tag: &str) -> Option<&Node> {
        self.docblock_tags(tag).next()
    }

    /// True when the docblock carries at least one tag with the given name.
    pub fn has_docblock_tag(&self, tag: &str) -> bool {
        self.docblock_tag(tag).is_some()
    }

    /// The `@param` tag documenting `variable` (`$name`).
    pub fn param_tag(&self, variable: &str) -> Option<&Node> {
        self.docblock_tags("param")
            .find(|t| t.attr("variable") == Some(variable))
    }

    /// Docblock summary line, or `""`.
    pub fn summary(&self) -> &str {
        self.docblock()
            .map(|doc| doc.child_text("description"))
            .unwrap_or("")
    }

    /// Docblock long description, or `""`.
    pub fn long_description(&self) -> &str {
        self.docblock()
            .map(|doc| doc.child_text("long-description"))
            .unwrap_or("")
    }
}

/// A fully parsed metadata document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataTree {
    root: Node,
}

impl MetadataTree {
    /// Parse a document from raw bytes.
    pub fn parse(input: &[u8]) -> Result<Self, MetadataError> {
        reader::TreeReader::new().read(input)
    }

    /// Read and parse a document from disk.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self, MetadataError> {
        let bytes = std::fs::read(path.as_ref())?;
        let tree = Self::parse(&bytes)?;
        tracing::debug!(
            "Loaded metadata from {} ({} file entries)",
            path.as_ref().display(),
            tree.files().count()
        );
        Ok(tree)
    }

    /// The document element (`project`).
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Every `file` entry under the root.
    pub fn files(&self) -> impl Iterator<Item = &Node> {
        self.root.children("file")
    }
}
