//! Streaming XML reader that builds a [`MetadataTree`].
//!
//! The reader keeps a stack of open elements. A start tag pushes a node,
//! the matching end tag pops it and attaches it to its parent. Self-closing
//! tags are handled as start + end.

use indexmap::IndexMap;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::{MetadataError, MetadataTree, Node};

/// Builds a [`MetadataTree`] from raw XML bytes.
pub(super) struct TreeReader {
    /// Elements opened but not yet closed.
    open: Vec<Node>,
    /// The document element, once it has been closed.
    root: Option<Node>,
}

impl TreeReader {
    pub fn new() -> Self {
        Self {
            open: Vec::new(),
            root: None,
        }
    }

    pub fn read(mut self, input: &[u8]) -> Result<MetadataTree, MetadataError> {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let node = Self::start_node(e)?;
                    self.open.push(node);
                }
                Ok(Event::Empty(ref e)) => {
                    // Self-closing element - handle as start + end
                    let node = Self::start_node(e)?;
                    self.open.push(node);
                    self.close_node()?;
                }
                Ok(Event::End(_)) => {
                    self.close_node()?;
                }
                Ok(Event::Text(ref e)) => {
                    let text = e
                        .unescape()
                        .map_err(|e| MetadataError::xml(format!("Text error: {e}")))?;
                    self.append_text(&text);
                }
                Ok(Event::CData(ref e)) => {
                    let text = std::str::from_utf8(e)
                        .map_err(|e| MetadataError::xml(format!("Invalid UTF-8 in CDATA: {e}")))?;
                    self.append_text(text.trim());
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(MetadataError::xml(format!(
                        "XML parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                // Declarations, comments, processing instructions, doctype
                _ => {}
            }
            buf.clear();
        }

        if let Some(unclosed) = self.open.last() {
            return Err(MetadataError::invalid_document(format!(
                "unexpected end of document inside <{}>",
                unclosed.name
            )));
        }

        let root = self
            .root
            .ok_or_else(|| MetadataError::missing_element("document root"))?;
        Ok(MetadataTree { root })
    }

    fn start_node(e: &BytesStart<'_>) -> Result<Node, MetadataError> {
        let name_bytes = e.name();
        let name = std::str::from_utf8(name_bytes.as_ref())
            .map_err(|e| MetadataError::xml(format!("Invalid tag name: {e}")))?;

        let mut attributes = IndexMap::new();
        for attr_result in e.attributes() {
            let attr =
                attr_result.map_err(|e| MetadataError::xml(format!("Attribute error: {e}")))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| MetadataError::xml(format!("Attribute key error: {e}")))?;
            let value = attr
                .unescape_value()
                .map_err(|e| MetadataError::xml(format!("Attribute value error: {e}")))?;
            attributes.insert(key.to_string(), value.into_owned());
        }

        Ok(Node {
            name: name.to_string(),
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    fn close_node(&mut self) -> Result<(), MetadataError> {
        let node = self
            .open
            .pop()
            .ok_or_else(|| MetadataError::invalid_document("closing tag without opening tag"))?;

        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None if self.root.is_none() => self.root = Some(node),
            None => {
                return Err(MetadataError::invalid_document(format!(
                    "second root element <{}>",
                    node.name
                )));
            }
        }
        Ok(())
    }

    fn append_text(&mut self, text: &str) {
        // Text outside the document element is ignored
        if let Some(node) = self.open.last_mut() {
            if !node.text.is_empty() && !text.is_empty() {
                node.text.push(' ');
            }
            node.text.push_str(text);
        }
    }
}
