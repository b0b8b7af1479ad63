//! In-memory XML tree built by the renderer and serialized once.
//!
//! This is deliberately minimal: elements, text children, and a
//! document wrapper that owns the declaration line. No attributes,
//! namespaces, or comments.

/// One node in the tree: a nested element or a text child.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

impl XmlNode {
    /// Creates a text node. Content is escaped at serialization time.
    pub fn text(content: impl Into<String>) -> Self {
        XmlNode::Text(content.into())
    }
}

/// A named element with an ordered list of children.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    name: String,
    children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        XmlElement {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    pub fn append_child(&mut self, node: XmlNode) {
        self.children.push(node);
    }

    fn write_into(&self, out: &mut String) {
        if self.children.is_empty() {
            // Childless elements serialize self-closing
            out.push('<');
            out.push_str(&self.name);
            out.push_str("/>");
            return;
        }

        out.push('<');
        out.push_str(&self.name);
        out.push('>');
        for child in &self.children {
            match child {
                XmlNode::Element(element) => element.write_into(out),
                XmlNode::Text(text) => out.push_str(&escape_text(text)),
            }
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

// In text content we escape &, < and >. Element names are emitted as
// given; the renderer can legitimately hand us names it derived from
// input keys.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// A document: declaration metadata plus top-level elements.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    version: String,
    encoding: String,
    children: Vec<XmlElement>,
}

impl XmlDocument {
    pub fn new(version: impl Into<String>, encoding: impl Into<String>) -> Self {
        XmlDocument {
            version: version.into(),
            encoding: encoding.into(),
            children: Vec::new(),
        }
    }

    pub fn append_child(&mut self, element: XmlElement) {
        self.children.push(element);
    }

    /// Serializes the whole document: the declaration line, then each
    /// top-level element on its own line. The declared encoding is
    /// always upcased.
    pub fn serialize(&self) -> String {
        let mut out = format!(
            "<?xml version=\"{}\" encoding=\"{}\"?>\n",
            self.version,
            self.encoding.to_ascii_uppercase()
        );
        for child in &self.children {
            child.write_into(&mut out);
            out.push('\n');
        }
        out
    }
}
