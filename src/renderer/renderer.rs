use serde::Deserialize;
use tracing::debug;

use crate::document::{XmlDocument, XmlElement};
use crate::renderer::walker;
use crate::value::Value;

const DEFAULT_VERSION: &str = "1.0";
const DEFAULT_CHARSET: &str = "UTF-8";
const DEFAULT_SUPER_PARENT_NAME: &str = "xml_body";
const DEFAULT_LIST_ITEM_NAME: &str = "list_item";

/// Renderer configuration. Every field is optional; unset fields fall
/// back to the built-in defaults in a single pass when the renderer is
/// constructed, so a supplied value always wins, including one equal to
/// its default.
///
/// Deserializes from the option-map spelling callers already use:
/// `Version`, `Charset`, `SuperParentName`, `DefaultListItemName`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// XML declaration version, default "1.0"
    #[serde(rename = "Version")]
    pub version: Option<String>,
    /// Declared document encoding, default "UTF-8"
    #[serde(rename = "Charset")]
    pub charset: Option<String>,
    /// Name of the root element wrapping all top-level keys, default "xml_body"
    #[serde(rename = "SuperParentName")]
    pub super_parent_name: Option<String>,
    /// Element name for list entries without a usable key, default "list_item"
    #[serde(rename = "DefaultListItemName")]
    pub default_list_item_name: Option<String>,
}

/// One-shot renderer turning a [`Value`] structure into a complete XML
/// document string.
///
/// `render` consumes the renderer: the owned document only ever
/// receives a single root element, so the append-a-second-root misuse
/// is a compile error rather than a runtime surprise. Build a fresh
/// renderer per document.
pub struct XmlRenderer {
    super_parent_name: String,
    default_list_item_name: String,
    document: XmlDocument,
}

impl XmlRenderer {
    /// Renderer with all options at their defaults.
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> Self {
        let version = options
            .version
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let charset = options
            .charset
            .unwrap_or_else(|| DEFAULT_CHARSET.to_string());
        XmlRenderer {
            super_parent_name: options
                .super_parent_name
                .unwrap_or_else(|| DEFAULT_SUPER_PARENT_NAME.to_string()),
            default_list_item_name: options
                .default_list_item_name
                .unwrap_or_else(|| DEFAULT_LIST_ITEM_NAME.to_string()),
            document: XmlDocument::new(version, charset),
        }
    }

    /// Renders `variables` under the configured root element and
    /// returns the serialized document.
    ///
    /// The top level is expected to be a map; any collection works and
    /// is walked entry by entry. A scalar or invalid top level yields
    /// an empty root element.
    pub fn render(mut self, variables: &Value) -> String {
        debug!(root = %self.super_parent_name, "rendering document");

        let mut body = XmlElement::new(self.super_parent_name.as_str());
        for (key, value) in variables.entries() {
            walker::append_element_to(
                &mut body,
                &key.to_string(),
                value,
                &self.default_list_item_name,
            );
        }

        self.document.append_child(body);
        self.document.serialize()
    }
}

impl Default for XmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}
