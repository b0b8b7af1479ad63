//! Recursive structure-to-element mapping.
//!
//! Two cooperating functions walk the input: `append_element_to`
//! decides what a single `(name, value)` pair becomes, and
//! `append_list_elements` resolves a name for every entry of a
//! collection before handing each one back to `append_element_to`.
//! The walk is pure recursive descent; the element tree is the only
//! thing mutated.

use tracing::trace;

use crate::document::{XmlElement, XmlNode};
use crate::value::{Key, Value};

/// Appends the element for `(name, value)` to `parent`.
///
/// A text leaf becomes `<name>text</name>`, a collection becomes a
/// nested element populated entry by entry (empty collections stay
/// childless and serialize self-closing), and an invalid value leaves
/// `parent` untouched.
pub(crate) fn append_element_to(
    parent: &mut XmlElement,
    name: &str,
    value: &Value,
    list_item_name: &str,
) {
    match value {
        Value::Text(text) => {
            let mut element = XmlElement::new(name);
            element.append_child(XmlNode::text(text.as_str()));
            parent.append_child(XmlNode::Element(element));
        }
        Value::List(_) | Value::Map(_) => {
            let mut element = XmlElement::new(name);
            append_list_elements(&mut element, value, list_item_name);
            parent.append_child(XmlNode::Element(element));
        }
        Value::Invalid => {
            trace!(name, "skipping entry without a usable value");
        }
    }
}

/// Populates `element` from the entries of `collection`.
///
/// Collection-valued entries keep their map key when it is a non-empty
/// string and fall back to `list_item_name` for positional entries.
/// Scalar entries take their key as given, so a list of bare scalars
/// is named by position. Invalid entries resolve no name at all.
pub(crate) fn append_list_elements(
    element: &mut XmlElement,
    collection: &Value,
    list_item_name: &str,
) {
    for (key, value) in collection.entries() {
        let child_name = match value {
            Value::List(_) | Value::Map(_) => match key {
                Key::Name(name) if !name.is_empty() => name.to_string(),
                _ => list_item_name.to_string(),
            },
            Value::Text(_) => key.to_string(),
            Value::Invalid => continue,
        };
        append_element_to(element, &child_name, value, list_item_name);
    }
}
