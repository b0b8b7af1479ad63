//! # mapxml
//!
//! Renders a nested key-value structure (text scalars, ordered lists,
//! order-preserving maps) as a complete XML document string, including
//! the declaration line.
//!
//! ```
//! use mapxml::{Value, XmlRenderer};
//!
//! let structure = Value::Map(vec![
//!     ("name".to_string(), Value::from("hogehoge")),
//! ]);
//! let xml = XmlRenderer::new().render(&structure);
//! assert_eq!(
//!     xml,
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<xml_body><name>hogehoge</name></xml_body>\n"
//! );
//! ```
//!
//! Invalid values (JSON `null` and friends) are silently omitted from
//! the output rather than reported as errors; empty collections render
//! as self-closing elements. The input is assumed to be a finite tree:
//! recursion depth equals input depth and cyclic structures are the
//! caller's problem.

pub mod document;
pub mod renderer;
pub mod value;

pub use document::{XmlDocument, XmlElement, XmlNode};
pub use renderer::{RenderOptions, XmlRenderer};
pub use value::{Key, Value};

use anyhow::{Context, Result};

/// Parses a JSON document string and renders it with `options`.
///
/// Convenience wrapper used by the CLI; JSON objects keep their key
/// order in the output.
pub fn render_json_str(json: &str, options: RenderOptions) -> Result<String> {
    let value: Value = serde_json::from_str(json).context("input is not valid JSON")?;
    Ok(XmlRenderer::with_options(options).render(&value))
}
