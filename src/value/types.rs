use serde::{Deserialize, Deserializer};

/// One node of the input structure.
///
/// The renderer only distinguishes three usable shapes: a text leaf, an
/// ordered list with positional keys, and an order-preserving map with
/// string keys. Everything else (a JSON `null`, a value with no text
/// form) is `Invalid` and produces no output at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Scalar leaf carrying its text form
    Text(String),
    /// Ordered collection, entries addressed by position
    List(Vec<Value>),
    /// Keyed collection, insertion order preserved
    Map(Vec<(String, Value)>),
    /// Unsupported leaf; skipped by the renderer
    Invalid,
}

/// Key of one collection entry: a map key or a list position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Name(&'a str),
    Index(usize),
}

impl std::fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Name(name) => write!(f, "{}", name),
            Key::Index(index) => write!(f, "{}", index),
        }
    }
}

impl Value {
    /// Returns true for a usable text leaf.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns true for either collection shape. Empty collections count.
    pub fn is_collection(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Iterates the entries of a collection in order, pairing each value
    /// with its key. Map entries carry `Key::Name`, list entries carry
    /// `Key::Index`. Leaves yield nothing.
    pub fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (Key<'a>, &'a Value)> + 'a> {
        match self {
            Value::List(items) => Box::new(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, value)| (Key::Index(index), value)),
            ),
            Value::Map(fields) => Box::new(
                fields
                    .iter()
                    .map(|(key, value)| (Key::Name(key.as_str()), value)),
            ),
            Value::Text(_) | Value::Invalid => Box::new(std::iter::empty()),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Text(flag.to_string())
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Text(number.to_string())
    }
}

impl From<u64> for Value {
    fn from(number: u64) -> Self {
        Value::Text(number.to_string())
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Text(number.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Invalid,
        }
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<(String, Value)>> for Value {
    fn from(fields: Vec<(String, Value)>) -> Self {
        Value::Map(fields)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Invalid,
            serde_json::Value::Bool(flag) => Value::Text(flag.to_string()),
            serde_json::Value::Number(number) => Value::Text(number.to_string()),
            serde_json::Value::String(text) => Value::Text(text),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Map(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}
