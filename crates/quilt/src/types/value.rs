use std::fmt::{Display, Formatter, Result as FmtResult};

use indexmap::IndexMap;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Path, Step, Thunk};

/// An ordered mapping of field name to node, insertion order preserved.
pub type Map = IndexMap<String, Value>;

/// The reserved key marking a mapping node as a component descriptor.
///
/// Its string value is a template identifier of the form `"namespace/name"`.
pub const RENDER_KEY: &str = "__render";

/// A node in a data tree.
///
/// `Value` represents both raw data and component descriptors: ordered
/// sequences, ordered mappings (keys unique, insertion order preserved),
/// strings, deferred interpolations, and primitives. Trees are built by the
/// caller (typically from parsed JSON or the [`data!`](crate::data!) macro)
/// and mutated in place during rendering.
///
/// # Example
///
/// ```
/// use quilt::Value;
///
/// let count: Value = 42.into();
/// assert_eq!(count.to_string(), "42");
///
/// let name: Value = "Alice".into();
/// assert_eq!(name.as_str(), Some("Alice"));
///
/// let tags: Value = vec!["a", "b"].into();
/// assert_eq!(tags.as_array().map(<[Value]>::len), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value; displays as the empty string.
    Null,

    /// A boolean primitive.
    Bool(bool),

    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string leaf; the interpolator scans these for `%{...}` placeholders.
    String(String),

    /// An ordered sequence of nodes.
    Array(Vec<Value>),

    /// An ordered mapping node; may be a component descriptor.
    Object(Map),

    /// A deferred, memoizing interpolation (see [`Thunk`]).
    Thunk(Thunk),
}

impl Value {
    /// Get this value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a mapping, if it is one.
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Get this value as a sequence, if it is one.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get this value as a thunk, if it is one.
    pub fn as_thunk(&self) -> Option<&Thunk> {
        match self {
            Value::Thunk(thunk) => Some(thunk),
            _ => None,
        }
    }

    /// Get a field of a mapping node by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// The template identifier of a component descriptor.
    ///
    /// Returns the string value of the reserved `__render` key, or `None`
    /// for any other node.
    pub fn render_id(&self) -> Option<&str> {
        self.get(RENDER_KEY).and_then(Value::as_str)
    }

    /// Whether this node is a component descriptor.
    pub fn is_descriptor(&self) -> bool {
        self.render_id().is_some()
    }

    /// Read the node at `path`, if the path denotes one.
    pub fn at_path(&self, path: &Path) -> Option<&Value> {
        let mut current = self;
        for step in path.steps() {
            current = match (current, step) {
                (Value::Object(map), Step::Key(key)) => map.get(key)?,
                (Value::Array(items), Step::Index(index)) => items.get(*index)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Mutably read the node at `path`, if the path denotes one.
    pub fn at_path_mut(&mut self, path: &Path) -> Option<&mut Value> {
        let mut current = self;
        for step in path.steps() {
            current = match (current, step) {
                (Value::Object(map), Step::Key(key)) => map.get_mut(key)?,
                (Value::Array(items), Step::Index(index)) => items.get_mut(*index)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Replace the node at `path` with the result of `replace`.
    ///
    /// The callback receives the current node. The root path replaces the
    /// whole tree. Returns `false` without calling `replace` if the path
    /// denotes no node.
    ///
    /// ```
    /// use quilt::{Path, Value, data};
    ///
    /// let mut tree = data! { "a" => data! { "b" => 1 } };
    /// let path = Path::parse("$.a.b").unwrap();
    /// assert!(tree.replace_at(&path, |_| "done".into()));
    /// assert_eq!(tree.at_path(&path), Some(&Value::from("done")));
    /// ```
    pub fn replace_at(&mut self, path: &Path, replace: impl FnOnce(Value) -> Value) -> bool {
        match self.at_path_mut(path) {
            Some(slot) => {
                let old = std::mem::take(slot);
                *slot = replace(old);
                true
            }
            None => false,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

/// Stringification used wherever a value lands in string position.
///
/// `Null` is empty, scalars use their natural form, thunks display their
/// cached text (or their `%{...}` source if unforced), sequences concatenate
/// their elements with the empty separator, and mappings render as compact
/// JSON.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Thunk(thunk) => write!(f, "{thunk}"),
            Value::Array(items) => {
                for item in items {
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Object(_) => {
                let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
                write!(f, "{json}")
            }
        }
    }
}

// From implementations for common types

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as i64)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl From<Thunk> for Value {
    fn from(thunk: Thunk) -> Self {
        Value::Thunk(thunk)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Number(i),
                None => Value::Float(n.as_f64().unwrap_or(0.0)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Parses a JSON document, preserving object key order.
///
/// ```
/// use quilt::Value;
///
/// let tree: Value = r#"{"__render": "p/p", "p__content": "hi"}"#.parse().unwrap();
/// assert_eq!(tree.render_id(), Some("p/p"));
/// ```
impl std::str::FromStr for Value {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

/// Thunks serialize as their display text; everything else as plain JSON.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_i64(*n),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::String(s) => serializer.serialize_str(s),
            Value::Thunk(thunk) => serializer.serialize_str(&thunk.to_string()),
            Value::Array(items) => items.serialize(serializer),
            Value::Object(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("any JSON value")
            }

            fn visit_bool<E: serde::de::Error>(self, b: bool) -> Result<Value, E> {
                Ok(Value::Bool(b))
            }

            fn visit_i64<E: serde::de::Error>(self, n: i64) -> Result<Value, E> {
                Ok(Value::Number(n))
            }

            fn visit_u64<E: serde::de::Error>(self, n: u64) -> Result<Value, E> {
                match i64::try_from(n) {
                    Ok(i) => Ok(Value::Number(i)),
                    Err(_) => Ok(Value::Float(n as f64)),
                }
            }

            fn visit_f64<E: serde::de::Error>(self, x: f64) -> Result<Value, E> {
                Ok(Value::Float(x))
            }

            fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Value, E> {
                Ok(Value::String(s.to_string()))
            }

            fn visit_string<E: serde::de::Error>(self, s: String) -> Result<Value, E> {
                Ok(Value::String(s))
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E: serde::de::Error>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
                let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(item) = access.next_element()? {
                    items.push(item);
                }
                Ok(Value::Array(items))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
                let mut map = Map::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    map.insert(key, value);
                }
                Ok(Value::Object(map))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}
