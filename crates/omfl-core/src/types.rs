//! The OMFL value model: a strongly typed tree of named nodes.
//!
//! A [`Node`] pairs its name within its parent with a [`Value`]. The value is
//! a sum type with one case per [`Kind`], so the kind tag can never disagree
//! with the payload: [`Node::kind`] is derived from the variant rather than
//! stored next to it.

use std::collections::BTreeMap;
use std::fmt;

/// The closed set of value kinds.
///
/// `Undefined` is a legitimate sentinel: it is what the classifier returns for
/// an unrecognized literal and what array indexing returns past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Integer,
    Float,
    String,
    Boolean,
    Array,
    Section,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Undefined => "undefined",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Boolean => "boolean",
            Kind::Array => "array",
            Kind::Section => "section",
        };
        f.write_str(name)
    }
}

/// Typed payload of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Integer(i32),
    Float(f64),
    /// Unquoted string content.
    String(String),
    Boolean(bool),
    /// Anonymous elements in source order.
    Array(Vec<Node>),
    /// Named children; names are unique within one section.
    Section(BTreeMap<String, Node>),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Boolean(_) => Kind::Boolean,
            Value::Array(_) => Kind::Array,
            Value::Section(_) => Kind::Section,
        }
    }

    /// An empty section payload.
    pub fn section() -> Self {
        Value::Section(BTreeMap::new())
    }
}

/// A named node in the OMFL tree.
///
/// Sections and arrays own their children outright; there are no shared or
/// parent references, so dropping the root releases the whole tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    key: String,
    value: Value,
}

/// Returned for out-of-range array access.
pub(crate) static UNDEFINED: Node = Node {
    key: String::new(),
    value: Value::Undefined,
};

impl Node {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// An anonymous array element.
    pub fn element(value: Value) -> Self {
        Self::new(String::new(), value)
    }

    /// The node's name within its parent section. Empty for the root and for
    /// array elements.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    pub fn is_section(&self) -> bool {
        matches!(self.value, Value::Section(_))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self.value, Value::Undefined)
    }

    /// Number of elements (arrays) or children (sections); zero for scalars.
    pub fn len(&self) -> usize {
        match &self.value {
            Value::Array(items) => items.len(),
            Value::Section(children) => children.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over array elements in order. Yields nothing for other kinds.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        let items: &[Node] = match &self.value {
            Value::Array(items) => items,
            _ => &[],
        };
        items.iter()
    }

    /// Child names of a section in sorted order. Yields nothing for other kinds.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let children = match &self.value {
            Value::Section(children) => Some(children),
            _ => None,
        };
        children.into_iter().flat_map(|c| c.keys().map(String::as_str))
    }
}
