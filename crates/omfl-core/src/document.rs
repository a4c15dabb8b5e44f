//! Query façade: the parse result and typed accessors on nodes.
//!
//! The document is built by exactly one scan and is read-only afterwards.
//! Lookups that can fail return [`Result`]; the `_or_default` accessors never
//! fail and are meant for optional settings.

use crate::error::{OmflError, Result, SyntaxError};
use crate::types::{Kind, Node, Value};

/// The outcome of one parse: the root section plus the first syntax error,
/// if any.
///
/// When the scan stopped early, everything committed before the error is
/// still queryable, but the tree is not guaranteed to be complete.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Node,
    error: Option<SyntaxError>,
}

impl Document {
    pub(crate) fn new(root: Node, error: Option<SyntaxError>) -> Self {
        Self { root, error }
    }

    /// Whether the whole input was scanned without a structural error.
    pub fn valid(&self) -> bool {
        self.error.is_none()
    }

    /// The error that stopped the scan.
    pub fn error(&self) -> Option<&SyntaxError> {
        self.error.as_ref()
    }

    /// The root section.
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// Look up a key or section by dotted path from the root.
    pub fn get(&self, path: &str) -> Result<&Node> {
        self.root.get(path)
    }
}

impl Node {
    fn mismatch(&self, expected: Kind) -> OmflError {
        OmflError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.value(), Value::Integer(_))
    }

    pub fn as_integer(&self) -> Result<i32> {
        match self.value() {
            Value::Integer(n) => Ok(*n),
            _ => Err(self.mismatch(Kind::Integer)),
        }
    }

    pub fn as_integer_or_default(&self, default: i32) -> i32 {
        self.as_integer().unwrap_or(default)
    }

    pub fn is_float(&self) -> bool {
        matches!(self.value(), Value::Float(_))
    }

    /// The float payload. Integer nodes are not widened.
    pub fn as_float(&self) -> Result<f64> {
        match self.value() {
            Value::Float(f) => Ok(*f),
            _ => Err(self.mismatch(Kind::Float)),
        }
    }

    pub fn as_float_or_default(&self, default: f64) -> f64 {
        self.as_float().unwrap_or(default)
    }

    pub fn is_string(&self) -> bool {
        matches!(self.value(), Value::String(_))
    }

    pub fn as_string(&self) -> Result<&str> {
        match self.value() {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(Kind::String)),
        }
    }

    pub fn as_string_or_default<'a>(&'a self, default: &'a str) -> &'a str {
        self.as_string().unwrap_or(default)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.value(), Value::Boolean(_))
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self.value() {
            Value::Boolean(b) => Ok(*b),
            _ => Err(self.mismatch(Kind::Boolean)),
        }
    }

    pub fn as_bool_or_default(&self, default: bool) -> bool {
        self.as_bool().unwrap_or(default)
    }

    pub fn is_array(&self) -> bool {
        matches!(self.value(), Value::Array(_))
    }

    /// The array elements as a slice.
    pub fn as_array(&self) -> Result<&[Node]> {
        match self.value() {
            Value::Array(items) => Ok(items),
            _ => Err(self.mismatch(Kind::Array)),
        }
    }
}
