//! Section tree: path-qualified insertion and dotted-path lookup.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::Index;

use crate::error::{OmflError, Result, SyntaxErrorKind};
use crate::types::{Node, Value, UNDEFINED};

/// The write side of the tree, used by the scanner while a parse is running.
///
/// The root is always a section with an empty key.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTree {
    root: Node,
}

impl Default for SectionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTree {
    pub fn new() -> Self {
        Self {
            root: Node::new(String::new(), Value::section()),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// Walk `path` from the root, creating empty sections for missing
    /// segments, and return the children of the final section.
    ///
    /// Existing nodes on the path are never replaced. A segment that already
    /// names a leaf is a [`SyntaxErrorKind::SectionConflict`].
    fn section_mut(
        &mut self,
        path: &[String],
    ) -> std::result::Result<&mut BTreeMap<String, Node>, SyntaxErrorKind> {
        let mut current = &mut self.root;
        for (depth, segment) in path.iter().enumerate() {
            current = match current.value_mut() {
                Value::Section(children) => children
                    .entry(segment.clone())
                    .or_insert_with(|| Node::new(segment.clone(), Value::section())),
                _ => return Err(conflict(&path[..depth])),
            };
        }
        match current.value_mut() {
            Value::Section(children) => Ok(children),
            _ => Err(conflict(path)),
        }
    }

    /// Make sure the section at `path` exists.
    pub fn ensure_section(&mut self, path: &[String]) -> std::result::Result<(), SyntaxErrorKind> {
        self.section_mut(path).map(|_| ())
    }

    /// Insert `key = value` into the section at `path`.
    ///
    /// Fails with [`SyntaxErrorKind::DuplicateKey`] if `key` already exists
    /// there; the existing node is left untouched.
    pub fn insert(
        &mut self,
        path: &[String],
        key: &str,
        value: Value,
    ) -> std::result::Result<(), SyntaxErrorKind> {
        let children = self.section_mut(path)?;
        match children.entry(key.to_string()) {
            Entry::Occupied(_) => Err(SyntaxErrorKind::DuplicateKey(key.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(Node::new(key, value));
                Ok(())
            }
        }
    }
}

impl Node {
    /// Look up a child by name or dotted path.
    ///
    /// A plain name is looked up among this section's children. If this node
    /// is not a section, a plain-name lookup returns the node itself, so
    /// chained lookups past a leaf are harmless.
    ///
    /// A dotted name is resolved segment by segment; any segment that is
    /// absent, or that would have to pass through a non-section, fails with
    /// [`OmflError::MissingKey`].
    ///
    /// # Examples
    ///
    /// ```
    /// let doc = omfl_core::parse("[a.b]\nx = true\n");
    /// assert!(doc.root().get("a.b.x").unwrap().as_bool().unwrap());
    /// assert!(doc.root().get("a.c").is_err());
    /// ```
    pub fn get(&self, name: &str) -> Result<&Node> {
        if !name.contains('.') {
            return match self.value() {
                Value::Section(children) => children.get(name).ok_or_else(|| missing(self, name)),
                _ => Ok(self),
            };
        }

        let mut current = self;
        for segment in name.split('.') {
            current = match current.value() {
                Value::Section(children) => children
                    .get(segment)
                    .ok_or_else(|| missing_in_path(name, segment))?,
                _ => return Err(missing_in_path(name, segment)),
            };
        }
        Ok(current)
    }

    /// Element `index` of an array.
    ///
    /// Past the end this returns a node of kind [`Kind::Undefined`](crate::Kind::Undefined) rather
    /// than an error, so arrays can be walked until `is_undefined()`.
    /// Indexing anything other than an array fails with
    /// [`OmflError::NotArray`].
    pub fn at(&self, index: usize) -> Result<&Node> {
        match self.value() {
            Value::Array(items) => Ok(items.get(index).unwrap_or(&UNDEFINED)),
            other => Err(OmflError::NotArray(other.kind())),
        }
    }
}

/// Array indexing with the out-of-range sentinel of [`Node::at`].
///
/// # Panics
///
/// Panics if the node is not an array. Use [`Node::at`] to handle that case.
impl Index<usize> for Node {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        match self.at(index) {
            Ok(node) => node,
            Err(err) => panic!("{err}"),
        }
    }
}

fn missing(section: &Node, key: &str) -> OmflError {
    OmflError::MissingKey {
        path: section.key().to_string(),
        key: key.to_string(),
    }
}

fn missing_in_path(path: &str, key: &str) -> OmflError {
    OmflError::MissingKey {
        path: path.to_string(),
        key: key.to_string(),
    }
}

fn conflict(path: &[String]) -> SyntaxErrorKind {
    SyntaxErrorKind::SectionConflict(path.join("."))
}
