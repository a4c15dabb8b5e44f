//! Error types for OMFL parsing and querying.
//!
//! Two families live here:
//!
//! - [`OmflError`] is *raised*: I/O failures at the entry points and query
//!   failures (missing keys, kind mismatches, indexing a non-array).
//! - [`SyntaxError`] is *recorded*: the scan stops at the first structural
//!   error and stores it in the [`Document`](crate::Document). Callers check
//!   `valid()` instead of handling an error per offending line.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Kind;

/// Errors raised by the OMFL entry points and query API.
#[derive(Error, Debug)]
pub enum OmflError {
    /// The input file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A caller-supplied reader failed (including non-UTF-8 input).
    #[error("read error: {0}")]
    Read(#[from] io::Error),

    /// A dotted path addressed a key or section that does not exist.
    #[error("missing key '{key}' in '{path}'")]
    MissingKey { path: String, key: String },

    /// A typed accessor was called on a node of another kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },

    /// Index access on a node that is not an array.
    #[error("{0} value is not array-accessible")]
    NotArray(Kind),
}

/// Convenience alias used throughout omfl-core.
pub type Result<T> = std::result::Result<T, OmflError>;

/// The first structural error found while scanning, with its 1-based line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct SyntaxError {
    pub line: usize,
    pub kind: SyntaxErrorKind,
}

/// Why a scan was marked invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("invalid key '{0}'")]
    InvalidKey(String),

    #[error("invalid section name '{0}'")]
    InvalidSectionName(String),

    #[error("section header is missing its closing ']'")]
    UnterminatedSectionHeader,

    #[error("unexpected content '{0}' after section header")]
    TrailingSectionContent(String),

    #[error("unexpected text '{0}' before section header")]
    StrayKeyBeforeSection(String),

    #[error("more than one '=' on a line")]
    DuplicateEquals,

    #[error("key '{0}' has no '=' and no value")]
    MissingEquals(String),

    #[error("unrecognized value literal '{0}'")]
    InvalidLiteral(String),

    #[error("integer literal '{0}' does not fit in 32 bits")]
    IntegerOutOfRange(String),

    #[error("malformed float literal '{0}'")]
    MalformedFloat(String),

    /// The literal overflows to infinity or underflows to zero as an `f64`.
    #[error("float literal '{0}' is out of range")]
    FloatOutOfRange(String),

    #[error("malformed array literal '{0}'")]
    MalformedArray(String),

    /// Arrays nested deeper than the given limit.
    #[error("arrays nested more than {0} levels deep")]
    NestingTooDeep(usize),

    #[error("duplicate key '{0}'")]
    DuplicateKey(String),

    #[error("'{0}' is already a value, not a section")]
    SectionConflict(String),
}
