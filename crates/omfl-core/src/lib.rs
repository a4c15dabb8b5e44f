//! # omfl-core
//!
//! Parser and query engine for **OMFL**, a small TOML-like configuration
//! language: `[dotted.section]` headers, `key = value` lines, `#` comments,
//! and typed literals (32-bit integers, floats, strings, booleans, and nested
//! arrays).
//!
//! ## Quick start
//!
//! ```rust
//! use omfl_core::parse;
//!
//! let doc = parse("[server]\nport = 8080\nhosts = [\"a\", \"b\"]\n");
//! assert!(doc.valid());
//!
//! let server = doc.get("server").unwrap();
//! assert_eq!(server.get("port").unwrap().as_integer().unwrap(), 8080);
//! assert_eq!(doc.get("server.hosts").unwrap()[1].as_string().unwrap(), "b");
//! assert!(doc.get("server.hosts").unwrap()[2].is_undefined());
//! assert_eq!(server.get("timeout").map_or(30, |n| n.as_integer_or_default(30)), 30);
//! ```
//!
//! ## Modules
//!
//! - [`classify`]: literal → [`Kind`], purely syntactic
//! - [`convert`]: literal + kind → typed [`Value`]
//! - [`tree`]: section tree insertion, dotted lookup, array indexing
//! - [`parser`]: the single-pass scanner and its entry points
//! - [`document`]: the parse result and typed accessors
//! - [`error`]: raised errors and recorded syntax errors
//! - [`types`]: `Kind`, `Value`, and `Node`

pub mod classify;
pub mod convert;
pub mod document;
pub mod error;
pub mod parser;
pub mod tree;
pub mod types;

pub use classify::{classify, is_valid_key};
pub use convert::{convert, parse_literal, MAX_NESTING_DEPTH};
pub use document::Document;
pub use error::{OmflError, Result, SyntaxError, SyntaxErrorKind};
pub use parser::{parse, parse_file, parse_reader};
pub use tree::SectionTree;
pub use types::{Kind, Node, Value};
