//! Lexical classification of raw value literals.
//!
//! Classification is purely syntactic and runs before any conversion: it
//! decides which [`Kind`] a literal *looks like*, without checking ranges.
//! Rules are tried in priority order:
//!
//! 1. empty → `Undefined`
//! 2. `"..."` with exactly two quotes → `String`
//! 3. `[...]` with balanced brackets → `Array`
//! 4. `true` / `false` → `Boolean`
//! 5. `[+-]?digits` → `Integer`, `[+-]?digits.digits` → `Float`
//! 6. anything else → `Undefined`

use crate::types::Kind;

/// Classify a trimmed literal.
///
/// # Examples
///
/// ```
/// use omfl_core::{classify, Kind};
///
/// assert_eq!(classify("\"a\""), Kind::String);
/// assert_eq!(classify("[1, 2, [3,4]]"), Kind::Array);
/// assert_eq!(classify("-2.5"), Kind::Float);
/// assert_eq!(classify("+"), Kind::Undefined);
/// ```
pub fn classify(literal: &str) -> Kind {
    if literal.is_empty() {
        return Kind::Undefined;
    }

    if literal.starts_with('"') && literal.ends_with('"') {
        return if literal.matches('"').count() == 2 {
            Kind::String
        } else {
            Kind::Undefined
        };
    }

    if literal.starts_with('[') && literal.ends_with(']') {
        return if brackets_balanced(literal) {
            Kind::Array
        } else {
            Kind::Undefined
        };
    }

    if literal == "true" || literal == "false" {
        return Kind::Boolean;
    }

    classify_number(literal)
}

/// Whether `[`/`]` nesting never goes negative and ends at zero.
fn brackets_balanced(literal: &str) -> bool {
    let mut depth: usize = 0;
    for c in literal.chars() {
        match c {
            '[' => depth += 1,
            ']' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

fn classify_number(literal: &str) -> Kind {
    let bytes = literal.as_bytes();
    let first = bytes[0];
    let signed = first == b'+' || first == b'-';

    if !(first.is_ascii_digit() || signed) || (signed && bytes.len() == 1) {
        return Kind::Undefined;
    }

    let mut point = None;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'0'..=b'9' => {}
            b'+' | b'-' if i == 0 => {}
            b'.' if point.is_none() => point = Some(i),
            _ => return Kind::Undefined,
        }
    }

    match point {
        None => Kind::Integer,
        // `+.5`, `-.5` and `5.` have no digit on one side of the point.
        Some(1) if signed => Kind::Undefined,
        Some(i) if i == bytes.len() - 1 => Kind::Undefined,
        Some(_) => Kind::Float,
    }
}

/// Whether `key` is a valid key or section name: non-empty ASCII
/// alphanumerics, `-` and `_`.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
