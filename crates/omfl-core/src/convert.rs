//! Conversion of classified literals into typed [`Value`]s.

use crate::classify::classify;
use crate::error::SyntaxErrorKind;
use crate::types::{Kind, Node, Value};

/// Deepest array nesting accepted in a single literal. Deeper input fails
/// with [`SyntaxErrorKind::NestingTooDeep`] instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Convert `literal` into a value of the given `kind`.
///
/// `kind` is expected to come from [`classify`]. Range and format failures
/// (an integer that does not fit in `i32`, say) are reported as errors rather
/// than wrapped or truncated.
pub fn convert(literal: &str, kind: Kind) -> Result<Value, SyntaxErrorKind> {
    convert_nested(literal, kind, 0)
}

/// Classify and convert in one step.
pub fn parse_literal(literal: &str) -> Result<Value, SyntaxErrorKind> {
    convert(literal, classify(literal))
}

/// `depth` counts the arrays enclosing `literal`.
fn convert_nested(literal: &str, kind: Kind, depth: usize) -> Result<Value, SyntaxErrorKind> {
    match kind {
        Kind::Integer => literal
            .parse::<i32>()
            .map(Value::Integer)
            .map_err(|_| SyntaxErrorKind::IntegerOutOfRange(literal.to_string())),
        Kind::Float => convert_float(literal),
        Kind::String => match literal.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
            Some(inner) => Ok(Value::String(inner.to_string())),
            None => Err(SyntaxErrorKind::InvalidLiteral(literal.to_string())),
        },
        Kind::Boolean => match literal {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            _ => Err(SyntaxErrorKind::InvalidLiteral(literal.to_string())),
        },
        Kind::Array => convert_array(literal, depth),
        Kind::Undefined | Kind::Section => {
            Err(SyntaxErrorKind::InvalidLiteral(literal.to_string()))
        }
    }
}

/// Parse a float, rejecting literals that overflow to infinity or that
/// underflow to zero despite a nonzero digit.
fn convert_float(literal: &str) -> Result<Value, SyntaxErrorKind> {
    let f: f64 = literal
        .parse()
        .map_err(|_| SyntaxErrorKind::MalformedFloat(literal.to_string()))?;

    let nonzero_digit = literal.bytes().any(|b| matches!(b, b'1'..=b'9'));
    if !f.is_finite() || (f == 0.0 && nonzero_digit) {
        return Err(SyntaxErrorKind::FloatOutOfRange(literal.to_string()));
    }
    Ok(Value::Float(f))
}

/// Convert an array literal `[a, b, [c, d]]` element by element.
///
/// The interior is split on commas at bracket depth zero. Each segment is
/// trimmed of spaces; empty segments are skipped, so `[]` and `[1, 2,]` are
/// accepted. Any element that fails to classify or convert fails the whole
/// array.
fn convert_array(literal: &str, depth: usize) -> Result<Value, SyntaxErrorKind> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(SyntaxErrorKind::NestingTooDeep(MAX_NESTING_DEPTH));
    }

    let malformed = || SyntaxErrorKind::MalformedArray(literal.to_string());

    let interior = literal
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(malformed)?;

    let mut items = Vec::new();
    for segment in split_top_level(interior).ok_or_else(malformed)? {
        let segment = segment.trim_matches(' ');
        if segment.is_empty() {
            continue;
        }
        let value = convert_nested(segment, classify(segment), depth + 1)?;
        items.push(Node::element(value));
    }

    Ok(Value::Array(items))
}

/// Split on commas that are not nested inside brackets.
///
/// Returns `None` if a `]` closes more brackets than were opened.
fn split_top_level(interior: &str) -> Option<Vec<&str>> {
    let mut segments = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (i, c) in interior.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                segments.push(&interior[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&interior[start..]);

    Some(segments)
}
