//! Line patterns for schema declarations.
//!
//! All patterns are matched against a line with surrounding whitespace
//! stripped, and are anchored at the start only, so trailing comments after a
//! declaration do not prevent a match.

use once_cell::sync::Lazy;
use regex::Regex;

static ENUM_OPEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^enum\s+([A-Za-z0-9_]+)\s*\{").unwrap());

static MESSAGE_OPEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^message\s+([A-Za-z0-9_]+)\s*\{").unwrap());

/// `<type> <lower_snake_name> = <ordinal>;`
static FIELD_DECL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_.]+)\s+([a-z_][a-z0-9_]*)\s*=\s*(\d+)\s*;").unwrap()
});

/// Name declared by an `enum Name {` line.
pub fn enum_opener(stripped: &str) -> Option<&str> {
    ENUM_OPEN_REGEX
        .captures(stripped)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Name declared by a `message Name {` line.
pub fn message_opener(stripped: &str) -> Option<&str> {
    MESSAGE_OPEN_REGEX
        .captures(stripped)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// A parsed `<type> <name> = <ordinal>;` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl<'a> {
    pub declared_type: &'a str,
    pub name: &'a str,
    pub ordinal: u32,
}

/// Parses a field declaration. Ordinals that overflow `u32` are treated as
/// malformed and yield `None`.
pub fn field_decl(stripped: &str) -> Option<FieldDecl<'_>> {
    let cap = FIELD_DECL_REGEX.captures(stripped)?;
    Some(FieldDecl {
        declared_type: cap.get(1)?.as_str(),
        name: cap.get(2)?.as_str(),
        ordinal: cap.get(3)?.as_str().parse().ok()?,
    })
}

/// Net brace change on a line. Braces inside string literals are counted too;
/// field syntax never puts them there.
pub fn brace_delta(line: &str) -> i64 {
    line.chars().fold(0, |depth, ch| match ch {
        '{' => depth + 1,
        '}' => depth - 1,
        _ => depth,
    })
}
