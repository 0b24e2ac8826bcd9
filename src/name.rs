use thiserror::Error;

use crate::schema::Schema;

/// Built-in type tokens. None of these may be used as the canonical short
/// name of a user-defined named type.
pub const RESERVED_TYPE_NAMES: &[&str] = &[
    "null", "boolean", "int", "long", "float", "double", "bytes", "string", "array", "map",
    "union",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Invalid name `{0}`")]
    InvalidName(String),
    #[error("Reserved type name `{0}` used for a named type")]
    ReservedName(String),
    #[error("Duplicate name `{0}`")]
    DuplicateName(String),
}

/// Splits a dotted name at its rightmost dot into (short name, namespace
/// prefix). Returns `None` when there is no dot.
///
/// The rightmost dot is authoritative: `"a.b.c"` yields `("c", "a.b")`, and
/// `"a..b"` yields `("b", "a.")` whose trailing-dot namespace the grammar
/// then rejects. Canonicalization depends on this exact split point, so do
/// not replace it with a segment-wise scan.
pub fn split_fullname(raw: &str) -> Option<(&str, &str)> {
    let dot = raw.rfind('.')?;
    Some((&raw[dot + 1..], &raw[..dot]))
}

/// Resolves a raw name against an explicit and an enclosing namespace,
/// returning (short name, resolved namespace).
///
/// Precedence: a dotted name is self-qualified and both supplied namespaces
/// are ignored; otherwise the explicit namespace wins when non-empty, with
/// the enclosing namespace as the fallback.
pub fn resolve_name<'a>(
    raw: &'a str,
    explicit_ns: &'a str,
    enclosing_ns: &'a str,
) -> (&'a str, &'a str) {
    if let Some(split) = split_fullname(raw) {
        return split;
    }

    let ns = if explicit_ns.is_empty() {
        enclosing_ns
    } else {
        explicit_ns
    };

    (raw, ns)
}

/// Canonical dotted fullname, or the short name alone when the resolved
/// namespace is empty.
pub fn build_fullname(raw: &str, explicit_ns: &str, enclosing_ns: &str) -> String {
    let (short, ns) = resolve_name(raw, explicit_ns, enclosing_ns);

    if ns.is_empty() {
        short.to_string()
    } else {
        format!("{}.{}", ns, short)
    }
}

/// `resolve_name` over a type description, using its stored name and
/// namespace fields.
pub fn resolve_schema_name<'a>(schema: &'a Schema, enclosing_ns: &'a str) -> (&'a str, &'a str) {
    resolve_name(schema.name(), schema.namespace(), enclosing_ns)
}

/// `build_fullname` over a type description.
pub fn schema_fullname(schema: &Schema, enclosing_ns: &str) -> String {
    build_fullname(schema.name(), schema.namespace(), enclosing_ns)
}

/// Grammar for one name segment: a record field name, an enum symbol, or a
/// single component of a dotted name. `[A-Za-z_]` then `[A-Za-z0-9_]*`.
pub fn is_correct_name(s: &str) -> bool {
    let mut chars = s.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Grammar for a possibly-dotted name: every dot-separated segment,
/// including the outermost remainder, must be a correct simple name. Empty
/// segments never pass, so consecutive, leading, and trailing dots are all
/// rejected.
pub fn is_correct_dotted_name(s: &str) -> bool {
    match split_fullname(s) {
        Some((segment, rest)) => is_correct_name(segment) && is_correct_dotted_name(rest),
        None => is_correct_name(s),
    }
}

/// Validates the names of one type description, fail-fast.
///
/// Non-named kinds pass trivially. For record/enum/fixed the stored name,
/// namespace (when non-empty), and fullname must each satisfy the dotted
/// grammar, and the canonical short name must not collide with a built-in
/// type token. Grammar checks run before canonicalization because the
/// splitting step assumes well-formed segments.
pub fn verify_schema(schema: &Schema) -> Result<(), NameError> {
    if !schema.is_named() {
        return Ok(());
    }

    let name = schema.name();
    let namespace = schema.namespace();

    verify_dotted_name(name)?;
    if !namespace.is_empty() {
        verify_dotted_name(namespace)?;
    }
    verify_dotted_name(schema.fullname())?;

    // Enclosing namespace cannot change the short name, so it is irrelevant
    // to the reserved-word check.
    let (short, _) = resolve_name(name, namespace, "");
    if RESERVED_TYPE_NAMES.contains(&short) {
        return Err(NameError::ReservedName(short.to_string()));
    }

    Ok(())
}

/// Grammar-checks raw inputs, then canonicalizes and applies the
/// reserved-word check. The checks must come first: splitting malformed
/// input is undefined.
pub(crate) fn verified_fullname(
    raw: &str,
    explicit_ns: &str,
    enclosing_ns: &str,
) -> Result<String, NameError> {
    verify_dotted_name(raw)?;
    if !explicit_ns.is_empty() {
        verify_dotted_name(explicit_ns)?;
    }
    if !enclosing_ns.is_empty() {
        verify_dotted_name(enclosing_ns)?;
    }

    let (short, _) = resolve_name(raw, explicit_ns, "");
    if RESERVED_TYPE_NAMES.contains(&short) {
        return Err(NameError::ReservedName(short.to_string()));
    }

    Ok(build_fullname(raw, explicit_ns, enclosing_ns))
}

pub fn verify_field_name(s: &str) -> Result<(), NameError> {
    if is_correct_name(s) {
        Ok(())
    } else {
        Err(NameError::InvalidName(s.to_string()))
    }
}

pub fn verify_enum_symbol(s: &str) -> Result<(), NameError> {
    verify_field_name(s)
}

fn verify_dotted_name(s: &str) -> Result<(), NameError> {
    if is_correct_dotted_name(s) {
        Ok(())
    } else {
        Err(NameError::InvalidName(s.to_string()))
    }
}
