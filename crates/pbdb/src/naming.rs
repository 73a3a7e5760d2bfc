// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field name transformations.

/// Prefix of generated accessor names.
pub const GETTER_PREFIX: &str = "Get";

/// Exported identifier for a proto field name.
///
/// Each underscore-delimited segment is capitalized and the underscores are
/// dropped (`nested_type` -> `NestedType`). A leading underscore becomes `X`
/// so the result still starts with an upper-case letter.
pub fn exported_name(orig: &str) -> String {
    let mut out = String::with_capacity(orig.len() + 1);
    if orig.starts_with('_') {
        out.push('X');
    }
    for segment in orig.split('_').filter(|s| !s.is_empty()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Accessor name for an exported identifier.
pub fn getter_name(exported: &str) -> String {
    format!("{}{}", GETTER_PREFIX, exported)
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_ascii_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Strip the optional leading `.` of a fully-qualified name.
pub fn normalize_type_name(name: &str) -> &str {
    name.strip_prefix('.').unwrap_or(name)
}
