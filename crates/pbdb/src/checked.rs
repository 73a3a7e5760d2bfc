// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Semantic types handed to the type checker.

use std::fmt;

/// Primitive semantic types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Bool,
    Int64,
    Uint64,
    Double,
    String,
    Bytes,
}

impl PrimitiveType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int64 => "int",
            Self::Uint64 => "uint",
            Self::Double => "double",
            Self::String => "string",
            Self::Bytes => "bytes",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Well-known message types with a dedicated semantic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownType {
    Any,
    Timestamp,
    Duration,
}

impl WellKnownType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Timestamp => "google.protobuf.Timestamp",
            Self::Duration => "google.protobuf.Duration",
        }
    }
}

/// Checked (semantic) type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CheckedType {
    /// Dynamic JSON-like value.
    Dyn,
    Null,
    Primitive(PrimitiveType),
    /// Nullable primitive carried by a wrapper message.
    Wrapper(PrimitiveType),
    WellKnown(WellKnownType),
    List(Box<CheckedType>),
    Map(Box<CheckedType>, Box<CheckedType>),
    /// Named message type (fully-qualified, no leading dot).
    Message(String),
}

impl CheckedType {
    pub fn list(elem: CheckedType) -> Self {
        Self::List(Box::new(elem))
    }

    pub fn map(key: CheckedType, value: CheckedType) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    pub fn message(name: impl Into<String>) -> Self {
        Self::Message(name.into())
    }

    /// True when the value may be absent at evaluation time.
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Null | Self::Dyn | Self::Wrapper(_))
    }

    /// Name of the referenced message type, if any.
    pub fn message_name(&self) -> Option<&str> {
        match self {
            Self::Message(name) => Some(name),
            _ => None,
        }
    }

    /// Element type of a list.
    pub fn list_elem(&self) -> Option<&CheckedType> {
        match self {
            Self::List(elem) => Some(elem),
            _ => None,
        }
    }

    /// Key and value types of a map.
    pub fn map_entry(&self) -> Option<(&CheckedType, &CheckedType)> {
        match self {
            Self::Map(key, value) => Some((key, value)),
            _ => None,
        }
    }
}

impl From<PrimitiveType> for CheckedType {
    fn from(value: PrimitiveType) -> Self {
        Self::Primitive(value)
    }
}

impl fmt::Display for CheckedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dyn => f.write_str("dyn"),
            Self::Null => f.write_str("null_type"),
            Self::Primitive(p) => write!(f, "{}", p),
            Self::Wrapper(p) => write!(f, "wrapper({})", p),
            Self::WellKnown(w) => f.write_str(w.as_str()),
            Self::List(elem) => write!(f, "list({})", elem),
            Self::Map(key, value) => write!(f, "map({}, {})", key, value),
            Self::Message(name) => f.write_str(name),
        }
    }
}
