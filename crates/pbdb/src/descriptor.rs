// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Message descriptor model consumed from the message runtime.
//!
//! Generated code (or a hand-written runtime) exposes one static
//! [`MessageDescriptor`] per message type. Message and enum references are
//! function pointers so descriptors can point at each other, and at
//! themselves, without ordering constraints between statics.
//!
//! ```
//! use pbdb::{FieldDescriptor, Label, MessageDescriptor, ScalarKind};
//!
//! static POINT: MessageDescriptor = MessageDescriptor::new(
//!     "geo.Point",
//!     &[
//!         FieldDescriptor::scalar("lat", 1, ScalarKind::Double),
//!         FieldDescriptor::scalar("lng", 2, ScalarKind::Double),
//!     ],
//! );
//!
//! assert_eq!(POINT.type_name(), "geo.Point");
//! assert_eq!(POINT.fields()[1].label, Label::Optional);
//! ```

use std::fmt;

/// Resolves a referenced message descriptor.
pub type MessageRef = fn() -> &'static MessageDescriptor;

/// Resolves a referenced enum descriptor.
pub type EnumRef = fn() -> &'static EnumDescriptor;

/// Scalar wire kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Double,
    Float,
    Int64,
    Uint64,
    Int32,
    Fixed64,
    Fixed32,
    Bool,
    String,
    Bytes,
    Uint32,
    Sfixed32,
    Sfixed64,
    Sint32,
    Sint64,
}

impl ScalarKind {
    /// Lower-case proto keyword for this kind.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Float => "float",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Int32 => "int32",
            Self::Fixed64 => "fixed64",
            Self::Fixed32 => "fixed32",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Uint32 => "uint32",
            Self::Sfixed32 => "sfixed32",
            Self::Sfixed64 => "sfixed64",
            Self::Sint32 => "sint32",
            Self::Sint64 => "sint64",
        }
    }

    /// Whether this kind may be used as a map key.
    pub const fn is_valid_map_key(self) -> bool {
        !matches!(self, Self::Double | Self::Float | Self::Bytes)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Underlying kind of a field.
#[derive(Clone, Copy)]
pub enum FieldType {
    Scalar(ScalarKind),
    Message(MessageRef),
    Enum(EnumRef),
}

impl FieldType {
    /// Fully-qualified name of the referenced message or enum type.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Self::Scalar(_) => None,
            Self::Message(resolve) => Some(resolve().full_name),
            Self::Enum(resolve) => Some(resolve().full_name),
        }
    }
}

impl fmt::Debug for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Referenced descriptors are printed by name; printing them in full
        // would not terminate on recursive types.
        match self {
            Self::Scalar(kind) => f.debug_tuple("Scalar").field(kind).finish(),
            Self::Message(resolve) => f.debug_tuple("Message").field(&resolve().full_name).finish(),
            Self::Enum(resolve) => f.debug_tuple("Enum").field(&resolve().full_name).finish(),
        }
    }
}

/// Field cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Optional,
    Required,
    Repeated,
}

/// Description of a single declared field.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Proto-level (snake_case) field name.
    pub name: &'static str,
    /// Field number.
    pub number: u32,
    pub field_type: FieldType,
    pub label: Label,
    /// Name of the enclosing oneof, if any.
    pub oneof: Option<&'static str>,
}

impl FieldDescriptor {
    /// Singular field of the given type.
    pub const fn new(name: &'static str, number: u32, field_type: FieldType) -> Self {
        Self {
            name,
            number,
            field_type,
            label: Label::Optional,
            oneof: None,
        }
    }

    pub const fn scalar(name: &'static str, number: u32, kind: ScalarKind) -> Self {
        Self::new(name, number, FieldType::Scalar(kind))
    }

    pub const fn message(name: &'static str, number: u32, message: MessageRef) -> Self {
        Self::new(name, number, FieldType::Message(message))
    }

    pub const fn enumeration(name: &'static str, number: u32, enumeration: EnumRef) -> Self {
        Self::new(name, number, FieldType::Enum(enumeration))
    }

    /// Map field. Maps are declared as repeated fields of a synthetic entry message.
    pub const fn map(name: &'static str, number: u32, entry: MessageRef) -> Self {
        Self::message(name, number, entry).repeated()
    }

    /// Mark as repeated.
    pub const fn repeated(mut self) -> Self {
        self.label = Label::Repeated;
        self
    }

    /// Mark as required (proto2).
    pub const fn required(mut self) -> Self {
        self.label = Label::Required;
        self
    }

    /// Place the field inside the named oneof.
    pub const fn in_oneof(mut self, oneof: &'static str) -> Self {
        self.oneof = Some(oneof);
        self
    }

    pub const fn is_repeated(&self) -> bool {
        matches!(self.label, Label::Repeated)
    }
}

/// Description of a message type.
#[derive(Debug, Clone, Copy)]
pub struct MessageDescriptor {
    /// Fully-qualified name, without a leading dot (`pkg.Outer.Inner`).
    pub full_name: &'static str,
    /// Declared fields in declaration order.
    pub fields: &'static [FieldDescriptor],
    /// Synthetic key/value entry backing a map field.
    pub map_entry: bool,
}

impl MessageDescriptor {
    pub const fn new(full_name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self {
            full_name,
            fields,
            map_entry: false,
        }
    }

    /// Synthetic map entry with `key` (1) and `value` (2) fields.
    pub const fn map_entry(full_name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self {
            full_name,
            fields,
            map_entry: true,
        }
    }

    pub const fn type_name(&self) -> &'static str {
        self.full_name
    }

    pub const fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    /// Look up a declared field by proto name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Single enum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
    pub name: &'static str,
    pub number: i32,
}

impl EnumValue {
    pub const fn new(name: &'static str, number: i32) -> Self {
        Self { name, number }
    }
}

/// Description of an enum type.
#[derive(Debug, Clone, Copy)]
pub struct EnumDescriptor {
    /// Fully-qualified name, without a leading dot.
    pub full_name: &'static str,
    pub values: &'static [EnumValue],
}

impl EnumDescriptor {
    pub const fn new(full_name: &'static str, values: &'static [EnumValue]) -> Self {
        Self { full_name, values }
    }
}

/// Capability implemented by message instances the registry can introspect.
pub trait Message {
    /// Static descriptor of this message's type.
    fn descriptor(&self) -> &'static MessageDescriptor;

    /// Fully-qualified type name.
    fn type_name(&self) -> &'static str {
        self.descriptor().full_name
    }
}
