// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Built-in descriptors for the `google.protobuf` well-known types.
//!
//! The registry seeds itself from these descriptors so lookups succeed even
//! when the host's message runtime never linked the corresponding types.
//! Field references to them are normalized away from message plumbing:
//! wrappers become nullable primitives and the JSON value types become `dyn`
//! shapes.

use crate::checked::{CheckedType, PrimitiveType, WellKnownType};
use crate::config::WELL_KNOWN_PACKAGE;
use crate::descriptor::{
    EnumDescriptor, EnumValue, FieldDescriptor, MessageDescriptor, MessageRef, ScalarKind,
};

pub const ANY: &str = "google.protobuf.Any";
pub const VALUE: &str = "google.protobuf.Value";
pub const LIST_VALUE: &str = "google.protobuf.ListValue";
pub const STRUCT: &str = "google.protobuf.Struct";
pub const NULL_VALUE: &str = "google.protobuf.NullValue";
pub const TIMESTAMP: &str = "google.protobuf.Timestamp";
pub const DURATION: &str = "google.protobuf.Duration";

pub const BOOL_VALUE: &str = "google.protobuf.BoolValue";
pub const BYTES_VALUE: &str = "google.protobuf.BytesValue";
pub const DOUBLE_VALUE: &str = "google.protobuf.DoubleValue";
pub const FLOAT_VALUE: &str = "google.protobuf.FloatValue";
pub const INT32_VALUE: &str = "google.protobuf.Int32Value";
pub const INT64_VALUE: &str = "google.protobuf.Int64Value";
pub const STRING_VALUE: &str = "google.protobuf.StringValue";
pub const UINT32_VALUE: &str = "google.protobuf.UInt32Value";
pub const UINT64_VALUE: &str = "google.protobuf.UInt64Value";

static ANY_DESC: MessageDescriptor = MessageDescriptor::new(
    ANY,
    &[
        FieldDescriptor::scalar("type_url", 1, ScalarKind::String),
        FieldDescriptor::scalar("value", 2, ScalarKind::Bytes),
    ],
);

static NULL_VALUE_DESC: EnumDescriptor =
    EnumDescriptor::new(NULL_VALUE, &[EnumValue::new("NULL_VALUE", 0)]);

static VALUE_DESC: MessageDescriptor = MessageDescriptor::new(
    VALUE,
    &[
        FieldDescriptor::enumeration("null_value", 1, null_value).in_oneof("kind"),
        FieldDescriptor::scalar("number_value", 2, ScalarKind::Double).in_oneof("kind"),
        FieldDescriptor::scalar("string_value", 3, ScalarKind::String).in_oneof("kind"),
        FieldDescriptor::scalar("bool_value", 4, ScalarKind::Bool).in_oneof("kind"),
        FieldDescriptor::message("struct_value", 5, structure).in_oneof("kind"),
        FieldDescriptor::message("list_value", 6, list_value).in_oneof("kind"),
    ],
);

static LIST_VALUE_DESC: MessageDescriptor = MessageDescriptor::new(
    LIST_VALUE,
    &[FieldDescriptor::message("values", 1, value).repeated()],
);

static STRUCT_FIELDS_ENTRY_DESC: MessageDescriptor = MessageDescriptor::map_entry(
    "google.protobuf.Struct.FieldsEntry",
    &[
        FieldDescriptor::scalar("key", 1, ScalarKind::String),
        FieldDescriptor::message("value", 2, value),
    ],
);

static STRUCT_DESC: MessageDescriptor = MessageDescriptor::new(
    STRUCT,
    &[FieldDescriptor::map("fields", 1, struct_fields_entry)],
);

static TIMESTAMP_DESC: MessageDescriptor = MessageDescriptor::new(
    TIMESTAMP,
    &[
        FieldDescriptor::scalar("seconds", 1, ScalarKind::Int64),
        FieldDescriptor::scalar("nanos", 2, ScalarKind::Int32),
    ],
);

static DURATION_DESC: MessageDescriptor = MessageDescriptor::new(
    DURATION,
    &[
        FieldDescriptor::scalar("seconds", 1, ScalarKind::Int64),
        FieldDescriptor::scalar("nanos", 2, ScalarKind::Int32),
    ],
);

macro_rules! wrapper_descriptor {
    ($static_name:ident, $fn_name:ident, $type_name:expr, $kind:expr) => {
        static $static_name: MessageDescriptor =
            MessageDescriptor::new($type_name, &[FieldDescriptor::scalar("value", 1, $kind)]);

        pub fn $fn_name() -> &'static MessageDescriptor {
            &$static_name
        }
    };
}

wrapper_descriptor!(BOOL_VALUE_DESC, bool_value, BOOL_VALUE, ScalarKind::Bool);
wrapper_descriptor!(BYTES_VALUE_DESC, bytes_value, BYTES_VALUE, ScalarKind::Bytes);
wrapper_descriptor!(DOUBLE_VALUE_DESC, double_value, DOUBLE_VALUE, ScalarKind::Double);
wrapper_descriptor!(FLOAT_VALUE_DESC, float_value, FLOAT_VALUE, ScalarKind::Float);
wrapper_descriptor!(INT32_VALUE_DESC, int32_value, INT32_VALUE, ScalarKind::Int32);
wrapper_descriptor!(INT64_VALUE_DESC, int64_value, INT64_VALUE, ScalarKind::Int64);
wrapper_descriptor!(STRING_VALUE_DESC, string_value, STRING_VALUE, ScalarKind::String);
wrapper_descriptor!(UINT32_VALUE_DESC, uint32_value, UINT32_VALUE, ScalarKind::Uint32);
wrapper_descriptor!(UINT64_VALUE_DESC, uint64_value, UINT64_VALUE, ScalarKind::Uint64);

pub fn any() -> &'static MessageDescriptor {
    &ANY_DESC
}

pub fn value() -> &'static MessageDescriptor {
    &VALUE_DESC
}

pub fn list_value() -> &'static MessageDescriptor {
    &LIST_VALUE_DESC
}

pub fn structure() -> &'static MessageDescriptor {
    &STRUCT_DESC
}

fn struct_fields_entry() -> &'static MessageDescriptor {
    &STRUCT_FIELDS_ENTRY_DESC
}

pub fn timestamp() -> &'static MessageDescriptor {
    &TIMESTAMP_DESC
}

pub fn duration() -> &'static MessageDescriptor {
    &DURATION_DESC
}

pub fn null_value() -> &'static EnumDescriptor {
    &NULL_VALUE_DESC
}

/// Message types seeded into every registry.
pub const SEEDED_MESSAGES: &[MessageRef] = &[
    any,
    value,
    list_value,
    structure,
    timestamp,
    duration,
    bool_value,
    bytes_value,
    double_value,
    float_value,
    int32_value,
    int64_value,
    string_value,
    uint32_value,
    uint64_value,
];

/// Primitive carried by a wrapper type.
pub fn wrapped_primitive(type_name: &str) -> Option<PrimitiveType> {
    match type_name {
        BOOL_VALUE => Some(PrimitiveType::Bool),
        BYTES_VALUE => Some(PrimitiveType::Bytes),
        DOUBLE_VALUE | FLOAT_VALUE => Some(PrimitiveType::Double),
        INT32_VALUE | INT64_VALUE => Some(PrimitiveType::Int64),
        STRING_VALUE => Some(PrimitiveType::String),
        UINT32_VALUE | UINT64_VALUE => Some(PrimitiveType::Uint64),
        _ => None,
    }
}

pub fn is_wrapper_type(type_name: &str) -> bool {
    wrapped_primitive(type_name).is_some()
}

/// Normalized checked type for a field referencing a well-known message.
pub fn checked_message_type(type_name: &str) -> Option<CheckedType> {
    if !is_well_known_package(type_name) {
        return None;
    }
    if let Some(prim) = wrapped_primitive(type_name) {
        return Some(CheckedType::Wrapper(prim));
    }
    match type_name {
        ANY => Some(CheckedType::WellKnown(WellKnownType::Any)),
        TIMESTAMP => Some(CheckedType::WellKnown(WellKnownType::Timestamp)),
        DURATION => Some(CheckedType::WellKnown(WellKnownType::Duration)),
        VALUE => Some(CheckedType::Dyn),
        LIST_VALUE => Some(CheckedType::list(CheckedType::Dyn)),
        STRUCT => Some(CheckedType::map(
            CheckedType::Primitive(PrimitiveType::String),
            CheckedType::Dyn,
        )),
        _ => None,
    }
}

/// Whether `type_name` is declared directly in the well-known package.
pub fn is_well_known_package(type_name: &str) -> bool {
    type_name
        .strip_prefix(WELL_KNOWN_PACKAGE)
        .and_then(|rest| rest.strip_prefix('.'))
        .is_some_and(|short| !short.is_empty() && !short.contains('.'))
}

/// Normalized checked type for a field referencing a well-known enum.
pub fn checked_enum_type(type_name: &str) -> Option<CheckedType> {
    (type_name == NULL_VALUE).then_some(CheckedType::Null)
}
