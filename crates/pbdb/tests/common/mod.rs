// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shared message fixtures for integration tests.

#![allow(dead_code)]

use pbdb::well_known;
use pbdb::{EnumDescriptor, EnumValue, FieldDescriptor, Message, MessageDescriptor, ScalarKind};

pub const PACKAGE: &str = "google.expr.proto3.test";
pub const TEST_ALL_TYPES: &str = "google.expr.proto3.test.TestAllTypes";
pub const NESTED_TEST_ALL_TYPES: &str = "google.expr.proto3.test.NestedTestAllTypes";
pub const NESTED_MESSAGE: &str = "google.expr.proto3.test.TestAllTypes.NestedMessage";
pub const NESTED_ENUM: &str = "google.expr.proto3.test.TestAllTypes.NestedEnum";
pub const GLOBAL_ENUM: &str = "google.expr.proto3.test.GlobalEnum";

static GLOBAL_ENUM_DESC: EnumDescriptor = EnumDescriptor::new(
    GLOBAL_ENUM,
    &[
        EnumValue::new("GOO", 0),
        EnumValue::new("GAR", 1),
        EnumValue::new("GAZ", 2),
    ],
);

static NESTED_ENUM_DESC: EnumDescriptor = EnumDescriptor::new(
    NESTED_ENUM,
    &[
        EnumValue::new("FOO", 0),
        EnumValue::new("BAR", 1),
        EnumValue::new("BAZ", 2),
    ],
);

static NESTED_MESSAGE_DESC: MessageDescriptor = MessageDescriptor::new(
    NESTED_MESSAGE,
    &[FieldDescriptor::scalar("bb", 1, ScalarKind::Int32)],
);

static MAP_STRING_STRING_ENTRY: MessageDescriptor = MessageDescriptor::map_entry(
    "google.expr.proto3.test.TestAllTypes.MapStringStringEntry",
    &[
        FieldDescriptor::scalar("key", 1, ScalarKind::String),
        FieldDescriptor::scalar("value", 2, ScalarKind::String),
    ],
);

static MAP_INT64_NESTED_TYPE_ENTRY: MessageDescriptor = MessageDescriptor::map_entry(
    "google.expr.proto3.test.TestAllTypes.MapInt64NestedTypeEntry",
    &[
        FieldDescriptor::scalar("key", 1, ScalarKind::Int64),
        FieldDescriptor::message("value", 2, nested_test_all_types),
    ],
);

static TEST_ALL_TYPES_DESC: MessageDescriptor = MessageDescriptor::new(
    TEST_ALL_TYPES,
    &[
        FieldDescriptor::scalar("single_int32", 1, ScalarKind::Int32),
        FieldDescriptor::scalar("single_int64", 2, ScalarKind::Int64),
        FieldDescriptor::scalar("single_uint32", 3, ScalarKind::Uint32),
        FieldDescriptor::scalar("single_uint64", 4, ScalarKind::Uint64),
        FieldDescriptor::scalar("single_sint32", 5, ScalarKind::Sint32),
        FieldDescriptor::scalar("single_sint64", 6, ScalarKind::Sint64),
        FieldDescriptor::scalar("single_fixed32", 7, ScalarKind::Fixed32),
        FieldDescriptor::scalar("single_fixed64", 8, ScalarKind::Fixed64),
        FieldDescriptor::scalar("single_sfixed32", 9, ScalarKind::Sfixed32),
        FieldDescriptor::scalar("single_sfixed64", 10, ScalarKind::Sfixed64),
        FieldDescriptor::scalar("single_float", 11, ScalarKind::Float),
        FieldDescriptor::scalar("single_double", 12, ScalarKind::Double),
        FieldDescriptor::scalar("single_bool", 13, ScalarKind::Bool),
        FieldDescriptor::scalar("single_string", 14, ScalarKind::String),
        FieldDescriptor::scalar("single_bytes", 15, ScalarKind::Bytes),
        FieldDescriptor::message("single_any", 100, well_known::any),
        FieldDescriptor::message("single_duration", 101, well_known::duration),
        FieldDescriptor::message("single_timestamp", 102, well_known::timestamp),
        FieldDescriptor::message("single_struct", 103, well_known::structure),
        FieldDescriptor::message("single_value", 104, well_known::value),
        FieldDescriptor::message("single_int64_wrapper", 105, well_known::int64_value),
        FieldDescriptor::message("single_int32_wrapper", 106, well_known::int32_value),
        FieldDescriptor::message("single_double_wrapper", 107, well_known::double_value),
        FieldDescriptor::message("single_float_wrapper", 108, well_known::float_value),
        FieldDescriptor::message("single_uint64_wrapper", 109, well_known::uint64_value),
        FieldDescriptor::message("single_uint32_wrapper", 110, well_known::uint32_value),
        FieldDescriptor::message("single_string_wrapper", 111, well_known::string_value),
        FieldDescriptor::message("single_bool_wrapper", 112, well_known::bool_value),
        FieldDescriptor::message("single_bytes_wrapper", 113, well_known::bytes_value),
        FieldDescriptor::message("list_value", 114, well_known::list_value),
        FieldDescriptor::enumeration("null_value", 115, well_known::null_value),
        FieldDescriptor::message("single_nested_message", 21, nested_message)
            .in_oneof("nested_type"),
        FieldDescriptor::enumeration("single_nested_enum", 22, nested_enum)
            .in_oneof("nested_type"),
        FieldDescriptor::enumeration("standalone_enum", 23, global_enum),
        FieldDescriptor::scalar("repeated_int32", 31, ScalarKind::Int32).repeated(),
        FieldDescriptor::scalar("repeated_string", 44, ScalarKind::String).repeated(),
        FieldDescriptor::message("repeated_nested_message", 48, nested_message).repeated(),
        FieldDescriptor::enumeration("repeated_nested_enum", 51, nested_enum).repeated(),
        FieldDescriptor::message("repeated_bool_wrapper", 60, well_known::bool_value)
            .repeated(),
        FieldDescriptor::map("map_string_string", 61, map_string_string_entry),
        FieldDescriptor::map("map_int64_nested_type", 62, map_int64_nested_type_entry),
    ],
);

static NESTED_TEST_ALL_TYPES_DESC: MessageDescriptor = MessageDescriptor::new(
    NESTED_TEST_ALL_TYPES,
    &[
        FieldDescriptor::message("child", 1, nested_test_all_types),
        FieldDescriptor::message("payload", 2, test_all_types),
    ],
);

pub fn test_all_types() -> &'static MessageDescriptor {
    &TEST_ALL_TYPES_DESC
}

pub fn nested_test_all_types() -> &'static MessageDescriptor {
    &NESTED_TEST_ALL_TYPES_DESC
}

pub fn nested_message() -> &'static MessageDescriptor {
    &NESTED_MESSAGE_DESC
}

pub fn nested_enum() -> &'static EnumDescriptor {
    &NESTED_ENUM_DESC
}

pub fn global_enum() -> &'static EnumDescriptor {
    &GLOBAL_ENUM_DESC
}

fn map_string_string_entry() -> &'static MessageDescriptor {
    &MAP_STRING_STRING_ENTRY
}

fn map_int64_nested_type_entry() -> &'static MessageDescriptor {
    &MAP_INT64_NESTED_TYPE_ENTRY
}

/// Stand-in for a generated `TestAllTypes` message.
#[derive(Debug, Default)]
pub struct TestAllTypes;

impl Message for TestAllTypes {
    fn descriptor(&self) -> &'static MessageDescriptor {
        test_all_types()
    }
}

/// Stand-in for a generated `NestedTestAllTypes` message.
#[derive(Debug, Default)]
pub struct NestedTestAllTypes;

impl Message for NestedTestAllTypes {
    fn descriptor(&self) -> &'static MessageDescriptor {
        nested_test_all_types()
    }
}

/// Number of declared fields on `TestAllTypes`.
pub fn test_all_types_field_count() -> usize {
    TEST_ALL_TYPES_DESC.fields.len()
}
