// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-field metadata served by a [`TypeDescription`](crate::TypeDescription).

use crate::checked::CheckedType;
use crate::descriptor::ScalarKind;
use crate::naming;
use crate::well_known;

/// Underlying kind of a field's element (the value, for maps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Scalar(ScalarKind),
    Message,
    Enum,
}

/// Classification computed by the registry before a field is described.
#[derive(Debug, Clone)]
pub(crate) struct FieldShape {
    pub(crate) element: ElementKind,
    /// Referenced message or enum type (of the value, for maps).
    pub(crate) type_name: Option<String>,
    pub(crate) is_map: bool,
    pub(crate) is_repeated: bool,
    pub(crate) checked_type: CheckedType,
}

/// Immutable description of one message field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescription {
    orig_name: String,
    name: String,
    getter_name: String,
    index: usize,
    number: u32,
    oneof_name: Option<String>,
    element: ElementKind,
    type_name: Option<String>,
    is_map: bool,
    is_repeated: bool,
    checked_type: CheckedType,
}

impl FieldDescription {
    pub(crate) fn new(
        orig_name: &str,
        index: usize,
        number: u32,
        oneof_name: Option<&str>,
        shape: FieldShape,
    ) -> Self {
        debug_assert!(
            !(shape.is_map && shape.is_repeated),
            "map fields are never reported as repeated"
        );
        let name = naming::exported_name(orig_name);
        let getter_name = naming::getter_name(&name);
        Self {
            orig_name: orig_name.to_string(),
            name,
            getter_name,
            index,
            number,
            oneof_name: oneof_name.map(str::to_string),
            element: shape.element,
            type_name: shape.type_name,
            is_map: shape.is_map,
            is_repeated: shape.is_repeated,
            checked_type: shape.checked_type,
        }
    }

    /// Proto-level field name.
    pub fn orig_name(&self) -> &str {
        &self.orig_name
    }

    /// Exported identifier derived from the proto name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn getter_name(&self) -> &str {
        &self.getter_name
    }

    /// Position in declaration order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn oneof_name(&self) -> Option<&str> {
        self.oneof_name.as_deref()
    }

    /// Fully-qualified name of the referenced message or enum type.
    ///
    /// For map fields this is the value's type.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn element_kind(&self) -> ElementKind {
        self.element
    }

    pub fn is_oneof(&self) -> bool {
        self.oneof_name.is_some()
    }

    pub fn is_map(&self) -> bool {
        self.is_map
    }

    pub fn is_message(&self) -> bool {
        self.element == ElementKind::Message
    }

    pub fn is_enum(&self) -> bool {
        self.element == ElementKind::Enum
    }

    pub fn is_repeated(&self) -> bool {
        self.is_repeated
    }

    /// Field typed as one of the scalar wrapper messages.
    pub fn is_wrapper(&self) -> bool {
        self.is_message()
            && self
                .type_name
                .as_deref()
                .is_some_and(well_known::is_wrapper_type)
    }

    /// Semantic type resolved when the field was registered.
    pub fn checked_type(&self) -> &CheckedType {
        &self.checked_type
    }
}
