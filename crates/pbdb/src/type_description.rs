// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-type metadata served by the registry.

use crate::error::RegistrationError;
use crate::field_description::FieldDescription;
use std::collections::HashMap;

/// Immutable description of one message type.
///
/// Fields keep declaration order. Lookup by name checks the proto-level name
/// first and falls back to the exported identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescription {
    type_name: String,
    fields: Vec<FieldDescription>,
    by_name: HashMap<String, usize>,
    by_exported: HashMap<String, usize>,
    by_number: HashMap<u32, usize>,
}

impl TypeDescription {
    /// Index the given fields.
    ///
    /// Fails when two fields share a proto name, an exported identifier or a
    /// field number.
    pub(crate) fn new(
        type_name: impl Into<String>,
        fields: Vec<FieldDescription>,
    ) -> Result<Self, RegistrationError> {
        let type_name = type_name.into();
        let mut by_name = HashMap::with_capacity(fields.len());
        let mut by_exported = HashMap::with_capacity(fields.len());
        let mut by_number = HashMap::with_capacity(fields.len());

        for (idx, field) in fields.iter().enumerate() {
            if by_name.insert(field.orig_name().to_string(), idx).is_some() {
                return Err(RegistrationError::DuplicateFieldName {
                    type_name,
                    field: field.orig_name().to_string(),
                });
            }
            if by_exported.insert(field.name().to_string(), idx).is_some() {
                return Err(RegistrationError::DuplicateFieldName {
                    type_name,
                    field: field.name().to_string(),
                });
            }
            if by_number.insert(field.number(), idx).is_some() {
                return Err(RegistrationError::DuplicateFieldNumber {
                    type_name,
                    number: field.number(),
                });
            }
        }

        Ok(Self {
            type_name,
            fields,
            by_name,
            by_exported,
            by_number,
        })
    }

    /// Fully-qualified type name.
    pub fn name(&self) -> &str {
        &self.type_name
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> std::slice::Iter<'_, FieldDescription> {
        self.fields.iter()
    }

    /// Look up a field by proto name, then by exported identifier.
    pub fn field_by_name(&self, name: &str) -> Option<&FieldDescription> {
        self.by_name
            .get(name)
            .or_else(|| self.by_exported.get(name))
            .map(|&idx| &self.fields[idx])
    }

    pub fn field_by_index(&self, index: usize) -> Option<&FieldDescription> {
        self.fields.get(index)
    }

    pub fn field_by_number(&self, number: u32) -> Option<&FieldDescription> {
        self.by_number.get(&number).map(|&idx| &self.fields[idx])
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field_by_name(name).is_some()
    }
}

/// A single enum value, addressable by its fully-qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumValueDescription {
    name: String,
    enum_name: String,
    value: i32,
}

impl EnumValueDescription {
    pub(crate) fn new(enum_name: &str, value_name: &str, value: i32) -> Self {
        Self {
            name: format!("{}.{}", enum_name, value_name),
            enum_name: enum_name.to_string(),
            value,
        }
    }

    /// Fully-qualified value name (`pkg.Enum.VALUE`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn enum_name(&self) -> &str {
        &self.enum_name
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

/// Immutable description of one enum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescription {
    name: String,
    values: Vec<EnumValueDescription>,
}

impl EnumDescription {
    pub(crate) fn new(name: impl Into<String>, values: Vec<EnumValueDescription>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values in declaration order.
    pub fn values(&self) -> std::slice::Iter<'_, EnumValueDescription> {
        self.values.iter()
    }

    /// Find a value by its short name.
    pub fn value_by_name(&self, short_name: &str) -> Option<&EnumValueDescription> {
        self.values
            .iter()
            .find(|v| v.name.rsplit('.').next() == Some(short_name))
    }

    /// First value declared with the given number.
    pub fn value_by_number(&self, number: i32) -> Option<&EnumValueDescription> {
        self.values.iter().find(|v| v.value == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checked::{CheckedType, PrimitiveType};
    use crate::descriptor::ScalarKind;
    use crate::field_description::{ElementKind, FieldShape};

    fn scalar_field(name: &str, index: usize, number: u32) -> FieldDescription {
        FieldDescription::new(
            name,
            index,
            number,
            None,
            FieldShape {
                element: ElementKind::Scalar(ScalarKind::Int64),
                type_name: None,
                is_map: false,
                is_repeated: false,
                checked_type: CheckedType::Primitive(PrimitiveType::Int64),
            },
        )
    }

    #[test]
    fn test_lookup_by_both_names() {
        let td = TypeDescription::new(
            "a.Counter",
            vec![scalar_field("total_count", 0, 1), scalar_field("delta", 1, 2)],
        )
        .expect("valid type");

        assert_eq!(td.field_count(), 2);
        assert_eq!(td.field_by_name("total_count").map(|f| f.index()), Some(0));
        assert_eq!(td.field_by_name("TotalCount").map(|f| f.index()), Some(0));
        assert!(td.field_by_name("totalcount").is_none());
        assert!(td.field_by_name("Total_Count").is_none());
        assert_eq!(td.field_by_number(2).map(|f| f.orig_name()), Some("delta"));
        assert_eq!(
            td.fields().map(|f| f.orig_name()).collect::<Vec<_>>(),
            vec!["total_count", "delta"]
        );
    }

    #[test]
    fn test_fields_iterator_restarts() {
        let td = TypeDescription::new("a.One", vec![scalar_field("x", 0, 1)]).expect("valid type");
        assert_eq!(td.fields().count(), 1);
        assert_eq!(td.fields().count(), 1);
    }

    #[test]
    fn test_duplicate_exported_name_rejected() {
        let err = TypeDescription::new(
            "a.Clash",
            vec![scalar_field("foo_bar", 0, 1), scalar_field("foo__bar", 1, 2)],
        )
        .expect_err("exported names collide");
        assert_eq!(
            err,
            RegistrationError::DuplicateFieldName {
                type_name: "a.Clash".into(),
                field: "FooBar".into(),
            }
        );
    }

    #[test]
    fn test_duplicate_number_rejected() {
        let err = TypeDescription::new("a.Num", vec![scalar_field("a", 0, 7), scalar_field("b", 1, 7)])
            .expect_err("numbers collide");
        assert!(matches!(
            err,
            RegistrationError::DuplicateFieldNumber { number: 7, .. }
        ));
    }

    #[test]
    fn test_enum_value_lookup() {
        let desc = EnumDescription::new(
            "a.Color",
            vec![
                EnumValueDescription::new("a.Color", "RED", 0),
                EnumValueDescription::new("a.Color", "GREEN", 1),
            ],
        );
        assert_eq!(desc.value_by_name("GREEN").map(|v| v.value()), Some(1));
        assert_eq!(desc.value_by_number(0).map(|v| v.name()), Some("a.Color.RED"));
        assert!(desc.value_by_name("BLUE").is_none());
    }
}
