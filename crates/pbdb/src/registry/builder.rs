// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Staged construction of type descriptions.
//!
//! The builder walks a message descriptor and every type reachable from its
//! fields. New descriptions are staged locally and only published by the
//! registry once the whole graph resolved, so a failure anywhere leaves the
//! registry untouched. Types whose construction is still on the stack are
//! referenced by name and never re-entered, which keeps recursive graphs
//! finite.

use super::Catalog;
use crate::checked::{CheckedType, PrimitiveType};
use crate::descriptor::{EnumDescriptor, FieldDescriptor, FieldType, MessageDescriptor, ScalarKind};
use crate::error::RegistrationError;
use crate::field_description::{ElementKind, FieldDescription, FieldShape};
use crate::naming;
use crate::type_description::{EnumDescription, EnumValueDescription, TypeDescription};
use crate::well_known;
use std::collections::HashMap;

/// Descriptions built by one registration call, not yet published.
#[derive(Debug, Default)]
pub(super) struct Staged {
    pub(super) types: Vec<TypeDescription>,
    pub(super) enums: Vec<EnumDescription>,
}

pub(super) struct DescriptionBuilder<'c> {
    catalog: &'c Catalog,
    strict_names: bool,
    stack: Vec<&'static str>,
    staged_types: HashMap<&'static str, TypeDescription>,
    staged_enums: HashMap<&'static str, EnumDescription>,
    /// Publication order; dependencies land before their dependents.
    order: Vec<&'static str>,
    enum_order: Vec<&'static str>,
}

/// Resolved element of a singular, repeated or map-valued field.
struct Element {
    kind: ElementKind,
    type_name: Option<&'static str>,
    checked: CheckedType,
}

impl<'c> DescriptionBuilder<'c> {
    pub(super) fn new(catalog: &'c Catalog, strict_names: bool) -> Self {
        Self {
            catalog,
            strict_names,
            stack: Vec::new(),
            staged_types: HashMap::new(),
            staged_enums: HashMap::new(),
            order: Vec::new(),
            enum_order: Vec::new(),
        }
    }

    pub(super) fn finish(mut self) -> Staged {
        let types = self
            .order
            .iter()
            .filter_map(|name| self.staged_types.remove(name))
            .collect();
        let enums = self
            .enum_order
            .iter()
            .filter_map(|name| self.staged_enums.remove(name))
            .collect();
        Staged { types, enums }
    }

    /// Ensure `descriptor` and everything it references is described.
    pub(super) fn ensure_message(
        &mut self,
        descriptor: &'static MessageDescriptor,
    ) -> Result<(), RegistrationError> {
        let name = naming::normalize_type_name(descriptor.full_name);
        if name.is_empty() {
            return Err(RegistrationError::EmptyTypeName);
        }
        // Entries only exist as the element of a map field.
        if descriptor.map_entry {
            return Err(RegistrationError::MalformedMapEntry {
                type_name: name.to_string(),
            });
        }
        if self.stack.contains(&name) {
            log::trace!("[DescriptionBuilder] {} in progress, referencing by name", name);
            return Ok(());
        }
        if self.catalog.types.contains_key(name) || self.staged_types.contains_key(name) {
            return Ok(());
        }

        self.stack.push(name);
        let mut fields = Vec::with_capacity(descriptor.fields.len());
        for (index, field) in descriptor.fields.iter().enumerate() {
            fields.push(self.build_field(name, index, field)?);
        }
        self.stack.pop();

        let description = TypeDescription::new(name, fields)?;
        self.staged_types.insert(name, description);
        self.order.push(name);
        Ok(())
    }

    /// Ensure `descriptor` and its values are described.
    pub(super) fn ensure_enum(
        &mut self,
        descriptor: &'static EnumDescriptor,
    ) -> Result<(), RegistrationError> {
        let name = naming::normalize_type_name(descriptor.full_name);
        if self.catalog.enums.contains_key(name) || self.staged_enums.contains_key(name) {
            return Ok(());
        }
        let invalid = || RegistrationError::InvalidEnum {
            enum_name: name.to_string(),
        };
        if name.is_empty() {
            return Err(invalid());
        }

        let mut values: Vec<EnumValueDescription> = Vec::with_capacity(descriptor.values.len());
        for value in descriptor.values {
            if self.strict_names && !naming::is_ascii_identifier(value.name) {
                return Err(invalid());
            }
            let described = EnumValueDescription::new(name, value.name, value.number);
            if values.iter().any(|v| v.name() == described.name()) {
                return Err(invalid());
            }
            values.push(described);
        }

        self.staged_enums.insert(name, EnumDescription::new(name, values));
        self.enum_order.push(name);
        Ok(())
    }

    fn build_field(
        &mut self,
        owner: &'static str,
        index: usize,
        field: &'static FieldDescriptor,
    ) -> Result<FieldDescription, RegistrationError> {
        if self.strict_names && !naming::is_ascii_identifier(field.name) {
            return Err(RegistrationError::InvalidFieldName {
                type_name: owner.to_string(),
                field: field.name.to_string(),
            });
        }

        let shape = match field.field_type {
            FieldType::Message(resolve) if resolve().map_entry => {
                if !field.is_repeated() {
                    return Err(RegistrationError::MalformedMapEntry {
                        type_name: naming::normalize_type_name(resolve().full_name).to_string(),
                    });
                }
                self.map_shape(owner, field, resolve())?
            }
            field_type => {
                let element = self.resolve_element(owner, field.name, field_type)?;
                let checked = if field.is_repeated() {
                    CheckedType::list(element.checked)
                } else {
                    element.checked
                };
                FieldShape {
                    element: element.kind,
                    type_name: element.type_name.map(str::to_string),
                    is_map: false,
                    is_repeated: field.is_repeated(),
                    checked_type: checked,
                }
            }
        };

        Ok(FieldDescription::new(
            field.name,
            index,
            field.number,
            field.oneof,
            shape,
        ))
    }

    /// Fold a repeated synthetic entry into a map shape.
    fn map_shape(
        &mut self,
        owner: &'static str,
        field: &'static FieldDescriptor,
        entry: &'static MessageDescriptor,
    ) -> Result<FieldShape, RegistrationError> {
        let malformed = || RegistrationError::MalformedMapEntry {
            type_name: naming::normalize_type_name(entry.full_name).to_string(),
        };
        let (key, value) = match entry.fields {
            [key, value] if key.name == "key" && value.name == "value" => (key, value),
            _ => return Err(malformed()),
        };
        if key.is_repeated() || value.is_repeated() {
            return Err(malformed());
        }

        let key_checked = match key.field_type {
            FieldType::Scalar(kind) if kind.is_valid_map_key() => scalar_checked(kind),
            _ => {
                return Err(RegistrationError::UnsupportedMapKey {
                    type_name: owner.to_string(),
                    field: field.name.to_string(),
                })
            }
        };
        let value = self.resolve_element(owner, field.name, value.field_type)?;

        Ok(FieldShape {
            element: value.kind,
            type_name: value.type_name.map(str::to_string),
            is_map: true,
            is_repeated: false,
            checked_type: CheckedType::map(key_checked, value.checked),
        })
    }

    fn resolve_element(
        &mut self,
        owner: &'static str,
        field_name: &'static str,
        field_type: FieldType,
    ) -> Result<Element, RegistrationError> {
        let in_field = |source: RegistrationError| RegistrationError::Field {
            type_name: owner.to_string(),
            field: field_name.to_string(),
            source: Box::new(source),
        };

        match field_type {
            FieldType::Scalar(kind) => Ok(Element {
                kind: ElementKind::Scalar(kind),
                type_name: None,
                checked: scalar_checked(kind),
            }),
            FieldType::Message(resolve) => {
                let target = resolve();
                self.ensure_message(target).map_err(in_field)?;
                let name = naming::normalize_type_name(target.full_name);
                Ok(Element {
                    kind: ElementKind::Message,
                    type_name: Some(name),
                    checked: well_known::checked_message_type(name)
                        .unwrap_or_else(|| CheckedType::message(name)),
                })
            }
            FieldType::Enum(resolve) => {
                let target = resolve();
                self.ensure_enum(target).map_err(in_field)?;
                let name = naming::normalize_type_name(target.full_name);
                Ok(Element {
                    kind: ElementKind::Enum,
                    type_name: Some(name),
                    checked: well_known::checked_enum_type(name)
                        .unwrap_or(CheckedType::Primitive(PrimitiveType::Int64)),
                })
            }
        }
    }
}

/// Semantic type of a scalar wire kind.
fn scalar_checked(kind: ScalarKind) -> CheckedType {
    let prim = match kind {
        ScalarKind::Bool => PrimitiveType::Bool,
        ScalarKind::Int32
        | ScalarKind::Int64
        | ScalarKind::Sint32
        | ScalarKind::Sint64
        | ScalarKind::Sfixed32
        | ScalarKind::Sfixed64 => PrimitiveType::Int64,
        ScalarKind::Uint32 | ScalarKind::Uint64 | ScalarKind::Fixed32 | ScalarKind::Fixed64 => {
            PrimitiveType::Uint64
        }
        ScalarKind::Float | ScalarKind::Double => PrimitiveType::Double,
        ScalarKind::String => PrimitiveType::String,
        ScalarKind::Bytes => PrimitiveType::Bytes,
    };
    CheckedType::Primitive(prim)
}
