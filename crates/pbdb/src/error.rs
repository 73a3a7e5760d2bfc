// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for type registration and lookup.

use std::fmt;

/// Reasons a message type cannot be introspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// Descriptor carries an empty type name.
    EmptyTypeName,
    /// Field name is not an ASCII identifier.
    InvalidFieldName { type_name: String, field: String },
    /// Two fields share a proto name or exported identifier.
    DuplicateFieldName { type_name: String, field: String },
    /// Two fields share a field number.
    DuplicateFieldNumber { type_name: String, number: u32 },
    /// Map entry without exactly a `key` and a `value` field.
    MalformedMapEntry { type_name: String },
    /// Map key that is not an integral, bool or string scalar.
    UnsupportedMapKey { type_name: String, field: String },
    /// Enum descriptor with an empty name or duplicate value names.
    InvalidEnum { enum_name: String },
    /// Failure while resolving the type referenced by a field.
    Field {
        type_name: String,
        field: String,
        source: Box<RegistrationError>,
    },
}

impl RegistrationError {
    /// Innermost cause after unwrapping field propagation.
    pub fn root_cause(&self) -> &RegistrationError {
        let mut current = self;
        while let Self::Field { source, .. } = current {
            current = source;
        }
        current
    }
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTypeName => write!(f, "message descriptor has an empty type name"),
            Self::InvalidFieldName { type_name, field } => {
                write!(f, "invalid field name '{}' in {}", field, type_name)
            }
            Self::DuplicateFieldName { type_name, field } => {
                write!(f, "duplicate field name '{}' in {}", field, type_name)
            }
            Self::DuplicateFieldNumber { type_name, number } => {
                write!(f, "duplicate field number {} in {}", number, type_name)
            }
            Self::MalformedMapEntry { type_name } => {
                write!(f, "malformed map entry {}", type_name)
            }
            Self::UnsupportedMapKey { type_name, field } => {
                write!(f, "unsupported map key type for {}.{}", type_name, field)
            }
            Self::InvalidEnum { enum_name } => write!(f, "invalid enum descriptor '{}'", enum_name),
            Self::Field {
                type_name,
                field,
                source,
            } => write!(f, "{}.{}: {}", type_name, field, source),
        }
    }
}

impl std::error::Error for RegistrationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Field { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Registry operation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Name is neither built in nor registered.
    NotFound { name: String },
    /// Registration of a message type failed.
    Registration(RegistrationError),
}

impl RegistryError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "Type not found: {}", name),
            Self::Registration(err) => write!(f, "Registration failed: {}", err),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Registration(err) => Some(err),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<RegistrationError> for RegistryError {
    fn from(value: RegistrationError) -> Self {
        Self::Registration(value)
    }
}

/// Result alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_root_cause_unwraps_field_chain() {
        let err = RegistrationError::Field {
            type_name: "a.Outer".into(),
            field: "inner".into(),
            source: Box::new(RegistrationError::Field {
                type_name: "a.Inner".into(),
                field: "bad".into(),
                source: Box::new(RegistrationError::EmptyTypeName),
            }),
        };
        assert_eq!(err.root_cause(), &RegistrationError::EmptyTypeName);
        assert_eq!(
            err.to_string(),
            "a.Outer.inner: a.Inner.bad: message descriptor has an empty type name"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_registry_error_display() {
        let err = RegistryError::not_found("a.Missing");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Type not found: a.Missing");

        let err: RegistryError = RegistrationError::EmptyTypeName.into();
        assert!(!err.is_not_found());
        assert!(err.source().is_some());
    }
}
