// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # pbdb - message type-description registry
//!
//! Runtime metadata about protocol-buffer-style message types for consumers
//! such as expression type checkers. The registry reflects over
//! already-materialized descriptors once, caches the result per
//! fully-qualified type name and answers field-level questions: naming,
//! shape (oneof, map, repeated, message, enum) and the semantic
//! [`CheckedType`] of each field.
//!
//! ## Quick Start
//!
//! ```rust
//! use pbdb::{
//!     CheckedType, FieldDescriptor, Message, MessageDescriptor, ScalarKind, TypeRegistry,
//! };
//!
//! static TEAM: MessageDescriptor = MessageDescriptor::new(
//!     "acme.Team",
//!     &[
//!         FieldDescriptor::scalar("team_name", 1, ScalarKind::String),
//!         FieldDescriptor::message("parent_team", 2, team),
//!         FieldDescriptor::message("active", 3, pbdb::well_known::bool_value),
//!     ],
//! );
//!
//! fn team() -> &'static MessageDescriptor {
//!     &TEAM
//! }
//!
//! struct Team;
//!
//! impl Message for Team {
//!     fn descriptor(&self) -> &'static MessageDescriptor {
//!         &TEAM
//!     }
//! }
//!
//! let registry = TypeRegistry::new();
//! registry.register_message(&Team).unwrap();
//!
//! let td = registry.describe_type("acme.Team").unwrap();
//! assert_eq!(td.field_count(), 3);
//!
//! let parent = td.field_by_name("ParentTeam").unwrap();
//! assert_eq!(parent.getter_name(), "GetParentTeam");
//! assert_eq!(parent.checked_type(), &CheckedType::message("acme.Team"));
//!
//! let active = td.field_by_name("active").unwrap();
//! assert!(active.checked_type().is_nullable());
//! ```
//!
//! ## Layout
//!
//! ```text
//! TypeRegistry ──> TypeDescription ──> FieldDescription ──> CheckedType
//!      │
//!      └── builder: staged, cycle-safe construction from MessageDescriptor
//! ```

pub mod checked;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod field_description;
pub mod naming;
pub mod registry;
pub mod type_description;
pub mod well_known;

pub use checked::{CheckedType, PrimitiveType, WellKnownType};
pub use config::RegistryConfig;
pub use descriptor::{
    EnumDescriptor, EnumRef, EnumValue, FieldDescriptor, FieldType, Label, Message,
    MessageDescriptor, MessageRef, ScalarKind,
};
pub use error::{RegistrationError, RegistryError, Result};
pub use field_description::{ElementKind, FieldDescription};
pub use registry::{LookupStats, TypeRegistry};
pub use type_description::{EnumDescription, EnumValueDescription, TypeDescription};
