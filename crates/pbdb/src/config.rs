// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registry configuration.
//!
//! Static constants for the well-known package plus [`RegistryConfig`] for
//! per-registry runtime knobs.
//!
//! ```
//! use pbdb::{RegistryConfig, TypeRegistry};
//!
//! let registry = TypeRegistry::with_config(
//!     RegistryConfig::default()
//!         .with_type_capacity(256)
//!         .strict_names(false),
//! );
//! assert!(registry.contains(".google.protobuf.Any"));
//! ```

/// Package of the library-defined well-known types.
pub const WELL_KNOWN_PACKAGE: &str = "google.protobuf";

/// Initial capacity of the type map.
pub const DEFAULT_TYPE_CAPACITY: usize = 64;

/// Runtime configuration for a [`TypeRegistry`](crate::TypeRegistry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Capacity hint for the type map. The map still grows past it.
    pub type_capacity: usize,
    /// Reject field names that are not ASCII identifiers.
    pub strict_names: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            type_capacity: DEFAULT_TYPE_CAPACITY,
            strict_names: true,
        }
    }
}

impl RegistryConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type_capacity(mut self, capacity: usize) -> Self {
        self.type_capacity = capacity;
        self
    }

    #[must_use]
    pub fn strict_names(mut self, strict: bool) -> Self {
        self.strict_names = strict;
        self
    }
}
