// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Concurrent registry of message type descriptions.
//!
//! The registry ensures that introspection of a message type happens once per
//! fully-qualified name. Lookups take a shared read lock; registration peeks
//! under the read lock, then takes an upgradable read lock, re-checks, builds
//! the new descriptions in a staging area and upgrades to the write lock only
//! to publish them together. Only one construction is ever in flight, so two
//! callers can never publish diverging descriptions for the same name, while
//! lookups of already-published types proceed during construction.
//!
//! Names are stored without the optional leading `.`.
//!
//! Well-known types (`Any`, `Value`, `ListValue`, `Struct`, the scalar
//! wrappers, `Timestamp` and `Duration`) are seeded at construction.

mod builder;

use crate::config::RegistryConfig;
use crate::descriptor::{EnumDescriptor, Message, MessageDescriptor};
use crate::error::{RegistrationError, RegistryError, Result};
use crate::naming::normalize_type_name;
use crate::type_description::{EnumDescription, EnumValueDescription, TypeDescription};
use crate::well_known;
use builder::{DescriptionBuilder, Staged};
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Lookup and registration statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LookupStats {
    pub hits: u64,
    pub misses: u64,
    /// Number of type descriptions published.
    pub registrations: u64,
    /// Duration of the most recent successful build.
    pub last_build_ns: u64,
}

/// Published descriptions. Entries are only ever added.
#[derive(Debug)]
struct Catalog {
    types: HashMap<Arc<str>, Arc<TypeDescription>>,
    enums: HashMap<Arc<str>, Arc<EnumDescription>>,
    enum_values: HashMap<Arc<str>, EnumValueDescription>,
}

impl Catalog {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            types: HashMap::with_capacity(capacity),
            enums: HashMap::new(),
            enum_values: HashMap::new(),
        }
    }

    /// Publish staged descriptions; returns how many types were added.
    fn publish(&mut self, staged: Staged) -> usize {
        let added = staged.types.len();
        for description in staged.types {
            log::debug!("[TypeRegistry::publish] type {}", description.name());
            let name: Arc<str> = Arc::from(description.name());
            self.types.insert(name, Arc::new(description));
        }
        for description in staged.enums {
            log::debug!("[TypeRegistry::publish] enum {}", description.name());
            for value in description.values() {
                self.enum_values.insert(Arc::from(value.name()), value.clone());
            }
            let name: Arc<str> = Arc::from(description.name());
            self.enums.insert(name, Arc::new(description));
        }
        added
    }
}

/// Registry mapping fully-qualified type names to their descriptions.
///
/// Share it behind an [`Arc`]; all operations take `&self`.
///
/// ```
/// use pbdb::{CheckedType, PrimitiveType, TypeRegistry};
///
/// let registry = TypeRegistry::new();
/// let td = registry.describe_type(".google.protobuf.BoolValue").unwrap();
/// let value = td.field_by_name("value").unwrap();
/// assert_eq!(value.checked_type(), &CheckedType::Primitive(PrimitiveType::Bool));
/// ```
#[derive(Debug)]
pub struct TypeRegistry {
    config: RegistryConfig,
    inner: RwLock<Catalog>,
    stats: RwLock<LookupStats>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Registry seeded with the well-known types.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        let registry = Self {
            inner: RwLock::new(Catalog::with_capacity(config.type_capacity)),
            stats: RwLock::new(LookupStats::default()),
            config,
        };
        registry.seed_well_known();
        registry
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn seed_well_known(&self) {
        let null_value = well_known::null_value();
        if let Err(err) = self.register_enum(null_value) {
            log::error!("[TypeRegistry::seed] {}: {}", null_value.full_name, err);
        }
        for resolve in well_known::SEEDED_MESSAGES {
            let descriptor = resolve();
            if let Err(err) = self.register_descriptor(descriptor) {
                log::error!("[TypeRegistry::seed] {}: {}", descriptor.full_name, err);
            }
        }
    }

    /// Register the type of `message` and every type reachable from it.
    ///
    /// Registering an already-known type returns the existing description.
    pub fn register_message<M: Message + ?Sized>(
        &self,
        message: &M,
    ) -> Result<Arc<TypeDescription>> {
        self.register_descriptor(message.descriptor())
    }

    /// Register a message type from its descriptor.
    pub fn register_descriptor(
        &self,
        descriptor: &'static MessageDescriptor,
    ) -> Result<Arc<TypeDescription>> {
        let name = normalize_type_name(descriptor.full_name);
        if name.is_empty() {
            return Err(RegistrationError::EmptyTypeName.into());
        }

        if let Some(hit) = self.try_peek(name) {
            self.record_hit();
            return Ok(hit);
        }

        // Upgradable guards exclude each other but not readers, so published
        // types stay readable while the new graph is built.
        let catalog = self.inner.upgradable_read();
        if let Some(hit) = catalog.types.get(name) {
            self.record_hit();
            return Ok(Arc::clone(hit));
        }

        let start = Instant::now();
        let staged = {
            let mut builder = DescriptionBuilder::new(&catalog, self.config.strict_names);
            if let Err(err) = builder.ensure_message(descriptor) {
                log::warn!("[TypeRegistry::register] {} rejected: {}", name, err);
                return Err(err.into());
            }
            builder.finish()
        };
        let mut catalog = RwLockUpgradableReadGuard::upgrade(catalog);
        let added = catalog.publish(staged);
        self.record_build(start, added);

        catalog
            .types
            .get(name)
            .map(Arc::clone)
            .ok_or_else(|| RegistryError::not_found(name))
    }

    /// Register an enum type and its values.
    pub fn register_enum(
        &self,
        descriptor: &'static EnumDescriptor,
    ) -> Result<Arc<EnumDescription>> {
        let name = normalize_type_name(descriptor.full_name);
        if let Some(hit) = self.inner.read().enums.get(name) {
            return Ok(Arc::clone(hit));
        }

        let catalog = self.inner.upgradable_read();
        let staged = {
            let mut builder = DescriptionBuilder::new(&catalog, self.config.strict_names);
            if let Err(err) = builder.ensure_enum(descriptor) {
                log::warn!("[TypeRegistry::register_enum] {} rejected: {}", name, err);
                return Err(err.into());
            }
            builder.finish()
        };
        let mut catalog = RwLockUpgradableReadGuard::upgrade(catalog);
        catalog.publish(staged);

        catalog
            .enums
            .get(name)
            .map(Arc::clone)
            .ok_or_else(|| RegistryError::not_found(name))
    }

    /// Description of a built-in or registered type. A leading `.` is accepted.
    ///
    /// Never registers anything.
    pub fn describe_type(&self, name: &str) -> Result<Arc<TypeDescription>> {
        let name = normalize_type_name(name);
        match self.try_peek(name) {
            Some(hit) => {
                self.record_hit();
                Ok(hit)
            }
            None => {
                self.record_miss();
                Err(RegistryError::not_found(name))
            }
        }
    }

    /// Description of a registered enum type.
    pub fn describe_enum(&self, name: &str) -> Result<Arc<EnumDescription>> {
        let name = normalize_type_name(name);
        self.inner
            .read()
            .enums
            .get(name)
            .map(Arc::clone)
            .ok_or_else(|| RegistryError::not_found(name))
    }

    /// Enum value by fully-qualified name (`pkg.Enum.VALUE`).
    pub fn describe_enum_value(&self, name: &str) -> Result<EnumValueDescription> {
        let name = normalize_type_name(name);
        self.inner
            .read()
            .enum_values
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner
            .read()
            .types
            .contains_key(normalize_type_name(name))
    }

    /// Number of described message types.
    pub fn len(&self) -> usize {
        self.inner.read().types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().types.is_empty()
    }

    /// Sorted names of all described message types.
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .inner
            .read()
            .types
            .keys()
            .map(|name| name.to_string())
            .collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn stats(&self) -> LookupStats {
        *self.stats.read()
    }

    fn try_peek(&self, name: &str) -> Option<Arc<TypeDescription>> {
        self.inner.read().types.get(name).map(Arc::clone)
    }

    fn record_hit(&self) {
        let mut stats = self.stats.write();
        stats.hits = stats.hits.saturating_add(1);
    }

    fn record_miss(&self) {
        let mut stats = self.stats.write();
        stats.misses = stats.misses.saturating_add(1);
    }

    fn record_build(&self, start: Instant, added: usize) {
        let mut stats = self.stats.write();
        stats.registrations = stats.registrations.saturating_add(added as u64);
        stats.last_build_ns = start.elapsed().as_nanos() as u64;
    }
}
