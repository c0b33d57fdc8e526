// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog manager - one entry point over many backends
//!
//! The manager keeps one `SchemaOperations` per named catalog, each bound to
//! its own connection provider and dialect. Callers address catalogs by name
//! and never learn which backend serves them.

use super::config::CatalogConfig;
use super::error::{CatalogError, CatalogResult};
use super::operations::{SchemaOperation, SchemaResponse};
use super::schema_ops::SchemaOperations;
use crate::connection::ConnectionProvider;
use crate::dialect::DialectKind;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of named relational catalogs
#[derive(Debug, Default)]
pub struct CatalogManager {
    catalogs: RwLock<HashMap<String, Arc<SchemaOperations>>>,
}

impl CatalogManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a catalog, replacing any catalog with the same name
    pub fn register(&self, name: &str, operations: SchemaOperations) {
        let dialect = operations.dialect().kind();
        let previous = self
            .catalogs
            .write()
            .insert(name.to_string(), Arc::new(operations));
        if previous.is_some() {
            log::warn!("Replaced catalog '{}' ({})", name, dialect);
        } else {
            log::info!("Registered catalog '{}' ({})", name, dialect);
        }
    }

    /// Build and register a catalog from its configuration
    pub fn register_config(
        &self,
        name: &str,
        config: &CatalogConfig,
        provider: Arc<dyn ConnectionProvider>,
    ) -> CatalogResult<()> {
        let operations = SchemaOperations::from_config(config, provider)?;
        self.register(name, operations);
        Ok(())
    }

    /// Remove a catalog; `false` if it was not registered
    pub fn deregister(&self, name: &str) -> bool {
        let removed = self.catalogs.write().remove(name).is_some();
        if removed {
            log::info!("Deregistered catalog '{}'", name);
        }
        removed
    }

    /// Get a catalog by name
    pub fn get(&self, name: &str) -> CatalogResult<Arc<SchemaOperations>> {
        self.catalogs
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::CatalogNotFound(name.to_string()))
    }

    /// Registered catalog names, sorted
    pub fn list_catalogs(&self) -> Vec<String> {
        let mut names: Vec<String> = self.catalogs.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn has_catalog(&self, name: &str) -> bool {
        self.catalogs.read().contains_key(name)
    }

    pub fn catalog_count(&self) -> usize {
        self.catalogs.read().len()
    }

    /// Dialect serving a catalog
    pub fn dialect_of(&self, name: &str) -> CatalogResult<DialectKind> {
        Ok(self.get(name)?.dialect().kind())
    }

    /// Execute a schema request on a named catalog
    ///
    /// The registry lock is released before the backend is contacted.
    pub fn execute(&self, catalog: &str, op: SchemaOperation) -> CatalogResult<SchemaResponse> {
        let operations = self.get(catalog)?;
        log::debug!("Executing {} on catalog '{}'", op.name(), catalog);
        operations.execute(op)
    }
}
