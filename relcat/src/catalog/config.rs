// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog configuration

use super::error::{CatalogError, CatalogResult};
use crate::dialect::DialectKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const PROP_DIALECT: &str = "dialect";
pub const PROP_JDBC_URL: &str = "jdbc-url";
pub const PROP_JDBC_DATABASE: &str = "jdbc-database";

/// Configuration of one relational catalog
///
/// Credentials and pool settings are consumed by the connection provider and
/// are not part of this struct.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Backend dialect
    pub dialect: DialectKind,

    /// JDBC URL of the backend, informational and used for dialect inference
    pub jdbc_url: Option<String>,

    /// Database holding the schemas (required for PostgreSQL)
    pub jdbc_database: Option<String>,

    /// Log a warning whenever an error is classified from message text only
    pub warn_on_heuristic_translation: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dialect: DialectKind::default(),
            jdbc_url: None,
            jdbc_database: None,
            warn_on_heuristic_translation: true,
        }
    }
}

impl CatalogConfig {
    pub fn for_dialect(dialect: DialectKind) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    /// PostgreSQL catalog scoped to one database
    pub fn postgres<S: Into<String>>(database: S) -> Self {
        Self {
            dialect: DialectKind::PostgreSql,
            jdbc_database: Some(database.into()),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> CatalogResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| CatalogError::InvalidParameters(format!("Invalid catalog config: {}", e)))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::InvalidParameters(format!(
                "Failed to read catalog config {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// Build from catalog properties as stored by the metadata service
    ///
    /// An explicit `dialect` wins; otherwise the dialect is inferred from the
    /// `jdbc-url` scheme. Unrelated keys (credentials, pool sizes) are ignored.
    pub fn from_properties(properties: &HashMap<String, String>) -> CatalogResult<Self> {
        let jdbc_url = properties.get(PROP_JDBC_URL).cloned();

        let dialect = match properties.get(PROP_DIALECT) {
            Some(name) => name
                .parse::<DialectKind>()
                .map_err(CatalogError::InvalidParameters)?,
            None => jdbc_url
                .as_deref()
                .and_then(DialectKind::from_jdbc_url)
                .ok_or_else(|| {
                    CatalogError::InvalidParameters(format!(
                        "Cannot determine dialect: set '{}' or a recognised '{}'",
                        PROP_DIALECT, PROP_JDBC_URL
                    ))
                })?,
        };

        Ok(Self {
            dialect,
            jdbc_url,
            jdbc_database: properties.get(PROP_JDBC_DATABASE).cloned(),
            ..Self::default()
        })
    }
}
