// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! MySQL dialect adapter

use super::quoting;
use super::traits::Dialect;
use super::types::DialectKind;
use crate::catalog::error::{CatalogError, CatalogResult};
use std::collections::HashMap;

/// Databases every MySQL server ships with
pub const MYSQL_SYSTEM_DATABASES: &[&str] =
    &["information_schema", "mysql", "performance_schema", "sys"];

/// MySQL: databases are schemas, no comments, case-insensitive comparison
#[derive(Debug, Clone, Default)]
pub struct MysqlDialect;

impl MysqlDialect {
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for MysqlDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::MySql
    }

    fn quote_identifier(&self, name: &str) -> String {
        quoting::quote_identifier(name, '`')
    }

    fn list_schemas_sql(&self) -> String {
        "SHOW DATABASES".to_string()
    }

    fn probe_children_sql(&self, name: &str) -> String {
        format!("SHOW TABLES IN {}", self.quote_identifier(name))
    }

    fn generate_create_sql(
        &self,
        name: &str,
        comment: Option<&str>,
        properties: &HashMap<String, String>,
    ) -> CatalogResult<Vec<String>> {
        if comment.is_some() {
            return Err(CatalogError::UnsupportedOperation(format!(
                "MySQL does not support comments on database '{}'",
                name
            )));
        }
        if !properties.is_empty() {
            let mut keys: Vec<&str> = properties.keys().map(String::as_str).collect();
            keys.sort_unstable();
            return Err(CatalogError::UnsupportedOperation(format!(
                "MySQL does not support properties on database '{}': {}",
                name,
                keys.join(", ")
            )));
        }

        Ok(vec![format!(
            "CREATE DATABASE {}",
            self.quote_identifier(name)
        )])
    }

    fn generate_drop_sql(&self, name: &str, _cascade: bool) -> String {
        // DROP DATABASE always takes the tables with it
        format!("DROP DATABASE {}", self.quote_identifier(name))
    }

    fn reserved_namespace_names(&self) -> &'static [&'static str] {
        MYSQL_SYSTEM_DATABASES
    }

    fn normalize_for_comparison(&self, name: &str) -> String {
        name.to_ascii_lowercase()
    }

    fn supports_namespace_comment(&self) -> bool {
        false
    }
}
