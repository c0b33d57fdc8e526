// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! PostgreSQL dialect adapter
//!
//! Schemas are namespaces inside a single database, so listings are scoped to
//! the database named in the catalog configuration. Identifiers are always
//! quoted, which makes comparison exact.

use super::quoting::{quote_identifier, quote_literal};
use super::traits::Dialect;
use super::types::DialectKind;
use crate::catalog::error::{CatalogError, CatalogResult};
use std::collections::HashMap;

/// Schemas PostgreSQL creates in every database
pub const PG_SYSTEM_SCHEMAS: &[&str] = &["information_schema", "pg_catalog", "pg_toast"];

#[derive(Debug, Clone)]
pub struct PostgresDialect {
    database: String,
}

impl PostgresDialect {
    pub fn new<S: Into<String>>(database: S) -> Self {
        Self {
            database: database.into(),
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Dialect for PostgresDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::PostgreSql
    }

    fn quote_identifier(&self, name: &str) -> String {
        quote_identifier(name, '"')
    }

    fn list_schemas_sql(&self) -> String {
        format!(
            "SELECT schema_name FROM information_schema.schemata WHERE catalog_name = {}",
            quote_literal(&self.database)
        )
    }

    fn probe_children_sql(&self, name: &str) -> String {
        format!(
            "SELECT table_name FROM information_schema.tables WHERE table_schema = {} LIMIT 1",
            quote_literal(name)
        )
    }

    fn load_comment_sql(&self, name: &str) -> Option<String> {
        Some(format!(
            "SELECT pg_catalog.obj_description(n.oid, 'pg_namespace') \
             FROM pg_catalog.pg_namespace n WHERE n.nspname = {}",
            quote_literal(name)
        ))
    }

    fn generate_create_sql(
        &self,
        name: &str,
        comment: Option<&str>,
        properties: &HashMap<String, String>,
    ) -> CatalogResult<Vec<String>> {
        if !properties.is_empty() {
            let mut keys: Vec<&str> = properties.keys().map(String::as_str).collect();
            keys.sort_unstable();
            return Err(CatalogError::UnsupportedOperation(format!(
                "PostgreSQL does not support properties on schema '{}': {}",
                name,
                keys.join(", ")
            )));
        }

        let quoted = self.quote_identifier(name);
        let mut statements = vec![format!("CREATE SCHEMA {}", quoted)];
        if let Some(comment) = comment {
            statements.push(format!(
                "COMMENT ON SCHEMA {} IS {}",
                quoted,
                quote_literal(comment)
            ));
        }
        Ok(statements)
    }

    fn generate_drop_sql(&self, name: &str, cascade: bool) -> String {
        let mode = if cascade { "CASCADE" } else { "RESTRICT" };
        format!("DROP SCHEMA {} {}", self.quote_identifier(name), mode)
    }

    fn reserved_namespace_names(&self) -> &'static [&'static str] {
        PG_SYSTEM_SCHEMAS
    }

    fn supports_namespace_comment(&self) -> bool {
        true
    }

    fn transactional_ddl(&self) -> bool {
        true
    }
}
