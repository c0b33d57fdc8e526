// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Apache Doris dialect adapter

use super::quoting;
use super::traits::{CommentPolicy, Dialect};
use super::types::DialectKind;
use crate::catalog::error::CatalogResult;
use std::collections::{BTreeMap, HashMap};

pub const DORIS_SYSTEM_DATABASES: &[&str] = &["information_schema", "mysql", "__internal_schema"];

/// Doris: MySQL-style syntax, database properties, no comments
#[derive(Debug, Clone, Default)]
pub struct DorisDialect;

impl DorisDialect {
    pub fn new() -> Self {
        Self
    }

    fn render_properties(properties: &HashMap<String, String>) -> String {
        let sorted: BTreeMap<&String, &String> = properties.iter().collect();
        let entries: Vec<String> = sorted
            .into_iter()
            .map(|(k, v)| format!("\"{}\"=\"{}\"", escape(k), escape(v)))
            .collect();
        format!("PROPERTIES ({})", entries.join(", "))
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Dialect for DorisDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Doris
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
        _comment: Option<&str>,
        properties: &HashMap<String, String>,
    ) -> CatalogResult<Vec<String>> {
        let mut sql = format!("CREATE DATABASE {}", self.quote_identifier(name));
        if !properties.is_empty() {
            sql.push(' ');
            sql.push_str(&Self::render_properties(properties));
        }
        Ok(vec![sql])
    }

    fn generate_drop_sql(&self, name: &str, cascade: bool) -> String {
        let base = format!("DROP DATABASE {}", self.quote_identifier(name));
        if cascade {
            format!("{} FORCE", base)
        } else {
            base
        }
    }

    fn reserved_namespace_names(&self) -> &'static [&'static str] {
        DORIS_SYSTEM_DATABASES
    }

    fn normalize_for_comparison(&self, name: &str) -> String {
        name.to_ascii_lowercase()
    }

    fn supports_namespace_comment(&self) -> bool {
        false
    }

    fn unsupported_comment_policy(&self) -> CommentPolicy {
        CommentPolicy::Discard
    }
}
