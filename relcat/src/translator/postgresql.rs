// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! PostgreSQL error translation by SQLSTATE

use super::traits::{classified, ExceptionTranslator};
use crate::catalog::error::{CatalogError, Classification, ErrorKind};
use crate::connection::NativeError;
use once_cell::sync::Lazy;
use regex::Regex;

pub const DUPLICATE_SCHEMA: &str = "42P06";
pub const INVALID_SCHEMA_NAME: &str = "3F000";
pub const DEPENDENT_OBJECTS_STILL_EXIST: &str = "2BP01";
pub const ADMIN_SHUTDOWN: &str = "57P01";

static MESSAGE_PATTERNS: Lazy<Vec<(Regex, ErrorKind)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r#"(?i)schema "[^"]*" already exists"#).expect("valid regex"),
            ErrorKind::SchemaAlreadyExists,
        ),
        (
            Regex::new(r#"(?i)schema "[^"]*" does not exist"#).expect("valid regex"),
            ErrorKind::NoSuchSchema,
        ),
        (
            Regex::new(r"(?i)cannot drop schema .* because other objects depend on it")
                .expect("valid regex"),
            ErrorKind::SchemaNotEmpty,
        ),
    ]
});

#[derive(Debug, Clone)]
pub struct PostgresExceptionTranslator {
    warn_on_heuristic: bool,
}

impl PostgresExceptionTranslator {
    pub fn new(warn_on_heuristic: bool) -> Self {
        Self { warn_on_heuristic }
    }

    fn classify_state(error: &NativeError) -> Option<ErrorKind> {
        match error.sql_state.as_deref() {
            Some(DUPLICATE_SCHEMA) => Some(ErrorKind::SchemaAlreadyExists),
            Some(INVALID_SCHEMA_NAME) => Some(ErrorKind::NoSuchSchema),
            Some(DEPENDENT_OBJECTS_STILL_EXIST) => Some(ErrorKind::SchemaNotEmpty),
            Some(ADMIN_SHUTDOWN) => Some(ErrorKind::Connection),
            _ if error.sql_state_class() == Some("08") => Some(ErrorKind::Connection),
            _ => None,
        }
    }
}

impl ExceptionTranslator for PostgresExceptionTranslator {
    fn translate(&self, error: NativeError, schema: &str) -> CatalogError {
        if let Some(kind) = Self::classify_state(&error) {
            return classified(kind, Classification::Confident, schema, error, false);
        }
        if error.sql_state.is_none() {
            let matched = MESSAGE_PATTERNS
                .iter()
                .find(|(pattern, _)| pattern.is_match(&error.message))
                .map(|(_, kind)| *kind);
            if let Some(kind) = matched {
                return classified(
                    kind,
                    Classification::Heuristic,
                    schema,
                    error,
                    self.warn_on_heuristic,
                );
            }
        }
        CatalogError::Backend { cause: error }
    }
}
