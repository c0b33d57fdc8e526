// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! MySQL error translation

use super::traits::{classified, ExceptionTranslator};
use crate::catalog::error::{CatalogError, Classification, ErrorKind};
use crate::connection::NativeError;
use once_cell::sync::Lazy;
use regex::Regex;

pub const ER_DB_CREATE_EXISTS: i32 = 1007;
pub const ER_DB_DROP_EXISTS: i32 = 1008;
pub const ER_DB_DROP_RMDIR: i32 = 1010;
pub const ER_BAD_DB_ERROR: i32 = 1049;
pub const ER_UNKNOWN_ERROR: i32 = 1105;

// client-side codes
pub const CR_CONNECTION_ERROR: i32 = 2002;
pub const CR_CONN_HOST_ERROR: i32 = 2003;
pub const CR_SERVER_GONE_ERROR: i32 = 2006;
pub const CR_SERVER_LOST: i32 = 2013;

static EXISTS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)database exists|database \S+ already exists").expect("valid regex")
});

// Only database-scoped wording; other objects "do not exist" too
static MISSING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)unknown database|database doesn't exist|database \S+ does not exist")
        .expect("valid regex")
});

static NOT_EMPTY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)database \S+ is not empty").expect("valid regex"));

// rmdir failure (ENOTEMPTY) from the MySQL server's data directory
static RMDIR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)can't rmdir .*errno: 39").expect("valid regex"));

static CONNECTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)communications link failure|connection refused|lost connection")
        .expect("valid regex")
});

/// Classify a MySQL server or client error code
pub(crate) fn classify_code(code: i32) -> Option<ErrorKind> {
    match code {
        ER_DB_CREATE_EXISTS => Some(ErrorKind::SchemaAlreadyExists),
        ER_DB_DROP_EXISTS | ER_BAD_DB_ERROR => Some(ErrorKind::NoSuchSchema),
        ER_DB_DROP_RMDIR => Some(ErrorKind::SchemaNotEmpty),
        CR_CONNECTION_ERROR | CR_CONN_HOST_ERROR | CR_SERVER_GONE_ERROR | CR_SERVER_LOST => {
            Some(ErrorKind::Connection)
        }
        _ => None,
    }
}

/// Best-guess classification from MySQL-family message text
pub(crate) fn classify_message(message: &str) -> Option<ErrorKind> {
    if NOT_EMPTY_PATTERN.is_match(message) {
        Some(ErrorKind::SchemaNotEmpty)
    } else if EXISTS_PATTERN.is_match(message) {
        Some(ErrorKind::SchemaAlreadyExists)
    } else if MISSING_PATTERN.is_match(message) {
        Some(ErrorKind::NoSuchSchema)
    } else if CONNECTION_PATTERN.is_match(message) {
        Some(ErrorKind::Connection)
    } else {
        None
    }
}

#[derive(Debug, Clone)]
pub struct MysqlExceptionTranslator {
    warn_on_heuristic: bool,
}

impl MysqlExceptionTranslator {
    pub fn new(warn_on_heuristic: bool) -> Self {
        Self { warn_on_heuristic }
    }
}

impl ExceptionTranslator for MysqlExceptionTranslator {
    fn translate(&self, error: NativeError, schema: &str) -> CatalogError {
        if let Some(kind) = error.code.and_then(classify_code) {
            return classified(kind, Classification::Confident, schema, error, false);
        }
        if error.sql_state_class() == Some("08") {
            return classified(
                ErrorKind::Connection,
                Classification::Confident,
                schema,
                error,
                false,
            );
        }
        // MySQL drivers always report a code; text is only trusted without one
        if error.code.is_none() {
            let kind = if RMDIR_PATTERN.is_match(&error.message) {
                Some(ErrorKind::SchemaNotEmpty)
            } else {
                classify_message(&error.message)
            };
            if let Some(kind) = kind {
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
