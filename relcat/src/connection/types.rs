// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Driver-level types: native errors and result rows

use serde::{Deserialize, Serialize};
use std::fmt;

/// A failure reported by the backend driver, unclassified
///
/// Carries whatever the driver exposes: a vendor error code (MySQL style),
/// a five character SQLSTATE, and the raw message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeError {
    /// Vendor-specific numeric error code
    pub code: Option<i32>,
    /// SQLSTATE class and subclass
    pub sql_state: Option<String>,
    /// Driver message, verbatim
    pub message: String,
}

impl NativeError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            code: None,
            sql_state: None,
            message: message.into(),
        }
    }

    pub fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_sql_state<S: Into<String>>(mut self, sql_state: S) -> Self {
        self.sql_state = Some(sql_state.into());
        self
    }

    /// SQLSTATE class, the first two characters
    pub fn sql_state_class(&self) -> Option<&str> {
        self.sql_state.as_deref().and_then(|state| state.get(..2))
    }
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, &self.sql_state) {
            (Some(code), Some(state)) => write!(f, "[{} / {}] {}", code, state, self.message),
            (Some(code), None) => write!(f, "[{}] {}", code, self.message),
            (None, Some(state)) => write!(f, "[{}] {}", state, self.message),
            (None, None) => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for NativeError {}

pub type NativeResult<T> = Result<T, NativeError>;

/// One row of a result set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    columns: Vec<Option<String>>,
}

impl Row {
    pub fn new(columns: Vec<Option<String>>) -> Self {
        Self { columns }
    }

    /// Single non-null string column, the common shape for name listings
    pub fn single<S: Into<String>>(value: S) -> Self {
        Self {
            columns: vec![Some(value.into())],
        }
    }

    /// Get a column as a string, `None` when out of range or SQL NULL
    pub fn get_string(&self, index: usize) -> Option<&str> {
        self.columns.get(index).and_then(|c| c.as_deref())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Forward-only iterator over the rows of a query
#[derive(Debug)]
pub struct ResultSet {
    rows: std::vec::IntoIter<Row>,
}

impl ResultSet {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows: rows.into_iter(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl Iterator for ResultSet {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        self.rows.next()
    }
}
