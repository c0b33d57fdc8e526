// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Dialect trait definition
//!
//! This module defines the capability set every backend adapter provides to
//! the schema operations core. The core is written once against this trait;
//! nothing in it branches on a concrete backend.

use super::types::DialectKind;
use crate::catalog::error::CatalogResult;
use std::collections::HashMap;
use std::fmt::Debug;

/// What to do with a schema comment on a backend that cannot store one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentPolicy {
    /// Fail the create with `CatalogError::UnsupportedOperation`
    Reject,
    /// Create the schema and drop the comment, logging a warning
    Discard,
}

/// Backend-specific SQL and naming policy
///
/// Implementations must be pure: they generate text and answer questions
/// about names, and never open a connection.
pub trait Dialect: Send + Sync + Debug {
    /// Which backend this adapter speaks for
    fn kind(&self) -> DialectKind;

    /// Quote an identifier so any name round-trips verbatim
    fn quote_identifier(&self, name: &str) -> String;

    /// Query returning one row per namespace, name in column 0
    fn list_schemas_sql(&self) -> String;

    /// Query returning at least one row iff the namespace holds a child object
    ///
    /// Must stay cheap: the core only inspects the first row.
    fn probe_children_sql(&self, name: &str) -> String;

    /// Query returning the stored comment of a namespace in column 0
    ///
    /// `None` for dialects without comment support.
    fn load_comment_sql(&self, _name: &str) -> Option<String> {
        None
    }

    /// Statements that create a namespace, executed in order
    ///
    /// `comment` is only passed when the dialect supports comments.
    /// `properties` never contains the comment key.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` with at least one statement
    /// * `Err(CatalogError::UnsupportedOperation)` for properties the backend cannot store
    fn generate_create_sql(
        &self,
        name: &str,
        comment: Option<&str>,
        properties: &HashMap<String, String>,
    ) -> CatalogResult<Vec<String>>;

    /// Statement that drops a namespace
    ///
    /// Pure syntax. With `cascade` the backend removes contained objects itself.
    fn generate_drop_sql(&self, name: &str, cascade: bool) -> String;

    /// Built-in administrative namespaces of this backend
    fn reserved_namespace_names(&self) -> &'static [&'static str];

    /// Fold a name the way the backend compares identifiers
    fn normalize_for_comparison(&self, name: &str) -> String {
        name.to_string()
    }

    /// Whether a free-text comment can be stored on a namespace
    fn supports_namespace_comment(&self) -> bool;

    /// Whether schema DDL can run inside a transaction
    ///
    /// When true, multi-statement creates are wrapped in `BEGIN`/`COMMIT` so a
    /// failing follow-up statement leaves nothing behind.
    fn transactional_ddl(&self) -> bool {
        false
    }

    /// Policy for a comment the backend cannot store
    fn unsupported_comment_policy(&self) -> CommentPolicy {
        CommentPolicy::Reject
    }

    /// Check a name against the reserved set under this dialect's folding rule
    fn is_system_namespace(&self, name: &str) -> bool {
        let normalized = self.normalize_for_comparison(name);
        self.reserved_namespace_names()
            .iter()
            .any(|reserved| self.normalize_for_comparison(reserved) == normalized)
    }
}
