// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Schema value object returned to callers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Property key carrying a free-text schema comment
pub const COMMENT_KEY: &str = "comment";

/// Audit trail of a catalog object
///
/// Opaque to the operations core: it is produced and persisted by the entity
/// store and passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditInfo {
    pub creator: Option<String>,
    pub create_time: Option<DateTime<Utc>>,
    pub last_modifier: Option<String>,
    pub last_modified_time: Option<DateTime<Utc>>,
}

impl AuditInfo {
    /// No audit information, what backends themselves can report
    pub fn empty() -> Self {
        Self::default()
    }

    /// Audit record for an object created now
    pub fn created_by<S: Into<String>>(creator: S) -> Self {
        Self {
            creator: Some(creator.into()),
            create_time: Some(Utc::now()),
            last_modifier: None,
            last_modified_time: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A user-visible schema (database) of one catalog
///
/// Immutable once built; `with_*` methods return a new instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    name: String,
    comment: Option<String>,
    properties: HashMap<String, String>,
    audit: AuditInfo,
}

impl Schema {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            comment: None,
            properties: HashMap::new(),
            audit: AuditInfo::empty(),
        }
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    pub fn with_properties(mut self, properties: HashMap<String, String>) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_audit_info(mut self, audit: AuditInfo) -> Self {
        self.audit = audit;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    pub fn audit_info(&self) -> &AuditInfo {
        &self.audit
    }
}
