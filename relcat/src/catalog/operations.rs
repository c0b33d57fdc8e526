// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Serialisable schema requests and responses
//!
//! These types let a service layer pass schema requests through to a catalog
//! unchanged, whichever backend the catalog runs on.

use super::error::CatalogResult;
use super::schema::Schema;
use super::schema_ops::SchemaOperations;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A schema request against one catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SchemaOperation {
    /// List user-visible schema names
    List,

    /// Load one schema
    Load { name: String },

    /// Check whether a schema exists
    Exists { name: String },

    /// Create a schema
    ///
    /// # Fields
    /// * `comment` - Optional free-text comment, subject to dialect support
    /// * `properties` - Backend properties, validated by the dialect
    Create {
        name: String,
        #[serde(default)]
        comment: Option<String>,
        #[serde(default)]
        properties: HashMap<String, String>,
    },

    /// Drop a schema, with `cascade` removing contained objects
    Drop {
        name: String,
        #[serde(default)]
        cascade: bool,
    },
}

impl SchemaOperation {
    /// Name of the operation, for logs
    pub fn name(&self) -> &'static str {
        match self {
            SchemaOperation::List => "list",
            SchemaOperation::Load { .. } => "load",
            SchemaOperation::Exists { .. } => "exists",
            SchemaOperation::Create { .. } => "create",
            SchemaOperation::Drop { .. } => "drop",
        }
    }
}

/// Result of a `SchemaOperation`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", content = "value", rename_all = "snake_case")]
pub enum SchemaResponse {
    Names(Vec<String>),
    Schema(Schema),
    Exists(bool),
    Dropped(bool),
}

impl SchemaResponse {
    pub fn names(&self) -> Option<&[String]> {
        match self {
            SchemaResponse::Names(names) => Some(names),
            _ => None,
        }
    }

    pub fn schema(&self) -> Option<&Schema> {
        match self {
            SchemaResponse::Schema(schema) => Some(schema),
            _ => None,
        }
    }
}

impl SchemaOperations {
    /// Dispatch a request to the matching operation
    pub fn execute(&self, op: SchemaOperation) -> CatalogResult<SchemaResponse> {
        match op {
            SchemaOperation::List => self.list_schemas().map(SchemaResponse::Names),
            SchemaOperation::Load { name } => self.load_schema(&name).map(SchemaResponse::Schema),
            SchemaOperation::Exists { name } => {
                self.schema_exists(&name).map(SchemaResponse::Exists)
            }
            SchemaOperation::Create {
                name,
                comment,
                mut properties,
            } => {
                if let Some(comment) = comment {
                    properties.insert(super::schema::COMMENT_KEY.to_string(), comment);
                }
                self.create_schema(&name, &properties)
                    .map(SchemaResponse::Schema)
            }
            SchemaOperation::Drop { name, cascade } => {
                self.drop_schema(&name, cascade).map(SchemaResponse::Dropped)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_from_json() {
        let op: SchemaOperation =
            serde_json::from_value(json!({ "op": "drop", "name": "sales" })).unwrap();
        assert_eq!(
            op,
            SchemaOperation::Drop {
                name: "sales".to_string(),
                cascade: false
            }
        );
        assert_eq!(op.name(), "drop");

        let op: SchemaOperation = serde_json::from_value(json!({
            "op": "create",
            "name": "events",
            "properties": { "replication_num": "3" }
        }))
        .unwrap();
        match op {
            SchemaOperation::Create {
                comment, properties, ..
            } => {
                assert!(comment.is_none());
                assert_eq!(properties.get("replication_num").map(String::as_str), Some("3"));
            }
            other => panic!("unexpected operation {:?}", other),
        }
    }

    #[test]
    fn test_response_shape() {
        let value = serde_json::to_value(SchemaResponse::Dropped(true)).unwrap();
        assert_eq!(value, json!({ "result": "dropped", "value": true }));

        let names = SchemaResponse::Names(vec!["a".to_string()]);
        assert_eq!(names.names(), Some(&["a".to_string()][..]));
        assert!(names.schema().is_none());
    }
}
