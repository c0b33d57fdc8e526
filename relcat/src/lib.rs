// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! relcat - A uniform schema catalog over relational backends
//!
//! relcat presents one metadata model (schemas/databases with properties and
//! audit info) over several SQL dialects, so catalog management code never
//! branches on the vendor it is talking to.
//!
//! # Components
//!
//! - **Connection**: the narrow boundary to a backend driver (`ConnectionProvider`)
//! - **Dialect**: per-backend SQL generation, system namespaces and identifier folding
//! - **Translator**: vendor error codes mapped onto one error taxonomy
//! - **Catalog**: the dialect-independent schema lifecycle (`SchemaOperations`)
//!
//! # Usage
//!
//! ```ignore
//! use relcat::{CatalogConfig, SchemaOperations};
//!
//! let config = CatalogConfig::from_json(r#"{ "dialect": "mysql" }"#)?;
//! let ops = SchemaOperations::from_config(&config, provider)?;
//!
//! ops.create_schema("sales", &Default::default())?;
//! assert!(ops.list_schemas()?.contains(&"sales".to_string()));
//! ops.drop_schema("sales", false)?;
//! ```

pub mod catalog;
pub mod connection;
pub mod dialect;
pub mod translator;

pub use catalog::{
    AuditInfo, CatalogConfig, CatalogError, CatalogManager, CatalogResult, Classification,
    ErrorKind, Schema, SchemaOperation, SchemaOperations, SchemaResponse, COMMENT_KEY,
};
pub use connection::{
    BackendFlavor, Connection, ConnectionProvider, MemoryBackend, NativeError, NativeResult,
    ResultSet, Row,
};
pub use dialect::{create_dialect, CommentPolicy, Dialect, DialectKind};
pub use translator::{create_translator, ExceptionTranslator};

/// relcat version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// relcat crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
