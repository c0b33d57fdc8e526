// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Relational schema catalog
//!
//! This module implements the schema lifecycle once, for every backend, on
//! top of the dialect and translator seams. It also owns the uniform error
//! taxonomy, the schema value object and catalog configuration.

pub mod config;
pub mod error;
pub mod manager;
pub mod operations;
pub mod schema;
pub mod schema_ops;

pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult, Classification, ErrorKind};
pub use manager::CatalogManager;
pub use operations::{SchemaOperation, SchemaResponse};
pub use schema::{AuditInfo, Schema, COMMENT_KEY};
pub use schema_ops::SchemaOperations;
