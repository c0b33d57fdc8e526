// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! SQL dialect adapters
//!
//! Each adapter encodes what differs between backends for schema management:
//! statement syntax, identifier quoting, system namespaces, identifier case
//! folding and comment support. Adapters are stateless apart from immutable
//! configuration and never touch a connection.

pub mod doris;
pub mod factory;
pub mod mysql;
pub mod postgresql;
mod quoting;
pub mod traits;
pub mod types;

pub use doris::DorisDialect;
pub use factory::create_dialect;
pub use mysql::MysqlDialect;
pub use postgresql::PostgresDialect;
pub use traits::{CommentPolicy, Dialect};
pub use types::DialectKind;
