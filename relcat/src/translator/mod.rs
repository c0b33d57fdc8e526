// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Native error translation
//!
//! Translators turn a driver failure into the uniform `CatalogError`
//! taxonomy. Structured signals (vendor codes, SQLSTATE) are preferred;
//! message matching is a fallback and marks its result `Heuristic`.

pub mod doris;
pub mod mysql;
pub mod postgresql;
pub mod traits;

pub use doris::DorisExceptionTranslator;
pub use mysql::MysqlExceptionTranslator;
pub use postgresql::PostgresExceptionTranslator;
pub use traits::ExceptionTranslator;

use crate::catalog::config::CatalogConfig;
use crate::dialect::DialectKind;

/// Create the translator matching a catalog's dialect
pub fn create_translator(config: &CatalogConfig) -> Box<dyn ExceptionTranslator> {
    let warn = config.warn_on_heuristic_translation;
    match config.dialect {
        DialectKind::MySql => Box::new(MysqlExceptionTranslator::new(warn)),
        DialectKind::PostgreSql => Box::new(PostgresExceptionTranslator::new(warn)),
        DialectKind::Doris => Box::new(DorisExceptionTranslator::new(warn)),
    }
}
