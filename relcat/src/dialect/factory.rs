// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Dialect factory
//!
//! Picks the adapter for a configured backend. The catalog core only ever
//! holds the returned trait object.

use super::traits::Dialect;
use super::types::DialectKind;
use super::{DorisDialect, MysqlDialect, PostgresDialect};
use crate::catalog::config::CatalogConfig;
use crate::catalog::error::{CatalogError, CatalogResult};

/// Create the dialect adapter for a catalog configuration
///
/// # Returns
/// * `Ok(Box<dyn Dialect>)` for the configured backend
/// * `Err(CatalogError::InvalidParameters)` when PostgreSQL has no `jdbc_database`
pub fn create_dialect(config: &CatalogConfig) -> CatalogResult<Box<dyn Dialect>> {
    match config.dialect {
        DialectKind::MySql => Ok(Box::new(MysqlDialect::new())),
        DialectKind::PostgreSql => {
            let database = config
                .jdbc_database
                .as_deref()
                .filter(|db| !db.trim().is_empty())
                .ok_or_else(|| {
                    CatalogError::InvalidParameters(
                        "PostgreSQL catalogs require 'jdbc-database'".to_string(),
                    )
                })?;
            Ok(Box::new(PostgresDialect::new(database)))
        }
        DialectKind::Doris => Ok(Box::new(DorisDialect::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::error::ErrorKind;

    #[test]
    fn test_create_each_dialect() {
        let mysql = create_dialect(&CatalogConfig::for_dialect(DialectKind::MySql)).unwrap();
        assert_eq!(mysql.kind(), DialectKind::MySql);

        let doris = create_dialect(&CatalogConfig::for_dialect(DialectKind::Doris)).unwrap();
        assert_eq!(doris.kind(), DialectKind::Doris);

        let mut pg_config = CatalogConfig::for_dialect(DialectKind::PostgreSql);
        pg_config.jdbc_database = Some("warehouse".to_string());
        let pg = create_dialect(&pg_config).unwrap();
        assert_eq!(pg.kind(), DialectKind::PostgreSql);
    }

    #[test]
    fn test_postgres_requires_database() {
        let err = create_dialect(&CatalogConfig::for_dialect(DialectKind::PostgreSql)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameters);
    }
}
