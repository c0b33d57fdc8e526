// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Dialect identification

use serde::{Deserialize, Serialize};

/// Backend dialect selection
///
/// Chosen once per catalog from configuration; everything vendor-specific is
/// looked up through this value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// MySQL and MySQL-compatible servers
    MySql,

    /// PostgreSQL; schemas live inside one configured database
    PostgreSql,

    /// Apache Doris, spoken over the MySQL protocol
    Doris,
}

impl Default for DialectKind {
    fn default() -> Self {
        DialectKind::MySql
    }
}

impl DialectKind {
    /// Infer the dialect from a JDBC URL scheme
    ///
    /// Doris servers are reached with `jdbc:mysql:` URLs too, so only an
    /// explicit `jdbc:doris:` scheme selects Doris here.
    pub fn from_jdbc_url(url: &str) -> Option<Self> {
        let lower = url.trim().to_ascii_lowercase();
        if lower.starts_with("jdbc:mysql:") || lower.starts_with("jdbc:mariadb:") {
            Some(DialectKind::MySql)
        } else if lower.starts_with("jdbc:postgresql:") {
            Some(DialectKind::PostgreSql)
        } else if lower.starts_with("jdbc:doris:") {
            Some(DialectKind::Doris)
        } else {
            None
        }
    }
}

impl std::str::FromStr for DialectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" => Ok(DialectKind::MySql),
            "postgresql" | "postgres" | "pg" => Ok(DialectKind::PostgreSql),
            "doris" => Ok(DialectKind::Doris),
            _ => Err(format!(
                "Unknown dialect: {}. Valid options: mysql, postgresql, doris",
                s
            )),
        }
    }
}

impl std::fmt::Display for DialectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DialectKind::MySql => "mysql",
            DialectKind::PostgreSql => "postgresql",
            DialectKind::Doris => "doris",
        };
        write!(f, "{}", name)
    }
}
