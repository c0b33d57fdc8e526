// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory backend for testing
//!
//! Understands exactly the statements the bundled dialects generate and
//! answers with the native errors the real servers raise, so catalog code can
//! be exercised end to end without a database server. It also counts open
//! connections, records every statement, and supports one-shot fault
//! injection.

use super::traits::{Connection, ConnectionProvider};
use super::types::{NativeError, NativeResult, ResultSet, Row};
use crate::dialect::DialectKind;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Which server's behaviour the backend emulates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendFlavor {
    MySql,
    Postgres,
    Doris,
}

impl From<DialectKind> for BackendFlavor {
    fn from(kind: DialectKind) -> Self {
        match kind {
            DialectKind::MySql => BackendFlavor::MySql,
            DialectKind::PostgreSql => BackendFlavor::Postgres,
            DialectKind::Doris => BackendFlavor::Doris,
        }
    }
}

impl BackendFlavor {
    fn seeded_namespaces(&self) -> &'static [&'static str] {
        match self {
            BackendFlavor::MySql => &["information_schema", "mysql", "performance_schema", "sys"],
            BackendFlavor::Postgres => &["information_schema", "pg_catalog", "pg_toast", "public"],
            BackendFlavor::Doris => &["__internal_schema", "information_schema", "mysql"],
        }
    }

    fn quote(&self) -> char {
        match self {
            BackendFlavor::Postgres => '"',
            _ => '`',
        }
    }

    fn syntax_error(&self, sql: &str) -> NativeError {
        match self {
            BackendFlavor::Postgres => {
                NativeError::new(format!("syntax error at or near \"{}\"", sql))
                    .with_sql_state("42601")
            }
            _ => NativeError::new(format!(
                "You have an error in your SQL syntax near '{}'",
                sql
            ))
            .with_code(1064)
            .with_sql_state("42000"),
        }
    }

    fn already_exists(&self, name: &str) -> NativeError {
        match self {
            BackendFlavor::MySql => NativeError::new(format!(
                "Can't create database '{}'; database exists",
                name
            ))
            .with_code(1007)
            .with_sql_state("HY000"),
            BackendFlavor::Postgres => {
                NativeError::new(format!("schema \"{}\" already exists", name))
                    .with_sql_state("42P06")
            }
            BackendFlavor::Doris => NativeError::new(format!(
                "errCode = 2, detailMessage = Can't create database '{}'; database exists",
                name
            ))
            .with_code(1105)
            .with_sql_state("HY000"),
        }
    }

    fn drop_missing(&self, name: &str) -> NativeError {
        match self {
            BackendFlavor::MySql => NativeError::new(format!(
                "Can't drop database '{}'; database doesn't exist",
                name
            ))
            .with_code(1008)
            .with_sql_state("HY000"),
            BackendFlavor::Postgres => {
                NativeError::new(format!("schema \"{}\" does not exist", name))
                    .with_sql_state("3F000")
            }
            BackendFlavor::Doris => NativeError::new(format!(
                "errCode = 2, detailMessage = Can't drop database '{}'; database doesn't exist",
                name
            ))
            .with_code(1105)
            .with_sql_state("HY000"),
        }
    }

    fn unknown_database(&self, name: &str) -> NativeError {
        match self {
            BackendFlavor::Doris => NativeError::new(format!(
                "errCode = 2, detailMessage = Unknown database '{}'",
                name
            ))
            .with_code(1105)
            .with_sql_state("HY000"),
            _ => NativeError::new(format!("Unknown database '{}'", name))
                .with_code(1049)
                .with_sql_state("42000"),
        }
    }
}

const IDENT: &str = r#"(`(?:[^`]|``)+`|"(?:[^"]|"")+")"#;
const LITERAL: &str = r"'((?:[^']|'')*)'";

fn pattern(template: &str) -> Regex {
    let source = format!(
        "(?i)^{}$",
        template.replace("IDENT", IDENT).replace("LITERAL", LITERAL)
    );
    Regex::new(&source).expect("valid statement pattern")
}

static SHOW_DATABASES: Lazy<Regex> = Lazy::new(|| pattern(r"SHOW DATABASES"));
static LIST_SCHEMATA: Lazy<Regex> = Lazy::new(|| {
    pattern(r"SELECT schema_name FROM information_schema\.schemata WHERE catalog_name = LITERAL")
});
static CREATE: Lazy<Regex> =
    Lazy::new(|| pattern(r"CREATE (DATABASE|SCHEMA) IDENT(?: PROPERTIES \((.*)\))?"));
static DROP: Lazy<Regex> =
    Lazy::new(|| pattern(r"DROP (DATABASE|SCHEMA) IDENT(?: (CASCADE|RESTRICT|FORCE))?"));
static SHOW_TABLES: Lazy<Regex> = Lazy::new(|| pattern(r"SHOW TABLES IN IDENT"));
static PROBE_TABLES: Lazy<Regex> = Lazy::new(|| {
    pattern(r"SELECT table_name FROM information_schema\.tables WHERE table_schema = LITERAL LIMIT 1")
});
static COMMENT_ON: Lazy<Regex> = Lazy::new(|| pattern(r"COMMENT ON SCHEMA IDENT IS LITERAL"));
static LOAD_COMMENT: Lazy<Regex> = Lazy::new(|| {
    pattern(
        r"SELECT pg_catalog\.obj_description\(n\.oid, 'pg_namespace'\) FROM pg_catalog\.pg_namespace n WHERE n\.nspname = LITERAL",
    )
});
static PROPERTY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""((?:[^"\\]|\\.)*)"\s*=\s*"((?:[^"\\]|\\.)*)""#).expect("valid property pattern")
});

fn unquote_identifier(quoted: &str) -> String {
    let quote = &quoted[..1];
    let inner = &quoted[1..quoted.len() - 1];
    inner.replace(&format!("{}{}", quote, quote), quote)
}

fn unquote_literal(inner: &str) -> String {
    inner.replace("''", "'")
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[derive(Debug, Clone, Default)]
struct Namespace {
    tables: BTreeSet<String>,
    comment: Option<String>,
    properties: BTreeMap<String, String>,
}

/// A table creation that fires right before a matching statement
#[derive(Debug)]
struct Interleaved {
    prefix: String,
    schema: String,
    table: String,
}

/// In-process backend emulating one server flavor
pub struct MemoryBackend {
    flavor: BackendFlavor,
    database: String,
    namespaces: Mutex<BTreeMap<String, Namespace>>,
    statement_faults: Mutex<Vec<(String, NativeError)>>,
    acquire_fault: Mutex<Option<NativeError>>,
    interleaved: Mutex<Vec<Interleaved>>,
    statements: Mutex<Vec<String>>,
    open_connections: AtomicUsize,
    acquired_total: AtomicUsize,
}

impl MemoryBackend {
    /// Create a backend seeded with the flavor's system namespaces
    pub fn new(flavor: BackendFlavor) -> Self {
        let namespaces = flavor
            .seeded_namespaces()
            .iter()
            .map(|name| (name.to_string(), Namespace::default()))
            .collect();

        Self {
            flavor,
            database: "warehouse".to_string(),
            namespaces: Mutex::new(namespaces),
            statement_faults: Mutex::new(Vec::new()),
            acquire_fault: Mutex::new(None),
            interleaved: Mutex::new(Vec::new()),
            statements: Mutex::new(Vec::new()),
            open_connections: AtomicUsize::new(0),
            acquired_total: AtomicUsize::new(0),
        }
    }

    pub fn mysql() -> Self {
        Self::new(BackendFlavor::MySql)
    }

    /// PostgreSQL backend whose schemas belong to `database`
    pub fn postgres<S: Into<String>>(database: S) -> Self {
        let mut backend = Self::new(BackendFlavor::Postgres);
        backend.database = database.into();
        backend
    }

    pub fn doris() -> Self {
        Self::new(BackendFlavor::Doris)
    }

    pub fn flavor(&self) -> BackendFlavor {
        self.flavor
    }

    /// Add a namespace directly, bypassing SQL (any casing allowed)
    pub fn add_namespace(&self, name: &str) {
        self.namespaces
            .lock()
            .entry(name.to_string())
            .or_default();
    }

    /// Create a table in an existing namespace, as another actor would
    pub fn create_table(&self, schema: &str, table: &str) -> NativeResult<()> {
        let mut namespaces = self.namespaces.lock();
        match namespaces.get_mut(schema) {
            Some(ns) => {
                ns.tables.insert(table.to_string());
                Ok(())
            }
            None => Err(self.flavor.unknown_database(schema)),
        }
    }

    pub fn has_namespace(&self, name: &str) -> bool {
        self.namespaces.lock().contains_key(name)
    }

    pub fn namespace_names(&self) -> Vec<String> {
        self.namespaces.lock().keys().cloned().collect()
    }

    pub fn comment_of(&self, name: &str) -> Option<String> {
        self.namespaces
            .lock()
            .get(name)
            .and_then(|ns| ns.comment.clone())
    }

    pub fn properties_of(&self, name: &str) -> BTreeMap<String, String> {
        self.namespaces
            .lock()
            .get(name)
            .map(|ns| ns.properties.clone())
            .unwrap_or_default()
    }

    /// Fail the next statement starting with `prefix` (case-insensitive)
    pub fn fail_statement(&self, prefix: &str, error: NativeError) {
        self.statement_faults
            .lock()
            .push((prefix.to_ascii_uppercase(), error));
    }

    /// Fail the next connection acquisition
    pub fn fail_acquire(&self, error: NativeError) {
        *self.acquire_fault.lock() = Some(error);
    }

    /// Create `schema.table` just before the next statement starting with `prefix`
    ///
    /// Simulates a concurrent writer slipping in between two statements.
    pub fn interleave_table_creation(&self, prefix: &str, schema: &str, table: &str) {
        self.interleaved.lock().push(Interleaved {
            prefix: prefix.to_ascii_uppercase(),
            schema: schema.to_string(),
            table: table.to_string(),
        });
    }

    /// Every statement received, in order
    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().clone()
    }

    pub fn open_connections(&self) -> usize {
        self.open_connections.load(Ordering::SeqCst)
    }

    pub fn acquired_total(&self) -> usize {
        self.acquired_total.load(Ordering::SeqCst)
    }

    fn take_fault(&self, sql: &str) -> Option<NativeError> {
        let upper = sql.to_ascii_uppercase();
        let mut faults = self.statement_faults.lock();
        let index = faults.iter().position(|(prefix, _)| upper.starts_with(prefix))?;
        Some(faults.remove(index).1)
    }

    fn run_interleaved(&self, sql: &str) {
        let upper = sql.to_ascii_uppercase();
        let mut pending = self.interleaved.lock();
        if let Some(index) = pending.iter().position(|i| upper.starts_with(&i.prefix)) {
            let hook = pending.remove(index);
            drop(pending);
            if let Err(e) = self.create_table(&hook.schema, &hook.table) {
                log::debug!("Interleaved table creation skipped: {}", e);
            }
        }
    }

    fn run(&self, sql: &str) -> NativeResult<Vec<Row>> {
        let sql = sql.trim();
        self.statements.lock().push(sql.to_string());
        self.run_interleaved(sql);
        if let Some(fault) = self.take_fault(sql) {
            return Err(fault);
        }

        let postgres = self.flavor == BackendFlavor::Postgres;

        if !postgres && SHOW_DATABASES.is_match(sql) {
            return Ok(self.namespace_rows());
        }
        if let Some(caps) = LIST_SCHEMATA.captures(sql).filter(|_| postgres) {
            if unquote_literal(&caps[1]) != self.database {
                return Ok(Vec::new());
            }
            return Ok(self.namespace_rows());
        }
        if let Some(caps) = CREATE.captures(sql) {
            let name = self.identifier(sql, &caps[2])?;
            return self.create(&caps[1], name, caps.get(3).map(|m| m.as_str()), sql);
        }
        if let Some(caps) = DROP.captures(sql) {
            let name = self.identifier(sql, &caps[2])?;
            let mode = caps.get(3).map(|m| m.as_str().to_ascii_uppercase());
            return self.drop_namespace(&caps[1], &name, mode.as_deref(), sql);
        }
        if let Some(caps) = SHOW_TABLES.captures(sql).filter(|_| !postgres) {
            let name = self.identifier(sql, &caps[1])?;
            let namespaces = self.namespaces.lock();
            let ns = namespaces
                .get(&name)
                .ok_or_else(|| self.flavor.unknown_database(&name))?;
            return Ok(ns.tables.iter().map(|t| Row::single(t.clone())).collect());
        }
        if let Some(caps) = PROBE_TABLES.captures(sql).filter(|_| postgres) {
            let name = unquote_literal(&caps[1]);
            let namespaces = self.namespaces.lock();
            return Ok(namespaces
                .get(&name)
                .and_then(|ns| ns.tables.iter().next())
                .map(|t| vec![Row::single(t.clone())])
                .unwrap_or_default());
        }
        if let Some(caps) = COMMENT_ON.captures(sql).filter(|_| postgres) {
            let name = self.identifier(sql, &caps[1])?;
            let mut namespaces = self.namespaces.lock();
            let ns = namespaces
                .get_mut(&name)
                .ok_or_else(|| self.flavor.drop_missing(&name))?;
            ns.comment = Some(unquote_literal(&caps[2]));
            return Ok(Vec::new());
        }
        if let Some(caps) = LOAD_COMMENT.captures(sql).filter(|_| postgres) {
            let name = unquote_literal(&caps[1]);
            let namespaces = self.namespaces.lock();
            return Ok(namespaces
                .get(&name)
                .map(|ns| vec![Row::new(vec![ns.comment.clone()])])
                .unwrap_or_default());
        }

        Err(self.flavor.syntax_error(sql))
    }

    fn namespace_rows(&self) -> Vec<Row> {
        self.namespaces
            .lock()
            .keys()
            .map(|name| Row::single(name.clone()))
            .collect()
    }

    /// Unquote an identifier, rejecting the other dialect's quote style
    fn identifier(&self, sql: &str, quoted: &str) -> NativeResult<String> {
        if !quoted.starts_with(self.flavor.quote()) {
            return Err(self.flavor.syntax_error(sql));
        }
        Ok(unquote_identifier(quoted))
    }

    fn create(
        &self,
        object: &str,
        name: String,
        properties: Option<&str>,
        sql: &str,
    ) -> NativeResult<Vec<Row>> {
        let expected = match self.flavor {
            BackendFlavor::Postgres => "SCHEMA",
            _ => "DATABASE",
        };
        let properties_allowed = self.flavor == BackendFlavor::Doris;
        if !object.eq_ignore_ascii_case(expected) || (properties.is_some() && !properties_allowed) {
            return Err(self.flavor.syntax_error(sql));
        }

        let mut namespaces = self.namespaces.lock();
        if namespaces.contains_key(&name) {
            return Err(self.flavor.already_exists(&name));
        }

        let mut ns = Namespace::default();
        if let Some(body) = properties {
            for caps in PROPERTY.captures_iter(body) {
                ns.properties.insert(unescape(&caps[1]), unescape(&caps[2]));
            }
        }
        namespaces.insert(name, ns);
        Ok(Vec::new())
    }

    fn drop_namespace(
        &self,
        object: &str,
        name: &str,
        mode: Option<&str>,
        sql: &str,
    ) -> NativeResult<Vec<Row>> {
        let valid = match self.flavor {
            BackendFlavor::Postgres => {
                object.eq_ignore_ascii_case("SCHEMA") && mode != Some("FORCE")
            }
            BackendFlavor::MySql => object.eq_ignore_ascii_case("DATABASE") && mode.is_none(),
            BackendFlavor::Doris => {
                object.eq_ignore_ascii_case("DATABASE") && matches!(mode, None | Some("FORCE"))
            }
        };
        if !valid {
            return Err(self.flavor.syntax_error(sql));
        }

        let mut namespaces = self.namespaces.lock();
        let ns = namespaces
            .get(name)
            .ok_or_else(|| self.flavor.drop_missing(name))?;

        // PostgreSQL defaults to RESTRICT
        let cascade = self.flavor != BackendFlavor::Postgres || mode == Some("CASCADE");
        if !cascade && !ns.tables.is_empty() {
            return Err(NativeError::new(format!(
                "cannot drop schema {} because other objects depend on it",
                name
            ))
            .with_sql_state("2BP01"));
        }

        namespaces.remove(name);
        Ok(Vec::new())
    }
}

/// Connection handle; returns itself to the backend when dropped
///
/// On PostgreSQL an open transaction keeps a snapshot of the namespaces,
/// restored on `ROLLBACK` or when the connection goes away uncommitted.
/// MySQL-family DDL commits implicitly, so there `BEGIN` is accepted but
/// protects nothing.
struct MemoryConnection<'a> {
    backend: &'a MemoryBackend,
    snapshot: Option<BTreeMap<String, Namespace>>,
}

impl MemoryConnection<'_> {
    fn transaction_control(&mut self, sql: &str) -> Option<NativeResult<u64>> {
        let verb = sql.trim().trim_end_matches(';').to_ascii_uppercase();
        if !matches!(verb.as_str(), "BEGIN" | "COMMIT" | "ROLLBACK") {
            return None;
        }

        let backend = self.backend;
        backend.statements.lock().push(sql.trim().to_string());
        if let Some(fault) = backend.take_fault(sql) {
            return Some(Err(fault));
        }

        match verb.as_str() {
            "BEGIN" if backend.flavor == BackendFlavor::Postgres => {
                self.snapshot = Some(backend.namespaces.lock().clone());
            }
            "ROLLBACK" => {
                if let Some(snapshot) = self.snapshot.take() {
                    *backend.namespaces.lock() = snapshot;
                }
            }
            _ => self.snapshot = None,
        }
        Some(Ok(0))
    }
}

impl Connection for MemoryConnection<'_> {
    fn execute(&mut self, sql: &str) -> NativeResult<u64> {
        if let Some(result) = self.transaction_control(sql) {
            return result;
        }
        self.backend.run(sql).map(|_| 0)
    }

    fn query(&mut self, sql: &str) -> NativeResult<ResultSet> {
        self.backend.run(sql).map(ResultSet::new)
    }
}

impl Drop for MemoryConnection<'_> {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            *self.backend.namespaces.lock() = snapshot;
        }
        self.backend.open_connections.fetch_sub(1, Ordering::SeqCst);
    }
}

impl ConnectionProvider for MemoryBackend {
    fn acquire(&self) -> NativeResult<Box<dyn Connection + '_>> {
        if let Some(error) = self.acquire_fault.lock().take() {
            return Err(error);
        }
        self.open_connections.fetch_add(1, Ordering::SeqCst);
        self.acquired_total.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryConnection {
            backend: self,
            snapshot: None,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_names(backend: &MemoryBackend, sql: &str) -> Vec<String> {
        let mut conn = backend.acquire().unwrap();
        conn.query(sql)
            .unwrap()
            .filter_map(|row| row.get_string(0).map(str::to_string))
            .collect()
    }

    #[test]
    fn test_mysql_lifecycle_and_errors() {
        let backend = MemoryBackend::mysql();
        {
            let mut conn = backend.acquire().unwrap();
            conn.execute("CREATE DATABASE `sales`").unwrap();

            let err = conn.execute("CREATE DATABASE `sales`").unwrap_err();
            assert_eq!(err.code, Some(1007));

            let err = conn.query("SHOW TABLES IN `missing`").unwrap_err();
            assert_eq!(err.code, Some(1049));

            conn.execute("DROP DATABASE `sales`").unwrap();
            let err = conn.execute("DROP DATABASE `sales`").unwrap_err();
            assert_eq!(err.code, Some(1008));
        }
        assert_eq!(backend.open_connections(), 0);
        assert_eq!(backend.acquired_total(), 1);
    }

    #[test]
    fn test_postgres_restrict_and_comment() {
        let backend = MemoryBackend::postgres("warehouse");
        let mut conn = backend.acquire().unwrap();
        conn.execute("CREATE SCHEMA \"Sales\"").unwrap();
        conn.execute("COMMENT ON SCHEMA \"Sales\" IS 'it''s here'").unwrap();
        assert_eq!(backend.comment_of("Sales").as_deref(), Some("it's here"));

        backend.create_table("Sales", "orders").unwrap();
        let err = conn.execute("DROP SCHEMA \"Sales\" RESTRICT").unwrap_err();
        assert_eq!(err.sql_state.as_deref(), Some("2BP01"));

        conn.execute("DROP SCHEMA \"Sales\" CASCADE").unwrap();
        assert!(!backend.has_namespace("Sales"));

        let other_db = query_names_pg(&mut conn, "other");
        assert!(other_db.is_empty());
    }

    fn query_names_pg(conn: &mut Box<dyn Connection + '_>, database: &str) -> Vec<String> {
        conn.query(&format!(
            "SELECT schema_name FROM information_schema.schemata WHERE catalog_name = '{}'",
            database
        ))
        .unwrap()
        .filter_map(|row| row.get_string(0).map(str::to_string))
        .collect()
    }

    #[test]
    fn test_doris_properties_parsed() {
        let backend = MemoryBackend::doris();
        let mut conn = backend.acquire().unwrap();
        conn.execute(
            "CREATE DATABASE `events` PROPERTIES (\"replication_num\"=\"3\", \"note\"=\"a \\\"b\\\"\")",
        )
        .unwrap();
        let props = backend.properties_of("events");
        assert_eq!(props.get("replication_num").map(String::as_str), Some("3"));
        assert_eq!(props.get("note").map(String::as_str), Some("a \"b\""));

        let err = conn.execute("CREATE DATABASE `events`").unwrap_err();
        assert_eq!(err.code, Some(1105));
    }

    #[test]
    fn test_seeded_system_namespaces() {
        let backend = MemoryBackend::mysql();
        let names = query_names(&backend, "SHOW DATABASES");
        assert!(names.contains(&"performance_schema".to_string()));
    }

    #[test]
    fn test_wrong_quote_style_is_syntax_error() {
        let backend = MemoryBackend::mysql();
        let mut conn = backend.acquire().unwrap();
        let err = conn.execute("CREATE SCHEMA \"sales\"").unwrap_err();
        assert_eq!(err.code, Some(1064));
    }

    #[test]
    fn test_fault_injection_is_one_shot() {
        let backend = MemoryBackend::mysql();
        backend.fail_acquire(NativeError::new("pool exhausted"));
        assert!(backend.acquire().is_err());
        assert_eq!(backend.open_connections(), 0);

        backend.fail_statement("show", NativeError::new("lost connection").with_code(2013));
        let mut conn = backend.acquire().unwrap();
        assert!(conn.query("SHOW DATABASES").is_err());
        assert!(conn.query("SHOW DATABASES").is_ok());
    }

    #[test]
    fn test_interleaved_table_creation() {
        let backend = MemoryBackend::postgres("warehouse");
        backend.add_namespace("staging");
        backend.interleave_table_creation("DROP SCHEMA", "staging", "late_arrival");

        let mut conn = backend.acquire().unwrap();
        let err = conn.execute("DROP SCHEMA \"staging\" RESTRICT").unwrap_err();
        assert_eq!(err.sql_state.as_deref(), Some("2BP01"));
        assert!(backend.has_namespace("staging"));
        assert_eq!(backend.statements(), vec!["DROP SCHEMA \"staging\" RESTRICT".to_string()]);
    }

    #[test]
    fn test_postgres_rollback_restores_namespaces() {
        let backend = MemoryBackend::postgres("warehouse");
        let mut conn = backend.acquire().unwrap();
        conn.execute("BEGIN").unwrap();
        conn.execute("CREATE SCHEMA \"sales\"").unwrap();
        assert!(backend.has_namespace("sales"));
        conn.execute("ROLLBACK").unwrap();
        assert!(!backend.has_namespace("sales"));

        conn.execute("BEGIN").unwrap();
        conn.execute("CREATE SCHEMA \"sales\"").unwrap();
        conn.execute("COMMIT").unwrap();
        drop(conn);
        assert!(backend.has_namespace("sales"));
    }

    #[test]
    fn test_uncommitted_transaction_aborts_on_release() {
        let backend = MemoryBackend::postgres("warehouse");
        {
            let mut conn = backend.acquire().unwrap();
            conn.execute("BEGIN").unwrap();
            conn.execute("CREATE SCHEMA \"sales\"").unwrap();
        }
        assert!(!backend.has_namespace("sales"));
        assert_eq!(backend.open_connections(), 0);
    }

    #[test]
    fn test_mysql_ddl_ignores_rollback() {
        let backend = MemoryBackend::mysql();
        let mut conn = backend.acquire().unwrap();
        conn.execute("BEGIN").unwrap();
        conn.execute("CREATE DATABASE `sales`").unwrap();
        conn.execute("ROLLBACK").unwrap();
        assert!(backend.has_namespace("sales"));
    }
}
