// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Dialect-independent schema lifecycle
//!
//! `SchemaOperations` implements list, load, create and drop once, against
//! the `Dialect`, `ExceptionTranslator` and `ConnectionProvider` seams. It
//! keeps no state of its own: every call re-reads the backend, and every call
//! holds exactly one connection, released on all exit paths.

use super::config::CatalogConfig;
use super::error::{CatalogError, CatalogResult};
use super::schema::{Schema, COMMENT_KEY};
use crate::connection::{Connection, ConnectionProvider, NativeError};
use crate::dialect::{create_dialect, CommentPolicy, Dialect};
use crate::translator::{create_translator, ExceptionTranslator};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Translator context for statements that are not about one schema
const ALL_SCHEMAS: &str = "*";

const BEGIN: &str = "BEGIN";
const COMMIT: &str = "COMMIT";
const ROLLBACK: &str = "ROLLBACK";

pub struct SchemaOperations {
    dialect: Box<dyn Dialect>,
    translator: Box<dyn ExceptionTranslator>,
    provider: Arc<dyn ConnectionProvider>,
}

impl fmt::Debug for SchemaOperations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaOperations")
            .field("dialect", &self.dialect)
            .field("translator", &self.translator)
            .finish()
    }
}

impl SchemaOperations {
    pub fn new(
        dialect: Box<dyn Dialect>,
        translator: Box<dyn ExceptionTranslator>,
        provider: Arc<dyn ConnectionProvider>,
    ) -> Self {
        Self {
            dialect,
            translator,
            provider,
        }
    }

    /// Build the dialect and translator a configuration selects
    ///
    /// # Returns
    /// * `Ok(SchemaOperations)` bound to `provider`
    /// * `Err(CatalogError::InvalidParameters)` if the configuration is incomplete
    pub fn from_config(
        config: &CatalogConfig,
        provider: Arc<dyn ConnectionProvider>,
    ) -> CatalogResult<Self> {
        let dialect = create_dialect(config)?;
        let translator = create_translator(config);
        log::debug!("Schema operations configured for {}", config.dialect);
        Ok(Self::new(dialect, translator, provider))
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    /// User-visible schema names, in backend order, system namespaces removed
    pub fn list_schemas(&self) -> CatalogResult<Vec<String>> {
        let mut conn = self.acquire()?;
        self.list_with(&mut *conn)
    }

    /// Load one schema by exact name
    ///
    /// Matches against the same filtered listing `list_schemas` returns, so
    /// the two never disagree about what exists.
    ///
    /// # Returns
    /// * `Ok(Schema)` with the stored comment when the dialect keeps one
    /// * `Err(CatalogError::NoSuchSchema)` if the name is absent or reserved
    pub fn load_schema(&self, name: &str) -> CatalogResult<Schema> {
        let mut conn = self.acquire()?;
        let found = self
            .list_with(&mut *conn)?
            .into_iter()
            .find(|candidate| candidate == name)
            .ok_or_else(|| CatalogError::no_such_schema(name))?;

        let comment = match self.dialect.load_comment_sql(&found) {
            Some(sql) => {
                log::debug!("Loading comment of schema '{}': {}", found, sql);
                conn.query(&sql)
                    .map_err(|e| self.translate(e, &found))?
                    .next()
                    .and_then(|row| row.get_string(0).map(str::to_string))
            }
            None => None,
        };

        Ok(Schema::new(found).with_comment(comment))
    }

    /// Whether `name` is a user-visible schema
    pub fn schema_exists(&self, name: &str) -> CatalogResult<bool> {
        Ok(self.list_schemas()?.iter().any(|candidate| candidate == name))
    }

    /// Create a schema
    ///
    /// A `comment` entry in `properties` is stored as the schema comment on
    /// dialects that support one; otherwise the dialect's comment policy
    /// decides between rejecting the request and dropping the comment.
    ///
    /// # Returns
    /// * `Ok(Schema)` describing what the backend now stores
    /// * `Err(CatalogError::ReservedNamespace)` for system namespace names
    /// * `Err(CatalogError::UnsupportedOperation)` for comments or properties the dialect refuses
    /// * `Err(CatalogError::SchemaAlreadyExists)` if the backend reports a duplicate
    pub fn create_schema(
        &self,
        name: &str,
        properties: &HashMap<String, String>,
    ) -> CatalogResult<Schema> {
        self.check_mutable(name)?;

        let mut properties = properties.clone();
        let mut comment = properties.remove(COMMENT_KEY).filter(|c| !c.is_empty());
        if comment.is_some() && !self.dialect.supports_namespace_comment() {
            match self.dialect.unsupported_comment_policy() {
                CommentPolicy::Reject => {
                    return Err(CatalogError::UnsupportedOperation(format!(
                        "{} does not support schema comments, cannot create '{}' with one",
                        self.dialect.kind(),
                        name
                    )));
                }
                CommentPolicy::Discard => {
                    log::warn!(
                        "{} does not support schema comments, discarding comment of '{}'",
                        self.dialect.kind(),
                        name
                    );
                    comment = None;
                }
            }
        }

        let statements = self
            .dialect
            .generate_create_sql(name, comment.as_deref(), &properties)?;

        let mut conn = self.acquire()?;
        if statements.len() > 1 && self.dialect.transactional_ddl() {
            self.execute_atomically(&mut *conn, name, &statements)?;
        } else {
            for sql in &statements {
                log::debug!("Executing: {}", sql);
                conn.execute(sql).map_err(|e| self.translate(e, name))?;
            }
        }
        log::info!("Created schema '{}' on {}", name, self.dialect.kind());

        Ok(Schema::new(name)
            .with_comment(comment)
            .with_properties(properties))
    }

    /// Drop a schema
    ///
    /// Without `cascade` the schema is first probed for child objects and the
    /// drop is refused if any exist. The probe and the drop are separate
    /// statements, so a table created in between can still be lost on
    /// backends whose drop does not re-check; dialects that can express a
    /// restricting drop emit one so the backend has the final say.
    ///
    /// # Returns
    /// * `Ok(true)` when the schema was dropped
    /// * `Ok(false)` when it did not exist, in either mode; a missing-schema
    ///   error classified from message text only counts once a fresh listing
    ///   confirms the schema is gone
    /// * `Err(CatalogError::SchemaNotEmpty)` when children exist and `cascade` is false
    /// * `Err(CatalogError::ReservedNamespace)` for system namespace names
    pub fn drop_schema(&self, name: &str, cascade: bool) -> CatalogResult<bool> {
        self.check_mutable(name)?;

        let drop_sql = self.dialect.generate_drop_sql(name, cascade);
        let mut conn = self.acquire()?;
        match self.drop_with(&mut *conn, name, cascade, &drop_sql) {
            Ok(()) => {
                log::info!(
                    "Dropped schema '{}' on {} (cascade: {})",
                    name,
                    self.dialect.kind(),
                    cascade
                );
                Ok(true)
            }
            Err(e @ CatalogError::NoSuchSchema { .. }) => {
                // A guess from message text must be confirmed before reporting "absent"
                if e.is_heuristic() && self.still_listed(&mut *conn, name) {
                    return Err(e);
                }
                log::info!("Schema '{}' does not exist, nothing to drop", name);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Whether `name` is one of the backend's own namespaces
    pub fn is_system_namespace(&self, name: &str) -> bool {
        self.dialect.is_system_namespace(name)
    }

    fn drop_with(
        &self,
        conn: &mut dyn Connection,
        name: &str,
        cascade: bool,
        drop_sql: &str,
    ) -> CatalogResult<()> {
        if !cascade {
            let probe = self.dialect.probe_children_sql(name);
            log::debug!("Probing schema '{}' for objects: {}", name, probe);
            let mut rows = conn.query(&probe).map_err(|e| self.translate(e, name))?;
            if rows.next().is_some() {
                return Err(CatalogError::schema_not_empty(name));
            }
        }

        log::debug!("Executing: {}", drop_sql);
        conn.execute(drop_sql).map_err(|e| self.translate(e, name))?;
        Ok(())
    }

    /// Run `statements` in one transaction, rolling back on the first failure
    fn execute_atomically(
        &self,
        conn: &mut dyn Connection,
        name: &str,
        statements: &[String],
    ) -> CatalogResult<()> {
        conn.execute(BEGIN).map_err(|e| self.translate(e, name))?;
        for sql in statements {
            log::debug!("Executing: {}", sql);
            if let Err(e) = conn.execute(sql) {
                let error = self.translate(e, name);
                if let Err(rollback) = conn.execute(ROLLBACK) {
                    log::warn!("Rollback after failed create of '{}' failed: {}", name, rollback);
                }
                return Err(error);
            }
        }
        conn.execute(COMMIT).map_err(|e| self.translate(e, name))?;
        Ok(())
    }

    /// Whether `name` still shows up in the listing; `true` when that can't be told
    fn still_listed(&self, conn: &mut dyn Connection, name: &str) -> bool {
        let wanted = self.dialect.normalize_for_comparison(name);
        match self.list_with(conn) {
            Ok(names) => names
                .iter()
                .any(|candidate| self.dialect.normalize_for_comparison(candidate) == wanted),
            Err(e) => {
                log::warn!("Could not confirm that schema '{}' is absent: {}", name, e);
                true
            }
        }
    }

    fn list_with(&self, conn: &mut dyn Connection) -> CatalogResult<Vec<String>> {
        let sql = self.dialect.list_schemas_sql();
        let rows = conn
            .query(&sql)
            .map_err(|e| self.translate(e, ALL_SCHEMAS))?;

        let names: Vec<String> = rows
            .filter_map(|row| row.get_string(0).map(str::to_string))
            .filter(|name| !self.dialect.is_system_namespace(name))
            .collect();
        log::debug!("Listed {} schemas on {}", names.len(), self.dialect.kind());
        Ok(names)
    }

    fn check_mutable(&self, name: &str) -> CatalogResult<()> {
        if name.trim().is_empty() {
            return Err(CatalogError::InvalidParameters(
                "Schema name must not be empty".to_string(),
            ));
        }
        if self.dialect.is_system_namespace(name) {
            return Err(CatalogError::ReservedNamespace(name.to_string()));
        }
        Ok(())
    }

    fn acquire(&self) -> CatalogResult<Box<dyn Connection + '_>> {
        self.provider.acquire().map_err(|e| {
            log::warn!("Failed to acquire {} connection: {}", self.dialect.kind(), e);
            CatalogError::connection(e)
        })
    }

    fn translate(&self, error: NativeError, schema: &str) -> CatalogError {
        let translated = self.translator.translate(error, schema);
        log::debug!("Backend failure on '{}' translated to {:?}", schema, translated.kind());
        translated
    }
}
