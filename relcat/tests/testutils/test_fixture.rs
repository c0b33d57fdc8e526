// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Fixture pairing a `MemoryBackend` with the `SchemaOperations` driving it

use relcat::{
    CatalogConfig, CatalogResult, DialectKind, ErrorKind, MemoryBackend, Schema,
    SchemaOperations, COMMENT_KEY,
};
use std::collections::HashMap;
use std::sync::Arc;

pub const PG_DATABASE: &str = "warehouse";

pub struct TestFixture {
    pub backend: Arc<MemoryBackend>,
    pub ops: SchemaOperations,
}

impl TestFixture {
    pub fn new(kind: DialectKind) -> Self {
        init_logging();
        let (backend, config) = match kind {
            DialectKind::MySql => (MemoryBackend::mysql(), CatalogConfig::for_dialect(kind)),
            DialectKind::PostgreSql => (
                MemoryBackend::postgres(PG_DATABASE),
                CatalogConfig::postgres(PG_DATABASE),
            ),
            DialectKind::Doris => (MemoryBackend::doris(), CatalogConfig::for_dialect(kind)),
        };
        let backend = Arc::new(backend);
        let ops = SchemaOperations::from_config(&config, backend.clone())
            .expect("Failed to configure schema operations");
        Self { backend, ops }
    }

    pub fn mysql() -> Self {
        Self::new(DialectKind::MySql)
    }

    pub fn postgres() -> Self {
        Self::new(DialectKind::PostgreSql)
    }

    pub fn doris() -> Self {
        Self::new(DialectKind::Doris)
    }

    /// One fixture per supported dialect
    pub fn all() -> Vec<Self> {
        vec![Self::mysql(), Self::postgres(), Self::doris()]
    }

    pub fn kind(&self) -> DialectKind {
        self.ops.dialect().kind()
    }

    pub fn create(&self, name: &str) -> CatalogResult<Schema> {
        self.ops.create_schema(name, &HashMap::new())
    }

    pub fn create_with_comment(&self, name: &str, comment: &str) -> CatalogResult<Schema> {
        let mut properties = HashMap::new();
        properties.insert(COMMENT_KEY.to_string(), comment.to_string());
        self.ops.create_schema(name, &properties)
    }

    pub fn assert_fails_with<T: std::fmt::Debug>(&self, result: CatalogResult<T>, kind: ErrorKind) {
        match result {
            Ok(value) => panic!("{}: expected {:?}, got Ok({:?})", self.kind(), kind, value),
            Err(e) => assert_eq!(e.kind(), kind, "{}: unexpected error {}", self.kind(), e),
        }
    }

    /// Every connection handed out has been returned
    pub fn assert_connections_released(&self) {
        assert_eq!(
            self.backend.open_connections(),
            0,
            "{}: connection leaked",
            self.kind()
        );
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
