// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Schema lifecycle tests run against every dialect
//!
//! Each test builds its own fixture, so they can run in parallel.

#[path = "testutils/mod.rs"]
mod testutils;

use relcat::{
    CatalogManager, DialectKind, ErrorKind, NativeError, SchemaOperation, SchemaResponse,
    COMMENT_KEY,
};
use std::collections::HashMap;
use std::sync::Arc;
use testutils::test_fixture::TestFixture;

#[test]
fn test_create_then_list_load_drop_on_every_dialect() {
    for fixture in TestFixture::all() {
        let created = fixture.create("analytics").expect("create failed");
        assert_eq!(created.name(), "analytics");

        let names = fixture.ops.list_schemas().unwrap();
        assert!(names.contains(&"analytics".to_string()), "{}", fixture.kind());
        assert!(fixture.ops.schema_exists("analytics").unwrap());

        let loaded = fixture.ops.load_schema("analytics").unwrap();
        assert_eq!(loaded.name(), "analytics");
        assert!(loaded.audit_info().is_empty());

        assert!(fixture.ops.drop_schema("analytics", false).unwrap());
        assert!(!fixture.ops.schema_exists("analytics").unwrap());
        fixture.assert_fails_with(fixture.ops.load_schema("analytics"), ErrorKind::NoSuchSchema);

        fixture.assert_connections_released();
    }
}

#[test]
fn test_listing_never_shows_system_namespaces() {
    for fixture in TestFixture::all() {
        for name in fixture.ops.list_schemas().unwrap() {
            assert!(
                !fixture.ops.is_system_namespace(&name),
                "{} listed system namespace {}",
                fixture.kind(),
                name
            );
        }
    }
}

#[test]
fn test_system_namespace_filter_ignores_case_where_backend_does() {
    for fixture in [TestFixture::mysql(), TestFixture::doris()] {
        fixture.backend.add_namespace("INFORMATION_SCHEMA");
        fixture.backend.add_namespace("Mysql");
        assert!(fixture.ops.list_schemas().unwrap().is_empty(), "{}", fixture.kind());
        fixture.assert_fails_with(fixture.ops.load_schema("Mysql"), ErrorKind::NoSuchSchema);
    }

    // PostgreSQL folds unquoted names itself; a quoted upper-case schema is a user schema
    let pg = TestFixture::postgres();
    pg.backend.add_namespace("PG_CATALOG");
    assert_eq!(
        pg.ops.list_schemas().unwrap(),
        vec!["PG_CATALOG".to_string(), "public".to_string()]
    );
}

#[test]
fn test_reserved_names_refused_without_touching_backend() {
    for fixture in TestFixture::all() {
        fixture.assert_fails_with(fixture.create("information_schema"), ErrorKind::ReservedNamespace);
        fixture.assert_fails_with(
            fixture.ops.drop_schema("information_schema", true),
            ErrorKind::ReservedNamespace,
        );
        assert_eq!(fixture.backend.acquired_total(), 0, "{}", fixture.kind());
    }
}

#[test]
fn test_duplicate_create_reports_already_exists() {
    for fixture in TestFixture::all() {
        fixture.create("dup").unwrap();
        let err = fixture.create("dup").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaAlreadyExists, "{}", fixture.kind());
        assert!(err.native_cause().is_some());
        // Doris only reports a generic code, so the classification is a guess
        assert_eq!(err.is_heuristic(), fixture.kind() == DialectKind::Doris);
        fixture.assert_connections_released();
    }
}

#[test]
fn test_non_cascade_drop_refuses_schema_with_tables() {
    for fixture in TestFixture::all() {
        fixture.create("busy").unwrap();
        fixture.backend.create_table("busy", "orders").unwrap();

        fixture.assert_fails_with(fixture.ops.drop_schema("busy", false), ErrorKind::SchemaNotEmpty);
        assert!(fixture.backend.has_namespace("busy"), "{}", fixture.kind());

        assert!(fixture.ops.drop_schema("busy", true).unwrap());
        assert!(!fixture.backend.has_namespace("busy"));
        fixture.assert_connections_released();
    }
}

#[test]
fn test_drop_of_missing_schema_is_false_in_both_modes() {
    for fixture in TestFixture::all() {
        assert!(!fixture.ops.drop_schema("ghost", false).unwrap(), "{}", fixture.kind());
        assert!(!fixture.ops.drop_schema("ghost", true).unwrap(), "{}", fixture.kind());
        fixture.assert_connections_released();
    }
}

#[test]
fn test_second_cascade_drop_reports_false() {
    for fixture in TestFixture::all() {
        fixture.create("transient").unwrap();
        fixture.backend.create_table("transient", "events").unwrap();

        assert!(fixture.ops.drop_schema("transient", true).unwrap(), "{}", fixture.kind());
        assert!(!fixture.ops.drop_schema("transient", true).unwrap(), "{}", fixture.kind());
        assert!(!fixture.ops.schema_exists("transient").unwrap());
        fixture.assert_connections_released();
    }
}

#[test]
fn test_failed_comment_leaves_no_schema_behind() {
    let fixture = TestFixture::postgres();
    fixture.backend.fail_statement(
        "COMMENT ON",
        NativeError::new("permission denied for schema finance").with_sql_state("42501"),
    );

    fixture.assert_fails_with(
        fixture.create_with_comment("finance", "Ledger tables"),
        ErrorKind::Backend,
    );
    assert!(!fixture.ops.schema_exists("finance").unwrap());

    // the retry starts from a clean slate
    let schema = fixture.create_with_comment("finance", "Ledger tables").unwrap();
    assert_eq!(schema.comment(), Some("Ledger tables"));
    fixture.assert_connections_released();
}

#[test]
fn test_postgres_restrict_catches_table_created_after_probe() {
    let fixture = TestFixture::postgres();
    fixture.create("sales").unwrap();
    fixture
        .backend
        .interleave_table_creation("DROP SCHEMA", "sales", "late_orders");

    let err = fixture.ops.drop_schema("sales", false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaNotEmpty);
    assert!(!err.is_heuristic());
    assert!(fixture.backend.has_namespace("sales"));
    fixture.assert_connections_released();
}

#[test]
fn test_mysql_drop_cannot_restrict_after_probe() {
    let fixture = TestFixture::mysql();
    fixture.create("sales").unwrap();
    fixture
        .backend
        .interleave_table_creation("DROP DATABASE", "sales", "late_orders");

    // MySQL has no restricting drop, so the late table goes with the database
    assert!(fixture.ops.drop_schema("sales", false).unwrap());
    assert!(!fixture.backend.has_namespace("sales"));
}

#[test]
fn test_comment_handling_follows_dialect() {
    let pg = TestFixture::postgres();
    let schema = pg.create_with_comment("finance", "Ledger tables").unwrap();
    assert_eq!(schema.comment(), Some("Ledger tables"));
    assert_eq!(
        pg.ops.load_schema("finance").unwrap().comment(),
        Some("Ledger tables")
    );

    let mysql = TestFixture::mysql();
    mysql.assert_fails_with(
        mysql.create_with_comment("finance", "Ledger tables"),
        ErrorKind::UnsupportedOperation,
    );
    assert!(!mysql.backend.has_namespace("finance"));
    assert_eq!(mysql.backend.acquired_total(), 0);

    let doris = TestFixture::doris();
    let schema = doris.create_with_comment("finance", "Ledger tables").unwrap();
    assert_eq!(schema.comment(), None);
    assert!(doris.backend.has_namespace("finance"));
    assert!(!doris.backend.properties_of("finance").contains_key(COMMENT_KEY));
}

#[test]
fn test_doris_properties_reach_backend() {
    let fixture = TestFixture::doris();
    let mut properties = HashMap::new();
    properties.insert("replication_num".to_string(), "3".to_string());
    properties.insert("storage_medium".to_string(), "SSD".to_string());

    let schema = fixture.ops.create_schema("events", &properties).unwrap();
    assert_eq!(schema.properties(), &properties);

    let stored = fixture.backend.properties_of("events");
    assert_eq!(stored.get("replication_num").map(String::as_str), Some("3"));
    assert_eq!(stored.get("storage_medium").map(String::as_str), Some("SSD"));
}

#[test]
fn test_properties_rejected_where_unsupported() {
    let mut properties = HashMap::new();
    properties.insert("owner".to_string(), "etl".to_string());

    for fixture in [TestFixture::mysql(), TestFixture::postgres()] {
        fixture.assert_fails_with(
            fixture.ops.create_schema("events", &properties),
            ErrorKind::UnsupportedOperation,
        );
        assert!(!fixture.backend.has_namespace("events"));
    }
}

#[test]
fn test_manager_routes_requests_to_the_right_backend() {
    let manager = CatalogManager::new();
    let mysql = TestFixture::mysql();
    let pg = TestFixture::postgres();
    let (mysql_backend, pg_backend) = (Arc::clone(&mysql.backend), Arc::clone(&pg.backend));
    manager.register("orders", mysql.ops);
    manager.register("finance", pg.ops);

    let response = manager
        .execute(
            "finance",
            SchemaOperation::Create {
                name: "ledger".to_string(),
                comment: Some("General ledger".to_string()),
                properties: HashMap::new(),
            },
        )
        .unwrap();
    assert_eq!(response.schema().and_then(|s| s.comment()), Some("General ledger"));
    assert!(pg_backend.has_namespace("ledger"));
    assert!(!mysql_backend.has_namespace("ledger"));

    let response = manager.execute("orders", SchemaOperation::List).unwrap();
    assert_eq!(response, SchemaResponse::Names(Vec::new()));

    let response = manager
        .execute(
            "finance",
            SchemaOperation::Drop {
                name: "ledger".to_string(),
                cascade: false,
            },
        )
        .unwrap();
    assert_eq!(response, SchemaResponse::Dropped(true));

    let err = manager.execute("billing", SchemaOperation::List).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CatalogNotFound);
}
