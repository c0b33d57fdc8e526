// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Translator trait and the shared mapping onto `CatalogError`

use crate::catalog::error::{CatalogError, Classification, ErrorKind};
use crate::connection::NativeError;
use std::fmt::Debug;

/// Maps native driver failures onto the uniform error taxonomy
pub trait ExceptionTranslator: Send + Sync + Debug {
    /// Translate a driver failure raised while operating on `schema`
    ///
    /// Never fails. Anything that cannot be classified becomes
    /// `CatalogError::Backend` wrapping `error` verbatim.
    fn translate(&self, error: NativeError, schema: &str) -> CatalogError;
}

/// Build the taxonomy variant for a classified native error
///
/// Only the schema-level kinds, `Connection` and `Backend` come out of a
/// translator; any other kind falls back to `Backend`.
pub(crate) fn classified(
    kind: ErrorKind,
    classification: Classification,
    schema: &str,
    cause: NativeError,
    warn_on_heuristic: bool,
) -> CatalogError {
    if classification == Classification::Heuristic && warn_on_heuristic {
        log::warn!(
            "Classified backend error as {:?} from its message only (schema '{}'): {}",
            kind,
            schema,
            cause
        );
    }

    let name = schema.to_string();
    match kind {
        ErrorKind::NoSuchSchema => CatalogError::NoSuchSchema {
            name,
            classification,
            cause: Some(cause),
        },
        ErrorKind::SchemaAlreadyExists => CatalogError::SchemaAlreadyExists {
            name,
            classification,
            cause: Some(cause),
        },
        ErrorKind::SchemaNotEmpty => CatalogError::SchemaNotEmpty {
            name,
            classification,
            cause: Some(cause),
        },
        ErrorKind::Connection => CatalogError::Connection {
            message: cause.message.clone(),
            classification,
            cause: Some(cause),
        },
        _ => CatalogError::Backend { cause },
    }
}
