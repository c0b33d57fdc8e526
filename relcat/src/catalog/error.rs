// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Uniform error taxonomy for catalog operations
//!
//! Every backend failure reaches callers as one of these variants, whatever
//! dialect produced it. Translated variants keep the driver error as their
//! `source()` and record how confidently they were classified.

use crate::connection::NativeError;
use thiserror::Error;

/// How a backend failure was mapped onto a taxonomy kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Structured error code or SQLSTATE, or a local pre-check
    Confident,
    /// Matched on message text only
    Heuristic,
}

/// Discriminant of `CatalogError`, for callers that branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoSuchSchema,
    SchemaAlreadyExists,
    SchemaNotEmpty,
    Connection,
    Backend,
    ReservedNamespace,
    UnsupportedOperation,
    InvalidParameters,
    CatalogNotFound,
}

#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Schema {name} does not exist")]
    NoSuchSchema {
        name: String,
        classification: Classification,
        #[source]
        cause: Option<NativeError>,
    },

    #[error("Schema {name} already exists")]
    SchemaAlreadyExists {
        name: String,
        classification: Classification,
        #[source]
        cause: Option<NativeError>,
    },

    #[error("Schema {name} is not empty, drop it with cascade to remove its objects")]
    SchemaNotEmpty {
        name: String,
        classification: Classification,
        #[source]
        cause: Option<NativeError>,
    },

    #[error("Connection error: {message}")]
    Connection {
        message: String,
        classification: Classification,
        #[source]
        cause: Option<NativeError>,
    },

    #[error("Backend error: {cause}")]
    Backend {
        #[source]
        cause: NativeError,
    },

    #[error("Schema {0} is a system namespace and cannot be modified")]
    ReservedNamespace(String),

    #[error("Not supported: {0}")]
    UnsupportedOperation(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Catalog not found: {0}")]
    CatalogNotFound(String),
}

impl CatalogError {
    /// A schema that is absent, detected without a backend error
    pub fn no_such_schema<S: Into<String>>(name: S) -> Self {
        CatalogError::NoSuchSchema {
            name: name.into(),
            classification: Classification::Confident,
            cause: None,
        }
    }

    /// A non-empty schema found by the local emptiness probe
    pub fn schema_not_empty<S: Into<String>>(name: S) -> Self {
        CatalogError::SchemaNotEmpty {
            name: name.into(),
            classification: Classification::Confident,
            cause: None,
        }
    }

    /// Failure to obtain a connection from the provider
    pub fn connection(cause: NativeError) -> Self {
        CatalogError::Connection {
            message: cause.message.clone(),
            classification: Classification::Confident,
            cause: Some(cause),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NoSuchSchema { .. } => ErrorKind::NoSuchSchema,
            CatalogError::SchemaAlreadyExists { .. } => ErrorKind::SchemaAlreadyExists,
            CatalogError::SchemaNotEmpty { .. } => ErrorKind::SchemaNotEmpty,
            CatalogError::Connection { .. } => ErrorKind::Connection,
            CatalogError::Backend { .. } => ErrorKind::Backend,
            CatalogError::ReservedNamespace(_) => ErrorKind::ReservedNamespace,
            CatalogError::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            CatalogError::InvalidParameters(_) => ErrorKind::InvalidParameters,
            CatalogError::CatalogNotFound(_) => ErrorKind::CatalogNotFound,
        }
    }

    /// `Heuristic` only for message-pattern translations
    pub fn classification(&self) -> Classification {
        match self {
            CatalogError::NoSuchSchema { classification, .. }
            | CatalogError::SchemaAlreadyExists { classification, .. }
            | CatalogError::SchemaNotEmpty { classification, .. }
            | CatalogError::Connection { classification, .. } => *classification,
            _ => Classification::Confident,
        }
    }

    /// The driver error this was translated from, if any
    pub fn native_cause(&self) -> Option<&NativeError> {
        match self {
            CatalogError::NoSuchSchema { cause, .. }
            | CatalogError::SchemaAlreadyExists { cause, .. }
            | CatalogError::SchemaNotEmpty { cause, .. }
            | CatalogError::Connection { cause, .. } => cause.as_ref(),
            CatalogError::Backend { cause } => Some(cause),
            _ => None,
        }
    }

    pub fn is_heuristic(&self) -> bool {
        self.classification() == Classification::Heuristic
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
