// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Doris error translation
//!
//! Doris speaks the MySQL protocol but reports most analysis failures as the
//! generic code 1105 with an `errCode = N, detailMessage = ...` text, so the
//! message has to be read to classify them.

use super::mysql::{classify_code, classify_message, ER_UNKNOWN_ERROR};
use super::traits::{classified, ExceptionTranslator};
use crate::catalog::error::{CatalogError, Classification, ErrorKind};
use crate::connection::NativeError;

#[derive(Debug, Clone)]
pub struct DorisExceptionTranslator {
    warn_on_heuristic: bool,
}

impl DorisExceptionTranslator {
    pub fn new(warn_on_heuristic: bool) -> Self {
        Self { warn_on_heuristic }
    }
}

impl ExceptionTranslator for DorisExceptionTranslator {
    fn translate(&self, error: NativeError, schema: &str) -> CatalogError {
        if let Some(kind) = error.code.and_then(classify_code) {
            return classified(kind, Classification::Confident, schema, error, false);
        }
        if error.sql_state_class() == Some("08") {
            return classified(
                ErrorKind::Connection,
                Classification::Confident,
                schema,
                error,
                false,
            );
        }

        let generic = matches!(error.code, None | Some(ER_UNKNOWN_ERROR));
        if generic {
            if let Some(kind) = classify_message(&error.message) {
                return classified(
                    kind,
                    Classification::Heuristic,
                    schema,
                    error,
                    self.warn_on_heuristic,
                );
            }
        }
        CatalogError::Backend { cause: error }
    }
}
