// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Connection traits
//!
//! All backend drivers plug into relcat by implementing these two traits.

use super::types::{NativeResult, ResultSet};

/// A live connection to a backend
///
/// A connection is used by exactly one logical catalog operation and is
/// returned to its provider when dropped.
pub trait Connection: Send {
    /// Execute a statement that produces no rows
    ///
    /// # Returns
    /// * `Ok(u64)` with the number of affected rows (0 for DDL)
    /// * `Err(NativeError)` with the driver's diagnostic
    fn execute(&mut self, sql: &str) -> NativeResult<u64>;

    /// Execute a query and return its rows
    fn query(&mut self, sql: &str) -> NativeResult<ResultSet>;
}

/// Source of scoped connections
///
/// Implementations own pooling and credentials. The returned box releases the
/// connection when it goes out of scope, so callers never release explicitly.
pub trait ConnectionProvider: Send + Sync {
    /// Acquire a connection for the duration of one operation
    fn acquire(&self) -> NativeResult<Box<dyn Connection + '_>>;
}
