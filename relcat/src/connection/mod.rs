// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Backend connection boundary
//!
//! This module defines the only surface relcat needs from a SQL driver:
//! - Scoped connection acquisition (`ConnectionProvider`), released on drop
//! - Statement execution and row iteration (`Connection`, `ResultSet`)
//! - Driver-level failures with vendor code and SQLSTATE (`NativeError`)
//!
//! Pooling, credentials and retries live behind `ConnectionProvider` and are
//! not modelled here. `MemoryBackend` is an in-process backend that speaks the
//! statement shapes of the bundled dialects, for tests and demos.

pub mod memory;
pub mod traits;
pub mod types;

pub use memory::{BackendFlavor, MemoryBackend};
pub use traits::{Connection, ConnectionProvider};
pub use types::{NativeError, NativeResult, ResultSet, Row};
