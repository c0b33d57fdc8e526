// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Test utilities for relcat integration tests
//!
//! Each fixture owns a fresh in-memory backend, so tests never share state.

#![allow(dead_code)]

pub mod test_fixture;
