// ABOUTME: Utility module organization for shared helpers
// ABOUTME: Currently hosts the shared HTTP client factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Utility functions and helpers

/// Shared HTTP client construction
pub mod http_client;
