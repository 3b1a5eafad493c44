// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for securemem-alloc.

use thiserror::Error;

/// Error returned when a secure container cannot be constructed.
///
/// Construction is the only fallible operation: wiping, moving and the
/// accessors never fail.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum SecureAllocError {
    /// The allocator could not provide the requested storage.
    ///
    /// `requested` is `usize::MAX` when the byte count itself overflowed.
    #[error("failed to allocate {requested} bytes of secure storage")]
    AllocationFailure {
        /// Number of bytes that were requested.
        requested: usize,
    },
}
