// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Allocation and hand-off of wiped storage, shared by both containers.

use alloc::vec::Vec;
use core::mem;

use securemem_util::wipe_vec;

use crate::error::SecureAllocError;

/// Allocates `len` zeroed bytes without aborting on allocator failure.
///
/// The capacity is reserved up front, so the zero fill never reallocates.
pub(crate) fn try_alloc_zeroed(len: usize) -> Result<Vec<u8>, SecureAllocError> {
    let mut storage = Vec::new();

    storage.try_reserve_exact(len).map_err(|_| {
        log::debug!("secure allocation of {len} bytes failed");
        SecureAllocError::AllocationFailure { requested: len }
    })?;
    storage.resize(len, 0);

    Ok(storage)
}

/// Moves the allocation out of `src`, leaving it empty and wiped.
///
/// Only the pointer changes hands. `src` is wiped right away rather than at
/// its own drop, and ends up with no allocation and a length of 0.
pub(crate) fn transfer(src: &mut Vec<u8>) -> Vec<u8> {
    let moved = mem::take(src);

    wipe_vec(src);
    log::trace!("moved {} bytes of secure storage", moved.len());

    moved
}
