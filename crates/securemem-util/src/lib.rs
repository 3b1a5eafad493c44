// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Secure wipe primitive and zeroization verification helpers.
//!
//! Every write performed by this crate goes through `core::ptr::write_volatile`
//! and is followed by a `compiler_fence`, so the optimizer cannot treat the
//! zeroing as a dead store even when the memory is freed right after.
//!
//! # Example
//!
//! ```
//! use securemem_util::{is_slice_zeroized, wipe_slice};
//!
//! let mut password = *b"hunter2";
//! wipe_slice(&mut password);
//! assert!(is_slice_zeroized(&password));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

use alloc::vec::Vec;
use core::ptr;
use core::sync::atomic::{Ordering, compiler_fence};

#[cfg(test)]
mod tests;

/// Overwrites `len` bytes starting at `ptr` with zeros.
///
/// Each byte is written with a volatile store, so the wipe survives
/// dead-store elimination. A null `ptr` or a `len` of zero returns
/// immediately without touching memory. Calling it twice is harmless.
///
/// # Safety
///
/// When `ptr` is non-null it must be valid for writes of `len` bytes.
///
/// # Example
///
/// ```
/// use securemem_util::secure_wipe;
///
/// let mut key = [0xAAu8; 16];
/// unsafe { secure_wipe(key.as_mut_ptr(), key.len()) };
/// assert_eq!(key, [0u8; 16]);
///
/// // Null pointers are ignored.
/// unsafe { secure_wipe(core::ptr::null_mut(), 16) };
/// ```
#[inline(never)]
pub unsafe fn secure_wipe(ptr: *mut u8, len: usize) {
    if ptr.is_null() || len == 0 {
        return;
    }

    for i in 0..len {
        // SAFETY: caller guarantees `ptr` is valid for `len` bytes.
        unsafe {
            ptr::write_volatile(ptr.add(i), 0);
        }
    }

    compiler_fence(Ordering::SeqCst);
}

/// Wipes every byte of `slice`.
///
/// Safe wrapper over [`secure_wipe`].
///
/// # Example
///
/// ```
/// use securemem_util::wipe_slice;
///
/// let mut data = vec![1u8, 2, 3];
/// wipe_slice(&mut data);
/// assert_eq!(data, vec![0, 0, 0]);
/// ```
#[inline(always)]
pub fn wipe_slice(slice: &mut [u8]) {
    // SAFETY: a mutable slice is valid for writes of its own length.
    unsafe { secure_wipe(slice.as_mut_ptr(), slice.len()) }
}

/// Wipes the whole allocation of `vec`, from index 0 to `capacity()`.
///
/// Spare capacity left behind by `truncate()` or `clear()` still holds the
/// old bytes, so wiping only `0..len` is not enough. The length of the vector
/// is not changed.
///
/// # Example
///
/// ```
/// use securemem_util::wipe_vec;
///
/// let mut vec = vec![0xFFu8; 32];
/// vec.truncate(4);
/// wipe_vec(&mut vec);
/// assert_eq!(vec, vec![0u8; 4]);
/// ```
#[inline(always)]
pub fn wipe_vec(vec: &mut Vec<u8>) {
    // SAFETY: the allocation backing `vec` is valid for `capacity()` bytes,
    // and zero is a valid `u8` for the spare region.
    unsafe { secure_wipe(vec.as_mut_ptr(), vec.capacity()) }
}

/// Returns `true` when every byte of `slice` is zero.
///
/// ```
/// use securemem_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 8]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0]));
/// assert!(is_slice_zeroized(&[]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Verifies that a `Vec<u8>` is fully zeroized, including spare capacity.
///
/// Reads the entire allocation (0 to capacity), not only the active elements.
///
/// # Example
///
/// ```
/// use securemem_util::{is_vec_fully_zeroized, wipe_vec};
///
/// let mut vec = vec![1u8, 2, 3, 4, 5];
/// vec.truncate(2);
/// vec.iter_mut().for_each(|b| *b = 0);
///
/// // Spare capacity [2..5] still contains old data
/// assert!(!is_vec_fully_zeroized(&vec));
///
/// wipe_vec(&mut vec);
/// assert!(is_vec_fully_zeroized(&vec));
/// ```
#[cfg(any(test, feature = "test-utils"))]
#[inline(never)]
pub fn is_vec_fully_zeroized(vec: &Vec<u8>) -> bool {
    let base = vec.as_ptr();

    for i in 0..vec.capacity() {
        // SAFETY: `i < capacity` and we only read bytes.
        unsafe {
            if ptr::read_volatile(base.add(i)) != 0 {
                return false;
            }
        }
    }

    true
}

/// Fills a byte slice with a repeating pattern byte.
///
/// Used by tests to plant recognisable data before checking it gets wiped.
///
/// ```
/// use securemem_util::fill_bytes_with_pattern;
///
/// let mut buffer = [0u8; 4];
/// fill_bytes_with_pattern(&mut buffer, 0xAB);
/// assert_eq!(buffer, [0xAB; 4]);
/// ```
#[cfg(any(test, feature = "test-utils"))]
#[inline]
pub fn fill_bytes_with_pattern(slice: &mut [u8], pattern: u8) {
    for byte in slice.iter_mut() {
        *byte = pattern;
    }
}
