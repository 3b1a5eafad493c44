// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::fmt;
use core::ptr;

use securemem_util::wipe_vec;
use securemem_zero::{
    AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe, ZeroizeOnDropSentinel,
    assert_zeroize_on_drop,
};

use crate::error::SecureAllocError;
use crate::storage::{transfer, try_alloc_zeroed};

/// A move-only, fixed-size byte buffer that wipes itself on every release.
///
/// - Zero-filled at construction
/// - Never duplicated: no `Clone`, no `Copy`
/// - Wiped before its storage is handed off ([`take`](Self::take)),
///   overwritten ([`move_from`](Self::move_from), [`assign`](Self::assign))
///   or freed (drop)
///
/// A plain Rust move (`let b = a;`) only relocates the pointer and length;
/// the heap bytes are not copied and `a` can no longer be named.
///
/// # Example
///
/// ```rust
/// use securemem_alloc::{SecureAllocError, SecureBuffer};
///
/// fn example() -> Result<(), SecureAllocError> {
///     let mut key = SecureBuffer::new(16)?;
///     assert_eq!(key.size_bytes(), 16);
///     assert!(key.as_slice().iter().all(|&b| b == 0));
///
///     key.as_mut_slice().copy_from_slice(&[0x42; 16]);
///
///     let moved = key.take();
///     assert_eq!(moved.size_bytes(), 16);
///     assert_eq!(key.size_bytes(), 0);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
///
/// Copying is rejected at compile time:
///
/// ```compile_fail
/// use securemem_alloc::SecureBuffer;
///
/// let a = SecureBuffer::new(16).unwrap();
/// let b = a.clone();
/// ```
///
/// So is using a buffer after it has been moved:
///
/// ```compile_fail
/// use securemem_alloc::SecureBuffer;
///
/// let a = SecureBuffer::new(16).unwrap();
/// let b = a;
/// let _ = a.size_bytes();
/// ```
///
/// And moving a buffer into itself:
///
/// ```compile_fail
/// use securemem_alloc::SecureBuffer;
///
/// let mut a = SecureBuffer::new(16).unwrap();
/// a.move_from(&mut a);
/// ```
pub struct SecureBuffer {
    storage: Vec<u8>,
    __sentinel: ZeroizeOnDropSentinel,
}

impl SecureBuffer {
    /// Allocates a zero-filled buffer of `size` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SecureAllocError::AllocationFailure`] if the memory cannot be
    /// obtained. No partially built buffer is ever returned.
    pub fn new(size: usize) -> Result<Self, SecureAllocError> {
        Ok(Self::from_storage(try_alloc_zeroed(size)?))
    }

    fn from_storage(storage: Vec<u8>) -> Self {
        Self {
            storage,
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    /// Returns a read-only pointer to the first byte.
    ///
    /// The pointer is dangling (but non-null) when the buffer is empty.
    #[inline]
    pub fn data_ptr(&self) -> *const u8 {
        self.storage.as_ptr()
    }

    /// Returns a mutable pointer to the first byte.
    #[inline]
    pub fn data_ptr_mut(&mut self) -> *mut u8 {
        self.storage.as_mut_ptr()
    }

    /// Returns the contents as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.storage
    }

    /// Returns the contents as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.storage
    }

    /// Returns the size of the buffer in bytes. 0 once moved from.
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Moves the storage out into a new buffer, leaving `self` empty.
    ///
    /// `self` is wiped and reset on the spot, so it holds no storage and
    /// reports a size of 0. Taking from an empty buffer yields another
    /// empty buffer.
    ///
    /// ```rust
    /// use securemem_alloc::SecureBuffer;
    ///
    /// let mut a = SecureBuffer::new(8).unwrap();
    /// let b = a.take();
    /// assert_eq!(b.size_bytes(), 8);
    /// assert!(a.is_empty());
    /// assert!(a.take().is_empty());
    /// ```
    pub fn take(&mut self) -> Self {
        Self::from_storage(transfer(&mut self.storage))
    }

    /// Replaces the contents of `self` with those of `other`.
    ///
    /// The current contents of `self` are wiped before its storage is freed,
    /// then `other` is emptied exactly as by [`take`](Self::take). Passing
    /// the same buffer twice is a no-op.
    ///
    /// ```rust
    /// use securemem_alloc::SecureBuffer;
    ///
    /// let mut a = SecureBuffer::new(4).unwrap();
    /// let mut b = SecureBuffer::new(32).unwrap();
    ///
    /// a.move_from(&mut b);
    /// assert_eq!(a.size_bytes(), 32);
    /// assert_eq!(b.size_bytes(), 0);
    /// ```
    pub fn move_from(&mut self, other: &mut Self) {
        self.move_from_with(other, |_| {});
    }

    pub(crate) fn move_from_with<F>(&mut self, other: &mut Self, #[allow(unused)] mut hook: F)
    where
        F: FnMut(&Vec<u8>),
    {
        if ptr::eq(&*self, &*other) {
            return;
        }

        wipe_vec(&mut self.storage);

        #[cfg(test)]
        hook(&self.storage);

        // The old allocation is freed here, already wiped.
        self.storage = transfer(&mut other.storage);
    }

    /// Consumes `other` and moves its contents into `self`.
    ///
    /// Same wipe-before-overwrite rule as [`move_from`](Self::move_from).
    pub fn assign(&mut self, mut other: Self) {
        self.move_from(&mut other);
    }
}

impl fmt::Debug for SecureBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureBuffer")
            .field("len", &self.size_bytes())
            .finish_non_exhaustive()
    }
}

impl FastZeroizable for SecureBuffer {
    /// Wipes the contents in place. The size is kept.
    fn fast_zeroize(&mut self) {
        self.storage.fast_zeroize();
        self.__sentinel.fast_zeroize();
    }
}

impl ZeroizationProbe for SecureBuffer {
    fn is_zeroized(&self) -> bool {
        self.storage.is_zeroized()
    }
}

impl AssertZeroizeOnDrop for SecureBuffer {
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }

    fn assert_zeroize_on_drop(self) {
        assert_zeroize_on_drop(self);
    }
}

impl Drop for SecureBuffer {
    fn drop(&mut self) {
        if self.storage.capacity() != 0 {
            log::trace!("SecureBuffer: wiping {} bytes on drop", self.storage.len());
        }

        self.fast_zeroize();
    }
}
