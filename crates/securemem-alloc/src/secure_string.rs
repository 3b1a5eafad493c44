// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::ffi::{CStr, c_char};
use core::fmt;
use core::ptr;

use securemem_util::{wipe_slice, wipe_vec};
use securemem_zero::{
    AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe, ZeroizeOnDropSentinel,
    assert_zeroize_on_drop,
};

use crate::error::SecureAllocError;
use crate::storage::{transfer, try_alloc_zeroed};

/// A move-only, NUL-terminated text secret that wipes itself on every release.
///
/// The storage always ends with one zero terminator while it is non-empty.
/// [`size`](Self::size) is the logical length without the terminator and
/// never underflows: a moved-from string holds no storage and reports 0.
///
/// Release rules are the same as for [`SecureBuffer`](crate::SecureBuffer).
///
/// # Example
///
/// ```rust
/// use securemem_alloc::{SecureAllocError, SecureString};
///
/// fn example() -> Result<(), SecureAllocError> {
///     let mut password = SecureString::try_from("secret")?;
///     assert_eq!(password.size(), 6);
///     assert_eq!(password.c_str(), b"secret\0");
///
///     let moved = password.take();
///     assert_eq!(moved.as_bytes(), b"secret");
///     assert_eq!(password.size(), 0);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
///
/// Copying is rejected at compile time:
///
/// ```compile_fail
/// use securemem_alloc::SecureString;
///
/// let a = SecureString::new(b"secret").unwrap();
/// let b = a.clone();
/// ```
///
/// ```compile_fail
/// use securemem_alloc::SecureString;
///
/// let mut a = SecureString::new(b"secret").unwrap();
/// a.move_from(&mut a);
/// ```
pub struct SecureString {
    storage: Vec<u8>,
    __sentinel: ZeroizeOnDropSentinel,
}

impl SecureString {
    /// Copies `plaintext` into owned storage followed by a zero terminator.
    ///
    /// `plaintext` is left untouched; wiping it is the caller's job (see
    /// [`drain_from`](Self::drain_from) for a variant that does it).
    ///
    /// # Errors
    ///
    /// Returns [`SecureAllocError::AllocationFailure`] if `plaintext.len() + 1`
    /// bytes cannot be allocated.
    pub fn new(plaintext: &[u8]) -> Result<Self, SecureAllocError> {
        let len = plaintext
            .len()
            .checked_add(1)
            .ok_or(SecureAllocError::AllocationFailure {
                requested: usize::MAX,
            })?;

        // Zero-filled, so the terminator at `len - 1` is already in place.
        let mut storage = try_alloc_zeroed(len)?;
        storage[..plaintext.len()].copy_from_slice(plaintext);

        Ok(Self::from_storage(storage))
    }

    /// Like [`new`](Self::new), then wipes `plaintext`.
    ///
    /// On error `plaintext` is left as it was, so the caller can retry.
    ///
    /// ```rust
    /// use securemem_alloc::SecureString;
    ///
    /// let mut typed = *b"hunter2";
    /// let s = SecureString::drain_from(&mut typed).unwrap();
    /// assert_eq!(s.as_bytes(), b"hunter2");
    /// assert_eq!(typed, [0u8; 7]);
    /// ```
    pub fn drain_from(plaintext: &mut [u8]) -> Result<Self, SecureAllocError> {
        let secret = Self::new(plaintext)?;
        wipe_slice(plaintext);

        Ok(secret)
    }

    fn from_storage(storage: Vec<u8>) -> Self {
        Self {
            storage,
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    /// Returns the stored bytes including the trailing terminator.
    ///
    /// Empty once the string has been moved from.
    #[inline]
    pub fn c_str(&self) -> &[u8] {
        &self.storage
    }

    /// Returns the stored bytes without the terminator.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.size()]
    }

    /// Returns the contents as a [`CStr`].
    ///
    /// `None` if the string has been moved from, or if the plaintext
    /// contained an interior NUL byte.
    pub fn as_c_str(&self) -> Option<&CStr> {
        CStr::from_bytes_with_nul(&self.storage).ok()
    }

    /// Returns a pointer to the NUL-terminated bytes for FFI.
    ///
    /// Null once the string has been moved from.
    pub fn as_ptr(&self) -> *const c_char {
        if self.storage.is_empty() {
            return ptr::null();
        }

        self.storage.as_ptr().cast()
    }

    /// Returns the logical length, terminator excluded.
    #[inline]
    pub fn size(&self) -> usize {
        if self.storage.is_empty() {
            0
        } else {
            self.storage.len() - 1
        }
    }

    /// Returns `true` if the logical length is 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Moves the storage out into a new string, leaving `self` empty.
    ///
    /// `self` is wiped and reset immediately: no storage, `size() == 0`.
    pub fn take(&mut self) -> Self {
        Self::from_storage(transfer(&mut self.storage))
    }

    /// Replaces the contents of `self` with those of `other`.
    ///
    /// The current contents of `self` are wiped before being freed and `other`
    /// is left empty. Passing the same string twice is a no-op.
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

        self.storage = transfer(&mut other.storage);
    }

    /// Consumes `other` and moves its contents into `self`.
    pub fn assign(&mut self, mut other: Self) {
        self.move_from(&mut other);
    }
}

impl TryFrom<&[u8]> for SecureString {
    type Error = SecureAllocError;

    fn try_from(plaintext: &[u8]) -> Result<Self, Self::Error> {
        Self::new(plaintext)
    }
}

impl TryFrom<&str> for SecureString {
    type Error = SecureAllocError;

    fn try_from(plaintext: &str) -> Result<Self, Self::Error> {
        Self::new(plaintext.as_bytes())
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED SecureString]")
    }
}

impl FastZeroizable for SecureString {
    /// Wipes the text in place. The allocation and its length are kept, so
    /// the terminator stays present and zero.
    fn fast_zeroize(&mut self) {
        self.storage.fast_zeroize();
        self.__sentinel.fast_zeroize();
    }
}

impl ZeroizationProbe for SecureString {
    fn is_zeroized(&self) -> bool {
        self.storage.is_zeroized()
    }
}

impl AssertZeroizeOnDrop for SecureString {
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }

    fn assert_zeroize_on_drop(self) {
        assert_zeroize_on_drop(self);
    }
}

impl Drop for SecureString {
    fn drop(&mut self) {
        if self.storage.capacity() != 0 {
            log::trace!("SecureString: wiping {} bytes on drop", self.storage.len());
        }

        self.fast_zeroize();
    }
}
