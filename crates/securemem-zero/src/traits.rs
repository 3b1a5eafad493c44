// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core traits for systematic zeroization.

use super::zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;

/// Trait for verifying that a value has been zeroized.
///
/// Used in tests and assertions to check that no sensitive data remains.
///
/// # Example
///
/// ```rust
/// use securemem_zero::{FastZeroizable, ZeroizationProbe};
///
/// let mut value: u8 = 42;
/// assert!(!value.is_zeroized());
///
/// value.fast_zeroize();
/// assert!(value.is_zeroized());
/// ```
pub trait ZeroizationProbe {
    /// Returns `true` if every byte of the value is 0.
    fn is_zeroized(&self) -> bool;
}

/// Trait for types that can be zeroized in place.
///
/// Dyn-compatible, so it can be used as `&mut dyn FastZeroizable`.
pub trait FastZeroizable {
    /// Overwrites all sensitive data with zeros.
    ///
    /// Implementations must use a write path the optimizer cannot elide.
    fn fast_zeroize(&mut self);
}

/// Trait for types that verify zeroization happened before drop.
///
/// Types implementing this trait hold a [`ZeroizeOnDropSentinel`] that their
/// `Drop` marks after wiping.
pub trait AssertZeroizeOnDrop {
    /// Clones the internal [`ZeroizeOnDropSentinel`] for verification.
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel;

    /// Asserts that zeroization happens when this value is dropped.
    ///
    /// # Panics
    ///
    /// Panics if the sentinel was not marked during drop.
    fn assert_zeroize_on_drop(self);
}
