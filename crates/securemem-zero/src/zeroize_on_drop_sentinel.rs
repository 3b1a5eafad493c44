// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::sync::Arc;
use core::ptr;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::traits::FastZeroizable;

/// Runtime record that a value wiped itself before drop.
///
/// - Wraps a shared flag (`Arc<AtomicBool>`), initially `true` (pristine)
/// - [`fast_zeroize`](FastZeroizable::fast_zeroize) sets it to `false`
/// - Clones share the flag, so a test can keep a clone and inspect it after
///   the owner is gone
///
/// Dropping a sentinel does not mark it. Only the owner's wipe does.
///
/// ```rust
/// use securemem_zero::{FastZeroizable, ZeroizeOnDropSentinel};
///
/// let mut sentinel = ZeroizeOnDropSentinel::default();
/// let observer = sentinel.clone();
///
/// assert!(!observer.is_zeroized());
/// sentinel.fast_zeroize();
/// assert!(observer.is_zeroized());
/// ```
#[derive(Clone, Debug)]
pub struct ZeroizeOnDropSentinel(Arc<AtomicBool>);

impl PartialEq for ZeroizeOnDropSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.0.load(Ordering::Relaxed) == other.0.load(Ordering::Relaxed)
    }
}

impl Eq for ZeroizeOnDropSentinel {}

impl ZeroizeOnDropSentinel {
    /// Resets the sentinel to the pristine ("not zeroized") state.
    pub fn reset(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once the owner has wiped itself.
    pub fn is_zeroized(&self) -> bool {
        !self.0.load(Ordering::Relaxed)
    }
}

impl Default for ZeroizeOnDropSentinel {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl FastZeroizable for ZeroizeOnDropSentinel {
    fn fast_zeroize(&mut self) {
        // SAFETY: `as_ptr` points into the live Arc allocation.
        unsafe {
            ptr::write_volatile(self.0.as_ptr(), false);
        }
    }
}
