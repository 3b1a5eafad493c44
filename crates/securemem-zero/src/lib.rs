// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Zeroization traits and runtime drop verification.
//!
//! - **Traits**: [`FastZeroizable`], [`ZeroizationProbe`], [`AssertZeroizeOnDrop`]
//! - **Sentinel**: [`ZeroizeOnDropSentinel`] records that a value wiped itself
//! - **Test helper**: [`assert_zeroize_on_drop()`]
//!
//! ```rust
//! use securemem_zero::{FastZeroizable, ZeroizationProbe};
//!
//! let mut key = vec![0xAAu8; 32];
//! key.fast_zeroize();
//! assert!(key.is_zeroized());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod assert;
mod primitives;
mod traits;
mod zeroize_on_drop_sentinel;

#[cfg(test)]
mod tests;

pub use assert::assert_zeroize_on_drop;
pub use traits::{AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe};
pub use zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;
