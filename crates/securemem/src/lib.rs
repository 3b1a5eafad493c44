// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Move-only secret buffers that are wiped on every release.
//!
//! `securemem` holds passwords, key material and other plaintext secrets in
//! memory with two guarantees:
//!
//! - the bytes are never implicitly duplicated
//! - the bytes are overwritten with zeros whenever their owner lets go of
//!   them (moved from, overwritten or dropped), in a way the optimizer cannot
//!   remove
//!
//! # Quick Start
//!
//! ```rust
//! use securemem::{SecureAllocError, SecureBuffer, SecureString};
//!
//! fn main() -> Result<(), SecureAllocError> {
//!     let mut key = SecureBuffer::new(32)?;
//!     key.as_mut_slice().fill(0x42);
//!
//!     let password = SecureString::try_from("hunter2")?;
//!     assert_eq!(password.size(), 7);
//!     assert_eq!(password.c_str(), b"hunter2\0");
//!
//!     Ok(())
//! } // `key` and `password` are wiped here
//! ```
//!
//! # Crates
//!
//! - [`alloc`]: [`SecureBuffer`], [`SecureString`], [`SecureAllocError`]
//! - [`zero`]: zeroization traits and the drop sentinel
//! - [`util`]: the raw [`secure_wipe`](util::secure_wipe) primitive
//!
//! # Feature Flags
//!
//! - `test-utils`: exposes full-capacity verification helpers in [`util`]
//!
//! # Out of Scope
//!
//! Page locking (`mlock`), OS keychains, constant-time comparison and
//! cryptographic primitives are not provided.

#![cfg_attr(not(test), no_std)]

pub use securemem_alloc as alloc;
pub use securemem_util as util;
pub use securemem_zero as zero;

pub use securemem_alloc::{SecureAllocError, SecureBuffer, SecureString};
pub use securemem_zero::{AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe};
