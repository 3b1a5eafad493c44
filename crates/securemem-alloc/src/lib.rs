// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Move-only secret containers that wipe themselves on every release.
//!
//! - [`SecureBuffer`]: a fixed-size, zero-initialized byte buffer
//! - [`SecureString`]: a NUL-terminated text secret
//!
//! # Core Guarantees
//!
//! - **Single owner**: neither type implements `Clone` or `Copy`
//! - **Wipe on release**: storage is overwritten with zeros before it is
//!   handed off, overwritten or freed, through volatile writes the optimizer
//!   cannot remove
//! - **Fallible construction**: allocation failure is returned as
//!   [`SecureAllocError`] instead of aborting
//!
//! # Example
//!
//! ```rust
//! use securemem_alloc::{SecureAllocError, SecureBuffer, SecureString};
//!
//! fn example() -> Result<(), SecureAllocError> {
//!     let mut key = SecureBuffer::new(32)?;
//!     key.as_mut_slice()[0] = 0x01;
//!
//!     let mut password = SecureString::try_from("correct horse")?;
//!     let other = SecureString::try_from("battery staple")?;
//!
//!     // "correct horse" is wiped before it is freed.
//!     password.assign(other);
//!     assert_eq!(password.as_bytes(), b"battery staple");
//!
//!     // Both are wiped when they go out of scope.
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Logging
//!
//! Allocation failures are reported at `debug` level and storage releases at
//! `trace` level through the [`log`](https://docs.rs/log) facade. Only byte
//! counts are logged, never contents.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod error;
mod secure_buffer;
mod secure_string;
mod storage;

#[cfg(test)]
mod tests;

pub use error::SecureAllocError;
pub use secure_buffer::SecureBuffer;
pub use secure_string::SecureString;
