// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Implementations for bytes, byte slices and byte vectors.

use alloc::vec::Vec;
use core::ptr;
use core::sync::atomic::{Ordering, compiler_fence};

use securemem_util::{is_slice_zeroized, wipe_slice, wipe_vec};

use crate::traits::{FastZeroizable, ZeroizationProbe};

impl FastZeroizable for u8 {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        // SAFETY: `self` is a valid, aligned `u8`.
        unsafe { ptr::write_volatile(self, 0) };
        compiler_fence(Ordering::SeqCst);
    }
}

impl ZeroizationProbe for u8 {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        *self == 0
    }
}

impl FastZeroizable for [u8] {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        wipe_slice(self);
    }
}

impl ZeroizationProbe for [u8] {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        is_slice_zeroized(self)
    }
}

impl<const N: usize> FastZeroizable for [u8; N] {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        wipe_slice(self);
    }
}

impl<const N: usize> ZeroizationProbe for [u8; N] {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        is_slice_zeroized(self)
    }
}

/// Wipes the entire allocation, spare capacity included. Length is kept.
impl FastZeroizable for Vec<u8> {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        wipe_vec(self);
    }
}

impl ZeroizationProbe for Vec<u8> {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        is_slice_zeroized(self)
    }
}
