// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use securemem_util::is_vec_fully_zeroized;

use crate::traits::{FastZeroizable, ZeroizationProbe};

#[test]
fn test_u8_fast_zeroize() {
    let mut byte = 0xFFu8;
    assert!(!byte.is_zeroized());

    byte.fast_zeroize();
    assert!(byte.is_zeroized());
}

#[test]
fn test_array_fast_zeroize() {
    let mut key = [0x42u8; 32];
    assert!(!key.is_zeroized());

    key.fast_zeroize();
    assert!(key.is_zeroized());
}

#[test]
fn test_array_through_dyn() {
    let mut data = [7u8; 8];
    let zeroizable: &mut dyn FastZeroizable = &mut data;

    zeroizable.fast_zeroize();

    assert!(data.is_zeroized());
}

#[test]
fn test_slice_fast_zeroize() {
    let mut data = vec![3u8; 10];

    data[2..6].fast_zeroize();

    assert!(data[2..6].is_zeroized());
    assert!(!data.as_slice().is_zeroized());
    assert_eq!(data[0], 3);
    assert_eq!(data[6], 3);
}

#[test]
fn test_vec_fast_zeroize_keeps_len_and_wipes_capacity() {
    let mut vec = vec![0xEEu8; 16];
    vec.truncate(4);

    vec.fast_zeroize();

    assert_eq!(vec.len(), 4);
    assert!(vec.is_zeroized());
    assert!(is_vec_fully_zeroized(&vec));
}
