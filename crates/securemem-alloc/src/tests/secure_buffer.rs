// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;
use securemem_util::{fill_bytes_with_pattern, is_vec_fully_zeroized};
use securemem_zero::{AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe};

use crate::{SecureAllocError, SecureBuffer};

fn filled(size: usize, pattern: u8) -> SecureBuffer {
    let mut buffer = SecureBuffer::new(size).expect("Failed to SecureBuffer::new(..)");
    fill_bytes_with_pattern(buffer.as_mut_slice(), pattern);
    buffer
}

// =============================================================================
// new()
// =============================================================================

#[test]
fn test_new_sixteen_bytes_all_zero() {
    let buffer = SecureBuffer::new(16).expect("Failed to SecureBuffer::new(16)");

    assert_eq!(buffer.size_bytes(), 16);
    assert_eq!(buffer.as_slice(), &[0u8; 16]);
    assert!(buffer.is_zeroized());
}

#[test]
fn test_new_zero_size() {
    let buffer = SecureBuffer::new(0).expect("Failed to SecureBuffer::new(0)");

    assert_eq!(buffer.size_bytes(), 0);
    assert!(buffer.is_empty());
}

#[test]
fn test_new_allocation_failure() {
    let result = SecureBuffer::new(usize::MAX);

    assert!(matches!(
        result,
        Err(SecureAllocError::AllocationFailure {
            requested: usize::MAX
        })
    ));
}

proptest! {
    #[test]
    fn prop_new_is_zero_initialized(size in 0..4096usize) {
        let buffer = SecureBuffer::new(size).expect("Failed to SecureBuffer::new(..)");

        prop_assert_eq!(buffer.size_bytes(), size);
        prop_assert!(buffer.as_slice().iter().all(|&b| b == 0));
    }
}

// =============================================================================
// data_ptr(), data_ptr_mut(), as_slice(), as_mut_slice()
// =============================================================================

#[test]
fn test_data_ptr_mut_writes_are_visible() {
    let mut buffer = SecureBuffer::new(4).expect("Failed to SecureBuffer::new(4)");

    unsafe {
        *buffer.data_ptr_mut().add(2) = 0x7F;
    }

    assert_eq!(buffer.as_slice(), &[0, 0, 0x7F, 0]);
    assert_eq!(buffer.data_ptr(), buffer.as_slice().as_ptr());
}

// =============================================================================
// take()
// =============================================================================

#[test]
fn test_take_empties_source() {
    let mut a = filled(16, 0xAB);
    let b = a.take();

    assert_eq!(b.size_bytes(), 16);
    assert!(b.as_slice().iter().all(|&x| x == 0xAB));

    assert_eq!(a.size_bytes(), 0);
    assert!(a.is_empty());
}

#[test]
fn test_take_from_empty_is_noop() {
    let mut a = filled(8, 0x01);
    let _b = a.take();

    let c = a.take();
    let d = a.take();

    assert!(c.is_empty());
    assert!(d.is_empty());
    assert!(a.is_empty());
}

#[test]
fn test_moved_from_buffer_zeroizes_on_drop() {
    let mut a = filled(8, 0x01);
    let _b = a.take();

    a.assert_zeroize_on_drop();
}

// =============================================================================
// move_from(), assign()
// =============================================================================

#[test]
fn test_move_from_wipes_prior_contents_before_release() {
    let mut a = filled(32, 0xAA);
    let mut b = filled(8, 0x55);
    let mut observed = false;

    a.move_from_with(&mut b, |prior: &Vec<u8>| {
        observed = true;
        assert_eq!(prior.len(), 32);
        assert!(is_vec_fully_zeroized(prior));
    });

    assert!(observed);
    assert_eq!(a.as_slice(), &[0x55u8; 8]);
    assert_eq!(b.size_bytes(), 0);
}

#[test]
fn test_move_from_empties_source() {
    let mut a = filled(4, 0x10);
    let mut b = filled(12, 0x20);

    a.move_from(&mut b);

    assert_eq!(a.size_bytes(), 12);
    assert!(b.is_empty());

    // A second move from the emptied source leaves `a` empty too.
    a.move_from(&mut b);
    assert!(a.is_empty());
}

#[test]
fn test_assign_consumes_other() {
    let mut a = filled(4, 0x10);
    let b = filled(6, 0x20);

    a.assign(b);

    assert_eq!(a.as_slice(), &[0x20u8; 6]);
}

#[test]
fn test_reassigning_own_contents_keeps_them() {
    let mut a = filled(10, 0x3C);

    let own = a.take();
    a.assign(own);

    assert_eq!(a.size_bytes(), 10);
    assert!(a.as_slice().iter().all(|&x| x == 0x3C));
}

// =============================================================================
// Zeroization
// =============================================================================

#[test]
fn test_fast_zeroize_keeps_size() {
    let mut buffer = filled(24, 0xEE);
    assert!(!buffer.is_zeroized());

    buffer.fast_zeroize();

    assert_eq!(buffer.size_bytes(), 24);
    assert!(buffer.is_zeroized());
}

#[test]
fn test_buffer_zeroizes_on_drop() {
    filled(64, 0xC3).assert_zeroize_on_drop();
}

#[test]
fn test_debug_redacts_contents() {
    let buffer = filled(4, 0x66);
    let debug_str = format!("{:?}", buffer);

    assert!(debug_str.contains("SecureBuffer"));
    assert!(debug_str.contains("len: 4"));
    assert!(!debug_str.contains("102"));
}
