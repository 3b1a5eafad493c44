// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod secure_wipe_tests {
    use securemem_util::{is_slice_zeroized, secure_wipe, wipe_slice};

    #[test]
    fn test_secure_wipe_boxed_slice_before_free() {
        let mut boxed: Box<[u8]> = vec![0x42u8; 256].into_boxed_slice();
        unsafe { secure_wipe(boxed.as_mut_ptr(), boxed.len()) };
        assert!(is_slice_zeroized(&boxed));
    }

    #[test]
    fn test_wipe_slice_empty_slice() {
        let mut data: [u8; 0] = [];
        wipe_slice(&mut data); // should not panic
        assert!(is_slice_zeroized(&data));
    }

    #[test]
    fn test_wipe_slice_single_byte() {
        let mut data = [0xFFu8];
        wipe_slice(&mut data);
        assert_eq!(data, [0]);
    }
}
