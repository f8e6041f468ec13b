// openpaygo-core
// Copyright (c) 2026 The OpenPAYGo Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The keyed pseudorandom stream both sides of the protocol iterate to
//! advance a code from one counter position to the next.
//!
//! `prf64` is the one primitive this crate treats as fixed rather than a
//! design choice: any implementation must be bit-identical to the
//! reference to interoperate with already-fielded devices. It is a
//! SipHash-2-4 digest of an 8-byte buffer, keyed by the 16-byte secret
//! split into two little-endian 64-bit halves (the standard SipHash
//! reference convention).

use std::hash::Hasher;

use siphasher::sip::SipHasher24;

use crate::key::Key;

fn prf64(key: &Key, input: [u8; 8]) -> u64 {
    let (k0, k1) = key.halves();
    let mut hasher = SipHasher24::new_with_keys(k0, k1);
    hasher.write(&input);
    hasher.finish()
}

/// Standard variant: given the 32-bit seed `S`, derive the next 9-digit
/// code. `S` is big-endian-encoded twice into an 8-byte buffer to meet
/// the PRF's minimum input length.
pub fn next_standard(seed: i64, key: &Key) -> i64 {
    let s = seed as u32;
    let mut input = [0u8; 8];
    input[0..4].copy_from_slice(&s.to_be_bytes());
    input[4..8].copy_from_slice(&s.to_be_bytes());

    let hash = prf64(key, input);
    let bytes = hash.to_be_bytes();
    let hi = u32::from_be_bytes(bytes[0..4].try_into().unwrap());
    let lo = u32::from_be_bytes(bytes[4..8].try_into().unwrap());
    let r = hi ^ lo;

    let mut t = ((r & 0xFFFF_FFFC) >> 2) as i64;
    if t > 999_999_999 {
        t -= 73_741_825;
    }
    t
}

/// Extended variant: given the 64-bit seed `S`, derive the next 12-digit
/// code.
pub fn next_extended(seed: i64, key: &Key) -> i64 {
    let s = seed as u64;
    let input = s.to_be_bytes();

    let hash = prf64(key, input);
    let mut t = ((hash & 0xFFFF_FFFF_FF00_0000) >> 24) as i64;
    if t > 999_999_999_999 {
        t -= 99_511_627_777;
    }
    t
}
