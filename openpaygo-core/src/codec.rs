// openpaygo-core
// Copyright (c) 2026 The OpenPAYGo Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The base codec: embedding a small payload value into the low decimal
//! digits of a PRF code, modulo a fixed offset.
//!
//! The reference implementation duplicates every function here once for
//! the Standard codec and once for the Extended codec (`getTokenBase` /
//! `getTokenBaseExtended`, and so on). [`Variant`] parameterizes the one
//! set of functions over the two codecs instead, since the two only ever
//! differ in `BASE_OFFSET`, `MAX_BASE`, and digit widths.

use crate::error::{invalid_base, Result};

/// Which of the two codecs a code, token, or PRF seed belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// 9-digit tokens, 3-digit base, 32-bit PRF seed.
    Standard,
    /// 12-digit tokens, 6-digit base, 64-bit PRF seed.
    Extended,
}

impl Variant {
    /// The modulus the base is taken under (`1000` or `1_000_000`).
    pub const fn base_offset(self) -> i64 {
        match self {
            Variant::Standard => 1_000,
            Variant::Extended => 1_000_000,
        }
    }

    /// The largest value `put_base` will accept (`base_offset() - 1`).
    pub const fn max_base(self) -> i64 {
        match self {
            Variant::Standard => 999,
            Variant::Extended => 999_999,
        }
    }

    /// Width of an unrestricted, zero-padded token string.
    pub const fn digits(self) -> usize {
        match self {
            Variant::Standard => 9,
            Variant::Extended => 12,
        }
    }

    /// Width of a restricted-digit-set token string.
    pub const fn restricted_digits(self) -> usize {
        match self {
            Variant::Standard => 15,
            Variant::Extended => 20,
        }
    }
}

/// The low decimal digits of `code` that carry the embedded value.
pub fn base(code: i64, variant: Variant) -> i64 {
    code.rem_euclid(variant.base_offset())
}

/// Replace `code`'s base with `b`, keeping everything above it unchanged.
///
/// Fails with [`crate::TokenError::InvalidTokenBase`] if `b` exceeds
/// `variant.max_base()`; this can only happen if the caller passes in a
/// base that didn't itself come out of `base()` or `encode_base()`.
pub fn put_base(code: i64, b: i64, variant: Variant) -> Result<i64> {
    if b > variant.max_base() {
        return invalid_base(b);
    }
    Ok(code - base(code, variant) + b)
}

/// Embed `value` into `starting_base`, wrapping around the modulus if it
/// would overflow the valid base range.
pub fn encode_base(starting_base: i64, value: i32, variant: Variant) -> i64 {
    let value = value as i64;
    if value + starting_base > variant.max_base() {
        value + starting_base - variant.base_offset()
    } else {
        value + starting_base
    }
}

/// Recover the embedded value as the (wrapped) difference between
/// `token_base` and `starting_base`.
pub fn decode_base(starting_base: i64, token_base: i64, variant: Variant) -> i32 {
    let decoded = if token_base < starting_base {
        token_base + variant.base_offset() - starting_base
    } else {
        token_base - starting_base
    };
    decoded as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_wraps_on_offset() {
        assert_eq!(base(123_456_789, Variant::Standard), 789);
        assert_eq!(base(123_456_789, Variant::Extended), 456_789);
    }

    #[test]
    fn put_base_rejects_out_of_range() {
        assert!(put_base(0, 1_000, Variant::Standard).is_err());
        assert!(put_base(0, 999, Variant::Standard).is_ok());
    }

    #[test]
    fn encode_decode_base_round_trip() {
        let starting_base = base(123_456_789, Variant::Standard);
        for value in [0, 1, 500, 995, 998, 999] {
            let token_base = encode_base(starting_base, value, Variant::Standard);
            assert!(token_base >= 0 && token_base <= Variant::Standard.max_base());
            assert_eq!(decode_base(starting_base, token_base, Variant::Standard), value);
        }
    }
}
