// openpaygo-core
// Copyright (c) 2026 The OpenPAYGo Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The server side of the protocol: turn `(value, counter, mode)` into a
//! wire token and the counter the next call should be given.

use crate::codec::{encode_base, put_base, Variant};
use crate::error::Result;
use crate::key::Key;
use crate::prf;
use crate::restricted;
use crate::value::Mode;

/// Generate a Standard (9-digit, or 15-digit restricted) token.
///
/// `count` is the caller's last-known counter; the returned counter is
/// the new one to persist. Parity governs how far the counter advances:
/// a `SetTime` emission always lands on an odd counter, an `AddTime`
/// emission always lands on an even one, each by the smallest advance
/// that keeps that invariant.
pub fn encode_standard(
    starting_code: i64,
    key: &Key,
    value: i32,
    count: i64,
    mode: Mode,
    restricted_digit_set: bool,
) -> Result<(i64, String)> {
    let variant = Variant::Standard;
    let starting_base = crate::codec::base(starting_code, variant);
    let token_base = encode_base(starting_base, value, variant);
    let mut cur = put_base(starting_code, token_base, variant)?;

    let count_odd = count % 2 != 0;
    let new_count = match (count_odd, mode) {
        (true, Mode::SetTime) => count + 2,
        (true, Mode::AddTime) => count + 1,
        (false, Mode::SetTime) => count + 1,
        (false, Mode::AddTime) => count + 2,
    };

    for _ in 0..new_count {
        cur = prf::next_standard(cur, key);
    }

    let final_token = put_base(cur, token_base, variant)?;
    let token_str = if restricted_digit_set {
        restricted::encode(final_token, variant)
    } else {
        format!("{:0width$}", final_token, width = variant.digits())
    };

    Ok((new_count, token_str))
}

/// Generate an Extended (12-digit, or 20-digit restricted) token.
///
/// Extended tokens carry no mode, so the counter always advances by
/// exactly 1.
pub fn encode_extended(
    starting_code: i64,
    key: &Key,
    value: i32,
    count: i64,
    restricted_digit_set: bool,
) -> Result<(i64, String)> {
    let variant = Variant::Extended;
    let starting_base = crate::codec::base(starting_code, variant);
    let token_base = encode_base(starting_base, value, variant);
    let mut cur = put_base(starting_code, token_base, variant)?;

    let new_count = count + 1;
    for _ in 0..new_count {
        cur = prf::next_extended(cur, key);
    }

    let final_token = put_base(cur, token_base, variant)?;
    let token_str = if restricted_digit_set {
        restricted::encode(final_token, variant)
    } else {
        format!("{:0width$}", final_token, width = variant.digits())
    };

    Ok((new_count, token_str))
}
