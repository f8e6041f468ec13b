// openpaygo-core
// Copyright (c) 2026 The OpenPAYGo Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The device side of the protocol: recover `(value, counter, mode)` from
//! a wire token by searching forward through the PRF stream from the
//! last-known counter.

use log::trace;

use crate::codec::{base, decode_base, put_base, Variant};
use crate::config::DecoderConfig;
use crate::error::{invalid_token, Result, TokenError};
use crate::key::Key;
use crate::prf;
use crate::restricted;
use crate::value::{DecodeOutcome, Mode, COUNTER_SYNC};
use crate::window::UsedCounters;

/// Decode a Standard token.
///
/// Searches counters `0..bound` (where `bound` depends on whether the
/// token turns out to carry [`COUNTER_SYNC`]) for one whose derived code
/// shares the token's base. A match outside the window recorded by
/// `used` still short-circuits the "invalid token" failure: it comes back
/// as [`DecodeOutcome::OldToken`] so the caller's lockout accounting can
/// tell a replay from a token that was simply never valid.
pub fn decode_standard(
    token: &str,
    starting_code: i64,
    key: &Key,
    last_count: i64,
    restricted_digit_set: bool,
    used: &UsedCounters,
    config: &DecoderConfig,
) -> Result<DecodeOutcome> {
    let variant = Variant::Standard;

    let token_int = if restricted_digit_set {
        restricted::decode(token)?
    } else {
        parse_token(token)?
    };

    let token_base = base(token_int, variant);
    let mut cur = put_base(starting_code, token_base, variant)?;
    let starting_base = base(starting_code, variant);
    let value = decode_base(starting_base, token_base, variant);

    let bound = if value == COUNTER_SYNC {
        last_count + config.max_token_jump_counter_sync as i64 + 1
    } else {
        last_count + config.max_token_jump as i64 + 1
    };

    let mut saw_valid_older = false;

    for count in 0..bound {
        let masked = put_base(cur, token_base, variant)?;
        if masked == token_int {
            let mode = Mode::from_counter_parity(count);
            if count_is_valid(count, last_count, value, mode, used, config) {
                return Ok(DecodeOutcome::Decoded { value, count, mode });
            }
            trace!("token matched counter {} outside the acceptance window", count);
            saw_valid_older = true;
        }
        cur = prf::next_standard(cur, key);
    }

    if saw_valid_older {
        Ok(DecodeOutcome::OldToken)
    } else {
        invalid_token()
    }
}

/// Decode an Extended token.
///
/// Extended tokens carry no mode and are not subject to a used-counter
/// window or counter-sync: any counter past `last_count` within the first
/// 30 positions is accepted.
///
/// The returned counter is `count - 1`, one less than the position that
/// actually matched. This is asymmetric with the Standard decoder (which
/// returns the matched counter directly) and with the Extended encoder
/// (which advances by `count + 1`), but is preserved for wire
/// compatibility with already-fielded devices; see the protocol's design
/// notes.
pub fn decode_extended(
    token: &str,
    starting_code: i64,
    key: &Key,
    last_count: i64,
    restricted_digit_set: bool,
) -> Result<(i32, i64)> {
    let variant = Variant::Extended;

    let token_int = if restricted_digit_set {
        restricted::decode(token)?
    } else {
        parse_token(token)?
    };

    let token_base = base(token_int, variant);
    let mut cur = put_base(starting_code, token_base, variant)?;
    let starting_base = base(starting_code, variant);
    let value = decode_base(starting_base, token_base, variant);

    for count in 0..30i64 {
        let masked = put_base(cur, token_base, variant)?;
        if masked == token_int && count > last_count {
            return Ok((value, count - 1));
        }
        cur = prf::next_extended(cur, key);
    }

    invalid_token()
}

/// §4.5's `count_is_valid`: is counter `count` currently admissible?
fn count_is_valid(
    count: i64,
    last_count: i64,
    value: i32,
    mode: Mode,
    used: &UsedCounters,
    config: &DecoderConfig,
) -> bool {
    if value == COUNTER_SYNC {
        // Hard-coded per the reference; intentionally independent of
        // `max_token_jump_counter_sync`.
        return count > last_count - 30;
    }
    if count > last_count {
        return true;
    }
    if config.max_unused_older_token > 0
        && count > last_count - config.max_unused_older_token as i64
        && mode == Mode::AddTime
        && !used.contains(count)
    {
        return true;
    }
    false
}

fn parse_token(token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|_| TokenError::InvalidToken)
}
