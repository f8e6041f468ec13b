// openpaygo-core
// Copyright (c) 2026 The OpenPAYGo Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The concrete scenarios from the protocol's testable-properties table,
//! keyed to a fixed `(key, starting_code)` pair so expected token strings
//! are reproducible.

use openpaygo_core::{
    decode_extended, decode_standard, encode_extended, encode_standard, DecodeOutcome, DecoderConfig,
    Key, Mode, PAYG_DISABLE, UsedCounters,
};

const KEY: Key = Key([162, 154, 184, 46, 220, 95, 187, 196, 30, 201, 83, 15, 109, 172, 134, 177]);
const STARTING_CODE: i64 = 123_456_789;

#[test]
fn encode_standard_set_time_paygo_disable() {
    let (count, token) =
        encode_standard(STARTING_CODE, &KEY, PAYG_DISABLE, 1, Mode::SetTime, false).unwrap();
    assert_eq!(count, 3);
    assert_eq!(token, "312690787");
}

#[test]
fn encode_standard_restricted() {
    let (count, token) =
        encode_standard(STARTING_CODE, &KEY, PAYG_DISABLE, 1, Mode::SetTime, true).unwrap();
    assert_eq!(count, 3);
    assert_eq!(token, "213331421312314");
}

#[test]
fn encode_extended_basic() {
    let (count, token) = encode_extended(STARTING_CODE, &KEY, 1000, 1, false).unwrap();
    assert_eq!(count, 2);
    assert_eq!(token, "315154457789");
}

#[test]
fn decode_standard_recovers_paygo_disable() {
    let used = UsedCounters::new();
    let config = DecoderConfig::default();
    let outcome =
        decode_standard("312690787", STARTING_CODE, &KEY, 0, false, &used, &config).unwrap();
    assert_eq!(
        outcome,
        DecodeOutcome::Decoded { value: PAYG_DISABLE, count: 3, mode: Mode::SetTime }
    );
}

#[test]
fn decode_standard_restricted_recovers_paygo_disable() {
    let used = UsedCounters::new();
    let config = DecoderConfig::default();
    let outcome = decode_standard(
        "213331421312314",
        STARTING_CODE,
        &KEY,
        0,
        true,
        &used,
        &config,
    )
    .unwrap();
    assert_eq!(
        outcome,
        DecodeOutcome::Decoded { value: PAYG_DISABLE, count: 3, mode: Mode::SetTime }
    );
}

#[test]
fn decode_extended_recovers_value_and_pre_advance_count() {
    let (value, count) = decode_extended("315154457789", STARTING_CODE, &KEY, 1, false).unwrap();
    assert_eq!(value, 1000);
    assert_eq!(count, 1);
}

#[test]
fn nine_consecutive_add_time_tokens_out_of_order_admission() {
    let config = DecoderConfig::default();
    let mut server_count = 1i64;
    let mut tokens = Vec::new();
    for _ in 0..9 {
        let (count, token) =
            encode_standard(STARTING_CODE, &KEY, 1, server_count, Mode::AddTime, false).unwrap();
        server_count = count;
        tokens.push(token);
    }

    let mut device_count = 1i64;
    let mut used = UsedCounters::new();
    let mut gained_value = 0i32;

    // Admit token 9 first.
    let outcome =
        decode_standard(&tokens[8], STARTING_CODE, &KEY, device_count, false, &used, &config)
            .unwrap();
    let (value, count, mode) = match outcome {
        DecodeOutcome::Decoded { value, count, mode } => (value, count, mode),
        DecodeOutcome::OldToken => panic!("token 9 should be fresh"),
    };
    assert!(count > device_count);
    device_count = count;
    used = used.update(value, count, mode, &config);
    gained_value += value;

    // Token 1 is now outside the window: rejected as OldToken, never re-applied.
    let outcome =
        decode_standard(&tokens[0], STARTING_CODE, &KEY, device_count, false, &used, &config)
            .unwrap();
    assert_eq!(outcome, DecodeOutcome::OldToken);

    // Tokens 5, 4, 3, 2 each admit exactly once, out of order.
    for idx in [4usize, 3, 2, 1] {
        let outcome =
            decode_standard(&tokens[idx], STARTING_CODE, &KEY, device_count, false, &used, &config)
                .unwrap();
        let (value, count, mode) = match outcome {
            DecodeOutcome::Decoded { value, count, mode } => (value, count, mode),
            DecodeOutcome::OldToken => panic!("token {} should still be admissible", idx + 1),
        };
        used = used.update(value, count, mode, &config);
        gained_value += value;
        if count > device_count {
            device_count = count;
        }

        // Replaying the same token a second time must not apply its value again.
        let replay =
            decode_standard(&tokens[idx], STARTING_CODE, &KEY, device_count, false, &used, &config)
                .unwrap();
        assert_eq!(replay, DecodeOutcome::OldToken);
    }

    assert_eq!(gained_value, 5);
}

#[test]
fn set_time_saturates_the_window_against_an_older_add_time() {
    let config = DecoderConfig::default();

    let (count_add, token_add) =
        encode_standard(STARTING_CODE, &KEY, 1, 1, Mode::AddTime, false).unwrap();
    let (_count_set, token_set) =
        encode_standard(STARTING_CODE, &KEY, 0, count_add, Mode::SetTime, false).unwrap();

    let mut used = UsedCounters::new();
    let mut device_count = 1i64;

    let outcome =
        decode_standard(&token_set, STARTING_CODE, &KEY, device_count, false, &used, &config)
            .unwrap();
    let (value, count, mode) = match outcome {
        DecodeOutcome::Decoded { value, count, mode } => (value, count, mode),
        DecodeOutcome::OldToken => panic!("set-time token should be fresh"),
    };
    assert_eq!(mode, Mode::SetTime);
    used = used.update(value, count, mode, &config);
    device_count = count;

    // The AddTime token from before the SetTime must now be rejected.
    let outcome =
        decode_standard(&token_add, STARTING_CODE, &KEY, device_count, false, &used, &config)
            .unwrap();
    assert_eq!(outcome, DecodeOutcome::OldToken);
}
