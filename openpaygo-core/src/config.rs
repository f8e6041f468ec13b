// openpaygo-core
// Copyright (c) 2026 The OpenPAYGo Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Tuning knobs for [`crate::decode_standard`] and [`crate::window`].
///
/// The reference implementation took these as 0 to 3 positional
/// constructor arguments, defaulting the rest; a named-field struct with
/// a sane `Default` is the idiomatic replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// How far past `last_count` the decoder will search for an ordinary
    /// token before giving up.
    pub max_token_jump: u32,
    /// How far past `last_count` the decoder will search when the token
    /// turns out to carry [`crate::COUNTER_SYNC`].
    pub max_token_jump_counter_sync: u32,
    /// Width of the trailing window of counters an out-of-order `AddTime`
    /// token may still land in. Setting this to 0 disables out-of-order
    /// acceptance entirely.
    pub max_unused_older_token: u32,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            max_token_jump: 64,
            max_token_jump_counter_sync: 100,
            max_unused_older_token: 16,
        }
    }
}
