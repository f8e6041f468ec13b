// openpaygo-core
// Copyright (c) 2026 The OpenPAYGo Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The bounded record of recently admitted counters that lets
//! out-of-order `AddTime` tokens be accepted exactly once without
//! admitting replays.

use std::collections::BTreeSet;

use crate::config::DecoderConfig;
use crate::value::{Mode, COUNTER_SYNC, PAYG_DISABLE};

/// A bounded set of admitted counters, spanning at most
/// `[highest - max_unused_older_token, highest]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedCounters(BTreeSet<i64>);

impl UsedCounters {
    /// An empty window, as at device provisioning.
    pub fn new() -> Self {
        UsedCounters(BTreeSet::new())
    }

    /// Is `count` recorded as already admitted?
    pub fn contains(&self, count: i64) -> bool {
        self.0.contains(&count)
    }

    /// The highest counter currently recorded, or 0 if the window is
    /// empty.
    pub fn highest(&self) -> i64 {
        self.0.iter().next_back().copied().unwrap_or(0)
    }

    /// Number of counters currently recorded.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }

    /// Fold in a just-admitted `(value, new_count, mode)`, per §4.6.
    ///
    /// A `SetTime`, a PAYG-disable, or a counter-sync saturates the
    /// window: every counter in `[bottom, highest]` is marked used,
    /// retroactively closing off any `AddTime` token that straddles the
    /// event. An ordinary `AddTime` only records the counters actually
    /// seen.
    pub fn update(&self, value: i32, new_count: i64, mode: Mode, config: &DecoderConfig) -> Self {
        let highest = self.highest().max(new_count);
        let bottom = highest - config.max_unused_older_token as i64;

        let saturate = mode != Mode::AddTime || value == COUNTER_SYNC || value == PAYG_DISABLE;

        let mut next = BTreeSet::new();
        if saturate {
            for count in bottom..=highest {
                next.insert(count);
            }
        } else {
            for count in bottom..=highest {
                if count == new_count || self.0.contains(&count) {
                    next.insert(count);
                }
            }
        }

        UsedCounters(next)
    }
}

/// Free-function form of [`UsedCounters::update`], matching the
/// collaborator interface named in the protocol (§6.2: `update_used`).
pub fn update_used(
    used: &UsedCounters,
    value: i32,
    new_count: i64,
    mode: Mode,
    config: &DecoderConfig,
) -> UsedCounters {
    used.update(value, new_count, mode, config)
}
