// openpaygo-sim
// Copyright (c) 2026 The OpenPAYGo Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reference server-side wrapper: turns a desired expiration date or a
//! raw value into a Standard token, tracking the per-device counter and
//! the furthest expiration ever promised.

use chrono::{DateTime, Utc};
use thiserror::Error;

use openpaygo_core::{encode_standard, Key, Mode, MAX_ACTIVATION_VALUE};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("requested activation exceeds the maximum single-token value")]
    TooManyDays,
    #[error(transparent)]
    Token(#[from] openpaygo_core::TokenError),
}

/// A single device's server-side counterpart to [`crate::device::Device`].
pub struct Server {
    starting_code: i64,
    key: Key,
    time_divider: i64,
    restricted_digit_set: bool,

    count: i64,
    expiration: DateTime<Utc>,
    furthest_expiration: DateTime<Utc>,
}

impl Server {
    pub fn new(
        starting_code: i64,
        key: Key,
        starting_count: i64,
        restricted_digit_set: bool,
        time_divider: i64,
    ) -> Self {
        let now = Utc::now();
        Server {
            starting_code,
            key,
            time_divider,
            restricted_digit_set,
            count: starting_count,
            expiration: now,
            furthest_expiration: now,
        }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    /// Generate a token that disables PAYG enforcement on the device.
    pub fn payg_disable_token(&mut self) -> Result<String, ServerError> {
        let (count, token) = encode_standard(
            self.starting_code,
            &self.key,
            openpaygo_core::PAYG_DISABLE,
            self.count,
            Mode::SetTime,
            self.restricted_digit_set,
        )?;
        self.count = count;
        Ok(token)
    }

    /// Generate a token carrying `value` directly, in the given mode.
    pub fn token_for_value(&mut self, value: i32, mode: Mode) -> Result<String, ServerError> {
        let (count, token) =
            encode_standard(self.starting_code, &self.key, value, self.count, mode, self.restricted_digit_set)?;
        self.count = count;
        Ok(token)
    }

    /// Generate a token that moves the device's expiration to `new_expiration`.
    ///
    /// If `new_expiration` extends past the furthest expiration ever
    /// promised, the token adds the gap in `AddTime` mode and the
    /// furthest-expiration high-water mark advances with it. Otherwise the
    /// token resets the expiration outright in `SetTime` mode, measured
    /// from now rather than from the high-water mark. `force` caps an
    /// over-budget request at [`MAX_ACTIVATION_VALUE`] instead of
    /// rejecting it.
    pub fn token_for_date(
        &mut self,
        new_expiration: DateTime<Utc>,
        force: bool,
    ) -> Result<String, ServerError> {
        if new_expiration > self.furthest_expiration {
            let reference = self.expiration;
            self.furthest_expiration = new_expiration;
            let value = self.value_to_activate(new_expiration, reference, force)?;
            self.expiration = new_expiration;
            self.token_for_value(value, Mode::AddTime)
        } else {
            let reference = Utc::now();
            let value = self.value_to_activate(new_expiration, reference, force)?;
            self.expiration = new_expiration;
            self.token_for_value(value, Mode::SetTime)
        }
    }

    fn value_to_activate(
        &self,
        new_time: DateTime<Utc>,
        reference: DateTime<Utc>,
        force: bool,
    ) -> Result<i32, ServerError> {
        if new_time <= reference {
            return Ok(0);
        }
        let days = (new_time - reference).num_hours() as f64 / 24.0;
        let value = (days.round() as i64) * self.time_divider;
        if value > MAX_ACTIVATION_VALUE as i64 {
            if force {
                Ok(MAX_ACTIVATION_VALUE)
            } else {
                Err(ServerError::TooManyDays)
            }
        } else {
            Ok(value as i32)
        }
    }
}
