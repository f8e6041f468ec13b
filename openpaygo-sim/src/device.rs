// openpaygo-sim
// Copyright (c) 2026 The OpenPAYGo Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reference device-side wrapper around [`openpaygo_core`]: persists the
//! counter and used-counter window, applies decoded values to an
//! expiration timestamp, and imposes an escalating lockout after
//! consecutive invalid tokens.

use chrono::{DateTime, Duration, Utc};
use log::{info, warn};
use thiserror::Error;

use openpaygo_core::{decode_standard, update_used, DecodeOutcome, DecoderConfig, Key, Mode, TokenError};
use openpaygo_core::{COUNTER_SYNC, MAX_ACTIVATION_VALUE, PAYG_DISABLE};

/// Errors a caller of [`Device::enter_token`] can observe. Distinct from
/// [`TokenError`]: `Blocked` never reaches the core at all, and a
/// recognized-but-stale token ([`DecodeOutcome::OldToken`]) is not an
/// error here either, matching the core's guidance that it should not
/// count against lockout.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("token entry is locked out until {0}")]
    Blocked(DateTime<Utc>),
    #[error(transparent)]
    Token(#[from] TokenError),
}

/// A fielded device's persistent PAYG state.
pub struct Device {
    starting_code: i64,
    key: Key,
    time_divider: i64,
    restricted_digit_set: bool,
    waiting_period_enabled: bool,
    config: DecoderConfig,

    count: i64,
    used: openpaygo_core::UsedCounters,
    payg_enabled: bool,
    expiration: DateTime<Utc>,
    invalid_token_count: u32,
    blocked_until: DateTime<Utc>,
}

impl Device {
    pub fn new(
        starting_code: i64,
        key: Key,
        starting_count: i64,
        restricted_digit_set: bool,
        waiting_period_enabled: bool,
        time_divider: i64,
    ) -> Self {
        let now = Utc::now();
        Device {
            starting_code,
            key,
            time_divider,
            restricted_digit_set,
            waiting_period_enabled,
            config: DecoderConfig::default(),
            count: starting_count,
            used: openpaygo_core::UsedCounters::new(),
            payg_enabled: true,
            expiration: now,
            invalid_token_count: 0,
            blocked_until: now,
        }
    }

    /// Decode `token` and update the device's state accordingly. Mirrors
    /// `updateDeviceStatusFromToken` in the reference simulator.
    pub fn enter_token(&mut self, token: &str) -> Result<(), DeviceError> {
        let now = Utc::now();
        if self.waiting_period_enabled && self.blocked_until > now {
            return Err(DeviceError::Blocked(self.blocked_until));
        }

        let outcome = decode_standard(
            token,
            self.starting_code,
            &self.key,
            self.count,
            self.restricted_digit_set,
            &self.used,
            &self.config,
        );

        let (value, count, mode) = match outcome {
            Err(err) => {
                self.invalid_token_count += 1;
                let n = self.invalid_token_count as i64;
                let minutes = 2 + 2 * n * (n - 1);
                self.blocked_until = now + Duration::minutes(minutes);
                warn!("invalid token entered, locked out for {} minutes", minutes);
                return Err(DeviceError::Token(err));
            }
            Ok(DecodeOutcome::OldToken) => {
                info!("token recognized but stale, ignoring");
                return Ok(());
            }
            Ok(DecodeOutcome::Decoded { value, count, mode }) => (value, count, mode),
        };

        if count > self.count || value == COUNTER_SYNC {
            self.count = count;
        }
        self.used = update_used(&self.used, value, count, mode, &self.config);
        self.invalid_token_count = 0;

        if value <= MAX_ACTIVATION_VALUE {
            if !self.payg_enabled && mode == Mode::SetTime {
                self.payg_enabled = true;
            }
            if self.payg_enabled {
                let days = value as i64 / self.time_divider;
                if mode == Mode::SetTime {
                    self.expiration = now + Duration::days(days);
                } else {
                    self.expiration += Duration::days(days);
                }
            }
        } else if value == PAYG_DISABLE {
            self.payg_enabled = false;
        }

        Ok(())
    }

    pub fn is_active(&self) -> bool {
        Utc::now() < self.expiration
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn expiration(&self) -> DateTime<Utc> {
        self.expiration
    }

    pub fn payg_enabled(&self) -> bool {
        self.payg_enabled
    }

    pub fn log_status(&self) {
        info!("-------------------------");
        info!("Expiration: {}", self.expiration);
        info!("Current count: {}", self.count);
        info!("PAYG enabled: {}", self.payg_enabled);
        info!("Active: {}", self.is_active());
        info!("-------------------------");
    }
}
