// openpaygo-core
// Copyright (c) 2026 The OpenPAYGo Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Offline pay-as-you-go (PAYG) activation token codec.
//!
//! Both sides of the protocol share a 16-byte [`Key`] and a per-device
//! starting code, and independently track a monotonically increasing
//! counter. The server mints a short numeric token with [`encoder`]; the
//! device recovers `(value, counter, mode)` from it with [`decoder`].
//! Everything here is pure and synchronous: no I/O, no locking, no
//! persistence. Callers own the counter and the [`window::UsedCounters`]
//! set and pass them in explicitly.

pub mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod prf;
pub mod restricted;
pub mod value;
pub mod window;

mod key;

pub use config::DecoderConfig;
pub use error::{Result, TokenError};
pub use key::Key;
pub use value::{DecodeOutcome, Mode, COUNTER_SYNC, MAX_ACTIVATION_VALUE, PAYG_DISABLE};
pub use window::{update_used, UsedCounters};

pub use decoder::{decode_extended, decode_standard};
pub use encoder::{encode_extended, encode_standard};
