// openpaygo-core
// Copyright (c) 2026 The OpenPAYGo Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `error` module defines the crate-wide error type.

use std::error::Error as StdError;
use std::fmt;
use std::result;

/// `TokenError` enumerates everything that can go wrong encoding or
/// decoding a token. `OldToken` is deliberately not a member of this enum:
/// a token that decoded correctly but fell outside the acceptance window
/// is not a failure, it's a [`crate::DecodeOutcome::OldToken`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// `put_base` was asked to embed a base greater than the codec's
    /// `MAX_BASE`. Should never happen for a well-formed PRF output; the
    /// codec guarantees `base(x) <= MAX_BASE` by construction.
    InvalidTokenBase(i64),
    /// The decoder exhausted its search window without finding a counter
    /// whose derived code matches the token's base.
    InvalidToken,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TokenError::InvalidTokenBase(base) => {
                write!(f, "invalid token base {}", base)
            }
            TokenError::InvalidToken => {
                write!(f, "invalid token")
            }
        }
    }
}

impl StdError for TokenError {}

pub type Result<T> = result::Result<T, TokenError>;

/// Convenience function mirroring the reference's `ErrInvalidTokenBase`.
pub(crate) fn invalid_base<T>(base: i64) -> Result<T> {
    Err(TokenError::InvalidTokenBase(base))
}

/// Convenience function mirroring the reference's `ErrInvalidToken`.
pub(crate) fn invalid_token<T>() -> Result<T> {
    Err(TokenError::InvalidToken)
}
