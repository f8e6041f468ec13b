// openpaygo-sim
// Copyright (c) 2026 The OpenPAYGo Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device and server reference simulators built on [`openpaygo_core`],
//! exposed both as a library for integration tests and as the backend of
//! the `openpaygo-sim` binary.

pub mod device;
pub mod server;
