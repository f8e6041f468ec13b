// openpaygo-sim
// Copyright (c) 2026 The OpenPAYGo Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use log::{error, info};

use openpaygo_core::Key;
use openpaygo_sim::device::Device;
use openpaygo_sim::server::Server;

/// Interactive front end over the device and server simulators, for
/// exercising the activation token protocol without a real device.
#[derive(Parser)]
#[command(name = "openpaygo-sim", version, about)]
struct Cli {
    /// 16-byte shared key, as 32 lowercase hex characters.
    #[arg(long, default_value = "a29ab82edc5fbbc41ec9530f6dac86b1")]
    key: String,

    /// Per-device starting code.
    #[arg(long, default_value_t = 123_456_789)]
    starting_code: i64,

    /// Value units per day (the reference device/server pairing uses 1).
    #[arg(long, default_value_t = 1)]
    time_divider: i64,

    /// Use the restricted (digits 1-4 only) token encoding.
    #[arg(long)]
    restricted: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Mint a token carrying a raw value, then feed it to a fresh device.
    RoundTrip {
        /// Activation value to encode (0-995, or 998/999 for the reserved values).
        value: i32,
        /// Emit a SetTime token instead of AddTime.
        #[arg(long)]
        set_time: bool,
    },
    /// Mint a PAYG-disable token and feed it to a fresh device.
    Disable,
}

fn parse_key(hex: &str) -> Key {
    let mut bytes = [0u8; 16];
    for (i, byte) in bytes.iter_mut().enumerate() {
        let slice = &hex[i * 2..i * 2 + 2];
        *byte = u8::from_str_radix(slice, 16).expect("key must be 32 hex characters");
    }
    Key(bytes)
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let key = parse_key(&cli.key);

    let mut server = Server::new(cli.starting_code, key, 1, cli.restricted, cli.time_divider);
    let mut device = Device::new(cli.starting_code, key, 1, cli.restricted, false, cli.time_divider);

    let token = match cli.command {
        Command::RoundTrip { value, set_time } => {
            let mode = if set_time { openpaygo_core::Mode::SetTime } else { openpaygo_core::Mode::AddTime };
            server.token_for_value(value, mode)
        }
        Command::Disable => server.payg_disable_token(),
    };

    let token = match token {
        Ok(token) => token,
        Err(err) => {
            error!("failed to generate token: {err}");
            std::process::exit(1);
        }
    };

    info!("generated token: {token}");

    match device.enter_token(&token) {
        Ok(()) => device.log_status(),
        Err(err) => {
            error!("device rejected token: {err}");
            std::process::exit(1);
        }
    }
}
