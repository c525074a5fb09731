// This file is part of cd-device, a client library mirroring colord color-managed devices over DBus.
//
// Copyright 2025 Canonical Ltd.
//
// SPDX-License-Identifier: GPL-3.0-only
//
// cd-device is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License version 3, as published by the Free Software Foundation.
//
// cd-device is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranties of MERCHANTABILITY, SATISFACTORY QUALITY, or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with this program.  If not, see http://www.gnu.org/licenses/.

//! `cd-device` - inspect and change colord devices from the command line.
//!
//! Every command takes the DBus object path of a device, e.g.
//! `/org/freedesktop/ColorManager/devices/xrandr_HDMI_1`, binds a mirror to it and works on
//! the mirror.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (`trace`, `debug`, `info`, `warn`, `error`
//!   or `off`).

mod profiles;
mod set;
mod show;
mod watch;

use cd_device::comm::dbus::DbusTransport;
use clap::{Parser, Subcommand};
use log::{debug, error};

#[derive(Parser, Debug)]
#[command(name = "cd-device")]
#[command(bin_name = "cd-device")]
struct Cli {
    #[arg(
        long = "session",
        help = "Talk to a colord instance on the session bus instead of the system bus."
    )]
    session: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the current state of a device
    Show { device: String },
    /// Change the model of a device
    SetModel { device: String, model: String },
    /// Change the kind of a device, e.g. `display` or `printer`
    SetKind { device: String, kind: String },
    /// Assign an existing profile to a device
    AddProfile { device: String, profile: String },
    /// Make an assigned profile the default for a device
    MakeDefault { device: String, profile: String },
    /// Find the preferred profile for a qualifier such as `RGB.Plain.300dpi`
    GetProfile { device: String, qualifier: String },
    /// Print the device every time colord reports a change
    Watch { device: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("parsed cli command with {cli:?}");
    let transport = if cli.session {
        DbusTransport::session().await?
    } else {
        DbusTransport::system().await?
    };
    let result = match cli.command {
        Commands::Show { device } => show::show_handler(transport, &device).await,
        Commands::SetModel { device, model } => {
            set::set_model_handler(transport, &device, &model).await
        }
        Commands::SetKind { device, kind } => set::set_kind_handler(transport, &device, &kind).await,
        Commands::AddProfile { device, profile } => {
            profiles::add_profile_handler(transport, &device, &profile).await
        }
        Commands::MakeDefault { device, profile } => {
            profiles::make_default_handler(transport, &device, &profile).await
        }
        Commands::GetProfile { device, qualifier } => {
            profiles::get_profile_handler(transport, &device, &qualifier).await
        }
        Commands::Watch { device } => watch::watch_handler(transport, &device).await,
    };
    match result {
        Ok(msg) => {
            print!("{msg}");
            Ok(())
        }
        Err(e) => {
            error!("{e}");
            Err(e.into())
        }
    }
}
