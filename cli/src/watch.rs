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

//! Watch command implementation.
//!
//! Drives the device's event subscription on the current task and prints the description
//! after every `Changed` notification, until colord drops the subscription.

use crate::show::bind_device;
use cd_device::CdDeviceError;
use cd_device::comm::dbus::DbusTransport;
use log::{info, warn};
use tokio::sync::broadcast::error::TryRecvError;

pub async fn watch_handler(
    transport: DbusTransport,
    object_path: &str,
) -> Result<String, CdDeviceError> {
    let mut device = bind_device(transport, object_path).await?;
    let mut changed = device.subscribe_changed();
    println!("{device}");
    while device.dispatch_next_event().await? {
        loop {
            match changed.try_recv() {
                Ok(_) => println!("{device}"),
                Err(TryRecvError::Lagged(missed)) => warn!("Missed {missed} notifications"),
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
    }
    info!("Subscription to {object_path} closed");
    Ok(String::new())
}
