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

//! Show command implementation.

use cd_device::comm::dbus::DbusTransport;
use cd_device::{CdDeviceError, Device};

/// Bind a device mirror to `object_path`.
pub async fn bind_device(
    transport: DbusTransport,
    object_path: &str,
) -> Result<Device<DbusTransport>, CdDeviceError> {
    let mut device = Device::new(transport);
    device.attach_by_path(object_path).await?;
    Ok(device)
}

/// Prints the multi-line description of the device.
pub async fn show_handler(
    transport: DbusTransport,
    object_path: &str,
) -> Result<String, CdDeviceError> {
    let device = bind_device(transport, object_path).await?;
    Ok(device.to_string())
}
