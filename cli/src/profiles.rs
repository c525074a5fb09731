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

//! Profile command implementations.

use crate::show::bind_device;
use cd_device::comm::dbus::{DbusProfile, DbusTransport};
use cd_device::{CdDeviceError, Profile};

async fn bind_profile(
    transport: &DbusTransport,
    object_path: &str,
) -> Result<Profile<DbusProfile>, CdDeviceError> {
    Profile::attach_by_path(transport, object_path)
        .await
        .map_err(|e| CdDeviceError::ProfileBindFailed {
            object_path: object_path.to_string(),
            e,
        })
}

pub async fn add_profile_handler(
    transport: DbusTransport,
    device_path: &str,
    profile_path: &str,
) -> Result<String, CdDeviceError> {
    let profile = bind_profile(&transport, profile_path).await?;
    let device = bind_device(transport, device_path).await?;
    device.add_profile(&profile).await?;
    Ok(format!("Added {} to {device_path}\n", profile.id()))
}

pub async fn make_default_handler(
    transport: DbusTransport,
    device_path: &str,
    profile_path: &str,
) -> Result<String, CdDeviceError> {
    let profile = bind_profile(&transport, profile_path).await?;
    let device = bind_device(transport, device_path).await?;
    device.make_profile_default(&profile).await?;
    Ok(format!("{} is now the default for {device_path}\n", profile.id()))
}

pub async fn get_profile_handler(
    transport: DbusTransport,
    device_path: &str,
    qualifier: &str,
) -> Result<String, CdDeviceError> {
    let device = bind_device(transport, device_path).await?;
    let profile = device.get_profile_for_qualifier(qualifier).await?;
    Ok(format!(
        "  object-path:          {}\n  id:                   {}\n  filename:             {}\n",
        profile.object_path(),
        profile.id(),
        profile.filename()
    ))
}
