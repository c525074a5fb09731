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

//! Set command implementations.
//!
//! colord applies the change and reflects it back as a property change, so the message only
//! confirms that the request was accepted.

use crate::show::bind_device;
use cd_device::comm::dbus::DbusTransport;
use cd_device::{CdDeviceError, DeviceKind};

pub async fn set_model_handler(
    transport: DbusTransport,
    object_path: &str,
    model: &str,
) -> Result<String, CdDeviceError> {
    let device = bind_device(transport, object_path).await?;
    device.set_model(model).await?;
    Ok(format!("Model of {object_path} set to {model}\n"))
}

/// Unknown kinds are refused here rather than sent as `unknown`.
pub async fn set_kind_handler(
    transport: DbusTransport,
    object_path: &str,
    kind: &str,
) -> Result<String, CdDeviceError> {
    let parsed = DeviceKind::from(kind);
    if parsed == DeviceKind::Unknown && kind != DeviceKind::Unknown.as_str() {
        return Err(CdDeviceError::Argument(format!(
            "{kind} is not a device kind. Expected one of display, scanner, printer, camera, webcam."
        )));
    }
    let device = bind_device(transport, object_path).await?;
    device.set_kind(parsed).await?;
    Ok(format!("Kind of {object_path} set to {parsed}\n"))
}
