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

use zbus::zvariant::ObjectPath;

#[derive(Debug, thiserror::Error)]
pub enum CdDeviceError {
    #[error("CdDeviceError::AlreadyBound: Device is already bound to {object_path}")]
    AlreadyBound { object_path: String },
    #[error("CdDeviceError::NotBound: Device has not been bound to an object path yet")]
    NotBound,
    #[error("CdDeviceError::Argument: {0}")]
    Argument(String),
    #[error("CdDeviceError::ConnectionFailed: Failed to connect to device {object_path}: {e}")]
    ConnectionFailed { object_path: String, e: zbus::Error },
    #[error("CdDeviceError::RemoteCallFailed: Failed to {operation}: {e}")]
    RemoteCallFailed { operation: String, e: zbus::Error },
    #[error("CdDeviceError::ProfileBindFailed: Failed to set profile object path {object_path}: {e}")]
    ProfileBindFailed { object_path: String, e: zbus::Error },
}

/// Reject empty paths and anything that is not a valid DBus object path before the transport
/// ever sees it.
pub(crate) fn validate_object_path(object_path: &str) -> Result<(), CdDeviceError> {
    if object_path.is_empty() {
        return Err(CdDeviceError::Argument(
            "An object path is required. Provided object path is empty.".into(),
        ));
    }
    ObjectPath::try_from(object_path).map_err(|e| {
        CdDeviceError::Argument(format!("{object_path} is not a valid object path: {e}"))
    })?;
    Ok(())
}
