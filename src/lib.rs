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

//! Client-side mirrors of colord devices.
//!
//! colord exposes every color-managed device as a DBus object. This crate binds a local
//! [`Device`] to one of those objects, caches its properties and keeps the cache in step with
//! the remote object as it changes.
//!
//! # Modules
//!
//! - [`device`] - The device mirror: attach, reconciliation, signals and mutators
//! - [`profile`] - Profile mirrors owned by a device
//! - [`remote`] - The transport seam the mirrors are written against
//! - [`comm::dbus`] - The `zbus` transport used in production
//! - [`config`] - Bus names and wire names
//! - [`error`] - [`CdDeviceError`]
//!
//! # Logging
//!
//! Diagnostics go through the `log` facade. Unknown properties and signals are reported at
//! `warn`, attach and notifications at `debug`.

pub mod comm;
pub mod config;
pub mod device;
pub mod error;
pub mod profile;
pub mod remote;

pub use device::kind::DeviceKind;
pub use device::{Device, DeviceChanged};
pub use error::CdDeviceError;
pub use profile::Profile;
