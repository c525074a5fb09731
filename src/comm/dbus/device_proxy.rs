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

use zbus::zvariant::{ObjectPath, OwnedObjectPath};
use zbus::{Result, proxy};

#[proxy(
    default_service = "org.freedesktop.ColorManager",
    interface = "org.freedesktop.ColorManager.Device"
)]
pub trait Device {
    #[zbus(property, name = "DeviceId")]
    fn device_id(&self) -> Result<String>;

    #[zbus(property)]
    fn kind(&self) -> Result<String>;

    #[zbus(property)]
    fn model(&self) -> Result<String>;

    #[zbus(property)]
    fn created(&self) -> Result<u64>;

    #[zbus(property)]
    fn profiles(&self) -> Result<Vec<OwnedObjectPath>>;

    #[zbus(name = "SetProperty")]
    async fn set_device_property(&self, property_name: &str, property_value: &str) -> Result<()>;

    async fn add_profile(&self, object_path: &ObjectPath<'_>) -> Result<()>;

    async fn make_profile_default(&self, profile_id: &str) -> Result<()>;

    async fn get_profile_for_qualifier(&self, qualifier: &str) -> Result<OwnedObjectPath>;

    #[zbus(signal)]
    fn changed(&self) -> Result<()>;
}
