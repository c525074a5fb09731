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

use zbus::{Result, proxy};

#[proxy(
    default_service = "org.freedesktop.ColorManager",
    interface = "org.freedesktop.ColorManager.Profile"
)]
pub trait Profile {
    #[zbus(property, name = "ProfileId")]
    fn profile_id(&self) -> Result<String>;

    #[zbus(property)]
    fn filename(&self) -> Result<String>;
}
