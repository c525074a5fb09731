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

/// The well-known bus name owned by the colord daemon. Typically found on the system bus.
pub static COLORD_DBUS_SERVICE: &str = "org.freedesktop.ColorManager";

/// The interface implemented by every colord device object, e.g.
/// `/org/freedesktop/ColorManager/devices/xrandr_HDMI_1`.
pub static COLORD_DBUS_INTERFACE_DEVICE: &str = "org.freedesktop.ColorManager.Device";

/// Device property holding the stable device identifier.
pub const PROPERTY_DEVICE_ID: &str = "DeviceId";
/// Device property holding the device kind as a lowercase string, e.g. `display`.
pub const PROPERTY_KIND: &str = "Kind";
/// Device property holding the display model string.
pub const PROPERTY_MODEL: &str = "Model";
/// Device property holding the creation time in seconds since the epoch.
pub const PROPERTY_CREATED: &str = "Created";
/// Device property holding the object paths of the profiles assigned to the device.
pub const PROPERTY_PROFILES: &str = "Profiles";

/// Profile property holding the human readable profile identifier.
pub const PROPERTY_PROFILE_ID: &str = "ProfileId";
/// Profile property holding the ICC file backing the profile, if any.
pub const PROPERTY_FILENAME: &str = "Filename";

/// The only custom signal a device emits. Carries no payload.
pub const SIGNAL_CHANGED: &str = "Changed";
