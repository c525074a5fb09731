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

use std::fmt;

/// The category of a color-managed device, as reported in the `Kind` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceKind {
    #[default]
    Unknown,
    Display,
    Scanner,
    Printer,
    Camera,
    Webcam,
}

impl DeviceKind {
    /// The lowercase string used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceKind::Unknown => "unknown",
            DeviceKind::Display => "display",
            DeviceKind::Scanner => "scanner",
            DeviceKind::Printer => "printer",
            DeviceKind::Camera => "camera",
            DeviceKind::Webcam => "webcam",
        }
    }
}

/// Parsing never fails: anything unrecognized is [`DeviceKind::Unknown`].
impl From<&str> for DeviceKind {
    fn from(kind: &str) -> Self {
        match kind {
            "display" => DeviceKind::Display,
            "scanner" => DeviceKind::Scanner,
            "printer" => DeviceKind::Printer,
            "camera" => DeviceKind::Camera,
            "webcam" => DeviceKind::Webcam,
            _ => DeviceKind::Unknown,
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
