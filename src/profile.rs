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

//! Profile mirror.
//!
//! Only what a device needs to know about its profiles: the object path, the human readable
//! identifier and the backing file. Profiles keep their handle alive for as long as the owning
//! device holds them.

use crate::config;
use crate::remote::{RemoteProfile, Transport, value_to_string};
use log::trace;
use zbus::zvariant::ObjectPath;

#[derive(Debug)]
pub struct Profile<P> {
    remote: P,
    id: String,
    filename: String,
}

impl<P: RemoteProfile> Profile<P> {
    /// Bind a profile handle for `object_path` and read its identifying properties.
    ///
    /// Absent properties are left empty. Only a failure to establish the handle is an error.
    pub async fn attach_by_path<T>(transport: &T, object_path: &str) -> zbus::Result<Self>
    where
        T: Transport<Profile = P>,
    {
        ObjectPath::try_from(object_path)?;
        let remote = transport.attach_profile(object_path).await?;
        let id = read_string(&remote, config::PROPERTY_PROFILE_ID);
        let filename = read_string(&remote, config::PROPERTY_FILENAME);
        trace!("Bound profile {id} at {object_path}");
        Ok(Profile {
            remote,
            id,
            filename,
        })
    }

    pub fn object_path(&self) -> &str {
        self.remote.object_path()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

fn read_string<P: RemoteProfile>(remote: &P, name: &str) -> String {
    remote
        .cached_property(name)
        .and_then(|value| value_to_string(name, &value))
        .unwrap_or_default()
}
