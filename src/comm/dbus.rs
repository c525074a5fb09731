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

//! DBus transport for colord objects.
//!
//! [`DbusTransport`] binds [`DbusDevice`] and [`DbusProfile`] handles with `zbus`. Both load
//! every property of their object when they are built, so cached reads never need a round trip.
//!
//! # DBus Service Information
//!
//! - **Service Name**: `org.freedesktop.ColorManager`
//! - **Device Interface**: `org.freedesktop.ColorManager.Device`
//! - **Profile Interface**: `org.freedesktop.ColorManager.Profile`

pub mod device_proxy;
pub mod profile_proxy;

use crate::config;
use crate::remote::{EventStream, RemoteDevice, RemoteEvent, RemoteProfile, Transport};
use device_proxy::DeviceProxy;
use futures_util::StreamExt;
use futures_util::stream;
use log::{trace, warn};
use profile_proxy::ProfileProxy;
use zbus::fdo::PropertiesProxy;
use zbus::proxy::CacheProperties;
use zbus::Connection;
use zbus::zvariant::{ObjectPath, OwnedValue, Value};

#[derive(Debug, Clone)]
pub struct DbusTransport {
    connection: Connection,
}

impl DbusTransport {
    /// Connect to the system bus, where colord normally runs.
    pub async fn system() -> zbus::Result<Self> {
        Ok(DbusTransport {
            connection: Connection::system().await?,
        })
    }

    /// Connect to the session bus. Useful against a private colord instance.
    pub async fn session() -> zbus::Result<Self> {
        Ok(DbusTransport {
            connection: Connection::session().await?,
        })
    }

    pub fn new(connection: Connection) -> Self {
        DbusTransport { connection }
    }
}

impl Transport for DbusTransport {
    type Device = DbusDevice;
    type Profile = DbusProfile;

    async fn attach_device(&self, object_path: &str) -> zbus::Result<DbusDevice> {
        trace!("Attaching to device {object_path}");
        let proxy = DeviceProxy::builder(&self.connection)
            .path(ObjectPath::try_from(object_path.to_string())?)?
            .cache_properties(CacheProperties::Yes)
            .build()
            .await?;
        Ok(DbusDevice {
            proxy,
            object_path: object_path.to_string(),
        })
    }

    async fn attach_profile(&self, object_path: &str) -> zbus::Result<DbusProfile> {
        trace!("Attaching to profile {object_path}");
        let proxy = ProfileProxy::builder(&self.connection)
            .path(ObjectPath::try_from(object_path.to_string())?)?
            .cache_properties(CacheProperties::Yes)
            .build()
            .await?;
        Ok(DbusProfile {
            proxy,
            object_path: object_path.to_string(),
        })
    }
}

fn owned(value: &Value<'_>) -> Option<OwnedValue> {
    value
        .try_to_owned()
        .inspect_err(|e| warn!("Failed to copy cached property: {e}"))
        .ok()
}

pub struct DbusDevice {
    proxy: DeviceProxy<'static>,
    object_path: String,
}

impl RemoteDevice for DbusDevice {
    fn object_path(&self) -> &str {
        &self.object_path
    }

    fn cached_property(&self, name: &str) -> Option<OwnedValue> {
        self.proxy
            .inner()
            .cached_property_raw(name)
            .and_then(|value| owned(&value))
    }

    async fn set_property(&self, name: &str, value: &str) -> zbus::Result<()> {
        self.proxy.set_device_property(name, value).await
    }

    async fn add_profile(&self, profile_path: &str) -> zbus::Result<()> {
        self.proxy
            .add_profile(&ObjectPath::try_from(profile_path)?)
            .await
    }

    async fn make_profile_default(&self, profile_id: &str) -> zbus::Result<()> {
        self.proxy.make_profile_default(profile_id).await
    }

    async fn get_profile_for_qualifier(&self, qualifier: &str) -> zbus::Result<String> {
        let path = self.proxy.get_profile_for_qualifier(qualifier).await?;
        Ok(path.as_str().to_string())
    }

    /// Merge `PropertiesChanged` for the device interface with every custom signal the device
    /// interface emits.
    async fn subscribe(&self) -> zbus::Result<EventStream> {
        let properties = PropertiesProxy::builder(self.proxy.inner().connection())
            .destination(config::COLORD_DBUS_SERVICE)?
            .path(ObjectPath::try_from(self.object_path.clone())?)?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        let property_changes = properties
            .receive_properties_changed()
            .await?
            .filter_map(|signal| async move {
                let args = signal
                    .args()
                    .inspect_err(|e| warn!("Malformed PropertiesChanged: {e}"))
                    .ok()?;
                if args.interface_name().as_str() != config::COLORD_DBUS_INTERFACE_DEVICE {
                    return None;
                }
                let batch = args
                    .changed_properties()
                    .iter()
                    .filter_map(|(name, value)| {
                        value
                            .try_to_owned()
                            .inspect_err(|e| warn!("Dropping changed property {name}: {e}"))
                            .ok()
                            .map(|value| (name.to_string(), value))
                    })
                    .collect();
                Some(RemoteEvent::PropertiesChanged(batch))
            });

        let signals = self
            .proxy
            .inner()
            .receive_all_signals()
            .await?
            .map(|message| {
                let header = message.header();
                RemoteEvent::Signal {
                    sender: header.sender().map(|sender| sender.to_string()),
                    name: header
                        .member()
                        .map(|member| member.to_string())
                        .unwrap_or_default(),
                }
            });

        Ok(stream::select(property_changes, signals).boxed())
    }
}

pub struct DbusProfile {
    proxy: ProfileProxy<'static>,
    object_path: String,
}

impl RemoteProfile for DbusProfile {
    fn object_path(&self) -> &str {
        &self.object_path
    }

    fn cached_property(&self, name: &str) -> Option<OwnedValue> {
        self.proxy
            .inner()
            .cached_property_raw(name)
            .and_then(|value| owned(&value))
    }
}
