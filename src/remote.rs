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

//! The seam between a mirror and the transport delivering its remote object.
//!
//! A [`Transport`] hands out one handle per remote object path. Device handles
//! ([`RemoteDevice`]) serve cached property reads, typed method round trips and a single
//! merged stream of [`RemoteEvent`]s. Profile handles ([`RemoteProfile`]) only serve cached
//! property reads.
//!
//! The production implementation lives in [`crate::comm::dbus`]. Tests provide an in-memory
//! one that simulates the remote property set.

use futures_util::stream::BoxStream;
use log::warn;
use std::future::Future;
use zbus::zvariant::{OwnedValue, Value};

/// A batch of `(property name, new value)` pairs delivered together by the transport.
pub type PropertyBatch = Vec<(String, OwnedValue)>;

/// Every event a subscribed device handle delivers, in arrival order.
pub type EventStream = BoxStream<'static, RemoteEvent>;

#[derive(Debug)]
pub enum RemoteEvent {
    /// One `PropertiesChanged` emission for the device interface.
    PropertiesChanged(PropertyBatch),
    /// A custom signal of the device interface. Payloads are not decoded.
    Signal {
        sender: Option<String>,
        name: String,
    },
}

/// Establishes handles to remote objects.
pub trait Transport: Send + Sync {
    type Device: RemoteDevice;
    type Profile: RemoteProfile;

    fn attach_device(
        &self,
        object_path: &str,
    ) -> impl Future<Output = zbus::Result<Self::Device>> + Send;

    fn attach_profile(
        &self,
        object_path: &str,
    ) -> impl Future<Output = zbus::Result<Self::Profile>> + Send;
}

/// A handle bound to one remote device object.
pub trait RemoteDevice: Send + Sync {
    fn object_path(&self) -> &str;

    /// Read a property from the transport's own cache. Never a round trip.
    fn cached_property(&self, name: &str) -> Option<OwnedValue>;

    /// `SetProperty(name, value)`
    fn set_property(&self, name: &str, value: &str)
    -> impl Future<Output = zbus::Result<()>> + Send;

    /// `AddProfile(profile_path)`
    fn add_profile(&self, profile_path: &str) -> impl Future<Output = zbus::Result<()>> + Send;

    /// `MakeProfileDefault(profile_id)`
    fn make_profile_default(
        &self,
        profile_id: &str,
    ) -> impl Future<Output = zbus::Result<()>> + Send;

    /// `GetProfileForQualifier(qualifier)`, returning the object path of the matching profile.
    fn get_profile_for_qualifier(
        &self,
        qualifier: &str,
    ) -> impl Future<Output = zbus::Result<String>> + Send;

    /// Start delivering property changes and custom signals for this object.
    fn subscribe(&self) -> impl Future<Output = zbus::Result<EventStream>> + Send;
}

/// A handle bound to one remote profile object.
pub trait RemoteProfile: Send + Sync {
    fn object_path(&self) -> &str;

    fn cached_property(&self, name: &str) -> Option<OwnedValue>;
}

/// Decode a string property. Wrong wire types are reported and treated as absent.
pub fn value_to_string(name: &str, value: &Value<'_>) -> Option<String> {
    match value {
        Value::Str(s) => Some(s.as_str().to_string()),
        Value::Value(inner) => value_to_string(name, inner),
        other => {
            warn!("{name} property has unexpected type {}", other.value_signature());
            None
        }
    }
}

/// Decode an unsigned 64-bit property.
pub fn value_to_u64(name: &str, value: &Value<'_>) -> Option<u64> {
    match value {
        Value::U64(n) => Some(*n),
        Value::U32(n) => Some(u64::from(*n)),
        Value::Value(inner) => value_to_u64(name, inner),
        other => {
            warn!("{name} property has unexpected type {}", other.value_signature());
            None
        }
    }
}

/// Decode an array of object paths, preserving remote order.
pub fn value_to_object_paths(name: &str, value: &Value<'_>) -> Option<Vec<String>> {
    match value {
        Value::Array(array) => Some(
            array
                .iter()
                .filter_map(|element| match element {
                    Value::ObjectPath(path) => Some(path.as_str().to_string()),
                    Value::Str(s) => Some(s.as_str().to_string()),
                    other => {
                        warn!(
                            "{name} element has unexpected type {}",
                            other.value_signature()
                        );
                        None
                    }
                })
                .collect(),
        ),
        Value::Value(inner) => value_to_object_paths(name, inner),
        other => {
            warn!("{name} property has unexpected type {}", other.value_signature());
            None
        }
    }
}
