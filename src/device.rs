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

//! Device mirror.
//!
//! A [`Device`] attaches to one remote colord device object, takes a snapshot of its
//! properties and keeps that snapshot current from two independent event feeds:
//!
//! - `PropertiesChanged` batches are the only thing that writes the cache after attach.
//! - The `Changed` custom signal is the only thing that notifies observers.
//!
//! The two may arrive in either order. Between them a reader may see a stale cache; once both
//! have been dispatched the cache and the notification agree.
//!
//! Mutators never touch the cache. The remote reflects every accepted change back as a
//! property change, which is applied when it is dispatched.
//!
//! # Examples
//!
//! ```rust,no_run
//! # use cd_device::comm::dbus::DbusTransport;
//! # use cd_device::device::Device;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut device = Device::new(DbusTransport::system().await?);
//! device
//!     .attach_by_path("/org/freedesktop/ColorManager/devices/xrandr_HDMI_1")
//!     .await?;
//! let mut changed = device.subscribe_changed();
//! device.set_model("Dell U2410").await?;
//! while device.dispatch_next_event().await? {
//!     if changed.try_recv().is_ok() {
//!         println!("{device}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod kind;

use crate::config;
use crate::error::{CdDeviceError, validate_object_path};
use crate::profile::Profile;
use crate::remote::{
    EventStream, RemoteDevice, RemoteEvent, Transport, value_to_object_paths,
    value_to_string, value_to_u64,
};
use chrono::{DateTime, Local, Utc};
use futures_util::StreamExt;
use kind::DeviceKind;
use log::{debug, trace, warn};
use std::fmt;
use tokio::sync::broadcast;
use zbus::zvariant::OwnedValue;

/// Capacity of the per-device notification channel. Slow observers lag rather than block
/// dispatch.
const CHANGED_CHANNEL_CAPACITY: usize = 16;

/// Sent to every observer once per `Changed` signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceChanged {
    pub object_path: String,
}

/// Everything bound at attach time. Present only once attach has fully succeeded.
struct Binding<D> {
    remote: D,
    events: Option<EventStream>,
}

pub struct Device<T: Transport> {
    transport: T,
    binding: Option<Binding<T::Device>>,
    id: String,
    model: String,
    created: u64,
    kind: DeviceKind,
    profiles: Vec<Profile<T::Profile>>,
    changed: broadcast::Sender<DeviceChanged>,
}

/// Snapshot read at attach time, committed to the mirror only if attach succeeds.
struct Snapshot<P> {
    id: String,
    model: String,
    created: u64,
    kind: DeviceKind,
    profiles: Vec<Profile<P>>,
}

impl<T: Transport> Device<T> {
    /// Create an empty, unbound mirror. Nothing is sent on the bus until
    /// [`Device::attach_by_path`] is called.
    pub fn new(transport: T) -> Self {
        let (changed, _) = broadcast::channel(CHANGED_CHANNEL_CAPACITY);
        Device {
            transport,
            binding: None,
            id: String::new(),
            model: String::new(),
            created: 0,
            kind: DeviceKind::default(),
            profiles: Vec::new(),
            changed,
        }
    }

    /// Bind the mirror to the remote device at `object_path` and fill the cache.
    ///
    /// Scalar properties are best-effort: anything the remote does not report keeps its
    /// default. Profiles are strict: if any listed profile cannot be bound the attach fails
    /// with [`CdDeviceError::ProfileBindFailed`]. The event subscription is opened before the
    /// snapshot is read and left unconsumed until the cache is committed, so changes made
    /// while attaching are applied by the next [`Device::dispatch_next_event`].
    ///
    /// A failed attach leaves the mirror unbound and unchanged.
    ///
    /// # Returns: `Result<(), CdDeviceError>`
    /// * `Ok(())` - The mirror is bound and populated
    /// * `Err(CdDeviceError::AlreadyBound)` - This mirror was bound before
    /// * `Err(CdDeviceError::Argument)` - `object_path` is empty or not an object path
    /// * `Err(CdDeviceError::ConnectionFailed)` - The transport could not attach or subscribe
    /// * `Err(CdDeviceError::ProfileBindFailed)` - One of the listed profiles could not be bound
    pub async fn attach_by_path(&mut self, object_path: &str) -> Result<(), CdDeviceError> {
        if let Some(binding) = &self.binding {
            return Err(CdDeviceError::AlreadyBound {
                object_path: binding.remote.object_path().to_string(),
            });
        }
        validate_object_path(object_path)?;

        let remote = self
            .transport
            .attach_device(object_path)
            .await
            .map_err(|e| CdDeviceError::ConnectionFailed {
                object_path: object_path.to_string(),
                e,
            })?;

        let events = remote
            .subscribe()
            .await
            .map_err(|e| CdDeviceError::ConnectionFailed {
                object_path: object_path.to_string(),
                e,
            })?;

        let snapshot = self.read_snapshot(&remote).await?;

        self.id = snapshot.id;
        self.model = snapshot.model;
        self.created = snapshot.created;
        self.kind = snapshot.kind;
        self.profiles = snapshot.profiles;
        self.binding = Some(Binding {
            remote,
            events: Some(events),
        });
        debug!("Connected to device {}", self.id);
        Ok(())
    }

    async fn read_snapshot(
        &self,
        remote: &T::Device,
    ) -> Result<Snapshot<T::Profile>, CdDeviceError> {
        let id = remote
            .cached_property(config::PROPERTY_DEVICE_ID)
            .and_then(|v| value_to_string(config::PROPERTY_DEVICE_ID, &v))
            .unwrap_or_default();
        let kind = remote
            .cached_property(config::PROPERTY_KIND)
            .and_then(|v| value_to_string(config::PROPERTY_KIND, &v))
            .map(|kind| DeviceKind::from(kind.as_str()))
            .unwrap_or_default();
        let model = remote
            .cached_property(config::PROPERTY_MODEL)
            .and_then(|v| value_to_string(config::PROPERTY_MODEL, &v))
            .unwrap_or_default();
        let created = remote
            .cached_property(config::PROPERTY_CREATED)
            .and_then(|v| value_to_u64(config::PROPERTY_CREATED, &v))
            .unwrap_or_default();
        let profile_paths = remote
            .cached_property(config::PROPERTY_PROFILES)
            .and_then(|v| value_to_object_paths(config::PROPERTY_PROFILES, &v))
            .unwrap_or_default();

        let mut profiles = Vec::with_capacity(profile_paths.len());
        for path in profile_paths {
            let profile = Profile::attach_by_path(&self.transport, &path)
                .await
                .map_err(|e| CdDeviceError::ProfileBindFailed {
                    object_path: path.clone(),
                    e,
                })?;
            profiles.push(profile);
        }

        Ok(Snapshot {
            id,
            model,
            created,
            kind,
            profiles,
        })
    }

    /// Apply one batch of remote property changes to the cache.
    ///
    /// `Model` and `Kind` replace their field. `Profiles` rebuilds the whole profile list and
    /// swaps it in at once; entries that fail to bind are logged and left out rather than
    /// failing the batch. Unknown names are logged and ignored. Observers are not notified
    /// from here.
    pub async fn handle_properties_changed<I>(&mut self, batch: I)
    where
        I: IntoIterator<Item = (String, OwnedValue)>,
    {
        if self.binding.is_none() {
            warn!("Ignoring property changes for an unbound device");
            return;
        }
        for (name, value) in batch {
            match name.as_str() {
                config::PROPERTY_MODEL => {
                    if let Some(model) = value_to_string(&name, &value) {
                        self.model = model;
                    }
                }
                config::PROPERTY_KIND => {
                    if let Some(kind) = value_to_string(&name, &value) {
                        self.kind = DeviceKind::from(kind.as_str());
                    }
                }
                config::PROPERTY_PROFILES => {
                    if let Some(paths) = value_to_object_paths(&name, &value) {
                        self.profiles = self.rebind_profiles(paths).await;
                    }
                }
                _ => warn!("{name} property unhandled"),
            }
        }
    }

    async fn rebind_profiles(&self, paths: Vec<String>) -> Vec<Profile<T::Profile>> {
        let mut profiles = Vec::with_capacity(paths.len());
        for path in paths {
            match Profile::attach_by_path(&self.transport, &path).await {
                Ok(profile) => profiles.push(profile),
                Err(e) => warn!("Skipping profile {path}: {e}"),
            }
        }
        profiles
    }

    /// Handle a custom signal on the device object. `Changed` notifies every observer exactly
    /// once, synchronously. Anything else is logged and ignored.
    pub fn handle_signal(&self, sender: Option<&str>, signal_name: &str) {
        if signal_name != config::SIGNAL_CHANGED {
            warn!("unhandled signal '{signal_name}'");
            return;
        }
        let object_path = self.object_path().unwrap_or_default().to_string();
        debug!("emit Changed on {object_path}");
        trace!("Changed sent by {}", sender.unwrap_or("unknown sender"));
        // No observers is not an error.
        let _ = self.changed.send(DeviceChanged { object_path });
    }

    /// Route one transport event to the matching handler.
    pub async fn dispatch(&mut self, event: RemoteEvent) {
        match event {
            RemoteEvent::PropertiesChanged(batch) => self.handle_properties_changed(batch).await,
            RemoteEvent::Signal { sender, name } => self.handle_signal(sender.as_deref(), &name),
        }
    }

    /// Wait for the next event from the subscription made at attach time and dispatch it.
    ///
    /// # Returns: `Result<bool, CdDeviceError>`
    /// * `Ok(true)` - An event was dispatched
    /// * `Ok(false)` - The transport closed the subscription
    /// * `Err(CdDeviceError::NotBound)` - The mirror was never attached
    pub async fn dispatch_next_event(&mut self) -> Result<bool, CdDeviceError> {
        let binding = self.binding.as_mut().ok_or(CdDeviceError::NotBound)?;
        let Some(events) = binding.events.as_mut() else {
            return Ok(false);
        };
        match events.next().await {
            Some(event) => {
                self.dispatch(event).await;
                Ok(true)
            }
            None => {
                debug!("Event stream for {} ended", binding.remote.object_path());
                binding.events = None;
                Ok(false)
            }
        }
    }

    /// Register an observer for `Changed` notifications.
    pub fn subscribe_changed(&self) -> broadcast::Receiver<DeviceChanged> {
        self.changed.subscribe()
    }

    fn remote(&self) -> Result<&T::Device, CdDeviceError> {
        self.binding
            .as_ref()
            .map(|binding| &binding.remote)
            .ok_or(CdDeviceError::NotBound)
    }

    async fn set_property(
        &self,
        name: &str,
        value: &str,
        operation: &str,
    ) -> Result<(), CdDeviceError> {
        self.remote()?
            .set_property(name, value)
            .await
            .map_err(|e| CdDeviceError::RemoteCallFailed {
                operation: operation.to_string(),
                e,
            })
    }

    /// Ask the remote to change the model. The cache is updated when the remote reflects the
    /// change back, not here.
    pub async fn set_model(&self, model: &str) -> Result<(), CdDeviceError> {
        self.set_property(config::PROPERTY_MODEL, model, "set device model")
            .await
    }

    /// Ask the remote to change the kind. The cache is updated when the remote reflects the
    /// change back, not here.
    pub async fn set_kind(&self, kind: DeviceKind) -> Result<(), CdDeviceError> {
        self.set_property(config::PROPERTY_KIND, kind.as_str(), "set device kind")
            .await
    }

    /// Assign an existing profile to the device.
    pub async fn add_profile(&self, profile: &Profile<T::Profile>) -> Result<(), CdDeviceError> {
        self.remote()?
            .add_profile(profile.object_path())
            .await
            .map_err(|e| CdDeviceError::RemoteCallFailed {
                operation: "add profile to device".to_string(),
                e,
            })
    }

    /// Make an already assigned profile the default for the device.
    pub async fn make_profile_default(
        &self,
        profile: &Profile<T::Profile>,
    ) -> Result<(), CdDeviceError> {
        self.remote()?
            .make_profile_default(profile.id())
            .await
            .map_err(|e| CdDeviceError::RemoteCallFailed {
                operation: "make profile default on device".to_string(),
                e,
            })
    }

    /// Ask the remote for the preferred profile matching `qualifier` (wildcards allowed) and
    /// bind a new profile mirror for it.
    ///
    /// # Returns: `Result<Profile, CdDeviceError>`
    /// * `Ok(Profile)` - A freshly bound profile, not added to [`Device::profiles`]
    /// * `Err(CdDeviceError::RemoteCallFailed)` - The call failed, including when nothing matched
    /// * `Err(CdDeviceError::ProfileBindFailed)` - The returned path could not be bound
    pub async fn get_profile_for_qualifier(
        &self,
        qualifier: &str,
    ) -> Result<Profile<T::Profile>, CdDeviceError> {
        let object_path = self
            .remote()?
            .get_profile_for_qualifier(qualifier)
            .await
            .map_err(|e| CdDeviceError::RemoteCallFailed {
                operation: "get a suitable profile".to_string(),
                e,
            })?;
        Profile::attach_by_path(&self.transport, &object_path)
            .await
            .map_err(|e| CdDeviceError::ProfileBindFailed { object_path, e })
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub fn object_path(&self) -> Option<&str> {
        self.binding
            .as_ref()
            .map(|binding| binding.remote.object_path())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Creation time in seconds since the epoch, `0` when unknown.
    pub fn created(&self) -> u64 {
        self.created
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.created)
            .ok()
            .filter(|&secs| secs != 0)
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub fn profiles(&self) -> &[Profile<T::Profile>] {
        &self.profiles
    }
}

impl<T: Transport> fmt::Display for Device<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let created = self
            .created_at()
            .map(|t| t.with_timezone(&Local).format("%c").to_string())
            .unwrap_or_default();
        writeln!(
            f,
            "  object-path:          {}",
            self.object_path().unwrap_or_default()
        )?;
        writeln!(f, "  id:                   {}", self.id)?;
        writeln!(f, "  kind:                 {}", self.kind)?;
        writeln!(f, "  model:                {}", self.model)?;
        writeln!(f, "  created:              {created}")?;
        for profile in &self.profiles {
            writeln!(
                f,
                "  profile:              {} ({})",
                profile.id(),
                profile.object_path()
            )?;
        }
        Ok(())
    }
}
