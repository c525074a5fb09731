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

use crate::common::fake_bus::{Call, FakeBus};
use crate::common::{DEVICE_PATH, PROFILE_A, PROFILE_B, PROFILE_C, PROFILE_MISSING, bus};
use crate::device::{attached_display, profile_ids};
use cd_device::{Device, DeviceKind, Profile};
use googletest::prelude::*;
use rstest::*;
use zbus::zvariant::Value;

#[gtest]
#[rstest]
#[tokio::test]
async fn set_model_waits_for_the_remote(bus: FakeBus) {
    let mut device = attached_display(&bus).await;

    assert_that!(device.set_model("Foo").await, ok(anything()));
    assert_that!(device.model(), eq("U2410"));
    assert_that!(
        bus.calls(),
        eq(&vec![Call::SetProperty {
            object_path: DEVICE_PATH.to_string(),
            name: "Model".to_string(),
            value: "Foo".to_string(),
        }])
    );

    bus.emit_properties_changed(DEVICE_PATH, vec![("Model", Value::from("Foo"))]);
    assert_that!(device.dispatch_next_event().await, ok(eq(&true)));

    assert_that!(device.model(), eq("Foo"));
}

#[gtest]
#[rstest]
#[tokio::test]
async fn set_kind_sends_wire_string(bus: FakeBus) {
    let device = attached_display(&bus).await;

    assert_that!(device.set_kind(DeviceKind::Printer).await, ok(anything()));

    assert_that!(device.kind(), eq(DeviceKind::Display));
    assert_that!(
        bus.calls(),
        eq(&vec![Call::SetProperty {
            object_path: DEVICE_PATH.to_string(),
            name: "Kind".to_string(),
            value: "printer".to_string(),
        }])
    );
}

#[gtest]
#[rstest]
#[tokio::test]
async fn add_profile_sends_object_path(bus: FakeBus) {
    let device = attached_display(&bus).await;
    let profile = Profile::attach_by_path(&bus, PROFILE_C)
        .await
        .expect("failed to bind profile");

    assert_that!(device.add_profile(&profile).await, ok(anything()));

    assert_that!(
        bus.calls(),
        eq(&vec![Call::AddProfile {
            object_path: DEVICE_PATH.to_string(),
            profile_path: PROFILE_C.to_string(),
        }])
    );
    assert_that!(profile_ids(&device).len(), eq(2));
}

#[gtest]
#[rstest]
#[tokio::test]
async fn make_profile_default_sends_profile_id(bus: FakeBus) {
    let device = attached_display(&bus).await;

    assert_that!(
        device.make_profile_default(&device.profiles()[1]).await,
        ok(anything())
    );

    assert_that!(
        bus.calls(),
        eq(&vec![Call::MakeProfileDefault {
            object_path: DEVICE_PATH.to_string(),
            profile_id: "icc-b".to_string(),
        }])
    );
    assert_that!(device.profiles()[1].object_path(), eq(PROFILE_B));
}

#[gtest]
#[rstest]
#[tokio::test]
async fn remote_failures_are_wrapped(bus: FakeBus) {
    let device = attached_display(&bus).await;
    bus.fail_calls();

    assert_that!(
        device.set_model("Foo").await,
        err(displays_as(contains_substring(
            "CdDeviceError::RemoteCallFailed: Failed to set device model"
        )))
    );
    assert_that!(
        device.set_kind(DeviceKind::Camera).await,
        err(displays_as(contains_substring("set device kind")))
    );
    assert_that!(
        device.add_profile(&device.profiles()[0]).await,
        err(displays_as(contains_substring("add profile to device")))
    );
    assert_that!(
        device.make_profile_default(&device.profiles()[0]).await,
        err(displays_as(contains_substring(
            "org.freedesktop.ColorManager.Failed"
        )))
    );
    assert_that!(bus.calls().len(), eq(4));
    assert_that!(device.model(), eq("U2410"));
}

#[gtest]
#[rstest]
#[tokio::test]
async fn mutators_require_binding(bus: FakeBus) {
    let device = attached_display(&bus).await;
    let unbound = Device::new(bus.clone());

    assert_that!(
        unbound.set_model("Foo").await,
        err(displays_as(contains_substring("CdDeviceError::NotBound")))
    );
    assert_that!(
        unbound.set_kind(DeviceKind::Scanner).await,
        err(displays_as(contains_substring("CdDeviceError::NotBound")))
    );
    assert_that!(
        unbound.add_profile(&device.profiles()[0]).await,
        err(displays_as(contains_substring("CdDeviceError::NotBound")))
    );
    assert_that!(
        unbound.make_profile_default(&device.profiles()[0]).await,
        err(displays_as(contains_substring("CdDeviceError::NotBound")))
    );
    assert_that!(
        unbound.get_profile_for_qualifier("RGB.*.*").await,
        err(displays_as(contains_substring("CdDeviceError::NotBound")))
    );
    assert_that!(bus.calls().len(), eq(0));
}

#[gtest]
#[rstest]
#[tokio::test]
async fn qualifier_lookup_binds_a_new_profile(bus: FakeBus) {
    let device = attached_display(&bus).await;
    bus.set_qualifier_result("RGB.Plain.300dpi", PROFILE_C);

    let profile = device
        .get_profile_for_qualifier("RGB.Plain.300dpi")
        .await
        .expect("failed to look up profile");

    assert_that!(profile.object_path(), eq(PROFILE_C));
    assert_that!(profile.id(), eq("icc-c"));
    assert_that!(profile.filename(), eq("/usr/share/color/icc/icc-c.icc"));
    assert_that!(profile_ids(&device).len(), eq(2));
    assert_that!(
        bus.calls(),
        eq(&vec![Call::GetProfileForQualifier {
            object_path: DEVICE_PATH.to_string(),
            qualifier: "RGB.Plain.300dpi".to_string(),
        }])
    );
}

#[gtest]
#[rstest]
#[tokio::test]
async fn qualifier_without_match_is_remote_failure(bus: FakeBus) {
    let device = attached_display(&bus).await;

    let result = device.get_profile_for_qualifier("CMYK.*.*").await;

    assert_that!(
        &result,
        err(displays_as(contains_substring(
            "CdDeviceError::RemoteCallFailed: Failed to get a suitable profile"
        )))
    );
    assert_that!(&result, err(displays_as(contains_substring("NothingMatched"))));
}

#[gtest]
#[rstest]
#[tokio::test]
async fn qualifier_with_unbindable_profile_fails(bus: FakeBus) {
    let device = attached_display(&bus).await;
    bus.set_qualifier_result("RGB.*.*", PROFILE_MISSING);

    let result = device.get_profile_for_qualifier("RGB.*.*").await;

    assert_that!(
        &result,
        err(displays_as(contains_substring("CdDeviceError::ProfileBindFailed")))
    );
    assert_that!(&result, err(displays_as(contains_substring(PROFILE_MISSING))));
}

#[gtest]
#[rstest]
#[tokio::test]
async fn profiles_can_be_used_across_devices(bus: FakeBus) {
    let display = attached_display(&bus).await;
    bus.add_device(
        "/org/freedesktop/ColorManager/devices/cups_LaserJet",
        vec![("Kind", Value::from("printer"))],
    );
    let mut printer = Device::new(bus.clone());
    assert_that!(
        printer
            .attach_by_path("/org/freedesktop/ColorManager/devices/cups_LaserJet")
            .await,
        ok(anything())
    );

    assert_that!(printer.add_profile(&display.profiles()[0]).await, ok(anything()));

    assert_that!(
        bus.calls(),
        eq(&vec![Call::AddProfile {
            object_path: "/org/freedesktop/ColorManager/devices/cups_LaserJet".to_string(),
            profile_path: PROFILE_A.to_string(),
        }])
    );
}
