// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory gateway fakes shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use lightify_handler::{
    ChannelId, ChannelState, GatewayConnection, GatewayLink, LinkError, LinkResult, Luminary,
    LuminaryState, RgbColor, StatePublisher,
};
use parking_lot::Mutex;

pub const BULB_ADDRESS: &str = "84:18:26:00:00:0a:1b:2c";

/// The snapshot used throughout the tests.
pub fn sample_state() -> LuminaryState {
    LuminaryState {
        powered: false,
        luminance: 40,
        temperature: 2700,
        rgb: RgbColor::new(10, 20, 30),
    }
}

// ============================================================================
// Luminary
// ============================================================================

/// An operation received by a [`FakeLuminary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Switch(bool),
    Luminance(u8, i16),
    Temperature(i16, i16),
    Rgb(RgbColor, i16),
}

#[derive(Debug, Default)]
pub struct FakeLuminary {
    state: Mutex<LuminaryState>,
    calls: Mutex<Vec<Call>>,
    failure: Mutex<Option<LinkError>>,
}

impl FakeLuminary {
    pub fn new(state: LuminaryState) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(state),
            ..Self::default()
        })
    }

    /// Changes the stored attributes as if the device was operated elsewhere.
    pub fn set_state(&self, state: LuminaryState) {
        *self.state.lock() = state;
    }

    /// Makes every following operation fail with `error`.
    pub fn fail_with(&self, error: LinkError) {
        *self.failure.lock() = Some(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn apply(&self, call: Call) -> LinkResult {
        self.calls.lock().push(call);
        if let Some(error) = self.failure.lock().clone() {
            return Err(error);
        }

        let mut state = self.state.lock();
        match call {
            Call::Switch(on) => state.powered = on,
            Call::Luminance(value, _) => state.luminance = value,
            Call::Temperature(value, _) => state.temperature = value,
            Call::Rgb(color, _) => state.rgb = color,
        }
        Ok(*state)
    }
}

impl Luminary for FakeLuminary {
    fn is_powered(&self) -> bool {
        self.state.lock().powered
    }

    fn luminance(&self) -> u8 {
        self.state.lock().luminance
    }

    fn temperature(&self) -> i16 {
        self.state.lock().temperature
    }

    fn rgb(&self) -> RgbColor {
        self.state.lock().rgb
    }

    fn set_switch(&self, on: bool) -> impl Future<Output = LinkResult> + Send {
        std::future::ready(self.apply(Call::Switch(on)))
    }

    fn set_luminance(
        &self,
        value: u8,
        transition: i16,
    ) -> impl Future<Output = LinkResult> + Send {
        std::future::ready(self.apply(Call::Luminance(value, transition)))
    }

    fn set_temperature(
        &self,
        value: i16,
        transition: i16,
    ) -> impl Future<Output = LinkResult> + Send {
        std::future::ready(self.apply(Call::Temperature(value, transition)))
    }

    fn set_rgb(
        &self,
        color: RgbColor,
        transition: i16,
    ) -> impl Future<Output = LinkResult> + Send {
        std::future::ready(self.apply(Call::Rgb(color, transition)))
    }
}

// ============================================================================
// Link
// ============================================================================

/// A lookup performed on a [`FakeLink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Device(String),
    Zone(String),
}

#[derive(Debug, Default)]
pub struct FakeLink {
    devices: Mutex<HashMap<String, Arc<FakeLuminary>>>,
    zones: Mutex<HashMap<String, Arc<FakeLuminary>>>,
    lookups: Mutex<Vec<Lookup>>,
    status_requests: AtomicUsize,
    status_delay: Mutex<Duration>,
    status_failure: Mutex<Option<LinkError>>,
}

impl FakeLink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_device(&self, address: &str, luminary: Arc<FakeLuminary>) {
        self.devices.lock().insert(address.to_string(), luminary);
    }

    pub fn remove_device(&self, address: &str) {
        self.devices.lock().remove(address);
    }

    pub fn add_zone(&self, key: &str, luminary: Arc<FakeLuminary>) {
        self.zones.lock().insert(key.to_string(), luminary);
    }

    pub fn lookups(&self) -> Vec<Lookup> {
        self.lookups.lock().clone()
    }

    pub fn status_requests(&self) -> usize {
        self.status_requests.load(Ordering::SeqCst)
    }

    /// Delays the answer of every following status update.
    pub fn delay_status(&self, delay: Duration) {
        *self.status_delay.lock() = delay;
    }

    /// Makes every following status update fail with `error`.
    pub fn fail_status_with(&self, error: LinkError) {
        *self.status_failure.lock() = Some(error);
    }
}

impl GatewayLink for FakeLink {
    type Luminary = FakeLuminary;

    fn find_device(&self, address: &str) -> Option<Arc<FakeLuminary>> {
        self.lookups.lock().push(Lookup::Device(address.to_string()));
        self.devices.lock().get(address).cloned()
    }

    fn find_zone(&self, key: &str) -> Option<Arc<FakeLuminary>> {
        self.lookups.lock().push(Lookup::Zone(key.to_string()));
        self.zones.lock().get(key).cloned()
    }

    fn perform_status_update(
        &self,
        luminary: Arc<FakeLuminary>,
    ) -> impl Future<Output = LinkResult> + Send {
        self.status_requests.fetch_add(1, Ordering::SeqCst);
        let delay = *self.status_delay.lock();
        let result = match self.status_failure.lock().clone() {
            Some(error) => Err(error),
            None => Ok(luminary.snapshot()),
        };

        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            result
        }
    }
}

// ============================================================================
// Bridge
// ============================================================================

#[derive(Debug, Default)]
pub struct FakeBridge {
    link: Mutex<Option<Arc<FakeLink>>>,
}

impl FakeBridge {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_link(link: &Arc<FakeLink>) -> Arc<Self> {
        let bridge = Self::new();
        bridge.set_link(Some(Arc::clone(link)));
        bridge
    }

    pub fn set_link(&self, link: Option<Arc<FakeLink>>) {
        *self.link.lock() = link;
    }
}

impl GatewayConnection for FakeBridge {
    type Link = FakeLink;

    fn active_link(&self) -> Option<Arc<FakeLink>> {
        self.link.lock().clone()
    }
}

// ============================================================================
// Publisher
// ============================================================================

/// Records every publication, including repeated identical ones.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    updates: Mutex<Vec<(ChannelId, ChannelState)>>,
}

impl RecordingPublisher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn updates(&self) -> Vec<(ChannelId, ChannelState)> {
        self.updates.lock().clone()
    }

    pub fn take(&self) -> Vec<(ChannelId, ChannelState)> {
        std::mem::take(&mut *self.updates.lock())
    }
}

impl StatePublisher for RecordingPublisher {
    fn update_state(&self, channel: ChannelId, state: ChannelState) {
        self.updates.lock().push((channel, state));
    }
}
