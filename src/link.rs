// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interfaces of the gateway collaborators.
//!
//! The byte protocol spoken with the Lightify gateway, the TCP connection and
//! the pairing database all live outside this crate. The handler only talks
//! to them through three traits:
//!
//! - [`GatewayConnection`] - the parent bridge thing; hands out the link that
//!   is currently active, if any
//! - [`GatewayLink`] - the shared link to the gateway; resolves identities and
//!   performs status updates
//! - [`Luminary`] - a bulb, strip or zone known to the link
//!
//! Every asynchronous operation resolves to the [`LuminaryState`] observed
//! once the gateway acknowledged it. A link that never gets an answer resolves
//! to a [`LinkError`] instead.
//!
//! Implementations are responsible for their own synchronization: the handler
//! calls them concurrently from the command path and the poll task.

use std::future::Future;
use std::sync::Arc;

use crate::error::LinkError;
use crate::types::RgbColor;

/// Result of a gateway operation: the post-operation luminary state.
pub type LinkResult = Result<LuminaryState, LinkError>;

/// Snapshot of a luminary's attributes as stored by the gateway link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LuminaryState {
    /// Whether the luminary is switched on.
    pub powered: bool,
    /// Luminance byte, normally 0-100.
    pub luminance: u8,
    /// Color temperature in the device's own unit.
    pub temperature: i16,
    /// Raw color bytes.
    pub rgb: RgbColor,
}

/// A bulb, light strip or zone reachable through the gateway link.
///
/// The attribute accessors expose what the link last stored for this
/// luminary. Link implementations resolve their futures with
/// [`snapshot`](Self::snapshot) once the gateway answered; the handler only
/// ever reconciles from that resolved [`LuminaryState`].
pub trait Luminary: Send + Sync + 'static {
    /// Returns whether the luminary is switched on.
    fn is_powered(&self) -> bool;

    /// Returns the luminance byte.
    fn luminance(&self) -> u8;

    /// Returns the color temperature.
    fn temperature(&self) -> i16;

    /// Returns the raw color bytes.
    fn rgb(&self) -> RgbColor;

    /// Reads all attributes at once.
    fn snapshot(&self) -> LuminaryState {
        LuminaryState {
            powered: self.is_powered(),
            luminance: self.luminance(),
            temperature: self.temperature(),
            rgb: self.rgb(),
        }
    }

    /// Switches the luminary on or off.
    fn set_switch(&self, on: bool) -> impl Future<Output = LinkResult> + Send;

    /// Sets the luminance.
    fn set_luminance(
        &self,
        value: u8,
        transition: i16,
    ) -> impl Future<Output = LinkResult> + Send;

    /// Sets the color temperature.
    fn set_temperature(
        &self,
        value: i16,
        transition: i16,
    ) -> impl Future<Output = LinkResult> + Send;

    /// Sets the color.
    fn set_rgb(&self, color: RgbColor, transition: i16)
    -> impl Future<Output = LinkResult> + Send;
}

/// The shared link to a Lightify gateway.
///
/// Devices and zones may be added, removed or rebound at any time, so lookups
/// must not be cached by callers.
pub trait GatewayLink: Send + Sync + 'static {
    /// Luminary type handed out by this link.
    type Luminary: Luminary;

    /// Looks up a single device by address.
    fn find_device(&self, address: &str) -> Option<Arc<Self::Luminary>>;

    /// Looks up a zone by its namespaced key (`zone::<id>`).
    fn find_zone(&self, key: &str) -> Option<Arc<Self::Luminary>>;

    /// Refreshes the stored attributes of `luminary` from the gateway.
    fn perform_status_update(
        &self,
        luminary: Arc<Self::Luminary>,
    ) -> impl Future<Output = LinkResult> + Send;
}

/// The parent bridge thing a device handler is attached to.
pub trait GatewayConnection: Send + Sync + 'static {
    /// Link type managed by this bridge.
    type Link: GatewayLink;

    /// Returns the link currently in use, or `None` while the bridge is not
    /// ready.
    fn active_link(&self) -> Option<Arc<Self::Link>>;
}
