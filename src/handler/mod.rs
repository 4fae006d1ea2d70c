// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device handler for Lightify bulbs and zones.
//!
//! A [`DeviceHandler`] translates channel commands into luminary operations,
//! forwards them through the gateway link of its parent bridge, and
//! republishes the full luminary state on all four channels whenever an
//! operation or a status poll completes.
//!
//! The handler keeps no device state and no reference to the link or the
//! luminary: both are looked up again for every command and every poll tick,
//! since the bridge may rebind its link and the link may forget devices at
//! any time. A lookup that finds nothing makes the operation a silent no-op.
//!
//! # Examples
//!
//! ```ignore
//! use std::sync::Arc;
//! use lightify_handler::{Command, DeviceHandler, EventBus, HandlerConfig, PowerState};
//!
//! let bus = EventBus::new("lightify:bulb:kitchen");
//! let handler = Arc::new(DeviceHandler::new(
//!     &HandlerConfig::bulb("84:18:26:00:00:0a:1b:2c"),
//!     &bridge,
//!     Arc::new(bus.clone()),
//! )?);
//!
//! // Start the status poll
//! handler.initialize();
//!
//! handler.handle_command("power", Command::Power(PowerState::On)).await;
//! handler.handle_command("dimmer", Command::Brightness(40)).await;
//! ```

mod poll;

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::channel::ChannelId;
use crate::command::{Command, WireCommand};
use crate::config::{HandlerConfig, PollSchedule};
use crate::error::Result;
use crate::event::StatePublisher;
use crate::identity::DeviceIdentity;
use crate::link::{GatewayConnection, GatewayLink, LinkResult, Luminary, LuminaryState};
use crate::state::reconcile;

/// Luminary type reachable through the bridge `C`.
pub type LuminaryOf<C> = <<C as GatewayConnection>::Link as GatewayLink>::Luminary;

/// Handler of a single Lightify bulb or zone thing.
pub struct DeviceHandler<C: GatewayConnection> {
    uid: Arc<str>,
    identity: DeviceIdentity,
    schedule: PollSchedule,
    bridge: Weak<C>,
    publisher: Arc<dyn StatePublisher>,
    poll_task: Mutex<Option<JoinHandle<()>>>,
}

impl<C: GatewayConnection> DeviceHandler<C> {
    /// Creates a handler attached beneath `bridge`.
    ///
    /// The handler only keeps a weak reference to the bridge; the bridge's
    /// owner decides how long it lives.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the identity cannot be derived, e.g.
    /// a zone without a `zoneId` property.
    pub fn new(
        config: &HandlerConfig,
        bridge: &Arc<C>,
        publisher: Arc<dyn StatePublisher>,
    ) -> Result<Self> {
        let identity = config.identity()?;
        tracing::debug!(thing = %config.uid, %identity, "Created device handler");

        Ok(Self {
            uid: Arc::from(config.uid.as_str()),
            identity,
            schedule: config.poll,
            bridge: Arc::downgrade(bridge),
            publisher,
            poll_task: Mutex::new(None),
        })
    }

    /// Returns the thing UID.
    #[must_use]
    pub fn thing_uid(&self) -> &str {
        &self.uid
    }

    /// Returns the gateway identity this handler operates on.
    #[must_use]
    pub fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    /// Looks up the luminary on the bridge's active link.
    ///
    /// Returns `None` if the bridge is gone, has no active link, or the link
    /// does not know this identity.
    #[must_use]
    pub fn luminary(&self) -> Option<Arc<LuminaryOf<C>>> {
        self.resolve().map(|(_, luminary)| luminary)
    }

    fn resolve(&self) -> Option<(Arc<C::Link>, Arc<LuminaryOf<C>>)> {
        let link = self.bridge.upgrade()?.active_link()?;
        let luminary = match &self.identity {
            DeviceIdentity::Device { address } => link.find_device(address),
            DeviceIdentity::Zone { key } => link.find_zone(key),
        }?;
        Some((link, luminary))
    }

    /// Handles a command sent by the controlling application to a channel.
    ///
    /// Unknown channels, commands of the wrong kind for the channel and
    /// luminaries unknown to the link are all ignored silently. Otherwise the
    /// command is forwarded to the luminary and, once the gateway
    /// acknowledges it, all four channels are republished.
    pub async fn handle_command(&self, channel_id: &str, command: Command) {
        tracing::debug!(thing = %self.uid, channel = channel_id, %command, "Command");

        let Ok(channel) = channel_id.parse::<ChannelId>() else {
            tracing::trace!(thing = %self.uid, channel = channel_id, "Ignoring unknown channel");
            return;
        };
        let Some(luminary) = self.luminary() else {
            tracing::trace!(thing = %self.uid, identity = %self.identity, "Luminary not known yet");
            return;
        };
        let Some(wire) = WireCommand::decode(channel, &command) else {
            tracing::trace!(
                thing = %self.uid,
                %channel,
                kind = ?command.kind(),
                "Ignoring command of mismatched kind"
            );
            return;
        };

        let result = match wire {
            WireCommand::Switch(on) => luminary.set_switch(on).await,
            WireCommand::Luminance { value, transition } => {
                luminary.set_luminance(value, transition).await
            }
            WireCommand::Temperature { value, transition } => {
                luminary.set_temperature(value, transition).await
            }
            WireCommand::Rgb { color, transition } => luminary.set_rgb(color, transition).await,
        };
        self.complete(result);
    }

    /// Republishes all four channels from a luminary snapshot.
    ///
    /// Called after every acknowledged command and every completed status
    /// update.
    pub fn on_updated(&self, luminary: &LuminaryState) {
        for (channel, state) in reconcile(luminary) {
            self.publisher.update_state(channel, state);
        }
    }

    fn complete(&self, result: LinkResult) {
        match result {
            Ok(state) => self.on_updated(&state),
            Err(error) => {
                tracing::debug!(thing = %self.uid, %error, "Gateway operation did not complete");
            }
        }
    }
}

impl<C: GatewayConnection> Drop for DeviceHandler<C> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<C: GatewayConnection> std::fmt::Debug for DeviceHandler<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceHandler")
            .field("uid", &self.uid)
            .field("identity", &self.identity)
            .field("schedule", &self.schedule)
            .field("polling", &self.is_polling())
            .finish_non_exhaustive()
    }
}
