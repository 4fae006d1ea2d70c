// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event bus for broadcasting channel changes.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;

use crate::channel::ChannelId;
use crate::state::{ChannelState, ChannelStates};

use super::{ChannelEvent, StatePublisher};

/// Default channel capacity for the event bus.
const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Channel-state publisher for one thing, broadcasting changes to any number
/// of subscribers.
///
/// Publishing the value a channel already has updates nothing and broadcasts
/// nothing.
///
/// # Capacity
///
/// The bus has a fixed capacity (default 64). A subscriber that falls behind
/// loses the oldest events and receives `RecvError::Lagged`.
#[derive(Debug, Clone)]
pub struct EventBus {
    thing_uid: Arc<str>,
    sender: broadcast::Sender<ChannelEvent>,
    states: Arc<Mutex<ChannelStates>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity.
    #[must_use]
    pub fn new(thing_uid: impl Into<Arc<str>>) -> Self {
        Self::with_capacity(thing_uid, DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a new event bus with the specified capacity.
    #[must_use]
    pub fn with_capacity(thing_uid: impl Into<Arc<str>>, capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            thing_uid: thing_uid.into(),
            sender,
            states: Arc::new(Mutex::new(ChannelStates::new())),
        }
    }

    /// Subscribes to channel events published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ChannelEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Returns the current value of every channel.
    #[must_use]
    pub fn states(&self) -> ChannelStates {
        *self.states.lock()
    }
}

impl StatePublisher for EventBus {
    fn update_state(&self, channel: ChannelId, state: ChannelState) {
        let event = {
            let mut states = self.states.lock();
            if !states.apply(channel, state) {
                return;
            }
            ChannelEvent::new(Arc::clone(&self.thing_uid), channel, state, *states)
        };

        tracing::trace!(thing = %self.thing_uid, %channel, %state, "Channel state changed");
        // No subscribers is fine
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Dimmer, PowerState};

    #[test]
    fn new_bus_has_no_subscribers() {
        let bus = EventBus::new("lightify:bulb:a");
        assert_eq!(bus.subscriber_count(), 0);
        let _rx = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[tokio::test]
    async fn change_is_broadcast_with_full_state() {
        let bus = EventBus::new("lightify:bulb:a");
        let mut rx = bus.subscribe();

        bus.update_state(ChannelId::Power, ChannelState::OnOff(PowerState::On));
        bus.update_state(ChannelId::Dimmer, ChannelState::Percent(Dimmer::MAX));

        let first = rx.recv().await.unwrap();
        assert_eq!(&*first.thing_uid, "lightify:bulb:a");
        assert_eq!(first.channel, ChannelId::Power);
        assert_eq!(first.states.dimmer(), None);

        let second = rx.recv().await.unwrap();
        assert_eq!(second.channel, ChannelId::Dimmer);
        assert_eq!(second.states.power(), Some(PowerState::On));
        assert_eq!(second.states.dimmer(), Some(Dimmer::MAX));
    }

    #[test]
    fn identical_publication_is_not_broadcast() {
        let bus = EventBus::new("lightify:bulb:a");
        let mut rx = bus.subscribe();

        for _ in 0..3 {
            bus.update_state(ChannelId::Temperature, ChannelState::Decimal(2700));
        }

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
        assert_eq!(bus.states().temperature(), Some(2700));
    }

    #[test]
    fn publishing_without_subscribers_still_records_state() {
        let bus = EventBus::new("lightify:bulb:a");
        bus.update_state(ChannelId::Power, ChannelState::OnOff(PowerState::Off));
        assert_eq!(bus.states().power(), Some(PowerState::Off));
    }

    #[test]
    fn clones_share_channel_and_state() {
        let bus = EventBus::new("lightify:bulb:a");
        let clone = bus.clone();
        let _rx = bus.subscribe();

        clone.update_state(ChannelId::Power, ChannelState::OnOff(PowerState::On));

        assert_eq!(clone.subscriber_count(), 1);
        assert_eq!(bus.states().power(), Some(PowerState::On));
    }
}
