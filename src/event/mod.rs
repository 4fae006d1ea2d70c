// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel state publication.
//!
//! The handler publishes channel values through the [`StatePublisher`] trait,
//! the channel-update primitive of the hosting framework. [`EventBus`] is a
//! ready-made publisher built on tokio's broadcast channel: it remembers the
//! last value of every channel and only broadcasts a [`ChannelEvent`] when a
//! value actually changes.
//!
//! # Examples
//!
//! ```
//! use lightify_handler::channel::ChannelId;
//! use lightify_handler::event::{EventBus, StatePublisher};
//! use lightify_handler::state::ChannelState;
//! use lightify_handler::types::PowerState;
//!
//! let bus = EventBus::new("lightify:bulb:kitchen");
//! let mut rx = bus.subscribe();
//!
//! bus.update_state(ChannelId::Power, ChannelState::OnOff(PowerState::On));
//! bus.update_state(ChannelId::Power, ChannelState::OnOff(PowerState::On));
//!
//! assert!(rx.try_recv().is_ok());
//! assert!(rx.try_recv().is_err()); // second publication was a no-op
//! ```

mod channel_event;
mod event_bus;
mod publisher;

pub use channel_event::ChannelEvent;
pub use event_bus::EventBus;
pub use publisher::StatePublisher;
