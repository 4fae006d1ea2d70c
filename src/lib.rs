// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lightify Handler - per-device handler for OSRAM Lightify bulbs and zones.
//!
//! This library sits between a home-automation framework and a Lightify
//! gateway link. It translates channel commands into luminary operations and
//! republishes the luminary state on every channel once the gateway
//! acknowledges a change or answers a status poll.
//!
//! # Supported Things
//!
//! - **Bulb** (`lightify:bulb`): a single luminary, addressed by its UID
//! - **Zone** (`lightify:zone`): a group of luminaries, addressed through the
//!   `zoneId` property
//!
//! # Channels
//!
//! | Channel       | Command                        | Published state   |
//! |---------------|--------------------------------|-------------------|
//! | `power`       | [`Command::Power`]             | on/off            |
//! | `dimmer`      | [`Command::Brightness`]        | percent           |
//! | `temperature` | [`Command::ColorTemperature`]  | decimal           |
//! | `color`       | [`Command::Color`]             | hue/sat/bright    |
//!
//! A command of the wrong kind for its channel is ignored, and so is every
//! command while the luminary is unknown to the gateway link.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use lightify_handler::{Command, DeviceHandler, EventBus, HandlerConfig, PowerState};
//!
//! #[tokio::main]
//! async fn main() -> lightify_handler::Result<()> {
//!     // `bridge` implements `GatewayConnection`
//!     let bridge = Arc::new(connect_bridge().await);
//!
//!     let bus = EventBus::new("lightify:zone:living-room");
//!     let mut events = bus.subscribe();
//!
//!     let handler = Arc::new(DeviceHandler::new(
//!         &HandlerConfig::zone("lightify:zone:living-room", "3"),
//!         &bridge,
//!         Arc::new(bus.clone()),
//!     )?);
//!     handler.initialize();
//!
//!     handler.handle_command("power", Command::Power(PowerState::On)).await;
//!
//!     while let Ok(event) = events.recv().await {
//!         println!("{} -> {}", event.channel, event.state);
//!     }
//!     Ok(())
//! }
//! ```

pub mod channel;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
mod handler;
pub mod identity;
pub mod link;
pub mod state;
pub mod types;

pub use channel::{ChannelId, CommandKind};
pub use command::{Command, TRANSITION_IMMEDIATE, WireCommand};
pub use config::{HandlerConfig, PollSchedule};
pub use error::{ConfigError, Error, LinkError, Result, ValueError};
pub use event::{ChannelEvent, EventBus, StatePublisher};
pub use handler::{DeviceHandler, LuminaryOf};
pub use identity::{DeviceIdentity, SUPPORTED_THING_TYPES, ThingType};
pub use link::{GatewayConnection, GatewayLink, LinkResult, Luminary, LuminaryState};
pub use state::{ChannelState, ChannelStates, reconcile};
pub use types::{Dimmer, HsbColor, PowerState, RgbColor};
