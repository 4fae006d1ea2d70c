// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Abstract channel commands and their device-native form.
//!
//! A [`Command`] is what the controlling application sends to a channel. It
//! is loosely typed: numeric payloads arrive as plain integers and may be out
//! of range. [`WireCommand::decode`] checks the command against the channel it
//! was sent to and converts it into the operation a luminary understands.
//!
//! | Channel | Accepted command | Wire operation |
//! |---------|------------------|----------------|
//! | `power` | [`Command::Power`] | [`WireCommand::Switch`] |
//! | `dimmer` | [`Command::Brightness`] | [`WireCommand::Luminance`] |
//! | `temperature` | [`Command::ColorTemperature`] | [`WireCommand::Temperature`] |
//! | `color` | [`Command::Color`] | [`WireCommand::Rgb`] |
//!
//! # Examples
//!
//! ```
//! use lightify_handler::channel::ChannelId;
//! use lightify_handler::command::{Command, WireCommand};
//!
//! let wire = WireCommand::decode(ChannelId::Dimmer, &Command::Brightness(57));
//! assert_eq!(wire, Some(WireCommand::Luminance { value: 57, transition: 0 }));
//!
//! // A command of the wrong kind for the channel decodes to nothing
//! assert_eq!(WireCommand::decode(ChannelId::Dimmer, &Command::Refresh), None);
//! ```

mod wire;

pub use wire::{TRANSITION_IMMEDIATE, WireCommand};

use std::fmt;

use crate::channel::CommandKind;
use crate::types::{Dimmer, HsbColor, PowerState, RgbColor};

/// A command delivered by the controlling application to a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Switch on or off.
    Power(PowerState),

    /// Brightness in percent. Expected range 0-100.
    Brightness(i64),

    /// Color temperature in the device's own unit. Expected to fit in 16 bits.
    ColorTemperature(i64),

    /// Color as red/green/blue. Each channel is expected in 0-255.
    Color {
        /// Red channel.
        red: i64,
        /// Green channel.
        green: i64,
        /// Blue channel.
        blue: i64,
    },

    /// Request to refresh the channel state.
    Refresh,
}

impl Command {
    /// Creates a color command from red/green/blue values.
    #[must_use]
    pub const fn color(red: i64, green: i64, blue: i64) -> Self {
        Self::Color { red, green, blue }
    }

    /// Returns the runtime kind of this command.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::Power(_) => CommandKind::Power,
            Self::Brightness(_) => CommandKind::Brightness,
            Self::ColorTemperature(_) => CommandKind::ColorTemperature,
            Self::Color { .. } => CommandKind::Color,
            Self::Refresh => CommandKind::Refresh,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power(state) => write!(f, "{state}"),
            Self::Brightness(percent) => write!(f, "{percent}%"),
            Self::ColorTemperature(value) => write!(f, "{value}"),
            Self::Color { red, green, blue } => write!(f, "RGB({red}, {green}, {blue})"),
            Self::Refresh => f.write_str("REFRESH"),
        }
    }
}

impl From<PowerState> for Command {
    fn from(state: PowerState) -> Self {
        Self::Power(state)
    }
}

impl From<Dimmer> for Command {
    fn from(dimmer: Dimmer) -> Self {
        Self::Brightness(i64::from(dimmer.value()))
    }
}

impl From<RgbColor> for Command {
    fn from(color: RgbColor) -> Self {
        Self::color(
            i64::from(color.red()),
            i64::from(color.green()),
            i64::from(color.blue()),
        )
    }
}

/// Color pickers send HSB; the luminary is driven with its RGB equivalent.
impl From<HsbColor> for Command {
    fn from(color: HsbColor) -> Self {
        RgbColor::from_hsb(&color).into()
    }
}
