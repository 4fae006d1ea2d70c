// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The four light channels exposed by a Lightify thing.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Identifier of one of the four fixed light channels.
///
/// Each channel accepts exactly one [`CommandKind`].
///
/// # Examples
///
/// ```
/// use lightify_handler::channel::{ChannelId, CommandKind};
///
/// let channel: ChannelId = "dimmer".parse().unwrap();
/// assert_eq!(channel, ChannelId::Dimmer);
/// assert_eq!(channel.expected_kind(), CommandKind::Brightness);
/// assert!("hue".parse::<ChannelId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelId {
    /// On/off switch.
    Power,
    /// Brightness in percent.
    Dimmer,
    /// Color temperature in the device's own unit.
    Temperature,
    /// RGB color, published as HSB.
    Color,
}

impl ChannelId {
    /// All channels, in publication order.
    pub const ALL: [Self; 4] = [Self::Power, Self::Dimmer, Self::Temperature, Self::Color];

    /// Returns the channel identifier string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Dimmer => "dimmer",
            Self::Temperature => "temperature",
            Self::Color => "color",
        }
    }

    /// Returns the command kind this channel accepts.
    #[must_use]
    pub const fn expected_kind(&self) -> CommandKind {
        match self {
            Self::Power => CommandKind::Power,
            Self::Dimmer => CommandKind::Brightness,
            Self::Temperature => CommandKind::ColorTemperature,
            Self::Color => CommandKind::Color,
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|channel| channel.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownChannel(s.to_string()))
    }
}

/// Runtime kind of a [`Command`](crate::command::Command).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// On/off.
    Power,
    /// Percent brightness.
    Brightness,
    /// Signed color temperature.
    ColorTemperature,
    /// Red/green/blue color.
    Color,
    /// Framework request to refresh the channel.
    Refresh,
}
