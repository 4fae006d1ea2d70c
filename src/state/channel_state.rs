// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Values published on channels, and the luminary-to-channel mapping.

use std::fmt;

use crate::channel::ChannelId;
use crate::link::LuminaryState;
use crate::types::{Dimmer, HsbColor, PowerState};

/// A value published on one of the light channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ChannelState {
    /// Power channel value.
    OnOff(PowerState),
    /// Dimmer channel value.
    Percent(Dimmer),
    /// Temperature channel value.
    Decimal(i64),
    /// Color channel value.
    Hsb(HsbColor),
}

impl ChannelState {
    /// Returns the channel this kind of value is published on.
    #[must_use]
    pub const fn channel(&self) -> ChannelId {
        match self {
            Self::OnOff(_) => ChannelId::Power,
            Self::Percent(_) => ChannelId::Dimmer,
            Self::Decimal(_) => ChannelId::Temperature,
            Self::Hsb(_) => ChannelId::Color,
        }
    }
}

impl fmt::Display for ChannelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnOff(state) => write!(f, "{state}"),
            Self::Percent(dimmer) => write!(f, "{}", dimmer.value()),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Hsb(color) => write!(f, "{color}"),
        }
    }
}

/// Maps a luminary snapshot onto all four channels.
///
/// Always yields every channel, in [`ChannelId::ALL`] order: a single command
/// can change more than the attribute it targets, and a status update carries
/// no information about what changed.
#[must_use]
pub fn reconcile(luminary: &LuminaryState) -> [(ChannelId, ChannelState); 4] {
    [
        (
            ChannelId::Power,
            ChannelState::OnOff(PowerState::from(luminary.powered)),
        ),
        (
            ChannelId::Dimmer,
            ChannelState::Percent(Dimmer::clamped(luminary.luminance)),
        ),
        (
            ChannelId::Temperature,
            ChannelState::Decimal(i64::from(luminary.temperature)),
        ),
        (ChannelId::Color, ChannelState::Hsb(luminary.rgb.to_hsb())),
    ]
}
