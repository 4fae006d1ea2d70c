// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Last known value of every channel.

use crate::channel::ChannelId;
use crate::types::{Dimmer, HsbColor, PowerState};

use super::ChannelState;

/// Last published value of each light channel.
///
/// All fields are optional because nothing is known until the first
/// publication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChannelStates {
    power: Option<PowerState>,
    dimmer: Option<Dimmer>,
    temperature: Option<i64>,
    color: Option<HsbColor>,
}

impl ChannelStates {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the power channel value.
    #[must_use]
    pub fn power(&self) -> Option<PowerState> {
        self.power
    }

    /// Returns the dimmer channel value.
    #[must_use]
    pub fn dimmer(&self) -> Option<Dimmer> {
        self.dimmer
    }

    /// Returns the temperature channel value.
    #[must_use]
    pub fn temperature(&self) -> Option<i64> {
        self.temperature
    }

    /// Returns the color channel value.
    #[must_use]
    pub fn color(&self) -> Option<HsbColor> {
        self.color
    }

    /// Returns the value of `channel` as a [`ChannelState`].
    #[must_use]
    pub fn get(&self, channel: ChannelId) -> Option<ChannelState> {
        match channel {
            ChannelId::Power => self.power.map(ChannelState::OnOff),
            ChannelId::Dimmer => self.dimmer.map(ChannelState::Percent),
            ChannelId::Temperature => self.temperature.map(ChannelState::Decimal),
            ChannelId::Color => self.color.map(ChannelState::Hsb),
        }
    }

    /// Records `state` as the value of `channel`.
    ///
    /// Returns `true` if the stored value changed. A value of the wrong kind
    /// for the channel is ignored and returns `false`.
    pub fn apply(&mut self, channel: ChannelId, state: ChannelState) -> bool {
        fn replace<T: PartialEq>(slot: &mut Option<T>, value: T) -> bool {
            if slot.as_ref() == Some(&value) {
                return false;
            }
            *slot = Some(value);
            true
        }

        match (channel, state) {
            (ChannelId::Power, ChannelState::OnOff(value)) => replace(&mut self.power, value),
            (ChannelId::Dimmer, ChannelState::Percent(value)) => replace(&mut self.dimmer, value),
            (ChannelId::Temperature, ChannelState::Decimal(value)) => {
                replace(&mut self.temperature, value)
            }
            (ChannelId::Color, ChannelState::Hsb(value)) => replace(&mut self.color, value),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snapshot_is_empty() {
        let states = ChannelStates::new();
        for channel in ChannelId::ALL {
            assert_eq!(states.get(channel), None);
        }
    }

    #[test]
    fn apply_reports_changes_only() {
        let mut states = ChannelStates::new();

        assert!(states.apply(ChannelId::Power, ChannelState::OnOff(PowerState::On)));
        assert!(!states.apply(ChannelId::Power, ChannelState::OnOff(PowerState::On)));
        assert!(states.apply(ChannelId::Power, ChannelState::OnOff(PowerState::Off)));

        assert_eq!(states.power(), Some(PowerState::Off));
    }

    #[test]
    fn apply_stores_each_channel() {
        let mut states = ChannelStates::new();
        states.apply(ChannelId::Dimmer, ChannelState::Percent(Dimmer::MAX));
        states.apply(ChannelId::Temperature, ChannelState::Decimal(2700));
        states.apply(ChannelId::Color, ChannelState::Hsb(HsbColor::blue()));

        assert_eq!(states.dimmer(), Some(Dimmer::MAX));
        assert_eq!(states.temperature(), Some(2700));
        assert_eq!(states.color(), Some(HsbColor::blue()));
        assert_eq!(states.power(), None);
    }

    #[test]
    fn apply_ignores_value_of_wrong_kind() {
        let mut states = ChannelStates::new();
        assert!(!states.apply(ChannelId::Dimmer, ChannelState::Decimal(50)));
        assert_eq!(states.dimmer(), None);
    }
}
