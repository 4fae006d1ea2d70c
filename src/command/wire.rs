// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-native operations decoded from channel commands.

use crate::channel::ChannelId;
use crate::types::{Dimmer, RgbColor};

use super::Command;

/// Transition duration sent with every luminance, temperature and color
/// change: apply immediately, no fade.
pub const TRANSITION_IMMEDIATE: i16 = 0;

/// An operation in the luminary's own representation.
///
/// Values are already clamped into their wire ranges; out-of-range input is
/// never wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireCommand {
    /// Switch the luminary on (`true`) or off.
    Switch(bool),

    /// Set the luminance byte (0-100).
    Luminance {
        /// Brightness percent.
        value: u8,
        /// Transition duration.
        transition: i16,
    },

    /// Set the color temperature.
    Temperature {
        /// Temperature in the device's own unit.
        value: i16,
        /// Transition duration.
        transition: i16,
    },

    /// Set the color.
    Rgb {
        /// Raw red/green/blue bytes.
        color: RgbColor,
        /// Transition duration.
        transition: i16,
    },
}

impl WireCommand {
    /// Decodes a command sent to `channel`.
    ///
    /// Returns `None` when the command's kind does not match the kind the
    /// channel expects (refresh requests included).
    #[must_use]
    pub fn decode(channel: ChannelId, command: &Command) -> Option<Self> {
        let wire = match (channel, *command) {
            (ChannelId::Power, Command::Power(state)) => Self::Switch(state.is_on()),
            (ChannelId::Dimmer, Command::Brightness(percent)) => Self::Luminance {
                value: Dimmer::saturating_from(percent).value(),
                transition: TRANSITION_IMMEDIATE,
            },
            (ChannelId::Temperature, Command::ColorTemperature(value)) => Self::Temperature {
                value: saturate_i16(value),
                transition: TRANSITION_IMMEDIATE,
            },
            (ChannelId::Color, Command::Color { red, green, blue }) => Self::Rgb {
                color: RgbColor::saturating_from(red, green, blue),
                transition: TRANSITION_IMMEDIATE,
            },
            _ => return None,
        };
        Some(wire)
    }

}

fn saturate_i16(value: i64) -> i16 {
    i16::try_from(value).unwrap_or(if value < 0 { i16::MIN } else { i16::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PowerState;

    fn all_commands() -> [Command; 5] {
        [
            Command::Power(PowerState::On),
            Command::Brightness(50),
            Command::ColorTemperature(2700),
            Command::color(1, 2, 3),
            Command::Refresh,
        ]
    }

    #[test]
    fn mismatched_kinds_decode_to_none() {
        for channel in ChannelId::ALL {
            for command in all_commands() {
                let decoded = WireCommand::decode(channel, &command);
                if command.kind() == channel.expected_kind() {
                    assert!(decoded.is_some(), "{channel} rejected {command}");
                } else {
                    assert_eq!(decoded, None, "{channel} accepted {command}");
                }
            }
        }
    }

    #[test]
    fn power_is_true_only_for_on() {
        assert_eq!(
            WireCommand::decode(ChannelId::Power, &Command::Power(PowerState::On)),
            Some(WireCommand::Switch(true))
        );
        assert_eq!(
            WireCommand::decode(ChannelId::Power, &Command::Power(PowerState::Off)),
            Some(WireCommand::Switch(false))
        );
    }

    #[test]
    fn brightness_is_clamped_to_percent() {
        let decode = |percent| WireCommand::decode(ChannelId::Dimmer, &Command::Brightness(percent));
        assert_eq!(
            decode(57),
            Some(WireCommand::Luminance {
                value: 57,
                transition: 0
            })
        );
        assert_eq!(
            decode(130),
            Some(WireCommand::Luminance {
                value: 100,
                transition: 0
            })
        );
        assert_eq!(
            decode(-3),
            Some(WireCommand::Luminance {
                value: 0,
                transition: 0
            })
        );
    }

    #[test]
    fn temperature_keeps_sign_and_clamps_to_16_bits() {
        let decode =
            |value| WireCommand::decode(ChannelId::Temperature, &Command::ColorTemperature(value));
        assert_eq!(
            decode(-5),
            Some(WireCommand::Temperature {
                value: -5,
                transition: 0
            })
        );
        assert_eq!(
            decode(70_000),
            Some(WireCommand::Temperature {
                value: i16::MAX,
                transition: 0
            })
        );
        assert_eq!(
            decode(-70_000),
            Some(WireCommand::Temperature {
                value: i16::MIN,
                transition: 0
            })
        );
    }

    #[test]
    fn temperature_saturates_at_integer_extremes() {
        let decode =
            |value| WireCommand::decode(ChannelId::Temperature, &Command::ColorTemperature(value));
        assert_eq!(
            decode(i64::MAX),
            Some(WireCommand::Temperature {
                value: i16::MAX,
                transition: 0
            })
        );
        assert_eq!(
            decode(i64::MIN),
            Some(WireCommand::Temperature {
                value: i16::MIN,
                transition: 0
            })
        );
        assert_eq!(
            decode(i64::from(i16::MIN)),
            Some(WireCommand::Temperature {
                value: i16::MIN,
                transition: 0
            })
        );
    }

    #[test]
    fn color_channels_are_clamped_independently() {
        assert_eq!(
            WireCommand::decode(ChannelId::Color, &Command::color(300, 20, -1)),
            Some(WireCommand::Rgb {
                color: RgbColor::new(255, 20, 0),
                transition: TRANSITION_IMMEDIATE,
            })
        );
    }
}
