// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dimmer type for the brightness channel.

use std::fmt;

use crate::error::ValueError;

/// Brightness level as a percentage (0-100).
///
/// Luminaries report their luminance as a single byte; the dimmer channel
/// only ever publishes values in 0-100.
///
/// # Examples
///
/// ```
/// use lightify_handler::types::Dimmer;
///
/// let dim = Dimmer::new(75).unwrap();
/// assert_eq!(dim.value(), 75);
///
/// assert_eq!(Dimmer::clamped(180), Dimmer::MAX);
/// assert!(Dimmer::new(101).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Dimmer(u8);

impl Dimmer {
    /// Minimum dimmer value (0%).
    pub const MIN: Self = Self(0);

    /// Maximum dimmer value (100%).
    pub const MAX: Self = Self(100);

    /// Creates a new dimmer value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a dimmer value, clamping to the valid range.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Creates a dimmer value from any integer percentage, clamping to 0-100.
    ///
    /// # Examples
    ///
    /// ```
    /// use lightify_handler::types::Dimmer;
    ///
    /// assert_eq!(Dimmer::saturating_from(-4).value(), 0);
    /// assert_eq!(Dimmer::saturating_from(57).value(), 57);
    /// assert_eq!(Dimmer::saturating_from(1_000).value(), 100);
    /// ```
    #[must_use]
    pub fn saturating_from(value: i64) -> Self {
        match u8::try_from(value) {
            Ok(value) => Self::clamped(value),
            Err(_) if value < 0 => Self::MIN,
            Err(_) => Self::MAX,
        }
    }

    /// Returns the brightness percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Dimmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Dimmer {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
