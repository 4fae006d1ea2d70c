// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HSB color as published on the color channel.

use std::fmt;

use crate::error::ValueError;

/// HSB color representation (Hue, Saturation, Brightness).
///
/// The color channel speaks HSB while luminaries store raw RGB bytes; see
/// [`RgbColor::to_hsb`](super::RgbColor::to_hsb) and
/// [`RgbColor::from_hsb`](super::RgbColor::from_hsb) for the conversions.
///
/// # Examples
///
/// ```
/// use lightify_handler::types::HsbColor;
///
/// let red = HsbColor::new(0, 100, 100).unwrap();
/// assert_eq!(red.hue(), 0);
/// assert_eq!(red.saturation(), 100);
/// assert_eq!(red.brightness(), 100);
///
/// assert!(HsbColor::new(361, 0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct HsbColor {
    hue: u16,
    saturation: u8,
    brightness: u8,
}

impl HsbColor {
    /// Maximum hue value (inclusive, 360 equals 0).
    pub const MAX_HUE: u16 = 360;

    /// Maximum saturation value.
    pub const MAX_SATURATION: u8 = 100;

    /// Maximum brightness value.
    pub const MAX_BRIGHTNESS: u8 = 100;

    /// Creates a new HSB color.
    ///
    /// # Errors
    ///
    /// Returns error if any value is outside its valid range.
    pub fn new(hue: u16, saturation: u8, brightness: u8) -> Result<Self, ValueError> {
        if hue > Self::MAX_HUE {
            return Err(ValueError::InvalidHue(hue));
        }
        if saturation > Self::MAX_SATURATION {
            return Err(ValueError::InvalidSaturation(saturation));
        }
        if brightness > Self::MAX_BRIGHTNESS {
            return Err(ValueError::InvalidBrightness(brightness));
        }
        Ok(Self {
            hue,
            saturation,
            brightness,
        })
    }

    /// Builds a color from components already known to be in range, clamping
    /// anything that is not.
    pub(crate) const fn clamped(hue: u16, saturation: u8, brightness: u8) -> Self {
        Self {
            hue: if hue > Self::MAX_HUE { Self::MAX_HUE } else { hue },
            saturation: if saturation > Self::MAX_SATURATION {
                Self::MAX_SATURATION
            } else {
                saturation
            },
            brightness: if brightness > Self::MAX_BRIGHTNESS {
                Self::MAX_BRIGHTNESS
            } else {
                brightness
            },
        }
    }

    /// Creates a pure red color at full brightness.
    #[must_use]
    pub const fn red() -> Self {
        Self::clamped(0, 100, 100)
    }

    /// Creates a pure green color at full brightness.
    #[must_use]
    pub const fn green() -> Self {
        Self::clamped(120, 100, 100)
    }

    /// Creates a pure blue color at full brightness.
    #[must_use]
    pub const fn blue() -> Self {
        Self::clamped(240, 100, 100)
    }

    /// Creates a white color (no saturation).
    #[must_use]
    pub const fn white() -> Self {
        Self::clamped(0, 0, 100)
    }

    /// Returns the hue value (0-360).
    #[must_use]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Returns the saturation value (0-100).
    #[must_use]
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Returns the brightness value (0-100).
    #[must_use]
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }
}

impl Default for HsbColor {
    fn default() -> Self {
        Self::white()
    }
}

impl fmt::Display for HsbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.hue, self.saturation, self.brightness)
    }
}
