// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with HSB conversion.
//!
//! Luminaries store their color as three raw bytes. The color channel speaks
//! HSB, so every republish goes through [`RgbColor::to_hsb`].

use std::fmt;

use super::HsbColor;

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use lightify_handler::types::RgbColor;
///
/// let color = RgbColor::new(255, 128, 0);
/// assert_eq!(color.red(), 255);
/// assert_eq!(color.to_string(), "#FF8000");
///
/// // Out-of-range input is clamped, never wrapped
/// let clamped = RgbColor::saturating_from(300, -20, 64);
/// assert_eq!(clamped, RgbColor::new(255, 0, 64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates an RGB color from arbitrary integers, clamping each channel
    /// to 0-255.
    #[must_use]
    pub fn saturating_from(red: i64, green: i64, blue: i64) -> Self {
        Self::new(saturate_channel(red), saturate_channel(green), saturate_channel(blue))
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Converts this RGB color to HSB format.
    ///
    /// # Examples
    ///
    /// ```
    /// use lightify_handler::types::RgbColor;
    ///
    /// let hsb = RgbColor::new(10, 20, 30).to_hsb();
    /// assert_eq!((hsb.hue(), hsb.saturation(), hsb.brightness()), (210, 67, 12));
    /// ```
    #[must_use]
    pub fn to_hsb(&self) -> HsbColor {
        let (h, s, b) = rgb_to_hsb(self.red, self.green, self.blue);
        HsbColor::clamped(h, s, b)
    }

    /// Creates an RGB color from an HSB color.
    ///
    /// Due to rounding, converting HSB to RGB and back may not produce the
    /// exact same HSB values.
    #[must_use]
    pub fn from_hsb(hsb: &HsbColor) -> Self {
        let (r, g, b) = hsb_to_rgb(hsb.hue(), hsb.saturation(), hsb.brightness());
        Self::new(r, g, b)
    }
}

/// Defaults to black, the color of a luminary that never reported one.
impl Default for RgbColor {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<RgbColor> for (u8, u8, u8) {
    fn from(color: RgbColor) -> Self {
        (color.red, color.green, color.blue)
    }
}

fn saturate_channel(value: i64) -> u8 {
    u8::try_from(value).unwrap_or(if value < 0 { 0 } else { u8::MAX })
}

/// Converts RGB values to HSB.
///
/// Returns (hue: 0-360, saturation: 0-100, brightness: 0-100)
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]
fn rgb_to_hsb(r: u8, g: u8, b: u8) -> (u16, u8, u8) {
    let r = f32::from(r) / 255.0;
    let g = f32::from(g) / 255.0;
    let b = f32::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let brightness = (max * 100.0).round() as u8;

    let saturation = if max == 0.0 {
        0
    } else {
        ((delta / max) * 100.0).round() as u8
    };

    let hue = if delta < f32::EPSILON {
        0
    } else if (max - r).abs() < f32::EPSILON {
        let h = 60.0 * (((g - b) / delta) % 6.0);
        if h < 0.0 {
            (h + 360.0).round() as u16
        } else {
            h.round() as u16
        }
    } else if (max - g).abs() < f32::EPSILON {
        (60.0 * (((b - r) / delta) + 2.0)).round() as u16
    } else {
        (60.0 * (((r - g) / delta) + 4.0)).round() as u16
    };

    (hue, saturation, brightness)
}

/// Converts HSB values to RGB.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]
fn hsb_to_rgb(h: u16, s: u8, v: u8) -> (u8, u8, u8) {
    let s = f32::from(s) / 100.0;
    let v = f32::from(v) / 100.0;
    let h = f32::from(h % 360);

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}
