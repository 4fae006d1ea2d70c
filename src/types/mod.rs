// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for light channels.
//!
//! This module provides type-safe representations of the values carried by
//! the abstract light channels. Each constrained type ensures values are
//! within their valid ranges at construction time.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off state of the power channel
//! - [`Dimmer`] - Brightness level (0-100%)
//! - [`HsbColor`] - HSB color (Hue 0-360, Saturation 0-100, Brightness 0-100)
//! - [`RgbColor`] - Raw 8-bit red/green/blue as stored by a luminary

mod color;
mod dimmer;
mod power;
mod rgb_color;

pub use color::HsbColor;
pub use dimmer::Dimmer;
pub use power::PowerState;
pub use rgb_color::RgbColor;
