// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Abstract channel state.
//!
//! [`ChannelState`] is the value published on one channel. [`reconcile`] maps
//! a luminary snapshot onto all four channels, and [`ChannelStates`] tracks
//! the last value of each channel so that repeated publications can be told
//! apart from actual changes.
//!
//! # Examples
//!
//! ```
//! use lightify_handler::channel::ChannelId;
//! use lightify_handler::link::LuminaryState;
//! use lightify_handler::state::{ChannelStates, reconcile};
//! use lightify_handler::types::RgbColor;
//!
//! let luminary = LuminaryState {
//!     powered: true,
//!     luminance: 40,
//!     temperature: 2700,
//!     rgb: RgbColor::new(10, 20, 30),
//! };
//!
//! let mut states = ChannelStates::new();
//! for (channel, state) in reconcile(&luminary) {
//!     assert!(states.apply(channel, state));
//! }
//!
//! // Same snapshot again: nothing changes
//! assert!(reconcile(&luminary).into_iter().all(|(c, s)| !states.apply(c, s)));
//! ```

mod channel_state;
mod channel_states;

pub use channel_state::{ChannelState, reconcile};
pub use channel_states::ChannelStates;
