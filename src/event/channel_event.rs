// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel event type.

use std::sync::Arc;

use crate::channel::ChannelId;
use crate::state::{ChannelState, ChannelStates};

/// A channel of a thing changed its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelEvent {
    /// UID of the thing owning the channel.
    pub thing_uid: Arc<str>,
    /// The channel that changed.
    pub channel: ChannelId,
    /// The new value.
    pub state: ChannelState,
    /// All channel values after the change.
    pub states: ChannelStates,
}

impl ChannelEvent {
    /// Creates a channel event.
    #[must_use]
    pub fn new(
        thing_uid: Arc<str>,
        channel: ChannelId,
        state: ChannelState,
        states: ChannelStates,
    ) -> Self {
        Self {
            thing_uid,
            channel,
            state,
            states,
        }
    }
}
