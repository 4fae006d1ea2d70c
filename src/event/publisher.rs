// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel-update primitive.

use std::sync::Arc;

use crate::channel::ChannelId;
use crate::state::ChannelState;

/// Receives channel values published by a device handler.
///
/// Implementations must make repeated publication of an identical value
/// free of side effects beyond the publication itself. They are called from
/// both the command path and the poll task, possibly concurrently.
pub trait StatePublisher: Send + Sync {
    /// Publishes `state` as the current value of `channel`.
    fn update_state(&self, channel: ChannelId, state: ChannelState);
}

impl<P: StatePublisher + ?Sized> StatePublisher for Arc<P> {
    fn update_state(&self, channel: ChannelId, state: ChannelState) {
        (**self).update_state(channel, state);
    }
}
