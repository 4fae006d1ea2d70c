// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Periodic status poll.

use std::sync::{Arc, Weak};

use tokio::task::JoinSet;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::config::PollSchedule;
use crate::link::{GatewayConnection, GatewayLink};

use super::{DeviceHandler, LuminaryOf};

impl<C: GatewayConnection> DeviceHandler<C> {
    /// Starts the periodic status poll.
    ///
    /// The first poll runs after the schedule's initial delay, then once per
    /// period until [`dispose`](Self::dispose) is called or the handler is
    /// dropped. Calling this again while the poll is running does nothing.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn initialize(self: &Arc<Self>) {
        let mut poll_task = self.poll_task.lock();
        if poll_task.is_some() {
            tracing::debug!(thing = %self.uid, "Status poll already running");
            return;
        }

        *poll_task = Some(tokio::spawn(run_status_poll(
            Arc::downgrade(self),
            self.schedule,
        )));
        tracing::debug!(
            thing = %self.uid,
            initial_delay_ms = self.schedule.initial_delay().as_millis(),
            period_ms = self.schedule.period().as_millis(),
            "Status poll scheduled"
        );
    }

    /// Cancels the periodic status poll.
    ///
    /// A status update still awaiting its answer is abandoned and republishes
    /// nothing.
    pub fn dispose(&self) {
        if let Some(task) = self.poll_task.lock().take() {
            task.abort();
            tracing::debug!(thing = %self.uid, "Status poll cancelled");
        }
    }

    /// Returns `true` while the periodic status poll is scheduled.
    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.poll_task
            .lock()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Runs a single status poll.
    ///
    /// Does nothing if the luminary is currently unknown; otherwise asks the
    /// link for a status update and republishes all channels when it
    /// completes.
    pub async fn poll_status(&self) {
        let Some((link, luminary)) = self.resolve() else {
            tracing::trace!(thing = %self.uid, identity = %self.identity, "Skipping status poll");
            return;
        };

        let result = link.perform_status_update(luminary).await;
        self.complete(result);
    }
}

/// Ticks at the schedule's period and requests one status update per tick.
///
/// The request runs in its own task so the ticker keeps its pace while the
/// gateway answers. A tick that finds the previous request still unanswered
/// is skipped. Ticks missed while the runtime was busy are skipped as well,
/// not replayed. Dropping this future aborts the outstanding request.
async fn run_status_poll<C: GatewayConnection>(
    handler: Weak<DeviceHandler<C>>,
    schedule: PollSchedule,
) {
    let start = Instant::now() + schedule.initial_delay();
    let mut ticker = time::interval_at(start, schedule.period());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut pending = JoinSet::new();

    loop {
        ticker.tick().await;
        while pending.try_join_next().is_some() {}

        let Some(strong) = handler.upgrade() else {
            break;
        };
        if !pending.is_empty() {
            tracing::trace!(thing = %strong.uid, "Previous status update still pending, skipping tick");
            continue;
        }
        let Some((link, luminary)) = strong.resolve() else {
            tracing::trace!(thing = %strong.uid, identity = %strong.identity, "Skipping status poll");
            continue;
        };
        pending.spawn(request_status(Weak::clone(&handler), link, luminary));
    }
}

/// Awaits one status update without keeping the handler alive.
async fn request_status<C: GatewayConnection>(
    handler: Weak<DeviceHandler<C>>,
    link: Arc<C::Link>,
    luminary: Arc<LuminaryOf<C>>,
) {
    let result = link.perform_status_update(luminary).await;
    if let Some(handler) = handler.upgrade() {
        handler.complete(result);
    }
}
