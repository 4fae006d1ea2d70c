// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Handler configuration.

use std::collections::HashMap;
use std::time::Duration;

use crate::error::ConfigError;
use crate::identity::{DeviceIdentity, PROPERTY_ZONE_ID, ThingType};

/// Configuration of a single device handler.
///
/// Mirrors what the hosting framework knows about the thing: its type, its
/// UID (the device address for bulbs) and its stored properties.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use lightify_handler::config::{HandlerConfig, PollSchedule};
///
/// // A single bulb, addressed by its UID
/// let config = HandlerConfig::bulb("84:18:26:00:00:0a:1b:2c");
///
/// // A zone, addressed through its zone id property
/// let config = HandlerConfig::zone("living-room", "3")
///     .with_poll_schedule(PollSchedule::new(Duration::from_secs(2), Duration::from_secs(30)));
/// assert_eq!(config.identity().unwrap().key(), "zone::3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct HandlerConfig {
    /// Declared thing type.
    pub thing_type: ThingType,
    /// Thing UID. For bulbs this is the device address on the gateway.
    pub uid: String,
    /// Stored thing properties.
    #[serde(default)]
    pub properties: HashMap<String, String>,
    /// Status poll timing.
    #[serde(default)]
    pub poll: PollSchedule,
}

impl HandlerConfig {
    /// Creates a configuration for a single bulb.
    #[must_use]
    pub fn bulb(uid: impl Into<String>) -> Self {
        Self {
            thing_type: ThingType::Bulb,
            uid: uid.into(),
            properties: HashMap::new(),
            poll: PollSchedule::default(),
        }
    }

    /// Creates a configuration for a zone with the given zone identifier.
    #[must_use]
    pub fn zone(uid: impl Into<String>, zone_id: impl Into<String>) -> Self {
        Self {
            thing_type: ThingType::Zone,
            uid: uid.into(),
            properties: HashMap::new(),
            poll: PollSchedule::default(),
        }
        .with_property(PROPERTY_ZONE_ID, zone_id)
    }

    /// Loads a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if the document is malformed or names an
    /// unsupported thing type.
    ///
    /// # Examples
    ///
    /// ```
    /// use lightify_handler::config::HandlerConfig;
    ///
    /// let config = HandlerConfig::from_json(r#"{
    ///     "thing_type": "lightify:zone",
    ///     "uid": "kitchen",
    ///     "properties": { "zoneId": "abc" },
    ///     "poll": { "period_ms": 5000 }
    /// }"#).unwrap();
    /// assert_eq!(config.identity().unwrap().key(), "zone::abc");
    /// assert_eq!(config.poll.period().as_secs(), 5);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets a thing property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Sets the status poll timing.
    #[must_use]
    pub fn with_poll_schedule(mut self, poll: PollSchedule) -> Self {
        self.poll = poll;
        self
    }

    /// Derives the gateway identity of this thing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingProperty` for a zone without a `zoneId`
    /// property.
    pub fn identity(&self) -> Result<DeviceIdentity, ConfigError> {
        match self.thing_type {
            ThingType::Bulb => Ok(DeviceIdentity::device(self.uid.clone())),
            ThingType::Zone => self
                .properties
                .get(PROPERTY_ZONE_ID)
                .map(|zone_id| DeviceIdentity::zone(zone_id))
                .ok_or(ConfigError::MissingProperty(PROPERTY_ZONE_ID)),
        }
    }
}

/// Timing of the periodic status poll.
///
/// The first poll happens `initial_delay` after initialization, then every
/// `period`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct PollSchedule {
    initial_delay_ms: u64,
    period_ms: u64,
}

impl PollSchedule {
    /// Default delay before the first poll.
    pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);

    /// Default time between polls.
    pub const DEFAULT_PERIOD: Duration = Duration::from_secs(10);

    /// Creates a poll schedule.
    #[must_use]
    pub fn new(initial_delay: Duration, period: Duration) -> Self {
        Self {
            initial_delay_ms: duration_to_millis(initial_delay),
            period_ms: duration_to_millis(period),
        }
    }

    /// Returns the delay before the first poll.
    #[must_use]
    pub const fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    /// Returns the time between polls, at least one millisecond.
    #[must_use]
    pub const fn period(&self) -> Duration {
        if self.period_ms == 0 {
            Duration::from_millis(1)
        } else {
            Duration::from_millis(self.period_ms)
        }
    }
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_DELAY, Self::DEFAULT_PERIOD)
    }
}

fn duration_to_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
