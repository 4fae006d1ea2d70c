// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thing types and the gateway identity a handler resolves to.
//!
//! A handler serves either a single bulb (or strip) or a zone. Bulbs are
//! looked up on the gateway link by their address, which is the thing UID.
//! Zones are looked up by a key built from the thing's `zoneId` property and
//! the [`ZONE_KEY_PREFIX`] namespace.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Binding namespace of every thing type UID served here.
pub const BINDING_ID: &str = "lightify";

/// Namespace token prepended to a zone identifier to form its lookup key.
pub const ZONE_KEY_PREFIX: &str = "zone::";

/// Thing property holding the zone identifier of a zone thing.
pub const PROPERTY_ZONE_ID: &str = "zoneId";

/// Thing types this handler declares support for.
pub const SUPPORTED_THING_TYPES: [ThingType; 2] = [ThingType::Bulb, ThingType::Zone];

/// Declared type of a Lightify thing.
///
/// # Examples
///
/// ```
/// use lightify_handler::identity::ThingType;
///
/// let kind: ThingType = "lightify:zone".parse().unwrap();
/// assert_eq!(kind, ThingType::Zone);
/// assert_eq!(ThingType::Bulb.uid(), "lightify:bulb");
/// assert!(!ThingType::is_supported("lightify:gateway"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ThingType {
    /// A single bulb or light strip.
    Bulb,
    /// A zone (group) of devices.
    Zone,
}

impl ThingType {
    /// Returns the thing type UID, e.g. `lightify:bulb`.
    #[must_use]
    pub const fn uid(&self) -> &'static str {
        match self {
            Self::Bulb => "lightify:bulb",
            Self::Zone => "lightify:zone",
        }
    }

    /// Returns `true` if `thing_type_uid` names a type this handler serves.
    #[must_use]
    pub fn is_supported(thing_type_uid: &str) -> bool {
        thing_type_uid.parse::<Self>().is_ok()
    }
}

impl fmt::Display for ThingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uid())
    }
}

impl FromStr for ThingType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUPPORTED_THING_TYPES
            .into_iter()
            .find(|kind| kind.uid() == s)
            .ok_or_else(|| ConfigError::UnsupportedThingType(s.to_string()))
    }
}

impl TryFrom<String> for ThingType {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThingType> for String {
    fn from(kind: ThingType) -> Self {
        kind.uid().to_string()
    }
}

/// The gateway-side identity a handler operates on.
///
/// Fixed at handler construction and never re-derived.
///
/// # Examples
///
/// ```
/// use lightify_handler::identity::DeviceIdentity;
///
/// let zone = DeviceIdentity::zone("abc");
/// assert_eq!(zone.key(), "zone::abc");
///
/// let bulb = DeviceIdentity::device("84:18:26:00:00:0a:1b:2c");
/// assert_eq!(bulb.key(), "84:18:26:00:00:0a:1b:2c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeviceIdentity {
    /// A single device, looked up by address.
    Device {
        /// Device address on the gateway.
        address: String,
    },
    /// A zone, looked up by its namespaced key.
    Zone {
        /// Lookup key, always starting with [`ZONE_KEY_PREFIX`].
        key: String,
    },
}

impl DeviceIdentity {
    /// Creates the identity of a single device.
    #[must_use]
    pub fn device(address: impl Into<String>) -> Self {
        Self::Device {
            address: address.into(),
        }
    }

    /// Creates the identity of a zone from its raw zone identifier.
    #[must_use]
    pub fn zone(zone_id: &str) -> Self {
        Self::Zone {
            key: format!("{ZONE_KEY_PREFIX}{zone_id}"),
        }
    }

    /// Returns the thing type this identity belongs to.
    #[must_use]
    pub const fn thing_type(&self) -> ThingType {
        match self {
            Self::Device { .. } => ThingType::Bulb,
            Self::Zone { .. } => ThingType::Zone,
        }
    }

    /// Returns the string the gateway link is queried with.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Device { address } => address,
            Self::Zone { key } => key,
        }
    }
}

impl fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.thing_type(), self.key())
    }
}
