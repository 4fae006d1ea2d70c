// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Lightify device handler.
//!
//! Handler construction and configuration loading can fail; command handling,
//! status polling and state reconciliation never do. Failures reported by the
//! gateway link ([`LinkError`]) are absorbed by the handler and only logged.

use thiserror::Error;

/// The main error type for this library.
///
/// The handler itself only fails with [`Error::Config`]. The other variants
/// let callers, and link implementations built on this crate, use `?` on
/// value constructors and link results inside functions returning
/// [`Result`].
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The handler configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The gateway link reported a failure.
    #[error("link error: {0}")]
    Link(#[from] LinkError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// A hue value is outside the valid range (0-360).
    #[error("hue value {0} is out of range [0, 360]")]
    InvalidHue(u16),

    /// A saturation value is outside the valid range (0-100).
    #[error("saturation value {0} is out of range [0, 100]")]
    InvalidSaturation(u8),

    /// A brightness value is outside the valid range (0-100).
    #[error("brightness value {0} is out of range [0, 100]")]
    InvalidBrightness(u8),
}

/// Errors related to the handler configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The thing type UID is not served by this handler.
    #[error("unsupported thing type: {0}")]
    UnsupportedThingType(String),

    /// The channel identifier is not one of the four light channels.
    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    /// A required thing property is missing.
    #[error("missing thing property: {0}")]
    MissingProperty(&'static str),

    /// JSON configuration could not be parsed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures reported by the gateway link for a command or status update.
///
/// The handler never propagates these: a failed operation simply produces no
/// state republish, and the next poll tick retries naturally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// The gateway link is not connected.
    #[error("gateway link is not connected")]
    NotConnected,

    /// The addressed device did not answer.
    #[error("device {0} is offline")]
    DeviceOffline(String),

    /// The gateway did not answer in time.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The gateway rejected the operation.
    #[error("operation rejected: {0}")]
    Rejected(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
