use serde::{Deserialize, Serialize};

use crate::{error::TrackerError, position::TrackPoint};

pub const PERMISSION_DENIED: u16 = 1;
pub const POSITION_UNAVAILABLE: u16 = 2;
pub const TIMEOUT: u16 = 3;

/// Options passed along with every position subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchOptions {
    pub high_accuracy: bool,
    /// Maximum age of a cached position the source may hand out
    pub maximum_age_ms: u32,
    /// How long a single position request may take
    pub timeout_ms: u32,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            maximum_age_ms: 0,
            timeout_ms: 5000,
        }
    }
}

/// Failure reported by the position stream, using the W3C error codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeolocationError {
    pub code: u16,
    pub message: String,
}

impl GeolocationError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn classify(&self) -> TrackerError {
        match self.code {
            PERMISSION_DENIED => TrackerError::PermissionDenied,
            TIMEOUT => TrackerError::Timeout,
            code => TrackerError::Unknown {
                code,
                message: self.message.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeolocationEvent {
    Position(TrackPoint),
    Error(GeolocationError),
}

/// A continuous position stream.
///
/// Readings are not returned from `watch`; the source delivers them to its
/// owner as [`GeolocationEvent`]s, which the owner hands to the session.
pub trait GeolocationSource {
    type Handle;

    fn is_available(&self) -> bool;

    fn watch(&mut self, options: &WatchOptions) -> Result<Self::Handle, TrackerError>;

    fn clear_watch(&mut self, handle: Self::Handle);
}
