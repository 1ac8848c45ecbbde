use thiserror::Error;

/// Everything that can end (or prevent) a tracking session.
///
/// The display strings are the messages shown to the runner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    #[error("Geolocation is not supported by your browser.")]
    CapabilityUnavailable,
    #[error("Please enable location permissions to track your run.")]
    PermissionDenied,
    #[error("GPS signal timed out.")]
    Timeout,
    #[error("Could not get your location.")]
    Unknown { code: u16, message: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid tracker config: {0}")]
    Parse(#[from] serde_json::Error),
}
