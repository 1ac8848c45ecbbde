pub mod config;
pub mod error;
pub mod geo;
pub mod geolocation;
pub mod map;
pub mod notice;
pub mod path;
pub mod position;
pub mod readout;
pub mod session;

pub use error::{ConfigError, TrackerError};
pub use session::{SessionState, TrackingSession};
