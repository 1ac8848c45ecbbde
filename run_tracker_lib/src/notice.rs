use std::fmt;

use crate::error::TrackerError;

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Error(TrackerError),
    SessionComplete,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Error(err) => write!(f, "{err}"),
            Notice::SessionComplete => write!(f, "Run finished! Path saved to map."),
        }
    }
}

/// Shows messages to the runner.
pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}
