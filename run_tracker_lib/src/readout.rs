use std::fmt;

use chrono::TimeDelta;

/// Cumulative distance, stored in meters and shown in kilometers.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub fn meters(&self) -> f64 {
        self.0
    }

    pub fn kilometers(&self) -> f64 {
        self.0 / 1000.
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.kilometers())
    }
}

/// Formats a duration as `HH:MM:SS`. Negative durations show as zero.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let secs = elapsed.num_seconds().max(0);
    let hrs = secs / 3600;
    let mins = (secs % 3600) / 60;
    format!("{:02}:{:02}:{:02}", hrs, mins, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_rounds_to_two_decimals() {
        assert_eq!(Distance::from_meters(1111.95).to_string(), "1.11");
        assert_eq!(Distance::from_meters(4999.).to_string(), "5.00");
        assert_eq!(Distance::default().to_string(), "0.00");
    }

    #[test]
    fn elapsed_formatting() {
        assert_eq!(format_elapsed(TimeDelta::zero()), "00:00:00");
        assert_eq!(format_elapsed(TimeDelta::seconds(59)), "00:00:59");
        assert_eq!(format_elapsed(TimeDelta::seconds(3725)), "01:02:05");
        assert_eq!(format_elapsed(TimeDelta::seconds(-4)), "00:00:00");
    }
}
