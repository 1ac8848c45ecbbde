use chrono::TimeDelta;

use crate::{
    geo::polyline_distance,
    position::{Position, TrackPoint},
    readout::Distance,
};

/// Chronological, append-only record of a session's track points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<TrackPoint>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: TrackPoint) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> + '_ {
        self.points.iter().map(|tp| &tp.position)
    }

    /// Total distance along the path, recomputed from every segment.
    pub fn total_distance(&self) -> Distance {
        Distance::from_meters(polyline_distance(self.positions()))
    }

    /// Time between the first and the last recorded point.
    pub fn elapsed(&self) -> TimeDelta {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => last
                .timestamp
                .signed_duration_since(first.timestamp)
                .max(TimeDelta::zero()),
            _ => TimeDelta::zero(),
        }
    }
}
