use chrono::TimeDelta;
use tracing::{debug, error, trace, warn};

use crate::{
    error::TrackerError,
    geolocation::{GeolocationError, GeolocationEvent, GeolocationSource, WatchOptions},
    map::MapRenderer,
    notice::{Notice, Notifier},
    path::Path,
    position::TrackPoint,
    readout::Distance,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Active,
}

/// Records one run at a time: subscribes to the position stream on start,
/// grows the path and the distance readout on every reading, and releases
/// the stream again on stop.
pub struct TrackingSession<G: GeolocationSource, M: MapRenderer, N: Notifier> {
    geolocation: G,
    map: M,
    notifier: N,
    options: WatchOptions,

    state: SessionState,
    path: Path,
    watch: Option<G::Handle>,
    distance: Distance,
}

impl<G: GeolocationSource, M: MapRenderer, N: Notifier> TrackingSession<G, M, N> {
    pub fn new(geolocation: G, map: M, notifier: N, options: WatchOptions) -> Self {
        Self {
            geolocation,
            map,
            notifier,
            options,
            state: SessionState::Idle,
            path: Path::new(),
            watch: None,
            distance: Distance::default(),
        }
    }

    pub fn toggle(&mut self) -> SessionState {
        match self.state {
            SessionState::Idle => {
                if let Err(err) = self.start() {
                    debug!("Toggle did not start a session: {err:?}");
                }
            }
            SessionState::Active => self.stop(),
        }
        self.state
    }

    pub fn start(&mut self) -> Result<(), TrackerError> {
        if self.state == SessionState::Active {
            debug!("Session already active");
            return Ok(());
        }

        if !self.geolocation.is_available() {
            return Err(self.fail_to_start(TrackerError::CapabilityUnavailable));
        }

        self.path.clear();
        self.map.draw_path(&self.path);
        self.state = SessionState::Active;

        match self.geolocation.watch(&self.options) {
            Ok(handle) => {
                self.watch = Some(handle);
                debug!("Session started with {:?}", self.options);
                Ok(())
            }
            Err(err) => {
                self.state = SessionState::Idle;
                Err(self.fail_to_start(err))
            }
        }
    }

    fn fail_to_start(&mut self, err: TrackerError) -> TrackerError {
        warn!("Could not start session: {err:?}");
        self.notifier.notify(&Notice::Error(err.clone()));
        err
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.watch.take() {
            self.geolocation.clear_watch(handle);
        }

        self.state = SessionState::Idle;
        debug!("Session stopped after {} points, {} km", self.path.len(), self.distance);
        self.notifier.notify(&Notice::SessionComplete);
    }

    pub fn handle(&mut self, event: GeolocationEvent) {
        match event {
            GeolocationEvent::Position(point) => self.on_position_update(point),
            GeolocationEvent::Error(err) => self.on_position_error(err),
        }
    }

    pub fn on_position_update(&mut self, point: TrackPoint) {
        if self.state == SessionState::Idle {
            trace!("Ignoring position received while idle");
            return;
        }

        self.path.push(point);
        self.map.draw_path(&self.path);
        let zoom = self.map.zoom();
        self.map.center_on(&point.position, zoom);

        if self.path.len() >= 2 {
            self.distance = self.path.total_distance();
        }
    }

    pub fn on_position_error(&mut self, err: GeolocationError) {
        if self.state == SessionState::Idle {
            trace!("Ignoring geolocation error received while idle");
            return;
        }

        error!("Error ({}): {}", err.code, err.message);
        self.notifier.notify(&Notice::Error(err.classify()));
        self.stop();
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The last published distance. Sessions with fewer than two points
    /// leave it untouched.
    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn elapsed(&self) -> TimeDelta {
        self.path.elapsed()
    }

    pub fn geolocation(&self) -> &G {
        &self.geolocation
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

impl<G: GeolocationSource, M: MapRenderer, N: Notifier> Drop for TrackingSession<G, M, N> {
    fn drop(&mut self) {
        if let Some(handle) = self.watch.take() {
            self.geolocation.clear_watch(handle);
        }
    }
}
