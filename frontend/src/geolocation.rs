use chrono::{DateTime, Utc};
use gloo_utils::window;
use run_tracker_lib::{
    geolocation::{GeolocationError, GeolocationEvent, GeolocationSource, WatchOptions},
    position::{Position, TrackPoint},
    TrackerError,
};
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{Geolocation, GeolocationPosition, GeolocationPositionError, PositionOptions};
use yew::Callback;

/// `navigator.geolocation`, forwarding readings and failures to `sink`.
pub struct BrowserGeolocation {
    sink: Callback<GeolocationEvent>,
}

/// An active `watchPosition` registration. The closures have to outlive it.
pub struct WatchHandle {
    id: i32,
    _on_position: Closure<dyn FnMut(GeolocationPosition)>,
    _on_error: Closure<dyn FnMut(GeolocationPositionError)>,
}

impl BrowserGeolocation {
    pub fn new(sink: Callback<GeolocationEvent>) -> Self {
        Self { sink }
    }

    /// The getter only fails on a thrown exception; hosts without the API
    /// hand back `undefined` instead.
    fn geolocation(&self) -> Option<Geolocation> {
        window().navigator().geolocation().ok().filter(|geolocation| {
            let value: &JsValue = geolocation.as_ref();
            !value.is_undefined() && !value.is_null()
        })
    }
}

impl GeolocationSource for BrowserGeolocation {
    type Handle = WatchHandle;

    fn is_available(&self) -> bool {
        self.geolocation().is_some()
    }

    fn watch(&mut self, options: &WatchOptions) -> Result<WatchHandle, TrackerError> {
        let geolocation = self.geolocation().ok_or(TrackerError::CapabilityUnavailable)?;

        let sink = self.sink.clone();
        let on_position = Closure::<dyn FnMut(GeolocationPosition)>::new(move |pos: GeolocationPosition| {
            sink.emit(GeolocationEvent::Position(to_track_point(&pos)));
        });

        let sink = self.sink.clone();
        let on_error = Closure::<dyn FnMut(GeolocationPositionError)>::new(move |err: GeolocationPositionError| {
            sink.emit(GeolocationEvent::Error(GeolocationError::new(err.code(), err.message())));
        });

        let opts = PositionOptions::new();
        opts.set_enable_high_accuracy(options.high_accuracy);
        opts.set_maximum_age(options.maximum_age_ms);
        opts.set_timeout(options.timeout_ms);

        let id = geolocation
            .watch_position_with_error_callback_and_options(
                on_position.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
                &opts,
            )
            .map_err(|err| TrackerError::Unknown {
                code: 0,
                message: format!("{err:?}"),
            })?;

        Ok(WatchHandle {
            id,
            _on_position: on_position,
            _on_error: on_error,
        })
    }

    fn clear_watch(&mut self, handle: WatchHandle) {
        if let Some(geolocation) = self.geolocation() {
            geolocation.clear_watch(handle.id);
        }
    }
}

fn to_track_point(pos: &GeolocationPosition) -> TrackPoint {
    let coords = pos.coords();
    let timestamp = DateTime::<Utc>::from_timestamp_millis(pos.timestamp() as i64)
        .unwrap_or_else(Utc::now);

    TrackPoint::new(
        Position::new(coords.latitude(), coords.longitude()).with_accuracy(coords.accuracy()),
        timestamp,
    )
}
