use crate::{
    components::{map_component::LeafletRenderer, stats_panel::StatsPanel},
    geolocation::BrowserGeolocation,
    notifier::AlertNotifier,
};
use gloo_console::{error, info};
use run_tracker_lib::{
    config::TrackerConfig, geolocation::GeolocationEvent, readout::format_elapsed,
    TrackingSession,
};
use yew::prelude::*;

mod components;
mod geolocation;
mod logging;
mod notifier;

enum MainMsg {
    Toggle,
    Geolocation(GeolocationEvent),
}

struct Model {
    config: TrackerConfig,
    session: TrackingSession<BrowserGeolocation, LeafletRenderer, AlertNotifier>,
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = load_config();

        let geolocation = BrowserGeolocation::new(ctx.link().callback(MainMsg::Geolocation));
        let renderer = LeafletRenderer::new(&config.path_style);
        let session = TrackingSession::new(geolocation, renderer, AlertNotifier, config.watch);

        Self { config, session }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.session.map().init_view(&self.config.map);
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::Toggle => {
                let state = self.session.toggle();
                info!(format!("Session is now {:?}", state));
            }
            MainMsg::Geolocation(event) => {
                self.session.handle(event);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_toggle = ctx.link().callback(|()| MainMsg::Toggle);

        html! {
            <>
                <div class="map">
                    {self.session.map().render()}
                </div>
                <StatsPanel
                    active={self.session.is_active()}
                    distance={self.session.distance()}
                    duration={format_elapsed(self.session.elapsed())}
                    {on_toggle}
                />
            </>
        }
    }
}

fn load_config() -> TrackerConfig {
    match TrackerConfig::from_json(include_str!("../config.json")) {
        Ok(config) => config,
        Err(err) => {
            error!(format!("{err}, using defaults"));
            TrackerConfig::default()
        }
    }
}

fn main() {
    logging::init();
    yew::Renderer::<Model>::new().render();
}
