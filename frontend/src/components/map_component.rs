use gloo_console::error;
use gloo_utils::document;
use leaflet::{LatLng, Map, MapOptions, Polyline, PolylineOptions, TileLayer, TileLayerOptions};
use run_tracker_lib::{
    config::{MapConfig, PathStyle},
    map::MapRenderer,
    path::Path,
    position::Position,
};
use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue, UnwrapThrowExt};
use web_sys::{js_sys::{Array, Reflect}, Element, HtmlElement, Node};
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(thread_local_v2)]
    static TOLERANT_RENDERER: JsValue;
}

/// Leaflet map with the single polyline of the current run.
pub struct LeafletRenderer {
    map: Map,
    container: HtmlElement,
    polyline: Polyline,
}

impl LeafletRenderer {
    pub fn new(style: &PathStyle) -> Self {
        let container: Element = document().create_element("div").unwrap_throw();
        let container: HtmlElement = container.dyn_into().unwrap_throw();
        container.set_class_name("map");

        let map = Map::new_with_element(&container, &MapOptions::default());
        let polyline = make_polyline(style);
        polyline.add_to(&map);

        Self {
            map,
            container,
            polyline,
        }
    }

    /// Must run after the container is attached to the document.
    pub fn init_view(&self, config: &MapConfig) {
        let [lat, lon] = config.center;
        self.map.set_max_zoom(config.max_zoom);
        self.map.set_view(&LatLng::new(lat, lon), config.zoom);
        add_tile_layer(&self.map, config);
    }

    pub fn render(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }
}

impl MapRenderer for LeafletRenderer {
    fn draw_path(&mut self, path: &Path) {
        let points = path.positions()
            .map(|p| LatLng::new(p.latitude, p.longitude));
        self.polyline.set_lat_lngs(&Array::from_iter(points));
    }

    fn center_on(&mut self, position: &Position, zoom: f64) {
        self.map.set_view(&LatLng::new(position.latitude, position.longitude), zoom);
    }

    fn zoom(&self) -> f64 {
        self.map.get_zoom()
    }
}

fn make_polyline(style: &PathStyle) -> Polyline {
    let opts = PolylineOptions::new();
    opts.set_color(style.color.clone());
    opts.set_weight(style.weight);
    opts.set_opacity(style.opacity);
    opts.set_line_join(style.line_join.clone());
    opts.set_renderer(TOLERANT_RENDERER.with(JsValue::clone));

    Polyline::new_with_options(&Array::new(), &opts)
}

fn add_tile_layer(map: &Map, config: &MapConfig) {
    let opts = TileLayerOptions::new();
    opts.set_attribution(config.attribution.clone());
    opts.set_max_zoom(config.max_zoom);
    opts.set_update_when_idle(true);
    // Leaflet takes the subdomains as a plain string of host letters
    if let Err(err) = Reflect::set(&opts, &"subdomains".into(), &config.subdomains.as_str().into()) {
        error!(err);
    }
    TileLayer::new_options(&config.tile_url, &opts).add_to(map);
}
