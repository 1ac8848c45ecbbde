use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, geolocation::WatchOptions};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub map: MapConfig,
    pub path_style: PathStyle,
    pub watch: WatchOptions,
}

impl TrackerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Initial view as `[latitude, longitude]`
    pub center: [f64; 2],
    pub zoom: f64,
    pub max_zoom: f64,
    pub tile_url: String,
    /// Values substituted for `{s}` in `tile_url`
    pub subdomains: String,
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            // Fergana
            center: [40.3833, 71.7833],
            zoom: 15.,
            max_zoom: 20.,
            tile_url: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png".into(),
            subdomains: "abcd".into(),
            attribution: "&copy; OpenStreetMap contributors &copy; CARTO".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub line_join: String,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: "#39ff14".into(),
            weight: 5.,
            opacity: 0.8,
            line_join: "round".into(),
        }
    }
}
