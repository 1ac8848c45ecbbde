pub mod map_component;
pub mod stats_panel;
