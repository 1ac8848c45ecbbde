use crate::{path::Path, position::Position};

pub trait MapRenderer {
    /// Replaces whatever path is drawn with `path`.
    fn draw_path(&mut self, path: &Path);

    fn center_on(&mut self, position: &Position, zoom: f64);

    fn zoom(&self) -> f64;
}
