//! Canvas implementation that tessellates into a vertex batch

use glam::DVec2;

use super::Canvas;
use super::shapes;
use super::vertex::{Vertex, colors};
use crate::settings::Settings;

/// Width of outlines and lines in pixels
const STROKE_WIDTH: f32 = 1.0;

/// Collects one frame of primitives as triangles in screen pixels
#[derive(Debug, Clone)]
pub struct ShapeBatch {
    vertices: Vec<Vertex>,
    size: (f64, f64),
    segments: u32,
    status: String,
}

impl ShapeBatch {
    pub fn new(width: f64, height: f64, settings: &Settings) -> Self {
        Self {
            vertices: Vec::new(),
            size: (width, height),
            segments: settings.quality.circle_segments(),
            status: String::new(),
        }
    }

    /// Start a new frame (keeps the last status text)
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = (width, height);
    }

    /// Pick up a changed quality preset
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.segments = settings.quality.circle_segments();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

impl Canvas for ShapeBatch {
    fn size(&self) -> (f64, f64) {
        self.size
    }

    fn fill_circle(&mut self, center: DVec2, diameter: f64, hue: f64) {
        let color = colors::from_hue(hue);
        self.vertices.extend(shapes::circle(
            center.as_vec2(),
            (diameter / 2.0) as f32,
            color,
            self.segments,
        ));
    }

    fn draw_circle(&mut self, center: DVec2, diameter: f64, color: [f32; 4]) {
        let radius = (diameter / 2.0) as f32;
        self.vertices.extend(shapes::ring(
            center.as_vec2(),
            radius - STROKE_WIDTH / 2.0,
            radius + STROKE_WIDTH / 2.0,
            color,
            self.segments,
        ));
    }

    fn draw_line(&mut self, start: DVec2, end: DVec2, color: [f32; 4]) {
        self.vertices.extend(shapes::line(
            start.as_vec2(),
            end.as_vec2(),
            STROKE_WIDTH,
            color,
        ));
    }

    fn set_status_text(&mut self, text: &str) {
        self.status.clear();
        self.status.push_str(text);
    }
}
