//! World <-> screen mapping
//!
//! `screen = (world + offset) * scale`, zoom is about the transform origin.

use super::vector::Vec2;
use crate::consts::ZOOM_FACTOR;

/// Pan offset plus uniform scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Pan offset in world units
    pub offset: Vec2,
    /// Uniform scale, > 0
    pub scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl ViewTransform {
    /// View with the world origin at the center of a `width` x `height` canvas
    pub fn centered(width: f64, height: f64) -> Self {
        let mut view = Self::default();
        view.pan_center(width, height);
        view
    }

    #[inline]
    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        (p + self.offset) * self.scale
    }

    #[inline]
    pub fn screen_to_world(&self, q: Vec2) -> Vec2 {
        q / self.scale - self.offset
    }

    /// Length in world units to length in screen pixels
    #[inline]
    pub fn scale_length(&self, length: f64) -> f64 {
        length * self.scale
    }

    /// Re-center on a canvas of the given size and drop any zoom
    pub fn pan_center(&mut self, width: f64, height: f64) {
        self.offset = Vec2::new(width / 2.0, height / 2.0);
        self.scale = 1.0;
    }

    /// Apply one wheel step: positive zooms in, negative zooms out, zero is ignored
    pub fn zoom(&mut self, delta: i32) {
        match delta.signum() {
            1 => self.scale *= ZOOM_FACTOR,
            -1 => self.scale /= ZOOM_FACTOR,
            _ => {}
        }
    }
}
