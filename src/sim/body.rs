//! Point-mass bodies and their trails

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::vector::Vec2;
use crate::consts::{INITIAL_MASS, TRAIL_LENGTH, TRAIL_SPACING};
use crate::wrap_unit;

/// A gravitating point mass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Position in world coordinates
    pub position: Vec2,
    /// Velocity in world units per time unit
    pub velocity: Vec2,
    /// Mass (1 while being placed, at least `MIN_MASS` once finalized)
    pub mass: f64,
    /// Hue in [0, 1), drifts with time
    pub hue: f64,
    /// Recent positions, oldest first
    pub trail: VecDeque<Vec2>,
}

impl Body {
    pub fn new(position: Vec2, velocity: Vec2, mass: f64, hue: f64) -> Self {
        Self {
            position,
            velocity,
            mass,
            hue: wrap_unit(hue),
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
        }
    }

    /// A fresh body as dropped by the pointer: at rest, placeholder mass
    pub fn placed(position: Vec2, hue: f64) -> Self {
        Self::new(position, Vec2::ZERO, INITIAL_MASS, hue)
    }

    /// Record the current position if it is far enough from the last trail point
    ///
    /// The first point is always recorded. The trail never exceeds `TRAIL_LENGTH`.
    pub fn record_trail(&mut self) {
        let far_enough = self
            .trail
            .back()
            .is_none_or(|last| last.distance(self.position) > TRAIL_SPACING);
        if far_enough {
            self.trail.push_back(self.position);
        }
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.pop_front();
        }
    }

    /// Advance the hue by `amount`, wrapping into [0, 1)
    #[inline]
    pub fn drift_hue(&mut self, amount: f64) {
        self.hue = wrap_unit(self.hue + amount);
    }

    /// Drawn diameter in world units
    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.mass.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_trail_point_is_unconditional() {
        let mut body = Body::placed(Vec2::new(1.0, 2.0), 0.5);
        body.record_trail();
        assert_eq!(body.trail.len(), 1);
        assert_eq!(body.trail[0], Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_trail_spacing() {
        let mut body = Body::placed(Vec2::ZERO, 0.0);
        body.record_trail();

        // Exactly at the spacing threshold is not "beyond" it
        body.position = Vec2::new(TRAIL_SPACING, 0.0);
        body.record_trail();
        assert_eq!(body.trail.len(), 1);

        body.position = Vec2::new(TRAIL_SPACING + 0.5, 0.0);
        body.record_trail();
        assert_eq!(body.trail.len(), 2);
    }

    #[test]
    fn test_trail_drops_oldest() {
        let mut body = Body::placed(Vec2::ZERO, 0.0);
        for i in 0..(TRAIL_LENGTH + 5) {
            body.position = Vec2::new(i as f64 * 20.0, 0.0);
            body.record_trail();
        }
        assert_eq!(body.trail.len(), TRAIL_LENGTH);
        assert_eq!(body.trail.front().copied(), Some(Vec2::new(100.0, 0.0)));
        assert_eq!(
            body.trail.back().copied(),
            Some(Vec2::new((TRAIL_LENGTH + 4) as f64 * 20.0, 0.0))
        );
    }

    #[test]
    fn test_hue_wraps() {
        let mut body = Body::placed(Vec2::ZERO, 0.95);
        body.drift_hue(0.1);
        assert!((body.hue - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_new_wraps_hue() {
        let body = Body::new(Vec2::ZERO, Vec2::ZERO, 10.0, 1.5);
        assert!((body.hue - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_diameter() {
        let body = Body::new(Vec2::ZERO, Vec2::ZERO, 100.0, 0.0);
        assert_eq!(body.diameter(), 20.0);
    }
}
