//! The simulated world: bodies plus the clock

use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::DT;

/// Ordered collection of bodies and the simulation clock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Bodies in world order (mass-descending after each finalization)
    pub bodies: Vec<Body>,
    /// Simulated time, starts at 0
    pub t: f64,
    /// Fixed step, > 0
    pub dt: f64,
}

impl Default for World {
    fn default() -> Self {
        Self::new(DT)
    }
}

impl World {
    pub fn new(dt: f64) -> Self {
        debug_assert!(dt > 0.0, "time step must be positive");
        Self {
            bodies: Vec::new(),
            t: 0.0,
            dt,
        }
    }

    /// Append a body and return its index
    pub fn push(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Stable sort by mass, heaviest first
    pub fn sort_by_mass(&mut self) {
        self.bodies.sort_by(|a, b| b.mass.total_cmp(&a.mass));
    }

    /// Remove every body and rewind the clock
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.t = 0.0;
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
