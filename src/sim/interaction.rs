//! Pointer-driven body creation
//!
//! Three presses place a body: the first drops it, the second fixes its
//! velocity, the third fixes its mass. Between presses, pointer moves preview
//! the value being set. The body lives in the world the whole time.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::Body;
use super::vector::Vec2;
use super::view::ViewTransform;
use super::world::World;
use crate::consts::MIN_MASS;

/// Creation phase, carrying the index of the body under construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Creation {
    /// No body under construction
    #[default]
    Idle,
    /// Pointer sets the velocity (arrow from the body to the pointer)
    Velocity { body: usize },
    /// Pointer sets the mass (squared distance from the body)
    Mass { body: usize },
}

impl Creation {
    /// Phase number: 0 idle, 1 velocity, 2 mass
    pub fn step(&self) -> u8 {
        match self {
            Creation::Idle => 0,
            Creation::Velocity { .. } => 1,
            Creation::Mass { .. } => 2,
        }
    }

    /// Index of the body under construction
    pub fn body(&self) -> Option<usize> {
        match *self {
            Creation::Idle => None,
            Creation::Velocity { body } | Creation::Mass { body } => Some(body),
        }
    }
}

/// Mass for a pointer at `distance` from the body
#[inline]
pub fn mass_for_distance(distance: f64) -> f64 {
    (distance * distance).max(MIN_MASS)
}

/// The body-creation state machine
#[derive(Debug, Clone)]
pub struct Interaction {
    creation: Creation,
    rng: Pcg32,
}

impl Interaction {
    pub fn new(seed: u64) -> Self {
        Self {
            creation: Creation::Idle,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn creation(&self) -> Creation {
        self.creation
    }

    /// 0 idle, 1 setting velocity, 2 setting mass
    pub fn creation_step(&self) -> u8 {
        self.creation.step()
    }

    pub fn current_body(&self) -> Option<usize> {
        self.creation.body()
    }

    pub fn is_idle(&self) -> bool {
        self.creation == Creation::Idle
    }

    /// Drop any body under construction (the body itself is left to the caller)
    pub fn cancel(&mut self) {
        if !self.is_idle() {
            log::debug!("Body creation cancelled at step {}", self.creation_step());
        }
        self.creation = Creation::Idle;
    }

    /// Handle a pointer press at screen point `screen`
    pub fn on_press(&mut self, world: &mut World, view: &ViewTransform, screen: Vec2) {
        let point = view.screen_to_world(screen);

        self.creation = match self.creation {
            Creation::Idle => {
                let hue = self.rng.random::<f64>();
                let body = world.push(Body::placed(point, hue));
                log::debug!("Placed body {} at ({:.1}, {:.1})", body, point.x, point.y);
                Creation::Velocity { body }
            }
            Creation::Velocity { body } => {
                let Some(target) = self.body_mut(world, body) else {
                    return;
                };
                target.velocity = point - target.position;
                Creation::Mass { body }
            }
            Creation::Mass { body } => {
                let Some(target) = self.body_mut(world, body) else {
                    return;
                };
                target.mass = mass_for_distance(point.distance(target.position));
                log::debug!(
                    "Finalized body {}: mass {:.1}, velocity ({:.1}, {:.1})",
                    body,
                    target.mass,
                    target.velocity.x,
                    target.velocity.y
                );
                world.sort_by_mass();
                Creation::Idle
            }
        };
    }

    /// Handle a pointer move to screen point `screen`
    pub fn on_move(&mut self, world: &mut World, view: &ViewTransform, screen: Vec2) {
        let point = view.screen_to_world(screen);

        match self.creation {
            Creation::Idle => {}
            Creation::Velocity { body } => {
                if let Some(target) = self.body_mut(world, body) {
                    target.velocity = point - target.position;
                }
            }
            Creation::Mass { body } => {
                if let Some(target) = self.body_mut(world, body) {
                    target.mass = mass_for_distance(point.distance(target.position));
                }
            }
        }
    }

    /// Look up the body under construction, falling back to idle if it is gone
    fn body_mut<'w>(&mut self, world: &'w mut World, index: usize) -> Option<&'w mut Body> {
        let body = world.bodies.get_mut(index);
        if body.is_none() {
            log::warn!("Body {} under construction no longer exists, resetting", index);
            self.creation = Creation::Idle;
        }
        body
    }
}
