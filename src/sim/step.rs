//! Fixed timestep integrator
//!
//! Advances the world with semi-implicit Euler under a softened 1/r pairwise
//! attraction. Forces for the whole population are taken from one snapshot of
//! positions before any body moves.

use super::body::Body;
use super::vector::{SetLength, Vec2};
use super::world::World;
use crate::consts::{G, HUE_DRIFT_RATE};

/// Force on `a` due to `b`: points from `a` to `b` with magnitude `G·ma·mb / r`.
///
/// Coincident bodies (including `a` with itself) contribute nothing.
#[inline]
pub fn pair_force(a: &Body, b: &Body) -> Vec2 {
    let delta = b.position - a.position;
    let magnitude = G * a.mass * b.mass / delta.length();
    delta.set_length(magnitude)
}

#[inline]
fn net_force(a: &Body, bodies: &[Body]) -> Vec2 {
    bodies
        .iter()
        .fold(Vec2::ZERO, |sum, b| sum + pair_force(a, b))
}

/// Net force on every body, in world order
#[cfg(not(feature = "parallel"))]
pub fn compute_forces(bodies: &[Body]) -> Vec<Vec2> {
    bodies.iter().map(|a| net_force(a, bodies)).collect()
}

/// Net force on every body, in world order
#[cfg(feature = "parallel")]
pub fn compute_forces(bodies: &[Body]) -> Vec<Vec2> {
    use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

    bodies.par_iter().map(|a| net_force(a, bodies)).collect()
}

/// Advance the world by one step of `world.dt`
pub fn step(world: &mut World) {
    let dt = world.dt;
    let forces = compute_forces(&world.bodies);

    for (body, force) in world.bodies.iter_mut().zip(forces) {
        body.record_trail();
        body.position += body.velocity * dt;
        body.velocity += force / body.mass * dt;
        body.drift_hue(dt * HUE_DRIFT_RATE);
    }

    world.t += dt;
}
