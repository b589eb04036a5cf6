//! Simulation module
//!
//! Everything that affects the evolution of the bodies lives here. This module
//! must stay free of rendering and platform dependencies:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (world order)

pub mod body;
pub mod interaction;
pub mod step;
pub mod vector;
pub mod view;
pub mod world;

pub use body::Body;
pub use interaction::{Creation, Interaction};
pub use step::{compute_forces, pair_force, step};
pub use vector::{SetLength, Vec2};
pub use view::ViewTransform;
pub use world::World;
