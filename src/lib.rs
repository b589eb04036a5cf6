//! Gravity Sandbox - an interactive 2D n-body playground
//!
//! Core modules:
//! - `sim`: Simulation engine (bodies, integrator, view transform, body creation)
//! - `controller`: Owns the world and coordinates ticks, input and snapshots
//! - `renderer`: Draw-surface adapter, shape tessellation and WebGPU pipeline
//! - `settings`: Presentation preferences

pub mod controller;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use controller::{Controller, InputEvent, Snapshot};
pub use settings::{QualityPreset, Settings};

/// Simulation configuration constants
pub mod consts {
    /// Gravitational constant for the softened 1/r force
    pub const G: f64 = 100.0;
    /// Fixed simulation timestep in seconds (also the tick period)
    pub const DT: f64 = 0.01;

    /// Maximum number of trail points kept per body
    pub const TRAIL_LENGTH: usize = 20;
    /// Minimum distance (world units) between recorded trail points
    pub const TRAIL_SPACING: f64 = 10.0;

    /// Mass of a body while it is being placed
    pub const INITIAL_MASS: f64 = 1.0;
    /// Mass floor applied when the mass is dragged out
    pub const MIN_MASS: f64 = 10.0;

    /// Multiplicative zoom step per wheel notch
    pub const ZOOM_FACTOR: f64 = 1.1;
    /// Hue advance per unit of simulated time
    pub const HUE_DRIFT_RATE: f64 = 0.1;

    /// Vectors shorter than this are treated as zero when rescaled
    pub const LENGTH_EPSILON: f64 = 1e-5;

    /// Canvas size assumed until the host reports one
    pub const DEFAULT_CANVAS_WIDTH: f64 = 1920.0;
    pub const DEFAULT_CANVAS_HEIGHT: f64 = 1080.0;
}

/// Wrap a value into [0, 1)
#[inline]
pub fn wrap_unit(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Format the simulation clock the way the status field shows it
#[inline]
pub fn format_clock(t: f64) -> String {
    format!("t = {:.3}", t)
}
