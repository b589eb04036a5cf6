//! Simulation controller
//!
//! Owns the world, the view and the creation state machine. Hosts call into
//! it from a single event thread: pointer input, a fixed-rate `tick()`, and
//! frame draws that read a borrowed snapshot.

use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DT};
use crate::format_clock;
use crate::renderer::{Canvas, draw_snapshot};
use crate::settings::Settings;
use crate::sim::{Body, Interaction, Vec2, ViewTransform, World, step};

/// Input delivered by the host, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Press(Vec2),
    Move(Vec2),
    /// Button release, accepted and ignored
    Release(Vec2),
    /// Pointer left the canvas, accepted and ignored
    Leave,
    /// Wheel notch: positive zooms in, negative zooms out
    Wheel(i32),
}

/// Read-only view of everything a frame needs
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub bodies: &'a [Body],
    pub view: ViewTransform,
    pub dt: f64,
    pub status: String,
}

/// Owns the simulation and serializes all access to it
#[derive(Debug, Clone)]
pub struct Controller {
    world: World,
    view: ViewTransform,
    interaction: Interaction,
    paused: bool,
    canvas_size: (f64, f64),
}

impl Controller {
    /// New controller with the default time step, view centered on the canvas
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        Self::with_dt(width, height, DT, seed)
    }

    pub fn with_dt(width: f64, height: f64, dt: f64, seed: u64) -> Self {
        Self {
            world: World::new(dt),
            view: ViewTransform::centered(width, height),
            interaction: Interaction::new(seed),
            paused: false,
            canvas_size: (width, height),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Record a new canvas size; takes effect on the next reset
    pub fn resize(&mut self, width: f64, height: f64) {
        self.canvas_size = (width, height);
    }

    /// Track the size of the canvas frames are drawn on
    pub fn fit_to<C: Canvas + ?Sized>(&mut self, canvas: &C) {
        let (width, height) = canvas.size();
        self.resize(width, height);
    }

    /// Advance one step unless paused or a body is being placed
    pub fn tick(&mut self) {
        if self.paused || !self.interaction.is_idle() {
            return;
        }
        step(&mut self.world);
    }

    pub fn pause(&mut self) {
        if !self.paused {
            log::info!("Paused at {}", self.status_text());
        }
        self.paused = true;
    }

    pub fn resume(&mut self) {
        if self.paused {
            log::info!("Resumed at {}", self.status_text());
        }
        self.paused = false;
    }

    /// Clear all bodies, rewind the clock, abandon creation and re-center.
    ///
    /// The paused flag is left as it is.
    pub fn reset(&mut self) {
        log::info!("Reset ({} bodies cleared)", self.world.len());
        self.world.clear();
        self.interaction.cancel();
        let (width, height) = self.canvas_size;
        self.view.pan_center(width, height);
    }

    pub fn on_pointer_press(&mut self, screen: Vec2) {
        self.interaction
            .on_press(&mut self.world, &self.view, screen);
    }

    pub fn on_pointer_move(&mut self, screen: Vec2) {
        self.interaction
            .on_move(&mut self.world, &self.view, screen);
    }

    pub fn on_wheel(&mut self, sign: i32) {
        self.view.zoom(sign);
    }

    /// Dispatch a host input event
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Press(p) => self.on_pointer_press(p),
            InputEvent::Move(p) => self.on_pointer_move(p),
            InputEvent::Wheel(sign) => self.on_wheel(sign),
            InputEvent::Release(_) | InputEvent::Leave => {}
        }
    }

    /// Clock as shown in the status field
    pub fn status_text(&self) -> String {
        format_clock(self.world.t)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            bodies: &self.world.bodies,
            view: self.view,
            dt: self.world.dt,
            status: self.status_text(),
        }
    }

    /// Draw the current state onto a host canvas
    pub fn render<C: Canvas>(&self, canvas: &mut C, settings: &Settings) {
        draw_snapshot(&self.snapshot(), canvas, settings);
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT, 0)
    }
}
