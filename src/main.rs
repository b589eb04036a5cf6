//! Gravity Sandbox entry point
//!
//! Handles platform-specific initialization and drives the controller.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_host {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, HtmlCanvasElement, HtmlInputElement, HtmlSelectElement, MouseEvent, WheelEvent,
    };

    use gravity_sandbox::consts::DT;
    use gravity_sandbox::renderer::{RenderState, ShapeBatch};
    use gravity_sandbox::sim::Vec2;
    use gravity_sandbox::{Controller, InputEvent, Settings};

    /// Sandbox instance holding all host state
    struct Sandbox {
        controller: Controller,
        batch: ShapeBatch,
        settings: Settings,
        render_state: Option<RenderState>,
        status_field: Option<HtmlInputElement>,
    }

    impl Sandbox {
        fn new(width: f64, height: f64, seed: u64, settings: Settings) -> Self {
            Self {
                controller: Controller::new(width, height, seed),
                batch: ShapeBatch::new(width, height, &settings),
                settings,
                render_state: None,
                status_field: None,
            }
        }

        /// Draw the latest snapshot and refresh the status field
        fn render(&mut self) {
            self.batch.clear();
            self.controller.render(&mut self.batch, &self.settings);

            if let Some(render_state) = self.render_state.as_mut() {
                match render_state.render(self.batch.vertices()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size;
                        let view_size = render_state.view_size;
                        render_state.resize(w, h, view_size);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            if let Some(field) = &self.status_field {
                if field.value() != self.batch.status() {
                    field.set_value(self.batch.status());
                }
            }
        }

        fn resize(&mut self, canvas: &HtmlCanvasElement, dpr: f64) {
            let client_w = canvas.client_width() as f64;
            let client_h = canvas.client_height() as f64;
            let width = (client_w * dpr) as u32;
            let height = (client_h * dpr) as u32;
            canvas.set_width(width);
            canvas.set_height(height);

            self.batch.resize(client_w, client_h);
            self.controller.fit_to(&self.batch);
            if let Some(render_state) = self.render_state.as_mut() {
                render_state.resize(width, height, (client_w as f32, client_h as f32));
            }
        }

        /// Apply and persist a change from one of the settings controls
        fn apply_control(&mut self, id: &str, value: &str) {
            if !self.settings.apply_control(id, value) {
                log::warn!("Ignoring {} = {:?}", id, value);
                return;
            }
            self.batch.apply_settings(&self.settings);
            self.settings.save();
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Gravity Sandbox starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width() as f64;
        let client_h = canvas.client_height() as f64;
        let width = (client_w * dpr) as u32;
        let height = (client_h * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let settings = Settings::load();
        let sandbox = Rc::new(RefCell::new(Sandbox::new(client_w, client_h, seed, settings)));
        sandbox.borrow_mut().status_field = document
            .get_element_by_id("status")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

        log::info!("Sandbox initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            (client_w as f32, client_h as f32),
        )
        .await;
        sandbox.borrow_mut().render_state = Some(render_state);

        setup_pointer_handlers(&canvas, sandbox.clone());
        setup_buttons(sandbox.clone());
        setup_settings_controls(&document, sandbox.clone());
        setup_resize(&canvas, sandbox.clone());
        start_ticks(sandbox.clone());

        request_animation_frame(sandbox);

        log::info!("Gravity Sandbox running!");
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, sandbox: Rc<RefCell<Sandbox>>) {
        let pointer = |event: &MouseEvent| Vec2::new(event.offset_x() as f64, event.offset_y() as f64);

        // Press
        {
            let sandbox = sandbox.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                sandbox
                    .borrow_mut()
                    .controller
                    .handle(InputEvent::Press(pointer(&event)));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Move
        {
            let sandbox = sandbox.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                sandbox
                    .borrow_mut()
                    .controller
                    .handle(InputEvent::Move(pointer(&event)));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Release
        {
            let sandbox = sandbox.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                sandbox
                    .borrow_mut()
                    .controller
                    .handle(InputEvent::Release(pointer(&event)));
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Leave
        {
            let sandbox = sandbox.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                sandbox.borrow_mut().controller.handle(InputEvent::Leave);
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Wheel: scrolling down zooms in
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: WheelEvent| {
                event.prevent_default();
                let delta = event.delta_y();
                if delta != 0.0 {
                    let sign = if delta > 0.0 { 1 } else { -1 };
                    sandbox.borrow_mut().controller.handle(InputEvent::Wheel(sign));
                }
            });
            let _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(sandbox: Rc<RefCell<Sandbox>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        let buttons: [(&str, fn(&mut Controller)); 3] = [
            ("pause-btn", Controller::pause),
            ("resume-btn", Controller::resume),
            ("reset-btn", Controller::reset),
        ];

        for (id, action) in buttons {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing button #{}", id);
                continue;
            };
            let sandbox = sandbox.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                action(&mut sandbox.borrow_mut().controller);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Quality select and toggles, initialised from the loaded settings
    fn setup_settings_controls(document: &Document, sandbox: Rc<RefCell<Sandbox>>) {
        let settings = sandbox.borrow().settings.clone();

        if let Some(select) = document
            .get_element_by_id("quality-select")
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        {
            select.set_value(&settings.quality.as_str().to_lowercase());
            let sandbox = sandbox.clone();
            let target = select.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                sandbox
                    .borrow_mut()
                    .apply_control("quality-select", &target.value());
            });
            let _ = select.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let toggles = [
            ("trails-toggle", settings.trails),
            ("arrows-toggle", settings.velocity_arrows),
            ("status-toggle", settings.show_status),
        ];
        for (id, checked) in toggles {
            let Some(input) = document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                log::warn!("Missing control #{}", id);
                continue;
            };
            input.set_checked(checked);
            let sandbox = sandbox.clone();
            let target = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let value = if target.checked() { "true" } else { "false" };
                sandbox.borrow_mut().apply_control(id, value);
            });
            let _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(canvas: &HtmlCanvasElement, sandbox: Rc<RefCell<Sandbox>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
            sandbox.borrow_mut().resize(&canvas, dpr);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Fixed-rate simulation ticks on the event thread
    fn start_ticks(sandbox: Rc<RefCell<Sandbox>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut()>::new(move || {
            sandbox.borrow_mut().controller.tick();
        });
        let period_ms = (DT * 1000.0).round() as i32;
        if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        ) {
            log::error!("Failed to start tick timer: {:?}", e);
        }
        closure.forget();
    }

    fn request_animation_frame(sandbox: Rc<RefCell<Sandbox>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame_loop(sandbox);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(sandbox: Rc<RefCell<Sandbox>>) {
        sandbox.borrow_mut().render();
        request_animation_frame(sandbox);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_host::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use gravity_sandbox::{QualityPreset, Settings};

    env_logger::init();
    log::info!("Gravity Sandbox (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the interactive version");

    let settings = std::env::args()
        .nth(1)
        .and_then(|arg| QualityPreset::parse(&arg))
        .map(Settings::from_preset)
        .unwrap_or_else(Settings::load);

    run_headless_demo(&settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Place an orbiting pair through the pointer API and run it without a window
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo(settings: &gravity_sandbox::Settings) {
    use gravity_sandbox::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
    use gravity_sandbox::renderer::ShapeBatch;
    use gravity_sandbox::sim::Vec2;
    use gravity_sandbox::{Controller, InputEvent};

    let mut controller = Controller::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT, 1);
    let mut batch = ShapeBatch::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT, settings);
    let center = Vec2::new(DEFAULT_CANVAS_WIDTH / 2.0, DEFAULT_CANVAS_HEIGHT / 2.0);

    // Each body: place, aim the velocity, drag out the mass
    for (at, velocity, radius) in [
        (Vec2::new(-50.0, 0.0), Vec2::new(0.0, 5.0), 10.0),
        (Vec2::new(50.0, 0.0), Vec2::new(0.0, -5.0), 10.0),
    ] {
        let at = center + at;
        controller.handle(InputEvent::Press(at));
        controller.handle(InputEvent::Press(at + velocity));
        controller.handle(InputEvent::Move(at + Vec2::new(radius / 2.0, 0.0)));
        controller.handle(InputEvent::Press(at + Vec2::new(radius, 0.0)));
    }

    for frame in 1..=1000 {
        controller.tick();
        if frame % 100 == 0 {
            batch.clear();
            controller.render(&mut batch, settings);
            log::info!("{} ({} vertices)", batch.status(), batch.vertices().len());
        }
    }

    match serde_json::to_string(controller.world()) {
        Ok(json) => log::debug!("Final world: {}", json),
        Err(e) => log::warn!("Could not serialize world: {}", e),
    }
}
