//! Rendering
//!
//! The simulation only talks to a [`Canvas`]: filled circles, outlined
//! circles and lines in screen coordinates. [`ShapeBatch`] turns those calls
//! into triangles, and [`RenderState`] draws a batch with WebGPU.

pub mod batch;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use batch::ShapeBatch;
pub use pipeline::RenderState;
pub use vertex::{Vertex, colors};

use crate::controller::Snapshot;
use crate::settings::Settings;
use crate::sim::Vec2;
use crate::wrap_unit;

/// Draw surface supplied by the host
///
/// All positions and diameters are in screen pixels.
pub trait Canvas {
    /// Canvas size in pixels (width, height)
    fn size(&self) -> (f64, f64);

    /// Filled disk with the given hue at full saturation and brightness
    fn fill_circle(&mut self, center: Vec2, diameter: f64, hue: f64);

    /// One pixel circle outline
    fn draw_circle(&mut self, center: Vec2, diameter: f64, color: [f32; 4]);

    /// One pixel line segment
    fn draw_line(&mut self, start: Vec2, end: Vec2, color: [f32; 4]);

    /// Show the clock string
    fn set_status_text(&mut self, text: &str);
}

/// Draw every body of a snapshot, in world order
///
/// Per body: trail dots growing from 1 to the body size with hues trailing the
/// body's hue, the body disk, a black outline and a black velocity arrow.
pub fn draw_snapshot<C: Canvas + ?Sized>(snapshot: &Snapshot<'_>, canvas: &mut C, settings: &Settings) {
    let view = &snapshot.view;
    let dt = snapshot.dt;

    for body in snapshot.bodies {
        let size = body.diameter();

        if settings.trails && !body.trail.is_empty() {
            let k = body.trail.len() as f64;
            for (i, point) in body.trail.iter().enumerate() {
                let i = i as f64;
                let trail_size = 1.0 + i * (size / k);
                let hue = wrap_unit(body.hue - dt * k + i * dt);
                canvas.fill_circle(view.world_to_screen(*point), view.scale_length(trail_size), hue);
            }
        }

        let center = view.world_to_screen(body.position);
        let diameter = view.scale_length(size);
        canvas.fill_circle(center, diameter, body.hue);
        canvas.draw_circle(center, diameter, colors::OUTLINE);

        if settings.velocity_arrows {
            let tip = view.world_to_screen(body.position + body.velocity);
            canvas.draw_line(center, tip, colors::OUTLINE);
        }
    }

    if settings.show_status {
        canvas.set_status_text(&snapshot.status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Body, ViewTransform};

    /// Canvas that records calls
    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        status: Option<String>,
    }

    #[derive(Debug, PartialEq)]
    enum Call {
        Fill(Vec2, f64, f64),
        Outline(Vec2, f64),
        Line(Vec2, Vec2),
    }

    impl Canvas for Recorder {
        fn size(&self) -> (f64, f64) {
            (1920.0, 1080.0)
        }
        fn fill_circle(&mut self, center: Vec2, diameter: f64, hue: f64) {
            self.calls.push(Call::Fill(center, diameter, hue));
        }
        fn draw_circle(&mut self, center: Vec2, diameter: f64, _color: [f32; 4]) {
            self.calls.push(Call::Outline(center, diameter));
        }
        fn draw_line(&mut self, start: Vec2, end: Vec2, _color: [f32; 4]) {
            self.calls.push(Call::Line(start, end));
        }
        fn set_status_text(&mut self, text: &str) {
            self.status = Some(text.to_string());
        }
    }

    fn snapshot(bodies: &[Body], view: ViewTransform) -> Snapshot<'_> {
        Snapshot {
            bodies,
            view,
            dt: 0.01,
            status: "t = 0.500".to_string(),
        }
    }

    #[test]
    fn test_body_without_trail() {
        let bodies = vec![Body::new(Vec2::new(10.0, 0.0), Vec2::new(5.0, 5.0), 100.0, 0.3)];
        let view = ViewTransform {
            offset: Vec2::new(100.0, 50.0),
            scale: 2.0,
        };
        let mut canvas = Recorder::default();
        draw_snapshot(&snapshot(&bodies, view), &mut canvas, &Settings::default());

        assert_eq!(
            canvas.calls,
            vec![
                Call::Fill(Vec2::new(220.0, 100.0), 40.0, 0.3),
                Call::Outline(Vec2::new(220.0, 100.0), 40.0),
                Call::Line(Vec2::new(220.0, 100.0), Vec2::new(230.0, 110.0)),
            ]
        );
        assert_eq!(canvas.status.as_deref(), Some("t = 0.500"));
    }

    #[test]
    fn test_trail_sizes_and_hues() {
        let mut body = Body::new(Vec2::ZERO, Vec2::ZERO, 100.0, 0.5);
        body.trail.extend([Vec2::new(-40.0, 0.0), Vec2::new(-20.0, 0.0)]);
        let bodies = vec![body];
        let mut canvas = Recorder::default();
        draw_snapshot(
            &snapshot(&bodies, ViewTransform::default()),
            &mut canvas,
            &Settings::default(),
        );

        assert_eq!(canvas.calls.len(), 5);
        // s = 20, k = 2: sizes 1 and 11, hues 0.48 and 0.49
        match (&canvas.calls[0], &canvas.calls[1]) {
            (Call::Fill(p0, s0, h0), Call::Fill(p1, s1, h1)) => {
                assert_eq!(*p0, Vec2::new(-40.0, 0.0));
                assert_eq!(*p1, Vec2::new(-20.0, 0.0));
                assert!((s0 - 1.0).abs() < 1e-12);
                assert!((s1 - 11.0).abs() < 1e-12);
                assert!((h0 - 0.48).abs() < 1e-12);
                assert!((h1 - 0.49).abs() < 1e-12);
            }
            other => panic!("unexpected calls {:?}", other),
        }
        assert_eq!(canvas.calls[2], Call::Fill(Vec2::ZERO, 20.0, 0.5));
    }

    #[test]
    fn test_trail_hue_wraps() {
        let mut body = Body::new(Vec2::ZERO, Vec2::ZERO, 10.0, 0.005);
        body.trail.push_back(Vec2::new(50.0, 0.0));
        let bodies = vec![body];
        let mut canvas = Recorder::default();
        draw_snapshot(
            &snapshot(&bodies, ViewTransform::default()),
            &mut canvas,
            &Settings::default(),
        );
        match canvas.calls[0] {
            Call::Fill(_, _, hue) => assert!((hue - 0.995).abs() < 1e-12),
            ref other => panic!("unexpected call {:?}", other),
        }
    }

    #[test]
    fn test_settings_suppress_extras() {
        let mut body = Body::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 10.0, 0.0);
        body.trail.push_back(Vec2::new(50.0, 0.0));
        let bodies = vec![body];
        let settings = Settings {
            trails: false,
            velocity_arrows: false,
            show_status: false,
            ..Settings::default()
        };
        let mut canvas = Recorder::default();
        draw_snapshot(&snapshot(&bodies, ViewTransform::default()), &mut canvas, &settings);

        assert_eq!(canvas.calls.len(), 2);
        assert!(matches!(canvas.calls[0], Call::Fill(..)));
        assert!(matches!(canvas.calls[1], Call::Outline(..)));
        assert_eq!(canvas.status, None);
    }
}
