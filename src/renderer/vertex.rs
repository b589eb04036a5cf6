//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for scene elements
pub mod colors {
    /// Body outlines and velocity arrows
    pub const OUTLINE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.93, 0.93, 0.93, 1.0];

    /// RGBA for a hue in [0, 1) at full saturation and brightness
    ///
    /// Hues outside [0, 1) wrap around the color wheel.
    pub fn from_hue(hue: f64) -> [f32; 4] {
        let h = (hue - hue.floor()) * 6.0;
        let sector = h.floor();
        let f = (h - sector) as f32;
        let (r, g, b) = match sector as u32 {
            0 => (1.0, f, 0.0),
            1 => (1.0 - f, 1.0, 0.0),
            2 => (0.0, 1.0, f),
            3 => (0.0, 1.0 - f, 1.0),
            4 => (f, 0.0, 1.0),
            _ => (1.0, 0.0, 1.0 - f),
        };
        [r, g, b, 1.0]
    }

    /// Decode one sRGB-encoded channel to linear light
    pub fn srgb_to_linear(c: f32) -> f32 {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    /// Linear RGBA for an sRGB surface, which re-encodes on write; alpha is kept
    pub fn to_linear([r, g, b, a]: [f32; 4]) -> [f32; 4] {
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
    }
}

#[cfg(test)]
mod tests {
    use super::colors::{BACKGROUND, from_hue, srgb_to_linear, to_linear};

    fn close(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_primary_hues() {
        assert!(close(from_hue(0.0), [1.0, 0.0, 0.0, 1.0]));
        assert!(close(from_hue(1.0 / 3.0), [0.0, 1.0, 0.0, 1.0]));
        assert!(close(from_hue(2.0 / 3.0), [0.0, 0.0, 1.0, 1.0]));
    }

    #[test]
    fn test_intermediate_hues() {
        assert!(close(from_hue(1.0 / 12.0), [1.0, 0.5, 0.0, 1.0]));
        assert!(close(from_hue(0.5), [0.0, 1.0, 1.0, 1.0]));
        assert!(close(from_hue(5.0 / 6.0), [1.0, 0.0, 1.0, 1.0]));
    }

    #[test]
    fn test_hue_wraps() {
        assert!(close(from_hue(1.25), from_hue(0.25)));
        assert!(close(from_hue(-0.75), from_hue(0.25)));
    }

    #[test]
    fn test_srgb_to_linear() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!((srgb_to_linear(0.5) - 0.21404).abs() < 1e-4);
        assert!((srgb_to_linear(0.02) - 0.02 / 12.92).abs() < 1e-7);
    }

    #[test]
    fn test_half_channel_survives_srgb_encoding() {
        // The surface encodes linear 0.214 back to 0.5 on write
        let [r, g, b, a] = to_linear(from_hue(1.0 / 12.0));
        assert_eq!((r, b, a), (1.0, 0.0, 1.0));
        assert!((g - 0.21404).abs() < 1e-4);

        let [r, g, b, a] = to_linear(BACKGROUND);
        assert!(r < BACKGROUND[0] && r == g && g == b);
        assert_eq!(a, 1.0);
    }
}
