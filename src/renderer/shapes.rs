//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Unit directions at the `segments + 1` rim angles, first and last equal
fn rim(segments: u32) -> impl Iterator<Item = Vec2> {
    let step = TAU / segments.max(1) as f32;
    (0..=segments).map(move |i| Vec2::from_angle(i as f32 * step))
}

/// Consecutive pairs of rim directions, one per segment
fn wedges(segments: u32) -> impl Iterator<Item = (Vec2, Vec2)> {
    rim(segments).zip(rim(segments).skip(1))
}

/// Triangle fan for a filled disk
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let at = |p: Vec2| Vertex::new(p.x, p.y, color);
    wedges(segments)
        .flat_map(|(a, b)| [at(center), at(center + a * radius), at(center + b * radius)])
        .collect()
}

/// Annulus between two radii, two triangles per segment
///
/// A negative inner radius is treated as zero.
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let inner_radius = inner_radius.max(0.0);
    let at = |p: Vec2| Vertex::new(p.x, p.y, color);
    wedges(segments)
        .flat_map(|(a, b)| {
            let (ia, oa) = (center + a * inner_radius, center + a * outer_radius);
            let (ib, ob) = (center + b * inner_radius, center + b * outer_radius);
            [at(ia), at(oa), at(ib), at(ib), at(oa), at(ob)]
        })
        .collect()
}

/// Generate vertices for a straight line of the given width
///
/// Degenerate (zero length) lines produce no geometry.
pub fn line(start: Vec2, end: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (end - start).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = start + perp;
    let b = start - perp;
    let c = end + perp;
    let d = end - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}
