//! CPU tessellation of outline primitives
//!
//! The GPU pipeline only knows points and line lists, so outlines are built
//! here as line-list vertex pairs (each consecutive pair is one segment).

use std::f32::consts::TAU;

/// Minimum segment count accepted for curved outlines.
const MIN_SEGMENTS: u32 = 3;

/// Tessellate a circle outline of radius `r` centered at `(cx, cy)`.
pub fn circle_outline(cx: f32, cy: f32, r: f32, segments: u32) -> Vec<[f32; 2]> {
    ellipse_outline(cx, cy, r, r, segments)
}

/// Tessellate an ellipse outline with radii `(rx, ry)` centered at `(cx, cy)`.
pub fn ellipse_outline(cx: f32, cy: f32, rx: f32, ry: f32, segments: u32) -> Vec<[f32; 2]> {
    let segments = segments.max(MIN_SEGMENTS);
    let step = TAU / segments as f32;
    let at = |i: u32| {
        let angle = step * i as f32;
        [cx + rx * angle.cos(), cy + ry * angle.sin()]
    };

    let mut vertices = Vec::with_capacity(segments as usize * 2);
    for i in 0..segments {
        vertices.push(at(i));
        vertices.push(at((i + 1) % segments));
    }
    vertices
}

/// Tessellate a rectangle outline with corners at `(cx ± hw, cy ± hh)`.
pub fn rect_outline(cx: f32, cy: f32, hw: f32, hh: f32) -> Vec<[f32; 2]> {
    let tl = [cx - hw, cy - hh];
    let tr = [cx + hw, cy - hh];
    let br = [cx + hw, cy + hh];
    let bl = [cx - hw, cy + hh];
    vec![tl, tr, tr, br, br, bl, bl, tl]
}
