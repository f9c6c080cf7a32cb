//! Draw policy: world state -> canvas calls
//!
//! `render_world` is the render subsystem's per-frame body, in strict order:
//! clear the surface, draw every present Position as a point, draw every
//! Base footprint anchored at its entity's Position, present.

use skirmish_core::{Base, BaseShape, Position, World};

use crate::canvas::{Canvas, RenderError};
use crate::color::Color;

/// Colors used when drawing the world.
#[derive(Clone, Copy, Debug)]
pub struct RenderStyle {
    /// Clear color.
    pub background: Color,
    /// Color of position markers.
    pub position_color: Color,
    /// Color of base footprint outlines.
    pub footprint_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            position_color: Color::GREEN,
            footprint_color: Color::new(0.9, 0.9, 0.9, 1.0),
        }
    }
}

/// Draw one base footprint anchored at `anchor`.
///
/// Each shape maps to exactly one canvas call; a base with no shape draws
/// nothing and leaves a diagnostic note.
pub fn draw_footprint<C: Canvas>(canvas: &mut C, base: &Base, anchor: &Position) {
    let (x, y) = (anchor.x as f32, anchor.y as f32);
    match base.shape {
        BaseShape::Circular => canvas.draw_circle(x, y, base.r0 as f32),
        BaseShape::Elliptical => canvas.draw_ellipse(x, y, base.r0 as f32, base.r1 as f32),
        BaseShape::Rectangular => canvas.draw_rect(x, y, base.r0 as f32, base.r1 as f32),
        BaseShape::None => {
            log::debug!("base at ({}, {}) has no shape, nothing drawn", x, y);
        }
    }
}

/// Render the world onto `canvas` and present the frame.
pub fn render_world<C: Canvas>(
    canvas: &mut C,
    world: &World,
    style: &RenderStyle,
) -> Result<(), RenderError> {
    canvas.set_draw_color(style.background);
    canvas.clear();

    canvas.set_draw_color(style.position_color);
    for (_, position) in world.positions().iter() {
        canvas.draw_point(position.x as f32, position.y as f32);
    }

    canvas.set_draw_color(style.footprint_color);
    for (id, base) in world.bases().iter() {
        if !world.positions().contains(id) {
            log::debug!("entity {} has a base but no position, skipping", id);
            continue;
        }
        if let Ok(anchor) = world.positions().get(id) {
            draw_footprint(canvas, base, anchor);
        }
    }

    canvas.present()
}
