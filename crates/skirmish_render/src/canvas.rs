//! Drawing surface abstraction
//!
//! [`Canvas`] is the rendering capability the render subsystem consumes:
//! set a draw color, clear, draw primitives, present. The production
//! implementation is [`crate::WgpuCanvas`]; tests substitute a recorder.
//!
//! Outline primitives are centered on their anchor: `draw_circle` takes a
//! radius, `draw_ellipse` x/y radii, `draw_rect` half-extents.

use std::fmt;

use crate::color::Color;

/// A surface primitives can be drawn onto and presented from.
pub trait Canvas {
    /// Set the color used by `clear` and subsequent draw calls.
    fn set_draw_color(&mut self, color: Color);

    /// Erase the surface with the current draw color and discard any
    /// primitives batched since the last present.
    fn clear(&mut self);

    /// Draw a single point.
    fn draw_point(&mut self, x: f32, y: f32);

    /// Draw a circle outline of radius `r` centered at `(cx, cy)`.
    fn draw_circle(&mut self, cx: f32, cy: f32, r: f32);

    /// Draw an ellipse outline with radii `(rx, ry)` centered at `(cx, cy)`.
    fn draw_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32);

    /// Draw a rectangle outline with corners at `(cx ± half_w, cy ± half_h)`.
    fn draw_rect(&mut self, cx: f32, cy: f32, half_w: f32, half_h: f32);

    /// Flip the finished frame onto the screen.
    ///
    /// May block on vertical sync.
    fn present(&mut self) -> Result<(), RenderError>;
}

/// Render error types.
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.); reconfigure and
    /// try again next frame.
    SurfaceLost,
    /// GPU out of memory.
    OutOfMemory,
    /// Other render error.
    Other(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Records every canvas call for draw-policy tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingCanvas {
    pub ops: Vec<CanvasOp>,
}

#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum CanvasOp {
    SetDrawColor(Color),
    Clear,
    Point(f32, f32),
    Circle(f32, f32, f32),
    Ellipse(f32, f32, f32, f32),
    Rect(f32, f32, f32, f32),
    Present,
}

#[cfg(test)]
impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ops excluding color changes, for order assertions.
    pub fn draw_ops(&self) -> Vec<CanvasOp> {
        self.ops
            .iter()
            .copied()
            .filter(|op| !matches!(op, CanvasOp::SetDrawColor(_)))
            .collect()
    }
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn set_draw_color(&mut self, color: Color) {
        self.ops.push(CanvasOp::SetDrawColor(color));
    }

    fn clear(&mut self) {
        self.ops.push(CanvasOp::Clear);
    }

    fn draw_point(&mut self, x: f32, y: f32) {
        self.ops.push(CanvasOp::Point(x, y));
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, r: f32) {
        self.ops.push(CanvasOp::Circle(cx, cy, r));
    }

    fn draw_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) {
        self.ops.push(CanvasOp::Ellipse(cx, cy, rx, ry));
    }

    fn draw_rect(&mut self, cx: f32, cy: f32, half_w: f32, half_h: f32) {
        self.ops.push(CanvasOp::Rect(cx, cy, half_w, half_h));
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.ops.push(CanvasOp::Present);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }

    #[test]
    fn test_recording_canvas_keeps_call_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.set_draw_color(Color::GREEN);
        canvas.clear();
        canvas.draw_point(1.0, 2.0);
        canvas.present().unwrap();

        assert_eq!(
            canvas.ops,
            vec![
                CanvasOp::SetDrawColor(Color::GREEN),
                CanvasOp::Clear,
                CanvasOp::Point(1.0, 2.0),
                CanvasOp::Present,
            ]
        );
        assert_eq!(
            canvas.draw_ops(),
            vec![CanvasOp::Clear, CanvasOp::Point(1.0, 2.0), CanvasOp::Present]
        );
    }
}
