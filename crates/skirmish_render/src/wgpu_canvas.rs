//! wgpu-backed canvas
//!
//! Draw calls batch point and line vertices on the CPU; `present` uploads
//! the batches and flips the surface. Curved outlines are tessellated with
//! a configurable segment count.

use std::sync::Arc;

use winit::window::Window;

use crate::canvas::{Canvas, RenderError};
use crate::color::Color;
use crate::context::RenderContext;
use crate::pipeline::{PrimitivePipeline, Vertex2D};
use crate::primitives;

const DEFAULT_CIRCLE_SEGMENTS: u32 = 64;

/// A [`Canvas`] drawing onto a wgpu surface bound to the window.
pub struct WgpuCanvas {
    context: RenderContext,
    pipeline: PrimitivePipeline,
    draw_color: Color,
    clear_color: Color,
    circle_segments: u32,
    points: Vec<Vertex2D>,
    lines: Vec<Vertex2D>,
}

impl WgpuCanvas {
    /// Bind a canvas to `window`. Blocks while the GPU is acquired.
    pub fn new(window: Arc<Window>, vsync: bool) -> Result<Self, RenderError> {
        let context = RenderContext::with_vsync(window, vsync)?;
        let pipeline = PrimitivePipeline::new(&context.device, context.config.format);
        pipeline.update_globals(&context.queue, context.config.width, context.config.height);

        Ok(Self {
            context,
            pipeline,
            draw_color: Color::WHITE,
            clear_color: Color::BLACK,
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            points: Vec::new(),
            lines: Vec::new(),
        })
    }

    /// Set the segment count used to tessellate circles and ellipses.
    pub fn with_circle_segments(mut self, segments: u32) -> Self {
        self.circle_segments = segments.max(3);
        self
    }

    /// Re-apply the surface configuration after a lost surface.
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
        self.pipeline.update_globals(
            &self.context.queue,
            self.context.config.width,
            self.context.config.height,
        );
    }

    fn push_lines(&mut self, vertices: Vec<[f32; 2]>) {
        let color = self.draw_color.to_array();
        self.lines
            .extend(vertices.into_iter().map(|p| Vertex2D::new(p, color)));
    }
}

impl Canvas for WgpuCanvas {
    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn clear(&mut self) {
        self.clear_color = self.draw_color;
        self.points.clear();
        self.lines.clear();
    }

    fn draw_point(&mut self, x: f32, y: f32) {
        self.points
            .push(Vertex2D::new([x, y], self.draw_color.to_array()));
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, r: f32) {
        let vertices = primitives::circle_outline(cx, cy, r, self.circle_segments);
        self.push_lines(vertices);
    }

    fn draw_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) {
        let vertices = primitives::ellipse_outline(cx, cy, rx, ry, self.circle_segments);
        self.push_lines(vertices);
    }

    fn draw_rect(&mut self, cx: f32, cy: f32, half_w: f32, half_h: f32) {
        let vertices = primitives::rect_outline(cx, cy, half_w, half_h);
        self.push_lines(vertices);
    }

    fn present(&mut self) -> Result<(), RenderError> {
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Canvas Encoder"),
            });

        let c = self.clear_color;
        self.pipeline.render(
            &self.context.device,
            &mut encoder,
            &view,
            wgpu::Color {
                r: c.r as f64,
                g: c.g as f64,
                b: c.b as f64,
                a: c.a as f64,
            },
            &self.points,
            &self.lines,
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
