//! Rendering for the Skirmish prototype
//!
//! This crate provides the drawing capability consumed by the render
//! subsystem:
//!
//! - [`Canvas`] - the drawing surface abstraction (color, clear, primitives,
//!   present)
//! - [`WgpuCanvas`] - wgpu-backed canvas bound to a winit window
//! - [`render_world`] / [`draw_footprint`] - the per-frame draw policy
//! - [`RenderStyle`] - colors used when drawing the world
//!
//! Primitive outlines are tessellated on the CPU (see [`primitives`]) and
//! drawn through point-list and line-list pipelines.

mod canvas;
mod color;
mod context;
mod draw;
mod pipeline;
pub mod primitives;
mod wgpu_canvas;

pub use canvas::{Canvas, RenderError};
pub use color::Color;
pub use context::RenderContext;
pub use draw::{draw_footprint, render_world, RenderStyle};
pub use pipeline::{PrimitivePipeline, Vertex2D};
pub use wgpu_canvas::WgpuCanvas;
