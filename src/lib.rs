//! Skirmish - a minimal real-time tabletop-simulation scaffold
//!
//! A fixed-capacity entity/component store (see `skirmish_core`) driven by
//! lifecycle-managed window, render and input subsystems inside a
//! synchronous frame loop:
//!
//! - [`config`] - layered TOML + environment configuration
//! - [`platform`] - the window/event capability provider (winit-backed)
//! - [`systems`] - the subsystem contract and its three implementations
//! - [`engine`] - the frame loop: pump, input, drain, render
//! - [`scene`] - the hardcoded demo battlefield

pub mod config;
pub mod engine;
pub mod platform;
pub mod scene;
pub mod systems;

pub use engine::{Engine, EngineContext, EngineError};
