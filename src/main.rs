//! Skirmish entry point

use skirmish::config::AppConfig;
use skirmish::engine::Engine;
use skirmish::platform::WinitPlatform;
use skirmish::scene;
use skirmish::systems::{InputSystem, RenderSystem, WindowSystem};

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting Skirmish");

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    if let Err(e) = run(config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let world = scene::demo_battlefield(config.simulation.entity_capacity)?;
    let platform = WinitPlatform::new()?;

    // Registration order is start order; stop order is its reverse
    // (input, render, window).
    let mut engine = Engine::new(world, Box::new(platform))
        .with_subsystem(Box::new(WindowSystem::new(config.window.clone())))
        .with_subsystem(Box::new(RenderSystem::new(
            &config.rendering,
            config.window.vsync,
        )))
        .with_subsystem(Box::new(InputSystem::new()));

    engine.run()?;
    Ok(())
}
