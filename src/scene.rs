//! Demo scene
//!
//! Builds the hardcoded battlefield the prototype starts with: a command
//! entity carrying the force tallies plus three units whose base footprints
//! cover every drawable shape.

use std::fmt;

use skirmish_core::{Base, Position, RegistryError, StoreError, World};

/// Build the demo battlefield.
///
/// Positions are window pixels, laid out to be visible in the default
/// 1280x720 window.
pub fn demo_battlefield(entity_capacity: usize) -> Result<World, SceneError> {
    let mut world = World::with_capacity(entity_capacity);

    // Command entity: tallies only, nothing on the table.
    let command = world.spawn()?;
    world.armies_mut().add(command)?.value = 2;
    world.units_mut().add(command)?.value = 8;

    // One unit per footprint shape.
    let trooper = world.spawn()?;
    *world.positions_mut().add(trooper)? = Position::new(320.0, 180.0, 0.0);
    *world.bases_mut().add(trooper)? = Base::circular(25.0);

    let walker = world.spawn()?;
    *world.positions_mut().add(walker)? = Position::new(640.0, 360.0, 0.0);
    *world.bases_mut().add(walker)? = Base::elliptical(25.0, 70.0);

    let transport = world.spawn()?;
    *world.positions_mut().add(transport)? = Position::new(960.0, 540.0, 0.0);
    *world.bases_mut().add(transport)? = Base::rectangular(70.0, 25.0);

    log::info!("demo battlefield ready: {} entities", world.entity_count());
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("{}", world.armies().get(command)?);
        log::debug!("{}", world.units().get(command)?);
        for (id, position) in world.positions().iter() {
            log::debug!("entity {}: {}", id, position);
        }
        for (id, base) in world.bases().iter() {
            log::debug!("entity {}: {}", id, base);
        }
    }

    Ok(world)
}

/// Scene construction error types.
#[derive(Debug)]
pub enum SceneError {
    Registry(RegistryError),
    Store(StoreError),
}

impl From<RegistryError> for SceneError {
    fn from(e: RegistryError) -> Self {
        SceneError::Registry(e)
    }
}

impl From<StoreError> for SceneError {
    fn from(e: StoreError) -> Self {
        SceneError::Store(e)
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Registry(e) => write!(f, "scene construction failed: {}", e),
            SceneError::Store(e) => write!(f, "scene construction failed: {}", e),
        }
    }
}

impl std::error::Error for SceneError {}
