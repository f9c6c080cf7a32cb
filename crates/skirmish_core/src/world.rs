//! World container for entities and their component stores
//!
//! The World owns the entity registry and one store per component type,
//! all sharing a single capacity. Systems receive a `&World` (or `&mut`)
//! instead of reaching for process-wide state.

use crate::components::{Army, Base, Position, Unit};
use crate::entity::{EntityId, EntityRegistry, RegistryError, ENTITIES_LIMIT};
use crate::store::Store;

/// The simulation state: entity registry plus the four component stores.
pub struct World {
    registry: EntityRegistry,
    armies: Store<Army>,
    units: Store<Unit>,
    positions: Store<Position>,
    bases: Store<Base>,
}

impl World {
    /// Create a world with the default entity capacity.
    pub fn new() -> Self {
        Self::with_capacity(ENTITIES_LIMIT)
    }

    /// Create a world whose registry and stores share `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            registry: EntityRegistry::with_capacity(capacity),
            armies: Store::new(capacity),
            units: Store::new(capacity),
            positions: Store::new(capacity),
            bases: Store::new(capacity),
        }
    }

    /// Create a new entity and return its identifier.
    pub fn spawn(&mut self) -> Result<EntityId, RegistryError> {
        self.registry.create()
    }

    /// Number of entities created so far.
    #[inline]
    pub fn entity_count(&self) -> u64 {
        self.registry.count()
    }

    /// Shared capacity of the registry and every store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.registry.capacity()
    }

    pub fn armies(&self) -> &Store<Army> {
        &self.armies
    }

    pub fn armies_mut(&mut self) -> &mut Store<Army> {
        &mut self.armies
    }

    pub fn units(&self) -> &Store<Unit> {
        &self.units
    }

    pub fn units_mut(&mut self) -> &mut Store<Unit> {
        &mut self.units
    }

    pub fn positions(&self) -> &Store<Position> {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut Store<Position> {
        &mut self.positions
    }

    pub fn bases(&self) -> &Store<Base> {
        &self.bases
    }

    pub fn bases_mut(&mut self) -> &mut Store<Base> {
        &mut self.bases
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::BaseShape;

    #[test]
    fn test_world_new() {
        let world = World::new();
        assert_eq!(world.entity_count(), 0);
        assert_eq!(world.capacity(), ENTITIES_LIMIT);
        assert!(world.armies().is_empty());
        assert!(world.units().is_empty());
        assert!(world.positions().is_empty());
        assert!(world.bases().is_empty());
    }

    #[test]
    fn test_spawn_is_sequential() {
        let mut world = World::new();
        let a = world.spawn().unwrap();
        let b = world.spawn().unwrap();
        assert_eq!(a.raw(), 1);
        assert_eq!(b.raw(), 2);
        assert_eq!(world.entity_count(), 2);
    }

    #[test]
    fn test_components_are_independent_per_entity() {
        let mut world = World::new();
        let id = world.spawn().unwrap();

        // An entity may hold any subset of the component types.
        world.positions_mut().add(id).unwrap();
        world.bases_mut().add(id).unwrap();
        assert!(world.positions().contains(id));
        assert!(world.bases().contains(id));
        assert!(!world.armies().contains(id));
        assert!(!world.units().contains(id));

        world.positions_mut().remove(id).unwrap();
        assert!(!world.positions().contains(id));
        assert!(world.bases().contains(id));
    }

    #[test]
    fn test_position_roundtrip_through_world() {
        let mut world = World::new();
        let id = world.spawn().unwrap();

        *world.positions_mut().add(id).unwrap() = Position::new(1.0, 2.0, 3.0);
        let read = world.positions().get(id).unwrap();
        assert_eq!(read.x, 1.0);
        assert_eq!(read.y, 2.0);
        assert_eq!(read.z, 3.0);
    }

    #[test]
    fn test_base_roundtrip_through_world() {
        let mut world = World::new();
        let id = world.spawn().unwrap();

        *world.bases_mut().add(id).unwrap() = Base::circular(25.0);
        let read = world.bases().get(id).unwrap();
        assert_eq!(read.shape, BaseShape::Circular);
        assert_eq!(read.r0, 25.0);
    }

    #[test]
    fn test_spawn_honors_capacity() {
        let mut world = World::with_capacity(3);
        assert!(world.spawn().is_ok());
        assert!(world.spawn().is_ok());
        assert!(world.spawn().is_err());
    }
}
