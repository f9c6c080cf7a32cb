//! Core types for the Skirmish prototype
//!
//! This crate provides the foundational simulation state:
//!
//! - [`EntityId`] / [`EntityRegistry`] - monotonic entity identifiers
//! - [`Store`] - fixed-capacity, identifier-indexed component storage
//! - [`Army`], [`Unit`], [`Position`], [`Base`] - the component records
//! - [`World`] - registry plus one store per component type

mod components;
mod entity;
mod store;
mod world;

pub use components::{Army, Base, BaseShape, Position, Unit};
pub use entity::{EntityId, EntityRegistry, RegistryError, ENTITIES_LIMIT};
pub use store::{Component, Store, StoreError};
pub use world::World;
