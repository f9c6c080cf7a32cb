//! Fixed-capacity component storage
//!
//! A [`Store`] keeps one component type in a dense array indexed directly by
//! entity identifier, giving O(1) access with no per-entity allocation. A
//! presence bitmap tracks which slots actually hold a component, so "never
//! added" and "holds the zero value" can be told apart when iterating.
//!
//! Reads and writes are bounds-checked: an identifier at or beyond the
//! capacity is rejected with [`StoreError::InvalidEntityId`] instead of
//! touching memory it should not.

use std::fmt;

use crate::entity::EntityId;

/// Marker for types that can live in a [`Store`].
///
/// `Default` doubles as the zero value a slot holds before `add` and after
/// `remove`.
pub trait Component: Copy + Default + fmt::Debug + 'static {}

/// A fixed-capacity, identifier-indexed container for one component type.
pub struct Store<T: Component> {
    slots: Box<[T]>,
    present: Box<[bool]>,
}

impl<T: Component> Store<T> {
    /// Create a store with `capacity` slots, all empty.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![T::default(); capacity].into_boxed_slice(),
            present: vec![false; capacity].into_boxed_slice(),
        }
    }

    /// Number of slots, present or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of entities currently holding this component.
    pub fn len(&self) -> usize {
        self.present.iter().filter(|&&p| p).count()
    }

    /// True when no entity holds this component.
    pub fn is_empty(&self) -> bool {
        !self.present.iter().any(|&p| p)
    }

    /// Attach the component to `id`, resetting the slot to the zero value.
    ///
    /// Adding over an existing component re-zeroes it, matching a fresh add.
    pub fn add(&mut self, id: EntityId) -> Result<&mut T, StoreError> {
        let index = self.check(id)?;
        self.slots[index] = T::default();
        self.present[index] = true;
        Ok(&mut self.slots[index])
    }

    /// Read the slot for `id`.
    ///
    /// The slot is returned whether or not the component is present; an
    /// absent slot reads as the zero value. Use [`Store::contains`] to tell
    /// the two apart.
    pub fn get(&self, id: EntityId) -> Result<&T, StoreError> {
        let index = self.check(id)?;
        Ok(&self.slots[index])
    }

    /// Mutable access to the slot for `id`.
    pub fn get_mut(&mut self, id: EntityId) -> Result<&mut T, StoreError> {
        let index = self.check(id)?;
        Ok(&mut self.slots[index])
    }

    /// Whether `id` currently holds this component.
    ///
    /// Identifiers beyond the capacity hold nothing.
    pub fn contains(&self, id: EntityId) -> bool {
        self.present.get(id.index()).copied().unwrap_or(false)
    }

    /// Detach the component from `id`, resetting the slot to the zero value.
    ///
    /// Removing an absent component is a no-op.
    pub fn remove(&mut self, id: EntityId) -> Result<(), StoreError> {
        let index = self.check(id)?;
        if !self.present[index] {
            log::trace!(
                "remove of absent {} for entity {}",
                std::any::type_name::<T>(),
                id
            );
        }
        self.slots[index] = T::default();
        self.present[index] = false;
        Ok(())
    }

    /// Iterate over present components in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> + '_ {
        self.present
            .iter()
            .enumerate()
            .filter_map(move |(i, &present)| {
                present.then(|| (EntityId::new(i as u64), &self.slots[i]))
            })
    }

    fn check(&self, id: EntityId) -> Result<usize, StoreError> {
        let index = id.index();
        if index >= self.slots.len() {
            return Err(StoreError::InvalidEntityId {
                id: id.raw(),
                capacity: self.slots.len(),
            });
        }
        Ok(index)
    }
}

/// Error for component store operations.
#[derive(Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The entity identifier cannot index a store of this capacity.
    InvalidEntityId { id: u64, capacity: usize },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidEntityId { id, capacity } => {
                write!(f, "invalid entity id {} (capacity {})", id, capacity)
            }
        }
    }
}

impl std::error::Error for StoreError {}
