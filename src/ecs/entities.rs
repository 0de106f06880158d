//! The entity table and its pending-creation buffer.
//!
//! [`Entities`] is what systems see: they can read and mutate live entities,
//! request destruction, and queue new entities. Newly created entities sit in
//! the pending buffer until the world flushes it at the next frame boundary,
//! so nothing a system creates shows up in any working set mid-frame.

use rustc_hash::FxHashMap;

use super::component::Signature;
use super::entity::{Entity, EntityId};
use super::error::EcsError;

/// Anything entities can be created through. Implemented by the world (for
/// the game shell and tests) and by [`Entities`] (for systems mid-frame).
pub trait Spawner {
    /// Queue a new entity and return it for component attachment.
    fn create_entity(&mut self) -> &mut Entity;
}

#[derive(Default)]
pub struct Entities {
    live: FxHashMap<EntityId, Entity>,
    pending: Vec<Entity>,
    next_id: u64,
}

impl Entities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live entity by id, including ones already asked to be destroyed.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.live.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.live.get_mut(&id)
    }

    pub fn require(&self, id: EntityId) -> Result<&Entity, EcsError> {
        self.live.get(&id).ok_or(EcsError::UnknownEntity(id))
    }

    pub fn require_mut(&mut self, id: EntityId) -> Result<&mut Entity, EcsError> {
        self.live.get_mut(&id).ok_or(EcsError::UnknownEntity(id))
    }

    /// In the live table and not destroy-requested.
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.live.get(&id).is_some_and(Entity::is_active)
    }

    /// Request removal of a live entity. Returns false if the id is unknown.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        match self.live.get_mut(&id) {
            Some(entity) => {
                entity.destroy();
                true
            }
            None => false,
        }
    }

    /// Number of entities in the live table.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Entities queued for the next frame boundary.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.live.values()
    }

    /// Ids of active entities that carry every kind in `required`, in id order.
    pub fn ids_with(&self, required: Signature) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self
            .live
            .values()
            .filter(|e| e.is_active() && required.is_subset_of(e.signature()))
            .map(Entity::id)
            .collect();
        ids.sort_unstable();
        ids
    }

    pub(crate) fn take_pending(&mut self) -> Vec<Entity> {
        std::mem::take(&mut self.pending)
    }

    pub(crate) fn insert(&mut self, entity: Entity) {
        self.live.insert(entity.id(), entity);
    }

    pub(crate) fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.live.remove(&id)
    }

    /// Ids of destroy-requested entities, in id order.
    pub(crate) fn inactive_ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self
            .live
            .values()
            .filter(|e| !e.is_active())
            .map(Entity::id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Ids of active entities whose component set changed since the last
    /// membership pass, in id order.
    pub(crate) fn dirty_ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self
            .live
            .values()
            .filter(|e| e.is_active() && e.is_dirty())
            .map(Entity::id)
            .collect();
        ids.sort_unstable();
        ids
    }
}

impl Spawner for Entities {
    fn create_entity(&mut self) -> &mut Entity {
        self.next_id += 1;
        let index = self.pending.len();
        self.pending.push(Entity::new(EntityId(self.next_id)));
        &mut self.pending[index]
    }
}
