//! The system contract.
//!
//! A system declares the [`Signature`] an entity needs to be processed and a
//! priority that fixes its place in the frame. The world keeps each system's
//! working set up to date and hands it over in a [`SystemContext`] every
//! frame; lower priorities run first.

use super::component::Signature;
use super::entities::Entities;
use super::entity::EntityId;
use super::error::EcsError;
use super::resources::Resources;
use crate::events::{Event, Events};

/// Everything a system may touch during its update.
pub struct SystemContext<'a> {
    /// Working set: entities that matched the signature at the last frame
    /// boundary, in id order. Some may have been destroy-requested earlier in
    /// this frame; check [`Entity::is_active`](super::entity::Entity::is_active).
    pub members: &'a [EntityId],
    pub entities: &'a mut Entities,
    pub resources: &'a Resources,
    pub events: &'a mut Events,
}

impl SystemContext<'_> {
    /// Members that have not been destroy-requested yet.
    pub fn active_members(&self) -> Vec<EntityId> {
        self.members
            .iter()
            .copied()
            .filter(|id| self.entities.is_alive(*id))
            .collect()
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }
}

pub trait System {
    /// Short name used in logs and membership lookups.
    fn name(&self) -> &'static str;

    /// Component kinds an entity must carry to be in the working set.
    fn signature(&self) -> Signature;

    /// Execution order; lower runs earlier. Ties keep insertion order.
    fn priority(&self) -> i32;

    /// Advance one frame. `dt` is in milliseconds.
    fn update(&mut self, ctx: &mut SystemContext<'_>, dt: f32) -> Result<(), EcsError>;
}
