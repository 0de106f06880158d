//! Entity lifecycle notifications.

use crate::components::tags::Archetype;
use crate::ecs::entity::EntityId;

/// Emitted by the world when an entity becomes live or is purged.
///
/// The archetype is resolved from the entity's tags at that moment, so
/// listeners can pick a sound or effect without looking the entity up (on
/// destruction it is already gone).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub entity: EntityId,
    pub archetype: Archetype,
}
