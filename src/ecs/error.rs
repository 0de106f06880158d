//! Error type for the ECS core.
//!
//! Component presence is guaranteed by construction (the factory attaches the
//! full set an archetype needs), so these errors mark programming mistakes
//! rather than recoverable runtime conditions. Systems propagate them with `?`
//! and the [`World`](super::world::World) logs them and keeps the frame going.

use thiserror::Error;

use super::component::ComponentKind;
use super::entity::EntityId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EcsError {
    /// A strict accessor asked for a component the entity does not carry.
    #[error("entity {entity} has no {kind} component")]
    MissingComponent {
        entity: EntityId,
        kind: ComponentKind,
    },
    /// The entity id is not in the live table.
    #[error("entity {0} is not alive")]
    UnknownEntity(EntityId),
    /// A resource was required but never inserted into the world.
    #[error("resource `{0}` not found")]
    MissingResource(&'static str),
}
