//! Collision event types.
//!
//! The [`CollisionSystem`](crate::systems::collision::CollisionSystem) emits
//! a [`CollisionEvent`] for every eligible overlapping pair, then a
//! [`DamageEvent`] per party that lost health and a [`KillEvent`] per party
//! whose health reached zero.

use crate::components::tags::Archetype;
use crate::ecs::entity::EntityId;

/// Two entities with compatible colliders overlap.
///
/// No ordering guarantees are provided between [`a`](Self::a) and
/// [`b`](Self::b).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub a: EntityId,
    pub b: EntityId,
    /// At least one of the colliders is a trigger; no damage was applied.
    pub trigger: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageEvent {
    pub entity: EntityId,
    pub amount: i32,
    pub remaining: i32,
}

/// `victim`'s health reached zero in a collision with `killer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KillEvent {
    pub victim: EntityId,
    pub victim_archetype: Archetype,
    pub killer: EntityId,
    pub killer_archetype: Archetype,
    /// The victim's score value, or the default reward when it had none.
    pub points: u32,
    /// The victim's own Score value, if it carried one. Only this refills
    /// energy.
    pub victim_score: Option<u32>,
    /// Whether the killer survived and had a Score to credit.
    pub credited: bool,
}
