//! Zero-data marker components and archetype resolution.
//!
//! Tags carry no state. Systems match on them through their signatures and
//! the renderer uses them to pick how an entity is drawn.

use serde::Serialize;

use crate::ecs::entity::Entity;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Player;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Enemy;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bullet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rock;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PowerUp;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ui;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Background;

/// What an entity is, as far as drawing and scoring are concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Archetype {
    Player,
    Enemy,
    Bullet,
    Rock,
    Generic,
}

impl Archetype {
    /// Resolve from tags. First match wins, in declaration order.
    pub fn of(entity: &Entity) -> Self {
        if entity.has::<Player>() {
            Archetype::Player
        } else if entity.has::<Enemy>() {
            Archetype::Enemy
        } else if entity.has::<Bullet>() {
            Archetype::Bullet
        } else if entity.has::<Rock>() {
            Archetype::Rock
        } else {
            Archetype::Generic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::entity::EntityId;

    #[test]
    fn archetype_from_tags() {
        let mut e = Entity::new(EntityId(1));
        assert_eq!(Archetype::of(&e), Archetype::Generic);
        e.add(Rock);
        assert_eq!(Archetype::of(&e), Archetype::Rock);
        e.add(Enemy);
        assert_eq!(Archetype::of(&e), Archetype::Enemy);
        e.add(Ui);
        assert_eq!(Archetype::of(&e), Archetype::Enemy);
    }
}
