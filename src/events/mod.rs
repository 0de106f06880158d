//! Events emitted by the world and its systems.
//!
//! Systems push events while they run; collaborators outside the ECS (audio,
//! HUD, the game shell) drain them after each frame with
//! [`World::drain_events`](crate::ecs::World::drain_events) and react.
//!
//! Submodules:
//! - [`collision`] – contact, damage and kill notifications
//! - [`lifecycle`] – entity spawned / destroyed notifications

pub mod collision;
pub mod lifecycle;

use self::collision::{CollisionEvent, DamageEvent, KillEvent};
use self::lifecycle::LifecycleEvent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// An entity left the pending buffer and became live.
    Spawned(LifecycleEvent),
    /// An entity was purged from the world.
    Destroyed(LifecycleEvent),
    Collision(CollisionEvent),
    Damaged(DamageEvent),
    Killed(KillEvent),
}

/// FIFO event buffer owned by the world.
#[derive(Debug, Default)]
pub struct Events {
    queue: Vec<Event>,
}

impl Events {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.queue)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.queue.iter()
    }
}
