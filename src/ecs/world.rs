//! # World
//!
//! The [`World`] owns the entity table, the ordered system list with each
//! system's working set, the resource map and the event queue.
//!
//! ## Frame
//!
//! ```text
//! update(dt)
//!   1. flush pending creations  -> register with every matching system
//!   2. re-check membership of entities whose component set changed
//!   3. flush destroy requests   -> unregister, purge, release components
//!   4. advance WorldTime
//!   5. run systems by ascending priority
//! ```
//!
//! Steps 1–3 are the only places the entity table and the working sets
//! change. Anything a system creates or destroys during step 5 takes effect
//! at the next call, so no working set is ever mutated while it is being
//! iterated.

use log::{debug, error, info};

use super::component::Signature;
use super::entities::{Entities, Spawner};
use super::entity::{Entity, EntityId};
use super::resources::Resources;
use super::system::{System, SystemContext};
use crate::components::tags::Archetype;
use crate::events::lifecycle::LifecycleEvent;
use crate::events::{Event, Events};
use crate::resources::worldtime::WorldTime;

struct SystemSlot {
    system: Box<dyn System>,
    /// Matching entity ids, kept sorted.
    members: Vec<EntityId>,
}

impl SystemSlot {
    fn register(&mut self, id: EntityId) {
        if let Err(pos) = self.members.binary_search(&id) {
            self.members.insert(pos, id);
        }
    }

    fn unregister(&mut self, id: EntityId) {
        if let Ok(pos) = self.members.binary_search(&id) {
            self.members.remove(pos);
        }
    }

    fn matches(&self, signature: Signature) -> bool {
        self.system.signature().is_subset_of(signature)
    }
}

pub struct World {
    entities: Entities,
    systems: Vec<SystemSlot>,
    resources: Resources,
    events: Events,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        let mut resources = Resources::new();
        resources.insert(WorldTime::default());
        Self {
            entities: Entities::new(),
            systems: Vec::new(),
            resources,
            events: Events::default(),
        }
    }

    // ── Entities ─────────────────────────────────────────────────────

    /// Queue a new entity. It becomes visible to systems and queries on the
    /// next [`update`](Self::update).
    pub fn create_entity(&mut self) -> &mut Entity {
        self.entities.create_entity()
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.entities.is_alive(id)
    }

    /// Request destruction of a live entity.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        self.entities.destroy(id)
    }

    pub fn entities(&self) -> &Entities {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut Entities {
        &mut self.entities
    }

    /// Number of entities in the live table (not counting pending ones).
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Live, active entities carrying every kind in `required`, in id order.
    ///
    /// Meant for collaborators outside the system list (HUD, debug tools).
    pub fn entities_with(&self, required: Signature) -> Vec<&Entity> {
        self.entities
            .ids_with(required)
            .into_iter()
            .filter_map(|id| self.entities.get(id))
            .collect()
    }

    // ── Systems ──────────────────────────────────────────────────────

    /// Add a system, keep the list sorted by priority and back-fill its
    /// working set with every live entity that already matches.
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        self.add_boxed_system(Box::new(system));
    }

    pub fn add_boxed_system(&mut self, system: Box<dyn System>) {
        let members = self.entities.ids_with(system.signature());
        info!(
            "Adding system `{}` (priority {}, signature {}, {} entities)",
            system.name(),
            system.priority(),
            system.signature(),
            members.len()
        );
        self.systems.push(SystemSlot { system, members });
        // Stable: equal priorities keep insertion order.
        self.systems.sort_by_key(|slot| slot.system.priority());
    }

    /// System names in execution order.
    pub fn system_names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|s| s.system.name()).collect()
    }

    /// Working set of the named system.
    pub fn system_members(&self, name: &str) -> Option<&[EntityId]> {
        self.systems
            .iter()
            .find(|s| s.system.name() == name)
            .map(|s| s.members.as_slice())
    }

    // ── Resources ────────────────────────────────────────────────────

    pub fn insert_resource<T: 'static>(&mut self, value: T) {
        self.resources.insert(value);
    }

    pub fn remove_resource<T: 'static>(&mut self) -> Option<T> {
        self.resources.remove::<T>()
    }

    pub fn get_resource<T: 'static>(&self) -> Option<&T> {
        self.resources.get::<T>()
    }

    pub fn get_resource_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.resources.get_mut::<T>()
    }

    /// # Panics
    ///
    /// Panics if the resource hasn't been inserted.
    pub fn resource<T: 'static>(&self) -> &T {
        self.resources.get::<T>().unwrap_or_else(|| {
            panic!(
                "Resource `{}` not found. Did you forget to insert it?",
                std::any::type_name::<T>()
            )
        })
    }

    /// # Panics
    ///
    /// Panics if the resource hasn't been inserted.
    pub fn resource_mut<T: 'static>(&mut self) -> &mut T {
        self.resources.get_mut::<T>().unwrap_or_else(|| {
            panic!(
                "Resource `{}` not found. Did you forget to insert it?",
                std::any::type_name::<T>()
            )
        })
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    // ── Events ───────────────────────────────────────────────────────

    /// Take every event emitted since the previous call.
    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain()
    }

    // ── Frame ────────────────────────────────────────────────────────

    /// Run one frame. `dt` is the elapsed time in milliseconds.
    pub fn update(&mut self, dt: f32) {
        self.flush_creations();
        self.refresh_memberships();
        self.flush_destructions();
        let dt = self.advance_time(dt);

        for slot in &mut self.systems {
            let SystemSlot { system, members } = slot;
            let mut ctx = SystemContext {
                members,
                entities: &mut self.entities,
                resources: &self.resources,
                events: &mut self.events,
            };
            if let Err(e) = system.update(&mut ctx, dt) {
                error!("System `{}` failed: {}", system.name(), e);
            }
        }
    }

    fn flush_creations(&mut self) {
        for mut entity in self.entities.take_pending() {
            let id = entity.id();
            let signature = entity.signature();
            for slot in &mut self.systems {
                if slot.matches(signature) {
                    slot.register(id);
                }
            }
            entity.clear_dirty();
            let archetype = Archetype::of(&entity);
            debug!("Spawned {:?} {} with {}", archetype, id, signature);
            self.events
                .push(Event::Spawned(LifecycleEvent { entity: id, archetype }));
            self.entities.insert(entity);
        }
    }

    /// Components added to or removed from live entities take effect on
    /// membership here, one frame boundary after the change.
    fn refresh_memberships(&mut self) {
        for id in self.entities.dirty_ids() {
            let Some(entity) = self.entities.get_mut(id) else {
                continue;
            };
            let signature = entity.signature();
            entity.clear_dirty();
            for slot in &mut self.systems {
                if slot.matches(signature) {
                    slot.register(id);
                } else {
                    slot.unregister(id);
                }
            }
        }
    }

    fn flush_destructions(&mut self) {
        for id in self.entities.inactive_ids() {
            for slot in &mut self.systems {
                slot.unregister(id);
            }
            if let Some(mut entity) = self.entities.remove(id) {
                let archetype = Archetype::of(&entity);
                entity.release();
                debug!("Destroyed {:?} {}", archetype, id);
                self.events
                    .push(Event::Destroyed(LifecycleEvent { entity: id, archetype }));
            }
        }
    }

    fn advance_time(&mut self, dt: f32) -> f32 {
        match self.resources.get_mut::<WorldTime>() {
            Some(time) => time.advance(dt),
            None => dt,
        }
    }
}

impl Spawner for World {
    fn create_entity(&mut self) -> &mut Entity {
        self.entities.create_entity()
    }
}
