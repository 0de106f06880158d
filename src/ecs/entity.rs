//! Entities: an identity plus a fixed array of component slots.
//!
//! Each [`Entity`] holds at most one component per [`ComponentKind`]. Slots
//! are indexed by the kind's discriminant, so typed access is a direct array
//! index followed by a variant match.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::component::{AnyComponent, Component, ComponentKind, Signature};
use super::error::EcsError;

/// Unique entity identifier. Ids are handed out monotonically and never
/// reused, so a stale id simply stops resolving.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub struct Entity {
    id: EntityId,
    active: bool,
    slots: [Option<AnyComponent>; ComponentKind::COUNT],
    signature: Signature,
    /// Set whenever the component set changes; cleared when the world
    /// re-evaluates system membership at a frame boundary.
    dirty: bool,
}

impl Entity {
    pub(crate) fn new(id: EntityId) -> Self {
        Self {
            id,
            active: true,
            slots: std::array::from_fn(|_| None),
            signature: Signature::EMPTY,
            dirty: false,
        }
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// False once [`destroy`](Self::destroy) has been requested.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Kinds currently attached.
    #[inline]
    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// Attach a component, replacing any existing one of the same kind.
    pub fn add<T: Component>(&mut self, component: T) -> &mut Self {
        let slot = &mut self.slots[T::KIND.index()];
        if slot.is_none() {
            self.signature = self.signature.with(T::KIND);
            self.dirty = true;
        }
        *slot = Some(component.into_any());
        self
    }

    /// Detach and return a component.
    pub fn remove<T: Component>(&mut self) -> Option<T> {
        let taken = self.slots[T::KIND.index()].take()?;
        self.signature = self.signature.without(T::KIND);
        self.dirty = true;
        T::from_any_owned(taken)
    }

    #[inline]
    pub fn get<T: Component>(&self) -> Option<&T> {
        self.slots[T::KIND.index()].as_ref().and_then(T::from_any)
    }

    #[inline]
    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.slots[T::KIND.index()]
            .as_mut()
            .and_then(T::from_any_mut)
    }

    #[inline]
    pub fn has<T: Component>(&self) -> bool {
        self.has_kind(T::KIND)
    }

    #[inline]
    pub fn has_kind(&self, kind: ComponentKind) -> bool {
        self.signature.contains(kind)
    }

    /// Like [`get`](Self::get), but a missing component is an error.
    ///
    /// Systems use this for the components in their signature: if one is
    /// missing, membership bookkeeping went wrong and the caller should hear
    /// about it instead of acting on stale state.
    pub fn require<T: Component>(&self) -> Result<&T, EcsError> {
        let id = self.id;
        self.get::<T>().ok_or(EcsError::MissingComponent {
            entity: id,
            kind: T::KIND,
        })
    }

    pub fn require_mut<T: Component>(&mut self) -> Result<&mut T, EcsError> {
        let id = self.id;
        self.get_mut::<T>().ok_or(EcsError::MissingComponent {
            entity: id,
            kind: T::KIND,
        })
    }

    /// Number of attached components.
    pub fn component_count(&self) -> usize {
        self.signature.len()
    }

    /// Request removal. The entity stays in every system's working set until
    /// the next frame boundary, where the world unregisters it and releases
    /// its components.
    pub fn destroy(&mut self) {
        self.active = false;
    }

    /// Drop every component.
    pub(crate) fn release(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.signature = Signature::EMPTY;
        self.active = false;
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("active", &self.active)
            .field("components", &self.signature.to_string())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::health::Health;
    use crate::components::tags::Player;
    use crate::components::transform::Transform;
    use crate::components::velocity::Velocity;

    fn entity() -> Entity {
        Entity::new(EntityId(1))
    }

    #[test]
    fn add_and_get() {
        let mut e = entity();
        e.add(Transform::new(1.0, 2.0)).add(Player);
        assert!(e.has::<Transform>());
        assert!(e.has::<Player>());
        assert!(!e.has::<Velocity>());
        assert_eq!(e.get::<Transform>().map(|t| t.x), Some(1.0));
        assert_eq!(e.component_count(), 2);
    }

    #[test]
    fn add_overwrites_same_kind() {
        let mut e = entity();
        e.add(Health::new(3));
        e.add(Health::new(7));
        assert_eq!(e.component_count(), 1);
        assert_eq!(e.get::<Health>().map(|h| h.max_health), Some(7));
    }

    #[test]
    fn remove_returns_component_and_updates_signature() {
        let mut e = entity();
        e.add(Velocity::new(1.0, 0.0));
        let v = e.remove::<Velocity>();
        assert!(v.is_some());
        assert!(!e.has::<Velocity>());
        assert!(e.remove::<Velocity>().is_none());
    }

    #[test]
    fn require_missing_component_is_an_error() {
        let e = entity();
        let err = e.require::<Transform>().unwrap_err();
        assert_eq!(
            err,
            EcsError::MissingComponent {
                entity: EntityId(1),
                kind: ComponentKind::Transform
            }
        );
    }

    #[test]
    fn destroy_keeps_components_until_release() {
        let mut e = entity();
        e.add(Transform::new(0.0, 0.0));
        e.destroy();
        assert!(!e.is_active());
        assert!(e.has::<Transform>());
        e.release();
        assert_eq!(e.component_count(), 0);
        assert!(e.get::<Transform>().is_none());
    }

    #[test]
    fn dirty_tracks_component_set_changes_only() {
        let mut e = entity();
        e.add(Transform::new(0.0, 0.0));
        assert!(e.is_dirty());
        e.clear_dirty();
        e.add(Transform::new(5.0, 5.0));
        assert!(!e.is_dirty(), "overwriting an existing kind keeps the set unchanged");
        e.remove::<Transform>();
        assert!(e.is_dirty());
    }
}
