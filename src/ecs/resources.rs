//! Type-keyed singleton storage.
//!
//! Resources are the world's global data: input state, world time, canvas
//! size, debug toggles. Each type can be stored once.

use std::any::{Any, TypeId};

use rustc_hash::FxHashMap;

use super::error::EcsError;

#[derive(Default)]
pub struct Resources {
    map: FxHashMap<TypeId, Box<dyn Any>>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resource, replacing any existing value of the same type.
    pub fn insert<T: 'static>(&mut self, value: T) {
        self.map.insert(TypeId::of::<T>(), Box::new(value));
    }

    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|r| r.downcast_ref::<T>())
    }

    pub fn get_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|r| r.downcast_mut::<T>())
    }

    pub fn require<T: 'static>(&self) -> Result<&T, EcsError> {
        self.get::<T>()
            .ok_or(EcsError::MissingResource(std::any::type_name::<T>()))
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.map.contains_key(&TypeId::of::<T>())
    }

    pub fn remove<T: 'static>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(|r| r.downcast::<T>().ok())
            .map(|b| *b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Counter(i32);

    #[test]
    fn insert_get_replace_remove() {
        let mut res = Resources::new();
        assert!(!res.contains::<Counter>());
        res.insert(Counter(1));
        res.insert(Counter(2));
        assert_eq!(res.get::<Counter>(), Some(&Counter(2)));
        if let Some(c) = res.get_mut::<Counter>() {
            c.0 += 1;
        }
        assert_eq!(res.remove::<Counter>(), Some(Counter(3)));
        assert!(res.get::<Counter>().is_none());
    }

    #[test]
    fn require_reports_type_name() {
        let res = Resources::new();
        match res.require::<Counter>() {
            Err(EcsError::MissingResource(name)) => assert!(name.ends_with("Counter")),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
