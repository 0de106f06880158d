//! # Entity Component System core
//!
//! A small, single-threaded ECS built around fixed component kinds.
//!
//! - [`entity`] – entity ids and the per-entity component slot array
//! - [`component`] – the component registry, [`Component`] trait and [`Signature`]
//! - [`entities`] – the live entity table plus the pending-creation buffer
//! - [`resources`] – type-keyed singletons (input, time, canvas size)
//! - [`system`] – the [`System`] trait and its per-frame context
//! - [`world`] – ties it together and sequences each frame
//! - [`error`] – [`EcsError`]

pub mod component;
pub mod entities;
pub mod entity;
pub mod error;
pub mod resources;
pub mod system;
pub mod world;

pub use component::{AnyComponent, Component, ComponentKind, Signature};
pub use entities::{Entities, Spawner};
pub use entity::{Entity, EntityId};
pub use error::EcsError;
pub use resources::Resources;
pub use system::{System, SystemContext};
pub use world::World;
