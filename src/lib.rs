//! SpyShoot library.
//!
//! A vertical arcade shooter built on a small, purpose-made ECS. This crate
//! exposes the ECS core, the game's components, resources, systems and events,
//! plus the session driver, for use by the binary and the integration tests.

pub mod canvas;
pub mod components;
pub mod ecs;
pub mod events;
pub mod factory;
pub mod game;
pub mod resources;
pub mod systems;
