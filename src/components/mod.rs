//! Component types that can be attached to entities.
//!
//! Components are plain data. Behavior lives in the systems; the few methods
//! here only keep a component's own fields consistent.
//!
//! Submodules overview:
//! - [`acceleration`] – thrust rate and per-tick deceleration
//! - [`collider`] – axis-aligned box collider with layer/mask filtering
//! - [`enemyai`] – zig-zag steering state for enemies and spies
//! - [`energy`] – energy pool spent on shots
//! - [`health`] – hit points and invulnerability
//! - [`playercontroller`] – thruster and muzzle flash state of the ship
//! - [`projectile`] – straight-line projectile parameters
//! - [`rigidbody`] – mass, friction and a per-tick force queue
//! - [`score`] – points carried or awarded
//! - [`sprite`] – flat-colored rectangle and [`sprite::Color`]
//! - [`tags`] – zero-data markers and [`tags::Archetype`]
//! - [`transform`] – position, rotation and previous position
//! - [`velocity`] – velocity with a speed cap

pub mod acceleration;
pub mod collider;
pub mod enemyai;
pub mod energy;
pub mod health;
pub mod playercontroller;
pub mod projectile;
pub mod rigidbody;
pub mod score;
pub mod sprite;
pub mod tags;
pub mod transform;
pub mod velocity;
