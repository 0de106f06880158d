//! Game systems.
//!
//! Each system is a struct implementing [`System`](crate::ecs::System). The
//! world runs them in ascending priority order once per frame; the priority
//! of each lives next to it as `PRIORITY`.
//!
//! Submodules overview
//! - [`playerinput`] (5) – turn held directions into ship velocity
//! - [`enemyai`] (8) – zig-zag steering and falling for enemies
//! - [`projectile`] (9) – straight-line flight and off-screen cleanup
//! - [`movement`] (10) – damping, forces, speed cap and integration
//! - [`boundary`] (12) – keep the player on screen, drop strays
//! - [`collision`] (15) – pairwise overlap, contact damage and kills
//! - [`status`] (20) – invulnerability timers and energy regeneration
//! - [`render`] (100) – draw sprites onto a [`Canvas`](crate::canvas::Canvas)

pub mod boundary;
pub mod collision;
pub mod enemyai;
pub mod movement;
pub mod playerinput;
pub mod projectile;
pub mod render;
pub mod status;
