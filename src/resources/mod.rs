//! Global resources stored in the [`World`](crate::ecs::World).
//!
//! - [`canvassize`] – playfield dimensions
//! - [`debugmode`] – marker enabling debug overlays
//! - [`gameconfig`] – INI-backed gameplay configuration
//! - [`input`] – keyboard state and the [`input::KeyboardInput`] trait
//! - [`worldtime`] – simulation clock

pub mod canvassize;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod worldtime;
