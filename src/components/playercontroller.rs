//! Player ship state driven by the input system.
//!
//! Thruster intensity and the muzzle flash are visual state: they change what
//! the renderer draws but never feed back into physics.

/// Per-tick thruster ramp while a direction is held.
pub const THRUSTER_RAMP_UP: f32 = 0.1;
/// Per-tick thruster ramp while idle.
pub const THRUSTER_RAMP_DOWN: f32 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerController {
    pub max_speed: f32,
    /// 0.0 (off) to 1.0 (full burn).
    pub thruster_intensity: f32,
    /// Milliseconds left on the muzzle flash.
    pub muzzle_flash_timer: f32,
    pub show_muzzle_flash: bool,
}

impl PlayerController {
    pub fn new(max_speed: f32) -> Self {
        Self {
            max_speed,
            thruster_intensity: 0.0,
            muzzle_flash_timer: 0.0,
            show_muzzle_flash: false,
        }
    }

    /// Show the muzzle flash for `duration_ms`.
    pub fn trigger_muzzle_flash(&mut self, duration_ms: f32) {
        self.muzzle_flash_timer = duration_ms;
        self.show_muzzle_flash = true;
    }

    /// Ramp the thruster toward full while moving, toward zero otherwise.
    pub fn ramp_thruster(&mut self, moving: bool) {
        self.thruster_intensity = if moving {
            (self.thruster_intensity + THRUSTER_RAMP_UP).min(1.0)
        } else {
            (self.thruster_intensity - THRUSTER_RAMP_DOWN).max(0.0)
        };
    }

    /// Count the flash down by `dt` milliseconds, hiding it at zero.
    pub fn tick_muzzle_flash(&mut self, dt: f32) {
        if !self.show_muzzle_flash {
            return;
        }
        self.muzzle_flash_timer -= dt;
        if self.muzzle_flash_timer <= 0.0 {
            self.muzzle_flash_timer = 0.0;
            self.show_muzzle_flash = false;
        }
    }
}
