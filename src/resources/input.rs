//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. WASD is the primary movement
//! set and the arrow keys the secondary one; both drive the ship.
//!
//! Whatever captures the real keyboard calls [`InputState::press`] and
//! [`InputState::release`] as keys change, and [`InputState::end_frame`] once
//! the frame has been simulated so `just_pressed`/`just_released` only last
//! for a single frame.

/// Keys the game binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    F11,
}

/// Read-only keyboard queries.
pub trait KeyboardInput {
    /// Key is held down.
    fn is_key_pressed(&self, key: Key) -> bool;
    /// Key went down this frame.
    fn is_key_just_pressed(&self, key: Key) -> bool;
}

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: Key,
}

impl BoolState {
    fn bound_to(key_binding: Key) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }

    fn set(&mut self, down: bool) {
        if down && !self.active {
            self.just_pressed = true;
        } else if !down && self.active {
            self.just_released = true;
        }
        self.active = down;
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
///
/// Fields are grouped by purpose: main movement (WASD), secondary movement
/// (arrow keys), and actions (fire, debug toggle).
#[derive(Debug, Clone)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_right: BoolState,
    // Arrow keys
    pub secondarydirection_up: BoolState,
    pub secondarydirection_down: BoolState,
    pub secondarydirection_left: BoolState,
    pub secondarydirection_right: BoolState,
    // Action keys
    pub action_fire: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            maindirection_up: BoolState::bound_to(Key::W),
            maindirection_left: BoolState::bound_to(Key::A),
            maindirection_down: BoolState::bound_to(Key::S),
            maindirection_right: BoolState::bound_to(Key::D),
            secondarydirection_up: BoolState::bound_to(Key::ArrowUp),
            secondarydirection_down: BoolState::bound_to(Key::ArrowDown),
            secondarydirection_left: BoolState::bound_to(Key::ArrowLeft),
            secondarydirection_right: BoolState::bound_to(Key::ArrowRight),
            action_fire: BoolState::bound_to(Key::Space),
            mode_debug: BoolState::bound_to(Key::F11),
        }
    }
}

impl InputState {
    fn states(&self) -> [&BoolState; 10] {
        [
            &self.maindirection_up,
            &self.maindirection_left,
            &self.maindirection_down,
            &self.maindirection_right,
            &self.secondarydirection_up,
            &self.secondarydirection_down,
            &self.secondarydirection_left,
            &self.secondarydirection_right,
            &self.action_fire,
            &self.mode_debug,
        ]
    }

    fn states_mut(&mut self) -> [&mut BoolState; 10] {
        [
            &mut self.maindirection_up,
            &mut self.maindirection_left,
            &mut self.maindirection_down,
            &mut self.maindirection_right,
            &mut self.secondarydirection_up,
            &mut self.secondarydirection_down,
            &mut self.secondarydirection_left,
            &mut self.secondarydirection_right,
            &mut self.action_fire,
            &mut self.mode_debug,
        ]
    }

    /// State of whichever action `key` is bound to.
    pub fn state(&self, key: Key) -> Option<&BoolState> {
        self.states().into_iter().find(|s| s.key_binding == key)
    }

    /// Mark `key` as held. Sets `just_pressed` if it was up.
    pub fn press(&mut self, key: Key) {
        for state in self.states_mut() {
            if state.key_binding == key {
                state.set(true);
            }
        }
    }

    /// Mark `key` as released. Sets `just_released` if it was down.
    pub fn release(&mut self, key: Key) {
        for state in self.states_mut() {
            if state.key_binding == key {
                state.set(false);
            }
        }
    }

    /// Clear the one-frame edge flags.
    pub fn end_frame(&mut self) {
        for state in self.states_mut() {
            state.just_pressed = false;
            state.just_released = false;
        }
    }

    pub fn up(&self) -> bool {
        self.maindirection_up.active || self.secondarydirection_up.active
    }

    pub fn down(&self) -> bool {
        self.maindirection_down.active || self.secondarydirection_down.active
    }

    pub fn left(&self) -> bool {
        self.maindirection_left.active || self.secondarydirection_left.active
    }

    pub fn right(&self) -> bool {
        self.maindirection_right.active || self.secondarydirection_right.active
    }
}

impl KeyboardInput for InputState {
    fn is_key_pressed(&self, key: Key) -> bool {
        self.state(key).is_some_and(|s| s.active)
    }

    fn is_key_just_pressed(&self, key: Key) -> bool {
        self.state(key).is_some_and(|s| s.just_pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.up());
        assert!(!input.down());
        assert!(!input.left());
        assert!(!input.right());
        assert!(!input.action_fire.active);
        assert!(!input.mode_debug.active);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.maindirection_up.key_binding, Key::W);
        assert_eq!(input.maindirection_left.key_binding, Key::A);
        assert_eq!(input.maindirection_down.key_binding, Key::S);
        assert_eq!(input.maindirection_right.key_binding, Key::D);
        assert_eq!(input.secondarydirection_up.key_binding, Key::ArrowUp);
        assert_eq!(input.secondarydirection_down.key_binding, Key::ArrowDown);
        assert_eq!(input.secondarydirection_left.key_binding, Key::ArrowLeft);
        assert_eq!(input.secondarydirection_right.key_binding, Key::ArrowRight);
        assert_eq!(input.action_fire.key_binding, Key::Space);
        assert_eq!(input.mode_debug.key_binding, Key::F11);
    }

    #[test]
    fn test_press_sets_just_pressed_once() {
        let mut input = InputState::default();
        input.press(Key::Space);
        assert!(input.is_key_pressed(Key::Space));
        assert!(input.is_key_just_pressed(Key::Space));
        input.end_frame();
        input.press(Key::Space);
        assert!(input.is_key_pressed(Key::Space));
        assert!(!input.is_key_just_pressed(Key::Space));
    }

    #[test]
    fn test_release_sets_just_released() {
        let mut input = InputState::default();
        input.press(Key::A);
        input.end_frame();
        input.release(Key::A);
        assert!(!input.is_key_pressed(Key::A));
        assert!(input.maindirection_left.just_released);
    }

    #[test]
    fn test_arrows_and_wasd_share_directions() {
        let mut input = InputState::default();
        input.press(Key::ArrowLeft);
        assert!(input.left());
        input.release(Key::ArrowLeft);
        input.press(Key::A);
        assert!(input.left());
    }
}
