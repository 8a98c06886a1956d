//! Keyboard state tracking.
//!
//! The left paddle is driven by W/S and the right paddle by the arrow keys.
//! Winit delivers edge events, so we hold the pressed state of the four
//! bound keys here and derive per-paddle controls from it each frame.

use game_core::{Control, Controls};
use winit::keyboard::KeyCode;

#[derive(Debug, Default)]
pub struct InputState {
    w: bool,
    s: bool,
    up: bool,
    down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release. Unbound keys are ignored.
    pub fn handle_key(&mut self, code: KeyCode, pressed: bool) {
        match code {
            KeyCode::KeyW => self.w = pressed,
            KeyCode::KeyS => self.s = pressed,
            KeyCode::ArrowUp => self.up = pressed,
            KeyCode::ArrowDown => self.down = pressed,
            _ => {}
        }
    }

    /// Current control for each paddle. Up takes priority when both
    /// directions are held.
    pub fn controls(&self) -> Controls {
        Controls {
            left: control(self.w, self.s),
            right: control(self.up, self.down),
        }
    }
}

fn control(up: bool, down: bool) -> Control {
    if up {
        Control::Up
    } else if down {
        Control::Down
    } else {
        Control::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_by_default() {
        let input = InputState::new();
        let controls = input.controls();
        assert_eq!(controls.left, Control::Idle);
        assert_eq!(controls.right, Control::Idle);
    }

    #[test]
    fn test_w_s_drive_the_left_paddle() {
        let mut input = InputState::new();

        input.handle_key(KeyCode::KeyW, true);
        assert_eq!(input.controls().left, Control::Up);
        assert_eq!(input.controls().right, Control::Idle);

        input.handle_key(KeyCode::KeyW, false);
        input.handle_key(KeyCode::KeyS, true);
        assert_eq!(input.controls().left, Control::Down);
    }

    #[test]
    fn test_arrows_drive_the_right_paddle() {
        let mut input = InputState::new();

        input.handle_key(KeyCode::ArrowUp, true);
        assert_eq!(input.controls().right, Control::Up);
        assert_eq!(input.controls().left, Control::Idle);

        input.handle_key(KeyCode::ArrowUp, false);
        input.handle_key(KeyCode::ArrowDown, true);
        assert_eq!(input.controls().right, Control::Down);
    }

    #[test]
    fn test_up_wins_when_both_directions_held() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::KeyS, true);
        input.handle_key(KeyCode::KeyW, true);
        assert_eq!(input.controls().left, Control::Up);

        input.handle_key(KeyCode::KeyW, false);
        assert_eq!(input.controls().left, Control::Down);
    }

    #[test]
    fn test_release_returns_to_idle() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::ArrowDown, true);
        input.handle_key(KeyCode::ArrowDown, false);
        assert_eq!(input.controls().right, Control::Idle);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::KeyQ, true);
        input.handle_key(KeyCode::Space, true);
        let controls = input.controls();
        assert_eq!(controls.left, Control::Idle);
        assert_eq!(controls.right, Control::Idle);
    }
}
