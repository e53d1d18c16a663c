use ggez::input::keyboard::{KeyCode, KeyMods};

use crate::basic::Dir;

#[derive(Copy, Clone, Debug)]
pub struct Controls {
    pub up: KeyCode,
    pub right: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
}

impl Controls {
    pub const ARROWS: Self = Self {
        up: KeyCode::Up,
        right: KeyCode::Right,
        down: KeyCode::Down,
        left: KeyCode::Left,
    };

    pub const WASD: Self = Self {
        up: KeyCode::W,
        right: KeyCode::D,
        down: KeyCode::S,
        left: KeyCode::A,
    };

    pub fn dir(&self, key: KeyCode) -> Option<Dir> {
        match key {
            k if k == self.up => Some(Dir::Up),
            k if k == self.right => Some(Dir::Right),
            k if k == self.down => Some(Dir::Down),
            k if k == self.left => Some(Dir::Left),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KeyAction {
    Turn(Dir),
    Quit,
    ToggleFps,
    None,
}

/// Quitting takes precedence over the movement bindings, Ctrl+C would
/// otherwise never reach it
pub fn key_action(controls: &[Controls], key: KeyCode, mods: KeyMods) -> KeyAction {
    use KeyCode::*;

    let ctrl = mods.contains(KeyMods::CTRL);
    match key {
        Escape => KeyAction::Quit,
        Q | C if ctrl => KeyAction::Quit,
        F if !ctrl => KeyAction::ToggleFps,
        _ => controls
            .iter()
            .find_map(|c| c.dir(key))
            .map_or(KeyAction::None, KeyAction::Turn),
    }
}

/// Accepts at most one direction change per input pass.
///
/// The first change that is neither the current direction nor its
/// opposite wins, every later offer is dropped. Offers of the current
/// direction or of its opposite are ignored without closing the pass,
/// so a reversal key followed by a turn key in the same pass still turns.
#[derive(Copy, Clone, Debug)]
pub struct TurnLatch {
    current: Dir,
    accepted: Option<Dir>,
}

impl TurnLatch {
    pub fn new(current: Dir) -> Self {
        Self { current, accepted: None }
    }

    pub fn offer(&mut self, dir: Dir) -> bool {
        if self.accepted.is_some() || dir == self.current || dir.is_opposite(self.current) {
            return false;
        }
        self.accepted = Some(dir);
        true
    }

    pub fn accepted(self) -> Option<Dir> {
        self.accepted
    }
}
