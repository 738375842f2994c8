//! Input adapter
//!
//! Translates key names (as reported by keyboard events, e.g. `"ArrowUp"`)
//! into commands. Movement and turning feed the next `TickInput`; view
//! toggles go straight to the viewer settings.

use crate::settings::Settings;
use crate::sim::{Movement, TickInput, Turn};

/// A discrete player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveForward,
    MoveBackward,
    RotateLeft,
    RotateRight,
    ToggleView,
    ToggleNight,
}

impl Command {
    /// Command bound to a key name, if any
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Command::MoveForward),
            "ArrowDown" | "s" | "S" => Some(Command::MoveBackward),
            "ArrowLeft" | "a" | "A" => Some(Command::RotateLeft),
            "ArrowRight" | "d" | "D" => Some(Command::RotateRight),
            "t" | "T" => Some(Command::ToggleView),
            "n" | "N" => Some(Command::ToggleNight),
            _ => None,
        }
    }
}

/// Commands gathered between two frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pending: TickInput,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a command. Walks and turns queue up until the next frame.
    pub fn apply(&mut self, command: Command, settings: &mut Settings) {
        match command {
            Command::MoveForward => self.pending.movements.push(Movement::Forward),
            Command::MoveBackward => self.pending.movements.push(Movement::Backward),
            Command::RotateLeft => self.pending.turns.push(Turn::Left),
            Command::RotateRight => self.pending.turns.push(Turn::Right),
            Command::ToggleView => settings.toggle_view(),
            Command::ToggleNight => settings.toggle_night(),
        }
    }

    /// Handle a key press; unbound keys are ignored
    pub fn key_pressed(&mut self, key: &str, settings: &mut Settings) {
        if let Some(command) = Command::from_key(key) {
            self.apply(command, settings);
        }
    }

    /// Input for the next frame, clearing one-shot commands
    pub fn take_tick_input(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ViewMode;

    #[test]
    fn test_key_bindings() {
        assert_eq!(Command::from_key("ArrowUp"), Some(Command::MoveForward));
        assert_eq!(Command::from_key("ArrowLeft"), Some(Command::RotateLeft));
        assert_eq!(Command::from_key("N"), Some(Command::ToggleNight));
        assert_eq!(Command::from_key("q"), None);
    }

    #[test]
    fn test_commands_collect_into_tick_input() {
        let mut input = InputState::new();
        let mut settings = Settings::default();
        input.key_pressed("ArrowUp", &mut settings);
        input.key_pressed("ArrowRight", &mut settings);
        input.key_pressed("t", &mut settings);
        input.key_pressed("Escape", &mut settings);

        let tick_input = input.take_tick_input();
        assert_eq!(tick_input.movements, vec![Movement::Forward]);
        assert_eq!(tick_input.turns, vec![Turn::Right]);
        assert_eq!(settings.view_mode, ViewMode::ThirdPerson);

        // One-shot: cleared after being taken
        assert_eq!(input.take_tick_input(), TickInput::default());
    }

    #[test]
    fn test_repeated_presses_are_kept() {
        let mut input = InputState::new();
        let mut settings = Settings::default();
        for key in ["ArrowUp", "ArrowLeft", "ArrowUp", "s", "ArrowLeft"] {
            input.key_pressed(key, &mut settings);
        }

        let tick_input = input.take_tick_input();
        assert_eq!(
            tick_input.movements,
            vec![Movement::Forward, Movement::Forward, Movement::Backward]
        );
        assert_eq!(tick_input.turns, vec![Turn::Left, Turn::Left]);
    }

    #[test]
    fn test_two_steps_in_one_frame() {
        use crate::sim::{HeightField, World, tick};
        use glam::Vec2;

        let mut world = World::new(HeightField::new(5, 5));
        world.place_avatar(Vec2::new(1.0, 1.0), 0.0);
        let mut input = InputState::new();
        let mut settings = Settings::default();
        for key in ["ArrowUp", "ArrowUp", "ArrowLeft", "ArrowLeft"] {
            input.key_pressed(key, &mut settings);
        }

        tick(&mut world, &input.take_tick_input());

        let avatar = world.avatar();
        assert!((avatar.pos.x - 1.2).abs() < 1e-5);
        assert!((avatar.rotation - 340.0).abs() < 1e-4);
    }
}
