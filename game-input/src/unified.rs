use super::{GameAction, GamepadInputType, KeyChord, gamepad::left_stick};
use crate::InputSample;
use bevy::input::ButtonInput;
use bevy::input::keyboard::KeyCode;
use bevy::prelude::*;
use game_types::KeyBindings;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Keyboard(KeyChord),
    Gamepad(GamepadInputType),
}

impl InputSource {
    pub fn label(&self) -> String {
        match self {
            InputSource::Keyboard(chord) => chord.to_dom_code(),
            InputSource::Gamepad(input) => format!("Gamepad:{}", input.name()),
        }
    }

    pub fn from_string(s: &str) -> Option<Self> {
        GamepadInputType::from_string(s)
            .map(InputSource::Gamepad)
            .or_else(|| KeyChord::from_dom_code(s).map(InputSource::Keyboard))
    }

    fn is_pressed(&self, keyboard: &ButtonInput<KeyCode>, gamepad: Option<&Gamepad>, threshold: f32) -> bool {
        match self {
            InputSource::Keyboard(chord) => chord.is_pressed(keyboard),
            InputSource::Gamepad(input) => gamepad.is_some_and(|g| input.is_pressed(g, threshold)),
        }
    }

    fn is_just_pressed(&self, keyboard: &ButtonInput<KeyCode>, gamepad: Option<&Gamepad>) -> bool {
        match self {
            InputSource::Keyboard(chord) => chord.is_just_pressed(keyboard),
            InputSource::Gamepad(input) => gamepad.is_some_and(|g| input.is_just_pressed(g)),
        }
    }
}

/// Keyboard and gamepad sources per action, folded into one [`InputSample`]
/// per frame.
#[derive(Resource, Debug, Clone)]
pub struct UnifiedInputBindings {
    bindings: HashMap<GameAction, Vec<InputSource>>,
}

impl UnifiedInputBindings {
    pub fn from_settings(settings: &KeyBindings) -> Self {
        let mut bindings = HashMap::new();
        for &action in GameAction::all() {
            let sources: Vec<InputSource> = action
                .binding(settings)
                .codes()
                .filter_map(|code| {
                    let source = InputSource::from_string(code);
                    if source.is_none() {
                        tracing::warn!("Ignoring unknown binding {:?} for {:?}", code, action);
                    }
                    source
                })
                .collect();
            bindings.insert(action, sources);
        }
        Self { bindings }
    }

    pub fn get(&self, action: GameAction) -> &[InputSource] {
        self.bindings.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_pressed(
        &self,
        action: GameAction,
        keyboard: &ButtonInput<KeyCode>,
        gamepad: Option<&Gamepad>,
        threshold: f32,
    ) -> bool {
        self.get(action)
            .iter()
            .any(|source| source.is_pressed(keyboard, gamepad, threshold))
    }

    pub fn is_just_pressed(
        &self,
        action: GameAction,
        keyboard: &ButtonInput<KeyCode>,
        gamepad: Option<&Gamepad>,
    ) -> bool {
        self.get(action)
            .iter()
            .any(|source| source.is_just_pressed(keyboard, gamepad))
    }

    /// Digital directions read as full deflection and win over a weaker
    /// analog reading on the same axis.
    pub fn sample(
        &self,
        keyboard: &ButtonInput<KeyCode>,
        gamepad: Option<&Gamepad>,
        threshold: f32,
    ) -> InputSample {
        let pressed = |action| self.is_pressed(action, keyboard, gamepad, threshold);
        let digital = |neg, pos| match (pressed(neg), pressed(pos)) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };

        let (stick_x, stick_y) = gamepad.map(left_stick).unwrap_or((0.0, 0.0));
        let dx: f32 = digital(GameAction::MoveLeft, GameAction::MoveRight);
        let dy: f32 = digital(GameAction::MoveDown, GameAction::MoveUp);
        let x = if dx.abs() > stick_x.abs() { dx } else { stick_x };
        let y = if dy.abs() > stick_y.abs() { dy } else { stick_y };

        let mut sample = InputSample::new(x, y);
        sample.confirm = self.is_just_pressed(GameAction::Confirm, keyboard, gamepad);
        sample.cancel = self.is_just_pressed(GameAction::Cancel, keyboard, gamepad);
        sample
    }
}

impl Default for UnifiedInputBindings {
    fn default() -> Self {
        Self::from_settings(&KeyBindings::default())
    }
}
