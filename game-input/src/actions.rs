use game_types::{KeyBinding, KeyBindings};

/// Logical inputs the interaction layer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Confirm,
    Cancel,
}

impl GameAction {
    pub fn all() -> &'static [GameAction] {
        &[
            GameAction::MoveUp,
            GameAction::MoveDown,
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::Confirm,
            GameAction::Cancel,
        ]
    }

    /// The configured codes for this action.
    pub fn binding(self, bindings: &KeyBindings) -> &KeyBinding {
        match self {
            GameAction::MoveUp => &bindings.move_up,
            GameAction::MoveDown => &bindings.move_down,
            GameAction::MoveLeft => &bindings.move_left,
            GameAction::MoveRight => &bindings.move_right,
            GameAction::Confirm => &bindings.confirm,
            GameAction::Cancel => &bindings.cancel,
        }
    }
}
