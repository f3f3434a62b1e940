//! Host plugins that drive the console from the Bevy schedule.

pub mod flight;
pub mod input;
pub mod presentation;
pub mod starport;

use bevy::prelude::*;

/// Frame ordering for the console.
///
/// 1. **Interaction** - feed the frame's input to the active console
/// 2. **Presentation** - hand the requested side effects to the frontend
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    Interaction,
    Presentation,
}

pub fn configure_game_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameSet::Interaction.after(input::InputPumpSet),
            GameSet::Presentation.after(GameSet::Interaction),
        ),
    );
}
