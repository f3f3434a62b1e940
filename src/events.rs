use bevy::prelude::Message;
use game_ui::PresentationEvent;

/// One display or audio request from the console, forwarded to whatever
/// renders the game.
#[derive(Debug, Clone, Message)]
pub struct PresentationMessage(pub PresentationEvent);
