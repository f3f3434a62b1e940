use bevy::prelude::Resource;

pub use game_types::{InputSettings, KeyBinding, KeyBindings, ManeuverSettings};

#[derive(Resource, serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub input: InputSettings,
    pub maneuver: ManeuverSettings,
    pub key_bindings: KeyBindings,
}
