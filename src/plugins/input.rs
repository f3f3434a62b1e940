use crate::settings_types::Settings;
use bevy::prelude::*;
use tracing::debug;
use game_input::{
    GameAction, GamepadConfig, GilrsResource, InputSample, InputSource, UnifiedInputBindings,
    gamepad_connection_system, gilrs_event_polling_system,
};

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputPumpSet;

/// This frame's normalized input. Written by [`InputPlugin`]; headless hosts
/// and tests set it directly.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Deref)]
pub struct InputFrame(pub InputSample);

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputFrame>()
            .init_resource::<GamepadConfig>()
            .init_resource::<GilrsResource>()
            .init_resource::<UnifiedInputBindings>()
            .add_message::<bevy::input::gamepad::RawGamepadEvent>()
            .add_systems(Startup, initialize_input_bindings)
            .add_systems(PreUpdate, gilrs_event_polling_system)
            .add_systems(
                Update,
                (gamepad_connection_system, sample_input_system)
                    .chain()
                    .in_set(InputPumpSet),
            );
    }
}

fn initialize_input_bindings(
    settings: Res<Settings>,
    mut unified: ResMut<UnifiedInputBindings>,
    mut gamepad: ResMut<GamepadConfig>,
) {
    *unified = UnifiedInputBindings::from_settings(&settings.key_bindings);
    gamepad.stick_threshold = settings.input.stick_threshold;
    for &action in GameAction::all() {
        let sources: Vec<_> = unified.get(action).iter().map(InputSource::label).collect();
        debug!("{:?}: {}", action, sources.join(", "));
    }
}

pub fn sample_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<UnifiedInputBindings>,
    config: Res<GamepadConfig>,
    gamepads: Query<&Gamepad>,
    mut frame: ResMut<InputFrame>,
) {
    let gamepad = config.primary_gamepad.and_then(|e| gamepads.get(e).ok());
    let sample = bindings.sample(&keyboard, gamepad, config.stick_threshold);
    frame.set_if_neq(InputFrame(sample));
}
