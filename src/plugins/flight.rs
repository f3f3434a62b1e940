//! The bridge console while the ship is in space or docked.

use super::GameSet;
use super::input::InputFrame;
use super::presentation::Presentation;
use crate::app_state::AppState;
use crate::settings_types::Settings;
use crate::voyage::Voyage;
use bevy::prelude::*;
use game_input::{AxisNavigator, InputSample, NavigatorConfig, wrapped_index};
use game_ui::{CommandContext, CommandDispatcher, FrameClaim, PanelBook};
use tracing::debug;

pub struct FlightPlugin;

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputFrame>()
            .init_resource::<FlightConsole>()
            .add_systems(OnEnter(AppState::Spaceflight), install_bridge)
            .add_systems(
                Update,
                drive_flight_console
                    .run_if(in_state(AppState::Spaceflight))
                    .in_set(GameSet::Interaction),
            );
    }
}

#[derive(Resource, Default, Debug)]
pub struct FlightConsole {
    pub dispatcher: CommandDispatcher,
    pub cursor: PanelCursor,
}

/// The highlighted button of the active panel. Follows panel swaps by
/// snapping back to the first button.
#[derive(Debug, Default)]
pub struct PanelCursor {
    index: usize,
    panel: Option<(&'static str, usize)>,
    navigator: AxisNavigator,
}

impl PanelCursor {
    pub fn new(config: NavigatorConfig) -> Self {
        Self {
            navigator: AxisNavigator::new(config),
            ..Default::default()
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    fn follow(&mut self, dispatcher: &CommandDispatcher) {
        let current = dispatcher
            .active()
            .map(|set| (set.name(), dispatcher.depth()));
        if current != self.panel {
            self.panel = current;
            self.index = 0;
            self.navigator.reset();
        }
    }

    fn step(&mut self, input: &InputSample, dispatcher: &CommandDispatcher, dt: std::time::Duration) {
        let len = dispatcher.active().map_or(0, |set| set.len());
        if let Some(step) = self.navigator.tick(input, dt) {
            if !step.is_horizontal() && len > 0 {
                self.index = wrapped_index(self.index, len, step.delta());
                debug!("Cursor -> {}", self.index);
            }
        }
    }
}

fn install_bridge(
    mut console: ResMut<FlightConsole>,
    settings: Res<Settings>,
    mut voyage: ResMut<Voyage>,
    mut presentation: ResMut<Presentation>,
) {
    let book = PanelBook::new(settings.maneuver.clone());
    let console = &mut *console;
    console.dispatcher = CommandDispatcher::new();
    console.cursor = PanelCursor::new(NavigatorConfig::from(&settings.input));

    let dt = std::time::Duration::ZERO;
    Voyage::edit(&mut voyage, |session| {
        let mut cx = CommandContext::new(session, &mut **presentation, &dt);
        console.dispatcher.update_buttons(book.bridge(), &mut cx);
    });
    console.cursor.follow(&console.dispatcher);
}

/// Cancel backs out one level. Otherwise the exclusive command sees the
/// frame first; when it passes, vertical steps move the cursor and confirm
/// presses the highlighted button.
fn drive_flight_console(
    mut console: ResMut<FlightConsole>,
    input: Res<InputFrame>,
    time: Res<Time>,
    mut voyage: ResMut<Voyage>,
    mut presentation: ResMut<Presentation>,
) {
    let input = **input;
    let dt = time.delta();
    let FlightConsole { dispatcher, cursor } = &mut *console;

    Voyage::edit(&mut voyage, |session| {
        let mut cx = CommandContext::new(session, &mut **presentation, &dt);
        if input.cancel {
            dispatcher.request_cancel(&mut cx);
        } else if dispatcher.tick(&input, &mut cx) == FrameClaim::PassThrough {
            cursor.follow(dispatcher);
            cursor.step(&input, dispatcher, dt);
            if input.confirm {
                dispatcher.select_command(cursor.index(), &mut cx);
            }
        }
    });
    cursor.follow(dispatcher);
}
