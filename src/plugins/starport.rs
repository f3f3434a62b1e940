//! The starport personnel office: crew assignment until the player leaves.

use super::GameSet;
use super::input::InputFrame;
use super::presentation::Presentation;
use crate::app_state::AppState;
use crate::settings_types::Settings;
use crate::voyage::Voyage;
use bevy::prelude::*;
use game_input::NavigatorConfig;
use game_types::Location;
use game_ui::{CommandContext, CrewAssignmentEditor, Scene};
use tracing::info;

pub struct StarportPlugin;

impl Plugin for StarportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputFrame>()
            .init_resource::<StarportDesk>()
            .add_systems(OnEnter(AppState::Starport), open_crew_assignment)
            .add_systems(
                Update,
                drive_crew_assignment
                    .run_if(in_state(AppState::Starport))
                    .in_set(GameSet::Interaction),
            );
    }
}

#[derive(Resource, Default, Debug)]
pub struct StarportDesk {
    pub editor: CrewAssignmentEditor,
}

fn open_crew_assignment(
    mut desk: ResMut<StarportDesk>,
    settings: Res<Settings>,
    mut voyage: ResMut<Voyage>,
    mut presentation: ResMut<Presentation>,
) {
    let desk = &mut *desk;
    desk.editor = CrewAssignmentEditor::new(NavigatorConfig::from(&settings.input));

    let dt = std::time::Duration::ZERO;
    Voyage::edit(&mut voyage, |session| {
        let mut cx = CommandContext::new(session, &mut **presentation, &dt);
        desk.editor.show(&mut cx);
    });
}

/// Once the editor closes the crew walks back to the ship.
fn drive_crew_assignment(
    mut desk: ResMut<StarportDesk>,
    input: Res<InputFrame>,
    time: Res<Time>,
    mut voyage: ResMut<Voyage>,
    mut presentation: ResMut<Presentation>,
) {
    if !desk.editor.is_open() {
        return;
    }
    let input = **input;
    let dt = time.delta();
    let desk = &mut *desk;

    Voyage::edit(&mut voyage, |session| {
        let mut cx = CommandContext::new(session, &mut **presentation, &dt);
        desk.editor.tick(&mut cx, &input);

        if !desk.editor.is_open() {
            info!("Returning to the ship");
            cx.session.set_location(Location::DockingBay);
            cx.presentation.switch_scene(Scene::Spaceflight);
        }
    });
}
