use super::GameSet;
use crate::app_state::AppState;
use crate::events::PresentationMessage;
use bevy::prelude::*;
use game_ui::{PresentationEvent, PresentationQueue};
use tracing::{debug, info};

/// Side effects requested by the console during this frame.
#[derive(Resource, Default, Debug, Deref, DerefMut)]
pub struct Presentation(pub PresentationQueue);

pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Presentation>().add_systems(
            Update,
            forward_presentation_events.in_set(GameSet::Presentation),
        );
    }
}

/// Publishes queued requests as messages for whatever frontend is attached.
/// Scene switches also drive the app state.
pub fn forward_presentation_events(
    mut presentation: ResMut<Presentation>,
    mut messages: MessageWriter<PresentationMessage>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if presentation.is_empty() {
        return;
    }
    for event in presentation.drain() {
        match &event {
            PresentationEvent::SwitchScene(scene) => {
                info!("Scene -> {:?}", scene);
                next_state.set(AppState::from(*scene));
            }
            PresentationEvent::Message(text) => info!("{}", text),
            PresentationEvent::SkyboxRotation(_) => {}
            other => debug!("{:?}", other),
        }
        messages.write(PresentationMessage(event));
    }
}
