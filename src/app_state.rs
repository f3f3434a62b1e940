use bevy::prelude::*;
use game_types::Location;
use game_ui::Scene;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Spaceflight,
    Starport,
}

impl From<Scene> for AppState {
    fn from(scene: Scene) -> Self {
        match scene {
            Scene::Spaceflight => AppState::Spaceflight,
            Scene::Starport => AppState::Starport,
        }
    }
}

/// The scene a voyage resumes in. Only the starport is walked around; every
/// other location is seen from the bridge.
impl From<Location> for AppState {
    fn from(location: Location) -> Self {
        match location {
            Location::Starport => AppState::Starport,
            Location::DockingBay
            | Location::JustLaunched
            | Location::InOrbit
            | Location::StarSystem
            | Location::Hyperspace => AppState::Spaceflight,
        }
    }
}
