use bevy::prelude::*;
use std::path::PathBuf;
use tracing::info;

pub mod app_state;
pub mod events;
pub mod plugins;
pub mod settings;
pub mod settings_types;
pub mod voyage;

pub fn storage_dir() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("Starflight");
    let _ = std::fs::create_dir_all(&path);
    path
}

/// Where settings and the voyage are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    Disk(PathBuf),
    /// Nothing is read or written; used by tests and throwaway sessions.
    Memory,
}

impl Persistence {
    pub fn file(&self, name: &str) -> Option<PathBuf> {
        match self {
            Persistence::Disk(root) => Some(root.join(name)),
            Persistence::Memory => None,
        }
    }
}

pub struct CoreEventsPlugin;

impl Plugin for CoreEventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<events::PresentationMessage>();
        plugins::configure_game_sets(app);
    }
}

/// Everything except device input, which [`plugins::input::InputPlugin`]
/// adds on top.
pub struct CorePlugin {
    pub persistence: Persistence,
}

impl CorePlugin {
    pub fn in_memory() -> Self {
        Self {
            persistence: Persistence::Memory,
        }
    }
}

impl Default for CorePlugin {
    fn default() -> Self {
        Self {
            persistence: Persistence::Disk(storage_dir()),
        }
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            bevy::state::app::StatesPlugin,
            CoreEventsPlugin,
            settings::SettingsPlugin::new(self.persistence.file("settings.toml")),
            voyage::VoyagePlugin::new(self.persistence.file("voyage.json")),
            plugins::presentation::PresentationPlugin,
            plugins::flight::FlightPlugin,
            plugins::starport::StarportPlugin,
        ));

        let resumed = app_state::AppState::from(app.world().resource::<voyage::Voyage>().location);
        info!("Resuming in {:?}", resumed);
        app.insert_state(resumed);
    }
}
