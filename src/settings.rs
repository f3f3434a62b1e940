pub use crate::settings_types::*;
use anyhow::Context;
use bevy::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

impl Settings {
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("malformed settings")
    }

    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("serializing settings")?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))
    }

    /// Reads `path`, creating it with defaults when missing. A file that
    /// cannot be read or parsed is reported and replaced by defaults in
    /// memory only.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            info!("Creating default settings at {:?}", path);
            let settings = Settings::default();
            settings.save(path);
            return settings;
        }
        match Self::read(path) {
            Ok(settings) => {
                info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                error!("Failed to load settings: {:#}", e);
                Settings::default()
            }
        }
    }

    pub fn save(&self, path: &Path) {
        match self.write(path) {
            Ok(()) => info!("Saved settings to {:?}", path),
            Err(e) => error!("Failed to save settings: {:#}", e),
        }
    }
}

pub struct SettingsPlugin {
    path: Option<PathBuf>,
}

impl SettingsPlugin {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

#[derive(Resource)]
struct SettingsFile {
    path: PathBuf,
    save_timer: Timer,
}

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        match &self.path {
            Some(path) => {
                app.insert_resource(Settings::load(path))
                    .insert_resource(SettingsFile {
                        path: path.clone(),
                        save_timer: Timer::from_seconds(1.0, TimerMode::Once),
                    })
                    .add_systems(Update, save_settings_on_change);
            }
            None => {
                app.init_resource::<Settings>();
            }
        }
    }
}

fn save_settings_on_change(
    settings: Res<Settings>,
    mut file: ResMut<SettingsFile>,
    time: Res<Time>,
) {
    if settings.is_changed() && !settings.is_added() {
        file.save_timer.reset();
    }

    file.save_timer.tick(time.delta());

    if file.save_timer.just_finished() {
        settings.save(&file.path);
    }
}
