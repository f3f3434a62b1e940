//! The persisted voyage: location, roster, crew and ship pose.

use anyhow::Context;
use bevy::prelude::*;
use game_ui::VoyageSession;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Resource, Deref, DerefMut, Debug, Clone, PartialEq)]
pub struct Voyage(pub VoyageSession);

impl Default for Voyage {
    fn default() -> Self {
        Self(VoyageSession::with_starting_crew())
    }
}

impl Voyage {
    /// Runs `f` against the session, marking the resource changed only when
    /// the session differs afterwards.
    pub fn edit<R>(
        this: &mut impl DetectChangesMut<Inner = Voyage>,
        f: impl FnOnce(&mut VoyageSession) -> R,
    ) -> R {
        let inner = this.bypass_change_detection();
        let before = inner.0.clone();
        let out = f(&mut inner.0);
        let changed = inner.0 != before;
        if changed {
            this.set_changed();
        }
        out
    }

    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let session = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Self(session))
    }

    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(&self.0).context("serializing voyage")?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))
    }

    /// A missing file starts a new voyage with the default crew; an
    /// unreadable one is reported and also starts fresh, leaving the file
    /// untouched until the next save.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            info!("Starting a new voyage at {:?}", path);
            let voyage = Voyage::default();
            voyage.save(path);
            return voyage;
        }
        match Self::read(path) {
            Ok(voyage) => {
                info!("Resumed voyage from {:?}", path);
                voyage
            }
            Err(e) => {
                error!("Failed to load voyage: {:#}", e);
                Voyage::default()
            }
        }
    }

    pub fn save(&self, path: &Path) {
        match self.write(path) {
            Ok(()) => info!("Saved voyage to {:?}", path),
            Err(e) => error!("Failed to save voyage: {:#}", e),
        }
    }
}

pub struct VoyagePlugin {
    path: Option<PathBuf>,
}

impl VoyagePlugin {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

#[derive(Resource)]
struct VoyageFile {
    path: PathBuf,
    save_timer: Timer,
}

impl Plugin for VoyagePlugin {
    fn build(&self, app: &mut App) {
        match &self.path {
            Some(path) => {
                app.insert_resource(Voyage::load(path))
                    .insert_resource(VoyageFile {
                        path: path.clone(),
                        save_timer: Timer::from_seconds(1.0, TimerMode::Once),
                    })
                    .add_systems(Last, save_voyage_on_change);
            }
            None => {
                app.init_resource::<Voyage>();
            }
        }
    }
}

fn save_voyage_on_change(voyage: Res<Voyage>, mut file: ResMut<VoyageFile>, time: Res<Time>) {
    if voyage.is_changed() && !voyage.is_added() {
        file.save_timer.reset();
    }

    file.save_timer.tick(time.delta());

    if file.save_timer.just_finished() {
        voyage.save(&file.path);
    }
}
