use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use starflight::plugins::input::InputPlugin;

fn main() {
    // RUST_LOG wins; otherwise show the console's own chatter.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
    tracing::info!("Starflight console starting");

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(1.0 / 60.0))),
        )
        .add_plugins(bevy::input::InputPlugin)
        .add_plugins((starflight::CorePlugin::default(), InputPlugin))
        .run();
}
