use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use game_input::InputSample;
use game_ui::{PresentationEvent, Tone};
use starflight::app_state::AppState;
use starflight::events::PresentationMessage;
use starflight::plugins::GameSet;
use starflight::plugins::flight::FlightConsole;
use starflight::plugins::input::InputFrame;
use starflight::plugins::starport::StarportDesk;
use starflight::voyage::Voyage;
use std::time::Duration;

pub const FRAME: Duration = Duration::from_millis(100);

#[derive(Resource, Default)]
struct Recorded(Vec<PresentationEvent>);

fn record_presentation(mut messages: MessageReader<PresentationMessage>, mut recorded: ResMut<Recorded>) {
    recorded.0.extend(messages.read().map(|m| m.0.clone()));
}

/// A headless console with scripted input and fixed 100 ms frames.
pub struct TestConsole {
    app: App,
}

impl TestConsole {
    pub fn new() -> Self {
        Self::with_voyage(Voyage::default())
    }

    /// Starts from a saved voyage, as if it had been read from disk.
    pub fn with_voyage(voyage: Voyage) -> Self {
        let mut app = App::new();
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        app.insert_resource(voyage);
        app.add_plugins(MinimalPlugins)
            .add_plugins(starflight::CorePlugin::in_memory());
        app.init_resource::<Recorded>()
            .add_systems(Update, record_presentation.after(GameSet::Presentation));
        app.update();
        Self { app }
    }

    /// Runs one frame with `sample`, then one idle frame so edges and
    /// stick pushes do not repeat.
    pub fn press(&mut self, sample: InputSample) {
        self.frame(sample);
        self.frame(InputSample::centered());
    }

    pub fn frame(&mut self, sample: InputSample) {
        self.app.world_mut().insert_resource(InputFrame(sample));
        self.app.update();
    }

    pub fn confirm(&mut self) {
        self.press(InputSample::confirmed());
    }

    pub fn cancel(&mut self) {
        self.press(InputSample::canceled());
    }

    pub fn down(&mut self) {
        self.press(InputSample::new(0.0, -1.0));
    }

    pub fn right(&mut self) {
        self.press(InputSample::new(1.0, 0.0));
    }

    pub fn state(&self) -> AppState {
        *self.app.world().resource::<State<AppState>>().get()
    }

    pub fn voyage(&self) -> &Voyage {
        self.app.world().resource::<Voyage>()
    }

    pub fn console(&self) -> &FlightConsole {
        self.app.world().resource::<FlightConsole>()
    }

    pub fn desk(&self) -> &StarportDesk {
        self.app.world().resource::<StarportDesk>()
    }

    /// Every event forwarded since the last call.
    pub fn take_events(&mut self) -> Vec<PresentationEvent> {
        std::mem::take(&mut self.app.world_mut().resource_mut::<Recorded>().0)
    }

    pub fn take_tones(&mut self) -> Vec<Tone> {
        self.take_events()
            .into_iter()
            .filter_map(|e| match e {
                PresentationEvent::Tone(tone) => Some(tone),
                _ => None,
            })
            .collect()
    }
}
