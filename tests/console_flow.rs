mod common;

use common::TestConsole;
use game_input::InputSample;
use game_types::{Location, Position};
use game_ui::{PresentationEvent, Scene, SessionState, Tone};
use starflight::app_state::AppState;
use starflight::voyage::Voyage;

fn active_panel(console: &TestConsole) -> &'static str {
    console
        .console()
        .dispatcher
        .active()
        .map(|set| set.name())
        .unwrap_or("none")
}

/// The first published panel, disabled buttons marked.
fn first_panel_labels(events: Vec<PresentationEvent>) -> String {
    let labels = events
        .into_iter()
        .find_map(|e| match e {
            PresentationEvent::PanelLabels(labels) => Some(labels),
            _ => None,
        })
        .expect("no panel labels published");
    labels
        .iter()
        .map(|l| format!("{}{}", l.label, if l.enabled { "" } else { " (disabled)" }))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[test]
fn bridge_is_installed_on_start() {
    let mut console = TestConsole::new();

    assert_eq!(console.state(), AppState::Spaceflight);
    assert_eq!(active_panel(&console), "Bridge");

    let rendered = first_panel_labels(console.take_events());
    insta::assert_snapshot!(rendered, @"Command | Navigation | Science | Medical");
}

#[test]
fn disembark_assign_captain_and_return_to_ship() {
    let mut console = TestConsole::new();

    console.confirm();
    assert_eq!(active_panel(&console), "Command");
    console.down();
    assert_eq!(console.console().cursor.index(), 1);
    console.take_events();

    console.confirm();
    assert_eq!(console.voyage().location(), Location::Starport);
    let events = console.take_events();
    assert!(events.contains(&PresentationEvent::Tone(Tone::Update)));
    assert!(events.contains(&PresentationEvent::SwitchScene(Scene::Starport)));
    assert!(!events.contains(&PresentationEvent::Tone(Tone::Error)));
    assert_eq!(console.state(), AppState::Starport);

    // Assign opens on the captain, who gets the first free file.
    console.confirm();
    assert_eq!(console.voyage().crew().file_id(Position::Captain), Some(0));

    console.right();
    assert_eq!(console.voyage().crew().file_id(Position::Captain), Some(1));

    console.cancel();
    console.right();
    console.take_events();
    console.confirm();

    let tones = console.take_tones();
    assert_eq!(tones, [Tone::Deactivate]);
    console.frame(InputSample::centered());

    assert_eq!(console.state(), AppState::Spaceflight);
    assert_eq!(console.voyage().location(), Location::DockingBay);
    assert_eq!(console.voyage().crew().file_id(Position::Captain), Some(1));
    assert_eq!(active_panel(&console), "Bridge");
}

#[test]
fn maneuver_is_refused_until_launch() {
    let mut console = TestConsole::new();

    console.down();
    console.confirm();
    assert_eq!(active_panel(&console), "Navigation");
    console.take_events();

    console.confirm();
    let events = console.take_events();
    assert!(events.contains(&PresentationEvent::Tone(Tone::Error)));
    assert!(events.contains(&PresentationEvent::Message("Standing by to launch.".into())));
    assert!(!console.console().dispatcher.has_exclusive());
    assert_eq!(console.voyage().location(), Location::DockingBay);
}

#[test]
fn launch_then_fly_until_confirm() {
    let mut console = TestConsole::new();

    console.confirm();
    console.confirm();
    assert_eq!(console.voyage().location(), Location::JustLaunched);

    console.take_events();
    console.cancel();
    assert_eq!(active_panel(&console), "Bridge");
    assert_eq!(console.take_tones(), [Tone::Deactivate]);

    console.down();
    console.confirm();
    console.confirm();
    assert_eq!(console.voyage().location(), Location::StarSystem);
    assert_eq!(console.console().dispatcher.exclusive_label(), Some("Maneuver"));

    for _ in 0..5 {
        console.frame(InputSample::new(0.0, 1.0));
    }
    let position = console.voyage().ship_position();
    assert!(position.z > 0.0, "ship should have moved forward: {position}");
    assert_eq!(position.y, 0.0);
    // The held stick drove the ship, not the cursor.
    assert_eq!(console.console().cursor.index(), 0);

    console.confirm();
    assert!(!console.console().dispatcher.has_exclusive());
    assert_eq!(active_panel(&console), "Navigation");
}

#[test]
fn command_panel_greys_out_what_the_dock_forbids() {
    let mut console = TestConsole::new();
    console.take_events();

    console.confirm();

    let rendered = first_panel_labels(console.take_events());
    insta::assert_snapshot!(
        rendered,
        @"Launch | Disembark | Cargo (disabled) | Log Planet (disabled) | Ship's Log | Bridge"
    );
}

#[test]
fn cancel_on_the_bridge_is_ignored() {
    let mut console = TestConsole::new();
    console.take_events();

    console.cancel();

    assert_eq!(active_panel(&console), "Bridge");
    assert!(console.take_tones().is_empty());
}

#[test]
fn voyage_saved_at_the_starport_resumes_there() {
    let mut saved = Voyage::default();
    saved.set_location(Location::Starport);
    let mut console = TestConsole::with_voyage(saved);

    assert_eq!(console.state(), AppState::Starport);
    assert!(console.desk().editor.is_open());

    console.right();
    console.confirm();
    console.frame(InputSample::centered());

    assert_eq!(console.state(), AppState::Spaceflight);
    assert_eq!(console.voyage().location(), Location::DockingBay);
    assert_eq!(active_panel(&console), "Bridge");
}

#[test]
fn voyage_saved_in_space_resumes_on_the_bridge() {
    let mut saved = Voyage::default();
    saved.set_location(Location::InOrbit);
    let console = TestConsole::with_voyage(saved);

    assert_eq!(console.state(), AppState::Spaceflight);
    assert_eq!(active_panel(&console), "Bridge");
}

#[test]
fn starfield_rotation_survives_leaving_navigation() {
    let mut saved = Voyage::default();
    saved.set_location(Location::StarSystem);
    let mut console = TestConsole::with_voyage(saved);

    console.down();
    console.confirm();
    console.confirm();
    for _ in 0..5 {
        console.frame(InputSample::new(0.0, 1.0));
    }
    let rotated = console.voyage().skybox_rotation();
    assert_ne!(rotated, Default::default());

    console.cancel();
    assert_eq!(active_panel(&console), "Bridge");
    console.take_events();

    console.down();
    console.confirm();
    console.confirm();

    let events = console.take_events();
    assert!(events.contains(&PresentationEvent::SkyboxRotation(rotated)));
    assert_eq!(console.voyage().skybox_rotation(), rotated);
}
