use glam::Quat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLabel {
    pub label: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Update,
    Error,
    Activate,
    Deactivate,
    Scanning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    Spaceflight,
    Starport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Display {
    Status,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicTrack {
    StarSystem,
    Hyperspace,
}

/// Display and audio side effects requested by the interaction core. The
/// sink performs no logic of its own.
pub trait PresentationSink {
    fn set_panel_labels(&mut self, labels: &[PanelLabel]);
    fn show_message(&mut self, text: &str);
    fn play_tone(&mut self, tone: Tone);
    fn switch_scene(&mut self, scene: Scene);
    fn set_officer(&mut self, text: &str);
    fn set_viewport_label(&mut self, text: &str);
    fn change_display(&mut self, display: Display);
    fn change_music(&mut self, track: MusicTrack);
    fn show_ships_log(&mut self, entries: &[String]);
    fn set_skybox_rotation(&mut self, rotation: Quat);
}

#[derive(Debug, Clone, PartialEq)]
pub enum PresentationEvent {
    PanelLabels(Vec<PanelLabel>),
    Message(String),
    Tone(Tone),
    SwitchScene(Scene),
    Officer(String),
    ViewportLabel(String),
    Display(Display),
    Music(MusicTrack),
    ShipsLog(Vec<String>),
    SkyboxRotation(Quat),
}

/// Records every request in order. Tests inspect it; the host drains it once
/// per frame.
#[derive(Debug, Default)]
pub struct PresentationQueue {
    events: Vec<PresentationEvent>,
}

impl PresentationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[PresentationEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, PresentationEvent> {
        self.events.drain(..)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn tones(&self) -> Vec<Tone> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PresentationEvent::Tone(tone) => Some(*tone),
                _ => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PresentationEvent::Message(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_panel_labels(&self) -> Option<&[PanelLabel]> {
        self.events.iter().rev().find_map(|e| match e {
            PresentationEvent::PanelLabels(labels) => Some(labels.as_slice()),
            _ => None,
        })
    }
}

impl PresentationSink for PresentationQueue {
    fn set_panel_labels(&mut self, labels: &[PanelLabel]) {
        self.events.push(PresentationEvent::PanelLabels(labels.to_vec()));
    }

    fn show_message(&mut self, text: &str) {
        self.events.push(PresentationEvent::Message(text.to_string()));
    }

    fn play_tone(&mut self, tone: Tone) {
        self.events.push(PresentationEvent::Tone(tone));
    }

    fn switch_scene(&mut self, scene: Scene) {
        self.events.push(PresentationEvent::SwitchScene(scene));
    }

    fn set_officer(&mut self, text: &str) {
        self.events.push(PresentationEvent::Officer(text.to_string()));
    }

    fn set_viewport_label(&mut self, text: &str) {
        self.events.push(PresentationEvent::ViewportLabel(text.to_string()));
    }

    fn change_display(&mut self, display: Display) {
        self.events.push(PresentationEvent::Display(display));
    }

    fn change_music(&mut self, track: MusicTrack) {
        self.events.push(PresentationEvent::Music(track));
    }

    fn show_ships_log(&mut self, entries: &[String]) {
        self.events.push(PresentationEvent::ShipsLog(entries.to_vec()));
    }

    fn set_skybox_rotation(&mut self, rotation: Quat) {
        self.events.push(PresentationEvent::SkyboxRotation(rotation));
    }
}
