use bevy::input::ButtonInput;
use bevy::input::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn matches(&self, input: &ButtonInput<KeyCode>) -> bool {
        let ctrl = input.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]);
        let shift = input.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
        let alt = input.any_pressed([KeyCode::AltLeft, KeyCode::AltRight]);

        ctrl == self.ctrl && shift == self.shift && alt == self.alt
    }

    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.shift && !self.alt
    }
}

/// A key plus the modifiers that must be held with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub key: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyChord {
    pub fn new(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: Modifiers::none(),
        }
    }

    pub fn is_pressed(&self, input: &ButtonInput<KeyCode>) -> bool {
        input.pressed(self.key) && self.modifiers.matches(input)
    }

    pub fn is_just_pressed(&self, input: &ButtonInput<KeyCode>) -> bool {
        input.just_pressed(self.key) && self.modifiers.matches(input)
    }

    /// Parses `"Shift+Enter"`-style DOM codes.
    pub fn from_dom_code(code: &str) -> Option<Self> {
        let mut parts = code.split('+').collect::<Vec<_>>();
        let key = dom_code_to_keycode(parts.pop()?)?;

        let mut modifiers = Modifiers::none();
        for modifier in parts {
            match modifier {
                "Ctrl" => modifiers.ctrl = true,
                "Shift" => modifiers.shift = true,
                "Alt" => modifiers.alt = true,
                _ => return None,
            }
        }

        Some(Self { key, modifiers })
    }

    pub fn to_dom_code(&self) -> String {
        let mut parts = Vec::new();
        if self.modifiers.ctrl {
            parts.push("Ctrl");
        }
        if self.modifiers.shift {
            parts.push("Shift");
        }
        if self.modifiers.alt {
            parts.push("Alt");
        }
        parts.push(keycode_to_dom_code(self.key));
        parts.join("+")
    }
}

const KEY_CODES: &[(&str, KeyCode)] = &[
    ("ArrowUp", KeyCode::ArrowUp),
    ("ArrowDown", KeyCode::ArrowDown),
    ("ArrowLeft", KeyCode::ArrowLeft),
    ("ArrowRight", KeyCode::ArrowRight),
    ("KeyW", KeyCode::KeyW),
    ("KeyA", KeyCode::KeyA),
    ("KeyS", KeyCode::KeyS),
    ("KeyD", KeyCode::KeyD),
    ("KeyE", KeyCode::KeyE),
    ("KeyQ", KeyCode::KeyQ),
    ("KeyX", KeyCode::KeyX),
    ("KeyZ", KeyCode::KeyZ),
    ("Enter", KeyCode::Enter),
    ("NumpadEnter", KeyCode::NumpadEnter),
    ("Space", KeyCode::Space),
    ("Escape", KeyCode::Escape),
    ("Backspace", KeyCode::Backspace),
    ("Tab", KeyCode::Tab),
    ("Numpad2", KeyCode::Numpad2),
    ("Numpad4", KeyCode::Numpad4),
    ("Numpad6", KeyCode::Numpad6),
    ("Numpad8", KeyCode::Numpad8),
];

fn dom_code_to_keycode(code: &str) -> Option<KeyCode> {
    KEY_CODES
        .iter()
        .find(|(name, _)| *name == code)
        .map(|(_, key)| *key)
}

fn keycode_to_dom_code(key: KeyCode) -> &'static str {
    KEY_CODES
        .iter()
        .find(|(_, k)| *k == key)
        .map(|(name, _)| *name)
        .unwrap_or("Unknown")
}
