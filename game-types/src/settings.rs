use serde::{Deserialize, Serialize};

/// Up to two input codes bound to one action. Written to TOML as a bare
/// string when only the first slot is used.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyBinding(pub [String; 2]);

impl KeyBinding {
    pub fn single(code: &str) -> Self {
        Self([code.to_string(), String::new()])
    }

    pub fn pair(primary: &str, secondary: &str) -> Self {
        Self([primary.to_string(), secondary.to_string()])
    }

    /// Non-empty codes in slot order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str).filter(|c| !c.is_empty())
    }
}

impl Serialize for KeyBinding {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.0[1].is_empty() {
            serializer.serialize_str(&self.0[0])
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for KeyBinding {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::One(code) => KeyBinding([code, String::new()]),
            Raw::Many(codes) => {
                let mut slots = [String::new(), String::new()];
                for (slot, code) in slots.iter_mut().zip(codes) {
                    *slot = code;
                }
                KeyBinding(slots)
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_up: KeyBinding,
    pub move_down: KeyBinding,
    pub move_left: KeyBinding,
    pub move_right: KeyBinding,
    pub confirm: KeyBinding,
    pub cancel: KeyBinding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_up: KeyBinding::pair("ArrowUp", "Gamepad:DPadUp"),
            move_down: KeyBinding::pair("ArrowDown", "Gamepad:DPadDown"),
            move_left: KeyBinding::pair("ArrowLeft", "Gamepad:DPadLeft"),
            move_right: KeyBinding::pair("ArrowRight", "Gamepad:DPadRight"),
            confirm: KeyBinding::pair("Enter", "Gamepad:South"),
            cancel: KeyBinding::pair("Escape", "Gamepad:East"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Axis magnitude at which a stick counts as pushed.
    pub stick_threshold: f32,
    /// Refractory period between two discrete navigation steps.
    pub repeat_cooldown_ms: u64,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            stick_threshold: 0.5,
            repeat_cooldown_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManeuverSettings {
    pub acceleration_cap: f32,
    pub acceleration_floor: f32,
    pub steer_rate: f32,
    pub brake_rate: f32,
    pub move_threshold: f32,
}

impl Default for ManeuverSettings {
    fn default() -> Self {
        Self {
            acceleration_cap: 30.0,
            acceleration_floor: 0.1,
            steer_rate: 3.0,
            brake_rate: 1.0,
            move_threshold: 0.5,
        }
    }
}
