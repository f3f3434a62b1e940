use bevy::input::gamepad::{
    GamepadAxis, GamepadButton, GamepadConnection, GamepadConnectionEvent, RawGamepadAxisChangedEvent,
    RawGamepadButtonChangedEvent, RawGamepadEvent,
};
use bevy::prelude::*;
use std::collections::HashMap;
use std::sync::Mutex;

/// Pad buttons the console can bind: settings name, backend button, Bevy
/// button. Everything else a pad reports is dropped at the pump.
const BUTTONS: &[(&str, gilrs::Button, GamepadButton)] = &[
    ("South", gilrs::Button::South, GamepadButton::South),
    ("East", gilrs::Button::East, GamepadButton::East),
    ("North", gilrs::Button::North, GamepadButton::North),
    ("West", gilrs::Button::West, GamepadButton::West),
    ("DPadUp", gilrs::Button::DPadUp, GamepadButton::DPadUp),
    ("DPadDown", gilrs::Button::DPadDown, GamepadButton::DPadDown),
    ("DPadLeft", gilrs::Button::DPadLeft, GamepadButton::DPadLeft),
    ("DPadRight", gilrs::Button::DPadRight, GamepadButton::DPadRight),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadInputType {
    Button(GamepadButton),
    LeftStickUp,
    LeftStickDown,
    LeftStickLeft,
    LeftStickRight,
}

impl GamepadInputType {
    pub fn is_pressed(&self, gamepad: &Gamepad, threshold: f32) -> bool {
        let (x, y) = left_stick(gamepad);
        match self {
            GamepadInputType::Button(button) => gamepad.pressed(*button),
            GamepadInputType::LeftStickUp => y >= threshold,
            GamepadInputType::LeftStickDown => y <= -threshold,
            GamepadInputType::LeftStickLeft => x <= -threshold,
            GamepadInputType::LeftStickRight => x >= threshold,
        }
    }

    /// Stick directions are level signals and never report an edge.
    pub fn is_just_pressed(&self, gamepad: &Gamepad) -> bool {
        match self {
            GamepadInputType::Button(button) => gamepad.just_pressed(*button),
            _ => false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GamepadInputType::Button(button) => BUTTONS
                .iter()
                .find(|(_, _, b)| b == button)
                .map(|(name, _, _)| *name)
                .unwrap_or("Unknown"),
            GamepadInputType::LeftStickUp => "LeftStickUp",
            GamepadInputType::LeftStickDown => "LeftStickDown",
            GamepadInputType::LeftStickLeft => "LeftStickLeft",
            GamepadInputType::LeftStickRight => "LeftStickRight",
        }
    }

    /// Parses the `Gamepad:<Name>` form used in the settings file.
    pub fn from_string(s: &str) -> Option<Self> {
        let name = s.strip_prefix("Gamepad:")?;

        if let Some((_, _, button)) = BUTTONS.iter().find(|(n, _, _)| *n == name) {
            return Some(GamepadInputType::Button(*button));
        }

        match name {
            "LeftStickUp" => Some(GamepadInputType::LeftStickUp),
            "LeftStickDown" => Some(GamepadInputType::LeftStickDown),
            "LeftStickLeft" => Some(GamepadInputType::LeftStickLeft),
            "LeftStickRight" => Some(GamepadInputType::LeftStickRight),
            _ => None,
        }
    }
}

/// Raw left stick position, `(0, 0)` for axes the pad does not report.
pub fn left_stick(gamepad: &Gamepad) -> (f32, f32) {
    (
        gamepad.get(GamepadAxis::LeftStickX).unwrap_or(0.0),
        gamepad.get(GamepadAxis::LeftStickY).unwrap_or(0.0),
    )
}

#[derive(Resource)]
pub struct GamepadConfig {
    pub primary_gamepad: Option<Entity>,
    pub stick_threshold: f32,
}

impl Default for GamepadConfig {
    fn default() -> Self {
        Self {
            primary_gamepad: None,
            stick_threshold: 0.5,
        }
    }
}

/// The first connected pad becomes primary until it disconnects.
pub fn gamepad_connection_system(
    mut config: ResMut<GamepadConfig>,
    gamepads: Query<(Entity, &Name), With<Gamepad>>,
) {
    match config.primary_gamepad {
        None => {
            if let Some((entity, name)) = gamepads.iter().next() {
                config.primary_gamepad = Some(entity);
                tracing::info!("Primary gamepad: {}", name);
            }
        }
        Some(primary) => {
            if gamepads.get(primary).is_err() {
                config.primary_gamepad = None;
                tracing::info!("Primary gamepad disconnected");
            }
        }
    }
}

#[derive(Resource)]
pub struct GilrsResource {
    pub gilrs: Mutex<Option<gilrs::Gilrs>>,
    pub gamepad_map: HashMap<gilrs::GamepadId, Entity>,
}

impl Default for GilrsResource {
    fn default() -> Self {
        let gilrs = match gilrs::Gilrs::new() {
            Ok(gilrs) => {
                tracing::info!("Gilrs gamepad backend initialized");
                Some(gilrs)
            }
            Err(e) => {
                tracing::warn!("Gamepad support unavailable: {}", e);
                None
            }
        };
        Self {
            gilrs: Mutex::new(gilrs),
            gamepad_map: HashMap::new(),
        }
    }
}

/// Feeds backend pad events into Bevy as raw gamepad messages. A pad gets
/// its entity on connect and loses it on disconnect.
pub fn gilrs_event_polling_system(
    mut backend: ResMut<GilrsResource>,
    mut raw_events: MessageWriter<RawGamepadEvent>,
    mut commands: Commands,
) {
    let GilrsResource { gilrs, gamepad_map } = &mut *backend;
    let Ok(Some(gilrs)) = gilrs.get_mut().map(Option::as_mut) else {
        return;
    };

    while let Some(gilrs::Event { id, event, .. }) = gilrs.next_event() {
        let raw = match event {
            gilrs::EventType::Connected => {
                let pad = gilrs.gamepad(id);
                let name = pad.name().to_string();
                let entity = commands
                    .spawn((Gamepad::default(), Name::new(name.clone())))
                    .id();
                gamepad_map.insert(id, entity);
                tracing::info!("Gamepad connected: {} ({:?})", name, entity);
                Some(RawGamepadEvent::Connection(GamepadConnectionEvent::new(
                    entity,
                    GamepadConnection::Connected {
                        name,
                        vendor_id: pad.vendor_id(),
                        product_id: pad.product_id(),
                    },
                )))
            }
            gilrs::EventType::Disconnected => gamepad_map.remove(&id).map(|entity| {
                tracing::info!("Gamepad disconnected ({:?})", entity);
                commands.entity(entity).despawn();
                RawGamepadEvent::Connection(GamepadConnectionEvent::new(
                    entity,
                    GamepadConnection::Disconnected,
                ))
            }),
            gilrs::EventType::ButtonPressed(button, _) => button_event(gamepad_map, id, button, 1.0),
            gilrs::EventType::ButtonReleased(button, _) => button_event(gamepad_map, id, button, 0.0),
            gilrs::EventType::AxisChanged(axis, value, _) => axis_event(gamepad_map, id, axis, value),
            _ => None,
        };
        if let Some(raw) = raw {
            raw_events.write(raw);
        }
    }
}

fn button_event(
    pads: &HashMap<gilrs::GamepadId, Entity>,
    id: gilrs::GamepadId,
    button: gilrs::Button,
    value: f32,
) -> Option<RawGamepadEvent> {
    let entity = *pads.get(&id)?;
    let (_, _, button) = BUTTONS.iter().find(|(_, b, _)| *b == button)?;
    Some(RawGamepadEvent::Button(RawGamepadButtonChangedEvent::new(
        entity, *button, value,
    )))
}

// Only the left stick steers.
fn axis_event(
    pads: &HashMap<gilrs::GamepadId, Entity>,
    id: gilrs::GamepadId,
    axis: gilrs::Axis,
    value: f32,
) -> Option<RawGamepadEvent> {
    let entity = *pads.get(&id)?;
    let axis = match axis {
        gilrs::Axis::LeftStickX => GamepadAxis::LeftStickX,
        gilrs::Axis::LeftStickY => GamepadAxis::LeftStickY,
        _ => return None,
    };
    Some(RawGamepadEvent::Axis(RawGamepadAxisChangedEvent::new(
        entity, axis, value,
    )))
}
