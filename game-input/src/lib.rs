mod actions;
mod bindings;
pub mod gamepad;
mod navigator;
mod sample;
mod unified;

pub use actions::GameAction;
pub use bindings::{KeyChord, Modifiers};
pub use gamepad::{GamepadConfig, GamepadInputType, GilrsResource};
pub use gamepad::{gamepad_connection_system, gilrs_event_polling_system};
pub use navigator::{AxisNavigator, NavStep, NavigatorConfig, NavigatorState, clamped_index, wrapped_index};
pub use sample::InputSample;
pub use unified::{InputSource, UnifiedInputBindings};
