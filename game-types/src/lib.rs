mod crew;
mod location;
mod personnel;
mod settings;
mod ships_log;

pub use crew::{CrewAssignment, Position};
pub use location::Location;
pub use personnel::{Personnel, PersonnelFile, Skill};
pub use settings::{InputSettings, KeyBinding, KeyBindings, ManeuverSettings};
pub use ships_log::ShipsLog;
