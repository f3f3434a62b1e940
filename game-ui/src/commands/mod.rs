mod maneuver;
mod panel;
mod sensors;
mod ships_log;
mod transit;
mod unimplemented;

pub use maneuver::{Maneuver, slerp_vec};
pub use panel::{OpenPanel, ReturnToBridge};
pub use sensors::Sensors;
pub use ships_log::StarportNotices;
pub use transit::{Disembark, Launch};
pub use unimplemented::Unimplemented;
