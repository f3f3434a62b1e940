use serde::{Deserialize, Serialize};

/// Where the ship currently is. Exactly one value is authoritative per voyage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Location {
    #[default]
    DockingBay,
    JustLaunched,
    Starport,
    InOrbit,
    StarSystem,
    Hyperspace,
}

impl Location {
    pub const ALL: [Location; 6] = [
        Location::DockingBay,
        Location::JustLaunched,
        Location::Starport,
        Location::InOrbit,
        Location::StarSystem,
        Location::Hyperspace,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::DockingBay => "Docking Bay",
            Self::JustLaunched => "Just Launched",
            Self::Starport => "Starport",
            Self::InOrbit => "In Orbit",
            Self::StarSystem => "Star System",
            Self::Hyperspace => "Hyperspace",
        }
    }
}
