use game_types::{CrewAssignment, Location, Personnel, PersonnelFile, Position, ShipsLog};
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Voyage state the interaction core reads and mutates. Handed to commands
/// and the crew editor per call; nothing in the core holds on to it.
pub trait SessionState {
    fn location(&self) -> Location;
    fn set_location(&mut self, location: Location);
    fn personnel(&self) -> &Personnel;
    fn crew(&self) -> &CrewAssignment;
    fn crew_mut(&mut self) -> &mut CrewAssignment;
    fn ship_position(&self) -> Vec3;
    fn set_ship_position(&mut self, position: Vec3);
    fn ship_heading(&self) -> Quat;
    fn set_ship_heading(&mut self, heading: Quat);
    /// Starfield orientation built up while maneuvering.
    fn skybox_rotation(&self) -> Quat;
    fn set_skybox_rotation(&mut self, rotation: Quat);
    fn ships_log(&self) -> &ShipsLog;

    fn just_launched(&self) -> bool {
        self.location() == Location::JustLaunched
    }

    fn in_hyperspace(&self) -> bool {
        self.location() == Location::Hyperspace
    }

    fn officer(&self, position: Position) -> Option<&PersonnelFile> {
        self.crew().personnel_file(position, self.personnel())
    }

    /// Staffs `position` with `file_id`, evicting the file from any other
    /// position. Panics if the file is not on the roster.
    fn assign_crew(&mut self, position: Position, file_id: u32) -> Option<Position> {
        assert!(
            self.personnel().get(file_id).is_some(),
            "cannot assign personnel file {file_id}: no such file on the roster"
        );
        let evicted = self.crew_mut().assign(position, file_id);
        if let Some(previous) = evicted {
            tracing::debug!("File {} moved from {:?} to {:?}", file_id, previous, position);
        }
        tracing::info!("Assigned file {} to {:?}", file_id, position);
        evicted
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoyageSession {
    pub location: Location,
    pub personnel: Personnel,
    pub crew: CrewAssignment,
    pub ship_position: Vec3,
    pub ship_heading: Quat,
    pub skybox_rotation: Quat,
    pub ships_log: ShipsLog,
}

impl Default for VoyageSession {
    fn default() -> Self {
        Self {
            location: Location::DockingBay,
            personnel: Personnel::new(),
            crew: CrewAssignment::new(),
            ship_position: Vec3::ZERO,
            ship_heading: Quat::IDENTITY,
            skybox_rotation: Quat::IDENTITY,
            ships_log: ShipsLog::default(),
        }
    }
}

impl VoyageSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh voyage docked at the starport with a hired but unassigned crew.
    pub fn with_starting_crew() -> Self {
        let mut session = Self::new();
        session.personnel.hire("Maya Okafor", 100, [40, 35, 20, 25, 15]);
        session.personnel.hire("Tobias Renn", 100, [10, 45, 30, 15, 5]);
        session.personnel.hire("Ilse Varga", 100, [50, 10, 15, 20, 30]);
        session.personnel.hire("Dario Quell", 100, [15, 20, 50, 10, 10]);
        session.personnel.hire("Sena Hollis", 100, [20, 15, 10, 50, 20]);
        session.personnel.hire("Petra Lund", 100, [25, 5, 10, 20, 50]);
        session
            .ships_log
            .post_notice("Welcome aboard. Report to Personnel to assign your crew.");
        session
            .ships_log
            .post_notice("Fuel prices at the starport are holding steady.");
        session
    }
}

impl SessionState for VoyageSession {
    fn location(&self) -> Location {
        self.location
    }

    fn set_location(&mut self, location: Location) {
        if self.location != location {
            tracing::info!("Location {} -> {}", self.location.label(), location.label());
        }
        self.location = location;
    }

    fn personnel(&self) -> &Personnel {
        &self.personnel
    }

    fn crew(&self) -> &CrewAssignment {
        &self.crew
    }

    fn crew_mut(&mut self) -> &mut CrewAssignment {
        &mut self.crew
    }

    fn ship_position(&self) -> Vec3 {
        self.ship_position
    }

    // The ship never leaves the y = 0 plane.
    fn set_ship_position(&mut self, position: Vec3) {
        self.ship_position = position.with_y(0.0);
    }

    fn ship_heading(&self) -> Quat {
        self.ship_heading
    }

    fn set_ship_heading(&mut self, heading: Quat) {
        self.ship_heading = heading;
    }

    fn skybox_rotation(&self) -> Quat {
        self.skybox_rotation
    }

    fn set_skybox_rotation(&mut self, rotation: Quat) {
        self.skybox_rotation = rotation;
    }

    fn ships_log(&self) -> &ShipsLog {
        &self.ships_log
    }
}
