use serde::{Deserialize, Serialize};

use crate::{Personnel, PersonnelFile};

/// Fixed crew stations aboard the ship, in roster display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Captain,
    ScienceOfficer,
    Navigator,
    Engineer,
    Communications,
    Doctor,
}

impl Position {
    pub const COUNT: usize = 6;

    pub const ALL: [Position; Self::COUNT] = [
        Position::Captain,
        Position::ScienceOfficer,
        Position::Navigator,
        Position::Engineer,
        Position::Communications,
        Position::Doctor,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Captain => "Captain",
            Self::ScienceOfficer => "Science Officer",
            Self::Navigator => "Navigator",
            Self::Engineer => "Engineer",
            Self::Communications => "Communications",
            Self::Doctor => "Doctor",
        }
    }
}

/// Position -> personnel file id. A file id staffs at most one position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewAssignment {
    slots: [Option<u32>; Position::COUNT],
}

impl CrewAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_id(&self, position: Position) -> Option<u32> {
        self.slots[position.index()]
    }

    pub fn is_assigned(&self, position: Position) -> bool {
        self.file_id(position).is_some()
    }

    pub fn position_of(&self, file_id: u32) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|p| self.slots[p.index()] == Some(file_id))
    }

    /// Staffs `position` with `file_id`, clearing whichever other position held
    /// that file. Returns the evicted position, if any.
    pub fn assign(&mut self, position: Position, file_id: u32) -> Option<Position> {
        let evicted = self.position_of(file_id).filter(|&p| p != position);
        if let Some(previous) = evicted {
            self.slots[previous.index()] = None;
        }
        self.slots[position.index()] = Some(file_id);
        evicted
    }

    pub fn personnel_file<'a>(
        &self,
        position: Position,
        personnel: &'a Personnel,
    ) -> Option<&'a PersonnelFile> {
        self.file_id(position).and_then(|id| personnel.get(id))
    }
}
