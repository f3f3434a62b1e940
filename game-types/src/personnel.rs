use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Science,
    Navigation,
    Engineering,
    Communication,
    Medicine,
}

impl Skill {
    pub const COUNT: usize = 5;
}

/// One crew member on file. Records are never removed; a vitality of zero
/// marks the crew member as dead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonnelFile {
    pub file_id: u32,
    pub name: String,
    pub vitality: u8,
    pub skills: [u8; Skill::COUNT],
}

impl PersonnelFile {
    pub fn is_alive(&self) -> bool {
        self.vitality > 0
    }

    pub fn skill(&self, skill: Skill) -> u8 {
        self.skills[skill as usize]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personnel {
    files: Vec<PersonnelFile>,
    next_file_id: u32,
}

impl Personnel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new file and returns its id. Vitality is clamped to 0..=100.
    pub fn hire(&mut self, name: impl Into<String>, vitality: u8, skills: [u8; Skill::COUNT]) -> u32 {
        let file_id = self.next_file_id;
        self.next_file_id += 1;
        self.files.push(PersonnelFile {
            file_id,
            name: name.into(),
            vitality: vitality.min(100),
            skills,
        });
        file_id
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[PersonnelFile] {
        &self.files
    }

    /// The file at a roster index (display order).
    pub fn at(&self, index: usize) -> Option<&PersonnelFile> {
        self.files.get(index)
    }

    pub fn get(&self, file_id: u32) -> Option<&PersonnelFile> {
        self.files.iter().find(|f| f.file_id == file_id)
    }

    pub fn get_mut(&mut self, file_id: u32) -> Option<&mut PersonnelFile> {
        self.files.iter_mut().find(|f| f.file_id == file_id)
    }

    /// Roster index of a file id.
    pub fn index_of(&self, file_id: u32) -> Option<usize> {
        self.files.iter().position(|f| f.file_id == file_id)
    }

    pub fn any_living(&self) -> bool {
        self.files.iter().any(PersonnelFile::is_alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hire_assigns_sequential_ids_and_clamps_vitality() {
        let mut personnel = Personnel::new();
        let a = personnel.hire("Ada", 250, [10, 20, 30, 40, 50]);
        let b = personnel.hire("Bo", 80, [0; 5]);

        assert_eq!((a, b), (0, 1));
        assert_eq!(personnel.get(a).map(|f| f.vitality), Some(100));
        assert_eq!(personnel.index_of(b), Some(1));
        assert_eq!(personnel.get(a).map(|f| f.skill(Skill::Engineering)), Some(30));
    }

    #[test]
    fn dead_records_stay_on_file() {
        let mut personnel = Personnel::new();
        let id = personnel.hire("Cy", 5, [0; 5]);
        assert!(personnel.any_living());

        if let Some(file) = personnel.get_mut(id) {
            file.vitality = 0;
        }

        assert!(!personnel.any_living());
        assert_eq!(personnel.len(), 1);
        assert!(personnel.get(id).is_some());
    }

    #[test]
    fn empty_roster_has_no_living_crew() {
        assert!(!Personnel::new().any_living());
    }
}
