use crate::commands::{
    Disembark, Launch, Maneuver, OpenPanel, ReturnToBridge, Sensors, StarportNotices, Unimplemented,
};
use crate::set::{CommandSet, PanelExit};
use game_types::{ManeuverSettings, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Bridge,
    Command,
    ShipsLog,
    Navigation,
    Science,
    Medical,
}

impl PanelId {
    pub fn name(self) -> &'static str {
        match self {
            PanelId::Bridge => "Bridge",
            PanelId::Command => "Command",
            PanelId::ShipsLog => "Ship's Log",
            PanelId::Navigation => "Navigation",
            PanelId::Science => "Science",
            PanelId::Medical => "Medical",
        }
    }
}

/// Builds fresh panels on demand. Each build owns new command instances.
#[derive(Debug, Clone, Default)]
pub struct PanelBook {
    maneuver: ManeuverSettings,
}

impl PanelBook {
    pub fn new(maneuver: ManeuverSettings) -> Self {
        Self { maneuver }
    }

    pub fn build(&self, id: PanelId) -> CommandSet {
        let set = CommandSet::new(id.name());
        match id {
            PanelId::Bridge => set
                .with(self.opener("Command", PanelId::Command, Some(Position::Captain)))
                .with(self.opener("Navigation", PanelId::Navigation, Some(Position::Navigator)))
                .with(self.opener("Science", PanelId::Science, Some(Position::ScienceOfficer)))
                .with(self.opener("Medical", PanelId::Medical, Some(Position::Doctor))),
            PanelId::Command => set
                .with(Launch)
                .with(Disembark)
                .with(Unimplemented::new("Cargo"))
                .with(Unimplemented::new("Log Planet"))
                .with(self.opener("Ship's Log", PanelId::ShipsLog, None))
                .with(ReturnToBridge)
                .with_exit(PanelExit::ToParent),
            PanelId::ShipsLog => set
                .with(StarportNotices)
                .with(ReturnToBridge)
                .with_exit(PanelExit::ToParent),
            PanelId::Navigation => set
                .with(Maneuver::new(self.maneuver.clone()))
                .with(Unimplemented::new("Starmap"))
                .with(ReturnToBridge)
                .with_exit(PanelExit::ToParent),
            PanelId::Science => set
                .with(Sensors)
                .with(Unimplemented::new("Analysis"))
                .with(ReturnToBridge)
                .with_exit(PanelExit::ToParent),
            PanelId::Medical => set
                .with(Unimplemented::new("Examine"))
                .with(Unimplemented::new("Treat"))
                .with(ReturnToBridge)
                .with_exit(PanelExit::ToParent),
        }
    }

    pub fn bridge(&self) -> CommandSet {
        self.build(PanelId::Bridge)
    }

    fn opener(&self, label: &'static str, target: PanelId, officer: Option<Position>) -> OpenPanel {
        let opener = OpenPanel::new(label, target, self.clone());
        match officer {
            Some(position) => opener.with_officer(position),
            None => opener,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(id: PanelId) -> Vec<String> {
        PanelBook::default()
            .build(id)
            .labels()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn panel_contents() {
        assert_eq!(labels(PanelId::Bridge), ["Command", "Navigation", "Science", "Medical"]);
        assert_eq!(
            labels(PanelId::Command),
            ["Launch", "Disembark", "Cargo", "Log Planet", "Ship's Log", "Bridge"]
        );
        assert_eq!(labels(PanelId::ShipsLog), ["Starport Notices", "Bridge"]);
        assert_eq!(labels(PanelId::Navigation), ["Maneuver", "Starmap", "Bridge"]);
        assert_eq!(labels(PanelId::Science), ["Sensors", "Analysis", "Bridge"]);
        assert_eq!(labels(PanelId::Medical), ["Examine", "Treat", "Bridge"]);
    }

    #[test]
    fn only_the_bridge_ignores_cancel() {
        let book = PanelBook::default();
        assert_eq!(book.bridge().exit(), PanelExit::Stay);
        assert_eq!(book.build(PanelId::Science).exit(), PanelExit::ToParent);
    }
}
