//! Which commands are legal at which location.
//!
//! Every arm names each location explicitly so that adding a location fails
//! to compile until every command has decided what to do there.

use crate::command::CommandKind;
use game_types::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    IllegalContext(&'static str),
    Unimplemented,
}

impl Rejection {
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::IllegalContext(message) => message,
            Rejection::Unimplemented => "Not yet implemented.",
        }
    }
}

pub fn check(location: Location, kind: CommandKind) -> Result<(), Rejection> {
    use Location::*;

    match kind {
        CommandKind::Launch => match location {
            DockingBay => Ok(()),
            JustLaunched | Starport | InOrbit | StarSystem | Hyperspace => {
                Err(Rejection::IllegalContext("We've already launched."))
            }
        },
        CommandKind::Disembark => match location {
            DockingBay => Ok(()),
            JustLaunched | Starport | InOrbit | StarSystem | Hyperspace => {
                Err(Rejection::IllegalContext("We can't disembark in space!"))
            }
        },
        CommandKind::Maneuver => match location {
            DockingBay => Err(Rejection::IllegalContext("Standing by to launch.")),
            JustLaunched | Starport | InOrbit | StarSystem | Hyperspace => Ok(()),
        },
        CommandKind::Sensors => match location {
            DockingBay | JustLaunched => {
                Err(Rejection::IllegalContext("Sensors can't be used here."))
            }
            Starport | InOrbit | StarSystem | Hyperspace => Ok(()),
        },
        CommandKind::OpenPanel | CommandKind::ReturnToBridge | CommandKind::ShipsLog => Ok(()),
        CommandKind::Unimplemented => Err(Rejection::Unimplemented),
    }
}

pub fn is_legal(location: Location, kind: CommandKind) -> bool {
    check(location, kind).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legal_at(kind: CommandKind) -> Vec<Location> {
        Location::ALL
            .into_iter()
            .filter(|&location| is_legal(location, kind))
            .collect()
    }

    #[test]
    fn docking_bay_only_commands() {
        assert_eq!(legal_at(CommandKind::Launch), vec![Location::DockingBay]);
        assert_eq!(legal_at(CommandKind::Disembark), vec![Location::DockingBay]);
    }

    #[test]
    fn maneuver_is_legal_everywhere_but_the_docking_bay() {
        let legal = legal_at(CommandKind::Maneuver);
        assert_eq!(legal.len(), Location::ALL.len() - 1);
        assert!(!legal.contains(&Location::DockingBay));
        assert_eq!(
            check(Location::DockingBay, CommandKind::Maneuver),
            Err(Rejection::IllegalContext("Standing by to launch."))
        );
    }

    #[test]
    fn sensors_need_to_be_underway() {
        assert_eq!(
            legal_at(CommandKind::Sensors),
            vec![
                Location::Starport,
                Location::InOrbit,
                Location::StarSystem,
                Location::Hyperspace
            ]
        );
    }

    #[test]
    fn unimplemented_is_never_legal() {
        assert!(legal_at(CommandKind::Unimplemented).is_empty());
        assert_eq!(Rejection::Unimplemented.message(), "Not yet implemented.");
    }

    #[test]
    fn every_pair_is_decided() {
        for kind in CommandKind::ALL {
            for location in Location::ALL {
                if let Err(rejection) = check(location, kind) {
                    assert!(!rejection.message().is_empty(), "{kind:?} at {location:?}");
                }
            }
        }
    }
}
