use crate::command::{Command, CommandKind, ExecuteOutcome};
use crate::context::CommandContext;
use crate::presentation::{Display, Scene, Tone};
use game_types::Location;

pub struct Launch;

impl Command for Launch {
    fn label(&self) -> &str {
        "Launch"
    }

    fn kind(&self) -> CommandKind {
        CommandKind::Launch
    }

    fn execute(&mut self, cx: &mut CommandContext<'_>) -> ExecuteOutcome {
        if !cx.admit(self.kind()) {
            return ExecuteOutcome::Rejected;
        }
        cx.session.set_location(Location::JustLaunched);
        cx.presentation.play_tone(Tone::Activate);
        cx.presentation.change_display(Display::Status);
        ExecuteOutcome::Completed
    }
}

/// Leaves the ship for the starport. Only possible from the docking bay.
pub struct Disembark;

impl Command for Disembark {
    fn label(&self) -> &str {
        "Disembark"
    }

    fn kind(&self) -> CommandKind {
        CommandKind::Disembark
    }

    fn execute(&mut self, cx: &mut CommandContext<'_>) -> ExecuteOutcome {
        if !cx.admit(self.kind()) {
            return ExecuteOutcome::Rejected;
        }
        cx.session.set_location(Location::Starport);
        cx.presentation.play_tone(Tone::Update);
        cx.presentation.switch_scene(Scene::Starport);
        ExecuteOutcome::Completed
    }
}
