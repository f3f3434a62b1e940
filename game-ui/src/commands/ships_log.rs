use crate::command::{Command, CommandKind, ExecuteOutcome};
use crate::context::CommandContext;

pub struct StarportNotices;

impl Command for StarportNotices {
    fn label(&self) -> &str {
        "Starport Notices"
    }

    fn kind(&self) -> CommandKind {
        CommandKind::ShipsLog
    }

    fn execute(&mut self, cx: &mut CommandContext<'_>) -> ExecuteOutcome {
        if !cx.admit(self.kind()) {
            return ExecuteOutcome::Rejected;
        }
        cx.presentation
            .set_viewport_label("Ships Log - Starport Notices");
        let notices = &cx.session.ships_log().starport_notices;
        cx.presentation.show_ships_log(notices);
        ExecuteOutcome::Completed
    }
}
