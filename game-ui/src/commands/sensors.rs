use crate::command::{Command, CommandKind, ExecuteOutcome};
use crate::context::CommandContext;
use crate::presentation::Tone;

pub struct Sensors;

impl Command for Sensors {
    fn label(&self) -> &str {
        "Sensors"
    }

    fn kind(&self) -> CommandKind {
        CommandKind::Sensors
    }

    fn execute(&mut self, cx: &mut CommandContext<'_>) -> ExecuteOutcome {
        if !cx.admit(self.kind()) {
            return ExecuteOutcome::Rejected;
        }
        cx.presentation.play_tone(Tone::Scanning);
        cx.presentation.show_message("Scanning...");
        ExecuteOutcome::Completed
    }
}
