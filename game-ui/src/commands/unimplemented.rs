use crate::command::{Command, CommandKind, ExecuteOutcome};
use crate::context::CommandContext;

/// A panel entry whose feature does not exist yet. Always rejects.
pub struct Unimplemented {
    label: &'static str,
}

impl Unimplemented {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl Command for Unimplemented {
    fn label(&self) -> &str {
        self.label
    }

    fn kind(&self) -> CommandKind {
        CommandKind::Unimplemented
    }

    fn execute(&mut self, cx: &mut CommandContext<'_>) -> ExecuteOutcome {
        let admitted = cx.admit(self.kind());
        debug_assert!(!admitted);
        ExecuteOutcome::Rejected
    }
}
