use crate::command::{Capabilities, Command, CommandKind, ExecuteOutcome, FrameClaim};
use crate::context::{CommandContext, PanelRequest};
use crate::panels::{PanelBook, PanelId};
use crate::presentation::Tone;
use game_input::InputSample;
use game_types::Position;

/// Opens a submenu and holds the frame while it is up, so that backing out
/// returns to the panel it was opened from.
pub struct OpenPanel {
    label: &'static str,
    target: PanelId,
    officer: Option<Position>,
    book: PanelBook,
}

impl OpenPanel {
    pub fn new(label: &'static str, target: PanelId, book: PanelBook) -> Self {
        Self {
            label,
            target,
            officer: None,
            book,
        }
    }

    /// Shows the officer responsible for the submenu when it opens.
    pub fn with_officer(mut self, position: Position) -> Self {
        self.officer = Some(position);
        self
    }
}

impl Command for OpenPanel {
    fn label(&self) -> &str {
        self.label
    }

    fn kind(&self) -> CommandKind {
        CommandKind::OpenPanel
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::EXCLUSIVE
    }

    fn execute(&mut self, cx: &mut CommandContext<'_>) -> ExecuteOutcome {
        if !cx.admit(self.kind()) {
            return ExecuteOutcome::Rejected;
        }
        cx.request_panel(PanelRequest::Open(self.book.build(self.target)));

        if let Some(position) = self.officer {
            let text = match cx.session.officer(position) {
                Some(file) => format!("{} {}", position.title(), file.name),
                None => format!("{} [Not Assigned]", position.title()),
            };
            cx.presentation.set_officer(&text);
        }
        ExecuteOutcome::ClaimedExclusive
    }

    fn update(&mut self, _cx: &mut CommandContext<'_>, _input: &InputSample) -> FrameClaim {
        FrameClaim::PassThrough
    }

    fn cancel(&mut self, cx: &mut CommandContext<'_>) {
        cx.presentation.play_tone(Tone::Deactivate);
    }
}

/// The "Bridge" entry at the end of every submenu.
pub struct ReturnToBridge;

impl Command for ReturnToBridge {
    fn label(&self) -> &str {
        "Bridge"
    }

    fn kind(&self) -> CommandKind {
        CommandKind::ReturnToBridge
    }

    fn execute(&mut self, cx: &mut CommandContext<'_>) -> ExecuteOutcome {
        if !cx.admit(self.kind()) {
            return ExecuteOutcome::Rejected;
        }
        cx.presentation.play_tone(Tone::Deactivate);
        cx.request_panel(PanelRequest::ReturnToRoot);
        ExecuteOutcome::Completed
    }
}
