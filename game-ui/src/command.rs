use crate::context::CommandContext;
use game_input::InputSample;

/// What a command is, for the purposes of the location gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Launch,
    Disembark,
    Maneuver,
    Sensors,
    OpenPanel,
    ReturnToBridge,
    ShipsLog,
    Unimplemented,
}

impl CommandKind {
    pub const ALL: [CommandKind; 8] = [
        CommandKind::Launch,
        CommandKind::Disembark,
        CommandKind::Maneuver,
        CommandKind::Sensors,
        CommandKind::OpenPanel,
        CommandKind::ReturnToBridge,
        CommandKind::ShipsLog,
        CommandKind::Unimplemented,
    ];
}

/// Optional hooks a command implements. Read once when the command joins a
/// [`CommandSet`](crate::CommandSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub frame_update: bool,
    pub cancel: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        frame_update: false,
        cancel: false,
    };

    pub const EXCLUSIVE: Capabilities = Capabilities {
        frame_update: true,
        cancel: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOutcome {
    /// Not legal here; nothing changed and the rejection was presented.
    Rejected,
    /// Done; the panel stays up for another choice.
    Completed,
    /// The command now receives every frame until canceled or it relinquishes.
    ClaimedExclusive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameClaim {
    /// Skip the default per-frame handling.
    Consumed,
    /// Let the host run its idle handling.
    PassThrough,
    /// Give up exclusivity. The frame still counts as consumed.
    Relinquish,
}

/// A selectable panel entry.
pub trait Command: Send + Sync {
    fn label(&self) -> &str;

    fn kind(&self) -> CommandKind;

    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE
    }

    fn execute(&mut self, cx: &mut CommandContext<'_>) -> ExecuteOutcome;

    fn update(&mut self, _cx: &mut CommandContext<'_>, _input: &InputSample) -> FrameClaim {
        FrameClaim::PassThrough
    }

    fn cancel(&mut self, _cx: &mut CommandContext<'_>) {}
}
