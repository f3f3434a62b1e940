//! Ship console interaction: command panels, the location gate and the
//! starport crew editor.

mod command;
pub mod commands;
mod context;
mod dispatcher;
pub mod gate;
pub mod panels;
pub mod presentation;
pub mod roster;
mod session;
mod set;

pub use command::{Capabilities, Command, CommandKind, ExecuteOutcome, FrameClaim};
pub use context::{CommandContext, FrameClock, PanelRequest};
pub use dispatcher::CommandDispatcher;
pub use gate::Rejection;
pub use panels::{PanelBook, PanelId};
pub use presentation::{
    Display, MusicTrack, PanelLabel, PresentationEvent, PresentationQueue, PresentationSink, Scene,
    Tone,
};
pub use roster::{CrewAssignmentEditor, EditorState, MenuButton, RosterDisplay};
pub use session::{SessionState, VoyageSession};
pub use set::{CommandSet, PanelExit};
