use crate::command::CommandKind;
use crate::gate::{self, Rejection};
use crate::presentation::{PresentationSink, Tone};
use crate::session::SessionState;
use crate::set::CommandSet;
use std::time::Duration;

/// Elapsed time since the previous frame.
pub trait FrameClock {
    fn delta(&self) -> Duration;
}

impl FrameClock for Duration {
    fn delta(&self) -> Duration {
        *self
    }
}

/// A panel change recorded by a command and applied by the dispatcher once
/// the command call returns.
pub enum PanelRequest {
    /// Enter a submenu; the current panel becomes its parent.
    Open(CommandSet),
    /// Swap the current panel, keeping its parents.
    Replace(CommandSet),
    ReturnToParent,
    /// Unwind every submenu back to the outermost panel.
    ReturnToRoot,
}

impl std::fmt::Debug for PanelRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelRequest::Open(set) => write!(f, "Open({})", set.name()),
            PanelRequest::Replace(set) => write!(f, "Replace({})", set.name()),
            PanelRequest::ReturnToParent => f.write_str("ReturnToParent"),
            PanelRequest::ReturnToRoot => f.write_str("ReturnToRoot"),
        }
    }
}

/// Capabilities handed to interaction code for the duration of one call.
pub struct CommandContext<'a> {
    pub session: &'a mut dyn SessionState,
    pub presentation: &'a mut dyn PresentationSink,
    pub clock: &'a dyn FrameClock,
    panel_request: Option<PanelRequest>,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        session: &'a mut dyn SessionState,
        presentation: &'a mut dyn PresentationSink,
        clock: &'a dyn FrameClock,
    ) -> Self {
        Self {
            session,
            presentation,
            clock,
            panel_request: None,
        }
    }

    pub fn delta(&self) -> Duration {
        self.clock.delta()
    }

    /// Panics if a panel change was already requested during this call.
    pub fn request_panel(&mut self, request: PanelRequest) {
        assert!(
            self.panel_request.is_none(),
            "only one panel change may be requested per command call (already have {:?}, got {:?})",
            self.panel_request,
            request
        );
        self.panel_request = Some(request);
    }

    pub(crate) fn take_panel_request(&mut self) -> Option<PanelRequest> {
        self.panel_request.take()
    }

    /// Error tone plus the rejection message.
    pub fn reject(&mut self, rejection: Rejection) {
        tracing::debug!("Rejected: {}", rejection.message());
        self.presentation.play_tone(Tone::Error);
        self.presentation.show_message(rejection.message());
    }

    /// Consults the location gate for `kind`, presenting the rejection when
    /// the command is not legal here.
    pub fn admit(&mut self, kind: CommandKind) -> bool {
        match gate::check(self.session.location(), kind) {
            Ok(()) => true,
            Err(rejection) => {
                self.reject(rejection);
                false
            }
        }
    }
}
