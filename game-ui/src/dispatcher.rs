use crate::command::{ExecuteOutcome, FrameClaim};
use crate::context::{CommandContext, PanelRequest};
use crate::presentation::Tone;
use crate::set::{CommandSet, PanelExit};
use game_input::InputSample;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Active,
    /// The innermost saved parent panel. A submenu opener keeps the frame
    /// from there after its own panel request installed the submenu.
    Parent,
}

#[derive(Debug, Clone, Copy)]
struct Owner {
    origin: Origin,
    index: usize,
}

/// Owns the active panel, its saved parents and the exclusive command.
///
/// Every panel swap clears exclusivity. The exclusive command is addressed
/// by panel and index, so it is always a member of the active panel or of
/// the innermost parent.
#[derive(Debug, Default)]
pub struct CommandDispatcher {
    active: Option<CommandSet>,
    parents: Vec<CommandSet>,
    exclusive: Option<Owner>,
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&CommandSet> {
        self.active.as_ref()
    }

    /// Number of saved parent panels.
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    pub fn has_exclusive(&self) -> bool {
        self.exclusive.is_some()
    }

    pub fn exclusive_label(&self) -> Option<&str> {
        let owner = self.exclusive?;
        self.panel(owner.origin)?.label(owner.index)
    }

    /// Installs `next`, clears exclusivity and republishes the labels.
    pub fn update_buttons(&mut self, next: CommandSet, cx: &mut CommandContext<'_>) {
        info!("Panel -> {}", next.name());
        self.active = Some(next);
        self.exclusive = None;
        self.publish_labels(cx);
    }

    pub fn publish_labels(&self, cx: &mut CommandContext<'_>) {
        if let Some(set) = &self.active {
            let labels = set.panel_labels(cx.session.location());
            cx.presentation.set_panel_labels(&labels);
        }
    }

    /// Executes the command at `index` of the active panel.
    ///
    /// Panics without an active panel or with an index outside it.
    pub fn select_command(&mut self, index: usize, cx: &mut CommandContext<'_>) -> ExecuteOutcome {
        let set = self
            .active
            .as_mut()
            .unwrap_or_else(|| panic!("select_command({index}) with no active command set"));
        assert!(
            index < set.len(),
            "command index {index} out of range for panel {} with {} commands",
            set.name(),
            set.len()
        );

        let capabilities = set.capabilities(index);
        let command = set.command_mut(index);
        let label = command.label().to_string();
        let outcome = command.execute(cx);
        debug!("{} -> {:?}", label, outcome);

        if outcome == ExecuteOutcome::ClaimedExclusive {
            assert!(
                capabilities.frame_update,
                "{label} claimed the frame without the frame_update capability"
            );
        }

        let claim_origin = match cx.take_panel_request() {
            None => Some(Origin::Active),
            Some(PanelRequest::Open(next)) => {
                self.open(next, cx);
                Some(Origin::Parent)
            }
            Some(request) => {
                self.apply(request, cx);
                None
            }
        };

        match outcome {
            ExecuteOutcome::ClaimedExclusive => match claim_origin {
                Some(origin) => {
                    info!("{} holds the frame", label);
                    self.exclusive = Some(Owner { origin, index });
                }
                None => warn!("{} claimed the frame but dropped its own panel; claim discarded", label),
            },
            ExecuteOutcome::Completed => self.exclusive = None,
            ExecuteOutcome::Rejected => {
                self.exclusive = None;
                self.publish_labels(cx);
            }
        }
        outcome
    }

    /// Runs the exclusive command's per-frame update, if there is one.
    pub fn tick(&mut self, input: &InputSample, cx: &mut CommandContext<'_>) -> FrameClaim {
        let Some(owner) = self.exclusive else {
            return FrameClaim::PassThrough;
        };
        let set = self.panel_mut(owner.origin);
        let command = set.command_mut(owner.index);
        let claim = command.update(cx, input);

        if claim == FrameClaim::Relinquish {
            info!("{} released the frame", command.label());
            self.exclusive = None;
        }
        if let Some(request) = cx.take_panel_request() {
            self.apply(request, cx);
        }
        claim
    }

    /// Backs out one level: cancels the exclusive command and returns to the
    /// parent panel, or applies the active panel's exit policy when nothing
    /// holds the frame.
    pub fn request_cancel(&mut self, cx: &mut CommandContext<'_>) {
        assert!(self.active.is_some(), "request_cancel with no active command set");

        match self.exclusive.take() {
            Some(owner) => {
                let set = self.panel_mut(owner.origin);
                if set.capabilities(owner.index).cancel {
                    let command = set.command_mut(owner.index);
                    info!("Canceling {}", command.label());
                    command.cancel(cx);
                }
                if let Some(request) = cx.take_panel_request() {
                    warn!("Ignoring {:?} requested during cancel", request);
                }
                self.return_to_parent(cx);
            }
            None => match self.active.as_ref().map(CommandSet::exit) {
                Some(PanelExit::ToParent) => {
                    cx.presentation.play_tone(Tone::Deactivate);
                    self.return_to_parent(cx);
                }
                Some(PanelExit::Stay) | None => debug!("Cancel ignored"),
            },
        }
    }

    fn panel(&self, origin: Origin) -> Option<&CommandSet> {
        match origin {
            Origin::Active => self.active.as_ref(),
            Origin::Parent => self.parents.last(),
        }
    }

    fn panel_mut(&mut self, origin: Origin) -> &mut CommandSet {
        let set = match origin {
            Origin::Active => self.active.as_mut(),
            Origin::Parent => self.parents.last_mut(),
        };
        set.unwrap_or_else(|| panic!("exclusive command refers to a missing {origin:?} panel"))
    }

    fn apply(&mut self, request: PanelRequest, cx: &mut CommandContext<'_>) {
        match request {
            PanelRequest::Open(next) => self.open(next, cx),
            PanelRequest::Replace(next) => self.update_buttons(next, cx),
            PanelRequest::ReturnToParent => self.return_to_parent(cx),
            PanelRequest::ReturnToRoot => {
                self.parents.truncate(1);
                self.return_to_parent(cx);
            }
        }
    }

    fn open(&mut self, next: CommandSet, cx: &mut CommandContext<'_>) {
        if let Some(current) = self.active.take() {
            self.parents.push(current);
        }
        self.update_buttons(next, cx);
    }

    fn return_to_parent(&mut self, cx: &mut CommandContext<'_>) {
        match self.parents.pop() {
            Some(parent) => self.update_buttons(parent, cx),
            None => {
                debug!("Already at the outermost panel");
                self.exclusive = None;
                self.publish_labels(cx);
            }
        }
    }
}
