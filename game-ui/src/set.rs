use crate::command::{Capabilities, Command};
use crate::gate;
use crate::presentation::PanelLabel;
use game_types::Location;

/// What a cancel request does when no command holds the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelExit {
    #[default]
    Stay,
    ToParent,
}

struct Entry {
    command: Box<dyn Command>,
    capabilities: Capabilities,
}

/// An ordered panel of commands. Order is display and selection order.
pub struct CommandSet {
    name: &'static str,
    entries: Vec<Entry>,
    exit: PanelExit,
}

impl CommandSet {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Vec::new(),
            exit: PanelExit::Stay,
        }
    }

    pub fn with(mut self, command: impl Command + 'static) -> Self {
        self.push(Box::new(command));
        self
    }

    pub fn with_exit(mut self, exit: PanelExit) -> Self {
        self.exit = exit;
        self
    }

    pub fn push(&mut self, command: Box<dyn Command>) {
        let capabilities = command.capabilities();
        self.entries.push(Entry {
            command,
            capabilities,
        });
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn exit(&self) -> PanelExit {
        self.exit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.command.label())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.command.label())
    }

    /// Labels as presented at `location`; commands the gate would refuse are
    /// shown disabled but stay selectable.
    pub fn panel_labels(&self, location: Location) -> Vec<PanelLabel> {
        self.entries
            .iter()
            .map(|e| PanelLabel {
                label: e.command.label().to_string(),
                enabled: gate::is_legal(location, e.command.kind()),
            })
            .collect()
    }

    pub(crate) fn capabilities(&self, index: usize) -> Capabilities {
        self.entries[index].capabilities
    }

    pub(crate) fn command_mut(&mut self, index: usize) -> &mut dyn Command {
        self.entries[index].command.as_mut()
    }
}

impl std::fmt::Debug for CommandSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSet")
            .field("name", &self.name)
            .field("commands", &self.labels().collect::<Vec<_>>())
            .field("exit", &self.exit)
            .finish()
    }
}
