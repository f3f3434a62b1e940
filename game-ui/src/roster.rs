//! Crew assignment at the starport.
//!
//! Two states. In the menu bar the player picks Assign or Exit. While
//! assigning, horizontal stick steps cycle the candidate for the selected
//! position and commit it immediately; vertical steps move between
//! positions. Cancel drops back to the menu bar.

use crate::context::CommandContext;
use crate::presentation::Tone;
use crate::session::SessionState;
use game_input::{AxisNavigator, InputSample, NavStep, NavigatorConfig, clamped_index, wrapped_index};
use game_types::{Position, Skill};
use tracing::{debug, info};

pub const NO_LIVING_CREW: &str = "Report to Personnel: There are no living crewmembers on file";
pub const NOT_ASSIGNED: &str = "[Not Assigned]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    MenuBar,
    AssignPersonnel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Assign,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrows {
    Hidden,
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateView {
    pub name_line: String,
    pub skills: [u8; Skill::COUNT],
}

/// Everything the roster screen shows, recomputed on every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterDisplay {
    pub assignments: [String; Position::COUNT],
    pub selected: Option<Position>,
    pub arrows: Arrows,
    pub up_arrow: bool,
    pub down_arrow: bool,
    pub candidate: Option<CandidateView>,
    pub assign_enabled: bool,
    pub exit_enabled: bool,
    pub focus: Option<MenuButton>,
    pub message: Option<String>,
}

impl Default for RosterDisplay {
    fn default() -> Self {
        Self {
            assignments: std::array::from_fn(|_| NOT_ASSIGNED.to_string()),
            selected: None,
            arrows: Arrows::Hidden,
            up_arrow: false,
            down_arrow: false,
            candidate: None,
            assign_enabled: false,
            exit_enabled: false,
            focus: None,
            message: None,
        }
    }
}

impl RosterDisplay {
    /// Vertical offset of the selection box as a fraction of the list height.
    pub fn selection_offset(&self) -> Option<f32> {
        self.selected
            .map(|p| p.index() as f32 / Position::COUNT as f32)
    }

    /// Plain-text rendition for logs and snapshots.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Position::ALL
            .iter()
            .zip(&self.assignments)
            .map(|(&position, name)| {
                let marker = if self.selected == Some(position) { ">" } else { "-" };
                format!("{marker} {}: {name}", position.title())
            })
            .collect();

        lines.push(match self.arrows {
            Arrows::Hidden => "arrows: hidden".to_string(),
            Arrows::Enabled | Arrows::Disabled => format!(
                "arrows: {}{}{}",
                if self.arrows == Arrows::Enabled { "enabled" } else { "disabled" },
                if self.up_arrow { " ^" } else { "" },
                if self.down_arrow { " v" } else { "" },
            ),
        });

        if let Some(candidate) = &self.candidate {
            lines.push(format!("file: {}", candidate.name_line));
            let skills: Vec<String> = candidate.skills.iter().map(u8::to_string).collect();
            lines.push(format!("skills: {}", skills.join(" ")));
        }

        let button = |label: &str, which: MenuButton, enabled: bool| {
            if self.focus == Some(which) {
                format!("[{label}]")
            } else if enabled {
                label.to_string()
            } else {
                format!("({label})")
            }
        };
        lines.push(format!(
            "buttons: {} {}",
            button("Assign", MenuButton::Assign, self.assign_enabled),
            button("Exit", MenuButton::Exit, self.exit_enabled),
        ));

        if let Some(message) = &self.message {
            lines.push(format!("message: {message}"));
        }
        lines.join("\n")
    }
}

#[derive(Debug)]
pub struct CrewAssignmentEditor {
    state: EditorState,
    open: bool,
    position: Position,
    candidate: usize,
    focus: MenuButton,
    navigator: AxisNavigator,
    display: RosterDisplay,
}

impl Default for CrewAssignmentEditor {
    fn default() -> Self {
        Self::new(NavigatorConfig::default())
    }
}

impl CrewAssignmentEditor {
    pub fn new(config: NavigatorConfig) -> Self {
        Self {
            state: EditorState::MenuBar,
            open: false,
            position: Position::Captain,
            candidate: 0,
            focus: MenuButton::Assign,
            navigator: AxisNavigator::new(config),
            display: RosterDisplay::default(),
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Roster index of the candidate under the cursor.
    pub fn candidate(&self) -> usize {
        self.candidate
    }

    pub fn candidate_file_id(&self, session: &dyn SessionState) -> Option<u32> {
        session.personnel().at(self.candidate).map(|f| f.file_id)
    }

    pub fn focus(&self) -> Option<MenuButton> {
        self.display.focus
    }

    pub fn display(&self) -> &RosterDisplay {
        &self.display
    }

    pub fn show(&mut self, cx: &mut CommandContext<'_>) {
        info!("Crew assignment opened");
        self.open = true;
        self.switch_to_menu_bar(cx);
    }

    /// Panics unless the editor is open in the menu bar with Assign enabled.
    pub fn assign_clicked(&mut self, cx: &mut CommandContext<'_>) {
        assert!(
            self.open && self.state == EditorState::MenuBar && self.display.assign_enabled,
            "assign clicked while unavailable ({:?}, open: {})",
            self.state,
            self.open
        );
        self.switch_to_assign_personnel(cx);
        cx.presentation.play_tone(Tone::Activate);
    }

    /// Panics unless the editor is open in the menu bar.
    pub fn exit_clicked(&mut self, cx: &mut CommandContext<'_>) {
        assert!(
            self.open && self.state == EditorState::MenuBar,
            "exit clicked while unavailable ({:?}, open: {})",
            self.state,
            self.open
        );
        info!("Crew assignment closed");
        self.open = false;
        self.navigator.reset();
        cx.presentation.play_tone(Tone::Deactivate);
    }

    pub fn tick(&mut self, cx: &mut CommandContext<'_>, input: &InputSample) {
        if !self.open {
            return;
        }
        let step = self.navigator.tick(input, cx.delta());

        match self.state {
            EditorState::MenuBar => {
                if let Some(step) = step.filter(|s| s.is_horizontal()) {
                    self.move_focus(step);
                }
                if input.confirm {
                    match self.focus {
                        MenuButton::Assign => self.assign_clicked(cx),
                        MenuButton::Exit => self.exit_clicked(cx),
                    }
                }
            }
            EditorState::AssignPersonnel => {
                if let Some(step) = step {
                    self.navigate(step, cx);
                }
                if input.cancel {
                    self.switch_to_menu_bar(cx);
                    cx.presentation.play_tone(Tone::Deactivate);
                }
            }
        }
    }

    fn navigate(&mut self, step: NavStep, cx: &mut CommandContext<'_>) {
        if step.is_horizontal() {
            let count = cx.session.personnel().len();
            let next = wrapped_index(self.candidate, count, step.delta());
            self.change_candidate(next, false, cx);
        } else {
            let next = clamped_index(self.position.index(), Position::COUNT, step.delta());
            if next != self.position.index() {
                if let Some(position) = Position::from_index(next) {
                    self.change_position(position, cx);
                }
            }
        }
        self.refresh(&*cx.session);
    }

    fn move_focus(&mut self, step: NavStep) {
        if !self.display.assign_enabled {
            return;
        }
        self.focus = match (self.focus, step) {
            (MenuButton::Assign, NavStep::Right) => MenuButton::Exit,
            (MenuButton::Exit, NavStep::Left) => MenuButton::Assign,
            (focus, _) => focus,
        };
        self.display.focus = Some(self.focus);
    }

    fn switch_to_menu_bar(&mut self, cx: &mut CommandContext<'_>) {
        self.state = EditorState::MenuBar;
        self.navigator.reset();
        self.focus = if cx.session.personnel().any_living() {
            MenuButton::Assign
        } else {
            MenuButton::Exit
        };
        self.refresh(&*cx.session);
    }

    fn switch_to_assign_personnel(&mut self, cx: &mut CommandContext<'_>) {
        self.state = EditorState::AssignPersonnel;
        self.navigator.reset();
        self.change_position(Position::Captain, cx);
        self.refresh(&*cx.session);
    }

    fn change_position(&mut self, position: Position, cx: &mut CommandContext<'_>) {
        debug!("Editing {:?}", position);
        self.position = position;

        match cx.session.crew().file_id(position) {
            Some(file_id) => {
                self.candidate = cx
                    .session
                    .personnel()
                    .index_of(file_id)
                    .unwrap_or_else(|| panic!("{position:?} is staffed by unknown file {file_id}"));
            }
            None => {
                let first_free = first_unstaffed(&*cx.session);
                self.change_candidate(first_free, true, cx);
            }
        }
        cx.presentation.play_tone(Tone::Update);
    }

    fn change_candidate(&mut self, index: usize, force: bool, cx: &mut CommandContext<'_>) {
        if index == self.candidate && !force {
            return;
        }
        self.candidate = index;
        let file_id = cx
            .session
            .personnel()
            .at(index)
            .map(|f| f.file_id)
            .unwrap_or_else(|| panic!("candidate index {index} is past the end of the roster"));
        cx.session.assign_crew(self.position, file_id);
        cx.presentation.play_tone(Tone::Update);
    }

    fn refresh(&mut self, session: &dyn SessionState) {
        let personnel = session.personnel();
        let crew = session.crew();
        let mut display = RosterDisplay {
            assignments: std::array::from_fn(|i| {
                crew.personnel_file(Position::ALL[i], personnel)
                    .map_or_else(|| NOT_ASSIGNED.to_string(), |f| f.name.clone())
            }),
            ..RosterDisplay::default()
        };

        match self.state {
            EditorState::MenuBar => {
                display.exit_enabled = true;
                display.assign_enabled = personnel.any_living();
                display.focus = Some(self.focus);
                if !display.assign_enabled {
                    display.message = Some(NO_LIVING_CREW.to_string());
                }
            }
            EditorState::AssignPersonnel => {
                let index = self.position.index();
                display.selected = Some(self.position);
                display.arrows = if personnel.len() > 1 {
                    Arrows::Enabled
                } else {
                    Arrows::Disabled
                };
                display.up_arrow = index != 0;
                display.down_arrow = index != Position::COUNT - 1;
                display.candidate = personnel.at(self.candidate).map(|file| CandidateView {
                    name_line: if file.is_alive() {
                        format!("{} - {}% vitality", file.name, file.vitality)
                    } else {
                        format!("{} - DEAD", file.name)
                    },
                    skills: file.skills,
                });
            }
        }
        self.display = display;
    }
}

/// First roster index not staffing any position, or 0 when everyone is.
fn first_unstaffed(session: &dyn SessionState) -> usize {
    let crew = session.crew();
    session
        .personnel()
        .files()
        .iter()
        .position(|f| crew.position_of(f.file_id).is_none())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::PresentationQueue;
    use crate::session::VoyageSession;
    use std::time::Duration;

    const FRAME: Duration = Duration::from_millis(100);

    struct Harness {
        session: VoyageSession,
        queue: PresentationQueue,
        editor: CrewAssignmentEditor,
    }

    impl Harness {
        fn new(session: VoyageSession) -> Self {
            let mut harness = Self {
                session,
                queue: PresentationQueue::new(),
                editor: CrewAssignmentEditor::new(NavigatorConfig::default()),
            };
            harness.with_cx(|editor, cx| editor.show(cx));
            harness
        }

        fn with_cx<R>(&mut self, f: impl FnOnce(&mut CrewAssignmentEditor, &mut CommandContext<'_>) -> R) -> R {
            let mut cx = CommandContext::new(&mut self.session, &mut self.queue, &FRAME);
            f(&mut self.editor, &mut cx)
        }

        fn tick(&mut self, input: InputSample) {
            self.with_cx(|editor, cx| editor.tick(cx, &input));
        }

        /// One push followed by a centered frame so the next push fires.
        fn push(&mut self, x: f32, y: f32) {
            self.tick(InputSample::new(x, y));
            self.tick(InputSample::centered());
        }

        fn assign_clicked(&mut self) {
            self.with_cx(|editor, cx| editor.assign_clicked(cx));
        }

        fn render(&self) -> String {
            self.editor.display().render()
        }
    }

    fn dead_crew() -> VoyageSession {
        let mut session = VoyageSession::new();
        session.personnel.hire("Orrin Vale", 0, [30, 30, 30, 30, 30]);
        session
    }

    #[test]
    fn fully_staffed_roster_falls_back_to_the_first_file() {
        let mut session = VoyageSession::new();
        let first = session.personnel.hire("Juno Park", 80, [10, 20, 30, 40, 50]);
        let second = session.personnel.hire("Ada Brisk", 90, [50, 40, 30, 20, 10]);
        session.assign_crew(Position::Captain, first);
        session.assign_crew(Position::ScienceOfficer, second);

        let mut h = Harness::new(session);
        h.assign_clicked();
        h.push(0.0, -1.0);
        h.push(0.0, -1.0);

        assert_eq!(h.editor.position(), Position::Navigator);
        assert_eq!(h.editor.candidate(), 0);
        assert_eq!(h.session.crew.file_id(Position::Navigator), Some(first));
        assert_eq!(h.session.crew.file_id(Position::Captain), None);
        assert_eq!(h.session.crew.file_id(Position::ScienceOfficer), Some(second));
    }

    #[test]
    fn opens_on_the_menu_bar() {
        let h = Harness::new(VoyageSession::with_starting_crew());
        assert_eq!(h.editor.state(), EditorState::MenuBar);
        assert_eq!(h.editor.focus(), Some(MenuButton::Assign));
        insta::assert_snapshot!(h.render(), @r"
        - Captain: [Not Assigned]
        - Science Officer: [Not Assigned]
        - Navigator: [Not Assigned]
        - Engineer: [Not Assigned]
        - Communications: [Not Assigned]
        - Doctor: [Not Assigned]
        arrows: hidden
        buttons: [Assign] Exit
        ");
    }

    #[test]
    fn assigning_starts_at_the_captain_with_the_first_free_file() {
        let mut h = Harness::new(VoyageSession::with_starting_crew());
        h.assign_clicked();

        assert_eq!(h.editor.state(), EditorState::AssignPersonnel);
        assert_eq!(h.queue.tones(), vec![Tone::Update, Tone::Update, Tone::Activate]);
        assert_eq!(h.session.crew.file_id(Position::Captain), Some(0));
        insta::assert_snapshot!(h.render(), @r"
        > Captain: Maya Okafor
        - Science Officer: [Not Assigned]
        - Navigator: [Not Assigned]
        - Engineer: [Not Assigned]
        - Communications: [Not Assigned]
        - Doctor: [Not Assigned]
        arrows: enabled v
        file: Maya Okafor - 100% vitality
        skills: 40 35 20 25 15
        buttons: (Assign) (Exit)
        ");
    }

    #[test]
    fn horizontal_steps_commit_and_wrap() {
        let mut h = Harness::new(VoyageSession::with_starting_crew());
        h.assign_clicked();

        h.push(1.0, 0.0);
        assert_eq!(h.editor.candidate(), 1);
        assert_eq!(h.session.crew.file_id(Position::Captain), Some(1));

        h.push(-1.0, 0.0);
        h.push(-1.0, 0.0);
        assert_eq!(h.editor.candidate(), 5);
        assert_eq!(h.session.crew.file_id(Position::Captain), Some(5));
    }

    #[test]
    fn returning_to_a_position_snaps_to_its_assignment() {
        let mut h = Harness::new(VoyageSession::with_starting_crew());
        h.assign_clicked();
        h.push(1.0, 0.0);
        h.push(1.0, 0.0);
        let captain = h.editor.candidate_file_id(&h.session);
        assert_eq!(captain, Some(2));

        h.push(0.0, -1.0);
        assert_eq!(h.editor.position(), Position::ScienceOfficer);
        assert_eq!(h.session.crew.file_id(Position::ScienceOfficer), Some(0));

        h.push(0.0, 1.0);
        assert_eq!(h.editor.position(), Position::Captain);
        assert_eq!(h.editor.candidate_file_id(&h.session), captain);
    }

    #[test]
    fn positions_clamp_at_both_ends() {
        let mut h = Harness::new(VoyageSession::with_starting_crew());
        h.assign_clicked();

        h.push(0.0, 1.0);
        assert_eq!(h.editor.position(), Position::Captain);
        assert!(!h.editor.display().up_arrow);

        for _ in 0..10 {
            h.push(0.0, -1.0);
        }
        assert_eq!(h.editor.position(), Position::Doctor);
        assert!(h.editor.display().up_arrow);
        assert!(!h.editor.display().down_arrow);
        assert_eq!(h.editor.display().selection_offset(), Some(5.0 / 6.0));
    }

    #[test]
    fn cycling_onto_a_staffed_file_evicts_it() {
        let mut h = Harness::new(VoyageSession::with_starting_crew());
        h.assign_clicked();
        h.push(0.0, -1.0);
        assert_eq!(h.session.crew.file_id(Position::ScienceOfficer), Some(1));

        h.push(-1.0, 0.0);
        assert_eq!(h.session.crew.file_id(Position::ScienceOfficer), Some(0));
        assert_eq!(h.session.crew.file_id(Position::Captain), None);
    }

    #[test]
    fn held_stick_is_rate_limited() {
        let mut h = Harness::new(VoyageSession::with_starting_crew());
        h.assign_clicked();

        for _ in 0..4 {
            h.tick(InputSample::new(1.0, 0.0));
        }
        assert_eq!(h.editor.candidate(), 2);
    }

    #[test]
    fn cancel_returns_to_the_menu_bar() {
        let mut h = Harness::new(VoyageSession::with_starting_crew());
        h.assign_clicked();
        h.queue.clear();

        h.tick(InputSample::canceled());

        assert_eq!(h.editor.state(), EditorState::MenuBar);
        assert_eq!(h.queue.tones(), vec![Tone::Deactivate]);
        assert_eq!(h.editor.focus(), Some(MenuButton::Assign));
        assert_eq!(h.editor.display().assignments[0], "Maya Okafor");
        assert_eq!(h.editor.display().selection_offset(), None);
    }

    #[test]
    fn no_living_crew_locks_assign() {
        let h = Harness::new(dead_crew());
        assert!(!h.editor.display().assign_enabled);
        assert_eq!(h.editor.focus(), Some(MenuButton::Exit));
        assert_eq!(h.editor.display().message.as_deref(), Some(NO_LIVING_CREW));
        insta::assert_snapshot!(h.render(), @r"
        - Captain: [Not Assigned]
        - Science Officer: [Not Assigned]
        - Navigator: [Not Assigned]
        - Engineer: [Not Assigned]
        - Communications: [Not Assigned]
        - Doctor: [Not Assigned]
        arrows: hidden
        buttons: (Assign) [Exit]
        message: Report to Personnel: There are no living crewmembers on file
        ");
    }

    #[test]
    #[should_panic(expected = "assign clicked while unavailable")]
    fn assign_without_living_crew_panics() {
        let mut h = Harness::new(dead_crew());
        h.assign_clicked();
    }

    #[test]
    fn dead_crew_show_as_dead() {
        let mut session = dead_crew();
        session.personnel.hire("Juno Park", 64, [1, 2, 3, 4, 5]);
        let mut h = Harness::new(session);
        h.assign_clicked();
        assert_eq!(h.editor.display().candidate.as_ref().unwrap().name_line, "Orrin Vale - DEAD");

        h.push(1.0, 0.0);
        assert_eq!(h.editor.display().candidate.as_ref().unwrap().name_line, "Juno Park - 64% vitality");
    }

    #[test]
    fn single_file_roster_shows_disabled_arrows() {
        let mut session = VoyageSession::new();
        session.personnel.hire("Solo", 90, [10; 5]);
        let mut h = Harness::new(session);
        h.assign_clicked();
        assert_eq!(h.editor.display().arrows, Arrows::Disabled);
    }

    #[test]
    fn confirm_presses_the_focused_button() {
        let mut h = Harness::new(VoyageSession::with_starting_crew());
        h.tick(InputSample::new(1.0, 0.0));
        assert_eq!(h.editor.focus(), Some(MenuButton::Exit));

        h.queue.clear();
        h.tick(InputSample::confirmed());
        assert!(!h.editor.is_open());
        assert_eq!(h.queue.tones(), vec![Tone::Deactivate]);
    }
}
