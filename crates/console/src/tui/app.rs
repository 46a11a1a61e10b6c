// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Terminal-side state and key handling.
//!
//! Key handling is synchronous and returns an [`Intent`]; the run loop turns
//! intents into controller calls. Screen state is never edited here, only
//! mirrored from controller snapshots.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tab_admin::ViewState;
use tab_admin_client::{ActionOutcome, Notice};
use tab_admin_domain::{EntityId, EntityKind, EntityRecord, ScreenConfig};

/// What a key press asks the controllers to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Nothing.
    None,
    /// Leave the program.
    Quit,
    /// Unmount one screen and mount another.
    Switch {
        /// The screen being left.
        from: EntityKind,
        /// The screen being opened.
        to: EntityKind,
    },
    /// Tick or untick a row.
    Toggle(EntityKind, EntityId),
    /// Trigger the screen's bulk action.
    Execute(EntityKind),
    /// Refetch the collection.
    Reload(EntityKind),
    /// Cycle the sort on a column, by key.
    Sort(EntityKind, &'static str),
    /// Untick every row.
    ClearSelection(EntityKind),
}

/// Something a background task reports back to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A bulk action finished.
    Action(EntityKind, ActionOutcome),
    /// A request could not be carried out.
    Notice(Notice),
}

/// Everything the terminal draws.
#[derive(Debug, Clone)]
pub struct App {
    active: usize,
    views: Vec<ViewState>,
    cursors: Vec<usize>,
    /// A blocking message; keys other than dismissal are ignored while set.
    pub notice: Option<Notice>,
    /// One-line feedback shown in the status bar.
    pub status: Option<String>,
}

impl App {
    /// Creates the UI state with `start` as the visible screen.
    pub fn new(start: EntityKind) -> Self {
        Self {
            active: kind_index(start),
            views: EntityKind::ALL
                .iter()
                .map(|kind| ViewState::new(*ScreenConfig::for_kind(*kind)))
                .collect(),
            cursors: vec![0; EntityKind::ALL.len()],
            notice: None,
            status: None,
        }
    }

    pub const fn active_kind(&self) -> EntityKind {
        EntityKind::ALL[self.active]
    }

    pub fn active_view(&self) -> &ViewState {
        &self.views[self.active]
    }

    pub fn views(&self) -> &[ViewState] {
        &self.views
    }

    pub fn cursor(&self) -> usize {
        self.cursors[self.active]
    }

    /// The id of the row under the cursor, if the grid is not empty.
    pub fn cursor_row(&self) -> Option<EntityId> {
        self.active_view()
            .rows()
            .get(self.cursor())
            .map(|record| record.id)
    }

    /// Mirrors a controller snapshot.
    ///
    /// The cursor follows the row it was on through sorts and reloads; if
    /// that row is gone it keeps its position, clamped to the grid.
    pub fn update_view(&mut self, view: ViewState) {
        let index: usize = kind_index(view.screen.kind);
        let previous: usize = self.cursors[index];
        let pointed: Option<EntityId> = self.views[index]
            .rows()
            .get(previous)
            .map(|record| record.id);

        let rows: Vec<&EntityRecord> = view.rows();
        let cursor: usize = pointed
            .and_then(|id| rows.iter().position(|record| record.id == id))
            .unwrap_or(previous);
        self.cursors[index] = cursor.min(rows.len().saturating_sub(1));
        self.views[index] = view;
    }

    fn move_cursor(&mut self, down: bool) {
        let len: usize = self.active_view().records.len();
        let cursor: &mut usize = &mut self.cursors[self.active];
        if down {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        } else {
            *cursor = cursor.saturating_sub(1);
        }
    }

    fn switch(&mut self, forward: bool) -> Intent {
        let from: EntityKind = self.active_kind();
        let count: usize = EntityKind::ALL.len();
        self.active = if forward {
            (self.active + 1) % count
        } else {
            (self.active + count - 1) % count
        };
        self.status = None;
        Intent::Switch {
            from,
            to: self.active_kind(),
        }
    }

    /// Reflects a background result in the status bar or a notice.
    pub fn handle_ui_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Action(kind, outcome) => match outcome {
                ActionOutcome::Succeeded(request) => {
                    let screen: &ScreenConfig = ScreenConfig::for_kind(kind);
                    self.status = Some(format!(
                        "{} {} ({})",
                        screen.title,
                        screen.action.past_tense(),
                        request.len()
                    ));
                }
                ActionOutcome::Rejected(notice) | ActionOutcome::Failed(notice) => {
                    self.notice = Some(notice);
                }
                ActionOutcome::Busy => {
                    self.status = Some(String::from("An action is already in progress"));
                }
                ActionOutcome::Abandoned => {}
            },
            UiEvent::Notice(notice) => self.notice = Some(notice),
        }
    }
}

const fn kind_index(kind: EntityKind) -> usize {
    match kind {
        EntityKind::Debater => 0,
        EntityKind::Institution => 1,
        EntityKind::Judge => 2,
    }
}

/// Maps a key press to an intent, updating cursor and tab locally.
///
/// # Arguments
///
/// * `app` - The UI state
/// * `key` - The key pressed
///
/// # Returns
///
/// The work the run loop must start. `Intent::Quit` ends the program.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Intent {
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return Intent::Quit;
    }

    if app.notice.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.notice = None;
        }
        return Intent::None;
    }

    let kind: EntityKind = app.active_kind();
    match key.code {
        KeyCode::Char('q') => Intent::Quit,
        KeyCode::Tab | KeyCode::Right => app.switch(true),
        KeyCode::BackTab | KeyCode::Left => app.switch(false),
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_cursor(true);
            Intent::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_cursor(false);
            Intent::None
        }
        KeyCode::Char(' ') => app
            .cursor_row()
            .map_or(Intent::None, |id| Intent::Toggle(kind, id)),
        KeyCode::Enter | KeyCode::Char('m') => {
            let view: &ViewState = app.active_view();
            if view.is_sending() {
                app.status = Some(String::from("An action is already in progress"));
                Intent::None
            } else if view.can_trigger_action() {
                Intent::Execute(kind)
            } else {
                Intent::None
            }
        }
        KeyCode::Char('r') => Intent::Reload(kind),
        KeyCode::Char('c') => Intent::ClearSelection(kind),
        KeyCode::Char(digit @ '1'..='9') => {
            let index: usize = digit as usize - '1' as usize;
            app.active_view()
                .screen
                .columns
                .get(index)
                .map_or(Intent::None, |column| Intent::Sort(kind, column.key))
        }
        _ => Intent::None,
    }
}
