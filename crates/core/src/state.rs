// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tab_admin_domain::{
    ActionRequest, EntityId, EntityRecord, HighlightRole, ScreenConfig, Selection, SortSpec,
    display_order,
};

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadTicket(pub(crate) u64);

impl LoadTicket {
    /// The raw sequence number, for logging.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

/// Identifies one issued bulk action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionTicket(pub(crate) u64);

impl ActionTicket {
    /// The raw sequence number, for logging.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

/// Whether a fetch is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// No fetch outstanding.
    Idle,
    /// A fetch is outstanding.
    InFlight {
        /// The ticket of the outstanding fetch.
        ticket: LoadTicket,
        /// Another load was requested meanwhile and starts when this one ends.
        reload_queued: bool,
    },
}

/// Whether a bulk action is outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionPhase {
    /// The trigger is available.
    Idle,
    /// The action has been sent and not yet answered.
    Sending {
        /// The ticket of the outstanding action.
        ticket: ActionTicket,
        /// The payload that was sent.
        request: ActionRequest,
    },
}

/// The complete state of one entity screen.
///
/// Each screen owns its own state; nothing is shared between screens.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// What the screen lists and which action it submits.
    pub screen: ScreenConfig,
    /// The last successfully fetched collection, in server order.
    pub records: Vec<EntityRecord>,
    /// Ticked rows, in the order they were ticked.
    pub selection: Selection,
    /// Display sort, if any.
    pub sort: Option<SortSpec>,
    /// Outstanding fetch, if any.
    pub load: LoadPhase,
    /// Outstanding action, if any.
    pub action: ActionPhase,
    /// Whether the view is active.
    pub mounted: bool,
    /// Whether any fetch has succeeded since the state was created.
    pub loaded: bool,
    pub(crate) next_ticket: u64,
}

impl ViewState {
    /// Creates the unmounted, empty state for a screen.
    #[must_use]
    pub const fn new(screen: ScreenConfig) -> Self {
        Self {
            screen,
            records: Vec::new(),
            selection: Selection::new(),
            sort: None,
            load: LoadPhase::Idle,
            action: ActionPhase::Idle,
            mounted: false,
            loaded: false,
            next_ticket: 1,
        }
    }

    /// True while a fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.load, LoadPhase::InFlight { .. })
    }

    /// True while an action is outstanding.
    #[must_use]
    pub const fn is_sending(&self) -> bool {
        matches!(self.action, ActionPhase::Sending { .. })
    }

    /// Whether the action trigger should be offered.
    ///
    /// The trigger is unavailable with nothing ticked or while an action is
    /// outstanding. Arity is still checked when it is pressed.
    #[must_use]
    pub fn can_trigger_action(&self) -> bool {
        self.mounted && !self.is_sending() && !self.selection.is_empty()
    }

    /// Whether `id` is part of the displayed collection.
    #[must_use]
    pub fn has_record(&self, id: EntityId) -> bool {
        self.records.iter().any(|record| record.id == id)
    }

    /// Records in the order the grid shows them.
    #[must_use]
    pub fn rows(&self) -> Vec<&EntityRecord> {
        display_order(&self.records, self.sort.as_ref())
    }

    /// The highlight role of a row under the screen's policy.
    #[must_use]
    pub fn classify(&self, id: EntityId) -> HighlightRole {
        self.screen.highlight.classify(id, &self.selection)
    }

    pub(crate) const fn issue_load_ticket(&mut self) -> LoadTicket {
        let ticket: LoadTicket = LoadTicket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }

    pub(crate) const fn issue_action_ticket(&mut self) -> ActionTicket {
        let ticket: ActionTicket = ActionTicket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }
}

/// Work the driver must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the collection and report back under this ticket.
    Fetch(LoadTicket),
    /// Send the action and report back under this ticket.
    Submit {
        /// The ticket to report back under.
        ticket: ActionTicket,
        /// The payload to send.
        request: ActionRequest,
    },
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: ViewState,
    /// Work to perform, if any.
    pub effect: Option<Effect>,
}
