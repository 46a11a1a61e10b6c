// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::{ActionTicket, LoadTicket};
use tab_admin_domain::{EntityId, EntityRecord};

/// A command represents user intent or a request completion as data only.
///
/// Commands are the only way to change a view's state.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// The view became active; starts the initial load.
    Mount,
    /// The view is going away; in-flight completions will be ignored.
    Unmount,
    /// Refetch the collection.
    RequestLoad,
    /// A fetch finished with a decoded collection.
    LoadSucceeded {
        /// The ticket the fetch was issued under.
        ticket: LoadTicket,
        /// The full collection, replacing the current one.
        records: Vec<EntityRecord>,
    },
    /// A fetch failed; the current collection stays.
    LoadFailed {
        /// The ticket the fetch was issued under.
        ticket: LoadTicket,
    },
    /// Tick or untick a row.
    Toggle(EntityId),
    /// Untick every row.
    ClearSelection,
    /// Advance the sort on the named column.
    SortBy(String),
    /// Validate the selection and submit the screen's bulk action.
    Execute,
    /// The server accepted the action.
    ActionSucceeded {
        /// The ticket the action was issued under.
        ticket: ActionTicket,
    },
    /// The server rejected the action, or it never arrived.
    ActionFailed {
        /// The ticket the action was issued under.
        ticket: ActionTicket,
    },
}
