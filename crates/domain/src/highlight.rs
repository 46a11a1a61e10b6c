// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::selection::Selection;
use crate::types::EntityId;
use serde::{Deserialize, Serialize};

/// The visual role a row plays in the pending action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighlightRole {
    /// Not involved in the pending action.
    None,
    /// The first selected row: the one being replaced, or the primary.
    Role1,
    /// A replacement or secondary row.
    Role2,
}

/// How rows past the first selection are marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighlightPolicy {
    /// Only the second selected row gets `Role2`; used for pairwise merges.
    StrictSecondSlot,
    /// Every selected row after the first gets `Role2`; used for batch actions.
    AnyBeyondFirst,
}

impl HighlightPolicy {
    /// Classifies `row_id` against the current selection.
    ///
    /// Pure: the result depends only on the arguments.
    #[must_use]
    pub fn classify(&self, row_id: EntityId, selection: &Selection) -> HighlightRole {
        if selection.primary() == Some(row_id) {
            return HighlightRole::Role1;
        }

        let is_secondary: bool = match self {
            Self::StrictSecondSlot => selection.secondary() == Some(row_id),
            Self::AnyBeyondFirst => selection.beyond_primary().contains(&row_id),
        };

        if is_secondary {
            HighlightRole::Role2
        } else {
            HighlightRole::None
        }
    }
}
