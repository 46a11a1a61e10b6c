// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::EntityId;
use serde::Serialize;

/// The ordered set of rows the user has ticked.
///
/// Order carries meaning for asymmetric actions: the first id is the one
/// being replaced (the primary), later ids are its replacements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<EntityId>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Adds `id` at the end if absent, removes it if present.
    ///
    /// Returns true if the id is selected after the call.
    pub fn toggle(&mut self, id: EntityId) -> bool {
        if let Some(position) = self.ids.iter().position(|selected| *selected == id) {
            self.ids.remove(position);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Drops every selected id.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// The first selected id.
    #[must_use]
    pub fn primary(&self) -> Option<EntityId> {
        self.ids.first().copied()
    }

    /// The second selected id.
    #[must_use]
    pub fn secondary(&self) -> Option<EntityId> {
        self.ids.get(1).copied()
    }

    /// Every id after the primary, in selection order.
    #[must_use]
    pub fn beyond_primary(&self) -> &[EntityId] {
        self.ids.get(1..).unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The selected ids in selection order.
    #[must_use]
    pub fn as_slice(&self) -> &[EntityId] {
        &self.ids
    }
}

impl FromIterator<EntityId> for Selection {
    /// Builds a selection by toggling each id in turn.
    ///
    /// A repeated id therefore toggles back off, exactly as ticking the
    /// same checkbox twice would.
    fn from_iter<I: IntoIterator<Item = EntityId>>(iter: I) -> Self {
        let mut selection: Self = Self::new();
        for id in iter {
            selection.toggle(id);
        }
        selection
    }
}
