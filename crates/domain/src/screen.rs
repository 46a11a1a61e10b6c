// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-kind screen configuration.
//!
//! The debater, institution, and judge screens differ only in the data
//! declared here; everything else is shared.

use crate::action::ActionKind;
use crate::columns::Column;
use crate::error::DomainError;
use crate::highlight::{HighlightPolicy, HighlightRole};
use crate::types::EntityKind;

/// Colour family a highlighted row is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleTone {
    /// Red: the row is going away or is secondary.
    Warning,
    /// Green: the row survives or is primary.
    Positive,
}

/// Name and tone for one highlight role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleStyle {
    /// Short label shown next to the row (e.g. `old`).
    pub label: &'static str,
    /// Colour family.
    pub tone: RoleTone,
}

/// Everything that distinguishes one entity screen from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenConfig {
    /// The entity kind listed.
    pub kind: EntityKind,
    /// Tab and block title.
    pub title: &'static str,
    /// Grid columns, in display order.
    pub columns: &'static [Column],
    /// The bulk action the screen submits.
    pub action: ActionKind,
    /// How selected rows are marked.
    pub highlight: HighlightPolicy,
    /// Style for the first selected row.
    pub role1: RoleStyle,
    /// Style for later selected rows.
    pub role2: RoleStyle,
}

const MERGE_OLD: RoleStyle = RoleStyle {
    label: "old",
    tone: RoleTone::Warning,
};

const MERGE_NEW: RoleStyle = RoleStyle {
    label: "new",
    tone: RoleTone::Positive,
};

const DEBATER_COLUMNS: [Column; 7] = [
    Column::number("id", "ID", 1),
    Column::text("firstName", "First Name", 2),
    Column::text("lastName", "Last Name", 3),
    Column::text("fullName", "Full Name", 5),
    Column::text("teams", "Team Names", 10),
    Column::number("averageScore", "Average", 2).fixed(),
    Column::number("roundsDebated", "Rounds", 2).fixed(),
];

const INSTITUTION_COLUMNS: [Column; 5] = [
    Column::number("id", "ID", 1),
    Column::text("name", "Institution Name", 4),
    Column::text("abbreviation", "Abbreviation", 2),
    Column::number("teamCount", "Team Count", 2),
    Column::list("teams", "Teams", 10).fixed(),
];

const JUDGE_COLUMNS: [Column; 6] = [
    Column::number("id", "ID", 1),
    Column::text("firstName", "First Name", 2),
    Column::text("lastName", "Last Name", 2),
    Column::number("breaks", "Breaks Judged", 1).fixed(),
    Column::number("prelims", "Prelims Judged", 1).fixed(),
    Column::list("tournaments", "Tournaments Judged", 8).fixed(),
];

/// Merge duplicate debaters.
pub const DEBATERS: ScreenConfig = ScreenConfig {
    kind: EntityKind::Debater,
    title: "Debaters",
    columns: &DEBATER_COLUMNS,
    action: ActionKind::Merge,
    highlight: HighlightPolicy::StrictSecondSlot,
    role1: MERGE_OLD,
    role2: MERGE_NEW,
};

/// Confirm a batch of institutions.
pub const INSTITUTIONS: ScreenConfig = ScreenConfig {
    kind: EntityKind::Institution,
    title: "Institutions",
    columns: &INSTITUTION_COLUMNS,
    action: ActionKind::Confirm,
    highlight: HighlightPolicy::AnyBeyondFirst,
    role1: RoleStyle {
        label: "primary",
        tone: RoleTone::Positive,
    },
    role2: RoleStyle {
        label: "secondary",
        tone: RoleTone::Warning,
    },
};

/// Merge duplicate judges.
pub const JUDGES: ScreenConfig = ScreenConfig {
    kind: EntityKind::Judge,
    title: "Judges",
    columns: &JUDGE_COLUMNS,
    action: ActionKind::Merge,
    highlight: HighlightPolicy::StrictSecondSlot,
    role1: MERGE_OLD,
    role2: MERGE_NEW,
};

impl ScreenConfig {
    /// The built-in screen for `kind`.
    #[must_use]
    pub const fn for_kind(kind: EntityKind) -> &'static Self {
        match kind {
            EntityKind::Debater => &DEBATERS,
            EntityKind::Institution => &INSTITUTIONS,
            EntityKind::Judge => &JUDGES,
        }
    }

    /// Looks up a column by its wire key or (case-insensitively) its header.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownColumn` if no column matches.
    pub fn column(&self, name: &str) -> Result<Column, DomainError> {
        self.columns
            .iter()
            .find(|column| column.key == name || column.header.eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| DomainError::UnknownColumn(name.to_string()))
    }

    /// Looks up a column that may be sorted on.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No column matches
    /// - The column is not sortable
    pub fn sortable_column(&self, name: &str) -> Result<Column, DomainError> {
        let column: Column = self.column(name)?;
        if !column.sortable {
            return Err(DomainError::NotSortable(column.header.to_string()));
        }
        Ok(column)
    }

    /// Style for a highlight role; `None` for unhighlighted rows.
    #[must_use]
    pub const fn role_style(&self, role: HighlightRole) -> Option<RoleStyle> {
        match role {
            HighlightRole::None => None,
            HighlightRole::Role1 => Some(self.role1),
            HighlightRole::Role2 => Some(self.role2),
        }
    }
}
