// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{CellValue, EntityRecord};
use std::cmp::Ordering;

/// How a column's cells are compared and aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Compared case-insensitively.
    Text,
    /// Compared numerically, right-aligned.
    Number,
    /// Sub-entity list, compared by its joined text.
    List,
}

/// One column of an entity grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Wire field the column reads (e.g. `averageScore`).
    pub key: &'static str,
    /// Header text.
    pub header: &'static str,
    /// Cell comparison and alignment.
    pub column_type: ColumnType,
    /// Whether the user may sort by this column.
    pub sortable: bool,
    /// Relative share of the available width.
    pub weight: u16,
}

impl Column {
    /// Declares a sortable text column.
    #[must_use]
    pub const fn text(key: &'static str, header: &'static str, weight: u16) -> Self {
        Self {
            key,
            header,
            column_type: ColumnType::Text,
            sortable: true,
            weight,
        }
    }

    /// Declares a sortable numeric column.
    #[must_use]
    pub const fn number(key: &'static str, header: &'static str, weight: u16) -> Self {
        Self {
            key,
            header,
            column_type: ColumnType::Number,
            sortable: true,
            weight,
        }
    }

    /// Declares a sortable list column.
    #[must_use]
    pub const fn list(key: &'static str, header: &'static str, weight: u16) -> Self {
        Self {
            key,
            header,
            column_type: ColumnType::List,
            sortable: true,
            weight,
        }
    }

    /// Marks the column as not sortable.
    #[must_use]
    pub const fn fixed(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Compares two records on this column in ascending order.
    ///
    /// Empty cells compare greater than any value so they sort last.
    #[must_use]
    pub fn compare(&self, a: &EntityRecord, b: &EntityRecord) -> Ordering {
        let left: CellValue = a.cell(self.key);
        let right: CellValue = b.cell(self.key);

        match (left.is_empty(), right.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }

        match self.column_type {
            ColumnType::Number => match (left.as_number(), right.as_number()) {
                (Some(l), Some(r)) => l.total_cmp(&r),
                _ => compare_text(&left, &right),
            },
            ColumnType::Text | ColumnType::List => compare_text(&left, &right),
        }
    }
}

fn compare_text(left: &CellValue, right: &CellValue) -> Ordering {
    left.display()
        .to_lowercase()
        .cmp(&right.display().to_lowercase())
}

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The column and direction the grid is currently sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// The column being sorted on.
    pub column: Column,
    /// The sort direction.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Advances the sort for `column`: ascending, then descending, then unsorted.
    ///
    /// Picking a different column starts again at ascending.
    #[must_use]
    pub fn cycle(current: Option<Self>, column: Column) -> Option<Self> {
        match current {
            Some(spec) if spec.column.key == column.key => match spec.direction {
                SortDirection::Ascending => Some(Self {
                    column,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(Self {
                column,
                direction: SortDirection::Ascending,
            }),
        }
    }

    /// Returns the records in display order.
    ///
    /// The sort is stable and leaves the input untouched; empty cells stay
    /// last in both directions.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [EntityRecord]) -> Vec<&'a EntityRecord> {
        let mut ordered: Vec<&EntityRecord> = records.iter().collect();
        ordered.sort_by(|a, b| {
            let ascending: Ordering = self.column.compare(a, b);
            let either_empty: bool =
                a.cell(self.column.key).is_empty() || b.cell(self.column.key).is_empty();
            match self.direction {
                SortDirection::Ascending => ascending,
                SortDirection::Descending if either_empty => ascending,
                SortDirection::Descending => ascending.reverse(),
            }
        });
        ordered
    }
}

/// Returns the records in display order for an optional sort.
#[must_use]
pub fn display_order<'a>(
    records: &'a [EntityRecord],
    sort: Option<&SortSpec>,
) -> Vec<&'a EntityRecord> {
    sort.map_or_else(|| records.iter().collect(), |spec| spec.apply(records))
}
