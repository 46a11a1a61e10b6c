// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod action;
mod columns;
mod error;
mod highlight;
mod records;
mod screen;
mod selection;
mod types;

#[cfg(test)]
mod tests;

pub use action::{ActionKind, ActionRequest, ArityRule};
pub use columns::{Column, ColumnType, SortDirection, SortSpec, display_order};
pub use error::DomainError;
pub use highlight::{HighlightPolicy, HighlightRole};
pub use records::decode_collection;
pub use screen::{DEBATERS, INSTITUTIONS, JUDGES, RoleStyle, RoleTone, ScreenConfig};
pub use selection::Selection;
pub use types::{CellValue, EntityId, EntityKind, EntityRecord};
