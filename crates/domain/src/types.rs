// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// The kinds of entity the admin screens manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A debater, with speaks and rounds aggregates.
    Debater,
    /// An institution, with its registered teams.
    Institution,
    /// A judge, with prelim/break counts and tournaments judged.
    Judge,
}

impl EntityKind {
    /// Every kind, in the order the screens are presented.
    pub const ALL: [Self; 3] = [Self::Debater, Self::Institution, Self::Judge];

    /// The REST resource segment for this kind (e.g. `debater`).
    #[must_use]
    pub const fn resource(&self) -> &'static str {
        match self {
            Self::Debater => "debater",
            Self::Institution => "institution",
            Self::Judge => "judge",
        }
    }

    /// The capitalised form used in JSON payload keys (e.g. `oldDebaterId`).
    #[must_use]
    pub const fn pascal(&self) -> &'static str {
        match self {
            Self::Debater => "Debater",
            Self::Institution => "Institution",
            Self::Judge => "Judge",
        }
    }

    /// The path, relative to the resource, that lists entities with aggregates.
    #[must_use]
    pub const fn list_path(&self) -> &'static str {
        match self {
            Self::Debater => "teams-speaks-rounds",
            Self::Institution => "teams-list",
            Self::Judge => "prelims-breaks-tournaments",
        }
    }

    /// The path, relative to the resource, that accepts the bulk action.
    #[must_use]
    pub const fn action_path(&self) -> &'static str {
        "replace"
    }

    /// Lower-case singular noun for user-facing messages.
    #[must_use]
    pub const fn singular(&self) -> &'static str {
        self.resource()
    }

    /// Lower-case plural noun for user-facing messages.
    #[must_use]
    pub const fn plural(&self) -> &'static str {
        match self {
            Self::Debater => "debaters",
            Self::Institution => "institutions",
            Self::Judge => "judges",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.resource())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debater" | "debaters" => Ok(Self::Debater),
            "institution" | "institutions" => Ok(Self::Institution),
            "judge" | "judges" => Ok(Self::Judge),
            _ => Err(DomainError::UnknownEntityKind(s.to_string())),
        }
    }
}

/// Opaque entity identifier, unique within one fetched collection.
///
/// The server issues integer ids; a collection carrying a string id fails
/// to decode rather than being coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for EntityId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

/// A single displayable cell of an entity row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Free text (names, abbreviations).
    Text(String),
    /// Whole-number aggregates (counts).
    Integer(i64),
    /// Fractional aggregates (averages).
    Decimal(f64),
    /// Associated sub-entities, rendered as a joined list.
    List(Vec<String>),
    /// No value was supplied.
    Empty,
}

impl CellValue {
    /// Renders the cell the way the grid shows it.
    ///
    /// Lists are joined with `", "`; decimals are shown as sent.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Decimal(value) => value.to_string(),
            Self::List(items) => items.join(", "),
            Self::Empty => String::new(),
        }
    }

    /// Returns the numeric value of the cell, if it has one.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the cell carries no value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Integer(_) | Self::Decimal(_) => false,
        }
    }
}

/// An entity as the grid sees it: an id plus display cells keyed by field.
///
/// Records are immutable from the client's point of view and are replaced
/// wholesale on every refetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityRecord {
    /// The entity identifier.
    pub id: EntityId,
    /// Display cells keyed by wire field name (e.g. `firstName`).
    #[serde(flatten)]
    pub cells: BTreeMap<&'static str, CellValue>,
}

impl EntityRecord {
    /// Creates a record with no cells.
    #[must_use]
    pub const fn new(id: EntityId) -> Self {
        Self {
            id,
            cells: BTreeMap::new(),
        }
    }

    /// Adds a cell, returning the record for chaining.
    #[must_use]
    pub fn with(mut self, field: &'static str, value: CellValue) -> Self {
        self.cells.insert(field, value);
        self
    }

    /// Returns the cell for `field`.
    ///
    /// The `id` field is always available even though it is not stored as a cell.
    #[must_use]
    pub fn cell(&self, field: &str) -> CellValue {
        if field == "id" {
            return CellValue::Integer(self.id.value());
        }
        self.cells.get(field).cloned().unwrap_or(CellValue::Empty)
    }
}
