// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire rows returned by the list-with-aggregates endpoints.
//!
//! Each kind has its own typed row so that a malformed payload is rejected
//! as a whole before anything reaches the grid.

use crate::error::DomainError;
use crate::types::{CellValue, EntityId, EntityKind, EntityRecord};
use serde::Deserialize;
use std::collections::HashSet;

/// A sub-entity list that the API sends either pre-joined or as an array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum JoinedList {
    /// Already joined by the server.
    Joined(String),
    /// One entry per sub-entity.
    Items(Vec<String>),
}

impl JoinedList {
    fn into_cell(self) -> CellValue {
        match self {
            Self::Joined(text) => CellValue::Text(text),
            Self::Items(items) => CellValue::List(items),
        }
    }
}

/// Debater row from `GET /debater/teams-speaks-rounds`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebaterRow {
    /// The debater id.
    pub id: i64,
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Name as registered.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Teams the debater has competed on.
    #[serde(default)]
    pub teams: Option<JoinedList>,
    /// Average speaker score across rounds.
    #[serde(default)]
    pub average_score: Option<f64>,
    /// Number of rounds debated.
    #[serde(default)]
    pub rounds_debated: Option<i64>,
}

impl From<DebaterRow> for EntityRecord {
    fn from(row: DebaterRow) -> Self {
        Self::new(EntityId::new(row.id))
            .with("firstName", text_cell(row.first_name))
            .with("lastName", text_cell(row.last_name))
            .with("fullName", text_cell(row.full_name))
            .with(
                "teams",
                row.teams.map_or(CellValue::Empty, JoinedList::into_cell),
            )
            .with(
                "averageScore",
                row.average_score.map_or(CellValue::Empty, CellValue::Decimal),
            )
            .with(
                "roundsDebated",
                row.rounds_debated.map_or(CellValue::Empty, CellValue::Integer),
            )
    }
}

/// Institution row from `GET /institution/teams-list`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionRow {
    /// The institution id.
    pub id: i64,
    /// Institution name.
    #[serde(default)]
    pub name: Option<String>,
    /// Short code.
    #[serde(default)]
    pub abbreviation: Option<String>,
    /// Number of teams registered under the institution.
    #[serde(default)]
    pub team_count: Option<i64>,
    /// Team names; null is treated as empty.
    #[serde(default)]
    pub teams: Option<Vec<String>>,
}

impl From<InstitutionRow> for EntityRecord {
    fn from(row: InstitutionRow) -> Self {
        Self::new(EntityId::new(row.id))
            .with("name", text_cell(row.name))
            .with("abbreviation", text_cell(row.abbreviation))
            .with(
                "teamCount",
                row.team_count.map_or(CellValue::Empty, CellValue::Integer),
            )
            .with("teams", CellValue::List(row.teams.unwrap_or_default()))
    }
}

/// Judge row from `GET /judge/prelims-breaks-tournaments`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeRow {
    /// The judge id.
    pub id: i64,
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Elimination rounds judged.
    #[serde(default)]
    pub breaks: Option<i64>,
    /// Preliminary rounds judged.
    #[serde(default)]
    pub prelims: Option<i64>,
    /// Tournaments judged; null is treated as empty.
    #[serde(default)]
    pub tournaments: Option<Vec<String>>,
}

impl From<JudgeRow> for EntityRecord {
    fn from(row: JudgeRow) -> Self {
        Self::new(EntityId::new(row.id))
            .with("firstName", text_cell(row.first_name))
            .with("lastName", text_cell(row.last_name))
            .with(
                "breaks",
                row.breaks.map_or(CellValue::Empty, CellValue::Integer),
            )
            .with(
                "prelims",
                row.prelims.map_or(CellValue::Empty, CellValue::Integer),
            )
            .with(
                "tournaments",
                CellValue::List(row.tournaments.unwrap_or_default()),
            )
    }
}

fn text_cell(value: Option<String>) -> CellValue {
    value.map_or(CellValue::Empty, CellValue::Text)
}

fn decode_rows<T>(kind: EntityKind, body: &[u8]) -> Result<Vec<EntityRecord>, DomainError>
where
    T: for<'de> Deserialize<'de> + Into<EntityRecord>,
{
    let rows: Vec<T> =
        serde_json::from_slice(body).map_err(|e| DomainError::InvalidCollection {
            kind,
            reason: e.to_string(),
        })?;
    Ok(rows.into_iter().map(Into::into).collect())
}

/// Decodes a list response body for `kind` into grid records.
///
/// # Errors
///
/// Returns an error if:
/// - The body is not a JSON array of rows of the expected shape
/// - Two rows share the same id
pub fn decode_collection(kind: EntityKind, body: &[u8]) -> Result<Vec<EntityRecord>, DomainError> {
    let records: Vec<EntityRecord> = match kind {
        EntityKind::Debater => decode_rows::<DebaterRow>(kind, body)?,
        EntityKind::Institution => decode_rows::<InstitutionRow>(kind, body)?,
        EntityKind::Judge => decode_rows::<JudgeRow>(kind, body)?,
    };

    validate_unique_ids(kind, &records)?;
    Ok(records)
}

/// Validates that no two records in a collection share an id.
///
/// # Errors
///
/// Returns `DomainError::DuplicateEntityId` naming the first repeated id.
pub fn validate_unique_ids(kind: EntityKind, records: &[EntityRecord]) -> Result<(), DomainError> {
    let mut seen: HashSet<EntityId> = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(DomainError::DuplicateEntityId {
                kind,
                id: record.id,
            });
        }
    }
    Ok(())
}
