// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CellValue, DomainError, EntityId, EntityKind, EntityRecord};
use std::str::FromStr;

#[test]
fn test_entity_kind_paths() {
    assert_eq!(EntityKind::Debater.resource(), "debater");
    assert_eq!(EntityKind::Debater.list_path(), "teams-speaks-rounds");
    assert_eq!(EntityKind::Institution.list_path(), "teams-list");
    assert_eq!(EntityKind::Judge.list_path(), "prelims-breaks-tournaments");
    for kind in EntityKind::ALL {
        assert_eq!(kind.action_path(), "replace");
    }
}

#[test]
fn test_entity_kind_parses_singular_and_plural() {
    assert_eq!(EntityKind::from_str("debater"), Ok(EntityKind::Debater));
    assert_eq!(EntityKind::from_str("Judges"), Ok(EntityKind::Judge));
    assert_eq!(
        EntityKind::from_str(" institutions "),
        Ok(EntityKind::Institution)
    );
    assert!(matches!(
        EntityKind::from_str("coach"),
        Err(DomainError::UnknownEntityKind(_))
    ));
}

#[test]
fn test_entity_id_parses_and_displays() {
    let id: EntityId = "42".parse().unwrap();
    assert_eq!(id, EntityId::new(42));
    assert_eq!(id.to_string(), "42");
    assert!("forty-two".parse::<EntityId>().is_err());
}

#[test]
fn test_cell_display() {
    assert_eq!(CellValue::Text(String::from("Ada")).display(), "Ada");
    assert_eq!(CellValue::Integer(12).display(), "12");
    assert_eq!(CellValue::Decimal(75.5).display(), "75.5");
    assert_eq!(CellValue::Decimal(80.0).display(), "80");
    assert_eq!(
        CellValue::List(vec![String::from("A"), String::from("B")]).display(),
        "A, B"
    );
    assert_eq!(CellValue::Empty.display(), "");
}

#[test]
fn test_cell_emptiness() {
    assert!(CellValue::Empty.is_empty());
    assert!(CellValue::List(Vec::new()).is_empty());
    assert!(CellValue::Text(String::new()).is_empty());
    assert!(!CellValue::Integer(0).is_empty());
}

#[test]
fn test_record_exposes_id_as_cell() {
    let record: EntityRecord = EntityRecord::new(EntityId::new(3))
        .with("name", CellValue::Text(String::from("Hart House")));

    assert_eq!(record.cell("id"), CellValue::Integer(3));
    assert_eq!(
        record.cell("name"),
        CellValue::Text(String::from("Hart House"))
    );
    assert_eq!(record.cell("missing"), CellValue::Empty);
}
