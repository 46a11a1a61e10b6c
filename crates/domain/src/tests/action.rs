// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::selection_of;
use crate::{ActionKind, ActionRequest, ArityRule, DomainError, EntityId, EntityKind};

#[test]
fn test_merge_requires_exactly_two() {
    assert_eq!(ActionKind::Merge.arity(), ArityRule::Exactly(2));
    assert_eq!(ActionKind::Confirm.arity(), ArityRule::AtLeast(1));
}

#[test]
fn test_exact_rule_rejects_too_few() {
    for selected in [0, 1] {
        let result: Result<(), DomainError> =
            ArityRule::Exactly(2).check(EntityKind::Debater, selected);
        assert_eq!(
            result,
            Err(DomainError::SelectionTooSmall {
                kind: EntityKind::Debater,
                required: 2,
                selected,
            })
        );
    }
}

#[test]
fn test_exact_rule_rejects_too_many() {
    let result: Result<(), DomainError> = ArityRule::Exactly(2).check(EntityKind::Judge, 3);
    assert_eq!(
        result,
        Err(DomainError::SelectionTooLarge {
            kind: EntityKind::Judge,
            allowed: 2,
            selected: 3,
        })
    );
}

#[test]
fn test_at_least_rule_has_no_upper_bound() {
    let rule: ArityRule = ArityRule::AtLeast(1);
    assert!(rule.check(EntityKind::Institution, 0).is_err());
    assert!(rule.check(EntityKind::Institution, 1).is_ok());
    assert!(rule.check(EntityKind::Institution, 40).is_ok());
}

#[test]
fn test_merge_request_uses_selection_order() {
    let request: ActionRequest =
        ActionRequest::build(EntityKind::Debater, ActionKind::Merge, &selection_of(&[2, 1]))
            .unwrap();

    assert_eq!(
        request,
        ActionRequest::Pairwise {
            kind: EntityKind::Debater,
            old: EntityId::new(2),
            new: EntityId::new(1),
        }
    );
    assert_eq!(request.ids(), vec![EntityId::new(2), EntityId::new(1)]);
}

#[test]
fn test_merge_request_body_matches_wire_format() {
    let request: ActionRequest =
        ActionRequest::build(EntityKind::Debater, ActionKind::Merge, &selection_of(&[2, 1]))
            .unwrap();
    let body: serde_json::Value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        body,
        serde_json::json!({ "oldDebaterId": 2, "newDebaterId": 1 })
    );
}

#[test]
fn test_judge_merge_body_uses_judge_keys() {
    let request: ActionRequest =
        ActionRequest::build(EntityKind::Judge, ActionKind::Merge, &selection_of(&[10, 11]))
            .unwrap();
    let body: serde_json::Value = serde_json::to_value(&request).unwrap();

    assert_eq!(body, serde_json::json!({ "oldJudgeId": 10, "newJudgeId": 11 }));
}

#[test]
fn test_confirm_body_lists_every_id_in_order() {
    let request: ActionRequest = ActionRequest::build(
        EntityKind::Institution,
        ActionKind::Confirm,
        &selection_of(&[5, 3, 9]),
    )
    .unwrap();
    let body: serde_json::Value = serde_json::to_value(&request).unwrap();

    assert_eq!(body, serde_json::json!({ "institutionIds": [5, 3, 9] }));
    assert_eq!(request.len(), 3);
    assert_eq!(request.kind(), EntityKind::Institution);
}

#[test]
fn test_invalid_selection_builds_nothing() {
    let too_few: Result<ActionRequest, DomainError> =
        ActionRequest::build(EntityKind::Debater, ActionKind::Merge, &selection_of(&[2]));
    assert!(matches!(
        too_few,
        Err(DomainError::SelectionTooSmall { selected: 1, .. })
    ));

    let too_many: Result<ActionRequest, DomainError> = ActionRequest::build(
        EntityKind::Debater,
        ActionKind::Merge,
        &selection_of(&[1, 2, 3]),
    );
    assert!(matches!(
        too_many,
        Err(DomainError::SelectionTooLarge { selected: 3, .. })
    ));

    let none: Result<ActionRequest, DomainError> = ActionRequest::build(
        EntityKind::Institution,
        ActionKind::Confirm,
        &selection_of(&[]),
    );
    assert!(matches!(
        none,
        Err(DomainError::SelectionTooSmall { required: 1, .. })
    ));
}
