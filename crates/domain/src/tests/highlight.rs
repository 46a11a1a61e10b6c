// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::selection_of;
use crate::{EntityId, HighlightPolicy, HighlightRole, Selection};

#[test]
fn test_empty_selection_highlights_nothing() {
    let selection: Selection = Selection::new();
    for policy in [
        HighlightPolicy::StrictSecondSlot,
        HighlightPolicy::AnyBeyondFirst,
    ] {
        assert_eq!(
            policy.classify(EntityId::new(1), &selection),
            HighlightRole::None
        );
    }
}

#[test]
fn test_first_selected_row_is_role1() {
    let selection: Selection = selection_of(&[2, 1]);
    let policy: HighlightPolicy = HighlightPolicy::StrictSecondSlot;

    assert_eq!(
        policy.classify(EntityId::new(2), &selection),
        HighlightRole::Role1
    );
    assert_eq!(
        policy.classify(EntityId::new(1), &selection),
        HighlightRole::Role2
    );
    assert_eq!(
        policy.classify(EntityId::new(3), &selection),
        HighlightRole::None
    );
}

#[test]
fn test_single_selection_has_no_role2() {
    let selection: Selection = selection_of(&[4]);
    let policy: HighlightPolicy = HighlightPolicy::AnyBeyondFirst;

    assert_eq!(
        policy.classify(EntityId::new(4), &selection),
        HighlightRole::Role1
    );
    assert_eq!(
        policy.classify(EntityId::new(5), &selection),
        HighlightRole::None
    );
}

#[test]
fn test_policies_diverge_on_third_selection() {
    let selection: Selection = selection_of(&[1, 2, 3]);

    assert_eq!(
        HighlightPolicy::StrictSecondSlot.classify(EntityId::new(3), &selection),
        HighlightRole::None
    );
    assert_eq!(
        HighlightPolicy::AnyBeyondFirst.classify(EntityId::new(3), &selection),
        HighlightRole::Role2
    );
}

#[test]
fn test_classify_is_repeatable() {
    let selection: Selection = selection_of(&[9, 8, 7]);
    let policy: HighlightPolicy = HighlightPolicy::AnyBeyondFirst;

    for id in [7, 8, 9, 10] {
        let first: HighlightRole = policy.classify(EntityId::new(id), &selection);
        let second: HighlightRole = policy.classify(EntityId::new(id), &selection);
        assert_eq!(first, second);
    }
}

#[test]
fn test_classify_follows_selection_changes() {
    let mut selection: Selection = selection_of(&[1, 2]);
    let policy: HighlightPolicy = HighlightPolicy::StrictSecondSlot;
    assert_eq!(
        policy.classify(EntityId::new(1), &selection),
        HighlightRole::Role1
    );

    selection.toggle(EntityId::new(1));
    assert_eq!(
        policy.classify(EntityId::new(1), &selection),
        HighlightRole::None
    );
    assert_eq!(
        policy.classify(EntityId::new(2), &selection),
        HighlightRole::Role1
    );
}
