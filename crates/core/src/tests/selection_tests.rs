// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_loaded_state, selected_ids, toggle_all};
use crate::{Command, CoreError, TransitionResult, ViewState, apply};
use tab_admin_domain::{DEBATERS, EntityId, HighlightRole, INSTITUTIONS};

#[test]
fn test_selection_starts_empty_after_mount() {
    let state: ViewState = create_loaded_state(DEBATERS, &[1, 2, 3]);
    assert!(state.selection.is_empty());
    assert!(!state.can_trigger_action());
}

#[test]
fn test_toggle_records_selection_order() {
    let state: ViewState = toggle_all(&create_loaded_state(DEBATERS, &[1, 2, 3]), &[2, 1]);

    assert_eq!(selected_ids(&state), vec![2, 1]);
    assert_eq!(state.classify(EntityId::new(2)), HighlightRole::Role1);
    assert_eq!(state.classify(EntityId::new(1)), HighlightRole::Role2);
    assert_eq!(state.classify(EntityId::new(3)), HighlightRole::None);
}

#[test]
fn test_toggle_twice_unselects() {
    let state: ViewState = toggle_all(&create_loaded_state(DEBATERS, &[1, 2, 3]), &[2, 1, 2]);
    assert_eq!(selected_ids(&state), vec![1]);
    assert_eq!(state.classify(EntityId::new(1)), HighlightRole::Role1);
}

#[test]
fn test_toggle_rejects_id_outside_collection() {
    let state: ViewState = create_loaded_state(DEBATERS, &[1, 2]);
    let result: Result<TransitionResult, CoreError> =
        apply(&state, Command::Toggle(EntityId::new(99)));

    assert_eq!(result, Err(CoreError::UnknownEntity(EntityId::new(99))));
}

#[test]
fn test_clear_selection() {
    let state: ViewState = toggle_all(&create_loaded_state(INSTITUTIONS, &[1, 2, 3]), &[3, 2]);
    let cleared: ViewState = apply(&state, Command::ClearSelection).unwrap().new_state;

    assert!(cleared.selection.is_empty());
    assert_eq!(cleared.records, state.records);
}

#[test]
fn test_batch_screen_marks_every_later_selection() {
    let state: ViewState = toggle_all(&create_loaded_state(INSTITUTIONS, &[1, 2, 3, 4]), &[3, 1, 4]);

    assert_eq!(state.classify(EntityId::new(3)), HighlightRole::Role1);
    assert_eq!(state.classify(EntityId::new(1)), HighlightRole::Role2);
    assert_eq!(state.classify(EntityId::new(4)), HighlightRole::Role2);
    assert_eq!(state.classify(EntityId::new(2)), HighlightRole::None);
}

#[test]
fn test_merge_screen_marks_only_second_selection() {
    let state: ViewState = toggle_all(&create_loaded_state(DEBATERS, &[1, 2, 3]), &[1, 2, 3]);

    assert_eq!(state.classify(EntityId::new(2)), HighlightRole::Role2);
    assert_eq!(state.classify(EntityId::new(3)), HighlightRole::None);
}

#[test]
fn test_trigger_available_once_something_is_selected() {
    let state: ViewState = toggle_all(&create_loaded_state(DEBATERS, &[1, 2]), &[1]);
    assert!(state.can_trigger_action());
}
