// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Effect, LoadTicket, TransitionResult, ViewState, apply};
use tab_admin_domain::{CellValue, EntityId, EntityRecord, ScreenConfig};

pub fn create_test_records(ids: &[i64]) -> Vec<EntityRecord> {
    ids.iter()
        .map(|id| {
            EntityRecord::new(EntityId::new(*id))
                .with("lastName", CellValue::Text(format!("Speaker {id}")))
                .with("roundsDebated", CellValue::Integer(*id * 3))
        })
        .collect()
}

/// Mounts the screen and completes its initial load with `ids`.
pub fn create_loaded_state(screen: ScreenConfig, ids: &[i64]) -> ViewState {
    let mounted: TransitionResult = apply(&ViewState::new(screen), Command::Mount).unwrap();
    let Some(Effect::Fetch(ticket)) = mounted.effect else {
        panic!("mount should start a fetch, got {:?}", mounted.effect);
    };
    complete_load(&mounted.new_state, ticket, ids).new_state
}

pub fn complete_load(state: &ViewState, ticket: LoadTicket, ids: &[i64]) -> TransitionResult {
    apply(
        state,
        Command::LoadSucceeded {
            ticket,
            records: create_test_records(ids),
        },
    )
    .unwrap()
}

pub fn toggle_all(state: &ViewState, ids: &[i64]) -> ViewState {
    ids.iter().fold(state.clone(), |current, id| {
        apply(&current, Command::Toggle(EntityId::new(*id)))
            .unwrap()
            .new_state
    })
}

pub fn selected_ids(state: &ViewState) -> Vec<i64> {
    state
        .selection
        .as_slice()
        .iter()
        .map(EntityId::value)
        .collect()
}
