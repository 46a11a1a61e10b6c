// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{
    ActionPhase, ActionTicket, Effect, LoadPhase, LoadTicket, TransitionResult, ViewState,
};
use tab_admin_domain::{ActionRequest, Column, EntityRecord, SortSpec};

/// Applies a command to the current view state, producing a new state and
/// the work the driver must do next.
///
/// # Arguments
///
/// * `state` - The current view state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and an optional effect
/// * `Err(CoreError)` if the command is invalid; the state is unchanged
///
/// # Errors
///
/// Returns an error if:
/// - The view is not mounted and the command needs it to be
/// - A toggled id is not in the displayed collection
/// - The selection does not satisfy the action's arity rule
/// - An action is triggered while another is outstanding
/// - A completion does not match the outstanding request
/// - A sort names an unknown or unsortable column
pub fn apply(state: &ViewState, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::Mount => Ok(mount(state)),
        Command::Unmount => Ok(unmount(state)),
        Command::RequestLoad => {
            if !state.mounted {
                return Err(CoreError::NotMounted);
            }
            let mut new_state: ViewState = state.clone();
            let effect: Option<Effect> = request_load(&mut new_state);
            Ok(TransitionResult { new_state, effect })
        }
        Command::LoadSucceeded { ticket, records } => load_finished(state, ticket, Some(records)),
        Command::LoadFailed { ticket } => load_finished(state, ticket, None),
        Command::Toggle(id) => {
            if !state.has_record(id) {
                return Err(CoreError::UnknownEntity(id));
            }
            let mut new_state: ViewState = state.clone();
            new_state.selection.toggle(id);
            Ok(TransitionResult {
                new_state,
                effect: None,
            })
        }
        Command::ClearSelection => {
            let mut new_state: ViewState = state.clone();
            new_state.selection.clear();
            Ok(TransitionResult {
                new_state,
                effect: None,
            })
        }
        Command::SortBy(name) => {
            let column: Column = state.screen.sortable_column(&name)?;
            let mut new_state: ViewState = state.clone();
            new_state.sort = SortSpec::cycle(state.sort, column);
            Ok(TransitionResult {
                new_state,
                effect: None,
            })
        }
        Command::Execute => execute(state),
        Command::ActionSucceeded { ticket } => action_finished(state, ticket, true),
        Command::ActionFailed { ticket } => action_finished(state, ticket, false),
    }
}

fn mount(state: &ViewState) -> TransitionResult {
    if state.mounted {
        return TransitionResult {
            new_state: state.clone(),
            effect: None,
        };
    }

    let mut new_state: ViewState = state.clone();
    new_state.mounted = true;
    new_state.selection.clear();
    let effect: Option<Effect> = request_load(&mut new_state);
    TransitionResult { new_state, effect }
}

fn unmount(state: &ViewState) -> TransitionResult {
    // Dropping the phases orphans any outstanding tickets; their completions
    // are rejected as stale.
    let mut new_state: ViewState = state.clone();
    new_state.mounted = false;
    new_state.load = LoadPhase::Idle;
    new_state.action = ActionPhase::Idle;
    new_state.selection.clear();
    TransitionResult {
        new_state,
        effect: None,
    }
}

/// Starts a fetch, or queues one behind the fetch already outstanding.
fn request_load(state: &mut ViewState) -> Option<Effect> {
    match state.load {
        LoadPhase::InFlight { ticket, .. } => {
            state.load = LoadPhase::InFlight {
                ticket,
                reload_queued: true,
            };
            None
        }
        LoadPhase::Idle => {
            let ticket: LoadTicket = state.issue_load_ticket();
            state.load = LoadPhase::InFlight {
                ticket,
                reload_queued: false,
            };
            Some(Effect::Fetch(ticket))
        }
    }
}

fn load_finished(
    state: &ViewState,
    ticket: LoadTicket,
    records: Option<Vec<EntityRecord>>,
) -> Result<TransitionResult, CoreError> {
    let LoadPhase::InFlight {
        ticket: outstanding,
        reload_queued,
    } = state.load
    else {
        return Err(CoreError::StaleCompletion);
    };
    if outstanding != ticket {
        return Err(CoreError::StaleCompletion);
    }

    let mut new_state: ViewState = state.clone();
    new_state.load = LoadPhase::Idle;

    if let Some(records) = records {
        // The collection and the selection are replaced together.
        new_state.records = records;
        new_state.selection.clear();
        new_state.loaded = true;
    }

    let effect: Option<Effect> = if reload_queued {
        request_load(&mut new_state)
    } else {
        None
    };

    Ok(TransitionResult { new_state, effect })
}

fn execute(state: &ViewState) -> Result<TransitionResult, CoreError> {
    if !state.mounted {
        return Err(CoreError::NotMounted);
    }
    if state.is_sending() {
        return Err(CoreError::ActionInFlight);
    }

    let request: ActionRequest =
        ActionRequest::build(state.screen.kind, state.screen.action, &state.selection)?;

    let mut new_state: ViewState = state.clone();
    let ticket: ActionTicket = new_state.issue_action_ticket();
    new_state.action = ActionPhase::Sending {
        ticket,
        request: request.clone(),
    };

    Ok(TransitionResult {
        new_state,
        effect: Some(Effect::Submit { ticket, request }),
    })
}

fn action_finished(
    state: &ViewState,
    ticket: ActionTicket,
    succeeded: bool,
) -> Result<TransitionResult, CoreError> {
    match &state.action {
        ActionPhase::Sending {
            ticket: outstanding,
            ..
        } if *outstanding == ticket => {}
        _ => return Err(CoreError::StaleCompletion),
    }

    let mut new_state: ViewState = state.clone();
    new_state.action = ActionPhase::Idle;

    if !succeeded {
        return Ok(TransitionResult {
            new_state,
            effect: None,
        });
    }

    new_state.selection.clear();
    let effect: Option<Effect> = request_load(&mut new_state);
    Ok(TransitionResult { new_state, effect })
}
