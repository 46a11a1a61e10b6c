// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Async driver for one entity screen.
//!
//! The controller owns a [`ViewState`] and an [`EntityApi`]. Every user
//! operation is turned into a [`Command`], applied under the state lock, and
//! any resulting [`Effect`] is performed with the lock released. Completions
//! are fed back as commands; the state machine decides whether they are
//! still current.

use crate::api::EntityApi;
use crate::error::ClientError;
use crate::notice::Notice;
use tab_admin::{
    ActionTicket, Command, CoreError, Effect, LoadTicket, TransitionResult, ViewState, apply,
};
use std::sync::Arc;
use tab_admin_domain::{ActionRequest, EntityId, EntityKind, ScreenConfig};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

/// What became of a triggered bulk action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The server accepted the action; the selection was cleared and a
    /// reload started.
    Succeeded(ActionRequest),
    /// The selection does not fit the action. Nothing was sent.
    Rejected(Notice),
    /// Another action from this screen is still outstanding. Nothing was sent.
    Busy,
    /// The request failed. The selection is unchanged.
    Failed(Notice),
    /// The screen was unmounted before the answer arrived.
    Abandoned,
}

impl ActionOutcome {
    /// The notice to show the user, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Rejected(notice) | Self::Failed(notice) => Some(notice),
            Self::Succeeded(_) | Self::Busy | Self::Abandoned => None,
        }
    }
}

/// Drives one screen against an [`EntityApi`].
#[derive(Debug)]
pub struct ScreenController<A> {
    api: A,
    screen: ScreenConfig,
    state: Mutex<ViewState>,
}

impl<A: EntityApi> ScreenController<A> {
    /// Creates an unmounted controller for `screen`.
    pub fn new(api: A, screen: ScreenConfig) -> Self {
        Self {
            api,
            screen,
            state: Mutex::new(ViewState::new(screen)),
        }
    }

    /// The API this controller talks to.
    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    const fn kind(&self) -> EntityKind {
        self.screen.kind
    }

    /// A copy of the current state, for rendering.
    pub async fn snapshot(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    /// Activates the screen and loads its collection.
    ///
    /// Returns once the load, and any load queued behind it, has finished.
    ///
    /// # Errors
    ///
    /// Never fails today; the `Result` mirrors the other operations.
    pub async fn mount(&self) -> Result<(), CoreError> {
        info!(kind = %self.kind(), "Mounting screen");
        let effect: Option<Effect> = self.dispatch(Command::Mount).await?;
        self.drive(effect).await;
        Ok(())
    }

    /// Deactivates the screen. Answers to outstanding requests are ignored.
    ///
    /// # Errors
    ///
    /// Never fails today; the `Result` mirrors the other operations.
    pub async fn unmount(&self) -> Result<(), CoreError> {
        info!(kind = %self.kind(), "Unmounting screen");
        self.dispatch(Command::Unmount).await?;
        Ok(())
    }

    /// Refetches the collection, or queues a refetch behind the one in flight.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotMounted` if the screen is not active.
    pub async fn load(&self) -> Result<(), CoreError> {
        let effect: Option<Effect> = self.dispatch(Command::RequestLoad).await?;
        if effect.is_none() {
            debug!(kind = %self.kind(), "Load already in flight; reload queued");
        }
        self.drive(effect).await;
        Ok(())
    }

    /// Ticks or unticks a row.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownEntity` if no displayed row has this id.
    pub async fn toggle(&self, id: EntityId) -> Result<(), CoreError> {
        self.dispatch(Command::Toggle(id)).await?;
        debug!(kind = %self.kind(), id = id.value(), "Selection toggled");
        Ok(())
    }

    /// Unticks every row.
    ///
    /// # Errors
    ///
    /// Never fails today; the `Result` mirrors the other operations.
    pub async fn clear_selection(&self) -> Result<(), CoreError> {
        self.dispatch(Command::ClearSelection).await?;
        Ok(())
    }

    /// Cycles the sort on a column: ascending, descending, unsorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the column is unknown or not sortable.
    pub async fn sort_by(&self, column: &str) -> Result<(), CoreError> {
        self.dispatch(Command::SortBy(column.to_string())).await?;
        Ok(())
    }

    /// Validates the selection and sends the screen's bulk action.
    ///
    /// On success the selection is cleared and the collection reloaded
    /// before this returns.
    pub async fn execute(&self) -> ActionOutcome {
        let effect: Option<Effect> = match self.dispatch(Command::Execute).await {
            Ok(effect) => effect,
            Err(CoreError::ActionInFlight) => {
                debug!(kind = %self.kind(), "Action already in flight");
                return ActionOutcome::Busy;
            }
            Err(err) => {
                info!(kind = %self.kind(), reason = %err, "Action rejected");
                return ActionOutcome::Rejected(Notice::warning(err.to_string()));
            }
        };
        self.drive(effect)
            .await
            .unwrap_or(ActionOutcome::Abandoned)
    }

    /// Applies `command` under the lock and returns the resulting effect.
    async fn dispatch(&self, command: Command) -> Result<Option<Effect>, CoreError> {
        let mut state: MutexGuard<'_, ViewState> = self.state.lock().await;
        let result: TransitionResult = apply(&state, command)?;
        *state = result.new_state;
        Ok(result.effect)
    }

    /// Performs effects until the state machine asks for nothing more.
    ///
    /// Returns the outcome of the first action performed, if any.
    async fn drive(&self, mut effect: Option<Effect>) -> Option<ActionOutcome> {
        let mut outcome: Option<ActionOutcome> = None;
        while let Some(next) = effect.take() {
            effect = match next {
                Effect::Fetch(ticket) => self.fetch(ticket).await,
                Effect::Submit { ticket, request } => {
                    let (result, follow_up): (ActionOutcome, Option<Effect>) =
                        self.submit(ticket, request).await;
                    outcome.get_or_insert(result);
                    follow_up
                }
            };
        }
        outcome
    }

    async fn fetch(&self, ticket: LoadTicket) -> Option<Effect> {
        let kind: EntityKind = self.kind();
        info!(kind = %kind, ticket = ticket.value(), "Loading collection");

        let command: Command = match self.api.fetch_collection(kind).await {
            Ok(records) => {
                info!(
                    kind = %kind,
                    ticket = ticket.value(),
                    count = records.len(),
                    "Collection loaded"
                );
                Command::LoadSucceeded { ticket, records }
            }
            Err(err) => {
                warn!(
                    kind = %kind,
                    ticket = ticket.value(),
                    status = ?err.status(),
                    error = %err,
                    "Failed to load collection; keeping previous rows"
                );
                Command::LoadFailed { ticket }
            }
        };

        self.complete(command, ticket.value()).await
    }

    async fn submit(
        &self,
        ticket: ActionTicket,
        request: ActionRequest,
    ) -> (ActionOutcome, Option<Effect>) {
        let kind: EntityKind = self.kind();
        info!(
            kind = %kind,
            ticket = ticket.value(),
            count = request.len(),
            action = self.screen.action.verb(),
            "Sending action"
        );

        let (outcome, command): (ActionOutcome, Command) = match self.api.submit(&request).await
        {
            Ok(()) => {
                info!(
                    kind = %kind,
                    ticket = ticket.value(),
                    "{} {}",
                    self.screen.title,
                    self.screen.action.past_tense()
                );
                (
                    ActionOutcome::Succeeded(request),
                    Command::ActionSucceeded { ticket },
                )
            }
            Err(err) => {
                error!(
                    kind = %kind,
                    ticket = ticket.value(),
                    status = ?err.status(),
                    error = %err,
                    "Action failed; selection kept"
                );
                (
                    ActionOutcome::Failed(failure_notice(&self.screen, &err)),
                    Command::ActionFailed { ticket },
                )
            }
        };

        match self.dispatch(command).await {
            Ok(effect) => (outcome, effect),
            Err(err) => {
                debug!(kind = %kind, ticket = ticket.value(), reason = %err, "Ignoring action answer");
                (ActionOutcome::Abandoned, None)
            }
        }
    }

    async fn complete(&self, command: Command, ticket: u64) -> Option<Effect> {
        match self.dispatch(command).await {
            Ok(effect) => effect,
            Err(err) => {
                debug!(kind = %self.kind(), ticket = ticket, reason = %err, "Ignoring load answer");
                None
            }
        }
    }
}

impl<A: EntityApi + 'static> ScreenController<A> {
    /// Activates the screen before returning and loads its collection in a
    /// background task.
    ///
    /// Callers that mount and unmount in sequence see those transitions in
    /// the same order, whatever the fetch does afterwards.
    ///
    /// # Errors
    ///
    /// Never fails today; the `Result` mirrors the other operations.
    pub async fn mount_detached(self: Arc<Self>) -> Result<(), CoreError> {
        info!(kind = %self.kind(), "Mounting screen");
        let effect: Option<Effect> = self.dispatch(Command::Mount).await?;
        tokio::spawn(async move {
            self.drive(effect).await;
        });
        Ok(())
    }
}

fn failure_notice(screen: &ScreenConfig, err: &ClientError) -> Notice {
    Notice::error(format!(
        "Failed to {} {}. {err}",
        screen.action.verb(),
        screen.kind.plural()
    ))
}
