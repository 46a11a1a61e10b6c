// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Interactive grid with one tab per entity kind.

pub mod app;
pub mod render;

use crate::tui::app::{App, Intent, UiEvent, handle_key_event};
use crate::tui::render::render;
use color_eyre::{Result, eyre::Context};
use crossterm::event::{Event, EventStream, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tab_admin::CoreError;
use tab_admin_client::{ActionOutcome, EntityApi, Notice, ScreenController};
use tab_admin_domain::{EntityKind, ScreenConfig};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{info, warn};

const REFRESH_INTERVAL: Duration = Duration::from_millis(200);

pub(crate) type Controllers<A> = Vec<Arc<ScreenController<A>>>;

/// Runs the grid until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub async fn run<A>(api: A, start: EntityKind) -> Result<()>
where
    A: EntityApi + Clone + 'static,
{
    let controllers: Controllers<A> = create_controllers(&api);
    let (tx, rx): (UnboundedSender<UiEvent>, UnboundedReceiver<UiEvent>) = unbounded_channel();
    let mut app: App = App::new(start);

    controller(&controllers, start).mount_detached().await?;

    enable_raw_mode().wrap_err("enable raw mode")?;
    let mut stdout: Stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).wrap_err("enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).wrap_err("create terminal")?;

    let result: Result<()> = event_loop(&mut terminal, &mut app, &controllers, &tx, rx).await;

    disable_raw_mode().wrap_err("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).wrap_err("leave alternate screen")?;
    info!("Interactive session ended");
    result
}

/// One controller per entity kind, in tab order.
pub(crate) fn create_controllers<A: EntityApi + Clone>(api: &A) -> Controllers<A> {
    EntityKind::ALL
        .iter()
        .map(|kind| {
            Arc::new(ScreenController::new(
                api.clone(),
                *ScreenConfig::for_kind(*kind),
            ))
        })
        .collect()
}

pub(crate) fn controller<A>(controllers: &Controllers<A>, kind: EntityKind) -> Arc<ScreenController<A>> {
    let index: usize = EntityKind::ALL
        .iter()
        .position(|candidate| *candidate == kind)
        .unwrap_or_default();
    Arc::clone(&controllers[index])
}

async fn event_loop<A>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    controllers: &Controllers<A>,
    tx: &UnboundedSender<UiEvent>,
    mut rx: UnboundedReceiver<UiEvent>,
) -> Result<()>
where
    A: EntityApi + 'static,
{
    let mut events: EventStream = EventStream::new();
    let mut refresh = tokio::time::interval(REFRESH_INTERVAL);

    loop {
        for screen in controllers {
            app.update_view(screen.snapshot().await);
        }
        terminal
            .draw(|frame| render(frame, app))
            .wrap_err("draw frame")?;

        tokio::select! {
            _ = refresh.tick() => {}
            Some(event) = rx.recv() => app.handle_ui_event(event),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    let intent: Intent = handle_key_event(app, key);
                    if intent == Intent::Quit {
                        return Ok(());
                    }
                    perform(intent, controllers, tx).await;
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err).wrap_err("read terminal event"),
                None => return Ok(()),
            },
        }
    }
}

/// Starts the work an intent asks for.
///
/// Calls that touch the network run in their own task so the grid keeps
/// drawing; selection, sort and mount changes are applied before returning.
pub(crate) async fn perform<A>(intent: Intent, controllers: &Controllers<A>, tx: &UnboundedSender<UiEvent>)
where
    A: EntityApi + 'static,
{
    let result: Result<(), CoreError> = match intent {
        Intent::None | Intent::Quit => Ok(()),
        Intent::Switch { from, to } => switch(controllers, from, to).await,
        Intent::Toggle(kind, id) => controller(controllers, kind).toggle(id).await,
        Intent::Sort(kind, column) => controller(controllers, kind).sort_by(column).await,
        Intent::ClearSelection(kind) => controller(controllers, kind).clear_selection().await,
        Intent::Reload(kind) => {
            let screen: Arc<ScreenController<A>> = controller(controllers, kind);
            tokio::spawn(async move {
                if let Err(err) = screen.load().await {
                    warn!(kind = %kind, error = %err, "Reload refused");
                }
            });
            Ok(())
        }
        Intent::Execute(kind) => {
            let screen: Arc<ScreenController<A>> = controller(controllers, kind);
            let tx: UnboundedSender<UiEvent> = tx.clone();
            tokio::spawn(async move {
                let outcome: ActionOutcome = screen.execute().await;
                // The receiver only goes away when the UI is shutting down.
                let _ = tx.send(UiEvent::Action(kind, outcome));
            });
            Ok(())
        }
    };

    if let Err(err) = result {
        let _ = tx.send(UiEvent::Notice(Notice::warning(err.to_string())));
    }
}

/// Unmounts `from` and mounts `to`, both before returning.
async fn switch<A>(
    controllers: &Controllers<A>,
    from: EntityKind,
    to: EntityKind,
) -> Result<(), CoreError>
where
    A: EntityApi + 'static,
{
    controller(controllers, from).unmount().await?;
    controller(controllers, to).mount_detached().await
}
