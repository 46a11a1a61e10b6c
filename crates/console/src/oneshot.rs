// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Non-interactive subcommands.
//!
//! These drive the same [`ScreenController`] the grid uses: mount, tick,
//! trigger. Validation and its messages are therefore identical.

use color_eyre::{Result, eyre::bail};
use tab_admin::ViewState;
use tab_admin_client::{ActionOutcome, EntityApi, ScreenController};
use tab_admin_domain::{ActionKind, EntityId, EntityKind, EntityRecord, ScreenConfig};
use tracing::info;

async fn mounted<A: EntityApi>(api: A, kind: EntityKind) -> Result<ScreenController<A>> {
    let controller: ScreenController<A> = ScreenController::new(api, *ScreenConfig::for_kind(kind));
    controller.mount().await?;
    if !controller.snapshot().await.loaded {
        bail!("Failed to load {}; see the log for details", kind.plural());
    }
    Ok(controller)
}

/// Prints a collection as a table or as JSON.
pub async fn list<A: EntityApi>(
    api: A,
    kind: EntityKind,
    sort: Option<&str>,
    descending: bool,
    json: bool,
) -> Result<()> {
    let controller: ScreenController<A> = mounted(api, kind).await?;
    if let Some(column) = sort {
        controller.sort_by(column).await?;
        if descending {
            controller.sort_by(column).await?;
        }
    }

    let state: ViewState = controller.snapshot().await;
    let rows: Vec<&EntityRecord> = state.rows();
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", format_table(&state.screen, &rows));
    }
    Ok(())
}

/// Merges `old` into `new`.
pub async fn merge<A: EntityApi>(
    api: A,
    kind: EntityKind,
    old: EntityId,
    new: EntityId,
) -> Result<()> {
    require_action(kind, ActionKind::Merge)?;
    run_action(api, kind, &[old, new]).await
}

/// Submits `ids` as one batch, the first being the primary.
pub async fn confirm<A: EntityApi>(api: A, kind: EntityKind, ids: &[EntityId]) -> Result<()> {
    require_action(kind, ActionKind::Confirm)?;
    run_action(api, kind, ids).await
}

const fn subcommand(action: ActionKind) -> &'static str {
    match action {
        ActionKind::Merge => "merge",
        ActionKind::Confirm => "confirm",
    }
}

fn require_action(kind: EntityKind, wanted: ActionKind) -> Result<()> {
    let screen: &ScreenConfig = ScreenConfig::for_kind(kind);
    if screen.action != wanted {
        bail!(
            "{} cannot be {}; use `{}` instead",
            screen.title,
            wanted.past_tense(),
            subcommand(screen.action)
        );
    }
    Ok(())
}

async fn run_action<A: EntityApi>(api: A, kind: EntityKind, ids: &[EntityId]) -> Result<()> {
    if let Some(id) = first_repeated(ids) {
        bail!("Id {id} was given more than once");
    }

    let controller: ScreenController<A> = mounted(api, kind).await?;
    for id in ids {
        controller.toggle(*id).await?;
    }

    match controller.execute().await {
        ActionOutcome::Succeeded(request) => {
            info!(kind = %kind, count = request.len(), "Action accepted");
            let screen: &ScreenConfig = ScreenConfig::for_kind(kind);
            println!(
                "{} {}: {}",
                screen.title,
                screen.action.past_tense(),
                join_ids(&request.ids())
            );
            Ok(())
        }
        ActionOutcome::Rejected(notice) | ActionOutcome::Failed(notice) => bail!(notice.message),
        ActionOutcome::Busy | ActionOutcome::Abandoned => {
            bail!("The {} action did not complete", kind.singular())
        }
    }
}

fn first_repeated(ids: &[EntityId]) -> Option<EntityId> {
    ids.iter()
        .enumerate()
        .find(|&(index, id)| ids[..index].contains(id))
        .map(|(_, id)| *id)
}

fn join_ids(ids: &[EntityId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}

/// Lays rows out as left-aligned, space-padded text columns.
pub fn format_table(screen: &ScreenConfig, rows: &[&EntityRecord]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|record| {
            screen
                .columns
                .iter()
                .map(|column| record.cell(column.key).display())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = screen
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            cells
                .iter()
                .map(|row| row[index].chars().count())
                .chain(std::iter::once(column.header.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let headers: Vec<String> = screen
        .columns
        .iter()
        .map(|column| column.header.to_string())
        .collect();

    let mut out: String = String::new();
    for line in std::iter::once(&headers).chain(cells.iter()) {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(padded.join("  ").trim_end());
        out.push('\n');
    }
    out
}
