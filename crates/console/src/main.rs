// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod oneshot;
mod tui;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tab_admin_client::{ClientConfig, DEFAULT_API_URL, HttpEntityApi};
use tab_admin_domain::{EntityId, EntityKind};
use tracing::info;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// Tab Admin - merge duplicate debaters and judges, confirm institutions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the tournament REST API
    #[arg(long, env = "TAB_ADMIN_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "TAB_ADMIN_TIMEOUT_SECS", default_value_t = 30, global = true)]
    timeout_secs: u64,

    /// Append logs to this file. The interactive grid logs nowhere else.
    #[arg(long, env = "TAB_ADMIN_LOG_FILE", global = true)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Browse and act on entities interactively (default)
    Tui {
        /// Screen to open first
        #[arg(long, default_value = "debater")]
        kind: EntityKind,
    },
    /// Print an entity collection
    List {
        /// debater, institution, or judge
        kind: EntityKind,
        /// Column to sort by (key or header)
        #[arg(long)]
        sort: Option<String>,
        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Replace one record with another
    Merge {
        /// debater or judge
        kind: EntityKind,
        /// The id that goes away
        old: EntityId,
        /// The id that remains
        new: EntityId,
    },
    /// Submit a batch of records
    Confirm {
        /// institution
        kind: EntityKind,
        /// Ids in order; the first is the primary
        #[arg(required = true)]
        ids: Vec<EntityId>,
    },
}

impl Args {
    fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui {
            kind: EntityKind::Debater,
        })
    }

    fn client_config(&self) -> Result<ClientConfig> {
        ClientConfig::new(&self.api_url, Duration::from_secs(self.timeout_secs))
            .wrap_err("Invalid --api-url")
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the verbosity flags. The interactive grid owns the
/// terminal, so without a log file its logs are discarded.
fn init_logging(args: &Args, interactive: bool) -> Result<()> {
    let filter: EnvFilter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(args.verbosity.log_level_filter().as_trace().to_string())
    });
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match (&args.log_file, interactive) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .wrap_err_with(|| format!("Failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        (None, true) => builder.with_writer(std::io::sink).init(),
        (None, false) => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    let command: Command = args.command();
    init_logging(&args, matches!(command, Command::Tui { .. }))?;

    let config: ClientConfig = args.client_config()?;
    info!(api_url = %config.base_url, timeout_secs = args.timeout_secs, "Starting tab-admin");
    let api: HttpEntityApi = HttpEntityApi::new(config)?;

    match command {
        Command::Tui { kind } => tui::run(api, kind).await,
        Command::List {
            kind,
            sort,
            desc,
            json,
        } => oneshot::list(api, kind, sort.as_deref(), desc, json).await,
        Command::Merge { kind, old, new } => oneshot::merge(api, kind, old, new).await,
        Command::Confirm { kind, ids } => oneshot::confirm(api, kind, &ids).await,
    }
}
