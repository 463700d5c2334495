//! # playbook-panel — automation settings panel on a terminal
//!
//! Composition root that wires the in-memory adapters to the panel and
//! drives it from stdin, one command per line.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize logging (to stderr; stdout carries the panel)
//! - Load the seed playbook, its team members and the message catalog
//! - Construct the playbook service and the snapshot bus
//! - Mount the panel with a spawning dispatcher as its intent sink
//! - Run the event loop: stdin commands, incoming snapshots, debounced
//!   channel-settings commits
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod command;
mod config;
mod render;
mod session;

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

use playbooks_adapter_memory::{
    CatalogLocalizer, InMemoryPlaybookRepository, InMemoryUserDirectory, Seed,
};
use playbooks_app::dispatch::SpawnDispatcher;
use playbooks_app::panel::AutomationPanel;
use playbooks_app::services::playbook_service::PlaybookService;
use playbooks_app::snapshot_bus::SnapshotBus;

use crate::command::Command;
use crate::config::Config;

const DEMO_SEED: &str = include_str!("../demo-seed.toml");

/// How long to wait for the last commit to come back on quit.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

/// Resolves when the pending channel commit is due; never without one.
async fn commit_due(due: Option<Instant>) {
    match due {
        Some(due) => tokio::time::sleep_until(tokio::time::Instant::from_std(due)).await,
        None => std::future::pending().await,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .with_writer(std::io::stderr)
        .init();

    // Seed and adapters
    let seed = match &config.seed.path {
        Some(path) => Seed::load(path)?,
        None => Seed::from_toml_str(DEMO_SEED)?,
    };
    let localizer = match &config.panel.locale_catalog {
        Some(path) => CatalogLocalizer::load(path)?,
        None => CatalogLocalizer::default(),
    };
    let directory = InMemoryUserDirectory::new(seed.users);

    // Snapshot bus and service
    let bus = SnapshotBus::new(64);
    let mut snapshots = bus.subscribe();
    let service = Arc::new(PlaybookService::new(
        InMemoryPlaybookRepository::default(),
        bus,
    ));
    let playbook = service.create_playbook(seed.playbook).await?;
    tracing::info!(playbook_id = %playbook.id, "playbook ready");

    // Panel
    let dispatcher = SpawnDispatcher::on_current_runtime(Arc::clone(&service))?;
    let mut panel = AutomationPanel::new(
        playbook,
        dispatcher,
        directory,
        localizer,
        config.panel_options(),
    );
    print!("{}", render::panel(panel.snapshot(), &panel.view()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        let output =
                            session::execute(&mut panel, &service, command, Instant::now()).await?;
                        print!("{output}");
                    }
                    Err(command::CommandError::Empty) => {}
                    Err(err) => println!("{err}"),
                }
            }
            snapshot = snapshots.recv() => match snapshot {
                Ok(playbook) if playbook.id == panel.snapshot().id => {
                    if playbook == *panel.snapshot() {
                        continue;
                    }
                    panel.receive_snapshot(playbook);
                    print!("{}", render::panel(panel.snapshot(), &panel.view()));
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "snapshot subscriber lagged");
                }
                Err(RecvError::Closed) => break,
            },
            () = commit_due(panel.next_commit_due()) => {
                panel.flush_due(Instant::now());
            }
        }
    }

    if panel.flush() {
        match tokio::time::timeout(SHUTDOWN_GRACE, snapshots.recv()).await {
            Ok(Ok(_)) => tracing::debug!("last commit stored"),
            _ => tracing::warn!("pending channel settings may not have been stored"),
        }
    }

    Ok(())
}
