use crate::{
    error::CliError,
    shutdown::{ExitCode, ShutdownCoordinator},
};
use clap::Parser;
use connectors::{sink::WebhookPublisher, source::HttpRecordSource};
use relay_core::{config::RelayConfig, store::file_store::FileCursorStore};
use relay_runtime::{driver::SyncDriver, scheduler};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{Level, info};

mod error;
mod shutdown;

#[derive(Parser)]
#[command(
    name = "changelog-relay",
    version = "0.1.0",
    about = "Relays new changelog records from an HTTP API to a chat webhook"
)]
struct Cli {
    /// Run a single synchronization pass and exit.
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();
    let config = RelayConfig::from_env()?;
    let driver = build_driver(&config);

    if cli.once || config.run_once {
        let summary = driver.run_pass().await;
        info!(
            "Pass complete: {} fetched, {} published, {} failed",
            summary.fetched, summary.published, summary.failed
        );
        return Ok(());
    }

    let cancel = CancellationToken::new();
    let coordinator = ShutdownCoordinator::new(cancel.clone());
    coordinator.register_handlers();

    scheduler::run_loop(&driver, config.poll_interval, cancel).await;

    if coordinator.is_shutdown_requested() {
        std::process::exit(ExitCode::ShutdownRequested.as_i32());
    }
    Ok(())
}

fn build_driver(config: &RelayConfig) -> SyncDriver {
    let source = HttpRecordSource::new(
        config.api_url.clone(),
        config.basic_auth.clone(),
        config.request_timeout,
    );
    let publisher = WebhookPublisher::new(config.webhook_url.clone(), config.request_timeout);
    let store = FileCursorStore::new(config.cursor_path.clone());

    SyncDriver::new(
        Arc::new(source),
        Arc::new(publisher),
        Arc::new(store),
        config.post_history_on_first_run,
    )
}
