//! `wfqueue` -- command-line front end for the workflow-queue client.
//!
//! Reads configuration from the environment (and `.env`), then runs one
//! subcommand and prints its result as pretty JSON on stdout.
//!
//! # Environment variables
//!
//! | Variable                         | Required | Default                     |
//! |----------------------------------|----------|-----------------------------|
//! | `WFQUEUE_API_URL`                | no       | `http://localhost:5000/api` |
//! | `WFQUEUE_API_TOKEN`              | no       | --                          |
//! | `WFQUEUE_REQUEST_TIMEOUT_SECS`   | no       | `30`                        |
//! | `WFQUEUE_POLL_INTERVAL_SECS`     | no       | `1`                         |
//! | `WFQUEUE_POLL_MAX_INTERVAL_SECS` | no       | `30`                        |

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wfqueue_client::{ClientConfig, HttpTransport, QueueClient};
use wfqueue_core::{PageNumber, StatusAction};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wfqueue=info,wfqueue_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env().context("invalid configuration")?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(token) = cli.token {
        config.api_token = Some(token);
    }

    tracing::debug!(api_url = %config.api_url, "Using queue API");

    let client = QueueClient::from_config(&config).context("failed to build queue client")?;

    run(&client, cli.command).await
}

async fn run(client: &QueueClient<HttpTransport>, command: Commands) -> Result<()> {
    match command {
        Commands::Playbooks => print_json(&client.list_playbooks().await?),
        Commands::Enqueue { workflow_id } => print_json(&client.enqueue(&workflow_id).await?),
        Commands::Status { execution_id } => print_json(&client.get_status(&execution_id).await?),
        Commands::List { all: true, .. } => print_json(&client.get_all_statuses().await?),
        Commands::List { page, all: false } => {
            let page = PageNumber::new(page)?;
            print_json(&client.get_status_page(page).await?)
        }
        Commands::Action {
            execution_id,
            action,
        } => {
            client
                .perform_action(&execution_id, &StatusAction::from(action))
                .await?;
            Ok(())
        }
        Commands::Watch { execution_id } => watch(client, &execution_id).await,
    }
}

/// Poll until the execution finishes; Ctrl-C stops polling cleanly.
async fn watch(client: &QueueClient<HttpTransport>, execution_id: &str) -> Result<()> {
    let cancel = CancellationToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_cancel.cancel();
        }
    });

    match client.wait_for_terminal(execution_id, &cancel).await {
        Some(result) => print_json(&result?),
        None => {
            tracing::info!(execution_id, "Stopped watching");
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
