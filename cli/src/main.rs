//! Binary entry point for the local network CLI.

use std::process;

use anyhow::{Context as _, Result};
use clap::Parser as _;
use localnet_accounts::{NetworkAccountClient, generate_accounts};
use localnet_compose::{
    ComposeProject, bring_up_network, docker::ensure_docker_available, teardown_network,
};
use localnet_config::{NetworkEndpoints, timeouts};
use localnet_core::{adjust_timeout, http_probe};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Command, LocalnetCli};

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = LocalnetCli::parse();
    if let Err(err) = run(cli).await {
        warn!("command failed: {err:#}");
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

async fn run(cli: LocalnetCli) -> Result<()> {
    match cli.command {
        Some(Command::Start {
            accounts,
            detached,
            host,
        }) => start_session(accounts, detached, &host).await,
        Some(Command::Stop) => stop_network().await,
        Some(Command::Restart {
            accounts,
            detached,
            host,
        }) => {
            stop_network().await?;
            start_session(accounts, detached, &host).await
        }
        Some(Command::GenerateAccounts { n, host }) => generate_only(n, &host).await,
        Some(Command::External(_)) | None => {
            println!("{}", cli::network_help_text());
            Ok(())
        }
    }
}

/// Start the network and, unless detached, hold it up until interrupted.
async fn start_session(accounts: u32, detached: bool, host: &str) -> Result<()> {
    let project = ComposeProject::discover()?;
    ensure_docker_available().await?;

    tokio::select! {
        result = start_network(&project, accounts, host) => {
            result?;

            if detached {
                println!("\nLocal network has been successfully started in detached mode.");
                return Ok(());
            }

            println!("\nLocal network has been successfully started. Press Ctrl+C to stop it.");
            signal::ctrl_c().await.context("waiting for interrupt")?;
            println!();
            stop_project(&project).await
        }
        // An interrupt during start-up still runs the stop sequence to
        // completion before the process exits.
        _ = signal::ctrl_c() => {
            info!("interrupt received during start-up; running the stop sequence");
            println!();
            stop_project(&project).await
        }
    }
}

async fn start_network(project: &ComposeProject, accounts: u32, host: &str) -> Result<()> {
    println!("Starting the network containers...");
    bring_up_network(project)
        .await
        .context("bringing up the network containers")?;

    let endpoints = NetworkEndpoints::for_host(Some(host));
    println!("Starting the network...");
    http_probe::wait_for_mirror_node(
        endpoints.host(),
        endpoints.mirror_readiness_port(),
        adjust_timeout(timeouts::readiness_timeout()),
        timeouts::poll_interval(),
    )
    .await
    .context("waiting for the mirror node")?;

    println!("Generating accounts...");
    let client = NetworkAccountClient::new(&endpoints);
    generate_accounts(&client, accounts)
        .await
        .context("generating accounts")?;
    Ok(())
}

async fn stop_network() -> Result<()> {
    let project = ComposeProject::discover()?;
    stop_project(&project).await
}

async fn stop_project(project: &ComposeProject) -> Result<()> {
    println!("Stopping the network...");
    teardown_network(project)
        .await
        .context("stopping the network")?;
    Ok(())
}

async fn generate_only(count: u32, host: &str) -> Result<()> {
    let endpoints = NetworkEndpoints::for_host(Some(host));
    let client = NetworkAccountClient::new(&endpoints);
    let summary = generate_accounts(&client, count)
        .await
        .context("generating accounts")?;
    info!(total = summary.total(), "account generation finished");
    Ok(())
}
