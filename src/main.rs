// Main entry point - Dependency injection and run
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::chart_service::ChartService;
use crate::application::franchise_service::FranchiseService;
use crate::domain::stat::Stat;
use crate::infrastructure::chart_renderer::{output_path, render_chart};
use crate::infrastructure::config::load_settings;
use crate::infrastructure::nhl_client::NhlClient;
use crate::presentation::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let settings = load_settings(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config))?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(NhlClient::new(
        &settings.api.base_url,
        Duration::from_secs(settings.api.timeout_secs),
    )?);

    if cli.wants_franchises() {
        let franchise_service = FranchiseService::new(repository);
        for franchise in franchise_service.list_franchises(cli.franchise).await? {
            println!("{}", franchise);
        }
        return Ok(());
    }

    let selection = Stat::select(&cli.stat);
    if !selection.matched {
        tracing::warn!("Stat '{}' not matched. Using points.", cli.stat);
    }

    let chart_service = ChartService::new(repository, settings.chart.tick_count);
    let player_ids = chart_service.resolve_player_ids(cli.team, &cli.players).await?;
    let chart = chart_service
        .build_chart(&cli.stat, selection.stat, player_ids)
        .await?;

    let format = cli.output_format();
    let path = output_path(&cli.output, format);
    render_chart(&chart, &path, format, (settings.chart.width, settings.chart.height))
        .with_context(|| format!("Failed to render {}", path.display()))?;

    tracing::info!("Wrote {}", path.display());
    Ok(())
}
