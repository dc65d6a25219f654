//! grind CLI Application
//!
//! Command-line interface for the grind study plan tracker.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use grind_core::TrackerBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        plans_dir,
        data_dir,
        endpoint,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_plans_dir(plans_dir)
        .with_data_dir(data_dir)
        .with_endpoint(endpoint)
        .build()
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(tracker, renderer);

    info!("grind started");

    match command {
        Init(args) => cli.init(args).await.context("Failed to initialize plan"),
        Sample(args) => cli.sample(args).await.context("Failed to sample questions"),
        Complete(args) => cli
            .complete(args)
            .await
            .context("Failed to mark questions complete"),
        Stat(args) => cli.stat(args).await.context("Failed to show statistics"),
    }
}
