//! Playground client binary.
//!
//! Terminal catalog and playground for interactive teaching mechanics.
//! The gallery lists every mechanic from `mechanics-content`; opening one
//! launches its interactive demo in an overlay, driven by keyboard and
//! terminal mouse events.

use anyhow::Result;

mod app;
mod config;
mod event;
mod hits;
mod input;
mod logging;
mod presentation;
mod state;

use crate::app::App;
use crate::config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env();
    logging::setup_logging()?;

    tracing::info!("Starting playground client");
    tracing::info!("Frame interval: {:?}", config.frame_interval);
    tracing::info!("Mouse capture: {}", config.mouse_capture);

    App::new(config).run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
