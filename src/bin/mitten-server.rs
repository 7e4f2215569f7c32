// ABOUTME: Server binary for the Mitten Index API
// ABOUTME: Loads env configuration, initializes logging, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Mitten Index Server Binary
//!
//! Starts the Mitten Index HTTP API: weather lookups, geocoding, and the
//! brutality score endpoint, all backed by free Open-Meteo services.

use anyhow::Result;
use clap::Parser;
use mitten_index::{config::environment::ServerConfig, logging, server::MittenServer};
use tracing::info;

#[derive(Parser)]
#[command(name = "mitten-server")]
#[command(about = "Mitten Index - winter brutality scoring API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Mitten Index API");
    info!("{}", config.summary());

    MittenServer::new(config).run().await
}
