//! Cellsim - headless cell simulation binary

use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Cellsim v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration (first argument overrides the default path)
    let config = match std::env::args_os().nth(1) {
        Some(path) => cellsim::Config::load_from(&PathBuf::from(path))?,
        None => cellsim::Config::load()?,
    };
    info!("Loaded configuration");
    info!("  Screen: {}x{}", config.simulation.width, config.simulation.height);
    info!("  Cells: {}", config.simulation.cells);
    info!(
        "  Quadtree: max {} entities per node, max depth {}",
        config.quadtree.max_entities, config.quadtree.max_depth
    );

    // Run the simulation
    cellsim::run(config).await?;

    Ok(())
}
