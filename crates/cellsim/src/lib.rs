//! Headless cell simulation driving a dynamic quadtree.

pub mod cell;
pub mod collision;
pub mod config;
pub mod overlay;
pub mod world;

// Re-export commonly used types
pub use cell::Cell;
pub use config::Config;
pub use overlay::Overlay;
pub use world::{TickReport, World};

use tokio::time::{Duration, Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, trace};

/// Spawn the configured cells and tick the world until it is empty or the
/// tick limit is reached.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let sim = config.simulation.clone();
    let mut world = World::new(&config)?;

    world.spawn_random(sim.cells)?;
    info!(
        "Spawned {} cells on a {}x{} screen (max {} entities per node, depth {})",
        world.len(),
        sim.width,
        sim.height,
        config.quadtree.max_entities,
        config.quadtree.max_depth
    );

    let period = Duration::from_millis(sim.tick_interval_ms.max(1));
    let mut ticker = interval_at(Instant::now() + period, period);
    // Skip missed ticks rather than bursting to catch up.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        let report = world.tick();

        debug!(
            tick = report.tick,
            cells = report.cells,
            removed = report.removed,
            collisions = report.collisions,
            sensed = report.sensed,
            nodes = report.stats.nodes,
            depth = report.stats.depth,
            "tick"
        );

        if sim.report_every > 0 && report.tick % sim.report_every == 0 {
            let overlay = Overlay::from_world(&world);
            info!(
                "Tick {}: {} cells, {} collisions, {} sensed, {} nodes ({} leaves, depth {})",
                report.tick,
                report.cells,
                report.collisions,
                report.sensed,
                report.stats.nodes,
                report.stats.leaves,
                report.stats.depth
            );
            trace!(
                "Overlay: {} grid lines, {} labels, {} sprites",
                overlay.lines.len(),
                overlay.labels.len(),
                overlay.sprites.len()
            );
        }

        if world.is_empty() {
            info!("Every cell has left the screen after {} ticks", report.tick);
            break;
        }
        if sim.max_ticks > 0 && report.tick >= sim.max_ticks {
            info!("Reached tick limit ({}), {} cells remaining", sim.max_ticks, report.cells);
            break;
        }
    }

    Ok(())
}
