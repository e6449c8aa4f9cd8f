//! epidemic — reference driver for the flock epidemic simulation.
//!
//! Runs the default-parameter model (100 boids in a 100×100 toroidal space,
//! the last 5 seeded infected) for a fixed number of ticks, writes the
//! per-tick status history and periodic agent snapshots to CSV, and prints a
//! run summary.  This binary stands in for the external renderer/statistics
//! collector: everything it consumes comes through the model's public read
//! surface.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use flock_core::{InfectionStatus, ModelConfig};
use flock_output::{CsvWriter, SimOutputObserver};
use flock_sim::ModelBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const STEPS: u64 = 200;
const SNAPSHOT_INTERVAL: u64 = 10;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== epidemic — boid flocking with proximity contagion ===");

    // 1. Configuration: reference parameters, seeded for reproducibility.
    let config = ModelConfig {
        seed: SEED,
        snapshot_interval_ticks: SNAPSHOT_INTERVAL,
        ..ModelConfig::default()
    };
    println!(
        "Population: {}  |  Space: {}x{} (toroidal)  |  Steps: {STEPS}  |  Seed: {SEED}",
        config.population, config.width, config.height
    );
    println!(
        "vision {} / separation {}  |  infection {} / mortality {} / recovery {}",
        config.vision,
        config.separation,
        config.infection_rate,
        config.mortality_rate,
        config.recovery_rate
    );
    println!();

    // 2. Build the model.
    let mut model = ModelBuilder::new(config).build()?;
    println!("Seeded: {}", model.tally());

    // 3. Set up CSV output.
    std::fs::create_dir_all("output/epidemic")?;
    let writer = CsvWriter::new(Path::new("output/epidemic"))?;
    let mut obs = SimOutputObserver::new(writer);

    // 4. Run.
    let t0 = Instant::now();
    model.run_steps(STEPS, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  status_history.csv  : {} rows", model.history().len() - 1);
    println!(
        "  agent_snapshots.csv : {} rows",
        (STEPS / SNAPSHOT_INTERVAL) as usize * model.agents.count
    );
    println!();

    // 6. Final tally table.
    println!("{:<14} {:<8} {:<8}", "Status", "Count", "Color");
    println!("{}", "-".repeat(32));
    let tally = model.tally();
    for status in InfectionStatus::ALL {
        println!("{:<14} {:<8} {:<8}", status.to_string(), tally.count(status), status.color());
    }
    println!();
    println!("Final tick: {}  |  {}", model.tick(), tally);

    Ok(())
}
