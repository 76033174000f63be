use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use traffic_timeline::simulation::{
    SimConfig, Timeline, DEFAULT_DURATION, DEFAULT_INTERSECTION_COUNT,
};

#[derive(Parser)]
#[command(name = "traffic_timeline")]
#[command(about = "Step through a traffic light and sign simulation")]
struct Cli {
    /// Step interactively from the terminal
    #[arg(long)]
    ui: bool,

    /// Number of navigable time steps
    #[arg(long, default_value_t = DEFAULT_DURATION)]
    duration: usize,

    /// Number of intersections
    #[arg(long, default_value_t = DEFAULT_INTERSECTION_COUNT)]
    intersections: usize,

    /// Seed for reproducible density samples
    #[arg(long)]
    seed: Option<u64>,

    /// Forward steps to run in headless mode (defaults to the whole timeline)
    #[arg(long)]
    steps: Option<usize>,
}

impl Cli {
    fn config(&self) -> SimConfig {
        SimConfig {
            duration: self.duration,
            intersection_count: self.intersections,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Frames go to stdout, status lines to stderr through the log
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,traffic_timeline=info"),
    )
    .init();

    let config = cli.config();

    if cli.ui {
        #[cfg(feature = "ui")]
        return run_with_ui(&config);
        #[cfg(not(feature = "ui"))]
        anyhow::bail!("UI feature is not enabled. Rebuild with --features ui");
    }

    run_headless(&config, cli.steps)
}

/// Run the simulation in headless mode (status goes to the log only)
fn run_headless(config: &SimConfig, steps: Option<usize>) -> Result<()> {
    let mut timeline = Timeline::new(config).context("Invalid simulation configuration")?;
    let steps = steps.unwrap_or(config.duration - 1);

    info!(
        "Running traffic timeline headless: duration={}, intersections={}, steps={}",
        timeline.duration(),
        timeline.intersection_count(),
        steps
    );

    let mut taken = 0;
    while taken < steps && timeline.advance() {
        taken += 1;
    }
    if taken < steps {
        info!("Reached the end of the timeline after {} steps", taken);
    }

    info!("=== SIMULATION COMPLETE ===");
    timeline.log_summary();
    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(config: &SimConfig) -> Result<()> {
    use std::io;

    use traffic_timeline::ui::{run_interactive, TerminalRenderer};

    let mut timeline = Timeline::new(config)
        .context("Invalid simulation configuration")?
        .with_renderer(TerminalRenderer::stdout());

    let stdin = io::stdin();
    run_interactive(&mut timeline, stdin.lock(), io::stdout())
        .context("Interactive session failed")?;
    Ok(())
}
