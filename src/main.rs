use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use chip_plugin::{
    Axp209, Emitter, Sampler, UpdateInterval,
    clock::MonotonicClock,
    linux::{I2C_DEVICE, open_bus},
    register::AXP209_ADDRESS,
};

/// Report CHIP power management readings to netdata.
///
/// Example:
///   chip-plugin 5
#[derive(Debug, Parser)]
#[command(name = "chip-plugin", version, long_about = None)]
struct Cli {
    /// Seconds between updates, 1 to 360.
    #[arg(default_value = "1")]
    update_every: UpdateInterval,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too, on stdout.
            let _ = err.print();
            process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    // stdout belongs to the collector.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        error!("{err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    info!(
        update_every = cli.update_every.as_secs(),
        device = I2C_DEVICE,
        address = AXP209_ADDRESS,
        "chip-plugin starting"
    );

    let bus = open_bus(I2C_DEVICE, AXP209_ADDRESS)
        .context("Unable to open a handle to the I2C bus")?;

    let sampler = Sampler::start(
        Axp209::new(bus),
        Emitter::new(std::io::stdout()),
        MonotonicClock::new(),
        cli.update_every,
    )
    .context("Unable to communicate with AXP209")?;

    let never = sampler.run().context("Lost contact with AXP209")?;
    match never {}
}
