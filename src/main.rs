//! CircuitPython Runner
//!
//! Runs `code.py` on a CircuitPython board and streams what it prints.
//!
//! The board is interrupted with Ctrl-C until the REPL prompt (`>>>`)
//! appears, soft-reloaded with Ctrl-D, and then everything printed after
//! `code.py output:` is copied to stdout for a fixed number of seconds.
//! Meant for unattended use in test harnesses and build pipelines.
//!
//! # Usage
//!
//! ```bash
//! # Capture 10 seconds of output from the default port
//! circuitpython-runner
//!
//! # Capture 30 seconds from a specific port
//! circuitpython-runner --port /dev/ttyACM1 --duration 30
//!
//! # Show handshake details on stderr
//! RUST_LOG=debug circuitpython-runner
//! ```

mod clock;
mod error;
mod repl;
mod serial;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::time::Duration;

use serial::DEFAULT_PORT;

/// Run code.py and read output from a CircuitPython device
#[derive(Parser, Debug)]
#[command(name = "circuitpython-runner")]
#[command(author = "Prasanna Gautam")]
#[command(version)]
#[command(about = "Run code.py and read output from CircuitPython device.")]
struct Cli {
    /// Serial port to open
    #[arg(long, default_value = DEFAULT_PORT)]
    port: String,

    /// Seconds to listen for output after sending Ctrl+D
    #[arg(long, default_value = "10.0", value_parser = parse_seconds)]
    duration: Duration,
}

fn parse_seconds(value: &str) -> std::result::Result<Duration, String> {
    let secs: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid number of seconds '{}': {}", value, e))?;
    Duration::try_from_secs_f64(secs)
        .map_err(|_| format!("duration must be a finite, non-negative number of seconds, got '{}'", value))
}

fn main() {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // The connection is closed by the time execute() returns
    if let Err(e) = execute(&cli) {
        eprintln!("{} {:#}", "[ERROR]".red().bold(), e);
        std::process::exit(1);
    }
}

#[cfg(feature = "serial")]
fn execute(cli: &Cli) -> Result<()> {
    use clock::MonotonicClock;
    use repl::RunConfig;
    use serial::{PortConfig, SerialConnection, REPL_BAUD_RATE};

    let port_config = PortConfig::new(&cli.port)
        .with_baud_rate(REPL_BAUD_RATE)
        .with_timeout(Duration::ZERO);
    let config = RunConfig::default().with_capture_duration(cli.duration);

    let mut connection = SerialConnection::open(port_config)?;
    log::debug!(
        "Capturing for {:.1}s from {}",
        config.capture_duration.as_secs_f64(),
        connection.config().port_path
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    repl::run(&mut connection, &MonotonicClock, &mut out, &config)?;

    Ok(())
}

#[cfg(not(feature = "serial"))]
fn execute(cli: &Cli) -> Result<()> {
    anyhow::bail!(
        "cannot open {}: built without serial support (rebuild with --features serial)",
        cli.port
    )
}
