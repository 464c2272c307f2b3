use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use bp_monitor_cli::commands::{execute, Command, Flow, HELP_TEXT};
use bp_monitor_domain::config::SignalConfig;
use bp_monitor_domain::services::create_simulated_session;

/// Entry point for the BpMonitor terminal shell
///
/// Sets up tracing on stderr, loads the signal configuration (including `.env`), then
/// reads one command per line from stdin until `quit` or end of input.
fn main() -> anyhow::Result<()> {
    // Initialize tracing for structured logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(false)
            .with_ansi(true)
            .with_timer(fmt::time::uptime())
            .with_writer(io::stderr))
        .with(env_filter)
        .init();

    let config = SignalConfig::load().context("Invalid signal configuration")?;
    info!(?config, "Starting BpMonitor session");

    let mut session = create_simulated_session(config).context("Failed to create signal source")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Smartphone PPG-based Blood Pressure Monitoring - Ghana")?;
    writeln!(
        out,
        "This app simulates a smartphone-based blood pressure monitoring system using photoplethysmography (PPG)."
    )?;
    write!(out, "{}", HELP_TEXT)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!("{}", e);
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        if execute(&mut session, command, &mut out)? == Flow::Stop {
            break;
        }
        out.flush()?;
    }

    let (_, readings) = session.finish();
    info!(readings = readings.len(), "Session ended");
    Ok(())
}
