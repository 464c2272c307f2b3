use std::io::Write;
use std::str::FromStr;

use anyhow::Context;
use thiserror::Error;
use tracing::{error, instrument};

use bp_monitor_domain::services::{MeasurementSession, SessionError, SignalSource};

use crate::render;

/// Command parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),
}

/// User actions available in the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Measure,
    History,
    Trend,
    Export,
    Tip,
    Resources,
    Connect,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "measure" | "m" => Ok(Command::Measure),
            "history" | "h" => Ok(Command::History),
            "trend" | "t" => Ok(Command::Trend),
            "export" => Ok(Command::Export),
            "tip" => Ok(Command::Tip),
            "resources" => Ok(Command::Resources),
            "connect" => Ok(Command::Connect),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Whether the shell should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub const HELP_TEXT: &str = "\
Commands:
  measure (m)   Measure blood pressure from a simulated PPG signal
  history (h)   Show measurement history
  trend (t)     Show blood pressure trend
  export        Print history as JSON
  tip           Show the current health tip
  resources     List local health resources
  connect       Connect with a healthcare provider
  help (?)      Show this help
  quit (q)      End the session
";

/// Execute one command against the session, writing output to `out`
#[instrument(skip(session, out))]
pub fn execute<S, W>(
    session: &mut MeasurementSession<S>,
    command: Command,
    out: &mut W,
) -> anyhow::Result<Flow>
where
    S: SignalSource,
    W: Write,
{
    match command {
        Command::Measure => match session.measure() {
            Ok(outcome) => {
                write!(out, "{}", render::render_outcome(&outcome))?;
                writeln!(out, "Health tip: {}", session.tip_of_the_day()?)?;
            }
            Err(SessionError::Signal(e)) => {
                // A failed measurement is reported and the session carries on
                error!("Measurement failed: {}", e);
                writeln!(out, "Measurement failed: {}", e)?;
            }
            Err(e) => return Err(e.into()),
        },
        Command::History => write!(out, "{}", render::render_history(session.history()))?,
        Command::Trend => write!(out, "{}", render::render_trend(&session.trend()))?,
        Command::Export => {
            let json = render::render_export(session.history())
                .context("Failed to serialize history")?;
            writeln!(out, "{}", json)?;
        }
        Command::Tip => writeln!(out, "Health tip: {}", session.tip_of_the_day()?)?,
        Command::Resources => write!(out, "{}", render::render_resources())?,
        Command::Connect => writeln!(out, "{}", session.connect_provider())?,
        Command::Help => write!(out, "{}", HELP_TEXT)?,
        Command::Quit => return Ok(Flow::Stop),
    }
    Ok(Flow::Continue)
}
