use std::fmt::Write;

use chrono::{DateTime, Utc};

use bp_monitor_domain::entities::{MeasurementOutcome, PpgSignal, Reading, TrendSeries};
use bp_monitor_domain::resources::LOCAL_RESOURCES;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn format_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIME_FORMAT).to_string()
}

/// Result panel for a single measurement
pub fn render_outcome(outcome: &MeasurementOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Measurement complete!");
    let _ = writeln!(out, "Systolic: {} mmHg", outcome.reading.systolic);
    let _ = writeln!(out, "Diastolic: {} mmHg", outcome.reading.diastolic);
    let _ = writeln!(
        out,
        "Status: {} [{}]",
        outcome.classification.label,
        outcome.classification.category.color()
    );
    out.push_str(&render_signal_summary(&outcome.signal));
    out
}

/// One-line description of a PPG waveform
pub fn render_signal_summary(signal: &PpgSignal) -> String {
    if signal.is_empty() {
        return "Simulated PPG signal: no samples\n".to_string();
    }
    let (min, max) = signal
        .series
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| (lo.min(y), hi.max(y)));
    let duration = signal.times.last().copied().unwrap_or_default();
    format!(
        "Simulated PPG signal: {} samples over {:.1} s, amplitude {:.2} to {:.2}\n",
        signal.len(),
        duration,
        min,
        max
    )
}

/// Measurement history table, oldest first
pub fn render_history(readings: &[Reading]) -> String {
    if readings.is_empty() {
        return "No measurements yet.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<20} {:>8} {:>9}  {}",
        "Timestamp", "Systolic", "Diastolic", "Status"
    );
    for reading in readings {
        let _ = writeln!(
            out,
            "{:<20} {:>8} {:>9}  {}",
            format_time(&reading.timestamp),
            reading.systolic,
            reading.diastolic,
            reading.status
        );
    }
    out
}

/// Trend chart as rows of systolic and diastolic bars
pub fn render_trend(trend: &TrendSeries) -> String {
    if trend.is_empty() {
        return "No measurements yet.\n".to_string();
    }
    let mut out = String::from("Blood Pressure Trend (mmHg)\n");
    for i in 0..trend.len() {
        let _ = writeln!(
            out,
            "{}  S {:>3} {}",
            format_time(&trend.timestamps[i]),
            trend.systolic[i],
            bar(trend.systolic[i])
        );
        let _ = writeln!(
            out,
            "{:<19}  D {:>3} {}",
            "",
            trend.diastolic[i],
            bar(trend.diastolic[i])
        );
    }
    out
}

// One block per 10 mmHg
fn bar(value: i32) -> String {
    "#".repeat((value.max(0) / 10) as usize)
}

/// Local health resources list
pub fn render_resources() -> String {
    let mut out = String::from("Local Health Resources in Ghana\n");
    for resource in LOCAL_RESOURCES.iter() {
        let _ = writeln!(out, "- {}: {}", resource.name, resource.info);
    }
    out
}

/// History serialized as pretty JSON
pub fn render_export(readings: &[Reading]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(readings)
}
