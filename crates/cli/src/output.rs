//! Output formatting for CLI responses

use anyhow::{Error, Result};
use colored::*;
use haptickit::{HapticPattern, PlaybackStats, StopPolicy};
use haptickit_utils::TimeInterval;
use serde::Serialize;
use serde_json::json;

use crate::error::CliError;

/// Result of a `play` run.
#[derive(Debug, Serialize)]
pub struct PlaySummary {
    pub pattern: HapticPattern,
    pub policy: StopPolicy,
    pub repeat: u32,
    pub stats: PlaybackStats,
    pub rendered_events: u64,
    pub elapsed_ms: f64,
}

#[derive(Debug, Serialize)]
pub struct EventInfo {
    pub intensity: f32,
    pub sharpness: f32,
    pub offset_ms: f64,
}

#[derive(Debug, Serialize)]
pub struct PatternInfo {
    pub name: HapticPattern,
    pub events: Vec<EventInfo>,
    pub duration_ms: f64,
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

pub fn print_play_summary(summary: &PlaySummary, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "playback": summary,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let stats = &summary.stats;
    println!(
        "{} {} x{} ({})",
        "Played".green().bold(),
        summary.pattern.to_string().bold(),
        summary.repeat,
        policy_name(summary.policy)
    );
    println!("  Requested: {}", stats.requested);
    println!("  Played:    {}", stats.played);
    if stats.failed > 0 {
        println!("  Failed:    {}", stats.failed.to_string().red());
    }
    if stats.dropped > 0 {
        println!("  Dropped:   {}", stats.dropped.to_string().yellow());
    }
    println!("  Transients rendered: {}", summary.rendered_events);
    println!(
        "  Elapsed: {} ms",
        summary.elapsed_ms.round_and_stringify().dimmed()
    );
    Ok(())
}

pub fn print_patterns(patterns: &[PatternInfo], json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "patterns": patterns,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Built-in Patterns:".bold());
    for pattern in patterns {
        println!(
            "  {} {} ({} ms)",
            "●".cyan(),
            pattern.name.to_string().bold(),
            pattern.duration_ms.round_and_stringify()
        );
        for event in &pattern.events {
            println!(
                "    +{:>4} ms  intensity {:.2}  sharpness {:.2}",
                event.offset_ms.round_and_stringify(),
                event.intensity,
                event.sharpness
            );
        }
    }
    Ok(())
}

fn policy_name(policy: StopPolicy) -> &'static str {
    match policy {
        StopPolicy::AutoStop => "auto-stop",
        StopPolicy::KeepWarm => "keep-warm",
    }
}

fn error_type_name(error: &Error) -> &'static str {
    match error.downcast_ref::<CliError>() {
        Some(CliError::HapticsUnavailable(_)) => "HapticsUnavailable",
        Some(CliError::InvalidConfiguration(_)) => "InvalidConfiguration",
        None => "Error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haptickit::HapticError;

    #[test]
    fn error_type_name_uses_variant() {
        let error = Error::new(CliError::HapticsUnavailable(HapticError::Disabled));
        assert_eq!(error_type_name(&error), "HapticsUnavailable");
    }

    #[test]
    fn summary_serializes_kebab_case() -> Result<()> {
        let summary = PlaySummary {
            pattern: HapticPattern::DoublePulse,
            policy: StopPolicy::KeepWarm,
            repeat: 2,
            stats: PlaybackStats::default(),
            rendered_events: 4,
            elapsed_ms: 12.5,
        };
        let value = serde_json::to_value(&summary)?;
        assert_eq!(value["pattern"], "double-pulse");
        assert_eq!(value["policy"], "keep-warm");
        assert_eq!(value["stats"]["played"], 0);
        Ok(())
    }
}
