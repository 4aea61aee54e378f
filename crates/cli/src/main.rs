//! hapticctl - drive haptickit patterns from the command line
//!
//! Plays the built-in patterns through the simulated backend, which renders
//! every transient to the log. Useful for checking timing, stop policies and
//! configuration files without haptic hardware.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::PlayArgs;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "hapticctl")]
#[command(about = "Haptic pattern player - play and inspect haptickit patterns")]
#[command(version)]
#[command(long_about = "
hapticctl plays haptickit's built-in patterns through the simulated haptic
backend. Each transient is logged at trace level (-vvv) instead of driving an
actuator.

Use --json for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Player configuration file (.yaml, .yml or .json)
    #[arg(long, global = true, env = "HAPTICCTL_CONFIG")]
    config: Option<PathBuf>,

    /// Behave as if the device had no haptic hardware
    #[arg(long, global = true)]
    no_haptics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a pattern
    Play(PlayArgs),

    /// List the built-in patterns and their events
    Patterns,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Flags shared by every subcommand.
pub struct Context<'a> {
    pub json: bool,
    pub config: Option<&'a std::path::Path>,
    pub no_haptics: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so `--json` output on stdout stays parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("hapticctl={log_level},haptickit={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            ExitCode::from(exit_code(&e))
        }
    }
}

fn exit_code(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<CliError>() {
        Some(CliError::HapticsUnavailable(_)) => 2,
        Some(CliError::InvalidConfiguration(_)) => 4,
        _ => 1,
    }
}

async fn execute_command(cli: &Cli) -> Result<()> {
    let ctx = Context {
        json: cli.json,
        config: cli.config.as_deref(),
        no_haptics: cli.no_haptics,
    };

    match &cli.command {
        Commands::Play(args) => commands::play::execute(args, &ctx).await,
        Commands::Patterns => commands::patterns::execute(&ctx),
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::PolicyArg;
    use haptickit::HapticPattern;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_play_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["hapticctl", "play", "double-pulse"])?;
        assert!(!cli.json);
        assert!(!cli.no_haptics);
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Play(args) => {
                assert_eq!(args.pattern, HapticPattern::DoublePulse);
                assert_eq!(args.repeat, 1);
                assert!(args.policy.is_none());
            }
            _ => return Err("expected play".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_play_options() -> TestResult {
        let cli = Cli::try_parse_from([
            "hapticctl",
            "play",
            "single",
            "--repeat",
            "3",
            "--interval-ms",
            "50",
            "--policy",
            "keep-warm",
        ])?;
        match cli.command {
            Commands::Play(args) => {
                assert_eq!(args.pattern, HapticPattern::SinglePulse);
                assert_eq!(args.repeat, 3);
                assert_eq!(args.interval_ms, 50);
                assert_eq!(args.policy, Some(PolicyArg::KeepWarm));
            }
            _ => return Err("expected play".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_rejects_unknown_pattern() {
        assert!(Cli::try_parse_from(["hapticctl", "play", "triple-pulse"]).is_err());
    }

    #[test]
    fn parse_global_flags_after_subcommand() -> TestResult {
        let cli = Cli::try_parse_from([
            "hapticctl",
            "patterns",
            "--json",
            "--no-haptics",
            "--config",
            "haptics.yaml",
            "-vv",
        ])?;
        assert!(cli.json);
        assert!(cli.no_haptics);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("haptics.yaml")));
        Ok(())
    }

    #[test]
    fn exit_codes_by_error() {
        let unavailable = anyhow::Error::new(CliError::HapticsUnavailable(
            haptickit::HapticError::UnsupportedDevice,
        ));
        assert_eq!(exit_code(&unavailable), 2);
        assert_eq!(exit_code(&anyhow::anyhow!("other")), 1);
    }
}
