//! Pattern playback command

use std::time::{Duration, Instant};

use anyhow::Result;
use haptickit::{CompiledPattern, HapticPlayer, PlayerConfig, SimulatedBackend};
use haptickit_utils::{Clamped, TimeInterval};
use tracing::{info, warn};

use super::{MAX_INTERVAL_MS, MAX_REPEAT, PlayArgs};
use crate::Context;
use crate::error::CliError;
use crate::output::{self, PlaySummary};

/// Play `args.pattern` and report what the player did.
pub async fn execute(args: &PlayArgs, ctx: &Context<'_>) -> Result<()> {
    let mut config = match ctx.config {
        Some(path) => PlayerConfig::load(path).map_err(CliError::from)?,
        None => PlayerConfig::default(),
    };
    if let Some(policy) = args.policy {
        config.stop_policy = policy.into();
    }
    let policy = config.stop_policy;

    let backend = if ctx.no_haptics {
        SimulatedBackend::unsupported()
    } else {
        SimulatedBackend::new()
    };
    let player = HapticPlayer::try_new(&backend, config).map_err(CliError::HapticsUnavailable)?;

    let repeat = args.repeat.clamped(1..=MAX_REPEAT);
    if repeat != args.repeat {
        warn!(requested = args.repeat, repeat, "repeat count out of range, clamped");
    }
    let interval = Duration::from_millis(args.interval_ms.clamped(0..=MAX_INTERVAL_MS));

    let started = Instant::now();
    for i in 0..repeat {
        if i > 0 {
            tokio::time::sleep(interval).await;
        }
        player.play(args.pattern);
    }
    player.flush().await;

    // Let the last pattern play out before reporting.
    let compiled = CompiledPattern::try_from(args.pattern)?;
    tokio::time::sleep(compiled.duration()).await;

    let summary = PlaySummary {
        pattern: args.pattern,
        policy,
        repeat,
        stats: player.stats(),
        rendered_events: backend.rendered_events(),
        elapsed_ms: started.elapsed().as_secs_f64().millis_from_secs(),
    };
    info!(pattern = %summary.pattern, played = summary.stats.played, "playback finished");

    output::print_play_summary(&summary, ctx.json)
}
