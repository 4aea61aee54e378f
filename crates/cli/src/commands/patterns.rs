//! Built-in pattern listing

use anyhow::Result;
use haptickit::{CompiledPattern, HapticPattern};
use haptickit_utils::TimeInterval;

use crate::Context;
use crate::output::{self, EventInfo, PatternInfo};

pub fn execute(ctx: &Context<'_>) -> Result<()> {
    let patterns = HapticPattern::ALL
        .into_iter()
        .map(describe)
        .collect::<Result<Vec<_>>>()?;
    output::print_patterns(&patterns, ctx.json)
}

fn describe(pattern: HapticPattern) -> Result<PatternInfo> {
    let compiled = CompiledPattern::try_from(pattern)?;
    let events = compiled
        .events()
        .iter()
        .map(|event| EventInfo {
            intensity: event.intensity,
            sharpness: event.sharpness,
            offset_ms: event.relative_time.as_secs_f64().millis_from_secs(),
        })
        .collect();

    Ok(PatternInfo {
        name: pattern,
        events,
        duration_ms: compiled.duration().as_secs_f64().millis_from_secs(),
    })
}
