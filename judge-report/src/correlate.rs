//! REPORT-line scanning and metric extraction

use crate::store::LogStore;
use crate::Result;
use judge_sandbox::{ExecutionContext, RunReport};
use regex::Regex;
use std::sync::OnceLock;

static DURATION_RE: OnceLock<Regex> = OnceLock::new();
static MEMORY_RE: OnceLock<Regex> = OnceLock::new();

fn duration_re() -> &'static Regex {
    DURATION_RE.get_or_init(|| Regex::new(r"Duration: ([0-9.]+) ms").unwrap())
}

fn memory_re() -> &'static Regex {
    MEMORY_RE.get_or_init(|| Regex::new(r"Max Memory Used: ([0-9]+) MB").unwrap())
}

/// Backfill `time` and `memory` on a prior response from the REPORT line
/// matching `ctx.request_id`.
///
/// Both fields start at 0 and stay 0 when no matching line exists yet. A
/// candidate line must carry BOTH the duration and the peak-memory figure;
/// a line with only one of the two is treated as not-yet-available and the
/// scan continues.
pub async fn correlate(
    report: &RunReport,
    ctx: &ExecutionContext,
    store: &dyn LogStore,
) -> Result<RunReport> {
    let mut refined = report.clone();
    refined.time = 0.0;
    refined.memory = 0.0;

    let events = store
        .events(&ctx.log_group_name, &ctx.log_stream_name)
        .await?;
    let request_tag = format!("RequestId: {}", ctx.request_id);

    for event in &events {
        let message = &event.message;
        if !message.starts_with("REPORT") {
            continue;
        }
        if !message.contains(&request_tag) {
            continue;
        }

        let duration = duration_re()
            .captures(message)
            .and_then(|caps| caps[1].parse::<f64>().ok());
        let memory = memory_re()
            .captures(message)
            .and_then(|caps| caps[1].parse::<f64>().ok());

        if let (Some(duration), Some(memory)) = (duration, memory) {
            tracing::debug!(
                request_id = %ctx.request_id,
                duration_ms = duration,
                memory_mb = memory,
                "matched report line"
            );
            refined.time = duration;
            refined.memory = memory;
            break;
        }
    }

    Ok(refined)
}
