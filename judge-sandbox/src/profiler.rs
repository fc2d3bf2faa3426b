//! Resource profiling around one strategy invocation

use std::future::Future;
use std::time::Instant;

/// A value together with the resources consumed while producing it.
#[derive(Debug, Clone)]
pub struct Profiled<T> {
    pub value: T,

    /// Host resident-set delta in MB. Negative when the process released
    /// memory during the call; not clamped.
    pub memory_mb: f64,

    /// Wall-clock duration in milliseconds
    pub duration_ms: f64,
}

/// Run `fut` to completion, sampling process RSS and a monotonic clock
/// immediately before and after. Never fails: an unreadable RSS contributes
/// a delta of 0 and the wrapped value is returned regardless of what it is.
///
/// This measures the hosting process, not an isolated child: for the
/// compiled strategy the delta spans the compiler and binary subprocess
/// lifetimes. Approximation kept from the original measurement model, not
/// per-submission accounting.
pub async fn profile<F, T>(fut: F) -> Profiled<T>
where
    F: Future<Output = T>,
{
    let rss_before = rss_bytes();
    let start = Instant::now();

    let value = fut.await;

    let rss_after = rss_bytes();
    let elapsed = start.elapsed();

    let delta = match (rss_before, rss_after) {
        (Some(before), Some(after)) => after as f64 - before as f64,
        _ => 0.0,
    };

    Profiled {
        value,
        memory_mb: round2(delta / 1e6),
        duration_ms: round2(elapsed.as_secs_f64() * 1000.0),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Resident set size of the current process in bytes.
#[cfg(target_os = "linux")]
fn rss_bytes() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|line| line.starts_with("VmRSS:"))?;
    let kb: u64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kb * 1024)
}

#[cfg(not(target_os = "linux"))]
fn rss_bytes() -> Option<u64> {
    let output = std::process::Command::new("ps")
        .args(["-o", "rss=", "-p", &std::process::id().to_string()])
        .output()
        .ok()?;
    let kb: u64 = String::from_utf8(output.stdout).ok()?.trim().parse().ok()?;
    Some(kb * 1024)
}
