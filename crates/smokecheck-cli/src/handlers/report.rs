//! Report handler.
//!
//! Captures one environment snapshot and prints the banner report.

use std::io::Write;

use smokecheck_build_info::TARGET_TRIPLE;
use smokecheck_core::{Report, capture};
use tracing::{debug, info};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the report.
///
/// Writes the full report to `out` and flushes it. Fails only if the probe
/// cannot supply a value or the write fails.
pub fn execute<W: Write + ?Sized>(ctx: &CliContext, out: &mut W) -> Result<(), CliError> {
    let snapshot = capture(ctx.probe.as_ref())?;
    let report = Report::from_snapshot(&snapshot);
    debug!(
        version = report.version(),
        platform = report.platform(),
        timestamp = report.timestamp(),
        target = TARGET_TRIPLE,
        "Captured environment snapshot"
    );

    report.write_to(out)?;
    out.flush()?;

    info!("Report printed");
    Ok(())
}
