//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use chudpi_core::value::PiValue;
use chudpi_orchestration::interfaces::CalculationResult;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format the stats report for a finished calculation.
///
/// Elapsed seconds, thread count, decimals, and decimals per second.
#[must_use]
pub fn format_stats(result: &CalculationResult) -> String {
    let rate = result
        .decimals_per_second()
        .map_or_else(|| "n/a".to_string(), |r| format!("{r:.0}"));

    format!(
        "======= Stats =======\n\
         Time      : {:.3} s\n\
         Threads   : {}\n\
         Decimals  : {}\n\
         Dec / sec : {rate}\n",
        result.duration.as_secs_f64(),
        result.threads,
        result.decimals,
    )
}

/// Format the cross-check table: one line per run with its status.
#[must_use]
pub fn format_comparison(results: &[CalculationResult]) -> String {
    let mut out = String::from("Cross-check:\n");
    for result in results {
        let status = if result.outcome.is_err() {
            "ERROR"
        } else {
            "OK"
        };
        out.push_str(&format!(
            "  {:<12} {:>3} threads {:>10} [{}]\n",
            result.algorithm,
            result.threads,
            format_duration(result.duration),
            status,
        ));
    }
    out
}

/// Write the formatted value to a file, followed by a newline.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: impl AsRef<Path>, value: &PiValue) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    writeln!(file, "{value}")?;
    file.flush()
}
