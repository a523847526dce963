//! Output formatting for search results

use chrono::TimeDelta;
use itertools::Itertools;
use peg_solver::{DispatchOutcome, SearchReport};
use std::io::{self, Write};

/// Output formatter for search results
pub struct OutputFormatter {
    stats: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(stats: bool) -> Self {
        Self {
            stats,
            start_time: std::time::Instant::now(),
        }
    }

    /// Write the winning hole, path length, and one `from to` line per jump
    pub fn write_result(&self, out: &mut impl Write, report: &SearchReport) -> io::Result<()> {
        writeln!(out, "{} {}", report.hole_number(), report.best_path.len())?;
        for mv in &report.best_path {
            writeln!(out, "{}", mv)?;
        }
        Ok(())
    }

    /// Print the winning result to stdout
    pub fn print_result(&self, report: &SearchReport) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_result(&mut out, report)?;
        out.flush()
    }

    /// Write per-hole statistics and timing
    pub fn write_summary(&self, out: &mut impl Write, outcome: &DispatchOutcome) -> io::Result<()> {
        let winner = outcome.winner();

        writeln!(out)?;
        writeln!(out, "--- Summary ---")?;
        for report in outcome.reports() {
            writeln!(
                out,
                "Hole {:>2}: {} pegs left after {} jumps (nodes: {}, dead ends: {}, solve: {})",
                report.hole_number(),
                report.best_remaining,
                report.best_path.len(),
                report.stats.nodes,
                report.stats.dead_ends,
                format_duration(report.duration())
            )?;
        }

        let tied = outcome
            .reports()
            .iter()
            .filter(|r| r.best_remaining == winner.best_remaining)
            .map(|r| r.hole_number())
            .join(", ");
        writeln!(
            out,
            "Selected hole {} ({} pegs left); holes at that score: {}",
            winner.hole_number(),
            winner.best_remaining,
            tied
        )?;

        let total_solve_time: TimeDelta = outcome.reports().iter().map(|r| r.duration()).sum();
        let elapsed_time = self.start_time.elapsed();
        writeln!(out, "Total solve time: {}", format_duration(total_solve_time))?;
        writeln!(
            out,
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        )?;
        if !elapsed_time.is_zero() {
            let total_solve_secs =
                total_solve_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            let speedup = total_solve_secs / elapsed_time.as_secs_f64();
            writeln!(out, "Speedup factor: {:.2}x", speedup)?;
        }
        Ok(())
    }

    /// Print the summary to stderr when statistics were requested
    pub fn print_summary(&self, outcome: &DispatchOutcome) -> io::Result<()> {
        if !self.stats {
            return Ok(());
        }
        self.write_summary(&mut io::stderr().lock(), outcome)
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
