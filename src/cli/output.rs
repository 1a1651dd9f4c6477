//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use mergestats::{StatsError, StatsResult};

/// Writes `result` to stdout, as JSON when `json` is set.
pub fn write_result(result: &StatsResult, json: bool) -> Result<(), StatsError> {
    let mut stdout = io::stdout().lock();
    if json {
        write_json_to(&mut stdout, result)
    } else {
        write_stats_summary_to(&mut stdout, result)
    }
}

/// Writes a human-readable summary of `result` to the given writer.
pub fn write_stats_summary_to<W: Write>(
    writer: &mut W,
    result: &StatsResult,
) -> Result<(), StatsError> {
    let stats = &result.stats;

    writeln!(
        writer,
        "Pull requests by {} in {}:",
        result.username, result.period
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer, "  Total:  {}", stats.total_prs).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "  Merged: {} ({}%)",
        stats.merged_prs,
        stats.merge_rate_percent()
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer, "  Closed without merging: {}", stats.closed_prs)
        .map_err(|e| io_error(&e))?;
    writeln!(writer, "  Open:   {}", stats.open_prs).map_err(|e| io_error(&e))?;

    if stats.repos.is_empty() {
        return Ok(());
    }

    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(writer, "By repository:").map_err(|e| io_error(&e))?;
    for (repo, counts) in &stats.repos {
        writeln!(
            writer,
            "  {repo}: {} total, {} merged",
            counts.total, counts.merged
        )
        .map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Writes `result` as pretty-printed JSON followed by a newline.
pub fn write_json_to<W: Write>(writer: &mut W, result: &StatsResult) -> Result<(), StatsError> {
    serde_json::to_writer_pretty(&mut *writer, result).map_err(|error| StatsError::Io {
        message: error.to_string(),
    })?;
    writeln!(writer).map_err(|e| io_error(&e))
}

fn io_error(error: &io::Error) -> StatsError {
    StatsError::Io {
        message: error.to_string(),
    }
}
