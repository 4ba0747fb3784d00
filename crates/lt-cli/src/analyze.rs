use std::io::IsTerminal;
use std::path::Path;

use anyhow::Context;
use lt_config::LeadtimeConfig;
use lt_core::IssueTracker;
use lt_report::{BatchDriver, RowStatus, RunSummary, read_rows, write_rows};
use lt_tracker::JiraClient;

use crate::progress::Progress;

/// Run one report: connect, read `input`, derive milestones for every row,
/// write `output`.
///
/// # Errors
///
/// Fails on bad configuration, an unreachable or rejecting tracker, an
/// unreadable or empty input, or an unwritable output. Per-row lookup
/// failures do not fail the run.
pub async fn handle(input: &Path, output: &Path, quiet: bool) -> anyhow::Result<RunSummary> {
    let config = LeadtimeConfig::load_with_dotenv().context("failed to load configuration")?;
    let tracker_config = config
        .require_tracker()
        .context("set LEADTIME_TRACKER__URL and LEADTIME_TRACKER__API_TOKEN")?;
    let delimiter = config.report.delimiter_byte()?;

    let client = JiraClient::new(tracker_config).context("failed to build tracker client")?;
    client
        .connect()
        .await
        .with_context(|| format!("failed to connect to tracker at {}", client.base_url()))?;

    let rows = read_rows(input, delimiter)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let data_rows = u64::try_from(rows.len().saturating_sub(1)).unwrap_or_default();

    let progress = Progress::bar(
        data_rows,
        "fetching histories",
        !quiet && std::io::stderr().is_terminal(),
    );
    let driver = BatchDriver::new(&client).with_error_marker(config.report.error_marker.as_str());
    let report = driver
        .run_with_observer(rows, |row_number, status| {
            if !quiet {
                progress.println(&describe(row_number, status));
            }
            progress.inc(1);
        })
        .await;
    progress.finish_clear();

    write_rows(output, &report.rows, delimiter)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(report.summary)
}

/// One operator-facing line per data row.
fn describe(row_number: usize, status: &RowStatus) -> String {
    match status {
        RowStatus::Processed { issue_key } => format!("Processed {issue_key}"),
        RowStatus::Skipped(error) => format!("Skipped: {error}"),
        RowStatus::Failed { issue_key, message } => {
            format!("Row {row_number}: Error processing {issue_key}: {message}")
        }
    }
}

#[must_use]
pub fn summary_line(summary: &RunSummary, output: &Path) -> String {
    format!(
        "Wrote {} ({} processed, {} skipped, {} failed)",
        output.display(),
        summary.processed,
        summary.skipped,
        summary.failed
    )
}
