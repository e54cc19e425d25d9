//! GitHub Actions runner integration: step outputs and workflow commands.
use std::path::Path;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use crate::{Result, orchestrator::outcome::RunSummary};

/// Formats an `::error::` workflow command so the runner annotates the job.
pub fn error_command(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");

    format!("::error::{escaped}")
}

/// Appends the run counts as `name=value` lines to the step outputs file.
pub async fn write_outputs(path: &str, summary: &RunSummary) -> Result<()> {
    let file_path = Path::new(path);

    let content = format!(
        "filed={}\nduplicates={}\nskipped={}\nfailed={}\ntotal={}\n",
        summary.filed(),
        summary.duplicates(),
        summary.skipped(),
        summary.failed(),
        summary.total(),
    );

    log::debug!("writing outputs to: {}", file_path.display());

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_path)
        .await?;

    file.write_all(content.as_bytes()).await?;
    file.flush().await?;

    Ok(())
}
