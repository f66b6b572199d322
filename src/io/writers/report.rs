use std::path::Path;

use tracing::info;

use crate::api::BatchReport;
use crate::error::Result;

/// Write a batch report as pretty-printed JSON.
pub fn write_batch_report(output_path: &Path, report: &BatchReport) -> Result<()> {
    let json_string = serde_json::to_string_pretty(report)?;
    std::fs::write(output_path, json_string)?;
    info!("Wrote batch report: {:?}", output_path);
    Ok(())
}
