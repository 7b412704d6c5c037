//! JSON snapshot of an edition.
//!
//! When a JSON output path is configured, the articles that went into the
//! page are serialized alongside it:
//!
//! ```json
//! {
//!   "local_date": "2025-05-06",
//!   "local_time": "07:00",
//!   "total_stories": 19,
//!   "categories": { "general": [ { "title": "...", ... } ], ... }
//! }
//! ```

use crate::models::Edition;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write `edition` as pretty-printed JSON to `path`, creating parent directories.
///
/// # Arguments
///
/// * `edition` - Articles and timestamp of this run
/// * `path` - Destination file, overwritten if present
///
/// # Errors
///
/// Returns an error if serialization, directory creation or the write fails.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_edition(edition: &Edition, path: &Path) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(edition)?;

    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(dir).await {
            error!(dir = %dir.display(), error = %e, "Failed to create JSON dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!(total = edition.total_stories, "Wrote JSON edition");
    Ok(())
}
