use crate::error::{PipelineError, Result};
use crate::models::Envelope;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Write the envelope as indented UTF-8 JSON, replacing whatever was at `path`.
///
/// Missing parent directories are created. Non-ASCII text is written as-is.
pub fn write_envelope(path: &Path, envelope: &Envelope) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PipelineError::OutputDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut json = serde_json::to_string_pretty(envelope)?;
    json.push('\n');

    debug!("Writing {} bytes to {}", json.len(), path.display());
    fs::write(path, json).map_err(|e| PipelineError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!("💾 Saved {} listings to {}", envelope.listings.len(), path.display());
    Ok(())
}
