//! Output handling for analysis responses.

use std::path::Path;

use dqcheck_core::{AnalysisResponse, DqCheckError, Result};

/// Serializes a response as pretty-printed JSON.
pub fn response_json(response: &AnalysisResponse) -> Result<String> {
    serde_json::to_string_pretty(response).map_err(|e| DqCheckError::Serialization {
        context: "Failed to serialize analysis response".to_string(),
        source: e,
    })
}

/// Writes JSON data to a file.
pub async fn save_json(json_data: &str, output_path: &Path) -> Result<()> {
    tokio::fs::write(output_path, json_data)
        .await
        .map_err(|e| DqCheckError::Io {
            context: format!("Failed to write to {}", output_path.display()),
            source: e,
        })?;
    tracing::info!("Wrote response to {}", output_path.display());
    Ok(())
}
