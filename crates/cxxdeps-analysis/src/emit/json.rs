//! JSON export of the snapshot.

use cxxdeps_core::errors::OutputError;

use crate::pipeline::AnalysisSnapshot;

/// Pretty-printed JSON of the whole snapshot, newline-terminated.
pub fn render(snapshot: &AnalysisSnapshot) -> Result<String, OutputError> {
    let mut text = serde_json::to_string_pretty(snapshot).map_err(|e| OutputError::Serialize {
        message: e.to_string(),
    })?;
    text.push('\n');
    Ok(text)
}
