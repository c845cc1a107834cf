// ABOUTME: Tracking record load, transform and persist steps
// ABOUTME: Each step is separate so the project_name rewrite can be tested on its own

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use tracker_config::PROJECT_NAME_FIELD;

use crate::error::{TrackingError, TrackingResult};
use crate::root::ProjectRoot;

/// A tracking file's contents, keys kept in file order
pub type TrackingRecord = Map<String, Value>;

/// Parse a tracking document. Anything but a JSON object is rejected.
pub fn parse_record(content: &str, path: &Path) -> TrackingResult<TrackingRecord> {
    match serde_json::from_str::<Value>(content)? {
        Value::Object(record) => Ok(record),
        _ => Err(TrackingError::NotAnObject(path.to_path_buf())),
    }
}

/// Read and parse the tracking file at `path` without transforming it
pub fn load_record(path: &Path) -> TrackingResult<TrackingRecord> {
    debug!("Reading tracking file: {:?}", path);
    let content = fs::read_to_string(path)?;
    let record = parse_record(&content, path)?;
    debug!("Loaded {} fields from {:?}", record.len(), path);
    Ok(record)
}

/// Rewrite `project_name` in place to an absolute path under `root`
pub fn resolve_project_name(record: &mut TrackingRecord, root: &ProjectRoot) {
    let Some(value) = record.get_mut(PROJECT_NAME_FIELD) else {
        return;
    };

    match value {
        Value::String(name) => {
            let resolved = root.join(name.as_str());
            *name = resolved.to_string_lossy().into_owned();
        }
        other => warn!(
            "Ignoring non-string {} value: {}",
            PROJECT_NAME_FIELD, other
        ),
    }
}

/// Serialize `record` with 2-space indentation and replace the file at `path`
pub fn store_record(path: &Path, record: &TrackingRecord) -> TrackingResult<()> {
    // Serialize before touching the file so a failure leaves it intact
    let json_content = serde_json::to_string_pretty(record)?;
    fs::write(path, json_content)?;
    debug!("Wrote {} fields to {:?}", record.len(), path);
    Ok(())
}

/// Text form of a field: strings as-is, everything else as compact JSON
pub fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
