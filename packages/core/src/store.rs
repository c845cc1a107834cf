use std::path::Path;
use tracing::{debug, warn};

use crate::error::TrackingResult;
use crate::record::{
    field_text, load_record, resolve_project_name, store_record, TrackingRecord,
};
use crate::root::ProjectRoot;

/// Reads and writes tracking files against a fixed project root.
///
/// The `read_record`/`write_record`/`get_field` methods never fail: an absent
/// or unreadable file is `None` and a failed write is `false`. The `try_*`
/// variants keep the underlying [`crate::TrackingError`] for callers that
/// want the cause.
#[derive(Debug, Clone)]
pub struct TrackingStore {
    root: ProjectRoot,
}

impl TrackingStore {
    pub fn new(root: ProjectRoot) -> Self {
        Self { root }
    }

    /// Load the record at `path` and resolve its `project_name` against the root
    pub fn try_read_record(&self, path: impl AsRef<Path>) -> TrackingResult<TrackingRecord> {
        let mut record = load_record(path.as_ref())?;
        resolve_project_name(&mut record, &self.root);
        Ok(record)
    }

    /// Like [`Self::try_read_record`], with missing or corrupt files reported as `None`
    pub fn read_record(&self, path: impl AsRef<Path>) -> Option<TrackingRecord> {
        let path = path.as_ref();
        match self.try_read_record(path) {
            Ok(record) => Some(record),
            Err(e) if e.is_not_found() => {
                debug!("No tracking file at {:?}", path);
                None
            }
            Err(e) => {
                warn!("Unreadable tracking file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Overwrite the file at `path` with `record`
    pub fn try_write_record(
        &self,
        path: impl AsRef<Path>,
        record: &TrackingRecord,
    ) -> TrackingResult<()> {
        store_record(path.as_ref(), record)
    }

    pub fn write_record(&self, path: impl AsRef<Path>, record: &TrackingRecord) -> bool {
        let path = path.as_ref();
        match self.try_write_record(path, record) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to write tracking file {:?}: {}", path, e);
                false
            }
        }
    }

    /// Look up one field of the record at `path` as text
    pub fn get_field(&self, path: impl AsRef<Path>, field_name: &str) -> Option<String> {
        let record = self.read_record(path)?;
        let value = record.get(field_name);
        if value.is_none() {
            debug!("Field {} not present", field_name);
        }
        value.map(field_text)
    }
}

impl Default for TrackingStore {
    fn default() -> Self {
        Self::new(ProjectRoot::resolve())
    }
}

/// Read a tracking file using the resolved project root
pub fn read_record(path: impl AsRef<Path>) -> Option<TrackingRecord> {
    TrackingStore::default().read_record(path)
}

/// Overwrite a tracking file; `false` on any failure
pub fn write_record(path: impl AsRef<Path>, record: &TrackingRecord) -> bool {
    TrackingStore::default().write_record(path, record)
}

/// Fetch a single field from a tracking file using the resolved project root
pub fn get_field(path: impl AsRef<Path>, field_name: &str) -> Option<String> {
    TrackingStore::default().get_field(path, field_name)
}
