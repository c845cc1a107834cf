// ABOUTME: Tracking file accessor for Tracker
// ABOUTME: Resolves the project root and reads, writes and queries JSON tracking files

pub mod error;
pub mod record;
pub mod root;
pub mod store;

// Re-export main types
pub use error::{TrackingError, TrackingResult};
pub use record::{field_text, load_record, resolve_project_name, TrackingRecord};
pub use root::{resolve_project_root, ProjectRoot};
pub use store::{get_field, read_record, write_record, TrackingStore};
