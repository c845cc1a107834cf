// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Tracker

// Project Root
pub const TRACKER_PROJECT_ROOT: &str = "TRACKER_PROJECT_ROOT";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";

/// Filter used when `RUST_LOG` is unset; recovered read failures log below it
pub const DEFAULT_LOG_FILTER: &str = "error";

/// Name of the field rewritten to an absolute path on read
pub const PROJECT_NAME_FIELD: &str = "project_name";

/// Directory levels between the executable and the project root
pub const PROJECT_ROOT_DEPTH: usize = 2;
