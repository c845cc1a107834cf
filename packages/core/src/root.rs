// ABOUTME: Project root resolution
// ABOUTME: Locates the directory that relative project names are resolved against

use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracker_config::PROJECT_ROOT_DEPTH;

/// Base directory against which relative `project_name` values are resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot(PathBuf);

impl ProjectRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Resolve the root from the location of the running executable.
    ///
    /// The root sits two directory levels above the executable itself, so a
    /// binary installed at `<root>/bin/tracker` resolves to `<root>`. If the
    /// executable path is unavailable the current directory is used instead.
    pub fn resolve() -> Self {
        match env::current_exe() {
            Ok(exe) => {
                let root = Self::from_executable(&exe);
                debug!("Resolved project root {:?} from {:?}", root.0, exe);
                root
            }
            Err(e) => {
                warn!("Could not locate executable ({}), using current directory", e);
                Self(env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
            }
        }
    }

    /// Walk up from `exe`, stopping early at the filesystem root
    pub fn from_executable(exe: &Path) -> Self {
        let mut dir = exe;
        for _ in 0..PROJECT_ROOT_DEPTH {
            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
        Self(dir.to_path_buf())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Join a relative suffix onto the root. An absolute suffix replaces the root.
    ///
    /// Empty and `.` components, repeated separators and trailing slashes are
    /// dropped from the result; `..` is kept as written.
    pub fn join(&self, suffix: impl AsRef<Path>) -> PathBuf {
        self.0.join(suffix).components().collect()
    }
}

/// Resolve the process-wide project root from the executable location
pub fn resolve_project_root() -> ProjectRoot {
    ProjectRoot::resolve()
}
