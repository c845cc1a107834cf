use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tracker_config::TRACKER_PROJECT_ROOT;
use tracker_core::ProjectRoot;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    EmptyProjectRoot(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Explicit project root; resolved from the executable location when unset
    pub project_root: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let project_root = match env::var_os(TRACKER_PROJECT_ROOT) {
            Some(value) if value.is_empty() => {
                return Err(ConfigError::EmptyProjectRoot(TRACKER_PROJECT_ROOT))
            }
            Some(value) => Some(PathBuf::from(value)),
            None => None,
        };

        Ok(Config { project_root })
    }

    pub fn project_root(&self) -> ProjectRoot {
        match &self.project_root {
            Some(path) => ProjectRoot::new(path.clone()),
            None => ProjectRoot::resolve(),
        }
    }
}
