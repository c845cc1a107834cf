pub mod commands;
pub mod config;
pub mod logging;

pub use commands::{run, Action, Cli, Status};
pub use config::{Config, ConfigError};
