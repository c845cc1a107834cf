use std::env;
use std::io;
use std::process::ExitCode;
use tracing::error;

use tracker_cli::logging::init_logging;
use tracker_cli::{run, Config, Status};
use tracker_core::TrackingStore;

fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();
    init_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Status::Failure.into();
        }
    };

    let store = TrackingStore::new(config.project_root());
    let stdout = io::stdout();
    run(env::args_os(), &store, &mut stdout.lock()).into()
}
