// ABOUTME: Command-line surface for tracking files
// ABOUTME: Parses `<action> <file_path> [param_name]` and maps every outcome to an exit status

use clap::{CommandFactory, Parser, ValueEnum};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, warn};
use tracker_core::TrackingStore;

/// Argument count (program name included) below which the usage line is printed
const MIN_ARGS: usize = 3;

/// Program name, action, file path and field name
const MAX_ARGS: usize = 4;

// Field names are arbitrary JSON keys, so `-x`, `--help` and `--` must reach
// `param_name` untouched: no built-in flags and hyphen values allowed.
#[derive(Parser, Debug)]
#[command(name = "tracker")]
#[command(about = "Tracker - read fields from JSON tracking files")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Action to perform
    #[arg(value_enum)]
    pub action: Action,
    /// Path to the tracking file
    #[arg(allow_hyphen_values = true)]
    pub file_path: PathBuf,
    /// Field to look up (required by `read`)
    #[arg(allow_hyphen_values = true)]
    pub param_name: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Print a single field's value
    Read,
}

/// Process outcome; every failure maps to exit code 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Failure => 1,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// Run the command line in `args` (program name first) against `store`
pub fn run<I, T, W>(args: I, store: &TrackingStore, out: &mut W) -> Status
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if args.len() < MIN_ARGS {
        let usage = Cli::command().render_usage().to_string();
        return write_or_fail(out, &format!("{}\n", usage), Status::Failure);
    }
    if args.len() > MAX_ARGS {
        debug!("Expected at most {} arguments, got {}", MAX_ARGS - 1, args.len() - 1);
        return Status::Failure;
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            debug!("Rejected arguments: {}", e);
            return Status::Failure;
        }
    };

    match cli.action {
        Action::Read => read_field(store, &cli.file_path, cli.param_name.as_deref(), out),
    }
}

fn read_field<W: Write>(
    store: &TrackingStore,
    file_path: &Path,
    param_name: Option<&str>,
    out: &mut W,
) -> Status {
    let Some(param_name) = param_name else {
        debug!("read requires a field name");
        return Status::Failure;
    };

    match store.get_field(file_path, param_name) {
        Some(value) if !value.is_empty() => {
            write_or_fail(out, &format!("{}\n", value), Status::Success)
        }
        _ => Status::Failure,
    }
}

fn write_or_fail<W: Write>(out: &mut W, text: &str, status: Status) -> Status {
    match out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
        Ok(()) => status,
        Err(e) => {
            warn!("Failed to write output: {}", e);
            Status::Failure
        }
    }
}
