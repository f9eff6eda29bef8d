use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use log::{debug, error};

use ripchord_transposer::config::{Config, DEFAULT_CONFIG_FILE};
use ripchord_transposer::general::batch::{run_batch, ErrorPolicy};
use ripchord_transposer::general::check::{init_logging, print_summary};
use ripchord_transposer::Transposer;

fn main() -> ExitCode {
    init_logging(false);
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every attempted key was written.
fn run() -> Result<bool, Box<dyn Error>> {
    // An explicit path must exist; the default config.json is optional.
    let (config_path, required) = match std::env::args_os().nth(1) {
        Some(path) => (PathBuf::from(path), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    let config = Config::load(&config_path, required)?;
    init_logging(config.debug);
    debug!("config: {:?}", config);

    let transposer = Transposer::new(&config.source, config.output_dir());
    let policy = ErrorPolicy::from_stop_flag(config.stop_on_error);
    let report = run_batch(&transposer, &config.keys, &config.baseline, policy);

    print_summary(&report);
    Ok(report.is_success())
}
