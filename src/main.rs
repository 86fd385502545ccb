//! Binary entrypoint for the `stockroom` CLI.

use std::process::ExitCode;

use stockroom::config::Settings;

fn main() -> ExitCode {
    let settings = Settings::from_env();
    stockroom::logging::init(&settings);
    match stockroom::run_with_settings(&settings, std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
