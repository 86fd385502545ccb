//! Core library entry for the `stockroom` CLI.
//!
//! `stockroom` keeps inventory categories and products in a YAML store and
//! gives every product a unique slug and SKU derived from its name.

pub mod adapters;
pub mod admin;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod ident;
pub mod logging;
pub mod model;
pub mod ports;
pub mod store;

use clap::Parser;

use crate::config::Settings;

/// Run the CLI with the provided arguments and settings from the environment.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    run_with_settings(&Settings::from_env(), args)
}

/// Run the CLI with the provided arguments and explicit settings.
///
/// `--help` and `--version` print to stdout and succeed.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run_with_settings<I, T>(settings: &Settings, args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli, settings)
}

#[cfg(test)]
mod tests {
    use super::run_with_settings;
    use crate::config::Settings;

    fn settings(dir: &tempfile::TempDir) -> Settings {
        Settings::default().with_store(Some(dir.path()))
    }

    #[test]
    fn run_lists_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_with_settings(&settings(&dir), ["stockroom", "category", "list"]).is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_with_settings(&settings(&dir), ["stockroom", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn help_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_with_settings(&settings(&dir), ["stockroom", "--help"]).is_ok());
    }

    #[test]
    fn handler_errors_are_returned() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_with_settings(&settings(&dir), ["stockroom", "category", "delete", "1"])
            .unwrap_err();
        assert_eq!(err, "category 1 not found");
    }
}
