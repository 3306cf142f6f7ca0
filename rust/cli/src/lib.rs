//! # boardrank CLI Library
//!
//! Command-line surface over `boardrank-engine`: rank every hole combination
//! against a board, settle showdowns and inspect configuration.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["boardrank", "analyze", "--hole", "As Ks", "--board", "Qs Js Ts"];
//! let code = boardrank_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `analyze`: Rank all hole combinations on one street, or every street of a run-out
//! - `showdown`: Compare several players' hole cards on a board
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{BoardrankCli, Commands};
use commands::{
    AnalyzeRequest, handle_analyze_command, handle_cfg_command, handle_showdown_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Settings come from the process environment; see [`run_with_env`].
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    run_with_env(args, &|key| std::env::var(key).ok(), out, err)
}

/// Like [`run`], with `env` standing in for the process environment when
/// resolving `BOARDRANK_*` settings.
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = boardrank_cli::run_with_env(
///     ["boardrank", "analyze", "--hole", "As Ks", "--board", "Qs Js Ts"],
///     &|_| None,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
/// ```
pub fn run_with_env<I, S>(
    args: I,
    env: &dyn Fn(&str) -> Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["analyze", "showdown", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = BoardrankCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Usage: boardrank <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    let _ = writeln!(err, "\nFor full help, run: boardrank --help");
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => {
            let result = match cli.cmd {
                Commands::Cfg => handle_cfg_command(env, out),
                Commands::Analyze {
                    hole,
                    board,
                    strength,
                    seed,
                    runout,
                    view,
                    format,
                } => config::load_with_sources_from(env)
                    .map_err(CliError::from)
                    .and_then(|resolved| {
                        let request = AnalyzeRequest {
                            hole,
                            board,
                            strength,
                            seed,
                            runout,
                            view,
                        };
                        handle_analyze_command(request, resolved.settings, format, out, err)
                    }),
                Commands::Showdown {
                    board,
                    holes,
                    format,
                } => handle_showdown_command(&board, &holes, format, out),
            };
            finish(result, err)
        }
    }
}

fn finish(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
