//! Command handler modules for the boardrank CLI.
//!
//! Each command lives in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

pub mod analyze;
pub mod cfg;
pub mod showdown;

pub use analyze::{AnalyzeRequest, handle_analyze_command};
pub use cfg::handle_cfg_command;
pub use showdown::handle_showdown_command;
