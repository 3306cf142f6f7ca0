//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the resolved
//! analysis settings with their sources (default, configuration file or
//! environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "strength": {
//!     "value": "relative",
//!     "source": "default"
//!   },
//!   "flop_divisor": {
//!     "value": 1081,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(
    lookup: &dyn Fn(&str) -> Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let config::SettingsResolved { settings, sources } = config::load_with_sources_from(lookup)?;
    let display = serde_json::json!({
        "strength": {
            "value": settings.strength,
            "source": sources.strength,
        },
        "flop_divisor": {
            "value": settings.flop_divisor,
            "source": sources.flop_divisor,
        },
        "turn_divisor": {
            "value": settings.turn_divisor,
            "source": sources.turn_divisor,
        },
        "river_divisor": {
            "value": settings.river_divisor,
            "source": sources.river_divisor,
        },
        "seed": {
            "value": settings.seed,
            "source": sources.seed,
        },
        "view": {
            "value": settings.view,
            "source": sources.view,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
