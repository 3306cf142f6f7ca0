//! Command-line definitions for the `boardrank` binary.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{StrengthMode, View};

#[derive(Parser, Debug)]
#[command(
    name = "boardrank",
    version,
    about = "Rank every hole combination against a Hold'em board"
)]
pub struct BoardrankCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank all hole combinations on the flop, turn or river
    Analyze {
        /// Reference hole cards, e.g. "As Ks"; dealt at random when omitted
        #[arg(long)]
        hole: Option<String>,
        /// Board cards (3 to 5), e.g. "Qs Js Ts"; a random flop when omitted
        #[arg(long)]
        board: Option<String>,
        #[arg(long, value_enum)]
        strength: Option<StrengthMode>,
        /// Seed for dealing missing cards
        #[arg(long)]
        seed: Option<u64>,
        /// Deal the remaining streets and analyze each one
        #[arg(long)]
        runout: bool,
        #[arg(long, value_enum)]
        view: Option<View>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Compare several hole pairs on a board and name the winners
    Showdown {
        #[arg(long)]
        board: String,
        /// Hole cards of one player; repeat for each player
        #[arg(long = "hole", required = true)]
        holes: Vec<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print resolved settings and where each value came from
    Cfg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
