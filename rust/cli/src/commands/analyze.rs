//! Analyze command handler.
//!
//! Ranks every hole combination against the board for one street, or for each
//! street of a run-out, and prints the reference hand's standing. Cards the
//! user leaves out are dealt from a seeded deck so runs can be repeated with
//! `--seed`.

use std::io::Write;

use boardrank_engine::analysis::Analysis;
use boardrank_engine::cards::{Card, HoleCombination, parse_cards};
use boardrank_engine::deck::seeded_rng;
use boardrank_engine::errors::AnalysisError;
use boardrank_engine::session::HandSession;
use boardrank_engine::tiers::Street;
use rand::Rng;
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::config::{AnalysisSettings, StrengthMode, View};
use crate::error::CliError;
use crate::formatters::{
    CONDENSED_HEADER, FULL_HEADER, format_board, format_condensed_row, format_entry_row,
    format_hole, format_statistics, format_ties,
};
use crate::ui;

/// Flags of the `analyze` command; `None` falls back to configuration.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeRequest {
    pub hole: Option<String>,
    pub board: Option<String>,
    pub strength: Option<StrengthMode>,
    pub seed: Option<u64>,
    pub runout: bool,
    pub view: Option<View>,
}

/// Handle the analyze command.
///
/// # Errors
///
/// Returns `CliError::Analysis` for unparsable or conflicting cards and bad
/// board sizes, `CliError::Io` if writing fails.
pub fn handle_analyze_command(
    request: AnalyzeRequest,
    mut settings: AnalysisSettings,
    format: OutputFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if let Some(strength) = request.strength {
        settings.strength = strength;
    }
    if let Some(view) = request.view {
        settings.view = view;
    }
    let seed = request
        .seed
        .or(settings.seed)
        .unwrap_or_else(rand::random);
    let mut rng = seeded_rng(seed);
    let scoring = settings.scoring();

    let board = match request.board.as_deref() {
        Some(text) => parse_cards(text)?,
        None => Vec::new(),
    };
    let mut session = start_session(request.hole.as_deref(), &board, &mut rng)?;
    deal_board(&mut session, &board, &mut rng)?;
    info!(seed, hole = %session.hole(), board = ?session.board(), "starting analysis");

    let mut analyses = vec![session.analyze(&scoring)?];
    if request.runout {
        if session.street() == Some(Street::River) {
            ui::display_warning(err, "board is already complete; --runout has nothing to deal")?;
        }
        while session.street() != Some(Street::River) {
            let street = session.reveal_random(&mut rng)?;
            debug!(%street, "runout street dealt");
            analyses.push(session.analyze(&scoring)?);
        }
    }

    match format {
        OutputFormat::Text => write_text(out, seed, &session, &analyses, settings.view),
        OutputFormat::Json => write_json(out, seed, &session, &analyses, settings.view),
    }
}

fn start_session<R: Rng>(
    hole: Option<&str>,
    board: &[Card],
    rng: &mut R,
) -> Result<HandSession, CliError> {
    match hole {
        Some(text) => {
            let cards = parse_cards(text)?;
            if cards.len() != 2 {
                return Err(CliError::InvalidInput(format!(
                    "--hole needs exactly 2 cards, got {}",
                    cards.len()
                )));
            }
            Ok(HandSession::new(HoleCombination::from_slice(&cards)?)?)
        }
        None => Ok(HandSession::deal_around(board, rng)?),
    }
}

fn deal_board<R: Rng>(
    session: &mut HandSession,
    cards: &[Card],
    rng: &mut R,
) -> Result<(), CliError> {
    match cards {
        [] => {
            session.reveal_random(rng)?;
        }
        [a, b, c, rest @ ..] if rest.len() <= 2 => {
            session.deal_flop([*a, *b, *c])?;
            for card in rest {
                session.reveal(*card)?;
            }
        }
        _ => return Err(AnalysisError::InvalidBoardSize(cards.len()).into()),
    }
    Ok(())
}

fn write_text(
    out: &mut dyn Write,
    seed: u64,
    session: &HandSession,
    analyses: &[Analysis],
    view: View,
) -> Result<(), CliError> {
    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Hole: {}", format_hole(session.hole()))?;
    for analysis in analyses {
        writeln!(out)?;
        writeln!(
            out,
            "== {} {} ==",
            street_title(analysis.street),
            format_board(&analysis.board)
        )?;
        for line in format_statistics(analysis.reference(), &analysis.statistics()) {
            writeln!(out, "{}", line)?;
        }
        writeln!(out, "{}", format_ties(&analysis.ties()))?;
        writeln!(out)?;
        match view {
            View::Condensed => {
                writeln!(out, "{}", CONDENSED_HEADER)?;
                for tier in analysis.condensed() {
                    writeln!(out, "{}", format_condensed_row(&tier))?;
                }
            }
            View::Full => {
                writeln!(out, "{}", FULL_HEADER)?;
                for entry in analysis.entries() {
                    writeln!(out, "{}", format_entry_row(entry))?;
                }
            }
        }
    }
    Ok(())
}

fn write_json(
    out: &mut dyn Write,
    seed: u64,
    session: &HandSession,
    analyses: &[Analysis],
    view: View,
) -> Result<(), CliError> {
    let streets: Vec<serde_json::Value> = analyses
        .iter()
        .map(|a| -> Result<serde_json::Value, std::io::Error> {
            let field = match view {
                View::Condensed => serde_json::to_value(a.condensed()),
                View::Full => serde_json::to_value(a.entries()),
            }
            .map_err(std::io::Error::other)?;
            Ok(serde_json::json!({
                "street": a.street,
                "board": a.board.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
                "scoring": a.scoring,
                "reference": a.reference(),
                "statistics": a.statistics(),
                "ties": a.ties(),
                "tiers": a.population().last_tier(),
                "field": field,
            }))
        })
        .collect::<Result<_, std::io::Error>>()?;
    let report = serde_json::json!({
        "seed": seed,
        "hole": session.hole().to_string(),
        "streets": streets,
    });
    let json_str = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

fn street_title(street: Street) -> &'static str {
    match street {
        Street::Flop => "Flop",
        Street::Turn => "Turn",
        Street::River => "River",
    }
}
