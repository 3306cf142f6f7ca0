//! Showdown command handler: best hand per player and the winners.

use std::io::Write;

use boardrank_engine::cards::{HoleCombination, parse_cards};
use boardrank_engine::showdown::showdown;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::formatters::{format_board, format_hand, format_hole};

pub fn handle_showdown_command(
    board: &str,
    holes: &[String],
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let board = parse_cards(board)?;
    let holes = holes
        .iter()
        .map(|text| HoleCombination::from_slice(&parse_cards(text)?))
        .collect::<Result<Vec<_>, _>>()?;
    let result = showdown(&board, &holes)?;

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "board": board.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
                "players": holes
                    .iter()
                    .zip(&result.hands)
                    .map(|(hole, hand)| serde_json::json!({
                        "hole": hole.to_string(),
                        "category": hand.key.category.name(),
                        "best_hand": hand.cards.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
                        "cards_used": hand.cards_used,
                    }))
                    .collect::<Vec<_>>(),
                "winners": result.winners.iter().map(|i| i + 1).collect::<Vec<_>>(),
                "split": result.is_split(),
            });
            let json_str = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
            writeln!(out, "{}", json_str)?;
        }
        OutputFormat::Text => {
            writeln!(out, "Board: {}", format_board(&board))?;
            for (i, (hole, hand)) in holes.iter().zip(&result.hands).enumerate() {
                writeln!(
                    out,
                    "Player {}: {}  {}  [{}]",
                    i + 1,
                    format_hole(hole),
                    hand.key.category,
                    format_hand(&hand.cards)
                )?;
            }
            let names: Vec<String> = result.winners.iter().map(|i| (i + 1).to_string()).collect();
            if result.is_split() {
                writeln!(out, "Split pot: players {}", names.join(", "))?;
            } else {
                writeln!(out, "Winner: player {}", names.join(""))?;
            }
        }
    }
    Ok(())
}
