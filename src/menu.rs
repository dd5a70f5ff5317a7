//! Interactive mode selection
//!
//! Shown when the command line does not name both players. Offers the
//! seven classic pairings, then asks for the depth of every search player.

use std::io::{self, Write};
use std::str::FromStr;

use crate::config::{MatchConfig, PlayerConfig, PlayerKind};
use crate::controller::LineSource;
use crate::error::{GameError, Result};

/// Menu entries as (label, White, Black)
pub const MODES: [(&str, PlayerKind, PlayerKind); 7] = [
    ("Human vs Human", PlayerKind::Human, PlayerKind::Human),
    ("Human vs AI", PlayerKind::Human, PlayerKind::Greedy),
    ("AI vs Human", PlayerKind::Greedy, PlayerKind::Human),
    ("AI vs AI", PlayerKind::Greedy, PlayerKind::Greedy),
    ("Human vs AI (pruning)", PlayerKind::Human, PlayerKind::Search),
    ("AI (pruning) vs AI (pruning)", PlayerKind::Search, PlayerKind::Search),
    ("AI (pruning) vs AI (greedy)", PlayerKind::Search, PlayerKind::Greedy),
];

/// Ask for a mode and search depths, filling in the players of `base`.
pub fn select_match<I, W>(input: &mut I, out: &mut W, base: MatchConfig) -> Result<MatchConfig>
where
    I: LineSource,
    W: Write,
{
    writeln!(out, "Select game mode:")?;
    for (i, (label, _, _)) in MODES.iter().enumerate() {
        writeln!(out, "- {} ({})", label, i + 1)?;
    }

    let mode = prompt(input, out, "Mode: ", |m: &usize| (1..=MODES.len()).contains(m))?;
    let (_, white_kind, black_kind) = MODES[mode - 1];

    let white = player_config(input, out, white_kind, "White")?;
    let black = player_config(input, out, black_kind, "Black")?;

    Ok(MatchConfig {
        white,
        black,
        ..base
    })
}

fn player_config<I: LineSource, W: Write>(
    input: &mut I,
    out: &mut W,
    kind: PlayerKind,
    color: &str,
) -> Result<PlayerConfig> {
    Ok(match kind {
        PlayerKind::Human => PlayerConfig::human(),
        PlayerKind::Greedy => PlayerConfig::greedy(),
        PlayerKind::Search => {
            let label = format!("{color} AI search depth: ");
            PlayerConfig::search(prompt(input, out, &label, |&d: &u8| d > 0)?)
        }
    })
}

/// Print `label` and read values until one parses and passes `valid`
fn prompt<T, I, W>(input: &mut I, out: &mut W, label: &str, valid: impl Fn(&T) -> bool) -> Result<T>
where
    T: FromStr,
    I: LineSource,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(out, "{label}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(GameError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }

        match line.trim().parse::<T>() {
            Ok(value) if valid(&value) => return Ok(value),
            _ => writeln!(out, "Invalid choice: {:?}", line.trim())?,
        }
    }
}
