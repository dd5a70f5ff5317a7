//! Console controller for a human player

use std::io::{self, BufRead, Cursor, Stdin, Stdout, Write};

use log::warn;

use super::{game_over_error, Controller};
use crate::board::{Board, Coords, Player};
use crate::error::{GameError, Result};

/// Line-oriented input.
///
/// Implemented for `Stdin` directly (not a lock) so two human players can
/// read from the same console in turn.
pub trait LineSource {
    /// Append one line to `buf`. Returns 0 at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Parse `row col` or `row,col` into a coordinate on `board`
pub fn parse_coords(line: &str, board: &Board) -> Result<Coords> {
    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    let &[row, col] = parts.as_slice() else {
        return Err(GameError::InvalidInput(format!(
            "expected `row col`, got {:?}",
            line.trim()
        )));
    };
    let parse = |s: &str| {
        s.parse::<i32>()
            .map_err(|_| GameError::InvalidInput(format!("{s:?} is not a number")))
    };

    board.coords(parse(row)?, parse(col)?)
}

/// Prompts on `output` and reads moves from `input` until one is playable.
pub struct HumanController<I: LineSource, W: Write> {
    input: I,
    output: W,
    name: String,
}

impl HumanController<Stdin, Stdout> {
    /// Player at the terminal
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(io::stdin(), io::stdout(), name)
    }
}

impl<I: LineSource, W: Write> HumanController<I, W> {
    pub fn new(input: I, output: W, name: impl Into<String>) -> Self {
        Self {
            input,
            output,
            name: name.into(),
        }
    }

    /// Consume the controller, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<I: LineSource, W: Write> Controller for HumanController<I, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn produce_move(&mut self, board: &Board, side: Player) -> Result<Coords> {
        if board.winner_state().is_decided() {
            return Err(game_over_error(board));
        }

        let mut line = String::new();
        loop {
            write!(self.output, "{} ({}) move [row col]: ", self.name, side)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
            }

            match parse_coords(&line, board) {
                Ok(pos) if board.is_empty_at(pos) => return Ok(pos),
                Ok(pos) => {
                    warn!("{} tried occupied cell {}", self.name, pos);
                    writeln!(self.output, "Cell {pos} is already taken.")?;
                }
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TileState;

    fn human(script: &str) -> HumanController<Cursor<String>, Vec<u8>> {
        HumanController::new(Cursor::new(script.to_string()), Vec::new(), "Tester")
    }

    #[test]
    fn test_parse_space_and_comma() {
        let board = Board::new();
        assert_eq!(parse_coords("3 4", &board).unwrap(), Coords::new(3, 4));
        assert_eq!(parse_coords("3,4\n", &board).unwrap(), Coords::new(3, 4));
        assert_eq!(parse_coords("  14 , 0 ", &board).unwrap(), Coords::new(14, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let board = Board::new();
        for line in ["", "7", "a b", "1 2 3", "7;7"] {
            assert!(
                matches!(parse_coords(line, &board), Err(GameError::InvalidInput(_))),
                "{:?} should be rejected",
                line
            );
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        let board = Board::with_size(9).unwrap();
        assert!(matches!(
            parse_coords("9 0", &board),
            Err(GameError::OutOfRange { row: 9, col: 0, size: 9 })
        ));
        assert!(matches!(
            parse_coords("-1 3", &board),
            Err(GameError::OutOfRange { row: -1, .. })
        ));
    }

    #[test]
    fn test_reads_valid_move() {
        let board = Board::new();
        let mut player = human("7 8\n");
        assert_eq!(player.produce_move(&board, Player::White).unwrap(), Coords::new(7, 8));

        let out = String::from_utf8(player.into_output()).unwrap();
        assert!(out.contains("Tester (White) move"));
    }

    #[test]
    fn test_reprompts_until_playable() {
        let mut board = Board::new();
        board.set(Coords::new(7, 7), TileState::White).unwrap();

        let mut player = human("hello\n20 20\n7 7\n7,6\n");
        assert_eq!(player.produce_move(&board, Player::Black).unwrap(), Coords::new(7, 6));

        let out = String::from_utf8(player.into_output()).unwrap();
        assert_eq!(out.matches("move [row col]").count(), 4);
        assert!(out.contains("already taken"));
        assert!(out.contains("outside"));
    }

    #[test]
    fn test_closed_input_is_io_error() {
        let board = Board::new();
        let mut player = human("bad\n");
        match player.produce_move(&board, Player::White) {
            Err(GameError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected EOF error, got {:?}", other),
        }
    }

    #[test]
    fn test_successive_moves_share_input() {
        let mut board = Board::new();
        let mut player = human("0 0\n1 1\n");

        let first = player.produce_move(&board, Player::White).unwrap();
        board.set(first, TileState::White).unwrap();
        let second = player.produce_move(&board, Player::White).unwrap();
        assert_eq!((first, second), (Coords::new(0, 0), Coords::new(1, 1)));
    }
}
