//! Static positional heuristic.
//!
//! Each winning line scores +1, +10 or +100 for one, two or three of the
//! current player's marks on an otherwise open line, and the negation of
//! that for the waiting player. A line holding both players' marks is
//! blocked and scores 0. The board score is the sum over all eight lines.

use crate::board::Board;
use crate::lines::WinLine;
use crate::types::{Square, Turn};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which per-line scoring rule to apply.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Heuristic {
    /// Zero on any mixed line, otherwise escalate strictly by sign.
    #[default]
    Corrected,
    /// Reproduces the historical scoring exactly, including its handling
    /// of a waiting-player mark in the third space after a lone
    /// current-player mark in the first: that line scores -1, not 0.
    Faithful,
}

impl Heuristic {
    /// Scores a single line from `turn.current()`'s perspective.
    pub fn evaluate_line(self, board: &Board, line: WinLine, turn: Turn) -> i32 {
        let squares = line.cells().map(|i| board.squares()[i]);
        match self {
            Heuristic::Corrected => corrected_line(squares, turn),
            Heuristic::Faithful => faithful_line(squares, turn),
        }
    }

    /// Sums the line scores over all eight lines.
    #[instrument(level = "trace", skip(board), ret)]
    pub fn evaluate(self, board: &Board, turn: Turn) -> i32 {
        WinLine::all()
            .map(|line| self.evaluate_line(board, line, turn))
            .sum()
    }
}

/// +1 for the current player, -1 for the waiting player, 0 if open.
fn sign(square: Square, turn: Turn) -> i32 {
    match square.mark() {
        Some(mark) if mark == turn.current() => 1,
        Some(mark) if mark == turn.waiting() => -1,
        _ => 0,
    }
}

fn corrected_line(squares: [Square; 3], turn: Turn) -> i32 {
    let mut score: i32 = 0;
    for square in squares {
        score = match (score.signum(), sign(square, turn)) {
            (_, 0) => score,
            (0, s) => s,
            (held, s) if held == s => score * 10,
            _ => return 0,
        };
    }
    score
}

fn faithful_line(squares: [Square; 3], turn: Turn) -> i32 {
    let [first, second, third] = squares.map(|square| sign(square, turn));

    let mut score = first;

    score = match second {
        1 if score == 1 => 10,
        1 if score == -1 => return 0,
        1 => 1,
        -1 if score == -1 => -10,
        -1 if score == 1 => return 0,
        -1 => -1,
        _ => score,
    };

    match third {
        1 if score > 0 => score * 10,
        1 if score < 0 => 0,
        1 => 1,
        -1 if score < 0 => score * 10,
        -1 if score > 1 => 0,
        -1 => -1,
        _ => score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;
    use strum::IntoEnumIterator;

    fn turn() -> Turn {
        Turn::new(Mark::COMPUTER, Mark::HUMAN).unwrap()
    }

    fn board(human: &[usize], computer: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in human {
            board.mark_space(i, Mark::HUMAN).unwrap();
        }
        for &i in computer {
            board.mark_space(i, Mark::COMPUTER).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_scores_zero() {
        for h in Heuristic::iter() {
            assert_eq!(h.evaluate(&Board::new(), turn()), 0);
        }
    }

    #[test]
    fn test_line_escalation() {
        for h in Heuristic::iter() {
            let b = board(&[], &[0]);
            assert_eq!(h.evaluate_line(&b, WinLine::TopRow, turn()), 1);
            let b = board(&[], &[0, 1]);
            assert_eq!(h.evaluate_line(&b, WinLine::TopRow, turn()), 10);
            let b = board(&[], &[0, 1, 2]);
            assert_eq!(h.evaluate_line(&b, WinLine::TopRow, turn()), 100);
            let b = board(&[1, 2], &[]);
            assert_eq!(h.evaluate_line(&b, WinLine::TopRow, turn()), -10);
            let b = board(&[0, 1, 2], &[]);
            assert_eq!(h.evaluate_line(&b, WinLine::TopRow, turn()), -100);
        }
    }

    #[test]
    fn test_mixed_line_is_blocked() {
        for h in Heuristic::iter() {
            let b = board(&[1], &[0]);
            assert_eq!(h.evaluate_line(&b, WinLine::TopRow, turn()), 0);
            let b = board(&[0], &[2]);
            assert_eq!(h.evaluate_line(&b, WinLine::TopRow, turn()), 0);
            let b = board(&[0, 1], &[2]);
            assert_eq!(h.evaluate_line(&b, WinLine::TopRow, turn()), 0);
        }
    }

    #[test]
    fn test_faithful_third_space_asymmetry() {
        // Current player first, open middle, waiting player last.
        let b = board(&[2], &[0]);
        assert_eq!(
            Heuristic::Faithful.evaluate_line(&b, WinLine::TopRow, turn()),
            -1
        );
        assert_eq!(
            Heuristic::Corrected.evaluate_line(&b, WinLine::TopRow, turn()),
            0
        );
    }

    #[test]
    fn test_board_scores() {
        for h in Heuristic::iter() {
            assert_eq!(h.evaluate(&board(&[0], &[4]), turn()), 1);
            assert_eq!(h.evaluate(&board(&[0, 1], &[4, 8]), turn()), -7);
            assert_eq!(h.evaluate(&board(&[0, 2], &[4]), turn()), -10);
            assert_eq!(h.evaluate(&board(&[0, 1, 2], &[3, 4]), turn()), -91);
            assert_eq!(h.evaluate(&board(&[0, 1], &[4, 8]), turn().swapped()), 7);
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("faithful".parse::<Heuristic>(), Ok(Heuristic::Faithful));
        assert_eq!("corrected".parse::<Heuristic>(), Ok(Heuristic::Corrected));
        assert!("optimal".parse::<Heuristic>().is_err());
        assert_eq!(Heuristic::Faithful.to_string(), "faithful");
        assert_eq!(Heuristic::default(), Heuristic::Corrected);
    }
}
