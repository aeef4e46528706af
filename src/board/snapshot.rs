//! Text snapshot of a board for callers that keep no state between requests
//!
//! Format: the active mark, a `|`, then the rows joined by `/`, each row one
//! character per cell (`.`, `X`, `O`):
//!
//! ```text
//! O|..X.................../..................../...
//! ```

use std::str::FromStr;

use super::{Board, Pos, Stone, BOARD_SIZE};
use crate::error::{FormatError, GameError};

const SEPARATOR: char = '|';
const ROW_SEPARATOR: char = '/';

impl Board {
    /// Encode the board and the side to move
    pub fn to_snapshot(&self) -> String {
        let mut out = String::with_capacity(2 + BOARD_SIZE * (BOARD_SIZE + 1));
        out.push(self.active().symbol());
        out.push(SEPARATOR);
        for row in 0..BOARD_SIZE {
            if row > 0 {
                out.push(ROW_SEPARATOR);
            }
            for col in 0..BOARD_SIZE {
                out.push(self.get(Pos::new(row as u8, col as u8)).symbol());
            }
        }
        out
    }

    /// Decode a snapshot produced by [`Board::to_snapshot`].
    ///
    /// The whole input is validated before any board is produced.
    pub fn from_snapshot(input: &str) -> Result<Board, GameError> {
        let (active, cells) = input
            .trim()
            .split_once(SEPARATOR)
            .ok_or(FormatError::MissingSeparator)?;

        let mut chars = active.chars();
        let active = match (chars.next(), chars.next()) {
            (Some(c), None) => match Stone::from_symbol(c) {
                Some(stone @ (Stone::Black | Stone::White)) => stone,
                _ => return Err(FormatError::InvalidActive(c).into()),
            },
            (Some(c), Some(_)) => return Err(FormatError::InvalidActive(c).into()),
            (None, _) => return Err(FormatError::InvalidActive(' ').into()),
        };

        let rows: Vec<&str> = cells.split(ROW_SEPARATOR).collect();
        if rows.len() != BOARD_SIZE {
            return Err(FormatError::RowCount {
                expected: BOARD_SIZE,
                got: rows.len(),
            }
            .into());
        }

        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let len = text.chars().count();
            if len != BOARD_SIZE {
                return Err(FormatError::RowLength {
                    row,
                    expected: BOARD_SIZE,
                    got: len,
                }
                .into());
            }
            for (col, character) in text.chars().enumerate() {
                let stone = Stone::from_symbol(character).ok_or(FormatError::InvalidCell {
                    row,
                    col,
                    character,
                })?;
                board.place_stone(Pos::new(row as u8, col as u8), stone);
            }
        }
        board.set_active(active);
        Ok(board)
    }
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_snapshot(s)
    }
}
