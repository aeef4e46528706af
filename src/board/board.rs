//! Board structure with turn tracking

use std::fmt;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::GameError;

/// Game board: occupancy per color plus the color to move.
///
/// `Board` is `Copy`, so transitions hand back an independent snapshot and
/// the search can give every node its own board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
    /// Color whose turn it is
    active: Stone,
}

/// Per-mark cell counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkCounts {
    pub black: u32,
    pub white: u32,
    pub empty: u32,
}

impl Board {
    /// Empty board with Black to move
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            active: Stone::Black,
        }
    }

    /// Alias of [`Board::new`]
    #[inline]
    pub fn empty() -> Self {
        Self::new()
    }

    /// Color to move next
    #[inline]
    pub fn active(&self) -> Stone {
        self.active
    }

    /// Override the color to move (position setup only)
    #[inline]
    pub fn set_active(&mut self, stone: Stone) {
        debug_assert!(stone != Stone::Empty);
        self.active = stone;
    }

    /// Get stone at position. Cells off the grid read as `Empty`.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if !pos.in_bounds() {
            Stone::Empty
        } else if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// A free cell on the grid. Off-grid positions are never free.
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        pos.in_bounds() && !self.black.get(pos) && !self.white.get(pos)
    }

    /// Holds a stone. Off-grid positions never do.
    #[inline]
    pub fn is_occupied(&self, pos: Pos) -> bool {
        pos.in_bounds() && (self.black.get(pos) || self.white.get(pos))
    }

    /// Return a new board with the active color played at `pos`.
    ///
    /// `self` is left untouched whether or not the move is legal.
    pub fn apply(&self, pos: Pos) -> Result<Board, GameError> {
        let mut next = *self;
        next.play(pos)?;
        Ok(next)
    }

    /// Play the active color at `pos` in place and pass the turn.
    ///
    /// Fails without modifying the board if `pos` is outside the grid or
    /// already holds a stone.
    pub fn play(&mut self, pos: Pos) -> Result<(), GameError> {
        if !pos.in_bounds() || self.is_occupied(pos) {
            return Err(GameError::OccupiedOrOutOfRange {
                row: pos.row,
                col: pos.col,
            });
        }
        self.place_stone(pos, self.active);
        self.active = self.active.opponent();
        Ok(())
    }

    /// Place a stone without touching the turn.
    /// Use `play` or `apply` for game moves. Off-grid positions are ignored.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        if !pos.in_bounds() {
            return;
        }
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(move |&pos| self.is_empty(pos))
    }

    pub fn count_marks(&self) -> MarkCounts {
        let black = self.black.count();
        let white = self.white.count();
        MarkCounts {
            black,
            white,
            empty: TOTAL_CELLS as u32 - black - white,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// No empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{:2} ", col)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{:2} ", row)?;
            for col in 0..BOARD_SIZE {
                let stone = self.get(Pos::new(row as u8, col as u8));
                write!(f, " {} ", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
