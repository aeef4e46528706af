//! Board representation for Gomoku

pub mod bitboard;
pub mod board;
pub mod lines;
pub mod snapshot;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, MarkCounts};
pub use lines::{lines, Line};

/// Board size (20x20)
pub const BOARD_SIZE: usize = 20;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 400

/// Stone colors. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Character used by the text renderer and the snapshot codec
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
            Stone::Empty => '.',
        }
    }

    /// Inverse of [`Stone::symbol`]
    #[inline]
    pub fn from_symbol(c: char) -> Option<Stone> {
        match c {
            'X' => Some(Stone::Black),
            'O' => Some(Stone::White),
            '.' => Some(Stone::Empty),
            _ => None,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Checked constructor from signed coordinates
    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if Self::is_valid(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// True when both coordinates are inside the board
    #[inline]
    pub fn in_bounds(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Board center, used to break ties between opening candidates
    #[inline]
    pub fn center() -> Self {
        Self::new((BOARD_SIZE / 2) as u8, (BOARD_SIZE / 2) as u8)
    }

    /// Euclidean distance between two positions
    pub fn distance(self, other: Pos) -> f32 {
        let dr = self.row as f32 - other.row as f32;
        let dc = self.col as f32 - other.col as f32;
        (dr * dr + dc * dc).sqrt()
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
