//! Threat templates for the scanner
//!
//! Each template is a short run of cells seen from the scanned color:
//! `S` for its own stone, `O` for an opposing stone and `_` for an empty
//! cell. Every empty cell of a matched window is a candidate move.
//! The table order is also the scan order, and the scanner's overlap
//! bonus depends on it.

use crate::board::Stone;

/// Cell as seen from the scanned color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Stone of the scanned color
    Subject,
    /// Stone of the other color
    Opponent,
    Empty,
}

impl Cell {
    /// Project a stone onto `subject`'s point of view
    #[inline]
    pub fn relative(stone: Stone, subject: Stone) -> Cell {
        if stone == Stone::Empty {
            Cell::Empty
        } else if stone == subject {
            Cell::Subject
        } else {
            Cell::Opponent
        }
    }
}

/// A tactical shape
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub cells: &'static [Cell],
}

impl Template {
    /// Base severity: the number of own stones in the shape
    pub fn severity(&self) -> f32 {
        self.cells.iter().filter(|&&c| c == Cell::Subject).count() as f32
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `window` (same length as the template) holds this shape
    #[inline]
    pub fn matches(&self, window: &[Cell]) -> bool {
        self.cells == window
    }
}

use Cell::{Empty as E, Opponent as O, Subject as S};

/// The full template catalogue, in scan order
pub const TEMPLATES: [Template; 16] = [
    Template { name: "four blocked left", cells: &[O, S, S, S, S, E] },
    Template { name: "four blocked right", cells: &[E, S, S, S, S, O] },
    Template { name: "four open right", cells: &[S, S, S, S, E] },
    Template { name: "four open left", cells: &[E, S, S, S, S] },
    Template { name: "open four", cells: &[E, S, S, S, S, E] },
    Template { name: "split four 3-1", cells: &[S, S, S, E, S] },
    Template { name: "split four 1-3", cells: &[S, E, S, S, S] },
    Template { name: "split four 2-2", cells: &[S, S, E, S, S] },
    Template { name: "split three 1-2", cells: &[E, S, E, S, S, E] },
    Template { name: "split three 2-1", cells: &[E, S, S, E, S, E] },
    Template { name: "open three", cells: &[E, S, S, S, E] },
    Template { name: "wide three blocked left", cells: &[O, E, S, S, S, E, E] },
    Template { name: "wide three blocked right", cells: &[E, E, S, S, S, E, O] },
    Template { name: "three blocked left", cells: &[O, S, S, S, E] },
    Template { name: "three blocked right", cells: &[E, S, S, S, O] },
    Template { name: "open two", cells: &[E, S, S, E] },
];
