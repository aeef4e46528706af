//! Threat scanner
//!
//! Finds the empty cells that complete or extend a tactical shape for one
//! color, and scores each of them. The move narrower runs it for both sides
//! to decide whether a node should attack or defend.
//!
//! Scores start at the template's base severity. When several matches land
//! on the same cell, the cell earns an overlap bonus of `0.5` over the
//! larger of the two scores. A cell that already carries the bonus has it
//! removed before the comparison, so repeated overlaps never stack it.

use crate::board::{lines, Board, Pos, Stone, TOTAL_CELLS};
use crate::eval::{Cell, TEMPLATES};

/// Bonus for a cell hit by more than one match
pub const OVERLAP_BONUS: f32 = 0.5;

/// A candidate cell and how urgent playing there is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threat {
    pub pos: Pos,
    pub severity: f32,
}

/// Result of scanning a board for one color
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreatScan {
    /// Candidate cells in the order they were first found
    pub threats: Vec<Threat>,
    /// Highest severity in `threats`, 0 when there are none
    pub max_severity: f32,
}

impl ThreatScan {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.threats.is_empty()
    }

    /// Positions whose severity equals `max_severity`, in discovery order
    pub fn strongest(&self) -> impl Iterator<Item = Pos> + '_ {
        self.threats
            .iter()
            .filter(move |t| t.severity == self.max_severity)
            .map(|t| t.pos)
    }
}

/// Combine an existing score with a new match at the same cell
#[inline]
pub fn combine(old: f32, new: f32) -> f32 {
    if old == 3.0 || old == 4.0 {
        old.max(new) + OVERLAP_BONUS
    } else {
        (old - OVERLAP_BONUS).max(new) + OVERLAP_BONUS
    }
}

/// Scan `board` for shapes belonging to `subject`.
pub fn scan(board: &Board, subject: Stone) -> ThreatScan {
    // Project every line once; templates then compare plain cell slices
    let projected: Vec<Vec<Cell>> = lines()
        .iter()
        .map(|line| {
            line.iter()
                .map(|&pos| Cell::relative(board.get(pos), subject))
                .collect()
        })
        .collect();

    let mut slot: [Option<usize>; TOTAL_CELLS] = [None; TOTAL_CELLS];
    let mut threats: Vec<Threat> = Vec::new();

    for template in &TEMPLATES {
        let base = template.severity();
        let len = template.len();

        for (line, cells) in lines().iter().zip(&projected) {
            if cells.len() < len {
                continue;
            }
            for start in 0..=cells.len() - len {
                if !template.matches(&cells[start..start + len]) {
                    continue;
                }
                for (offset, &cell) in template.cells.iter().enumerate() {
                    if cell != Cell::Empty {
                        continue;
                    }
                    let pos = line[start + offset];
                    match slot[pos.to_index()] {
                        Some(i) => {
                            let threat = &mut threats[i];
                            threat.severity = combine(threat.severity, base);
                        }
                        None => {
                            slot[pos.to_index()] = Some(threats.len());
                            threats.push(Threat { pos, severity: base });
                        }
                    }
                }
            }
        }
    }

    let max_severity = threats.iter().map(|t| t.severity).fold(0.0, f32::max);
    ThreatScan {
        threats,
        max_severity,
    }
}
