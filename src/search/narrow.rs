//! Candidate move selection
//!
//! Instead of expanding every empty cell, each search node only looks at
//! the cells the threat scanner flags for either side. Without tactical
//! shapes on the board (the opening), it falls back to cells next to the
//! side's own stones, nearest the center first.

use rand::seq::SliceRandom;
use rand::Rng;

use super::threat::scan;
use crate::board::{Board, Pos, Stone, BOARD_SIZE};

/// Default number of opening candidates kept after the center tie-break
pub const DEFAULT_FALLBACK_CAP: usize = 4;

/// Severity from which an opposing threat must be answered at once
pub const FORCING_SEVERITY: f32 = 4.0;

/// Why these candidates were chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Own shapes are at least as strong as the opponent's
    Attack,
    /// Opponent shapes are stronger and must be answered
    Defense,
    /// Opponent has a four: single forced reply
    Forced,
    /// No shapes for the side to move: proximity fallback
    Opening,
}

/// Candidate moves for a node
#[derive(Debug, Clone, PartialEq)]
pub struct Narrowed {
    pub moves: Vec<Pos>,
    pub severity: f32,
    pub kind: MoveKind,
}

/// Narrow the moves for the side to move on `board`.
///
/// `rng` is only consulted on the opening path, which picks one of the
/// proximity candidates at random.
pub fn best_moves<R: Rng + ?Sized>(board: &Board, fallback_cap: usize, rng: &mut R) -> Narrowed {
    let me = board.active();
    let defense = scan(board, me.opponent());
    let attack = scan(board, me);

    let narrowed = if attack.max_severity >= defense.max_severity {
        if !attack.is_empty() {
            Narrowed {
                moves: attack.strongest().collect(),
                severity: attack.max_severity,
                kind: MoveKind::Attack,
            }
        } else {
            let lite = lite_best_moves(board, me, fallback_cap);
            Narrowed {
                moves: lite.choose(rng).copied().into_iter().collect(),
                severity: attack.max_severity,
                kind: MoveKind::Opening,
            }
        }
    } else if defense.max_severity >= FORCING_SEVERITY {
        Narrowed {
            moves: defense.strongest().take(1).collect(),
            severity: defense.max_severity,
            kind: MoveKind::Forced,
        }
    } else {
        Narrowed {
            moves: defense.strongest().collect(),
            severity: defense.max_severity,
            kind: MoveKind::Defense,
        }
    };

    log::trace!(
        "narrowed {:?} for {:?}: {} candidates at severity {}",
        narrowed.kind,
        me,
        narrowed.moves.len(),
        narrowed.severity
    );
    narrowed
}

/// Empty cells with the most `stone` neighbours.
///
/// When more than `cap` cells tie, keep the `cap` closest to the center.
/// Ties in distance keep row-major order.
pub fn lite_best_moves(board: &Board, stone: Stone, cap: usize) -> Vec<Pos> {
    let mut best: Vec<Pos> = Vec::new();
    let mut max_allies: Option<usize> = None;

    for pos in board.empty_cells() {
        let allies = count_neighbors(board, pos, stone);
        match max_allies {
            Some(m) if allies < m => {}
            Some(m) if allies == m => best.push(pos),
            _ => {
                best.clear();
                best.push(pos);
                max_allies = Some(allies);
            }
        }
    }

    if best.len() > cap {
        let center = Pos::center();
        best.sort_by(|a, b| a.distance(center).total_cmp(&b.distance(center)));
        best.truncate(cap);
    }
    best
}

/// Number of `stone` stones in the 8 cells around `pos`
fn count_neighbors(board: &Board, pos: Pos, stone: Stone) -> usize {
    let mut count = 0;
    for dr in -1i32..=1 {
        for dc in -1i32..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = pos.row as i32 + dr;
            let c = pos.col as i32 + dc;
            if r < 0 || c < 0 || r >= BOARD_SIZE as i32 || c >= BOARD_SIZE as i32 {
                continue;
            }
            if board.get(Pos::new(r as u8, c as u8)) == stone {
                count += 1;
            }
        }
    }
    count
}
