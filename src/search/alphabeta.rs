//! Depth-limited minimax with alpha-beta pruning
//!
//! Every node expands only the candidates returned by
//! [`best_moves`](super::narrow::best_moves), so the branching factor stays
//! in single digits instead of the number of empty cells.
//!
//! The search is a pure recursion: each call owns a copy of its board and
//! returns `(score, move)` to its parent. The chosen move is only kept at
//! the root, so one `Searcher` can serve any number of searches.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::Searcher;
//! use rand::SeedableRng;
//!
//! let mut board = Board::new();
//! board.play(Pos::new(10, 10)).unwrap();
//!
//! let searcher = Searcher::new(3);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let result = searcher.search(&board, &mut rng);
//! assert_eq!(board.active(), Stone::White);
//! assert!(result.best_move.is_some());
//! ```

use rand::Rng;

use super::narrow::{best_moves, MoveKind, DEFAULT_FALLBACK_CAP};
use crate::board::{Board, Pos, Stone};
use crate::rules::{evaluate, Outcome};

/// Score of a won position before the depth penalty
pub const WIN_SCORE: i32 = 100;

/// Bound for the alpha-beta window
pub const INF: i32 = 999;

/// Search result containing the chosen move and statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Move chosen at the root, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the root
    pub score: i32,
    /// Nodes visited
    pub nodes: u64,
    /// How the root candidates were narrowed; `None` on a finished board
    pub root_kind: Option<MoveKind>,
}

impl SearchResult {
    /// The root only had a forced reply, nothing was searched
    #[inline]
    pub fn forced(&self) -> bool {
        self.root_kind == Some(MoveKind::Forced)
    }
}

/// What a node hands back to its parent
struct NodeValue {
    score: i32,
    /// Chosen move, only set at the root
    choice: Option<Pos>,
    /// Narrowing used at the root
    kind: Option<MoveKind>,
}

impl NodeValue {
    #[inline]
    fn leaf(score: i32) -> Self {
        Self {
            score,
            choice: None,
            kind: None,
        }
    }
}

/// Minimax searcher
#[derive(Debug, Clone)]
pub struct Searcher {
    max_depth: u8,
    fallback_cap: usize,
}

impl Searcher {
    /// Searcher with the default opening cap
    pub fn new(max_depth: u8) -> Self {
        Self::with_cap(max_depth, DEFAULT_FALLBACK_CAP)
    }

    pub fn with_cap(max_depth: u8, fallback_cap: usize) -> Self {
        Self {
            max_depth,
            fallback_cap,
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    #[inline]
    pub fn set_max_depth(&mut self, depth: u8) {
        self.max_depth = depth;
    }

    /// Choose a move for the side to move on `board`.
    ///
    /// Scores are from that side's point of view. `board` must not be
    /// terminal: on a finished board the result has no move and carries the
    /// terminal score.
    pub fn search<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> SearchResult {
        let mut nodes = 0u64;
        let root = self.alpha_beta(board, board.active(), 0, -INF, INF, rng, &mut nodes);
        SearchResult {
            best_move: root.choice,
            score: root.score,
            nodes,
            root_kind: root.kind,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn alpha_beta<R: Rng + ?Sized>(
        &self,
        board: &Board,
        stone: Stone,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        rng: &mut R,
        nodes: &mut u64,
    ) -> NodeValue {
        *nodes += 1;

        match evaluate(board) {
            Outcome::Win(winner) if winner == stone => {
                return NodeValue::leaf(WIN_SCORE - depth as i32)
            }
            Outcome::Win(_) => return NodeValue::leaf(-(WIN_SCORE - depth as i32)),
            Outcome::Tie => return NodeValue::leaf(0),
            Outcome::Ongoing => {}
        }
        if depth > self.max_depth {
            return NodeValue::leaf(0);
        }

        let narrowed = best_moves(board, self.fallback_cap, rng);
        let kind = (depth == 0).then_some(narrowed.kind);

        // A four against us leaves exactly one reply, no need to look further
        if depth == 0 && narrowed.kind == MoveKind::Forced {
            return NodeValue {
                score: 0,
                choice: narrowed.moves.first().copied(),
                kind,
            };
        }

        let mut choice = None;

        if board.active() == stone {
            let mut best = -INF;
            for mov in narrowed.moves {
                let Ok(child) = board.apply(mov) else {
                    continue;
                };
                let score = self
                    .alpha_beta(&child, stone, depth + 1, alpha, beta, rng, nodes)
                    .score;
                if depth == 0 && score > best {
                    choice = Some(mov);
                }
                best = best.max(score);
                alpha = alpha.max(best);
                if alpha >= beta {
                    break;
                }
            }
            NodeValue {
                score: best,
                choice,
                kind,
            }
        } else {
            let mut worst = INF;
            for mov in narrowed.moves {
                let Ok(child) = board.apply(mov) else {
                    continue;
                };
                let score = self
                    .alpha_beta(&child, stone, depth + 1, alpha, beta, rng, nodes)
                    .score;
                worst = worst.min(score);
                beta = beta.min(worst);
                if alpha >= beta {
                    break;
                }
            }
            NodeValue {
                score: worst,
                choice,
                kind,
            }
        }
    }
}
