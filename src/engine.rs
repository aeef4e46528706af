//! Main AI engine
//!
//! Wraps the minimax [`Searcher`] with its configuration and a seedable
//! random source, and reports how each move was found.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let config = EngineConfig { max_depth: 3, seed: Some(7), ..Default::default() };
//! let mut engine = AIEngine::with_config(&config);
//!
//! let mut board = Board::new();
//! board.play(Pos::new(10, 10)).unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Stone::White).unwrap();
//! assert!(engine.get_move(&board, Stone::Black).is_err());
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::error::GameError;
use crate::search::{MoveKind, Searcher};

/// How the engine arrived at its move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Single forced reply to an opposing four, no search
    Forced,
    /// No shapes on the board yet, proximity fallback
    Opening,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the root
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Main AI Engine for Gomoku.
///
/// Every call starts a fresh search: nothing but the random stream carries
/// over from one move to the next. The random stream only matters when no
/// tactical shape is on the board, so with a fixed `seed` the engine is
/// fully reproducible.
pub struct AIEngine {
    searcher: Searcher,
    rng: StdRng,
}

impl AIEngine {
    /// Engine with default settings and an entropy-seeded random source
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Engine built from `config`
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            searcher: Searcher::with_cap(config.max_depth, config.fallback_cap),
            rng,
        }
    }

    /// Best move for `color`, or `None` on a finished board.
    ///
    /// Fails with [`GameError::NotOnTurn`] unless `color` is the side to move.
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Result<Option<Pos>, GameError> {
        Ok(self.get_move_with_stats(board, color)?.best_move)
    }

    /// Best move for the side to move on `board`
    #[must_use]
    pub fn choose_move(&mut self, board: &Board) -> Option<Pos> {
        self.choose_move_with_stats(board).best_move
    }

    /// Best move for `color` with search statistics.
    ///
    /// Fails with [`GameError::NotOnTurn`] unless `color` is the side to move.
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> Result<MoveResult, GameError> {
        if color != board.active() {
            return Err(GameError::NotOnTurn {
                requested: color,
                active: board.active(),
            });
        }
        Ok(self.choose_move_with_stats(board))
    }

    /// Search for the side to move and report statistics.
    ///
    /// `board` must still be in play. A finished board yields no move.
    pub fn choose_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(board, &mut self.rng);

        let search_type = match result.root_kind {
            Some(MoveKind::Forced) => SearchType::Forced,
            Some(MoveKind::Opening) => SearchType::Opening,
            _ => SearchType::AlphaBeta,
        };
        let time_ms = start.elapsed().as_millis() as u64;

        log::debug!(
            "{:?} plays {:?} via {:?}: score {}, {} nodes, {}ms",
            board.active(),
            result.best_move,
            search_type,
            result.score,
            result.nodes,
            time_ms
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            search_type,
            time_ms,
            nodes: result.nodes,
        }
    }

    /// Change the depth cutoff for later searches
    pub fn set_max_depth(&mut self, depth: u8) {
        self.searcher.set_max_depth(depth);
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.searcher.max_depth()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{evaluate, Outcome};

    fn seeded(depth: u8) -> AIEngine {
        AIEngine::with_config(&EngineConfig {
            max_depth: depth,
            seed: Some(11),
            ..EngineConfig::default()
        })
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.max_depth(), 6);
    }

    #[test]
    fn test_engine_set_depth() {
        let mut engine = seeded(4);
        assert_eq!(engine.max_depth(), 4);
        engine.set_max_depth(2);
        assert_eq!(engine.max_depth(), 2);
    }

    #[test]
    fn test_engine_first_move_near_center() {
        let board = Board::new();
        let result = seeded(3).get_move_with_stats(&board, Stone::Black).unwrap();
        let pos = result.best_move.unwrap();
        assert!(pos.distance(Pos::center()) <= 1.0);
        assert_eq!(result.search_type, SearchType::Opening);
    }

    #[test]
    fn test_engine_blocks_four() {
        let mut board = Board::new();
        board.place_stone(Pos::new(5, 2), Stone::Black);
        for c in 3..7 {
            board.place_stone(Pos::new(5, c), Stone::White);
        }
        for (r, c) in [(15, 15), (15, 17), (17, 15)] {
            board.place_stone(Pos::new(r, c), Stone::Black);
        }

        let result = seeded(6).get_move_with_stats(&board, Stone::Black).unwrap();
        assert_eq!(result.best_move, Some(Pos::new(5, 7)));
        assert_eq!(result.search_type, SearchType::Forced);
    }

    #[test]
    fn test_engine_completes_five() {
        let mut board = Board::new();
        for c in 0..4 {
            board.place_stone(Pos::new(9, c), Stone::White);
        }
        for (r, c) in [(0, 10), (2, 12), (4, 14), (19, 19)] {
            board.place_stone(Pos::new(r, c), Stone::Black);
        }
        board.set_active(Stone::White);

        let mut engine = seeded(4);
        let mov = engine.choose_move(&board).unwrap();
        assert_eq!(mov, Pos::new(9, 4));
        let after = board.apply(mov).unwrap();
        assert_eq!(evaluate(&after), Outcome::Win(Stone::White));
    }

    #[test]
    fn test_engine_reproducible_with_seed() {
        let mut board = Board::new();
        board.play(Pos::new(10, 10)).unwrap();
        let a = seeded(3).get_move(&board, Stone::White).unwrap();
        let b = seeded(3).get_move(&board, Stone::White).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_engine_multiple_searches() {
        let mut engine = seeded(3);
        let mut board = Board::new();
        for _ in 0..4 {
            let mov = engine.choose_move(&board).unwrap();
            board.play(mov).unwrap();
        }
        assert_eq!(board.stone_count(), 4);
        assert_eq!(evaluate(&board), Outcome::Ongoing);
    }

    #[test]
    fn test_engine_finished_board_has_no_move() {
        let mut board = Board::new();
        for c in 0..5 {
            board.place_stone(Pos::new(0, c), Stone::Black);
        }
        let mut engine = seeded(3);
        assert_eq!(engine.get_move(&board, Stone::Black), Ok(None));
    }

    #[test]
    fn test_engine_rejects_color_not_on_turn() {
        let mut board = Board::new();
        board.play(Pos::new(10, 10)).unwrap();
        assert_eq!(evaluate(&board), Outcome::Ongoing);

        let mut engine = seeded(3);
        assert_eq!(
            engine.get_move_with_stats(&board, Stone::Black).unwrap_err(),
            GameError::NotOnTurn {
                requested: Stone::Black,
                active: Stone::White,
            }
        );
        let mov = engine.get_move(&board, Stone::White).unwrap();
        assert!(mov.is_some_and(|pos| board.is_empty(pos)));
    }
}
