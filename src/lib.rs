//! Gomoku (five in a row) with a minimax AI
//!
//! Two players alternate on a fixed 20x20 board; the first to line up five
//! stones on a row, column or diagonal wins. A full board without five is
//! a tie.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, line geometry and text snapshots
//! - [`rules`]: Win and tie detection
//! - [`eval`]: Catalogue of tactical shapes
//! - [`search`]: Threat scanner, move narrowing and alpha-beta search
//! - [`engine`]: AI engine wiring configuration and randomness to the search
//! - [`config`]: TOML configuration
//! - [`ui`]: Desktop front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, rules};
//!
//! let mut board = Board::new();
//! board.play(Pos::new(10, 10)).unwrap();
//!
//! let mut engine = AIEngine::with_config(&EngineConfig { max_depth: 3, ..Default::default() });
//! if let Some(pos) = engine.choose_move(&board) {
//!     board.play(pos).unwrap();
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! assert!(!rules::is_over(&board));
//! ```
//!
//! # Search
//!
//! Each node of the search asks the threat scanner for the cells that
//! matter to either side and only expands those:
//! 1. An opposing four is answered at once, without searching
//! 2. Own shapes at least as strong as the opponent's are extended
//! 3. Otherwise the strongest opposing shapes are blocked
//! 4. With no shapes at all, a cell next to own stones near the center

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::{EngineConfig, GameConfig, UiConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, FormatError, GameError};
pub use rules::Outcome;
