//! Search module for the Gomoku AI
//!
//! Contains:
//! - Threat scanner over the pattern catalogue
//! - Move narrowing built on the scanner
//! - Minimax with alpha-beta pruning

pub mod alphabeta;
pub mod narrow;
pub mod threat;

pub use alphabeta::{SearchResult, Searcher, INF, WIN_SCORE};
pub use narrow::{best_moves, lite_best_moves, MoveKind, Narrowed};
pub use threat::{scan, Threat, ThreatScan};
