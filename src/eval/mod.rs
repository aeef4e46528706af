//! Tactical shape recognition for Gomoku positions
//!
//! This module holds the static catalogue of line shapes the threat
//! scanner looks for. Shapes are written from the point of view of the
//! color being scanned:
//! - fours, open or closed on one end
//! - broken fours with a single gap
//! - open and split threes
//! - open twos

pub mod patterns;

pub use patterns::{Cell, Template, TEMPLATES};
