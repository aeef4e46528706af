//! Line geometry shared by win detection and threat scanning
//!
//! Every row, column and diagonal of the board, in a fixed order:
//! rows top to bottom, columns left to right, then the `↘` diagonals and
//! finally the `↙` diagonals, each family walked from the top-right offset
//! to the bottom-left one.

use std::sync::OnceLock;

use super::{Pos, BOARD_SIZE};

/// An ordered run of cells along one direction
pub type Line = Vec<Pos>;

static LINES: OnceLock<Vec<Line>> = OnceLock::new();

/// All board lines, built on first use.
pub fn lines() -> &'static [Line] {
    LINES.get_or_init(build_lines)
}

fn build_lines() -> Vec<Line> {
    let n = BOARD_SIZE as i32;
    let mut out = Vec::with_capacity(2 * BOARD_SIZE + 2 * (2 * BOARD_SIZE - 1));

    for r in 0..BOARD_SIZE as u8 {
        out.push((0..BOARD_SIZE as u8).map(|c| Pos::new(r, c)).collect());
    }
    for c in 0..BOARD_SIZE as u8 {
        out.push((0..BOARD_SIZE as u8).map(|r| Pos::new(r, c)).collect());
    }

    // ↘: cells where col - row == d
    for d in (-(n - 1)..n).rev() {
        out.push(
            (0..n)
                .filter_map(|r| Pos::try_new(r, r + d))
                .collect(),
        );
    }

    // ↙: cells where row + col == s
    for s in 0..(2 * n - 1) {
        out.push(
            (0..n)
                .filter_map(|r| Pos::try_new(r, s - r))
                .collect(),
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        // 20 rows + 20 columns + 39 diagonals per direction
        assert_eq!(lines().len(), 2 * BOARD_SIZE + 2 * (2 * BOARD_SIZE - 1));
    }

    #[test]
    fn test_every_cell_on_four_lines() {
        let mut seen = vec![0u8; BOARD_SIZE * BOARD_SIZE];
        for line in lines() {
            for pos in line {
                seen[pos.to_index()] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 4));
    }

    #[test]
    fn test_diagonals_are_contiguous() {
        for line in lines() {
            for pair in line.windows(2) {
                let dr = pair[1].row as i32 - pair[0].row as i32;
                let dc = pair[1].col as i32 - pair[0].col as i32;
                assert!(dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0));
            }
        }
    }

    #[test]
    fn test_main_diagonal_full_length() {
        let main = lines()
            .iter()
            .find(|l| l.first() == Some(&Pos::new(0, 0)) && l.len() == BOARD_SIZE && l[1] == Pos::new(1, 1))
            .expect("main diagonal present");
        assert_eq!(main.last(), Some(&Pos::new(19, 19)));
    }
}
