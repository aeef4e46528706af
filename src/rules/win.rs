//! Terminal-state detection
//!
//! A game ends when either color has five consecutive stones on a row,
//! column or diagonal, or when the board fills up without one.

use crate::board::{lines, Board, Pos, Stone};

/// Result of inspecting a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given color has five in a row
    Win(Stone),
    /// Board full, no five anywhere
    Tie,
    /// Game continues
    Ongoing,
}

impl Outcome {
    #[inline]
    pub fn winner(self) -> Option<Stone> {
        match self {
            Outcome::Win(stone) => Some(stone),
            _ => None,
        }
    }
}

/// Find the first run of five, scanning rows, then columns, then `↘`
/// diagonals, then `↙` diagonals.
///
/// Returns the owning color and the five cells of the run.
pub fn find_five(board: &Board) -> Option<(Stone, [Pos; 5])> {
    for line in lines() {
        let mut run_color = Stone::Empty;
        let mut run_len = 0usize;

        for (i, &pos) in line.iter().enumerate() {
            let stone = board.get(pos);
            if stone != Stone::Empty && stone == run_color {
                run_len += 1;
            } else {
                run_color = stone;
                run_len = usize::from(stone != Stone::Empty);
            }

            if run_len == 5 {
                let start = i + 1 - 5;
                let cells = [
                    line[start],
                    line[start + 1],
                    line[start + 2],
                    line[start + 3],
                    line[start + 4],
                ];
                return Some((run_color, cells));
            }
        }
    }
    None
}

/// Winner, tie or ongoing. Pure: depends only on the stones on `board`.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((stone, _)) = find_five(board) {
        return Outcome::Win(stone);
    }
    if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::Ongoing
    }
}

/// Check if the game has ended (win or tie)
#[inline]
pub fn is_over(board: &Board) -> bool {
    evaluate(board) != Outcome::Ongoing
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    #[test]
    fn test_empty_board_ongoing() {
        let board = Board::new();
        assert_eq!(evaluate(&board), Outcome::Ongoing);
        assert!(!is_over(&board));
        assert!(find_five(&board).is_none());
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert_eq!(evaluate(&board), Outcome::Win(Stone::Black));
        assert_eq!(evaluate(&board).winner(), Some(Stone::Black));
    }

    #[test]
    fn test_five_played_at_row_ten() {
        // Black plays row 10, cols 5..=9 while White answers far away
        let mut board = Board::new();
        let replies = [(0, 0), (0, 2), (0, 4), (0, 6)];
        for col in 5..10u8 {
            board.play(Pos::new(10, col)).unwrap();
            if col < 9 {
                let (r, c) = replies[(col - 5) as usize];
                board.play(Pos::new(r, c)).unwrap();
            }
        }
        assert_eq!(evaluate(&board), Outcome::Win(Stone::Black));
        let (stone, cells) = find_five(&board).unwrap();
        assert_eq!(stone, Stone::Black);
        assert_eq!(cells[0], Pos::new(10, 5));
        assert_eq!(cells[4], Pos::new(10, 9));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, 9), Stone::White);
        }
        assert_eq!(evaluate(&board), Outcome::Win(Stone::White));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i + 2, i + 3), Stone::White);
        }
        assert_eq!(evaluate(&board).winner(), Some(Stone::White));
    }

    #[test]
    fn test_diagonal_sw_five() {
        let mut board = Board::new();
        // Diagonal from (4, 8) to (8, 4)
        for i in 0..5 {
            board.place_stone(Pos::new(4 + i, 8 - i), Stone::Black);
        }
        let (stone, cells) = find_five(&board).unwrap();
        assert_eq!(stone, Stone::Black);
        assert!(cells.contains(&Pos::new(6, 6)));
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(15 + i, 15 + i), Stone::White);
        }
        assert_eq!(evaluate(&board), Outcome::Win(Stone::White));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        board.place_stone(Pos::new(9, 4), Stone::White);
        board.place_stone(Pos::new(9, 5), Stone::Black);
        assert_eq!(evaluate(&board), Outcome::Ongoing);
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for i in 0..6 {
            board.place_stone(Pos::new(19, i), Stone::Black);
        }
        assert_eq!(evaluate(&board), Outcome::Win(Stone::Black));
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i + 10, 0), Stone::White);
            board.place_stone(Pos::new(15, i + 5), Stone::Black);
        }
        assert_eq!(evaluate(&board), Outcome::Win(Stone::Black));
    }

    /// Fill the board so no line holds five of one color.
    ///
    /// Columns come in pairs of one color, alternating every two columns,
    /// and every row shifts the pattern by one.
    fn drawn_full_board() -> Board {
        let mut board = Board::new();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let stone = if ((c + 2 * r) / 2) % 2 == 0 {
                    Stone::Black
                } else {
                    Stone::White
                };
                board.place_stone(Pos::new(r as u8, c as u8), stone);
            }
        }
        board
    }

    #[test]
    fn test_full_board_without_five_is_tie() {
        let board = drawn_full_board();
        assert!(board.is_full());
        assert!(find_five(&board).is_none());
        assert_eq!(evaluate(&board), Outcome::Tie);
        assert!(is_over(&board));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(3, 3 + i), Stone::White);
        }
        let first = evaluate(&board);
        assert_eq!(evaluate(&board), first);
        assert_eq!(evaluate(&board), first);
        assert_eq!(evaluate(&drawn_full_board()), evaluate(&drawn_full_board()));
    }
}
