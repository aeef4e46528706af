//! Game state management for the Gomoku GUI

use crate::rules::{evaluate, find_five, Outcome};
use crate::{AIEngine, Board, EngineConfig, GameConfig, GameError, MoveResult, Pos, Stone};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Stone },
    /// Player vs Player (hotseat)
    PvP,
}

impl GameMode {
    /// PvE with the human color taken from the front-end settings
    pub fn from_config(config: &GameConfig) -> Self {
        let human_color = if config.ui.human_first {
            Stone::Black
        } else {
            Stone::White
        };
        GameMode::PvE { human_color }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Stone::Black,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    /// The worker owns the engine until it reports back
    Thinking {
        receiver: Receiver<(AIEngine, MoveResult)>,
        start_time: Instant,
    },
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win { winner: Stone, winning_line: [Pos; 5] },
    Tie,
}

impl GameResult {
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        match self {
            GameResult::Win { winning_line, .. } => Some(*winning_line),
            GameResult::Tie => None,
        }
    }
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    /// Position the history is replayed from: empty, or a restored snapshot
    base: Board,
    /// Idle engine; `None` while a worker holds it
    engine: Option<AIEngine>,
    engine_config: EngineConfig,
    hint_depth: u8,
}

impl GameState {
    pub fn new(mode: GameMode, config: &GameConfig) -> Self {
        Self {
            board: Board::new(),
            mode,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            base: Board::new(),
            engine: Some(AIEngine::with_config(&config.engine)),
            engine_config: config.engine.clone(),
            hint_depth: config.ui.hint_depth,
        }
    }

    /// Fresh board in the same mode
    pub fn reset(&mut self) {
        self.reset_to(Board::new());
        self.message = None;
    }

    fn reset_to(&mut self, board: Board) {
        self.board = board;
        self.base = board;
        self.game_over = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.abandon_ai();
        self.update_outcome();
    }

    /// Side to move
    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.board.active()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a stone for the human player
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|e| match e {
            GameError::OccupiedOrOutOfRange { .. } => "Cell already taken".to_string(),
            other => other.to_string(),
        })
    }

    /// Play `pos` for the side to move (human or AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), GameError> {
        let color = self.current_turn();
        self.board.play(pos)?;
        log::info!("move {}: {:?} at ({}, {})", self.move_history.len() + 1, color, pos.row, pos.col);

        self.move_history.push(pos);
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();

        self.update_outcome();
        if self.game_over.is_none() {
            self.move_timer.start();
        }
        Ok(())
    }

    fn update_outcome(&mut self) {
        self.game_over = match find_five(&self.board) {
            Some((winner, winning_line)) => Some(GameResult::Win {
                winner,
                winning_line,
            }),
            None => (evaluate(&self.board) == Outcome::Tie).then_some(GameResult::Tie),
        };
        if let Some(result) = self.game_over {
            log::info!("game over: {:?}", result);
        }
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let mut engine = self
            .engine
            .take()
            .unwrap_or_else(|| AIEngine::with_config(&self.engine_config));
        let board = self.board;

        let (tx, rx) = channel();
        thread::spawn(move || {
            let result = engine.choose_move_with_stats(&board);
            let _ = tx.send((engine, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let (engine, move_result, elapsed) = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok((engine, result)) => (engine, result, start_time.elapsed()),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("AI worker stopped without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        self.engine = Some(engine);
        self.move_timer.set_ai_time(elapsed);

        match move_result.best_move {
            Some(pos) => {
                if let Err(e) = self.execute_move(pos) {
                    log::warn!("AI move rejected: {e}");
                    self.message = Some("AI could not find a move".to_string());
                }
            }
            None => self.message = Some("AI could not find a move".to_string()),
        }
        self.last_ai_result = Some(move_result);
    }

    /// Drop a running search; its result will never be read
    fn abandon_ai(&mut self) {
        if self.is_ai_thinking() {
            log::debug!("discarding running search");
        }
        self.ai_state = AiState::Idle;
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Shallow search for the side to move, shown as a hint
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let mut engine = AIEngine::with_config(&EngineConfig {
            max_depth: self.hint_depth,
            ..self.engine_config.clone()
        });
        let result = engine.choose_move_with_stats(&self.board);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo last move (last two against the AI)
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.move_history.len() >= 2 => 2,
            _ => 1,
        };
        let keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<Pos> = self.move_history.drain(..keep).collect();

        self.board = self.base;
        self.move_history.clear();
        self.last_move = None;
        self.suggested_move = None;

        for pos in moves {
            if let Err(e) = self.board.play(pos) {
                log::warn!("history replay stopped: {e}");
                break;
            }
            self.move_history.push(pos);
            self.last_move = Some(pos);
        }

        self.update_outcome();
        self.move_timer.start();
    }

    /// Current position as a snapshot string
    pub fn snapshot(&self) -> String {
        self.board.to_snapshot()
    }

    /// Continue from a pasted snapshot.
    ///
    /// An ill-formed snapshot resets to a fresh board and leaves a message.
    pub fn restore(&mut self, text: &str) {
        match Board::from_snapshot(text) {
            Ok(board) => {
                log::info!("restored position, {:?} to move", board.active());
                self.reset_to(board);
                self.message = None;
            }
            Err(e) => {
                log::warn!("snapshot rejected: {e}");
                self.reset();
                self.message = Some(format!("Invalid snapshot: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvp() -> GameState {
        GameState::new(GameMode::PvP, &GameConfig::default())
    }

    #[test]
    fn test_default_mode_follows_config() {
        let mut config = GameConfig::default();
        assert_eq!(
            GameMode::from_config(&config),
            GameMode::PvE { human_color: Stone::Black }
        );
        config.ui.human_first = false;
        assert_eq!(
            GameMode::from_config(&config),
            GameMode::PvE { human_color: Stone::White }
        );
    }

    #[test]
    fn test_place_on_taken_cell() {
        let mut state = pvp();
        state.try_place_stone(Pos::new(4, 4)).unwrap();
        assert_eq!(
            state.try_place_stone(Pos::new(4, 4)),
            Err("Cell already taken".to_string())
        );
        assert_eq!(state.move_history.len(), 1);
        assert_eq!(state.current_turn(), Stone::White);
    }

    #[test]
    fn test_five_ends_game() {
        let mut state = pvp();
        for c in 0..4 {
            state.try_place_stone(Pos::new(0, c)).unwrap();
            state.try_place_stone(Pos::new(5, c)).unwrap();
        }
        state.try_place_stone(Pos::new(0, 4)).unwrap();

        let result = state.game_over.expect("black has five");
        assert_eq!(
            result,
            GameResult::Win {
                winner: Stone::Black,
                winning_line: [0, 1, 2, 3, 4].map(|c| Pos::new(0, c)),
            }
        );
        assert!(state.try_place_stone(Pos::new(9, 9)).is_err());
    }

    #[test]
    fn test_undo_pvp_removes_one_move() {
        let mut state = pvp();
        state.try_place_stone(Pos::new(10, 10)).unwrap();
        state.try_place_stone(Pos::new(10, 11)).unwrap();
        state.undo();
        assert_eq!(state.move_history, vec![Pos::new(10, 10)]);
        assert_eq!(state.last_move, Some(Pos::new(10, 10)));
        assert!(state.board.is_empty(Pos::new(10, 11)));
        assert_eq!(state.current_turn(), Stone::White);
    }

    #[test]
    fn test_snapshot_restore_and_undo_to_base() {
        let mut source = pvp();
        source.try_place_stone(Pos::new(3, 3)).unwrap();
        let text = source.snapshot();

        let mut state = pvp();
        state.restore(&text);
        assert_eq!(state.board, source.board);
        assert!(state.move_history.is_empty());

        state.try_place_stone(Pos::new(3, 4)).unwrap();
        state.undo();
        assert_eq!(state.board, source.board);
    }

    #[test]
    fn test_bad_snapshot_resets() {
        let mut state = pvp();
        state.try_place_stone(Pos::new(3, 3)).unwrap();
        state.restore("X|not a board");
        assert_eq!(state.board, Board::new());
        assert!(state.move_history.is_empty());
        assert!(state.message.as_deref().is_some_and(|m| m.starts_with("Invalid snapshot")));
    }

    #[test]
    fn test_hint_suggests_free_cell() {
        let mut state = pvp();
        state.try_place_stone(Pos::new(10, 10)).unwrap();
        state.request_suggestion();
        let hint = state.suggested_move.expect("hint");
        assert!(state.board.is_empty(hint));
    }
}
