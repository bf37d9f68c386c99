//! Game state management for the Gomoku GUI

use crate::board::WIN_LENGTH;
use crate::engine::{choose_move_with_stats, MoveResult};
use crate::error::GameError;
use crate::rules::{find_five_line, has_five_in_line};
use crate::{Board, Pos, Stone};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    VsAi { human_color: Stone },
    /// Player vs Player (hotseat)
    Hotseat,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::VsAi { human_color: Stone::Black }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult, GameError>>,
        start_time: Instant,
    },
}

/// Terminal result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win {
        winner: Stone,
        winning_line: Option<[Pos; WIN_LENGTH]>,
    },
    /// Board filled without a five
    Draw,
}

impl GameResult {
    pub fn winner(&self) -> Option<Stone> {
        match self {
            GameResult::Win { winner, .. } => Some(*winner),
            GameResult::Draw => None,
        }
    }

    pub fn winning_line(&self) -> Option<[Pos; WIN_LENGTH]> {
        match self {
            GameResult::Win { winning_line, .. } => *winning_line,
            GameResult::Draw => None,
        }
    }
}

/// Main game state, owned by the application loop
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Stone,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Stone)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
    /// Whether the game-over dialog is open
    pub show_result_dialog: bool,
    /// Set when the AI could not produce a move; blocks retries until reset
    pub ai_error: Option<GameError>,

    ai_delay: Duration,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self::with_ai_delay(mode, Duration::ZERO)
    }

    /// Create a game whose AI waits at least `ai_delay` before answering.
    pub fn with_ai_delay(mode: GameMode, ai_delay: Duration) -> Self {
        log::info!("new game: {mode:?}");
        Self {
            board: Board::new(),
            mode,
            current_turn: Stone::Black,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            show_result_dialog: false,
            ai_error: None,
            ai_delay,
        }
    }

    /// Clear the board and history; Black moves first.
    ///
    /// A pending AI answer is dropped with its receiver.
    pub fn reset(&mut self) {
        log::info!("game reset");
        self.board = Board::new();
        self.current_turn = Stone::Black;
        self.game_over = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
        self.show_result_dialog = false;
        self.ai_error = None;
    }

    /// Switch mode. Always starts a fresh game.
    pub fn set_mode(&mut self, mode: GameMode) {
        log::info!("mode changed to {mode:?}");
        self.mode = mode;
        self.reset();
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::VsAi { human_color } => self.current_turn == human_color,
            GameMode::Hotseat => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::VsAi { human_color } => self.current_turn != human_color,
            GameMode::Hotseat => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the current player's stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), GameError> {
        if self.game_over.is_some() {
            return Err(GameError::GameOver);
        }

        if self.is_ai_thinking() {
            return Err(GameError::AiThinking);
        }

        if !self.is_human_turn() {
            return Err(GameError::NotYourTurn);
        }

        if !self.board.is_empty(pos) {
            return Err(GameError::Occupied(pos));
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        let color = self.current_turn;

        self.board.place_stone(pos, color);
        self.move_history.push((pos, color));
        self.last_move = Some(pos);
        self.message = None;

        if has_five_in_line(&self.board, pos, color) {
            log::info!("{} wins at {pos} on move {}", color.name(), self.move_history.len());
            self.game_over = Some(GameResult::Win {
                winner: color,
                winning_line: find_five_line(&self.board, pos, color),
            });
            self.show_result_dialog = true;
            return;
        }

        if self.board.is_full() {
            log::info!("board full, game drawn");
            self.game_over = Some(GameResult::Draw);
            self.show_result_dialog = true;
            return;
        }

        self.current_turn = color.opponent();
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn()
            || self.is_ai_thinking()
            || self.game_over.is_some()
            || self.ai_error.is_some()
        {
            return;
        }

        let board = self.board;
        let ai = self.current_turn;
        let human = ai.opponent();
        let delay = self.ai_delay;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let start = Instant::now();
            let result = choose_move_with_stats(&board, ai, human);
            if let Some(remaining) = delay.checked_sub(start.elapsed()) {
                thread::sleep(remaining);
            }
            // Receiver is gone after a reset; nothing to deliver
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the AI's move if it has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => Err(GameError::AiDisconnected),
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;

        match result {
            Ok(move_result) => {
                let pos = move_result.best_move;
                self.last_ai_result = Some(move_result);
                self.execute_move(pos);
            }
            Err(err) => {
                log::error!("AI failed to move: {err}");
                self.message = Some(err.to_string());
                self.ai_error = Some(err);
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}
