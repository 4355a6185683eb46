//! The game loop as a state machine, independent of any terminal.
//!
//! ```text
//!            move (still playable)
//!              ┌──────┐
//!              ▼      │
//!   start ─▶ Playing ─┘ ── move leaves no legal move ──▶ GameOver
//!              ▲   restart                                  │
//!              └────────────────────────────────────────────┘
//!   Playing / GameOver ── quit ──▶ Exit
//! ```

use log::info;

use super::{
    action::Action,
    config::GameConfig,
    engine::GameEngine,
    state::Board,
};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
    Exit,
}

/// One player's session: the engine, the current board and the phase
pub struct Session {
    engine: GameEngine,
    board: Board,
    phase: Phase,
    games_started: u32,
}

impl Session {
    /// Start a session on a freshly spawned board
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let board = engine.reset();

        Self {
            engine,
            board,
            phase: Phase::Playing,
            games_started: 1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Boards played this session, the current one included
    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Feed one command and return the resulting phase
    pub fn handle(&mut self, action: Action) -> Phase {
        match (self.phase, action) {
            (Phase::Exit, _) => {}
            (_, Action::Quit) => {
                info!("quit with score {}", self.board.score());
                self.phase = Phase::Exit;
            }
            (_, Action::Restart) => self.restart(),
            (Phase::Playing, Action::Move(direction)) => {
                let result = self.engine.step(&mut self.board, direction);
                if result.game_over {
                    info!(
                        "game over: score {}, best tile {}",
                        self.board.score(),
                        self.board.max_tile()
                    );
                    self.phase = Phase::GameOver;
                }
            }
            // only quit and restart get through once the game is over
            (Phase::GameOver, Action::Move(_)) => {}
        }

        self.phase
    }

    fn restart(&mut self) {
        self.board = self.engine.reset();
        self.phase = Phase::Playing;
        self.games_started += 1;
        info!("restarted, game #{}", self.games_started);
    }

    #[cfg(test)]
    fn with_board(config: GameConfig, board: Board) -> Self {
        Self {
            engine: GameEngine::new(config),
            board,
            phase: Phase::Playing,
            games_started: 1,
        }
    }
}
