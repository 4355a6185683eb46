use log::{debug, error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    action::Direction,
    config::GameConfig,
    state::{Board, Position},
};

/// Result of a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether any tile slid or merged
    pub moved: bool,
    /// Whether a new tile was placed after the move
    pub spawned: bool,
    /// Whether the board has no legal move left
    pub game_over: bool,
}

/// Place a 2 (with probability `two_probability`) or a 4 in a uniformly
/// chosen empty cell.
///
/// Returns false, leaving the board alone, when there is no empty cell.
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R, two_probability: f64) -> bool {
    let empty = board.empty_positions();
    if empty.is_empty() {
        return false;
    }

    let Position { y, x } = empty[rng.gen_range(0..empty.len())];
    let value = if rng.gen_bool(two_probability) { 2 } else { 4 };

    debug_assert_eq!(board.get_cell(y, x), 0, "spawn into occupied cell");
    board.set_cell(y, x, value);
    board.last_spawn = Some(Position::new(y, x));

    debug!("spawned {value} at ({y}, {x})");
    true
}

/// The game engine: owns the configuration and the spawn RNG
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    /// Fresh board with its first tile
    pub fn reset(&mut self) -> Board {
        let mut board = Board::new(self.config.grid_height, self.config.grid_width);
        self.spawn(&mut board);
        board
    }

    /// Spawn a tile using the configured probability
    pub fn spawn(&mut self, board: &mut Board) -> bool {
        spawn_tile(board, &mut self.rng, self.config.two_probability)
    }

    /// Execute one move, spawn on success and check for game over
    pub fn step(&mut self, board: &mut Board, direction: Direction) -> StepResult {
        let moved = board.shift(direction);

        let mut spawned = false;
        if moved {
            spawned = self.spawn(board);
            if !spawned {
                // a successful move always frees at least one cell
                error!("no empty cell to spawn into after moving {direction:?}");
                debug_assert!(spawned, "spawn failed after a successful move");
            }
        }

        let game_over = board.is_game_over();
        if game_over {
            debug!("no moves left, final score {}", board.score());
        }

        StepResult {
            moved,
            spawned,
            game_over,
        }
    }
}
