//! Core game logic module for 2048
//!
//! This module contains the board engine and the game loop state machine
//! without any I/O or rendering dependencies.

pub mod action;
pub mod config;
pub mod engine;
pub mod session;
pub mod shift;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, StepResult, spawn_tile};
pub use session::{Phase, Session};
pub use state::{Board, COLOR_CLASSES, Cell, Position};
