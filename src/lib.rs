//! tiles2048 - the sliding-tile puzzle in a terminal
//!
//! This library provides:
//! - Core game logic: board engine, spawning and the game loop state machine (game module)
//! - Key bindings (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
