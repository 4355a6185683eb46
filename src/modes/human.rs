use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Action, GameConfig, Phase, Session};
use crate::input::InputHandler;
use crate::metrics::GameMetrics;
use crate::render::{Palette, Renderer};

pub struct HumanMode {
    session: Session,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self::with_palette(config, Palette::default())
    }

    pub fn with_palette(config: GameConfig, palette: Palette) -> Self {
        Self {
            session: Session::new(config),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(palette),
            input_handler: InputHandler::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        info!("terminal ready, starting game");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Redraw once a second so the clock keeps ticking between moves
        let mut clock_timer = interval(Duration::from_secs(1));

        self.draw(terminal)?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => warn!("failed to read terminal event: {err}"),
                        None => break,
                    }
                }

                _ = clock_timer.tick() => {}

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.apply(Action::Quit);
                }
            }

            if self.session.phase() == Phase::Exit {
                break;
            }

            self.draw(terminal)?;
        }

        Ok(())
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        self.metrics.update();
        terminal
            .draw(|frame| {
                self.renderer.render(
                    frame,
                    self.session.board(),
                    self.session.phase(),
                    &self.metrics,
                );
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            if let Some(action) = self.input_handler.handle_key_event(key) {
                self.apply(action);
            }
        }
    }

    fn apply(&mut self, action: Action) {
        let before = self.session.phase();

        // A restart abandons the current board, which still counts as played
        if action == Action::Restart && before == Phase::Playing {
            self.record_finished_game();
        }

        let after = self.session.handle(action);

        match (before, after) {
            (Phase::Playing, Phase::GameOver) => self.record_finished_game(),
            (_, Phase::Playing) if action == Action::Restart => self.metrics.on_game_start(),
            _ => {}
        }
    }

    fn record_finished_game(&mut self) {
        let board = self.session.board();
        self.metrics.on_game_over(board.score(), board.max_tile());
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        info!("terminal restored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    fn mode() -> HumanMode {
        HumanMode::new(GameConfig::default().with_seed(21))
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode();
        assert_eq!(mode.session.phase(), Phase::Playing);
        assert_eq!(mode.session.board().score(), 0);
        assert_eq!(mode.metrics.games_played, 0);
    }

    #[test]
    fn test_restart_counts_abandoned_game() {
        let mut mode = mode();
        mode.apply(Action::Restart);
        assert_eq!(mode.session.phase(), Phase::Playing);
        assert_eq!(mode.session.games_started(), 2);
        assert_eq!(mode.metrics.games_played, 1);
        assert!(mode.metrics.best_tile >= 2);
    }

    #[test]
    fn test_quit_exits() {
        let mut mode = mode();
        mode.apply(Action::Move(Direction::Left));
        mode.apply(Action::Quit);
        assert_eq!(mode.session.phase(), Phase::Exit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

        let mut mode = mode();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        mode.handle_event(Event::Key(release));
        assert_eq!(mode.session.phase(), Phase::Playing);

        mode.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert_eq!(mode.session.phase(), Phase::Exit);
    }
}
