use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::palette::Palette;
use crate::game::{Board, Phase, Position};
use crate::metrics::GameMetrics;

/// Columns reserved for one tile, enough for a seven digit value
pub const CELL_WIDTH: usize = 7;

pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn render(&self, frame: &mut Frame, board: &Board, phase: Phase, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(board, metrics);
        frame.render_widget(stats, chunks[0]);

        let grid_area = centered(
            chunks[1],
            (board.width() * CELL_WIDTH + 2) as u16,
            (board.height() + 2) as u16,
        );
        let grid = self.render_grid(board, phase == Phase::GameOver);
        frame.render_widget(grid, grid_area);

        let footer = if phase == Phase::GameOver {
            self.render_game_over(board)
        } else {
            self.render_controls()
        };
        frame.render_widget(footer, chunks[2]);
    }

    /// One line per board row, tiles centered in their slot
    pub fn grid_lines(&self, board: &Board) -> Vec<Line<'static>> {
        board
            .rows()
            .enumerate()
            .map(|(y, row)| {
                let spans: Vec<Span> = row
                    .iter()
                    .enumerate()
                    .map(|(x, cell)| {
                        if cell.is_empty() {
                            return Span::styled(
                                format!("{:^width$}", ".", width = CELL_WIDTH),
                                Style::default().fg(Color::DarkGray),
                            );
                        }

                        let mut style = self.palette.style(cell.color());
                        if board.last_spawn() == Some(Position::new(y, x)) {
                            style = style.add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK);
                        }
                        Span::styled(
                            format!("{:^width$}", cell.value(), width = CELL_WIDTH),
                            style,
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    fn render_grid(&self, board: &Board, game_over: bool) -> Paragraph<'static> {
        let block = if game_over {
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Red))
                .title(Span::styled(
                    " GAME OVER ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ))
                .title_alignment(Alignment::Center)
        } else {
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" 2048 ")
        };

        Paragraph::new(self.grid_lines(board)).block(block)
    }

    fn render_stats(&self, board: &Board, metrics: &GameMetrics) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(board.score().to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_score.max(board.score()).to_string(), value),
            Span::raw("    "),
            Span::styled("Tile: ", label),
            Span::styled(board.max_tile().to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, board: &Board) -> Paragraph<'static> {
        let text = vec![
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    board.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
