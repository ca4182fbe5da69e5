use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{BoardView, Position, Snapshot};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: Option<&Snapshot>, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(snapshot, metrics);
        frame.render_widget(stats, chunks[0]);

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match snapshot {
            Some(Snapshot::Running(view)) => {
                let (width, height) = grid_footprint(view);
                if game_area.width < width || game_area.height < height {
                    frame.render_widget(self.render_too_small(width, height), game_area);
                } else {
                    frame.render_widget(self.render_grid(view), game_area);
                }
            }
            Some(Snapshot::Over { final_score, .. }) => {
                frame.render_widget(self.render_game_over(*final_score), game_area);
            }
            None => {}
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, view: &BoardView) -> Paragraph<'_> {
        let columns = view.board_width / view.cell_size;
        let rows = view.board_height / view.cell_size;
        let mut lines = Vec::with_capacity(rows as usize);

        for row in 0..rows {
            let mut spans = Vec::with_capacity(columns as usize);

            for column in 0..columns {
                let pos = Position::new(column * view.cell_size, row * view.cell_size);

                let cell = if pos == view.head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if view.body.contains(&pos) {
                    Span::styled("□ ", Style::default().fg(Color::Blue))
                } else if pos == view.food {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_too_small(&self, width: u16, height: u16) -> Paragraph<'_> {
        let text = vec![
            Line::from(Span::styled(
                "Terminal too small",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("The board needs {width}x{height} characters")),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: Option<&Snapshot>, metrics: &GameMetrics) -> Paragraph<'_> {
        let score = snapshot.map(Snapshot::score).unwrap_or_default();
        let ticks = snapshot.map(Snapshot::ticks).unwrap_or_default();

        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Ticks: ", Style::default().fg(Color::Yellow)),
            Span::styled(ticks.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, final_score: u32) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Game Over...",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    final_score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

/// Terminal columns and rows the bordered grid occupies: two characters per
/// board cell across, one per row, plus the border
fn grid_footprint(view: &BoardView) -> (u16, u16) {
    let columns = view.board_width / view.cell_size;
    let rows = view.board_height / view.cell_size;
    let width = u16::try_from(columns.saturating_mul(2).saturating_add(2)).unwrap_or(u16::MAX);
    let height = u16::try_from(rows.saturating_add(2)).unwrap_or(u16::MAX);
    (width, height)
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(snapshot: Option<&Snapshot>) -> String {
        draw_sized(snapshot, 80, 40)
    }

    fn draw_sized(snapshot: Option<&Snapshot>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let renderer = Renderer::new();
        let metrics = GameMetrics::new();

        terminal
            .draw(|frame| renderer.render(frame, snapshot, &metrics))
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_running_frame_shows_snake_and_food() {
        let snapshot = Snapshot::Running(BoardView {
            board_width: 250,
            board_height: 250,
            cell_size: 25,
            head: Position::new(100, 100),
            body: vec![Position::new(75, 100), Position::new(50, 100)],
            food: Position::new(200, 25),
            score: 3,
            ticks: 9,
        });

        let screen = draw(Some(&snapshot));

        assert!(screen.contains("Score: 3"));
        assert!(screen.contains("Ticks: 9"));
        assert_eq!(screen.matches('■').count(), 1);
        assert_eq!(screen.matches('□').count(), 2);
        assert!(screen.contains('O'));
    }

    #[test]
    fn test_board_taller_than_terminal_shows_notice() {
        let snapshot = Snapshot::Running(BoardView {
            board_width: 600,
            board_height: 600,
            cell_size: 25,
            head: Position::new(300, 300),
            body: vec![Position::new(275, 300)],
            food: Position::new(100, 550),
            score: 0,
            ticks: 0,
        });

        let small = draw_sized(Some(&snapshot), 80, 24);
        assert!(small.contains("Terminal too small"));
        assert!(!small.contains('■'));

        // 24 rows + border + header + footer
        let fits = draw_sized(Some(&snapshot), 80, 32);
        assert!(!fits.contains("Terminal too small"));
        assert_eq!(fits.matches('■').count(), 1);
    }

    #[test]
    fn test_game_over_frame() {
        let screen = draw(Some(&Snapshot::Over {
            final_score: 12,
            ticks: 40,
        }));

        assert!(screen.contains("Game Over..."));
        assert!(screen.contains("Final Score: 12"));
    }

    #[test]
    fn test_empty_frame_draws_chrome() {
        let screen = draw(None);
        assert!(screen.contains("Score: 0"));
        assert!(screen.contains("to quit"));
    }
}
