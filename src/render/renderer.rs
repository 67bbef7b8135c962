use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{Difficulty, Position, Screen, Session, SnakeColor};
use crate::metrics::GameMetrics;
use crate::modes::{MenuRow, MenuSelection};

/// Terminal color for a selectable snake color
fn palette(color: SnakeColor) -> Color {
    match color {
        SnakeColor::Green => Color::Green,
        SnakeColor::Red => Color::Red,
        SnakeColor::Blue => Color::Blue,
        SnakeColor::Yellow => Color::Yellow,
        SnakeColor::Purple => Color::Magenta,
        SnakeColor::Cyan => Color::Cyan,
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        session: &Session,
        menu: &MenuSelection,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Main area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Center the main area horizontally
        let main_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match session.screen() {
            Screen::Menu => {
                frame.render_widget(self.render_title(), chunks[0]);
                frame.render_widget(self.render_menu(menu), main_area);
            }
            Screen::Playing | Screen::Paused => {
                frame.render_widget(self.render_stats(session, metrics), chunks[0]);
                frame.render_widget(self.render_grid(session), main_area);
            }
            Screen::GameOver => {
                frame.render_widget(self.render_stats(session, metrics), chunks[0]);
                frame.render_widget(self.render_game_over(session, metrics), main_area);
            }
        }

        frame.render_widget(self.render_controls(session.screen()), chunks[2]);
    }

    fn render_title(&self) -> Paragraph<'_> {
        let text = vec![Line::from(Span::styled(
            "S N A K E",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_menu(&self, menu: &MenuSelection) -> Paragraph<'_> {
        let mut lines = vec![Line::from("")];

        let color_label = if menu.row == MenuRow::Color {
            Span::styled(
                "> Snake color:  ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("  Snake color:  ", Style::default().fg(Color::Gray))
        };
        let mut color_spans = vec![color_label];
        for color in SnakeColor::ALL {
            let style = if color == menu.color {
                Style::default()
                    .fg(palette(color))
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(palette(color)).add_modifier(Modifier::DIM)
            };
            color_spans.push(Span::styled(format!("{} ", color.name()), style));
        }
        lines.push(Line::from(color_spans));
        lines.push(Line::from(""));

        let diff_label = if menu.row == MenuRow::Difficulty {
            Span::styled(
                "> Difficulty:   ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("  Difficulty:   ", Style::default().fg(Color::Gray))
        };
        let mut diff_spans = vec![diff_label];
        for difficulty in Difficulty::ALL {
            let style = if difficulty == menu.difficulty {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            diff_spans.push(Span::styled(format!("{} ", difficulty.name()), style));
        }
        lines.push(Line::from(diff_spans));

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to start", Style::default().fg(Color::Gray)),
        ]));

        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(" Menu "),
        )
    }

    fn render_grid(&self, session: &Session) -> Paragraph<'_> {
        let state = session.state();
        let snake_color = palette(session.config().color);
        let paused = session.screen() == Screen::Paused;

        let mut lines = Vec::with_capacity(state.grid_height);
        for y in 0..state.grid_height {
            let mut spans = Vec::with_capacity(state.grid_width);
            for x in 0..state.grid_width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == state.snake.head() {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(snake_color)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.occupied().contains(&pos) {
                    Span::styled("□ ", Style::default().fg(snake_color))
                } else if pos == state.food.position {
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

        let title = if paused { " Snake - PAUSED " } else { " Snake " };
        let border_color = if paused { Color::Yellow } else { Color::White };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border_color))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, session: &Session, metrics: &GameMetrics) -> Paragraph<'_> {
        let snake = &session.state().snake;
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snake.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Level: ", Style::default().fg(Color::Yellow)),
            Span::styled(snake.level.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.config().difficulty.name(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, session: &Session, metrics: &GameMetrics) -> Paragraph<'_> {
        let snake = &session.state().snake;
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snake.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Level: ", Style::default().fg(Color::Yellow)),
                Span::styled(snake.level.to_string(), Style::default().fg(Color::White)),
            ]),
            Line::from(vec![
                Span::styled("Session Best: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{} (level {})", metrics.high_score, metrics.best_level),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again, ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "M",
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" for the menu, ", Style::default().fg(Color::Gray)),
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

    fn render_controls(&self, screen: Screen) -> Paragraph<'_> {
        let text = match screen {
            Screen::Menu => vec![Line::from(vec![
                Span::styled("↑↓", Style::default().fg(Color::Cyan)),
                Span::raw(" pick row | "),
                Span::styled("←→", Style::default().fg(Color::Cyan)),
                Span::raw(" change | "),
                Span::styled("Enter", Style::default().fg(Color::Green)),
                Span::raw(" start | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" quit"),
            ])],
            Screen::Playing | Screen::Paused => vec![Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Esc", Style::default().fg(Color::Yellow)),
                Span::raw(" pause | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" quit"),
            ])],
            Screen::GameOver => vec![Line::from(vec![
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" restart | "),
                Span::styled("M", Style::default().fg(Color::Blue)),
                Span::raw(" menu | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" quit"),
            ])],
        };

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_distinct() {
        let mut seen = std::collections::HashSet::new();
        for color in SnakeColor::ALL {
            assert!(seen.insert(palette(color)), "{} reuses a color", color.name());
        }
    }
}
