use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::particles::{FOOD_COLOR, SNAKE_BODY_COLOR, SNAKE_GLOW_COLOR, SNAKE_HEAD_COLOR};
use crate::game::{Rgb, Snapshot};
use crate::metrics::GameMetrics;

const BACKGROUND_COLOR: Color = Color::Rgb(60, 60, 90);
const ACCENT_COLOR: Color = Color::Cyan;

/// Darkening applied per body segment away from the head
const BODY_FADE_PER_SEGMENT: f32 = 0.05;
const MIN_BODY_BRIGHTNESS: f32 = 0.3;

/// What occupies one cell of the board, in increasing draw priority
#[derive(Debug, Clone, Copy, PartialEq)]
enum Cell {
    Empty,
    Trail(f32),
    Particle { color: Rgb, life: f32 },
    /// Drawn larger while the pulse is swelling
    Food { swollen: bool },
    Body(usize),
    Head,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot<'_>, metrics: &GameMetrics) {
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

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let grid = self.render_grid(snapshot);
        frame.render_widget(grid, game_area);

        // The board stays visible under the popup so the death burst plays out
        if snapshot.game_over {
            let popup = centered_rect(44, 9, game_area);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(snapshot), popup);
        }

        let controls = self.render_controls(snapshot.game_over);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, snapshot: &Snapshot<'_>) -> Paragraph<'static> {
        let cells = self.layout_cells(snapshot);
        let width = snapshot.grid.width;

        let lines: Vec<Line> = cells
            .chunks(width.max(1))
            .map(|row| Line::from(row.iter().map(|cell| cell_span(*cell)).collect::<Vec<_>>()))
            .collect();

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

    /// Resolve every board cell to the entity drawn on top of it
    fn layout_cells(&self, snapshot: &Snapshot<'_>) -> Vec<Cell> {
        let grid = snapshot.grid;
        let mut cells = vec![Cell::Empty; grid.cell_count()];
        let index = |x: i32, y: i32| -> Option<usize> {
            let in_bounds =
                x >= 0 && y >= 0 && (x as usize) < grid.width && (y as usize) < grid.height;
            in_bounds.then(|| y as usize * grid.width + x as usize)
        };

        let mut paint = |x: i32, y: i32, cell: Cell| {
            if let Some(i) = index(x, y) {
                cells[i] = cell;
            }
        };

        let trail_len = snapshot.trail.len();
        for (i, pos) in snapshot.trail.iter().enumerate() {
            paint(pos.x, pos.y, Cell::Trail((i + 1) as f32 / trail_len as f32));
        }

        for particle in &snapshot.particles {
            paint(
                particle.x.floor() as i32,
                particle.y.floor() as i32,
                Cell::Particle {
                    color: particle.color,
                    life: particle.life_fraction,
                },
            );
        }

        paint(
            snapshot.food.x,
            snapshot.food.y,
            Cell::Food {
                swollen: snapshot.food_pulse > 0.0,
            },
        );

        // Tail first so the head always wins
        for (i, pos) in snapshot.body.iter().enumerate().skip(1).rev() {
            paint(pos.x, pos.y, Cell::Body(i));
        }
        let head = snapshot.head();
        paint(head.x, head.y, Cell::Head);

        cells
    }

    fn render_stats(&self, snapshot: &Snapshot<'_>, metrics: &GameMetrics) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High Score: ", Style::default().fg(ACCENT_COLOR)),
            Span::styled(
                snapshot.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.body.len().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, snapshot: &Snapshot<'_>) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default()
                    .fg(Color::Rgb(255, 100, 100))
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "SPACE",
                    Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "ESC",
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

    fn render_controls(&self, game_over: bool) -> Paragraph<'static> {
        let line = if game_over {
            Line::from(vec![
                Span::styled("SPACE", Style::default().fg(ACCENT_COLOR)),
                Span::raw(" or "),
                Span::styled("R", Style::default().fg(ACCENT_COLOR)),
                Span::raw(" to restart | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])
        } else {
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(ACCENT_COLOR)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(ACCENT_COLOR)),
                Span::raw(" to move | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])
        };

        Paragraph::new(vec![line]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled(". ", Style::default().fg(BACKGROUND_COLOR)),
        Cell::Trail(strength) => Span::styled(
            "· ",
            Style::default().fg(to_color(SNAKE_GLOW_COLOR.scaled(0.2 + 0.3 * strength))),
        ),
        Cell::Particle { color, life } => {
            let glyph = if life > 0.66 {
                "* "
            } else if life > 0.33 {
                "+ "
            } else {
                ". "
            };
            Span::styled(glyph, Style::default().fg(to_color(color.scaled(life))))
        }
        Cell::Food { swollen } => Span::styled(
            if swollen { "● " } else { "• " },
            Style::default()
                .fg(to_color(FOOD_COLOR))
                .add_modifier(Modifier::BOLD),
        ),
        Cell::Body(i) => {
            let brightness = (1.0 - i as f32 * BODY_FADE_PER_SEGMENT).max(MIN_BODY_BRIGHTNESS);
            Span::styled(
                "■ ",
                Style::default().fg(to_color(SNAKE_BODY_COLOR.scaled(brightness))),
            )
        }
        Cell::Head => Span::styled(
            "■ ",
            Style::default()
                .fg(to_color(SNAKE_HEAD_COLOR))
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
