use rand::Rng;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect as Area},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::entities::{Bounds, EntityKind, Rect};
use crate::game::{Phase, Snapshot};
use crate::settings::{Rgb, Settings};

/// Terminal rows kept below the play field for the controls line
pub const HUD_ROWS: u16 = 1;

/// World bounds of the play field on a terminal of `columns` by `rows` cells.
///
/// The bottom [`HUD_ROWS`] rows are left out so the controls line never
/// draws over the ship.
pub fn play_field(settings: &Settings, columns: u16, rows: u16) -> Bounds {
    Bounds::new(
        columns as f32 * settings.cell_width,
        rows.saturating_sub(HUD_ROWS) as f32 * settings.cell_height,
    )
}

/// View struct that holds everything needed to draw one frame
pub struct RenderView<'a> {
    pub snapshot: &'a Snapshot,
    pub frame_count: u64,
}

/// Handles all rendering responsibilities for the game.
///
/// World positions are mapped onto terminal cells using the configured cell
/// size; sprites are drawn at the cell containing their top-left corner.
pub struct GameRenderer {
    caption: String,
    background: Color,
    bullet_color: Color,
    cell_width: f32,
    cell_height: f32,
}

impl GameRenderer {
    pub fn new(settings: &Settings) -> Self {
        Self {
            caption: settings.caption.clone(),
            background: rgb(settings.bg_color),
            bullet_color: rgb(settings.bullet_color),
            cell_width: settings.cell_width,
            cell_height: settings.cell_height,
        }
    }

    /// Main render method; the frame is presented when `Terminal::draw` returns
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        let area = frame.area();
        self.clear(frame, area);

        let snapshot = view.snapshot;
        if snapshot.phase == Phase::GameOver {
            self.render_game_over(frame, area);
            return;
        }

        self.render_stars(frame, area, view.frame_count);

        let buffer = frame.buffer_mut();
        for alien in &snapshot.aliens {
            self.draw_sprite(buffer, area, EntityKind::Alien, alien);
        }
        for bullet in &snapshot.bullets {
            self.draw_sprite(buffer, area, EntityKind::Bullet, bullet);
        }
        self.draw_sprite(buffer, area, EntityKind::Ship, &snapshot.ship);

        self.render_hud(frame, area, snapshot);
    }

    /// Fills the whole screen with the background color
    fn clear(&self, frame: &mut Frame, area: Area) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(self.background)), area);
    }

    /// Draws an entity sprite, clipped to the terminal area
    fn draw_sprite(&self, buffer: &mut Buffer, area: Area, kind: EntityKind, rect: &Rect) {
        let Some((col, row)) = self.to_cell(rect) else {
            return;
        };
        let style = self.sprite_style(kind);

        for (i, line) in sprite_lines(kind).iter().enumerate() {
            let y = row.saturating_add(i as u16);
            if col >= area.width || y >= area.height {
                continue;
            }
            let max_width = (area.width - col) as usize;
            buffer.set_stringn(area.x + col, area.y + y, line, max_width, style);
        }
    }

    /// Terminal cell holding the top-left corner of `rect`, if on screen
    fn to_cell(&self, rect: &Rect) -> Option<(u16, u16)> {
        let col = (rect.x / self.cell_width).floor();
        let row = (rect.y / self.cell_height).floor();
        if col < 0.0 || row < 0.0 || col > u16::MAX as f32 || row > u16::MAX as f32 {
            return None;
        }
        Some((col as u16, row as u16))
    }

    fn sprite_style(&self, kind: EntityKind) -> Style {
        let color = match kind {
            EntityKind::Ship => Color::Green,
            EntityKind::Bullet => self.bullet_color,
            EntityKind::Alien => Color::Magenta,
        };
        Style::default()
            .fg(color)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    fn render_stars(&self, frame: &mut Frame, area: Area, frame_count: u64) {
        if frame_count % 20 >= 10 {
            return;
        }
        let mut rng = rand::rng();
        let style = Style::default().fg(Color::DarkGray).bg(self.background);
        let buffer = frame.buffer_mut();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if rng.random_bool(0.005) {
                    buffer.set_string(x, y, ".", style);
                }
            }
        }
    }

    /// One-line status bar at the top
    fn render_hud(&self, frame: &mut Frame, area: Area, snapshot: &Snapshot) {
        let ships = "A ".repeat(snapshot.ships_left as usize);
        let status = Line::from(vec![
            Span::styled(
                self.caption.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Ships: ", Style::default().fg(Color::DarkGray)),
            Span::styled(ships, Style::default().fg(Color::Green)),
        ]);

        let hud_area = Area {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1u16.min(area.height),
        };
        frame.render_widget(Paragraph::new(status), hud_area);

        let controls = Line::from(Span::styled(
            "[Arrows/AD: Move] [Space: Fire] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        ));
        let controls_area = Area {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1u16.min(area.height),
        };
        frame.render_widget(
            Paragraph::new(controls).alignment(Alignment::Right),
            controls_area,
        );
    }

    /// Renders the game over screen
    fn render_game_over(&self, frame: &mut Frame, area: Area) {
        let game_over_text = vec![
            Line::from(""),
            Line::from("╔═══════════════════════════╗").centered().red(),
            Line::from("║        GAME OVER!         ║")
                .centered()
                .red()
                .bold(),
            Line::from("╚═══════════════════════════╝").centered().red(),
            Line::from(""),
            Line::from("Press Q to quit").centered().white(),
        ];

        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            area,
        );
    }
}

fn rgb([r, g, b]: Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// Terminal art for each entity kind, one string per row
pub fn sprite_lines(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::Ship => &["  A  ", " /#\\ ", "<###>"],
        EntityKind::Bullet => &["|"],
        EntityKind::Alien => &["<oo>"],
    }
}
