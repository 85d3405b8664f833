//! Flight screen rendering.
//!
//! Renders the surface and landing zone, the craft sprite with its thrust
//! flame, the HUD readouts, the info panel and the outcome banner using a
//! cell buffer. Rotation here is purely visual: the sprite is picked from the
//! heading, the physics box never turns.

use super::game_common::{
    create_game_layout, render_info_panel_frame, render_outcome_banner, render_status_bar,
    render_too_small,
};
use lunar_descent::flight::{FlightSession, Landing, Outcome};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const MIN_WIDTH: u16 = 50;
const MIN_HEIGHT: u16 = 16;
const INFO_PANEL_WIDTH: u16 = 22;

const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Render the whole flight screen. `notice` replaces the status line, used
/// to surface sink failures.
pub fn render_flight_scene(
    frame: &mut Frame,
    area: Rect,
    session: &FlightSession,
    notice: Option<&str>,
) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let layout = create_game_layout(
        frame,
        area,
        " Lunar Descent ",
        Color::LightBlue,
        10,
        INFO_PANEL_WIDTH,
    );

    render_play_field(frame, layout.content, session);
    render_status_bar_content(frame, layout.status_bar, session, notice);
    render_info_panel(frame, layout.info_panel, session);

    if let Some(summary) = session.summary {
        render_outcome_banner(
            frame,
            layout.content,
            outcome_color(summary.outcome),
            summary.outcome.label(),
            &format!(
                "Fuel {:.0}   Speed {:.2}   Height {:.2}",
                summary.fuel, summary.speed, summary.height
            ),
            "Press Space to try again",
        );
    }
}

pub fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Landed(Landing::Success) => Color::Green,
        Outcome::Landed(Landing::Missed) => ORANGE,
        Outcome::Crashed => Color::Red,
    }
}

/// Sprite orientation picked from the heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tilt {
    HardLeft,
    Left,
    Upright,
    Right,
    HardRight,
}

impl Tilt {
    /// Headings are counter-clockwise, so positive tilts the nose left.
    pub fn from_heading(heading: f64) -> Self {
        let heading = (heading + 180.0).rem_euclid(360.0) - 180.0;
        if heading >= 37.5 {
            Self::HardLeft
        } else if heading >= 7.5 {
            Self::Left
        } else if heading > -7.5 {
            Self::Upright
        } else if heading > -37.5 {
            Self::Right
        } else {
            Self::HardRight
        }
    }

    /// (char, (dx, dy)) offsets from the craft's body cell.
    fn sprite(self) -> &'static [(char, (i32, i32))] {
        match self {
            Tilt::Upright => &[('^', (0, -1)), ('#', (0, 0)), ('/', (-1, 1)), ('\\', (1, 1))],
            Tilt::Left => &[('\\', (-1, -1)), ('#', (0, 0)), ('/', (-1, 1)), ('\\', (1, 1))],
            Tilt::HardLeft => &[('<', (-1, 0)), ('#', (0, 0)), ('/', (1, -1)), ('\\', (1, 1))],
            Tilt::Right => &[('/', (1, -1)), ('#', (0, 0)), ('/', (-1, 1)), ('\\', (1, 1))],
            Tilt::HardRight => &[('>', (1, 0)), ('#', (0, 0)), ('\\', (-1, -1)), ('/', (-1, 1))],
        }
    }

    /// Flame cells, pointing away from the nose. The second cell flickers.
    fn flame(self) -> [(i32, i32); 2] {
        match self {
            Tilt::Upright => [(0, 2), (0, 3)],
            Tilt::Left => [(1, 2), (2, 3)],
            Tilt::HardLeft => [(2, 0), (3, 0)],
            Tilt::Right => [(-1, 2), (-2, 3)],
            Tilt::HardRight => [(-2, 0), (-3, 0)],
        }
    }
}

/// Cell in the render buffer.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

struct CellBuffer {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl CellBuffer {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![Cell::default(); width]; height],
        }
    }

    fn put(&mut self, col: i32, row: i32, ch: char, fg: Color) {
        if col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height {
            self.cells[row as usize][col as usize] = Cell {
                ch,
                fg,
                bg: Color::Reset,
            };
        }
    }

    fn put_text(&mut self, col: usize, row: usize, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put((col + i) as i32, row as i32, ch, fg);
        }
    }

    /// Emit one `Paragraph` per row, merging runs of equal style into spans.
    fn render(&self, frame: &mut Frame, area: Rect) {
        for (row_idx, row_data) in self.cells.iter().enumerate() {
            let mut spans: Vec<Span> = Vec::new();
            let mut current_fg = Color::Reset;
            let mut current_bg = Color::Reset;
            let mut current_text = String::new();

            for &cell in row_data {
                if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut current_text),
                        Style::default().fg(current_fg).bg(current_bg),
                    ));
                }
                current_fg = cell.fg;
                current_bg = cell.bg;
                current_text.push(cell.ch);
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(
                    current_text,
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }

            let row_area = Rect::new(area.x, area.y + row_idx as u16, self.width as u16, 1);
            frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
        }
    }
}

/// Render the play field: stars, surface, landing zone, craft, flame, HUD.
fn render_play_field(frame: &mut Frame, area: Rect, session: &FlightSession) {
    if area.height < 6 || area.width < 10 {
        return;
    }

    let params = &session.params;
    let width = area.width as usize;
    let height = area.height as usize;
    let mut buffer = CellBuffer::new(width, height);

    // The surface sits on the last row; the craft body travels between row 1
    // and two rows above the surface so its legs touch the line on landing.
    let surface_row = height - 1;
    let body_rows = (surface_row - 3) as f64;
    let rest_y = params.world_height - params.surface_offset;
    let to_col = |x: f64| (x / params.world_width * (width - 1) as f64).round() as i32;
    let to_row = |y: f64| 1 + (y.clamp(0.0, rest_y) / rest_y * body_rows).round() as i32;

    // -- Stars --
    for row in 0..surface_row.saturating_sub(2) {
        for col in 0..width {
            match (row * 137 + col * 251 + 97) % 200 {
                0 => buffer.put(col as i32, row as i32, '.', Color::DarkGray),
                1 => buffer.put(col as i32, row as i32, '*', Color::Rgb(80, 80, 100)),
                _ => {}
            }
        }
    }

    // -- Surface and landing zone --
    let mut zone_cols: Option<(i32, i32)> = None;
    for col in 0..width {
        let world_x = col as f64 / (width - 1) as f64 * params.world_width;
        if session.zone.contains(world_x) {
            buffer.put(col as i32, surface_row as i32, '=', Color::Red);
            zone_cols = Some(match zone_cols {
                Some((left, _)) => (left, col as i32),
                None => (col as i32, col as i32),
            });
        } else {
            buffer.put(col as i32, surface_row as i32, '_', Color::White);
        }
    }
    // Narrow zones may fall between two columns; mark the nearest one.
    let (zone_left, zone_right) = zone_cols.unwrap_or_else(|| {
        let col = to_col(session.zone.start + session.zone.width / 2.0);
        buffer.put(col, surface_row as i32, '=', Color::Red);
        (col, col)
    });
    buffer.put(zone_left - 1, surface_row as i32 - 1, '[', Color::Red);
    buffer.put(zone_right + 1, surface_row as i32 - 1, ']', Color::Red);

    // -- Craft --
    let craft = &session.craft;
    let col = to_col(craft.position.x);
    let row = to_row(craft.position.y);
    let tilt = Tilt::from_heading(craft.heading);

    if craft.thrusting {
        let color = if session.tick_count % 2 == 0 {
            Color::Yellow
        } else {
            Color::LightRed
        };
        for (i, (dx, dy)) in tilt.flame().into_iter().enumerate() {
            if i == 1 && session.tick_count % 3 == 0 {
                continue;
            }
            if row + dy < surface_row as i32 {
                buffer.put(col + dx, row + dy, if i == 0 { '*' } else { '.' }, color);
            }
        }
    }

    for &(ch, (dx, dy)) in tilt.sprite() {
        buffer.put(col + dx, row + dy, ch, Color::White);
    }

    // -- HUD (top-left) --
    let speed = craft.speed();
    buffer.put_text(1, 0, &format!("Fuel: {}", craft.fuel as i64), Color::White);
    buffer.put_text(
        1,
        1,
        &format!("Speed: {:.2}", speed),
        if speed >= params.max_landing_speed {
            Color::Red
        } else {
            Color::White
        },
    );
    buffer.put_text(
        1,
        2,
        &format!("Height: {:.2}", session.height()),
        Color::White,
    );

    buffer.render(frame, area);
}

fn render_status_bar_content(
    frame: &mut Frame,
    area: Rect,
    session: &FlightSession,
    notice: Option<&str>,
) {
    if let Some(outcome) = session.outcome() {
        render_status_bar(
            frame,
            area,
            notice.unwrap_or(outcome.label()),
            if notice.is_some() {
                Color::Yellow
            } else {
                outcome_color(outcome)
            },
            &[("[Space]", "Try again"), ("[Q]", "Quit")],
        );
        return;
    }

    let (status, status_color) = if let Some(notice) = notice {
        (notice, Color::Yellow)
    } else if session.craft.fuel <= 0.0 {
        ("NO FUEL", Color::Red)
    } else if session.over_zone() {
        ("Over landing zone", Color::Green)
    } else {
        ("Descending", Color::LightBlue)
    };

    render_status_bar(
        frame,
        area,
        status,
        status_color,
        &[("[L/R]", "Rotate"), ("[Up]", "Thrust"), ("[Q]", "Quit")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &FlightSession) {
    if area.width < 2 {
        return;
    }

    let inner = render_info_panel_frame(frame, area);
    let craft = &session.craft;
    let params = &session.params;

    let fuel_pct = if params.initial_fuel > 0.0 {
        (craft.fuel / params.initial_fuel * 100.0).round() as u32
    } else {
        0
    };
    let fuel_color = if fuel_pct < 20 {
        Color::Red
    } else if fuel_pct < 50 {
        Color::Yellow
    } else {
        Color::Green
    };
    let speed = craft.speed();
    let speed_color = if speed < params.max_landing_speed {
        Color::Green
    } else {
        Color::Red
    };

    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));
    let value = |text: String| Span::styled(text, Style::default().fg(Color::White));

    let lines: Vec<Line> = vec![
        Line::from(vec![
            label("Fuel:    "),
            Span::styled(
                format!("{}%", fuel_pct),
                Style::default().fg(fuel_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Speed:   "),
            Span::styled(format!("{:.2}", speed), Style::default().fg(speed_color)),
        ]),
        Line::from(vec![
            label("Height:  "),
            value(format!("{:.1}", session.height())),
        ]),
        Line::from(vec![
            label("Heading: "),
            value(format!("{:.0}deg", craft.heading)),
        ]),
        Line::from(vec![
            label("VelX:    "),
            value(format!("{:+.2}", craft.velocity.x)),
        ]),
        Line::from(vec![
            label("VelY:    "),
            value(format!("{:+.2}", craft.velocity.y)),
        ]),
        Line::from(""),
        Line::from(vec![
            label("Zone:    "),
            value(format!(
                "{:.0}-{:.0}",
                session.zone.start,
                session.zone.end()
            )),
        ]),
        Line::from(""),
        Line::from(vec![
            label("Flights: "),
            value(session.flights_flown.to_string()),
        ]),
        Line::from(vec![
            label("Landed:  "),
            value(session.successful_landings.to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Safe landing:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            label(" Speed "),
            Span::styled(
                format!("<{:.2}", params.max_landing_speed),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
