/// Rendering layer. All terminal I/O lives here.
///
/// Draw commands arrive in viewport pixels.  Each terminal cell stands for a
/// block of pixels and is painted with the colour of the last shape covering
/// its centre.  No game logic is performed here.

use std::io::Write;
use std::ops::Range;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal,
    QueueableCommand,
};
use glam::Vec2;

use food_slicer::entities::{GameSession, GameStatus};
use food_slicer::render::{DrawCommand, Rgb};

// ── Palette & glyphs ──────────────────────────────────────────────────────────

const C_HINT: Color = Color::DarkGrey;
const PIXEL: char = '█';

fn term_color(c: Rgb) -> Color {
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

// ── Canvas ────────────────────────────────────────────────────────────────────

struct Canvas {
    cols: u16,
    rows: u16,
    /// Size of one cell in viewport pixels.
    cell: Vec2,
    pixels: Vec<Option<Rgb>>,
}

impl Canvas {
    fn new(cols: u16, rows: u16, viewport: Vec2) -> Self {
        Canvas {
            cols,
            rows,
            cell: viewport / Vec2::new(cols.max(1) as f32, rows.max(1) as f32),
            pixels: vec![None; cols as usize * rows as usize],
        }
    }

    fn centre(&self, col: u16, row: u16) -> Vec2 {
        Vec2::new(col as f32 + 0.5, row as f32 + 0.5) * self.cell
    }

    /// Cells whose centres may fall inside the pixel box `min..=max`.
    fn cells_within(&self, min: Vec2, max: Vec2) -> (Range<u16>, Range<u16>) {
        let to_col = |x: f32| (x / self.cell.x).floor().clamp(0.0, self.cols as f32) as u16;
        let to_row = |y: f32| (y / self.cell.y).floor().clamp(0.0, self.rows as f32) as u16;
        let cols = to_col(min.x)..(to_col(max.x) + 1).min(self.cols);
        let rows = to_row(min.y)..(to_row(max.y) + 1).min(self.rows);
        (cols, rows)
    }

    fn paint(&mut self, min: Vec2, max: Vec2, color: Rgb, inside: impl Fn(Vec2) -> bool) {
        if !(min.is_finite() && max.is_finite()) {
            return;
        }
        let (cols, rows) = self.cells_within(min, max);
        for row in rows {
            for col in cols.clone() {
                if inside(self.centre(col, row)) {
                    self.pixels[row as usize * self.cols as usize + col as usize] = Some(color);
                }
            }
        }
    }

    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Fill { outline, color } => {
                let (min, max) = outline.bounds();
                self.paint(min, max, *color, |p| outline.contains(p));
            }
            DrawCommand::Line {
                from,
                to,
                thickness,
                color,
            } => {
                // Never thinner than half a cell, or thin segments vanish.
                let radius = (*thickness as f32 / 2.0).max(self.cell.min_element() / 2.0);
                let pad = Vec2::splat(radius);
                let (a, b) = (*from, *to);
                self.paint(a.min(b) - pad, a.max(b) + pad, *color, |p| {
                    distance_to_segment(p, a, b) <= radius
                });
            }
            DrawCommand::Text { .. } => {}
        }
    }
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.  The bottom terminal row holds the controls
/// hint; everything above it is the play area.
pub fn render<W: Write>(
    out: &mut W,
    session: &GameSession,
    commands: &[DrawCommand],
) -> std::io::Result<()> {
    let (cols, term_rows) = terminal::size()?;
    let rows = term_rows.saturating_sub(1);
    let viewport = Vec2::new(session.config.width(), session.config.height());

    let mut canvas = Canvas::new(cols, rows, viewport);
    for command in commands {
        canvas.draw(command);
    }

    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_pixels(out, &canvas)?;
    for command in commands {
        if let DrawCommand::Text {
            text,
            at,
            color,
            scale,
        } = command
        {
            draw_text(out, &canvas, text, *at, *color, *scale)?;
        }
    }
    draw_controls_hint(out, session, term_rows)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, term_rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn draw_pixels<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    for row in 0..canvas.rows {
        out.queue(cursor::MoveTo(0, row))?;
        let start = row as usize * canvas.cols as usize;
        let line = &canvas.pixels[start..start + canvas.cols as usize];

        // Emit runs of equal colour to keep the escape traffic down.
        let mut run = String::new();
        let mut run_color: Option<Rgb> = None;
        for px in line {
            if *px != run_color && !run.is_empty() {
                flush_run(out, &run, run_color)?;
                run.clear();
            }
            run_color = *px;
            run.push(if px.is_some() { PIXEL } else { ' ' });
        }
        if !run.is_empty() {
            flush_run(out, &run, run_color)?;
        }
    }
    Ok(())
}

fn flush_run<W: Write>(out: &mut W, run: &str, color: Option<Rgb>) -> std::io::Result<()> {
    if let Some(c) = color {
        out.queue(style::SetForegroundColor(term_color(c)))?;
    }
    out.queue(Print(run))?;
    Ok(())
}

fn draw_text<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    text: &str,
    at: Vec2,
    color: Rgb,
    scale: f32,
) -> std::io::Result<()> {
    if canvas.cols == 0 || canvas.rows == 0 {
        return Ok(());
    }
    let col = ((at.x / canvas.cell.x).max(0.0) as u16).min(canvas.cols - 1);
    let row = ((at.y / canvas.cell.y).max(0.0) as u16).min(canvas.rows - 1);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(term_color(color)))?;
    if scale >= 1.5 {
        out.queue(style::SetAttribute(Attribute::Bold))?;
    }
    out.queue(Print(text))?;
    out.queue(style::SetAttribute(Attribute::Reset))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(
    out: &mut W,
    session: &GameSession,
    term_rows: u16,
) -> std::io::Result<()> {
    let hint = match session.status {
        GameStatus::Playing => "Hold left mouse button and swipe : Slice   Q : Quit",
        GameStatus::GameOver => "R : Restart   Q : Quit",
    };
    out.queue(cursor::MoveTo(1, term_rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}
