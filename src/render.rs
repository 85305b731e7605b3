/// Translate a session into backend-neutral draw commands.
///
/// Nothing here touches a screen.  A renderer walks the returned list in
/// order: food first, then the fingertip trail, then HUD text on top.

use glam::Vec2;

use crate::entities::{GameSession, GameStatus, ShapeKind};
use crate::geometry::{full_outline, half_outline, Outline};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_TRAIL: Rgb = Rgb::new(255, 255, 0);
pub const C_HUD_SCORE: Rgb = Rgb::new(255, 255, 255);
pub const C_HUD_MISSES: Rgb = Rgb::new(255, 100, 0);
pub const C_GAME_OVER: Rgb = Rgb::new(255, 0, 0);
pub const C_FINAL_SCORE: Rgb = Rgb::new(255, 255, 255);
pub const C_RESTART_HINT: Rgb = Rgb::new(0, 255, 0);

/// Fill colour for a shape; halves are a shade darker.
pub fn shape_color(shape: ShapeKind, half: bool) -> Rgb {
    let v = if half { 200 } else { 255 };
    match shape {
        ShapeKind::Circle => Rgb::new(v, 0, 0),
        ShapeKind::Rectangle => Rgb::new(0, 0, v),
        ShapeKind::Triangle => Rgb::new(0, v, 0),
        ShapeKind::Star => Rgb::new(0, v, v),
        ShapeKind::Hexagon => Rgb::new(v, 0, v),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Fill {
        outline: Outline,
        color: Rgb,
    },
    Line {
        from: Vec2,
        to: Vec2,
        thickness: u32,
        color: Rgb,
    },
    /// `at` is the left end of the text baseline.
    Text {
        text: String,
        at: Vec2,
        color: Rgb,
        scale: f32,
    },
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Draw commands for one complete frame.
pub fn render(state: &GameSession) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    match state.status {
        GameStatus::Playing => {
            draw_food(&mut commands, state);
            draw_trail(&mut commands, state);
            draw_hud(&mut commands, state);
        }
        GameStatus::GameOver => draw_game_over(&mut commands, state),
    }
    commands
}

fn draw_food(commands: &mut Vec<DrawCommand>, state: &GameSession) {
    for item in &state.items {
        if !item.sliced {
            commands.push(DrawCommand::Fill {
                outline: full_outline(item.shape, item.pos, item.size),
                color: shape_color(item.shape, false),
            });
            continue;
        }
        // Degenerate halves are skipped, not reported.
        for half in &item.halves {
            if let Some(outline) = half_outline(item.shape, half.pos, item.size, half.side) {
                commands.push(DrawCommand::Fill {
                    outline,
                    color: shape_color(item.shape, true),
                });
            }
        }
    }
}

fn draw_trail(commands: &mut Vec<DrawCommand>, state: &GameSession) {
    commands.extend(state.trail.segments().into_iter().map(|s| DrawCommand::Line {
        from: s.from,
        to: s.to,
        thickness: s.thickness,
        color: C_TRAIL,
    }));
}

fn text(text: String, x: f32, y: f32, color: Rgb, scale: f32) -> DrawCommand {
    DrawCommand::Text {
        text,
        at: Vec2::new(x, y),
        color,
        scale,
    }
}

fn draw_hud(commands: &mut Vec<DrawCommand>, state: &GameSession) {
    commands.push(text(format!("Score: {}", state.score), 10.0, 30.0, C_HUD_SCORE, 1.0));
    commands.push(text(
        format!("Misses: {}/{}", state.misses, state.config.max_misses),
        10.0,
        70.0,
        C_HUD_MISSES,
        0.8,
    ));
}

fn draw_game_over(commands: &mut Vec<DrawCommand>, state: &GameSession) {
    let cx = state.config.width() / 2.0;
    let cy = state.config.height() / 2.0;
    commands.push(text("GAME OVER".to_string(), cx - 150.0, cy - 50.0, C_GAME_OVER, 2.0));
    commands.push(text(
        format!("Final Score: {}", state.score),
        cx - 150.0,
        cy + 20.0,
        C_FINAL_SCORE,
        1.0,
    ));
    commands.push(text(
        "Press R to Restart".to_string(),
        cx - 170.0,
        cy + 80.0,
        C_RESTART_HINT,
        1.0,
    ));
}
