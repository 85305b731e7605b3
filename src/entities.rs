/// Game entity types. Pure data, no logic.

use std::time::Duration;

use glam::Vec2;

use crate::config::GameConfig;
use crate::trail::FingerTrail;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Triangle,
    Star,
    Hexagon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Star,
        ShapeKind::Hexagon,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Food ──────────────────────────────────────────────────────────────────────

/// One fragment of a sliced item, flying on its own ballistic path.
#[derive(Clone, Debug, PartialEq)]
pub struct Half {
    pub pos: Vec2,
    /// Pixels per tick.  Gravity is added to `vel.y` after every move.
    pub vel: Vec2,
    pub side: Side,
}

/// A falling piece of food.
///
/// `pos` is the shape centre; `y` grows downwards.  Once `sliced` flips to
/// true the whole item stops moving and only its `halves` are animated.
#[derive(Clone, Debug, PartialEq)]
pub struct FoodItem {
    pub pos: Vec2,
    pub size: f32,
    /// Fall speed in pixels per tick, fixed at spawn.
    pub speed: f32,
    pub shape: ShapeKind,
    pub sliced: bool,
    /// Set once, when the unsliced item first reaches the bottom edge.
    pub missed: bool,
    /// Empty until the item is sliced.
    pub halves: Vec<Half>,
}

// ── Events ────────────────────────────────────────────────────────────────────

/// Something the driver may want to react to (sound, effects).
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Sliced { shape: ShapeKind },
    Missed,
    GameOver { final_score: u32 },
}

// ── Per-tick input ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct TickInput {
    /// Fingertip positions in viewport pixels, processed in order.
    pub fingertips: Vec<Vec2>,
    /// Time since the driver's epoch.
    pub now: Duration,
    /// Elapsed time in reference ticks (1.0 = one frame).
    pub dt: f32,
}

impl TickInput {
    /// Input for one frame at the reference rate.
    pub fn frame(fingertips: Vec<Vec2>, now: Duration) -> Self {
        TickInput {
            fingertips,
            now,
            dt: 1.0,
        }
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// The entire state of one play session.  Cloneable so the pure update
/// functions can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub config: GameConfig,
    /// Active items in spawn order.
    pub items: Vec<FoodItem>,
    pub trail: FingerTrail,
    pub score: u32,
    /// Never exceeds `config.max_misses`.
    pub misses: u32,
    pub status: GameStatus,
    pub last_spawn: Duration,
}

/// Result of a tick: the next state plus whatever happened along the way.
#[derive(Clone, Debug)]
pub struct TickOutcome {
    pub state: GameSession,
    pub events: Vec<GameEvent>,
}
