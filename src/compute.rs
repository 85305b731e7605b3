/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current state
/// (and, where needed, an RNG handle) and returns a brand-new value.  Side
/// effects are limited to the injected RNG and log output; sounds and other
/// reactions are reported as `GameEvent`s for the caller to act on.

use std::ops::RangeInclusive;
use std::time::Duration;

use glam::Vec2;
use rand::Rng;

use crate::config::{GameConfig, SPAWN_MARGIN};
use crate::entities::{
    FoodItem, GameEvent, GameSession, GameStatus, Half, ShapeKind, Side, TickInput, TickOutcome,
};
use crate::error::Result;
use crate::trail::FingerTrail;

// ── Tuning ────────────────────────────────────────────────────────────────────

const SIZE_RANGE: RangeInclusive<u32> = 20..=40;
const SPEED_RANGE: RangeInclusive<u32> = 3..=6;

/// Horizontal distance of each half from the parent's centre at slice time.
const HALF_OFFSET: f32 = 10.0;

/// Halves stay alive until they fall this far below the viewport.
const OFFSCREEN_MARGIN: f32 = 50.0;

// ── Food ──────────────────────────────────────────────────────────────────────

/// A fresh item at the top edge with random column, size, speed and shape.
pub fn spawn_food(config: &GameConfig, rng: &mut impl Rng) -> FoodItem {
    let max_x = config.viewport_width.saturating_sub(SPAWN_MARGIN).max(SPAWN_MARGIN);
    let x = rng.gen_range(SPAWN_MARGIN..=max_x);
    let size = rng.gen_range(SIZE_RANGE);
    let speed = rng.gen_range(SPEED_RANGE);
    let shape = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];

    FoodItem {
        pos: Vec2::new(x as f32, 0.0),
        size: size as f32,
        speed: speed as f32,
        shape,
        sliced: false,
        missed: false,
        halves: Vec::new(),
    }
}

/// Move an item forward by `dt` reference ticks.
///
/// Whole items fall at their own speed.  Sliced items move their halves
/// instead: position first, then gravity on the vertical velocity.  Halves
/// more than `OFFSCREEN_MARGIN` below the viewport are dropped.
pub fn advance_food(item: &FoodItem, config: &GameConfig, dt: f32) -> FoodItem {
    if !item.sliced {
        return FoodItem {
            pos: Vec2::new(item.pos.x, item.pos.y + item.speed * dt),
            ..item.clone()
        };
    }

    let floor = config.height() + OFFSCREEN_MARGIN;
    let halves = item
        .halves
        .iter()
        .filter_map(|h| {
            let pos = h.pos + h.vel * dt;
            let vel = Vec2::new(h.vel.x, h.vel.y + config.gravity * dt);
            if pos.y > floor {
                None
            } else {
                Some(Half { pos, vel, ..h.clone() })
            }
        })
        .collect();

    FoodItem {
        halves,
        ..item.clone()
    }
}

/// Split an item into a left and a right half.  Already-sliced items are
/// returned unchanged.
pub fn slice_food(item: &FoodItem, config: &GameConfig) -> FoodItem {
    if item.sliced {
        return item.clone();
    }
    let halves = vec![
        Half {
            pos: Vec2::new(item.pos.x - HALF_OFFSET, item.pos.y),
            vel: Vec2::new(-config.half_dx, item.speed),
            side: Side::Left,
        },
        Half {
            pos: Vec2::new(item.pos.x + HALF_OFFSET, item.pos.y),
            vel: Vec2::new(config.half_dx, item.speed),
            side: Side::Right,
        },
    ];
    FoodItem {
        sliced: true,
        halves,
        ..item.clone()
    }
}

/// Hit test: the fingertip must lie in the box anchored at the item's
/// position and extending `size` right and down.  Edges count as hits.
pub fn is_sliced(fingertip: Vec2, item: &FoodItem) -> bool {
    let (fx1, fy1) = (item.pos.x, item.pos.y);
    let (fx2, fy2) = (item.pos.x + item.size, item.pos.y + item.size);
    fingertip.x >= fx1 && fingertip.x <= fx2 && fingertip.y >= fy1 && fingertip.y <= fy2
}

/// Unsliced and still above the bottom edge.
pub fn alive_as_whole(item: &FoodItem, config: &GameConfig) -> bool {
    !item.sliced && item.pos.y < config.height()
}

/// Sliced with at least one half still in flight.
pub fn alive_as_halves(item: &FoodItem) -> bool {
    item.sliced && !item.halves.is_empty()
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Validate `config` and build a playing session whose spawn clock starts at
/// `now`.
pub fn new_session(config: GameConfig, now: Duration) -> Result<GameSession> {
    config.validate()?;
    let trail = FingerTrail::new(config.trail_capacity);
    Ok(GameSession {
        config,
        items: Vec::new(),
        trail,
        score: 0,
        misses: 0,
        status: GameStatus::Playing,
        last_spawn: now,
    })
}

/// Back to a clean playing state, from any status.
pub fn reset(state: &GameSession, now: Duration) -> GameSession {
    log::info!("session reset (previous score {})", state.score);
    let mut trail = state.trail.clone();
    trail.clear();
    GameSession {
        items: Vec::new(),
        trail,
        score: 0,
        misses: 0,
        status: GameStatus::Playing,
        last_spawn: now,
        ..state.clone()
    }
}

/// Advance the session by one frame.  All randomness comes through `rng` so
/// callers control determinism (useful for tests with a seeded RNG).
///
/// A session that is already over is returned unchanged.
pub fn tick(state: &GameSession, input: &TickInput, rng: &mut impl Rng) -> TickOutcome {
    if state.status == GameStatus::GameOver {
        return TickOutcome {
            state: state.clone(),
            events: Vec::new(),
        };
    }

    let config = &state.config;
    let mut events = Vec::new();
    let mut score = state.score;
    let mut misses = state.misses;

    // ── 1. Spawn on cadence ──────────────────────────────────────────────────
    let mut items = state.items.clone();
    let mut last_spawn = state.last_spawn;
    if input.now.saturating_sub(state.last_spawn) >= config.spawn_interval() {
        let food = spawn_food(config, rng);
        log::debug!(
            "spawned {:?} at x={} size={} speed={}",
            food.shape,
            food.pos.x,
            food.size,
            food.speed
        );
        items.push(food);
        last_spawn = input.now;
    }

    // ── 2. Move, slice, count misses ─────────────────────────────────────────
    let mut survivors = Vec::with_capacity(items.len());
    for item in &items {
        let mut item = advance_food(item, config, input.dt);

        for &tip in &input.fingertips {
            if !item.sliced && is_sliced(tip, &item) {
                item = slice_food(&item, config);
                score += 1;
                log::debug!("sliced {:?} at ({}, {})", item.shape, tip.x, tip.y);
                events.push(GameEvent::Sliced { shape: item.shape });
            }
        }

        if !item.sliced && !item.missed && item.pos.y >= config.height() {
            item.missed = true;
            if misses < config.max_misses {
                misses += 1;
                log::debug!("missed {:?} ({}/{})", item.shape, misses, config.max_misses);
                events.push(GameEvent::Missed);
            }
        }

        // ── 3. Keep whole items on screen and halves in flight ───────────────
        if alive_as_whole(&item, config) || alive_as_halves(&item) {
            survivors.push(item);
        }
    }

    // ── 4. Trail ─────────────────────────────────────────────────────────────
    let mut trail = state.trail.clone();
    for &tip in &input.fingertips {
        trail.push(tip);
    }

    // ── 5. Game over ─────────────────────────────────────────────────────────
    let mut status = GameStatus::Playing;
    if misses >= config.max_misses {
        status = GameStatus::GameOver;
        survivors.clear();
        log::info!("game over with score {}", score);
        events.push(GameEvent::GameOver { final_score: score });
    }

    TickOutcome {
        state: GameSession {
            items: survivors,
            trail,
            score,
            misses,
            status,
            last_spawn,
            ..state.clone()
        },
        events,
    }
}
