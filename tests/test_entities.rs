use std::time::Duration;

use food_slicer::audio::*;
use food_slicer::entities::*;

use glam::Vec2;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(ShapeKind::Circle, ShapeKind::Circle);
    assert_ne!(ShapeKind::Circle, ShapeKind::Hexagon);
    assert_eq!(Side::Left, Side::Left);
    assert_ne!(Side::Left, Side::Right);
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
}

#[test]
fn shape_kinds_are_distinct() {
    for (i, a) in ShapeKind::ALL.iter().enumerate() {
        for b in &ShapeKind::ALL[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn food_clone_is_independent() {
    let original = FoodItem {
        pos: Vec2::new(100.0, 0.0),
        size: 30.0,
        speed: 4.0,
        shape: ShapeKind::Triangle,
        sliced: false,
        missed: false,
        halves: Vec::new(),
    };
    let mut cloned = original.clone();
    cloned.pos.y = 99.0;
    cloned.sliced = true;
    cloned.halves.push(Half {
        pos: Vec2::ZERO,
        vel: Vec2::ZERO,
        side: Side::Left,
    });

    assert_eq!(original.pos.y, 0.0);
    assert!(!original.sliced);
    assert!(original.halves.is_empty());
}

#[test]
fn tick_input_frame_uses_unit_dt() {
    let input = TickInput::frame(vec![Vec2::new(1.0, 2.0)], Duration::from_secs(3));
    assert_eq!(input.dt, 1.0);
    assert_eq!(input.now, Duration::from_secs(3));
    assert_eq!(input.fingertips.len(), 1);
}

// ── Sound cues ────────────────────────────────────────────────────────────────

#[test]
fn events_map_to_cues() {
    assert_eq!(
        GameEvent::Sliced {
            shape: ShapeKind::Star
        }
        .sound_cue(),
        Some(SoundCue::Slice)
    );
    assert_eq!(
        GameEvent::GameOver { final_score: 3 }.sound_cue(),
        Some(SoundCue::GameOver)
    );
    assert_eq!(GameEvent::Missed.sound_cue(), None);
}

#[test]
fn cue_names() {
    assert_eq!(SoundCue::Slice.name(), "slice");
    assert_eq!(SoundCue::GameOver.name(), "gameOver");
}

#[test]
fn dispatch_skips_silent_events() {
    let events = vec![
        GameEvent::Sliced {
            shape: ShapeKind::Circle,
        },
        GameEvent::Missed,
        GameEvent::Sliced {
            shape: ShapeKind::Hexagon,
        },
        GameEvent::GameOver { final_score: 2 },
    ];
    let mut sink = RecordingSink::default();
    dispatch_events(&events, &mut sink);
    assert_eq!(
        sink.played,
        vec![SoundCue::Slice, SoundCue::Slice, SoundCue::GameOver]
    );
}

#[test]
fn dispatch_nothing_for_no_events() {
    let mut sink = RecordingSink::default();
    dispatch_events(&[], &mut sink);
    assert!(sink.played.is_empty());
}
