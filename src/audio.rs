/// Sound cues.  The core never plays audio; it reports events and an
/// `AudioSink` decides what to do with them.

use crate::entities::GameEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Slice,
    GameOver,
}

impl SoundCue {
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::Slice => "slice",
            SoundCue::GameOver => "gameOver",
        }
    }
}

impl GameEvent {
    /// Misses are silent.
    pub fn sound_cue(&self) -> Option<SoundCue> {
        match self {
            GameEvent::Sliced { .. } => Some(SoundCue::Slice),
            GameEvent::GameOver { .. } => Some(SoundCue::GameOver),
            GameEvent::Missed => None,
        }
    }
}

pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Play the cue of every event, in order.
pub fn dispatch_events<A: AudioSink + ?Sized>(events: &[GameEvent], sink: &mut A) {
    for cue in events.iter().filter_map(GameEvent::sound_cue) {
        log::trace!("sound cue {}", cue.name());
        sink.play(cue);
    }
}

/// Keeps every cue it is given.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub played: Vec<SoundCue>,
}

impl AudioSink for RecordingSink {
    fn play(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }
}
