//! Audio player boundary.

use crate::types::SoundEffect;

/// Receives sound effect requests.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Keeps every request in order (for tests and replays).
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    played: Vec<SoundEffect>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> &[SoundEffect] {
        &self.played
    }

    pub fn count(&self, effect: SoundEffect) -> usize {
        self.played.iter().filter(|&&e| e == effect).count()
    }

    pub fn clear(&mut self) {
        self.played.clear();
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played.push(effect);
    }
}

impl<T: AudioSink + ?Sized> AudioSink for &mut T {
    fn play(&mut self, effect: SoundEffect) {
        (**self).play(effect);
    }
}
