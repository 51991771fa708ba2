use std::sync::Mutex;

/// The two feedback sounds the quiz plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackCue {
    Correct,
    Incorrect,
}

/// Playback port. A cue is fire-and-forget; the quiz never waits on it.
pub trait FeedbackAudio: Send + Sync {
    fn play(&self, cue: FeedbackCue);
}

/// Audio sink that plays nothing, for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl FeedbackAudio for SilentAudio {
    fn play(&self, _cue: FeedbackCue) {}
}

/// Test sink that remembers every cue in play order.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    played: Mutex<Vec<FeedbackCue>>,
}

impl RecordingAudio {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn played(&self) -> Vec<FeedbackCue> {
        self.played.lock().map(|cues| cues.clone()).unwrap_or_default()
    }
}

impl FeedbackAudio for RecordingAudio {
    fn play(&self, cue: FeedbackCue) {
        if let Ok(mut played) = self.played.lock() {
            played.push(cue);
        }
    }
}
