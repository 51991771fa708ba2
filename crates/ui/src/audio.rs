use dioxus::document;
use services::{FeedbackAudio, FeedbackCue};

/// Plays the feedback cues through the webview's audio context.
///
/// The cues are short synthesized beeps, a rising tone for a correct
/// answer and a low buzz for a wrong one, so no media files ship with
/// the app.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebviewAudio;

impl FeedbackAudio for WebviewAudio {
    fn play(&self, cue: FeedbackCue) {
        let (freq, duration_ms) = match cue {
            FeedbackCue::Correct => (880, 150),
            FeedbackCue::Incorrect => (180, 300),
        };
        // Fire-and-forget; a failed play (no audio device, muted webview)
        // must never interrupt the quiz.
        let js = format!(
            "try {{ \
                const ctx = new (window.AudioContext || window.webkitAudioContext)(); \
                const osc = ctx.createOscillator(); \
                const gain = ctx.createGain(); \
                osc.frequency.value = {freq}; \
                gain.gain.value = 0.1; \
                osc.connect(gain).connect(ctx.destination); \
                osc.start(); \
                setTimeout(() => {{ osc.stop(); ctx.close(); }}, {duration_ms}); \
            }} catch (e) {{}}"
        );
        let _ = document::eval(&js);
    }
}
