//! Sound backend: synthesized tones over a rodio output stream.
//!
//! No sample assets; each notification is a short sine tone. Opening the
//! output device can fail and does so at startup, through `Sfx::new`.
//! Playback itself is fire-and-forget: a busy or vanished device drops the
//! effect and the game never notices.

use std::time::Duration;

use anyhow::{Context, Result};
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle};

use crate::core::SoundSink;

/// Effect volumes (0.0..=1.0).
pub const PLACE_SFX_VOLUME: f32 = 0.25;
pub const CLEAR_SFX_VOLUME: f32 = 0.35;
pub const GAME_OVER_SFX_VOLUME: f32 = 0.40;

pub struct Sfx {
    // Dropping the stream silences the handle, so it rides along.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Sfx {
    /// Open the default audio output. Failing here is a startup error;
    /// the caller decides whether to run without sound.
    pub fn new() -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("opening default audio output")?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }

    fn tone(&self, freq_hz: f32, duration_ms: u64, volume: f32) {
        let source = SineWave::new(freq_hz)
            .take_duration(Duration::from_millis(duration_ms))
            .amplify(volume);
        let _ = self.handle.play_raw(source);
    }
}

impl SoundSink for Sfx {
    fn play_place(&mut self) {
        self.tone(220.0, 60, PLACE_SFX_VOLUME);
    }

    fn play_clear(&mut self) {
        self.tone(660.0, 180, CLEAR_SFX_VOLUME);
    }

    fn play_game_over(&mut self) {
        self.tone(110.0, 900, GAME_OVER_SFX_VOLUME);
    }
}
