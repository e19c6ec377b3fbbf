//! Flip-sound playback.
//!
//! Best-effort by contract: a page turn must never fail or stall because
//! audio is unavailable, so every error on the playback path is logged and
//! swallowed here. The navigation state machine only ever sees a
//! fire-and-forget `play()`.

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info, warn};

pub struct FlipSound {
    // Keeps the audio device open for the lifetime of the app.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    samples: Vec<u8>,
}

impl FlipSound {
    /// Open the default output device and read the sound file into memory.
    pub fn open(path: &Path) -> Result<FlipSound> {
        let samples = fs::read(path)
            .with_context(|| format!("Reading flip sound {}", path.display()))?;
        let (stream, handle) = OutputStream::try_default().context("Opening audio output")?;
        info!(path = %path.display(), bytes = samples.len(), "Flip sound loaded");
        Ok(FlipSound {
            _stream: stream,
            handle,
            samples,
        })
    }

    /// Play the flip sound once. Failures are absorbed.
    pub fn play(&self) {
        let source = match Decoder::new(Cursor::new(self.samples.clone())) {
            Ok(source) => source,
            Err(err) => {
                warn!("Could not decode flip sound: {err}");
                return;
            }
        };
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.append(source);
                sink.detach();
                debug!("Flip sound playing");
            }
            Err(err) => warn!("Could not start flip sound: {err}"),
        }
    }
}
