//! Audio transport behind a trait so the navigation machinery can be tested
//! without a sound device.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

/// The playback capability the controller talks to. `load` stages a file,
/// `play` starts (or resumes) it; a transport that reports neither playing
/// nor paused counts as stopped.
pub trait Transport {
    fn load(&mut self, location: &Path);
    fn play(&mut self, looped: bool);
    fn pause(&mut self);
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
    fn is_paused(&self) -> bool;
}

/// Real transport on the default output device.
pub struct RodioTransport {
    stream: OutputStream,
    sink: Sink,
    /// File staged by the last `load`, decoded on the next `play`.
    pending: Option<PathBuf>,
}

impl RodioTransport {
    pub fn open() -> Result<Self, rodio::StreamError> {
        let stream = OutputStreamBuilder::from_default_device()?.open_stream_or_fallback()?;
        let sink = Sink::connect_new(stream.mixer());
        Ok(Self {
            stream,
            sink,
            pending: None,
        })
    }
}

impl Transport for RodioTransport {
    fn load(&mut self, location: &Path) {
        if !location.exists() {
            tracing::warn!(path = %location.display(), "Media file not found");
        }
        self.pending = Some(location.to_path_buf());
    }

    fn play(&mut self, looped: bool) {
        let Some(path) = self.pending.take() else {
            // Nothing staged: resume whatever the sink holds.
            self.sink.play();
            return;
        };

        // A fresh sink per track; clearing a rodio sink in place misbehaves.
        self.sink.stop();
        self.sink = Sink::connect_new(self.stream.mixer());

        let source = match File::open(&path).map(BufReader::new).map(Decoder::new) {
            Ok(Ok(source)) => source,
            Ok(Err(err)) => {
                tracing::warn!(path = %path.display(), %err, "Failed to decode media file");
                return;
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "Failed to open media file");
                return;
            }
        };

        if looped {
            self.sink.append(source.repeat_infinite());
        } else {
            self.sink.append(source);
        }
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn stop(&mut self) {
        self.pending = None;
        self.sink.stop();
    }

    fn is_playing(&self) -> bool {
        !self.sink.empty() && !self.sink.is_paused()
    }

    fn is_paused(&self) -> bool {
        !self.sink.empty() && self.sink.is_paused()
    }
}

/// Fallback when no audio device is available: accepts every command and
/// always reports stopped, so the UI stays navigable.
#[derive(Default)]
pub struct SilentTransport;

impl Transport for SilentTransport {
    fn load(&mut self, location: &Path) {
        tracing::debug!(path = %location.display(), "Silent transport ignoring load");
    }
    fn play(&mut self, _looped: bool) {}
    fn pause(&mut self) {}
    fn stop(&mut self) {}
    fn is_playing(&self) -> bool {
        false
    }
    fn is_paused(&self) -> bool {
        false
    }
}

/// Opens the real transport, falling back to the silent one.
pub fn open_transport() -> Box<dyn Transport> {
    match RodioTransport::open() {
        Ok(transport) => Box::new(transport),
        Err(err) => {
            tracing::warn!(%err, "No audio output device, playback disabled");
            Box::new(SilentTransport)
        }
    }
}
