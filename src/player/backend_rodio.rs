use super::{AudioEngine, EngineEvent, EngineInstance, InstanceId, Lifecycle, LoadOptions};
use anyhow::Result;
use crossbeam_channel::Sender;
use rodio::{ChannelCount, Decoder, OutputStream, OutputStreamBuilder, SampleRate, Sink, Source};
use std::{
    fs::File,
    io::{BufReader, Cursor, Read, Seek},
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

/// Owns the output device. Each loaded song gets its own sink on the
/// shared mixer.
pub struct RodioEngine {
    stream: OutputStream,
}

impl RodioEngine {
    pub fn new() -> Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // Would otherwise print over the restored terminal on exit
        stream.log_on_drop(false);

        Ok(RodioEngine { stream })
    }
}

impl AudioEngine for RodioEngine {
    type Instance = RodioInstance;

    fn load(
        &mut self,
        id: InstanceId,
        media: &Path,
        options: LoadOptions,
        events: Sender<EngineEvent>,
    ) -> RodioInstance {
        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        sink.set_volume(options.initial_volume);

        let stopped = Arc::new(AtomicBool::new(false));
        let signal = EndSignal {
            id,
            events: events.clone(),
            stopped: Arc::clone(&stopped),
        };

        let (loaded, duration) = match append_decoded(&sink, media, options.streaming, signal) {
            Ok(duration) => (true, duration),
            Err(e) => {
                tracing::warn!(media = %media.display(), error = %e, "Failed to load media");
                let _ = events.send(EngineEvent::new(id, Lifecycle::LoadError(e.to_string())));
                (false, None)
            }
        };

        tracing::debug!(instance = id.0, media = %media.display(), ?duration, "Instance loaded");

        RodioInstance {
            id,
            sink,
            events,
            stopped,
            loaded,
            duration,
        }
    }
}

pub struct RodioInstance {
    id: InstanceId,
    sink: Sink,
    events: Sender<EngineEvent>,
    stopped: Arc<AtomicBool>,
    loaded: bool,
    duration: Option<Duration>,
}

impl RodioInstance {
    fn emit(&self, kind: Lifecycle) {
        let _ = self.events.send(EngineEvent::new(self.id, kind));
    }

    fn is_usable(&self) -> bool {
        self.loaded && !self.stopped.load(Ordering::SeqCst)
    }
}

impl EngineInstance for RodioInstance {
    fn play(&mut self) {
        if self.is_usable() && self.sink.is_paused() {
            self.sink.play();
            self.emit(Lifecycle::Play);
        }
    }

    fn pause(&mut self) {
        if self.is_usable() && !self.sink.is_paused() {
            self.sink.pause();
            self.emit(Lifecycle::Pause);
        }
    }

    fn stop(&mut self) {
        // Raise the flag first so the source cannot report a natural end
        if self.stopped.swap(true, Ordering::SeqCst) {
            return;
        }
        self.sink.stop();
        self.emit(Lifecycle::Stop);
    }

    fn seek(&mut self, to: Duration) {
        if !self.is_usable() {
            return;
        }
        if let Err(e) = self.sink.try_seek(to) {
            tracing::warn!(instance = self.id.0, error = %e, "Seek failed");
        }
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume);
    }
}

fn append_decoded(
    sink: &Sink,
    media: &Path,
    streaming: bool,
    signal: EndSignal,
) -> Result<Option<Duration>> {
    match streaming {
        true => {
            let file = File::open(media)?;
            let len = file.metadata()?.len();
            let source = decode(BufReader::new(file), len, media)?;
            let duration = source.total_duration();

            sink.append(signal.wrap(source));
            Ok(duration)
        }
        false => {
            let bytes = std::fs::read(media)?;
            let len = bytes.len() as u64;
            let source = decode(Cursor::new(bytes), len, media)?;
            let duration = source.total_duration();

            sink.append(signal.wrap(source));
            Ok(duration)
        }
    }
}

fn decode<R>(data: R, len: u64, media: &Path) -> Result<Decoder<R>>
where
    R: Read + Seek + Send + Sync + 'static,
{
    let mut builder = Decoder::builder()
        .with_data(data)
        .with_byte_len(len)
        .with_seekable(true);

    if let Some(ext) = media.extension().and_then(|e| e.to_str()) {
        let hint = match ext {
            "adif" | "adts" => "aac",
            "caf" => "audio/x-caf",
            "m4a" | "m4b" | "m4p" | "m4r" | "mp4" => "audio/mp4",
            "bit" | "mpga" => "mp3",
            "mka" | "mkv" => "audio/matroska",
            "oga" | "ogm" | "ogv" | "ogx" | "spx" => "audio/ogg",
            "wave" => "wav",
            _ => ext,
        };
        builder = builder.with_hint(hint);
    }

    Ok(builder.build()?)
}

struct EndSignal {
    id: InstanceId,
    events: Sender<EngineEvent>,
    stopped: Arc<AtomicBool>,
}

impl EndSignal {
    fn wrap<I>(self, input: I) -> EndNotifier<I> {
        EndNotifier {
            input,
            signal: self,
            fired: false,
        }
    }
}

/// Reports `Lifecycle::End` once the wrapped source runs dry on its own.
pub struct EndNotifier<I> {
    input: I,
    signal: EndSignal,
    fired: bool,
}

impl<I> Iterator for EndNotifier<I>
where
    I: Source<Item = f32>,
{
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        match self.input.next() {
            Some(sample) => Some(sample),
            None => {
                if !self.fired && !self.signal.stopped.load(Ordering::SeqCst) {
                    self.fired = true;
                    let _ = self
                        .signal
                        .events
                        .send(EngineEvent::new(self.signal.id, Lifecycle::End));
                }
                None
            }
        }
    }
}

impl<I> Source for EndNotifier<I>
where
    I: Source<Item = f32>,
{
    fn current_span_len(&self) -> Option<usize> {
        self.input.current_span_len()
    }

    fn channels(&self) -> ChannelCount {
        self.input.channels()
    }

    fn sample_rate(&self) -> SampleRate {
        self.input.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        self.input.total_duration()
    }

    fn try_seek(&mut self, pos: Duration) -> Result<(), rodio::source::SeekError> {
        self.input.try_seek(pos)
    }
}
