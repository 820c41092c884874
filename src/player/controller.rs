use super::{
    AudioEngine, EngineEvent, EngineInstance, InstanceId, InstanceState, Lifecycle, LoadOptions,
    LogNowPlaying, NowPlaying, NowPlayingMetadata, NowPlayingStatus, PROGRESS_INTERVAL,
    PlaybackState, TransportCommand,
};
use crate::{
    catalog::{Catalog, Step},
    config::Settings,
    domain::Song,
};
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

struct LiveInstance<I> {
    id: InstanceId,
    handle: I,
    state: InstanceState,
}

/// Owns the playback state and the single live engine instance.
///
/// Every operation returns immediately. Engine feedback arrives on
/// [`events`](Self::events) and must be handed back through
/// [`handle_engine_event`](Self::handle_engine_event); the progress tick on
/// [`progress_ticks`](Self::progress_ticks) drives
/// [`poll_progress`](Self::poll_progress).
pub struct PlaybackController<E: AudioEngine> {
    catalog: Arc<Catalog>,
    engine: E,
    state: PlaybackState,

    live: Option<LiveInstance<E::Instance>>,
    next_id: u64,
    streaming: bool,
    album: String,

    events_tx: Sender<EngineEvent>,
    events_rx: Receiver<EngineEvent>,
    transport_tx: Sender<TransportCommand>,
    transport_rx: Receiver<TransportCommand>,
    progress_ticks: Option<Receiver<Instant>>,

    now_playing: Box<dyn NowPlaying>,
    handlers_registered: bool,
    last_error: Option<String>,
}

impl<E: AudioEngine> PlaybackController<E> {
    pub fn new(catalog: Arc<Catalog>, engine: E, settings: &Settings) -> Self {
        let (events_tx, events_rx) = unbounded();
        let (transport_tx, transport_rx) = unbounded();

        PlaybackController {
            catalog,
            engine,
            state: PlaybackState::new(settings.volume),

            live: None,
            next_id: 0,
            streaming: settings.streaming,
            album: settings.album.clone(),

            events_tx,
            events_rx,
            transport_tx,
            transport_rx,
            progress_ticks: None,

            now_playing: Box::new(LogNowPlaying),
            handlers_registered: false,
            last_error: None,
        }
    }

    pub fn with_now_playing(mut self, now_playing: Box<dyn NowPlaying>) -> Self {
        self.now_playing = now_playing;
        self.handlers_registered = false;
        self
    }
}

// ===============
//    ACCESSORS
// ===============
impl<E: AudioEngine> PlaybackController<E> {
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn events(&self) -> Receiver<EngineEvent> {
        self.events_rx.clone()
    }

    pub fn transport_commands(&self) -> Receiver<TransportCommand> {
        self.transport_rx.clone()
    }

    /// Fires every [`PROGRESS_INTERVAL`] while playing; never fires otherwise.
    pub fn progress_ticks(&self) -> Receiver<Instant> {
        self.progress_ticks
            .clone()
            .unwrap_or_else(crossbeam_channel::never)
    }

    pub fn is_polling(&self) -> bool {
        self.progress_ticks.is_some()
    }

    pub fn instance_state(&self) -> InstanceState {
        self.live
            .as_ref()
            .map_or(InstanceState::Idle, |live| live.state)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}

// =================
//    OPERATIONS
// =================
impl<E: AudioEngine> PlaybackController<E> {
    /// Tear down whatever is playing and start `song` on a fresh instance.
    pub fn play_song(&mut self, song: Arc<Song>) {
        self.release_instance();

        let id = InstanceId(self.next_id);
        self.next_id += 1;

        let options = LoadOptions {
            streaming: self.streaming,
            initial_volume: self.state.volume,
        };

        let mut handle = self
            .engine
            .load(id, song.get_media(), options, self.events_tx.clone());
        handle.play();

        tracing::info!(
            instance = id.0,
            id = song.get_id(),
            title = song.get_title(),
            "Playing song"
        );

        self.live = Some(LiveInstance {
            id,
            handle,
            state: InstanceState::Loading,
        });

        self.now_playing.set_metadata(&NowPlayingMetadata {
            title: song.get_title().to_string(),
            artist: song.get_artist().to_string(),
            album: self.album.clone(),
            artwork: song.get_cover().to_string(),
        });
        self.register_handlers();

        self.state.current_song = Some(song);
        self.state.progress = 0.0;
    }

    pub fn pause_song(&mut self) {
        if let Some(live) = self.live.as_mut() {
            live.handle.pause();
        }
    }

    pub fn resume_song(&mut self) {
        // TODO: confirm that resuming with nothing selected should start the catalog
        let Some(song) = self.state.current_song.clone() else {
            return self.play_first();
        };

        if let Some(live) = self.live.as_mut() {
            live.handle.play();
        } else {
            self.play_song(song);
        }
    }

    pub fn next_song(&mut self) {
        self.step(Step::Forward);
    }

    pub fn prev_song(&mut self) {
        self.step(Step::Back);
    }

    /// Callers are expected to pass a value in [0, 1].
    pub fn set_volume(&mut self, volume: f32) {
        self.state.volume = volume;
        if let Some(live) = self.live.as_mut() {
            live.handle.set_volume(volume);
        }
    }

    /// Jump to `fraction` of the song. Progress updates at once rather than
    /// on the next poll.
    pub fn seek(&mut self, fraction: f64) {
        let Some(live) = self.live.as_mut() else {
            return;
        };

        let duration =
            effective_duration(live.handle.duration(), self.state.current_song.as_deref());
        let target =
            Duration::try_from_secs_f64(duration.as_secs_f64() * fraction).unwrap_or_default();

        live.handle.seek(target);
        self.state.progress = fraction;
    }

    pub fn handle_transport(&mut self, command: TransportCommand) {
        tracing::debug!(?command, "Transport command");
        match command {
            TransportCommand::Play => self.resume_song(),
            TransportCommand::Pause => self.pause_song(),
            TransportCommand::Next => self.next_song(),
            TransportCommand::Previous => self.prev_song(),
        }
    }

    /// Release the audio resource and stop polling. Also runs on drop.
    pub fn shutdown(&mut self) {
        if self.live.is_some() {
            tracing::info!("Releasing audio instance");
        }
        self.release_instance();
    }

    fn step(&mut self, step: Step) {
        let song = match &self.state.current_song {
            Some(current) => self.catalog.neighbor(current.get_id(), step).cloned(),
            None => self.catalog.first().cloned(),
        };

        if let Some(song) = song {
            self.play_song(song);
        }
    }

    fn play_first(&mut self) {
        if let Some(song) = self.catalog.first().cloned() {
            self.play_song(song);
        }
    }

    // The instance's own Stop arrives stale, so settle it here
    fn release_instance(&mut self) {
        if self.live.is_some() {
            self.halt(InstanceState::Stopped);
        }
        if let Some(mut live) = self.live.take() {
            tracing::trace!(instance = live.id.0, state = ?live.state, "Releasing instance");
            live.handle.stop();
        }
        self.stop_progress_timer();
    }

    fn register_handlers(&mut self) {
        if !self.handlers_registered {
            self.now_playing
                .register_handlers(self.transport_tx.clone());
            self.handlers_registered = true;
        }
    }
}

// ======================
//    ENGINE FEEDBACK
// ======================
impl<E: AudioEngine> PlaybackController<E> {
    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        let is_live = self
            .live
            .as_ref()
            .is_some_and(|live| live.id == event.instance);

        if !is_live {
            tracing::trace!(
                instance = event.instance.0,
                kind = ?event.kind,
                "Dropping stale event"
            );
            return;
        }

        match event.kind {
            Lifecycle::Play => {
                self.set_instance_state(InstanceState::Playing);
                self.state.is_playing = true;
                self.start_progress_timer();
                self.now_playing.set_status(NowPlayingStatus::Playing);
            }
            Lifecycle::Pause => self.halt(InstanceState::Paused),
            Lifecycle::Stop => self.halt(InstanceState::Stopped),
            Lifecycle::End => {
                tracing::debug!(instance = event.instance.0, "Song ended, advancing");
                self.halt(InstanceState::Ended);
                self.next_song();
            }
            Lifecycle::LoadError(msg) => {
                tracing::warn!(
                    instance = event.instance.0,
                    error = %msg,
                    "Engine could not load media"
                );
                self.last_error = Some(msg);
            }
        }
    }

    /// Handle every event already queued. Returns how many were handled.
    pub fn pump_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_engine_event(event);
            handled += 1;
        }
        handled
    }

    /// Sample the engine position into `progress`.
    pub fn poll_progress(&mut self) {
        let Some(live) = &self.live else {
            return;
        };

        let position = live.handle.position();
        let duration =
            effective_duration(live.handle.duration(), self.state.current_song.as_deref());

        self.state.progress = (position.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0);
    }

    fn halt(&mut self, state: InstanceState) {
        self.set_instance_state(state);
        self.state.is_playing = false;
        self.stop_progress_timer();
        self.now_playing.set_status(NowPlayingStatus::Paused);
    }

    fn set_instance_state(&mut self, state: InstanceState) {
        if let Some(live) = self.live.as_mut() {
            live.state = state;
        }
    }

    fn start_progress_timer(&mut self) {
        self.progress_ticks = Some(crossbeam_channel::tick(PROGRESS_INTERVAL));
    }

    fn stop_progress_timer(&mut self) {
        self.progress_ticks = None;
    }
}

impl<E: AudioEngine> Drop for PlaybackController<E> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// Engine-reported length, then the catalog's nominal length, then 1s
fn effective_duration(reported: Option<Duration>, song: Option<&Song>) -> Duration {
    reported
        .filter(|d| !d.is_zero())
        .or_else(|| song.map(Song::get_duration).filter(|d| !d.is_zero()))
        .unwrap_or(Duration::from_secs(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_prefers_engine_report() {
        let song = Song::new("a", "A", "x", "", "/a.mp3", Duration::from_secs(180));
        assert_eq!(
            effective_duration(Some(Duration::from_secs(200)), Some(&song)),
            Duration::from_secs(200)
        );
    }

    #[test]
    fn duration_falls_back_to_catalog_then_one_second() {
        let song = Song::new("a", "A", "x", "", "/a.mp3", Duration::from_secs(180));
        assert_eq!(
            effective_duration(Some(Duration::ZERO), Some(&song)),
            Duration::from_secs(180)
        );

        let unknown = Song::new("b", "B", "x", "", "/b.mp3", Duration::ZERO);
        assert_eq!(effective_duration(None, Some(&unknown)), Duration::from_secs(1));
        assert_eq!(effective_duration(None, None), Duration::from_secs(1));
    }
}
