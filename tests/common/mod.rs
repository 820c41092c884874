#![allow(dead_code)]

use crossbeam_channel::Sender;
use serenata::{
    Catalog, PlaybackController, Settings,
    domain::Song,
    player::{
        AudioEngine, EngineEvent, EngineInstance, InstanceId, Lifecycle, LoadOptions, NowPlaying,
        NowPlayingMetadata, NowPlayingStatus, TransportCommand,
    },
};
use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    rc::Rc,
    sync::Arc,
    time::Duration,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(InstanceId, PathBuf, LoadOptions),
    Play(InstanceId),
    Pause(InstanceId),
    Stop(InstanceId),
    Seek(InstanceId, Duration),
    Volume(InstanceId, f32),
}

#[derive(Default)]
pub struct EngineLog {
    pub calls: Vec<Call>,
    pub live: usize,
    pub position: Duration,
    pub reported_duration: Option<Duration>,
    pub broken_media: HashSet<PathBuf>,
    senders: HashMap<InstanceId, Sender<EngineEvent>>,
}

/// Scripted engine: every command is recorded and answered with the
/// lifecycle event a real engine would send.
#[derive(Clone, Default)]
pub struct FakeEngine {
    pub log: Rc<RefCell<EngineLog>>,
}

impl FakeEngine {
    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().calls.clone()
    }

    pub fn live(&self) -> usize {
        self.log.borrow().live
    }

    pub fn loads(&self) -> Vec<InstanceId> {
        self.log
            .borrow()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Load(id, ..) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn set_position(&self, position: Duration) {
        self.log.borrow_mut().position = position;
    }

    pub fn set_reported_duration(&self, duration: Option<Duration>) {
        self.log.borrow_mut().reported_duration = duration;
    }

    pub fn break_media(&self, media: impl Into<PathBuf>) {
        self.log.borrow_mut().broken_media.insert(media.into());
    }

    /// Emit an event as if instance `id` produced it.
    pub fn emit(&self, id: InstanceId, kind: Lifecycle) {
        let log = self.log.borrow();
        if let Some(tx) = log.senders.get(&id) {
            tx.send(EngineEvent::new(id, kind)).unwrap();
        }
    }

    /// Let instance `id` run to its natural end.
    pub fn finish(&self, id: InstanceId) {
        self.emit(id, Lifecycle::End);
    }
}

impl AudioEngine for FakeEngine {
    type Instance = FakeInstance;

    fn load(
        &mut self,
        id: InstanceId,
        media: &Path,
        options: LoadOptions,
        events: Sender<EngineEvent>,
    ) -> FakeInstance {
        let mut log = self.log.borrow_mut();
        log.calls.push(Call::Load(id, media.to_path_buf(), options));
        log.live += 1;
        log.senders.insert(id, events.clone());

        let loaded = !log.broken_media.contains(media);
        if !loaded {
            let msg = format!("cannot open {}", media.display());
            events
                .send(EngineEvent::new(id, Lifecycle::LoadError(msg)))
                .unwrap();
        }

        FakeInstance {
            id,
            log: Rc::clone(&self.log),
            events,
            loaded,
            paused: true,
            stopped: false,
        }
    }
}

pub struct FakeInstance {
    id: InstanceId,
    log: Rc<RefCell<EngineLog>>,
    events: Sender<EngineEvent>,
    loaded: bool,
    paused: bool,
    stopped: bool,
}

impl FakeInstance {
    fn emit(&self, kind: Lifecycle) {
        self.events.send(EngineEvent::new(self.id, kind)).unwrap();
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().calls.push(call);
    }
}

impl EngineInstance for FakeInstance {
    fn play(&mut self) {
        self.record(Call::Play(self.id));
        if self.loaded && !self.stopped && self.paused {
            self.paused = false;
            self.emit(Lifecycle::Play);
        }
    }

    fn pause(&mut self) {
        self.record(Call::Pause(self.id));
        if self.loaded && !self.stopped && !self.paused {
            self.paused = true;
            self.emit(Lifecycle::Pause);
        }
    }

    fn stop(&mut self) {
        self.record(Call::Stop(self.id));
        if !self.stopped {
            self.stopped = true;
            self.log.borrow_mut().live -= 1;
            self.emit(Lifecycle::Stop);
        }
    }

    fn seek(&mut self, to: Duration) {
        self.record(Call::Seek(self.id, to));
    }

    fn position(&self) -> Duration {
        self.log.borrow().position
    }

    fn duration(&self) -> Option<Duration> {
        self.log.borrow().reported_duration
    }

    fn set_volume(&mut self, volume: f32) {
        self.record(Call::Volume(self.id, volume));
    }
}

#[derive(Default)]
pub struct NowPlayingLog {
    pub metadata: Vec<NowPlayingMetadata>,
    pub statuses: Vec<NowPlayingStatus>,
    pub registrations: usize,
    pub commands: Option<Sender<TransportCommand>>,
}

#[derive(Clone, Default)]
pub struct RecordingNowPlaying {
    pub log: Rc<RefCell<NowPlayingLog>>,
}

impl RecordingNowPlaying {
    /// Press a media key.
    pub fn press(&self, command: TransportCommand) {
        if let Some(tx) = &self.log.borrow().commands {
            tx.send(command).unwrap();
        }
    }
}

impl NowPlaying for RecordingNowPlaying {
    fn set_metadata(&mut self, metadata: &NowPlayingMetadata) {
        self.log.borrow_mut().metadata.push(metadata.clone());
    }

    fn set_status(&mut self, status: NowPlayingStatus) {
        self.log.borrow_mut().statuses.push(status);
    }

    fn register_handlers(&mut self, commands: Sender<TransportCommand>) {
        let mut log = self.log.borrow_mut();
        log.registrations += 1;
        log.commands = Some(commands);
    }
}

pub fn song(id: &str, secs: u64) -> Song {
    Song::new(
        id,
        format!("Song {id}"),
        "Artist Name",
        format!("/covers/{id}.jpeg"),
        format!("/music/{id}.mp3"),
        Duration::from_secs(secs),
    )
}

/// Songs "a", "b", "c", three minutes each.
pub fn abc_catalog() -> Arc<Catalog> {
    catalog_of(&["a", "b", "c"])
}

pub fn catalog_of(ids: &[&str]) -> Arc<Catalog> {
    let songs = ids.iter().map(|id| song(id, 180)).collect();
    Arc::new(Catalog::new(songs).unwrap())
}

pub struct Harness {
    pub player: PlaybackController<FakeEngine>,
    pub engine: FakeEngine,
    pub now_playing: RecordingNowPlaying,
}

impl Harness {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_settings(catalog, &Settings::default())
    }

    pub fn with_settings(catalog: Arc<Catalog>, settings: &Settings) -> Self {
        let engine = FakeEngine::default();
        let now_playing = RecordingNowPlaying::default();

        let player = PlaybackController::new(catalog, engine.clone(), settings)
            .with_now_playing(Box::new(now_playing.clone()));

        Harness {
            player,
            engine,
            now_playing,
        }
    }

    pub fn current_id(&self) -> Option<String> {
        self.player
            .state()
            .current_song
            .as_ref()
            .map(|s| s.get_id().to_string())
    }

    pub fn play(&mut self, idx: usize) {
        let song = self.player.catalog().get(idx).cloned().unwrap();
        self.player.play_song(song);
        self.player.pump_events();
    }

    pub fn last_instance(&self) -> InstanceId {
        *self.engine.loads().last().unwrap()
    }
}
