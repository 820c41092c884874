use super::{EngineEvent, InstanceId};
use crossbeam_channel::Sender;
use std::{path::Path, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadOptions {
    /// Decode incrementally from disk rather than buffering the whole file
    pub streaming: bool,
    pub initial_volume: f32,
}

/// Something able to turn a media reference into a playable instance.
///
/// Loading never fails synchronously. A bad media reference is reported
/// later as a [`Lifecycle::LoadError`](super::Lifecycle::LoadError) on the
/// `events` channel, alongside every other lifecycle notification from the
/// instance.
pub trait AudioEngine {
    type Instance: EngineInstance;

    fn load(
        &mut self,
        id: InstanceId,
        media: &Path,
        options: LoadOptions,
        events: Sender<EngineEvent>,
    ) -> Self::Instance;
}

/// A single live audio resource bound to one song.
///
/// Commands return immediately; their effect is reported as lifecycle
/// events. Once stopped an instance is spent.
pub trait EngineInstance {
    fn play(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);
    fn seek(&mut self, to: Duration);
    fn position(&self) -> Duration;
    /// `None` until the engine knows the length of the media
    fn duration(&self) -> Option<Duration>;
    fn set_volume(&mut self, volume: f32);
}
