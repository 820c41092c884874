use crate::{
    app_core::Serenata,
    key_handler::*,
    player::AudioEngine,
    ui_state::{Mode, UiState},
};
use anyhow::Result;
use crossbeam_channel::{Receiver, unbounded};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::thread;

use KeyCode::*;

pub fn handle_key_event(key_event: KeyEvent, state: &UiState) -> Option<Action> {
    if let Some(action) = global_commands(&key_event) {
        return Some(action);
    }

    match state.playlist_expanded() {
        true => handle_playlist(&key_event),
        false => None,
    }
}

fn global_commands(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (C, Char('c')) | (X, Char('q')) => Some(Action::QUIT),
        (X, Esc) => Some(Action::ClearError),

        // PLAYBACK COMMANDS
        (X, Char(' ')) => Some(Action::TogglePause),
        (X, Char('n')) => Some(Action::PlayNext),
        (X, Char('p')) => Some(Action::PlayPrev),
        (X, Right) => Some(Action::SeekForward),
        (X, Left) => Some(Action::SeekBack),

        (X, Char('+')) | (S, Char('+')) | (X, Char('=')) => Some(Action::VolumeUp),
        (X, Char('-')) => Some(Action::VolumeDown),

        (X, Tab) => Some(Action::TogglePlaylist),
        _ => None,
    }
}

fn handle_playlist(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Enter) => Some(Action::PlaySelected),

        // SCROLLING
        (X, Char('j')) | (X, Down) => Some(Action::Scroll(Director::Down(1))),
        (X, Char('k')) | (X, Up) => Some(Action::Scroll(Director::Up(1))),
        (X, Char('d')) => Some(Action::Scroll(Director::Down(SCROLL_MID))),
        (X, Char('u')) => Some(Action::Scroll(Director::Up(SCROLL_MID))),
        (X, Char('g')) => Some(Action::Scroll(Director::Top)),
        (S, Char('G')) => Some(Action::Scroll(Director::Bottom)),
        _ => None,
    }
}

/// Forward terminal events from a dedicated thread so the app loop can
/// `select!` on them alongside engine events.
pub fn spawn_input_reader() -> Result<Receiver<Event>> {
    let (tx, rx) = unbounded();

    thread::Builder::new()
        .name("input".into())
        .spawn(move || {
            loop {
                match event::read() {
                    Ok(ev) => {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Terminal input failed");
                        break;
                    }
                }
            }
        })?;

    Ok(rx)
}

impl<E: AudioEngine> Serenata<E> {
    #[rustfmt::skip]
    pub fn handle_action(&mut self, action: Action) {
        match action {
            // Player
            Action::TogglePause     => self.toggle_playback(),
            Action::PlayNext        => self.player.next_song(),
            Action::PlayPrev        => self.player.prev_song(),
            Action::SeekForward     => self.seek_by(self.ui.seek_step),
            Action::SeekBack        => self.seek_by(-self.ui.seek_step),
            Action::SeekTo(f)       => self.player.seek(f.clamp(0.0, 1.0)),
            Action::VolumeUp        => self.volume_by(self.ui.volume_step),
            Action::VolumeDown      => self.volume_by(-self.ui.volume_step),
            Action::SetVolume(v)    => self.player.set_volume(v.clamp(0.0, 1.0)),

            // Playlist
            Action::PlaySelected    => {
                if let Some(idx) = self.ui.selected_index() {
                    self.play_index(idx)
                }
            }
            Action::PlayIndex(idx)  => self.play_index(idx),
            Action::TogglePlaylist  => self.ui.toggle_playlist(),
            Action::Scroll(s)       => self.ui.scroll(s, self.player.catalog().len()),

            Action::ClearError      => self.player.clear_error(),
            Action::QUIT            => self.ui.set_mode(Mode::QUIT),
        }
    }

    fn toggle_playback(&mut self) {
        match self.player.state().is_playing {
            true => self.player.pause_song(),
            false => self.player.resume_song(),
        }
    }

    fn seek_by(&mut self, delta: f64) {
        if self.player.state().current_song.is_some() {
            let target = (self.player.state().progress + delta).clamp(0.0, 1.0);
            self.player.seek(target);
        }
    }

    fn volume_by(&mut self, delta: f32) {
        let target = (self.player.state().volume + delta).clamp(0.0, 1.0);
        self.player.set_volume(target);
    }

    fn play_index(&mut self, idx: usize) {
        if let Some(song) = self.player.catalog().get(idx).cloned() {
            self.ui.select(idx);
            self.player.play_song(song);
        }
    }
}
