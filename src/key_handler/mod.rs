mod action;
mod mouse;

pub use action::{handle_key_event, spawn_input_reader};
pub use mouse::handle_mouse_event;

use ratatui::crossterm::event::KeyModifiers;

const X: KeyModifiers = KeyModifiers::NONE;
const S: KeyModifiers = KeyModifiers::SHIFT;
const C: KeyModifiers = KeyModifiers::CONTROL;

const SCROLL_MID: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    // Player Controls
    TogglePause,
    PlayNext,
    PlayPrev,
    SeekForward,
    SeekBack,
    /// Absolute position as a fraction of the song
    SeekTo(f64),
    VolumeUp,
    VolumeDown,
    SetVolume(f32),

    // Playlist
    PlaySelected,
    PlayIndex(usize),
    TogglePlaylist,
    Scroll(Director),

    // Errors, Convenience & Other
    ClearError,
    QUIT,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Director {
    Up(usize),
    Down(usize),
    Top,
    Bottom,
}
