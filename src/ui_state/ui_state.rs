use super::{DisplayState, DisplayTheme, Mode};
use crate::config::Settings;

/// Presentation-only state. Playback state lives in the controller and is
/// only ever borrowed for rendering.
pub struct UiState {
    mode: Mode,
    pub(crate) display_state: DisplayState,
    pub(crate) theme: DisplayTheme,

    pub(crate) seek_step: f64,
    pub(crate) volume_step: f32,
}

impl UiState {
    pub fn new(settings: &Settings) -> Self {
        UiState {
            mode: Mode::Running,
            display_state: DisplayState::new(),
            theme: DisplayTheme::default(),
            seek_step: settings.seek_step,
            volume_step: settings.volume_step,
        }
    }

    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }
}
