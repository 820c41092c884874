use crate::ui_state::UiState;
use ratatui::layout::{Constraint, Layout, Rect};

const MAX_WIDTH: u16 = 64;

pub struct AppLayout {
    pub header: Rect,
    pub progress: Rect,
    pub transport: Rect,
    pub volume: Rect,
    pub playlist: Rect,
    pub buffer_line: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, state: &UiState) -> Self {
        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(area.width.min(MAX_WIDTH)),
            Constraint::Fill(1),
        ])
        .areas(area);

        let (playlist_height, spacer) = match state.playlist_expanded() {
            true => (Constraint::Fill(1), Constraint::Length(0)),
            false => (Constraint::Length(1), Constraint::Fill(1)),
        };

        let [header, _, progress, transport, volume, _, playlist, _, buffer_line] =
            Layout::vertical([
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                playlist_height,
                spacer,
                Constraint::Length(1),
            ])
            .areas(column);

        AppLayout {
            header,
            progress,
            transport,
            volume,
            playlist,
            buffer_line,
        }
    }
}
