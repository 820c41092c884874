use super::{HitAreas, UiState};
use crate::key_handler::Director;
use ratatui::widgets::ListState;

pub struct DisplayState {
    pub playlist_expanded: bool,
    pub playlist_pos: ListState,
    pub hit_areas: HitAreas,
}

impl DisplayState {
    pub fn new() -> Self {
        DisplayState {
            playlist_expanded: false,
            playlist_pos: ListState::default().with_selected(Some(0)),
            hit_areas: HitAreas::default(),
        }
    }
}

impl UiState {
    pub fn playlist_expanded(&self) -> bool {
        self.display_state.playlist_expanded
    }

    pub fn toggle_playlist(&mut self) {
        self.display_state.playlist_expanded = !self.display_state.playlist_expanded;
    }

    pub fn hit_areas(&self) -> &HitAreas {
        &self.display_state.hit_areas
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.display_state.playlist_pos.selected()
    }

    pub fn select(&mut self, idx: usize) {
        self.display_state.playlist_pos.select(Some(idx));
    }

    /// Index of the playlist entry drawn at `row`, if any.
    pub fn playlist_row_at(&self, row: u16, len: usize) -> Option<usize> {
        let rows = self.display_state.hit_areas.playlist_rows;
        if !self.playlist_expanded() || row < rows.y || row >= rows.bottom() {
            return None;
        }

        let idx = self.display_state.playlist_pos.offset() + (row - rows.y) as usize;
        (idx < len).then_some(idx)
    }

    pub fn scroll(&mut self, director: Director, len: usize) {
        if len == 0 {
            self.display_state.playlist_pos.select(None);
            return;
        }

        let current = self.selected_index().unwrap_or(0);
        let next = match director {
            // Wrap like the transport controls do
            Director::Up(x) => (current + len - (x % len)) % len,
            Director::Down(x) => (current + x) % len,
            Director::Top => 0,
            Director::Bottom => len - 1,
        };

        self.display_state.playlist_pos.select(Some(next));
    }
}
