use crate::{
    key_handler::{Action, Director},
    ui_state::{HitAreas, UiState},
};
use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Route a mouse gesture to whatever was drawn under it last frame.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    state: &UiState,
    playlist_len: usize,
) -> Option<Action> {
    let areas = state.hit_areas();
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            if HitAreas::contains(areas.progress, col, row) {
                return Some(Action::SeekTo(HitAreas::fraction(areas.progress, col)));
            }
            if HitAreas::contains(areas.volume, col, row) {
                return Some(Action::SetVolume(HitAreas::fraction(areas.volume, col) as f32));
            }
            if matches!(mouse.kind, MouseEventKind::Drag(_)) {
                return None;
            }
            click(areas, state, col, row, playlist_len)
        }
        MouseEventKind::ScrollDown if HitAreas::contains(areas.playlist_rows, col, row) => {
            Some(Action::Scroll(Director::Down(1)))
        }
        MouseEventKind::ScrollUp if HitAreas::contains(areas.playlist_rows, col, row) => {
            Some(Action::Scroll(Director::Up(1)))
        }
        _ => None,
    }
}

fn click(areas: &HitAreas, state: &UiState, col: u16, row: u16, len: usize) -> Option<Action> {
    if HitAreas::contains(areas.prev, col, row) {
        return Some(Action::PlayPrev);
    }
    if HitAreas::contains(areas.toggle, col, row) {
        return Some(Action::TogglePause);
    }
    if HitAreas::contains(areas.next, col, row) {
        return Some(Action::PlayNext);
    }
    if HitAreas::contains(areas.playlist_header, col, row) {
        return Some(Action::TogglePlaylist);
    }
    if HitAreas::contains(areas.playlist_rows, col, row) {
        return state.playlist_row_at(row, len).map(Action::PlayIndex);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use ratatui::{crossterm::event::KeyModifiers, layout::Rect};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn laid_out() -> UiState {
        let mut ui = UiState::new(&Settings::default());
        ui.display_state.hit_areas = HitAreas {
            progress: Rect::new(10, 5, 21, 1),
            volume: Rect::new(10, 9, 11, 1),
            prev: Rect::new(10, 7, 5, 1),
            toggle: Rect::new(17, 7, 5, 1),
            next: Rect::new(24, 7, 5, 1),
            playlist_header: Rect::new(10, 11, 40, 1),
            playlist_rows: Rect::new(11, 13, 38, 3),
        };
        ui
    }

    const LEFT: MouseEventKind = MouseEventKind::Down(MouseButton::Left);

    #[test]
    fn clicking_the_progress_bar_seeks() {
        let ui = laid_out();
        assert_eq!(
            handle_mouse_event(mouse(LEFT, 20, 5), &ui, 3),
            Some(Action::SeekTo(0.5))
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 5), &ui, 3),
            Some(Action::SeekTo(1.0))
        );
    }

    #[test]
    fn clicking_the_volume_bar_sets_volume() {
        let ui = laid_out();
        assert_eq!(
            handle_mouse_event(mouse(LEFT, 10, 9), &ui, 3),
            Some(Action::SetVolume(0.0))
        );
        assert_eq!(
            handle_mouse_event(mouse(LEFT, 15, 9), &ui, 3),
            Some(Action::SetVolume(0.5))
        );
    }

    #[test]
    fn transport_buttons() {
        let ui = laid_out();
        assert_eq!(handle_mouse_event(mouse(LEFT, 12, 7), &ui, 3), Some(Action::PlayPrev));
        assert_eq!(handle_mouse_event(mouse(LEFT, 19, 7), &ui, 3), Some(Action::TogglePause));
        assert_eq!(handle_mouse_event(mouse(LEFT, 28, 7), &ui, 3), Some(Action::PlayNext));
        assert_eq!(handle_mouse_event(mouse(LEFT, 16, 7), &ui, 3), None);
    }

    #[test]
    fn playlist_rows_only_respond_when_expanded() {
        let mut ui = laid_out();
        assert_eq!(handle_mouse_event(mouse(LEFT, 20, 14), &ui, 3), None);
        assert_eq!(
            handle_mouse_event(mouse(LEFT, 20, 11), &ui, 3),
            Some(Action::TogglePlaylist)
        );

        ui.toggle_playlist();
        assert_eq!(
            handle_mouse_event(mouse(LEFT, 20, 14), &ui, 3),
            Some(Action::PlayIndex(1))
        );
        // Row past the end of a two-song playlist
        assert_eq!(handle_mouse_event(mouse(LEFT, 20, 15), &ui, 2), None);
    }

    #[test]
    fn drags_never_press_buttons() {
        let ui = laid_out();
        let drag = MouseEventKind::Drag(MouseButton::Left);
        assert_eq!(handle_mouse_event(mouse(drag, 19, 7), &ui, 3), None);
    }
}
