use super::{NEXT_ICON, PAUSE_ICON, PLAY_ICON, PREV_ICON};
use crate::{tui::PlayerView, ui_state::UiState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Stylize},
    text::Line,
    widgets::{Block, Paragraph, StatefulWidget, Widget},
};

const BUTTON_WIDTH: u16 = 7;

/// Previous, play/pause and next buttons.
pub struct Transport<'a>(pub &'a PlayerView<'a>);

impl StatefulWidget for Transport<'_> {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [_, prev, _, toggle, _, next, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(2),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(2),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Fill(1),
        ])
        .areas(area);

        let toggle_icon = match self.0.playback.is_playing {
            true => PAUSE_ICON,
            false => PLAY_ICON,
        };

        button(PREV_ICON, false, prev, buf, state);
        button(toggle_icon, true, toggle, buf, state);
        button(NEXT_ICON, false, next, buf, state);

        let areas = &mut state.display_state.hit_areas;
        areas.prev = prev;
        areas.toggle = toggle;
        areas.next = next;
    }
}

fn button(icon: &str, primary: bool, area: Rect, buf: &mut Buffer, state: &UiState) {
    let theme = &state.theme;

    let (fg, border) = match primary {
        true => (theme.progress_complete, theme.progress_complete),
        false => (theme.text_focused, theme.border),
    };

    Paragraph::new(Line::from(icon).centered().fg(fg))
        .block(
            Block::bordered()
                .border_type(theme.border_type)
                .border_style(border),
        )
        .bg(Color::Reset)
        .render(area, buf);
}
