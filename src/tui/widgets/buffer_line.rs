use crate::{tui::PlayerView, ui_state::UiState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Stylize,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

const KEY_HINTS: &str = concat!(
    "[space] play/pause  [n/p] skip  [←/→] seek  ",
    "[+/-] vol  [tab] playlist  [q] quit"
);

/// Last engine error, otherwise key hints.
pub struct BufferLine<'a>(pub &'a PlayerView<'a>);

impl StatefulWidget for BufferLine<'_> {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = &state.theme;

        let line = match self.0.error {
            Some(err) => Line::from_iter([
                Span::from(format!(" ⚠ {err} ")).fg(theme.error),
                Span::from("[esc] dismiss").fg(theme.text_faded),
            ]),
            None => Line::from(KEY_HINTS).fg(theme.text_faded),
        };

        line.centered().render(area, buf);
    }
}
