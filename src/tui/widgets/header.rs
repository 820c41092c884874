use super::NOTE_ICON;
use crate::{truncate_at_last_space, tui::PlayerView, ui_state::UiState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget},
};
use std::path::Path;

const ART_WIDTH: u16 = 11;

/// Album art box plus title and artist of the current song.
pub struct Header<'a>(pub &'a PlayerView<'a>);

impl StatefulWidget for Header<'_> {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = &state.theme;
        let song = self.0.playback.current_song.as_deref();

        let block = Block::bordered()
            .border_type(theme.border_type)
            .border_style(theme.border)
            .bg(theme.bg_panel)
            .title_top(Line::from(" Now Playing ").left_aligned().fg(theme.text_faded));

        let inner = block.inner(area);
        block.render(area, buf);

        let [art, _, text] = Layout::horizontal([
            Constraint::Length(ART_WIDTH),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let art_block = Block::bordered()
            .border_type(BorderType::Plain)
            .border_style(theme.border);
        let art_inner = art_block.inner(art);
        art_block.render(art, buf);

        let cover = song
            .map(|s| cover_name(s.get_cover()))
            .unwrap_or_default();

        Paragraph::new(vec![
            Line::from(NOTE_ICON).centered().fg(theme.text_secondary),
            Line::from(truncate_at_last_space(&cover, art_inner.width.saturating_sub(1) as usize))
                .centered()
                .fg(theme.text_faded),
        ])
        .render(art_inner, buf);

        let (title, artist) = match song {
            Some(s) => (s.get_title(), s.get_artist()),
            None => ("Select a song", "Artist"),
        };

        let width = text.width.saturating_sub(1) as usize;
        Paragraph::new(vec![
            Line::default(),
            Line::from(truncate_at_last_space(title, width))
                .bold()
                .fg(theme.text_focused),
            Line::from(truncate_at_last_space(artist, width)).fg(theme.text_secondary),
        ])
        .render(text, buf);
    }
}

fn cover_name(cover: &str) -> String {
    Path::new(cover)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
