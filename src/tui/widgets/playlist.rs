use crate::{DurationStyle, get_readable_duration, tui::PlayerView, ui_state::UiState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, List, ListItem, Padding, StatefulWidget, Widget},
};

/// Collapsible list of every song in the catalog.
pub struct PlaylistPanel<'a>(pub &'a PlayerView<'a>);

impl StatefulWidget for PlaylistPanel<'_> {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let catalog = self.0.catalog;
        let theme = &state.theme;

        let [header, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

        let arrow = match state.playlist_expanded() {
            true => "▾",
            false => "▸",
        };

        Line::from_iter([
            Span::from(format!("{arrow} Playlist ")).fg(theme.text_focused),
            format!(
                "[{} · {}]",
                catalog.len(),
                get_readable_duration(catalog.total_duration(), DurationStyle::Clean)
            )
            .fg(theme.text_faded),
        ])
        .render(header, buf);

        state.display_state.hit_areas.playlist_header = header;

        if !state.playlist_expanded() {
            state.display_state.hit_areas.playlist_rows = Rect::default();
            return;
        }

        let playback = self.0.playback;

        let list_items = catalog.iter().map(|song| {
            let is_current = playback.is_current(song);

            let (marker, title_fg) = match is_current {
                true => ("♪ ", theme.text_secondary),
                false => ("  ", theme.text_focused),
            };

            ListItem::new(Line::from_iter([
                Span::from(marker).fg(theme.text_secondary),
                Span::from(song.get_title().to_string()).fg(title_fg),
                Span::from(" · ").fg(theme.text_faded),
                Span::from(song.get_artist().to_string()).fg(theme.text_faded),
                Span::from(format!("  {}", song.get_duration_str())).fg(theme.text_faded),
            ]))
        });

        let block = Block::bordered()
            .border_type(theme.border_type)
            .border_style(theme.border)
            .bg(theme.bg_panel)
            .title_bottom(
                Line::from(" [enter] play  [j/k] move ")
                    .centered()
                    .fg(theme.text_faded),
            )
            .padding(Padding::horizontal(1));

        let rows = block.inner(body);

        let list = List::new(list_items)
            .block(block)
            .highlight_style(Style::new().fg(Color::Black).bg(theme.highlight).italic())
            .scroll_padding(2);

        StatefulWidget::render(list, body, buf, &mut state.display_state.playlist_pos);

        state.display_state.hit_areas.playlist_rows = rows;
    }
}
