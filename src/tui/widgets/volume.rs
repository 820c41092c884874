use super::{BAR_ACTIVE, BAR_INACTIVE, gauge_track};
use crate::{
    tui::PlayerView,
    ui_state::{UiState, gauge_ratio},
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::{LineGauge, StatefulWidget, Widget},
};

pub struct Volume<'a>(pub &'a PlayerView<'a>);

impl StatefulWidget for Volume<'_> {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = &state.theme;
        let ratio = gauge_ratio(self.0.playback.volume as f64);

        let [label, gauge, percent] = Layout::horizontal([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(5),
        ])
        .areas(area);

        Line::from("vol").fg(theme.text_faded).render(label, buf);

        LineGauge::default()
            .filled_style(theme.text_secondary)
            .unfilled_style(theme.progress_incomplete)
            .filled_symbol(BAR_ACTIVE)
            .unfilled_symbol(BAR_INACTIVE)
            .label("")
            .ratio(ratio)
            .render(gauge, buf);

        Line::from(format!("{:.0}%", ratio * 100.0))
            .right_aligned()
            .fg(theme.text_faded)
            .render(percent, buf);

        state.display_state.hit_areas.volume = gauge_track(gauge);
    }
}
