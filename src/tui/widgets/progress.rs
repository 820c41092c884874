use super::{BAR_ACTIVE, BAR_INACTIVE, gauge_track};
use crate::{
    tui::PlayerView,
    ui_state::{UiState, gauge_ratio, time_labels},
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::{LineGauge, StatefulWidget, Widget},
};

/// Elapsed/total labels above a clickable progress gauge.
pub struct Progress<'a>(pub &'a PlayerView<'a>);

impl StatefulWidget for Progress<'_> {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = &state.theme;
        let playback = self.0.playback;

        let [labels, gauge] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let (elapsed, total) = time_labels(playback);
        Line::from(elapsed)
            .left_aligned()
            .fg(theme.text_faded)
            .render(labels, buf);
        Line::from(total)
            .right_aligned()
            .fg(theme.text_faded)
            .render(labels, buf);

        LineGauge::default()
            .filled_style(theme.progress_complete)
            .unfilled_style(theme.progress_incomplete)
            .filled_symbol(BAR_ACTIVE)
            .unfilled_symbol(BAR_INACTIVE)
            .label("")
            .ratio(gauge_ratio(playback.progress))
            .render(gauge, buf);

        state.display_state.hit_areas.progress = gauge_track(gauge);
    }
}
