use super::{AppLayout, BufferLine, Header, PlayerView, PlaylistPanel, Progress, Transport, Volume};
use crate::{
    player::{AudioEngine, PlaybackController},
    ui_state::{HitAreas, UiState},
};
use ratatui::{
    Frame,
    style::Stylize,
    widgets::{Block, StatefulWidget, Widget},
};

pub fn render<E: AudioEngine>(f: &mut Frame, state: &mut UiState, player: &PlaybackController<E>) {
    let view = PlayerView {
        playback: player.state(),
        catalog: player.catalog(),
        error: player.last_error(),
    };
    render_view(f, state, &view);
}

pub fn render_view(f: &mut Frame, state: &mut UiState, view: &PlayerView) {
    let layout = AppLayout::new(f.area(), state);

    // Regions are re-recorded by the widgets below
    state.display_state.hit_areas = HitAreas::default();

    Block::new()
        .bg(state.theme.bg)
        .render(f.area(), f.buffer_mut());

    Header(view).render(layout.header, f.buffer_mut(), state);
    Progress(view).render(layout.progress, f.buffer_mut(), state);
    Transport(view).render(layout.transport, f.buffer_mut(), state);
    Volume(view).render(layout.volume, f.buffer_mut(), state);
    PlaylistPanel(view).render(layout.playlist, f.buffer_mut(), state);
    BufferLine(view).render(layout.buffer_line, f.buffer_mut(), state);
}
