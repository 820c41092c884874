mod layout;
mod renderer;
mod widgets;

use crate::{catalog::Catalog, player::PlaybackState};

pub use layout::AppLayout;
pub use renderer::{render, render_view};
pub use widgets::{BufferLine, Header, PlaylistPanel, Progress, Transport, Volume};

/// Read-only borrow of everything the controller exposes to the view.
#[derive(Clone, Copy)]
pub struct PlayerView<'a> {
    pub playback: &'a PlaybackState,
    pub catalog: &'a Catalog,
    pub error: Option<&'a str>,
}
