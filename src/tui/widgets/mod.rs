mod buffer_line;
mod header;
mod playlist;
mod progress;
mod transport;
mod volume;

pub use buffer_line::BufferLine;
pub use header::Header;
pub use playlist::PlaylistPanel;
pub use progress::Progress;
pub use transport::Transport;
pub use volume::Volume;

use ratatui::layout::Rect;

const PLAY_ICON: &str = "▶";
const PAUSE_ICON: &str = "⏸";
const PREV_ICON: &str = "⏮";
const NEXT_ICON: &str = "⏭";
const NOTE_ICON: &str = "♫";

const BAR_ACTIVE: &str = "━";
const BAR_INACTIVE: &str = "─";

// LineGauge leaves a column after its (empty) label
fn gauge_track(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(1),
        ..area
    }
}
