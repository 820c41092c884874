use ratatui::layout::{Position, Rect};

/// Screen regions from the last frame, used to route mouse input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HitAreas {
    pub progress: Rect,
    pub volume: Rect,
    pub prev: Rect,
    pub toggle: Rect,
    pub next: Rect,
    pub playlist_header: Rect,
    /// Rows of the playlist, inside its border
    pub playlist_rows: Rect,
}

impl HitAreas {
    /// Horizontal position of `column` within `area`, in [0, 1].
    pub fn fraction(area: Rect, column: u16) -> f64 {
        if area.width <= 1 {
            return 0.0;
        }
        let offset = column.saturating_sub(area.x).min(area.width - 1);
        offset as f64 / (area.width - 1) as f64
    }

    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        area.contains(Position::new(column, row))
    }
}
