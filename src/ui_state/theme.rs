use ratatui::{style::Color, widgets::BorderType};

pub const DARK_WHITE: Color = Color::Rgb(210, 210, 210);
pub const MID_GRAY: Color = Color::Rgb(100, 100, 100);
pub const DARK_GRAY: Color = Color::Rgb(25, 25, 25);
pub const DARK_GRAY_FADED: Color = Color::Rgb(10, 10, 10);
pub const GOOD_RED: Color = Color::Rgb(255, 70, 70);
pub const GOLD: Color = Color::Rgb(220, 220, 100);
pub const GOLD_FADED: Color = Color::Rgb(130, 130, 60);
pub const INDIGO: Color = Color::Rgb(99, 102, 241);

pub struct DisplayTheme {
    pub bg: Color,
    pub bg_panel: Color,
    pub border: Color,

    pub text_focused: Color,
    pub text_secondary: Color,
    pub text_faded: Color,
    pub highlight: Color,
    pub error: Color,

    pub border_type: BorderType,

    pub progress_complete: Color,
    pub progress_incomplete: Color,
}

impl Default for DisplayTheme {
    fn default() -> Self {
        DisplayTheme {
            bg: DARK_GRAY_FADED,
            bg_panel: DARK_GRAY,
            border: MID_GRAY,

            text_focused: DARK_WHITE,
            text_secondary: GOLD,
            text_faded: MID_GRAY,
            highlight: GOLD_FADED,
            error: GOOD_RED,

            border_type: BorderType::Rounded,

            progress_complete: INDIGO,
            progress_incomplete: MID_GRAY,
        }
    }
}
