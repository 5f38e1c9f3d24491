//! UI theme: the color set, kept in one place instead of scattered through
//! render code.

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub header_fg: Color,
    pub accent_fg: Color,
    pub border_fg: Color,
    pub focus_border: Color,
    pub muted_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub drop_target_bg: Color,
    pub drop_target_fg: Color,
    pub dialog_bg: Color,
    pub dialog_fg: Color,
    pub toast_bg: Color,
    pub toast_fg: Color,
    pub status_fg: Color,
    pub danger_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            header_fg: Color::Cyan,
            accent_fg: Color::Green,
            border_fg: Color::DarkGray,
            focus_border: Color::Cyan,
            muted_fg: Color::Gray,
            selected_bg: Color::Rgb(50, 60, 90),
            selected_fg: Color::White,
            drop_target_bg: Color::Rgb(40, 80, 60),
            drop_target_fg: Color::White,
            dialog_bg: Color::Rgb(30, 32, 40),
            dialog_fg: Color::White,
            toast_bg: Color::Rgb(35, 45, 55),
            toast_fg: Color::White,
            status_fg: Color::Gray,
            danger_fg: Color::Red,
        }
    }
}
