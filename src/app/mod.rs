//! Application shell: the studio view, its drag/drop rules and rendering.

pub mod studio;
pub mod theme;

pub use studio::Studio;
pub use theme::UiTheme;
