use crate::core::event::InputEvent;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::time::Instant;

pub trait View {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult;

    fn render(&mut self, frame: &mut Frame, area: Rect);

    fn cursor_position(&self) -> Option<(u16, u16)> {
        None
    }

    /// Idle timer callback; return true to request a redraw.
    fn tick(&mut self, _now: Instant) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}
