//! Blocking event loop: draw when dirty, poll input, tick while idle.

use std::io;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::terminal_guard::TerminationSignal;
use super::view::{EventResult, View};
use crate::core::event::InputEvent;

const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Run `view` until it asks to quit or a termination signal arrives.
pub fn run<V: View>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    view: &mut V,
    signals: Option<&Receiver<TerminationSignal>>,
) -> io::Result<Option<TerminationSignal>> {
    let mut dirty = true;

    loop {
        if let Some(rx) = signals {
            if let Ok(signal) = rx.try_recv() {
                return Ok(Some(signal));
            }
        }

        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                view.render(frame, area);
                if let Some((x, y)) = view.cursor_position() {
                    frame.set_cursor_position((x, y));
                }
            })?;
            dirty = false;
        }

        if event::poll(TICK_INTERVAL)? {
            let input: InputEvent = event::read()?.into();
            match view.handle_input(&input) {
                EventResult::Quit => return Ok(None),
                EventResult::Consumed => dirty = true,
                EventResult::Ignored => {}
            }
        } else if view.tick(Instant::now()) {
            dirty = true;
        }
    }
}
