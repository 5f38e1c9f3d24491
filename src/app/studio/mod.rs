//! The studio shell: owns the kernel store plus everything the kernel must
//! not know about (the hit-test tree, the pointer runtime, the in-flight
//! drag preview, toasts and the theme).

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::Frame;

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::{Action as KernelAction, AppState, DragPreview, Effect, Store};
use crate::models::Board;
use crate::services::Settings;
use crate::tui::view::{EventResult, View};
use crate::ui::core::runtime::UiRuntime;
use crate::ui::core::tree::UiTree;

mod dnd_rules;
mod input;
mod keymap;
mod render;

use keymap::Keymap;

const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub detail: String,
    pub expires_at: Instant,
}

pub struct Studio {
    store: Store,
    ui_tree: UiTree,
    ui_runtime: UiRuntime,
    theme: UiTheme,
    keymap: Keymap,
    confirm_delete: bool,
    toast_ttl: Duration,
    preview: DragPreview,
    toasts: VecDeque<Toast>,
    last_render_area: Option<Rect>,
}

impl Studio {
    pub fn new(board: Board, settings: &Settings) -> Self {
        let mut keymap = Keymap::with_defaults();
        keymap.apply_overrides(&settings.keybindings);

        Self {
            store: Store::new(AppState::new(board)),
            ui_tree: UiTree::new(),
            ui_runtime: UiRuntime::new(),
            theme: UiTheme::default(),
            keymap,
            confirm_delete: settings.confirm_delete,
            toast_ttl: Duration::from_millis(settings.toast_ttl_ms),
            preview: DragPreview::default(),
            toasts: VecDeque::new(),
            last_render_area: None,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn toasts(&self) -> &VecDeque<Toast> {
        &self.toasts
    }

    /// Dispatch into the kernel and route the resulting effects. Returns
    /// whether anything visible changed (state or a new toast).
    pub(super) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        let had_effects = !result.effects.is_empty();
        for effect in result.effects {
            self.apply_effect(effect);
        }
        result.state_changed || had_effects
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Notify { title, detail } => {
                tracing::info!(%title, %detail, "notice");
                self.toasts.push_back(Toast {
                    title,
                    detail,
                    expires_at: Instant::now() + self.toast_ttl,
                });
                while self.toasts.len() > MAX_TOASTS {
                    self.toasts.pop_front();
                }
            }
        }
    }

    /// Recompute the transient drag highlight from the runtime's current
    /// payload and hover target; empty whenever no drag is in flight.
    pub(super) fn refresh_drag_preview(&mut self) {
        self.preview = match self.ui_runtime.drag_payload() {
            Some(payload) => {
                let over_kind = self
                    .ui_runtime
                    .drag_over()
                    .and_then(|id| self.ui_tree.node(id))
                    .map(|n| n.kind);
                dnd_rules::preview_for(payload, over_kind)
            }
            None => DragPreview::default(),
        };
    }

    pub fn drag_preview(&self) -> DragPreview {
        self.preview
    }
}

impl View for Studio {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        render::cursor_position(self)
    }

    fn tick(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at > now);
        before != self.toasts.len()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/studio.rs"]
mod tests;
