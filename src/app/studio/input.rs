use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{dnd_rules, Studio};
use crate::core::event::{InputEvent, Key};
use crate::core::Command;
use crate::kernel::Action as KernelAction;
use crate::tui::view::EventResult;
use crate::ui::core::input::UiEvent;
use crate::ui::core::tree::NodeKind;

const WHEEL_SCROLL_STEP: isize = 1;

pub(super) fn handle_input(studio: &mut Studio, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key_event) => studio.handle_key_event(key_event),
        InputEvent::Mouse(mouse_event) => studio.handle_mouse_event(event, mouse_event),
        InputEvent::Resize(_, _) => EventResult::Consumed,
        _ => EventResult::Ignored,
    }
}

impl Studio {
    fn handle_key_event(&mut self, key_event: &KeyEvent) -> EventResult {
        if self.store.state().ui.input_dialog.visible {
            match (key_event.code, key_event.modifiers) {
                (KeyCode::Enter, _) => {
                    let _ = self.dispatch_kernel(KernelAction::InputDialogAccept);
                }
                (KeyCode::Esc, _) => {
                    let _ = self.dispatch_kernel(KernelAction::InputDialogCancel);
                }
                (KeyCode::Backspace, _) => {
                    let _ = self.dispatch_kernel(KernelAction::InputDialogBackspace);
                }
                (KeyCode::Left, _) => {
                    let _ = self.dispatch_kernel(KernelAction::InputDialogCursorLeft);
                }
                (KeyCode::Right, _) => {
                    let _ = self.dispatch_kernel(KernelAction::InputDialogCursorRight);
                }
                (KeyCode::Char(ch), mods)
                    if mods.is_empty() || mods == KeyModifiers::SHIFT =>
                {
                    let _ = self.dispatch_kernel(KernelAction::InputDialogAppend(ch));
                }
                _ => {}
            }
            return EventResult::Consumed;
        }

        if self.store.state().ui.confirm_dialog.visible {
            match key_event.code {
                KeyCode::Enter => {
                    let _ = self.dispatch_kernel(KernelAction::ConfirmDialogAccept);
                }
                KeyCode::Esc => {
                    let _ = self.dispatch_kernel(KernelAction::ConfirmDialogCancel);
                }
                _ => {}
            }
            return EventResult::Consumed;
        }

        // Esc during a drag cancels the gesture outright; the board is never
        // touched and no commit happens.
        if key_event.code == KeyCode::Esc && self.ui_runtime.is_dragging() {
            self.ui_runtime.reset_pointer_state();
            self.refresh_drag_preview();
            return EventResult::Consumed;
        }

        let key: Key = (*key_event).into();
        if let Some(cmd) = self.keymap.resolve(&key).cloned() {
            let _ = self.dispatch_kernel(KernelAction::RunCommand(cmd));
            if self.store.state().ui.should_quit {
                return EventResult::Quit;
            }
            return EventResult::Consumed;
        }

        EventResult::Ignored
    }

    fn handle_mouse_event(&mut self, event: &InputEvent, me: &MouseEvent) -> EventResult {
        // Dialogs are modal: the pointer cannot reach the board below them.
        if self.store.state().ui.input_dialog.visible
            || self.store.state().ui.confirm_dialog.visible
        {
            return EventResult::Consumed;
        }

        match me.kind {
            MouseEventKind::ScrollUp => {
                let changed = self.dispatch_kernel(KernelAction::Scroll {
                    delta: -WHEEL_SCROLL_STEP,
                });
                return if changed {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                };
            }
            MouseEventKind::ScrollDown => {
                let changed = self.dispatch_kernel(KernelAction::Scroll {
                    delta: WHEEL_SCROLL_STEP,
                });
                return if changed {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                };
            }
            _ => {}
        }

        let out = self
            .ui_runtime
            .on_input(event, &self.ui_tree, &dnd_rules::STUDIO_DND_RULES);

        let mut state_changed = false;
        for ui_event in out.events.iter().copied() {
            match ui_event {
                UiEvent::Click {
                    id,
                    button: MouseButton::Left,
                    ..
                } => {
                    if let Some(node) = self.ui_tree.node(id).copied() {
                        state_changed |= self.handle_click(node.kind);
                    }
                }
                UiEvent::Drop {
                    payload, target, ..
                } => {
                    let gesture = self.ui_tree.node(target).copied().and_then(|node| {
                        dnd_rules::gesture_for(&payload, node.kind, &self.store.state().board)
                    });
                    if let Some(gesture) = gesture {
                        state_changed |=
                            self.dispatch_kernel(KernelAction::CommitGesture(gesture));
                    }
                }
                _ => {}
            }
        }

        // The preview tracks the live payload/hover pair; after DragEnd it
        // collapses back to empty.
        self.refresh_drag_preview();

        if state_changed || out.needs_redraw {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    pub(super) fn handle_click(&mut self, kind: NodeKind) -> bool {
        match kind {
            NodeKind::AddScreenButton => self.dispatch_kernel(KernelAction::AddScreen),
            NodeKind::AddSubScreenButton { screen_id } => {
                self.dispatch_kernel(KernelAction::AddSubScreen { screen: screen_id })
            }
            NodeKind::DeleteScreenButton { screen_id } => {
                if self.confirm_delete {
                    self.dispatch_kernel(KernelAction::RequestDeleteScreen { screen: screen_id })
                } else {
                    self.dispatch_kernel(KernelAction::DeleteScreen { screen: screen_id })
                }
            }
            NodeKind::DeleteSubScreenButton { screen_id, sub_id } => {
                if self.confirm_delete {
                    self.dispatch_kernel(KernelAction::RequestDeleteSubScreen {
                        screen: screen_id,
                        sub: sub_id,
                    })
                } else {
                    self.dispatch_kernel(KernelAction::DeleteSubScreen {
                        screen: screen_id,
                        sub: sub_id,
                    })
                }
            }
            NodeKind::ScreenCard { screen_id, .. } => {
                self.dispatch_kernel(KernelAction::SelectScreen { screen: screen_id })
            }
            NodeKind::SubScreenRow {
                screen_id, sub_id, ..
            } => self.dispatch_kernel(KernelAction::SelectSubScreen {
                screen: screen_id,
                sub: sub_id,
            }),
            // Clicking container background clears the selection.
            NodeKind::ScreenList | NodeKind::SubScreenList { .. } => {
                self.dispatch_kernel(KernelAction::RunCommand(Command::Escape))
            }
        }
    }
}
