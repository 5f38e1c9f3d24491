use super::geom::Pos;
use super::id::Id;
use super::input::{DragPayload, UiEvent};
use super::tree::{Node, Sense, UiTree};
use crate::core::event::InputEvent;
use crossterm::event::{MouseButton, MouseEventKind};

/// Decides what a node yields when dragged and where it may be dropped.
/// The shell implements this; the runtime stays domain-agnostic.
pub trait DragDropRules {
    fn payload_for_source(&self, source: &Node) -> Option<DragPayload>;
    fn can_drop(&self, payload: &DragPayload, target: &Node) -> bool;
}

#[derive(Debug, Clone)]
pub struct UiRuntimeOutput {
    pub events: Vec<UiEvent>,
    pub needs_redraw: bool,
}

impl UiRuntimeOutput {
    pub fn empty() -> Self {
        Self {
            events: Vec::new(),
            needs_redraw: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PressedState {
    button: MouseButton,
    start: Pos,
    click: Option<Id>,
    drag_source: Option<Node>,
}

#[derive(Debug, Clone)]
struct DragSession {
    source: Id,
    payload: DragPayload,
    over: Option<Id>,
}

/// Pointer state machine: press, click, drag session, hover.
///
/// Terminal cells are coarse, so any movement past one cell while pressed on
/// a drag source starts a drag. Releasing over a `can_drop`-approved target
/// emits `Drop` then `DragEnd`; releasing anywhere else emits only `DragEnd`
/// (a cancelled gesture; nothing is committed).
#[derive(Debug, Default)]
pub struct UiRuntime {
    hovered: Option<Id>,
    pressed: Option<PressedState>,
    dragging: bool,
    drag: Option<DragSession>,
    last_pos: Option<Pos>,
}

const DRAG_THRESHOLD: u32 = 1;

impl UiRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<Id> {
        self.hovered
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn drag_payload(&self) -> Option<&DragPayload> {
        self.drag.as_ref().map(|d| &d.payload)
    }

    pub fn drag_over(&self) -> Option<Id> {
        self.drag.as_ref()?.over
    }

    pub fn last_pos(&self) -> Option<Pos> {
        self.last_pos
    }

    pub fn reset_pointer_state(&mut self) {
        self.pressed = None;
        self.dragging = false;
        self.drag = None;
    }

    pub fn on_input(
        &mut self,
        input: &InputEvent,
        tree: &UiTree,
        rules: &dyn DragDropRules,
    ) -> UiRuntimeOutput {
        let mut out = UiRuntimeOutput::empty();

        let InputEvent::Mouse(me) = input else {
            return out;
        };

        let pos = Pos::new(me.column, me.row);
        self.last_pos = Some(pos);

        let next_hover = tree.hit_test_with_sense(pos, Sense::HOVER).map(|n| n.id);
        if next_hover != self.hovered {
            out.events.push(UiEvent::HoverChanged {
                from: self.hovered,
                to: next_hover,
                pos,
            });
            self.hovered = next_hover;
            out.needs_redraw = true;
        }

        match me.kind {
            MouseEventKind::Down(button) => {
                let click = tree.hit_test_with_sense(pos, Sense::CLICK).map(|n| n.id);
                let drag_source = tree.hit_test_with_sense(pos, Sense::DRAG_SOURCE).copied();
                self.pressed = Some(PressedState {
                    button,
                    start: pos,
                    click,
                    drag_source,
                });
                self.dragging = false;
                self.drag = None;
            }
            MouseEventKind::Up(button) => {
                let pressed = self.pressed.take();
                let drag = self.drag.take();

                if let Some(drag) = drag {
                    if pressed.is_some_and(|p| p.button == button) {
                        // Drop (if any) goes out before DragEnd.
                        if let Some(target) = drag.over {
                            out.events.push(UiEvent::Drop {
                                payload: drag.payload,
                                target,
                                pos,
                            });
                        }
                        out.events.push(UiEvent::DragEnd {
                            id: drag.source,
                            pos,
                        });
                        out.needs_redraw = true;
                    }
                } else if let Some(pressed) = pressed {
                    if pressed.button == button {
                        if let Some(id) = pressed.click {
                            out.events.push(UiEvent::Click { id, button, pos });
                        }
                    }
                }

                self.dragging = false;
            }
            MouseEventKind::Drag(_button) => {
                let Some(pressed) = self.pressed else {
                    return out;
                };

                let dx = (pos.x as i32 - pressed.start.x as i32).unsigned_abs();
                let dy = (pos.y as i32 - pressed.start.y as i32).unsigned_abs();

                if !self.dragging && dx + dy >= DRAG_THRESHOLD {
                    let Some(source) = pressed.drag_source else {
                        return out;
                    };
                    let Some(payload) = rules.payload_for_source(&source) else {
                        return out;
                    };

                    self.dragging = true;
                    self.drag = Some(DragSession {
                        source: source.id,
                        payload,
                        over: None,
                    });

                    out.events.push(UiEvent::DragStart {
                        id: source.id,
                        pos: pressed.start,
                    });
                    out.needs_redraw = true;
                }

                if self.dragging {
                    if let Some(drag) = &mut self.drag {
                        let over = tree
                            .hit_test_with_sense_where(pos, Sense::DROP_TARGET, |n| {
                                rules.can_drop(&drag.payload, n)
                            })
                            .map(|n| n.id);

                        if over != drag.over {
                            drag.over = over;
                            out.needs_redraw = true;
                        }

                        out.events.push(UiEvent::DragMove {
                            id: drag.source,
                            pos,
                        });
                        out.needs_redraw = true;
                    }
                }
            }
            MouseEventKind::Moved
            | MouseEventKind::ScrollUp
            | MouseEventKind::ScrollDown
            | MouseEventKind::ScrollLeft
            | MouseEventKind::ScrollRight => {}
        }

        out
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/runtime.rs"]
mod tests;
