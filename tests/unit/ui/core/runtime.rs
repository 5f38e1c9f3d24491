use super::*;
use crate::models::EntityId;
use crate::ui::core::tree::NodeKind;
use crossterm::event::{KeyModifiers, MouseEvent};

struct TestRules;

impl DragDropRules for TestRules {
    fn payload_for_source(&self, source: &Node) -> Option<DragPayload> {
        match source.kind {
            NodeKind::ScreenCard { index, screen_id } => {
                Some(DragPayload::Screen { index, screen_id })
            }
            _ => None,
        }
    }

    fn can_drop(&self, _payload: &DragPayload, target: &Node) -> bool {
        matches!(target.kind, NodeKind::ScreenList)
    }
}

fn tree() -> UiTree {
    let mut tree = UiTree::new();
    // Background drop zone with a draggable card at the top, plus a click-only
    // button that never accepts drops.
    tree.push(Node {
        id: Id::raw(1),
        rect: super::super::geom::Rect::new(0, 0, 40, 20),
        sense: Sense::HOVER | Sense::DROP_TARGET,
        kind: NodeKind::ScreenList,
    });
    tree.push(Node {
        id: Id::raw(2),
        rect: super::super::geom::Rect::new(0, 0, 20, 3),
        sense: Sense::HOVER | Sense::CLICK | Sense::DRAG_SOURCE,
        kind: NodeKind::ScreenCard {
            index: 0,
            screen_id: EntityId(7),
        },
    });
    tree.push(Node {
        id: Id::raw(3),
        rect: super::super::geom::Rect::new(30, 0, 5, 1),
        sense: Sense::HOVER | Sense::CLICK,
        kind: NodeKind::AddScreenButton,
    });
    tree
}

fn mouse(kind: MouseEventKind, x: u16, y: u16) -> InputEvent {
    InputEvent::Mouse(MouseEvent {
        kind,
        column: x,
        row: y,
        modifiers: KeyModifiers::empty(),
    })
}

#[test]
fn press_and_release_is_a_click() {
    let tree = tree();
    let mut runtime = UiRuntime::new();

    let _ = runtime.on_input(&mouse(MouseEventKind::Down(MouseButton::Left), 1, 1), &tree, &TestRules);
    let out = runtime.on_input(&mouse(MouseEventKind::Up(MouseButton::Left), 1, 1), &tree, &TestRules);

    assert!(out
        .events
        .iter()
        .any(|e| matches!(e, UiEvent::Click { id, .. } if *id == Id::raw(2))));
    assert!(!runtime.is_dragging());
}

#[test]
fn drag_to_target_emits_drop_before_drag_end() {
    let tree = tree();
    let mut runtime = UiRuntime::new();

    let _ = runtime.on_input(&mouse(MouseEventKind::Down(MouseButton::Left), 1, 1), &tree, &TestRules);
    let out = runtime.on_input(&mouse(MouseEventKind::Drag(MouseButton::Left), 1, 10), &tree, &TestRules);
    assert!(out.events.iter().any(|e| matches!(e, UiEvent::DragStart { .. })));
    assert!(runtime.is_dragging());
    assert_eq!(
        runtime.drag_payload(),
        Some(&DragPayload::Screen {
            index: 0,
            screen_id: EntityId(7),
        })
    );
    assert_eq!(runtime.drag_over(), Some(Id::raw(1)));

    let out = runtime.on_input(&mouse(MouseEventKind::Up(MouseButton::Left), 1, 10), &tree, &TestRules);
    let drop_ix = out
        .events
        .iter()
        .position(|e| matches!(e, UiEvent::Drop { .. }))
        .expect("drop event");
    let end_ix = out
        .events
        .iter()
        .position(|e| matches!(e, UiEvent::DragEnd { .. }))
        .expect("drag end event");
    assert!(drop_ix < end_ix);

    match out.events[drop_ix] {
        UiEvent::Drop { payload, target, .. } => {
            assert_eq!(
                payload,
                DragPayload::Screen {
                    index: 0,
                    screen_id: EntityId(7),
                }
            );
            assert_eq!(target, Id::raw(1));
        }
        _ => unreachable!(),
    }

    assert!(runtime.drag_payload().is_none());
    assert!(!runtime.is_dragging());
}

#[test]
fn releasing_outside_any_target_cancels_without_drop() {
    let mut tree = tree();
    // Shrink the background so there is true dead space.
    tree.clear();
    tree.push(Node {
        id: Id::raw(2),
        rect: super::super::geom::Rect::new(0, 0, 20, 3),
        sense: Sense::HOVER | Sense::CLICK | Sense::DRAG_SOURCE,
        kind: NodeKind::ScreenCard {
            index: 0,
            screen_id: EntityId(7),
        },
    });

    let mut runtime = UiRuntime::new();
    let _ = runtime.on_input(&mouse(MouseEventKind::Down(MouseButton::Left), 1, 1), &tree, &TestRules);
    let _ = runtime.on_input(&mouse(MouseEventKind::Drag(MouseButton::Left), 10, 10), &tree, &TestRules);
    let out = runtime.on_input(&mouse(MouseEventKind::Up(MouseButton::Left), 10, 10), &tree, &TestRules);

    assert!(!out.events.iter().any(|e| matches!(e, UiEvent::Drop { .. })));
    assert!(out.events.iter().any(|e| matches!(e, UiEvent::DragEnd { .. })));
}

#[test]
fn press_on_a_non_source_never_starts_a_drag() {
    let tree = tree();
    let mut runtime = UiRuntime::new();

    let _ = runtime.on_input(&mouse(MouseEventKind::Down(MouseButton::Left), 31, 0), &tree, &TestRules);
    let out = runtime.on_input(&mouse(MouseEventKind::Drag(MouseButton::Left), 31, 5), &tree, &TestRules);

    assert!(!runtime.is_dragging());
    assert!(!out.events.iter().any(|e| matches!(e, UiEvent::DragStart { .. })));
}

#[test]
fn hover_transitions_are_reported() {
    let tree = tree();
    let mut runtime = UiRuntime::new();

    let out = runtime.on_input(&mouse(MouseEventKind::Moved, 1, 1), &tree, &TestRules);
    assert!(out.events.iter().any(|e| matches!(
        e,
        UiEvent::HoverChanged {
            to: Some(id),
            ..
        } if *id == Id::raw(2)
    )));

    // Same node again: no new hover event.
    let out = runtime.on_input(&mouse(MouseEventKind::Moved, 2, 1), &tree, &TestRules);
    assert!(out.events.is_empty());
}

#[test]
fn reset_pointer_state_clears_the_session() {
    let tree = tree();
    let mut runtime = UiRuntime::new();

    let _ = runtime.on_input(&mouse(MouseEventKind::Down(MouseButton::Left), 1, 1), &tree, &TestRules);
    let _ = runtime.on_input(&mouse(MouseEventKind::Drag(MouseButton::Left), 1, 10), &tree, &TestRules);
    assert!(runtime.is_dragging());

    runtime.reset_pointer_state();
    assert!(!runtime.is_dragging());
    assert!(runtime.drag_payload().is_none());
}
