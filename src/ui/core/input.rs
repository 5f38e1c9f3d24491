use super::geom::Pos;
use super::id::Id;
use crate::models::EntityId;
use crossterm::event::MouseButton;

/// What is being carried by an in-flight drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPayload {
    Screen {
        index: usize,
        screen_id: EntityId,
    },
    SubScreen {
        from_screen: EntityId,
        index: usize,
        sub_id: EntityId,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    HoverChanged {
        from: Option<Id>,
        to: Option<Id>,
        pos: Pos,
    },
    Click {
        id: Id,
        button: MouseButton,
        pos: Pos,
    },
    DragStart {
        id: Id,
        pos: Pos,
    },
    DragMove {
        id: Id,
        pos: Pos,
    },
    DragEnd {
        id: Id,
        pos: Pos,
    },
    /// Emitted just before `DragEnd` when the pointer was released over a
    /// valid drop target.
    Drop {
        payload: DragPayload,
        target: Id,
        pos: Pos,
    },
}
