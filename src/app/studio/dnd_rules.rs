use crate::kernel::gesture::{self, Container, DragItem, DragPreview, GestureDescriptor};
use crate::models::Board;
use crate::ui::core::input::DragPayload;
use crate::ui::core::runtime::DragDropRules;
use crate::ui::core::tree::{Node, NodeKind};

#[derive(Debug, Clone, Copy, Default)]
pub(super) struct StudioDragDropRules;

pub(super) const STUDIO_DND_RULES: StudioDragDropRules = StudioDragDropRules;

pub(super) fn drag_payload_for_source(kind: NodeKind) -> Option<DragPayload> {
    match kind {
        NodeKind::ScreenCard { index, screen_id } => {
            Some(DragPayload::Screen { index, screen_id })
        }
        NodeKind::SubScreenRow {
            screen_id,
            index,
            sub_id,
        } => Some(DragPayload::SubScreen {
            from_screen: screen_id,
            index,
            sub_id,
        }),
        _ => None,
    }
}

/// Payload x target compatibility. Drives target resolution while the pointer
/// moves, so an invalid combination (a screen over its own sub-screen list)
/// never even lights up.
pub(super) fn can_drop_on(payload: &DragPayload, target: NodeKind) -> bool {
    match (payload, target) {
        (DragPayload::Screen { .. }, NodeKind::ScreenList | NodeKind::ScreenCard { .. }) => true,
        (
            DragPayload::Screen { screen_id, .. },
            NodeKind::SubScreenList { screen_id: target_id }
            | NodeKind::SubScreenRow {
                screen_id: target_id,
                ..
            },
        ) => *screen_id != target_id,
        (
            DragPayload::SubScreen { .. },
            NodeKind::ScreenList
            | NodeKind::ScreenCard { .. }
            | NodeKind::SubScreenList { .. }
            | NodeKind::SubScreenRow { .. },
        ) => true,
        _ => false,
    }
}

/// The container a hit-test node belongs to, for drag preview purposes.
pub(super) fn container_for(kind: NodeKind) -> Option<Container> {
    match kind {
        NodeKind::ScreenList | NodeKind::ScreenCard { .. } => Some(Container::ScreenList),
        NodeKind::SubScreenList { screen_id } | NodeKind::SubScreenRow { screen_id, .. } => {
            Some(Container::SubScreenList(screen_id))
        }
        _ => None,
    }
}

pub(super) fn preview_for(payload: &DragPayload, over: Option<NodeKind>) -> DragPreview {
    let (item, dragged_id) = match *payload {
        DragPayload::Screen { screen_id, .. } => (DragItem::Screen, screen_id),
        DragPayload::SubScreen { sub_id, .. } => (DragItem::SubScreen, sub_id),
    };
    gesture::preview(item, dragged_id, over.and_then(container_for))
}

/// Build the gesture descriptor for a finished drop. Dropping on a card or a
/// row targets that element's position; dropping on a container's background
/// appends.
pub(super) fn gesture_for(
    payload: &DragPayload,
    target: NodeKind,
    board: &Board,
) -> Option<GestureDescriptor> {
    match *payload {
        DragPayload::Screen { index, screen_id } => {
            let (destination, destination_index) = match target {
                NodeKind::ScreenCard { index: to, .. } => (Container::ScreenList, to),
                NodeKind::ScreenList => {
                    (Container::ScreenList, board.screens().len().saturating_sub(1))
                }
                NodeKind::SubScreenList {
                    screen_id: target_id,
                }
                | NodeKind::SubScreenRow {
                    screen_id: target_id,
                    ..
                } => {
                    let append_at = board
                        .screen(target_id)
                        .map(|s| s.sub_screens.len())
                        .unwrap_or(0);
                    (Container::SubScreenList(target_id), append_at)
                }
                _ => return None,
            };
            Some(GestureDescriptor {
                item: DragItem::Screen,
                dragged_id: screen_id,
                source: Container::ScreenList,
                destination: Some(destination),
                source_index: index,
                destination_index,
            })
        }
        DragPayload::SubScreen {
            from_screen,
            index,
            sub_id,
        } => {
            let (destination, destination_index) = match target {
                NodeKind::ScreenList => (Container::ScreenList, board.screens().len()),
                NodeKind::ScreenCard { index: to, .. } => (Container::ScreenList, to),
                NodeKind::SubScreenRow {
                    screen_id: target_id,
                    index: to,
                    ..
                } => (Container::SubScreenList(target_id), to),
                NodeKind::SubScreenList {
                    screen_id: target_id,
                } => {
                    let append_at = board
                        .screen(target_id)
                        .map(|s| s.sub_screens.len())
                        .unwrap_or(0);
                    (Container::SubScreenList(target_id), append_at)
                }
                _ => return None,
            };
            Some(GestureDescriptor {
                item: DragItem::SubScreen,
                dragged_id: sub_id,
                source: Container::SubScreenList(from_screen),
                destination: Some(destination),
                source_index: index,
                destination_index,
            })
        }
    }
}

impl DragDropRules for StudioDragDropRules {
    fn payload_for_source(&self, source: &Node) -> Option<DragPayload> {
        drag_payload_for_source(source.kind)
    }

    fn can_drop(&self, payload: &DragPayload, target: &Node) -> bool {
        can_drop_on(payload, target.kind)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/studio/dnd_rules.rs"]
mod tests;
