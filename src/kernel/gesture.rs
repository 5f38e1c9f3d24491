//! Drag gesture interpretation.
//!
//! A completed drag is described by a [`GestureDescriptor`]; [`classify`]
//! maps it to exactly one board transition (or a rejection), and
//! [`apply_gesture`] re-validates the referenced ids against the current board
//! before committing: an entity can be deleted between drag start and drop,
//! in which case the gesture is dropped without touching the board.

use crate::models::{Board, EntityId};

/// What kind of item is being dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragItem {
    Screen,
    SubScreen,
}

/// A droppable container: the top-level screen list, or one screen's
/// sub-screen list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Container {
    ScreenList,
    SubScreenList(EntityId),
}

/// Everything the interpreter needs to know about a finished drag.
/// `destination` is `None` when the item was dropped outside any container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureDescriptor {
    pub item: DragItem,
    pub dragged_id: EntityId,
    pub source: Container,
    pub destination: Option<Container>,
    pub source_index: usize,
    pub destination_index: usize,
}

/// The five board transitions a drag can commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    ReorderScreens {
        from: usize,
        to: usize,
    },
    DemoteScreen {
        screen: EntityId,
        target: EntityId,
    },
    PromoteSubScreen {
        screen: EntityId,
        sub: EntityId,
        insert_at: usize,
    },
    ReorderSubScreens {
        screen: EntityId,
        from: usize,
        to: usize,
    },
    MoveSubScreen {
        source: EntityId,
        dest: EntityId,
        from: usize,
        to: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Dropped outside every container; the gesture was cancelled.
    Cancelled,
    /// A screen dropped into its own sub-screen container.
    SelfNesting,
    /// The item type cannot originate from the claimed source container.
    SourceMismatch,
    /// A referenced id or position no longer exists at commit time.
    Stale,
    /// Demoting the only remaining screen.
    LastScreen,
}

/// Outcome of committing a gesture against a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    Committed { board: Board, transition: Transition },
    Rejected(RejectReason),
}

/// Exhaustive classification over item type x source x destination.
pub fn classify(gesture: &GestureDescriptor) -> Result<Transition, RejectReason> {
    let Some(destination) = gesture.destination else {
        return Err(RejectReason::Cancelled);
    };

    match (gesture.item, gesture.source, destination) {
        (DragItem::Screen, Container::ScreenList, Container::ScreenList) => {
            Ok(Transition::ReorderScreens {
                from: gesture.source_index,
                to: gesture.destination_index,
            })
        }
        (DragItem::Screen, Container::ScreenList, Container::SubScreenList(target)) => {
            if target == gesture.dragged_id {
                Err(RejectReason::SelfNesting)
            } else {
                Ok(Transition::DemoteScreen {
                    screen: gesture.dragged_id,
                    target,
                })
            }
        }
        (DragItem::SubScreen, Container::SubScreenList(owner), Container::ScreenList) => {
            Ok(Transition::PromoteSubScreen {
                screen: owner,
                sub: gesture.dragged_id,
                insert_at: gesture.destination_index,
            })
        }
        (DragItem::SubScreen, Container::SubScreenList(owner), Container::SubScreenList(dest)) => {
            if owner == dest {
                Ok(Transition::ReorderSubScreens {
                    screen: owner,
                    from: gesture.source_index,
                    to: gesture.destination_index,
                })
            } else {
                Ok(Transition::MoveSubScreen {
                    source: owner,
                    dest,
                    from: gesture.source_index,
                    to: gesture.destination_index,
                })
            }
        }
        (DragItem::Screen, Container::SubScreenList(_), _)
        | (DragItem::SubScreen, Container::ScreenList, _) => Err(RejectReason::SourceMismatch),
    }
}

fn sub_id_at(board: &Board, screen: EntityId, ix: usize) -> Option<EntityId> {
    board.screen(screen)?.sub_screens.get(ix).map(|sub| sub.id)
}

/// Classify and commit. Either returns a fully-formed new board or rejects;
/// the input board is never modified.
pub fn apply_gesture(board: &Board, gesture: &GestureDescriptor) -> GestureOutcome {
    let transition = match classify(gesture) {
        Ok(transition) => transition,
        Err(reason) => return GestureOutcome::Rejected(reason),
    };

    let next = match transition {
        Transition::ReorderScreens { from, to } => {
            // The source index must still name the dragged screen.
            if board.screens().get(from).map(|s| s.id) != Some(gesture.dragged_id) {
                return GestureOutcome::Rejected(RejectReason::Stale);
            }
            board.reorder_screens(from, to)
        }
        Transition::ReorderSubScreens { screen, from, to } => {
            if sub_id_at(board, screen, from) != Some(gesture.dragged_id) {
                return GestureOutcome::Rejected(RejectReason::Stale);
            }
            board.reorder_sub_screens(screen, from, to)
        }
        Transition::MoveSubScreen {
            source,
            dest,
            from,
            to,
        } => {
            if sub_id_at(board, source, from) != Some(gesture.dragged_id) {
                return GestureOutcome::Rejected(RejectReason::Stale);
            }
            board.move_sub_screen(source, dest, from, to)
        }
        Transition::PromoteSubScreen {
            screen,
            sub,
            insert_at,
        } => board.promote_sub_screen(screen, sub, Some(insert_at)),
        Transition::DemoteScreen { screen, target } => {
            // With a single screen left there is no valid demote target at
            // all, so report that before blaming a vanished id.
            if board.screens().len() < 2 {
                return GestureOutcome::Rejected(RejectReason::LastScreen);
            }
            if board.screen(screen).is_none() || board.screen(target).is_none() {
                return GestureOutcome::Rejected(RejectReason::Stale);
            }
            board.demote_screen(screen, target)
        }
    };

    match next {
        Some(board) => GestureOutcome::Committed { board, transition },
        None => GestureOutcome::Rejected(RejectReason::Stale),
    }
}

/// Transient highlight signals for the view layer while a drag is in flight.
/// Recomputed on every gesture update and reset when the drag ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragPreview {
    /// The pointer is over the top-level list while dragging a sub-screen.
    pub promote_target: bool,
    /// The pointer is over this screen's sub-screen container while dragging
    /// a different screen.
    pub demote_target: Option<EntityId>,
}

impl DragPreview {
    pub fn is_idle(&self) -> bool {
        !self.promote_target && self.demote_target.is_none()
    }
}

pub fn preview(item: DragItem, dragged_id: EntityId, over: Option<Container>) -> DragPreview {
    match (item, over) {
        (DragItem::SubScreen, Some(Container::ScreenList)) => DragPreview {
            promote_target: true,
            demote_target: None,
        },
        (DragItem::Screen, Some(Container::SubScreenList(target))) if target != dragged_id => {
            DragPreview {
                promote_target: false,
                demote_target: Some(target),
            }
        }
        _ => DragPreview::default(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/gesture.rs"]
mod tests;
