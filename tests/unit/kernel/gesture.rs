use super::*;
use crate::models::{Board, EntityId, Screen, SubScreen};

fn sub(id: u64, title: &str) -> SubScreen {
    SubScreen {
        id: EntityId(id),
        title: title.into(),
        description: String::new(),
        thumbnail: String::new(),
    }
}

fn screen(id: u64, title: &str, subs: Vec<SubScreen>) -> Screen {
    Screen {
        id: EntityId(id),
        title: title.into(),
        description: String::new(),
        thumbnail: String::new(),
        sub_screens: subs,
    }
}

fn board_ab() -> Board {
    Board::with_screens(vec![
        screen(1, "A", vec![sub(2, "x"), sub(3, "y")]),
        screen(4, "B", vec![sub(5, "z")]),
    ])
}

fn gesture(
    item: DragItem,
    dragged_id: EntityId,
    source: Container,
    destination: Option<Container>,
    source_index: usize,
    destination_index: usize,
) -> GestureDescriptor {
    GestureDescriptor {
        item,
        dragged_id,
        source,
        destination,
        source_index,
        destination_index,
    }
}

#[test]
fn classify_screen_within_list_is_reorder() {
    let g = gesture(
        DragItem::Screen,
        EntityId(1),
        Container::ScreenList,
        Some(Container::ScreenList),
        0,
        1,
    );
    assert_eq!(classify(&g), Ok(Transition::ReorderScreens { from: 0, to: 1 }));
}

#[test]
fn classify_screen_into_own_sub_list_is_self_nesting() {
    let g = gesture(
        DragItem::Screen,
        EntityId(1),
        Container::ScreenList,
        Some(Container::SubScreenList(EntityId(1))),
        0,
        0,
    );
    assert_eq!(classify(&g), Err(RejectReason::SelfNesting));
}

#[test]
fn classify_screen_into_other_sub_list_is_demote() {
    let g = gesture(
        DragItem::Screen,
        EntityId(1),
        Container::ScreenList,
        Some(Container::SubScreenList(EntityId(4))),
        0,
        0,
    );
    assert_eq!(
        classify(&g),
        Ok(Transition::DemoteScreen {
            screen: EntityId(1),
            target: EntityId(4),
        })
    );
}

#[test]
fn classify_sub_screen_into_screen_list_is_promote() {
    let g = gesture(
        DragItem::SubScreen,
        EntityId(3),
        Container::SubScreenList(EntityId(1)),
        Some(Container::ScreenList),
        1,
        2,
    );
    assert_eq!(
        classify(&g),
        Ok(Transition::PromoteSubScreen {
            screen: EntityId(1),
            sub: EntityId(3),
            insert_at: 2,
        })
    );
}

#[test]
fn classify_sub_screen_same_container_is_reorder() {
    let g = gesture(
        DragItem::SubScreen,
        EntityId(2),
        Container::SubScreenList(EntityId(1)),
        Some(Container::SubScreenList(EntityId(1))),
        0,
        1,
    );
    assert_eq!(
        classify(&g),
        Ok(Transition::ReorderSubScreens {
            screen: EntityId(1),
            from: 0,
            to: 1,
        })
    );
}

#[test]
fn classify_sub_screen_across_containers_is_move() {
    let g = gesture(
        DragItem::SubScreen,
        EntityId(2),
        Container::SubScreenList(EntityId(1)),
        Some(Container::SubScreenList(EntityId(4))),
        0,
        0,
    );
    assert_eq!(
        classify(&g),
        Ok(Transition::MoveSubScreen {
            source: EntityId(1),
            dest: EntityId(4),
            from: 0,
            to: 0,
        })
    );
}

#[test]
fn classify_without_destination_is_cancelled() {
    let g = gesture(
        DragItem::Screen,
        EntityId(1),
        Container::ScreenList,
        None,
        0,
        0,
    );
    assert_eq!(classify(&g), Err(RejectReason::Cancelled));
}

#[test]
fn classify_rejects_impossible_source_combinations() {
    let g = gesture(
        DragItem::Screen,
        EntityId(1),
        Container::SubScreenList(EntityId(4)),
        Some(Container::ScreenList),
        0,
        0,
    );
    assert_eq!(classify(&g), Err(RejectReason::SourceMismatch));

    let g = gesture(
        DragItem::SubScreen,
        EntityId(2),
        Container::ScreenList,
        Some(Container::ScreenList),
        0,
        0,
    );
    assert_eq!(classify(&g), Err(RejectReason::SourceMismatch));
}

#[test]
fn apply_reorder_commits_new_board() {
    let board = board_ab();
    let g = gesture(
        DragItem::Screen,
        EntityId(1),
        Container::ScreenList,
        Some(Container::ScreenList),
        0,
        1,
    );
    match apply_gesture(&board, &g) {
        GestureOutcome::Committed { board: next, transition } => {
            assert_eq!(transition, Transition::ReorderScreens { from: 0, to: 1 });
            assert_eq!(next.screens()[0].id, EntityId(4));
        }
        other => panic!("expected commit, got {other:?}"),
    }
}

#[test]
fn apply_cancelled_gesture_never_touches_the_board() {
    let board = board_ab();
    for item in [DragItem::Screen, DragItem::SubScreen] {
        let source = match item {
            DragItem::Screen => Container::ScreenList,
            DragItem::SubScreen => Container::SubScreenList(EntityId(1)),
        };
        let g = gesture(item, EntityId(1), source, None, 0, 0);
        assert_eq!(
            apply_gesture(&board, &g),
            GestureOutcome::Rejected(RejectReason::Cancelled)
        );
    }
}

#[test]
fn apply_rejects_stale_screen_index() {
    let board = board_ab();
    // Source index 0 no longer names the dragged screen (id 4 sits at 1).
    let g = gesture(
        DragItem::Screen,
        EntityId(4),
        Container::ScreenList,
        Some(Container::ScreenList),
        0,
        1,
    );
    assert_eq!(
        apply_gesture(&board, &g),
        GestureOutcome::Rejected(RejectReason::Stale)
    );
}

#[test]
fn apply_rejects_stale_sub_screen() {
    // The sub-screen was deleted between drag start and drop.
    let board = board_ab().delete_sub_screen(EntityId(1), EntityId(2)).unwrap();
    let g = gesture(
        DragItem::SubScreen,
        EntityId(2),
        Container::SubScreenList(EntityId(1)),
        Some(Container::SubScreenList(EntityId(4))),
        0,
        0,
    );
    assert_eq!(
        apply_gesture(&board, &g),
        GestureOutcome::Rejected(RejectReason::Stale)
    );
}

#[test]
fn apply_rejects_self_nesting_drop() {
    let board = board_ab();
    let g = gesture(
        DragItem::Screen,
        EntityId(1),
        Container::ScreenList,
        Some(Container::SubScreenList(EntityId(1))),
        0,
        0,
    );
    assert_eq!(
        apply_gesture(&board, &g),
        GestureOutcome::Rejected(RejectReason::SelfNesting)
    );
}

#[test]
fn apply_rejects_demoting_the_last_screen() {
    let board = Board::with_screens(vec![screen(1, "only", vec![sub(2, "x")])]);
    let g = gesture(
        DragItem::Screen,
        EntityId(1),
        Container::ScreenList,
        Some(Container::SubScreenList(EntityId(9))),
        0,
        0,
    );
    assert_eq!(
        apply_gesture(&board, &g),
        GestureOutcome::Rejected(RejectReason::LastScreen)
    );
}

#[test]
fn apply_demote_commits() {
    let board = board_ab();
    let g = gesture(
        DragItem::Screen,
        EntityId(1),
        Container::ScreenList,
        Some(Container::SubScreenList(EntityId(4))),
        0,
        1,
    );
    match apply_gesture(&board, &g) {
        GestureOutcome::Committed { board: next, .. } => {
            assert_eq!(next.screens().len(), 1);
            assert_eq!(next.screens()[0].sub_screens.len(), 4);
        }
        other => panic!("expected commit, got {other:?}"),
    }
}

#[test]
fn apply_promote_inserts_at_drop_position() {
    let board = board_ab();
    let g = gesture(
        DragItem::SubScreen,
        EntityId(3),
        Container::SubScreenList(EntityId(1)),
        Some(Container::ScreenList),
        1,
        0,
    );
    match apply_gesture(&board, &g) {
        GestureOutcome::Committed { board: next, .. } => {
            assert_eq!(next.screens().len(), 3);
            assert_eq!(next.screens()[0].title, "y");
        }
        other => panic!("expected commit, got {other:?}"),
    }
}

#[test]
fn preview_promote_lights_up_over_screen_list() {
    let p = preview(
        DragItem::SubScreen,
        EntityId(2),
        Some(Container::ScreenList),
    );
    assert!(p.promote_target);
    assert_eq!(p.demote_target, None);
}

#[test]
fn preview_demote_lights_up_over_other_sub_list() {
    let p = preview(
        DragItem::Screen,
        EntityId(1),
        Some(Container::SubScreenList(EntityId(4))),
    );
    assert!(!p.promote_target);
    assert_eq!(p.demote_target, Some(EntityId(4)));
}

#[test]
fn preview_never_suggests_self_nesting() {
    let p = preview(
        DragItem::Screen,
        EntityId(1),
        Some(Container::SubScreenList(EntityId(1))),
    );
    assert!(p.is_idle());
}

#[test]
fn preview_is_idle_outside_any_container() {
    assert!(preview(DragItem::SubScreen, EntityId(2), None).is_idle());
    assert!(preview(DragItem::Screen, EntityId(1), None).is_idle());
}
