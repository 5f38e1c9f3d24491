use super::*;
use crate::kernel::gesture::{Container, DragItem, GestureDescriptor};
use crate::models::{EntityId, Screen, SubScreen};

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

fn new_store() -> Store {
    let board = Board::with_screens(vec![
        screen(1, "A", vec![sub(2, "x"), sub(3, "y")]),
        screen(4, "B", vec![sub(5, "z")]),
    ]);
    Store::new(AppState::new(board))
}

fn notify_titles(result: &DispatchResult) -> Vec<&str> {
    result
        .effects
        .iter()
        .map(|Effect::Notify { title, .. }| title.as_str())
        .collect()
}

#[test]
fn quit_command_sets_should_quit() {
    let mut store = new_store();
    let result = store.dispatch(Action::RunCommand(Command::Quit));
    assert!(result.state_changed);
    assert!(store.state.ui.should_quit);
}

#[test]
fn add_screen_notifies_and_grows_the_board() {
    let mut store = new_store();
    let result = store.dispatch(Action::AddScreen);
    assert!(result.state_changed);
    assert_eq!(notify_titles(&result), ["Screen added"]);
    assert_eq!(store.state.board.screens().len(), 3);
}

#[test]
fn add_sub_screen_command_targets_the_selected_screen() {
    let mut store = new_store();
    store.state.ui.selection = Some(Selection::Screen(EntityId(4)));

    let result = store.dispatch(Action::RunCommand(Command::AddSubScreen));
    assert!(result.state_changed);
    assert_eq!(store.state.board.screens()[1].sub_screens.len(), 2);
}

#[test]
fn add_sub_screen_command_without_selection_is_a_no_op() {
    let mut store = new_store();
    let result = store.dispatch(Action::RunCommand(Command::AddSubScreen));
    assert!(!result.state_changed);
    assert!(result.effects.is_empty());
}

#[test]
fn selection_walks_screens_and_sub_screens_in_display_order() {
    let mut store = new_store();

    let _ = store.dispatch(Action::RunCommand(Command::SelectionDown));
    assert_eq!(store.state.ui.selection, Some(Selection::Screen(EntityId(1))));

    let _ = store.dispatch(Action::RunCommand(Command::SelectionDown));
    assert_eq!(
        store.state.ui.selection,
        Some(Selection::SubScreen {
            screen: EntityId(1),
            sub: EntityId(2),
        })
    );

    // Clamped at the end of the list.
    for _ in 0..10 {
        let _ = store.dispatch(Action::RunCommand(Command::SelectionDown));
    }
    assert_eq!(
        store.state.ui.selection,
        Some(Selection::SubScreen {
            screen: EntityId(4),
            sub: EntityId(5),
        })
    );
}

#[test]
fn escape_closes_dialog_before_clearing_selection() {
    let mut store = new_store();
    store.state.ui.selection = Some(Selection::Screen(EntityId(1)));
    let _ = store.dispatch(Action::RunCommand(Command::RenameSelected));
    assert!(store.state.ui.input_dialog.visible);

    let result = store.dispatch(Action::RunCommand(Command::Escape));
    assert!(result.state_changed);
    assert!(!store.state.ui.input_dialog.visible);
    // Selection survives the first escape.
    assert!(store.state.ui.selection.is_some());

    let result = store.dispatch(Action::RunCommand(Command::Escape));
    assert!(result.state_changed);
    assert!(store.state.ui.selection.is_none());
}

#[test]
fn rename_dialog_prefills_edits_and_commits() {
    let mut store = new_store();
    store.state.ui.selection = Some(Selection::Screen(EntityId(1)));

    let result = store.dispatch(Action::RunCommand(Command::RenameSelected));
    assert!(result.state_changed);
    assert!(store.state.ui.input_dialog.visible);
    assert_eq!(store.state.ui.input_dialog.value, "A");
    assert_eq!(store.state.ui.input_dialog.cursor, 1);

    let _ = store.dispatch(Action::InputDialogBackspace);
    for ch in "Landing".chars() {
        let _ = store.dispatch(Action::InputDialogAppend(ch));
    }
    let result = store.dispatch(Action::InputDialogAccept);
    assert!(result.state_changed);
    assert!(!store.state.ui.input_dialog.visible);
    assert_eq!(store.state.board.screens()[0].title, "Landing");
}

#[test]
fn description_dialog_edits_sub_screen() {
    let mut store = new_store();
    store.state.ui.selection = Some(Selection::SubScreen {
        screen: EntityId(1),
        sub: EntityId(2),
    });

    let _ = store.dispatch(Action::RunCommand(Command::EditDescription));
    assert!(store.state.ui.input_dialog.visible);

    for ch in "login".chars() {
        let _ = store.dispatch(Action::InputDialogAppend(ch));
    }
    let _ = store.dispatch(Action::InputDialogAccept);
    assert_eq!(store.state.board.screens()[0].sub_screens[0].description, "login");
}

#[test]
fn input_dialog_cursor_moves_by_grapheme() {
    let mut store = new_store();
    store.state.ui.selection = Some(Selection::Screen(EntityId(1)));
    let _ = store.dispatch(Action::RunCommand(Command::RenameSelected));

    let _ = store.dispatch(Action::InputDialogCursorLeft);
    assert_eq!(store.state.ui.input_dialog.cursor, 0);
    let _ = store.dispatch(Action::InputDialogCursorRight);
    assert_eq!(store.state.ui.input_dialog.cursor, 1);

    // At the ends the cursor stays put.
    let result = store.dispatch(Action::InputDialogCursorRight);
    assert!(!result.state_changed);
}

#[test]
fn dialog_actions_without_dialog_are_no_ops() {
    let mut store = new_store();
    assert!(!store.dispatch(Action::InputDialogAppend('a')).state_changed);
    assert!(!store.dispatch(Action::InputDialogAccept).state_changed);
    assert!(!store.dispatch(Action::ConfirmDialogAccept).state_changed);
}

#[test]
fn delete_screen_goes_through_confirm_dialog() {
    let mut store = new_store();
    store.state.ui.selection = Some(Selection::Screen(EntityId(1)));

    let result = store.dispatch(Action::RunCommand(Command::DeleteSelected));
    assert!(result.state_changed);
    assert!(store.state.ui.confirm_dialog.visible);
    assert!(store.state.ui.confirm_dialog.message.contains("\"A\""));
    assert!(store.state.ui.confirm_dialog.message.contains("2 sub-screen"));

    let result = store.dispatch(Action::ConfirmDialogAccept);
    assert!(result.state_changed);
    assert_eq!(notify_titles(&result), ["Screen deleted"]);
    assert_eq!(store.state.board.screens().len(), 1);
    assert!(!store.state.ui.confirm_dialog.visible);
    // The deleted screen was selected; the selection is gone with it.
    assert!(store.state.ui.selection.is_none());
}

#[test]
fn confirm_dialog_cancel_keeps_the_screen() {
    let mut store = new_store();
    let _ = store.dispatch(Action::RequestDeleteScreen { screen: EntityId(1) });
    assert!(store.state.ui.confirm_dialog.visible);

    let result = store.dispatch(Action::ConfirmDialogCancel);
    assert!(result.state_changed);
    assert!(!store.state.ui.confirm_dialog.visible);
    assert_eq!(store.state.board.screens().len(), 2);
}

#[test]
fn request_delete_for_unknown_screen_is_a_no_op() {
    let mut store = new_store();
    let result = store.dispatch(Action::RequestDeleteScreen { screen: EntityId(99) });
    assert!(!result.state_changed);
    assert!(!store.state.ui.confirm_dialog.visible);
}

#[test]
fn promote_command_converts_selected_sub_screen() {
    let mut store = new_store();
    store.state.ui.selection = Some(Selection::SubScreen {
        screen: EntityId(1),
        sub: EntityId(3),
    });

    let result = store.dispatch(Action::RunCommand(Command::PromoteSelected));
    assert!(result.state_changed);
    assert_eq!(notify_titles(&result), ["Sub-screen promoted"]);
    assert_eq!(store.state.board.screens().len(), 3);
    // The promoted sub-screen no longer exists under its old identity.
    assert!(store.state.ui.selection.is_none());
}

#[test]
fn promote_command_on_a_screen_selection_is_a_no_op() {
    let mut store = new_store();
    store.state.ui.selection = Some(Selection::Screen(EntityId(1)));
    let result = store.dispatch(Action::RunCommand(Command::PromoteSelected));
    assert!(!result.state_changed);
    assert!(result.effects.is_empty());
}

#[test]
fn gesture_commit_reorders_and_notifies() {
    let mut store = new_store();
    let result = store.dispatch(Action::CommitGesture(GestureDescriptor {
        item: DragItem::Screen,
        dragged_id: EntityId(1),
        source: Container::ScreenList,
        destination: Some(Container::ScreenList),
        source_index: 0,
        destination_index: 1,
    }));

    assert!(result.state_changed);
    assert_eq!(notify_titles(&result), ["Screen reordered"]);
    assert_eq!(store.state.board.screens()[0].id, EntityId(4));
}

#[test]
fn gesture_commit_to_same_position_is_idempotent() {
    let mut store = new_store();
    let result = store.dispatch(Action::CommitGesture(GestureDescriptor {
        item: DragItem::Screen,
        dragged_id: EntityId(1),
        source: Container::ScreenList,
        destination: Some(Container::ScreenList),
        source_index: 0,
        destination_index: 0,
    }));

    // Still a valid commit with its toast, but nothing actually moved.
    assert!(!result.state_changed);
    assert_eq!(notify_titles(&result), ["Screen reordered"]);
}

#[test]
fn self_nesting_gesture_is_rejected_with_a_notice() {
    let mut store = new_store();
    let before = store.state.board.clone();
    let result = store.dispatch(Action::CommitGesture(GestureDescriptor {
        item: DragItem::Screen,
        dragged_id: EntityId(1),
        source: Container::ScreenList,
        destination: Some(Container::SubScreenList(EntityId(1))),
        source_index: 0,
        destination_index: 0,
    }));

    assert!(!result.state_changed);
    assert_eq!(notify_titles(&result), ["Drop rejected"]);
    assert_eq!(store.state.board, before);
}

#[test]
fn cancelled_gesture_is_silent() {
    let mut store = new_store();
    let before = store.state.board.clone();
    let result = store.dispatch(Action::CommitGesture(GestureDescriptor {
        item: DragItem::SubScreen,
        dragged_id: EntityId(2),
        source: Container::SubScreenList(EntityId(1)),
        destination: None,
        source_index: 0,
        destination_index: 0,
    }));

    assert!(!result.state_changed);
    assert!(result.effects.is_empty());
    assert_eq!(store.state.board, before);
}

#[test]
fn scroll_saturates_at_zero() {
    let mut store = new_store();
    let result = store.dispatch(Action::Scroll { delta: -1 });
    assert!(!result.state_changed);
    assert_eq!(store.state.ui.scroll, 0);

    let result = store.dispatch(Action::Scroll { delta: 3 });
    assert!(result.state_changed);
    assert_eq!(store.state.ui.scroll, 3);
}

#[test]
fn select_actions_validate_ids() {
    let mut store = new_store();
    let result = store.dispatch(Action::SelectScreen { screen: EntityId(99) });
    assert!(!result.state_changed);
    assert!(store.state.ui.selection.is_none());

    let result = store.dispatch(Action::SelectSubScreen {
        screen: EntityId(1),
        sub: EntityId(5),
    });
    assert!(!result.state_changed);

    let result = store.dispatch(Action::SelectSubScreen {
        screen: EntityId(4),
        sub: EntityId(5),
    });
    assert!(result.state_changed);
}
