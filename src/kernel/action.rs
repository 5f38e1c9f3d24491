use crate::core::Command;
use crate::kernel::gesture::GestureDescriptor;
use crate::models::EntityId;

#[derive(Debug, Clone)]
pub enum Action {
    /// A semantic command, usually key-driven; targets resolve against the
    /// current selection inside the reducer.
    RunCommand(Command),

    /// A completed drag gesture, ready for classification and commit.
    CommitGesture(GestureDescriptor),

    // Board mutations addressed by id (mouse-driven).
    AddScreen,
    AddSubScreen {
        screen: EntityId,
    },
    RequestDeleteScreen {
        screen: EntityId,
    },
    RequestDeleteSubScreen {
        screen: EntityId,
        sub: EntityId,
    },
    DeleteScreen {
        screen: EntityId,
    },
    DeleteSubScreen {
        screen: EntityId,
        sub: EntityId,
    },
    PromoteSubScreen {
        screen: EntityId,
        sub: EntityId,
    },

    // Selection / viewport.
    SelectScreen {
        screen: EntityId,
    },
    SelectSubScreen {
        screen: EntityId,
        sub: EntityId,
    },
    MoveSelection {
        delta: isize,
    },
    Scroll {
        delta: isize,
    },

    // Input dialog lifecycle.
    InputDialogAppend(char),
    InputDialogBackspace,
    InputDialogCursorLeft,
    InputDialogCursorRight,
    InputDialogAccept,
    InputDialogCancel,

    // Confirm dialog.
    ConfirmDialogAccept,
    ConfirmDialogCancel,
}
