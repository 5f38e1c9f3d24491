use crate::models::{Board, EntityId};

/// What the user currently has selected on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Screen(EntityId),
    SubScreen { screen: EntityId, sub: EntityId },
}

impl Selection {
    /// The screen this selection lives on (the owner, for a sub-screen).
    pub fn screen_id(&self) -> EntityId {
        match self {
            Selection::Screen(id) => *id,
            Selection::SubScreen { screen, .. } => *screen,
        }
    }
}

/// Which entity field an open input dialog is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDialogKind {
    RenameScreen(EntityId),
    RenameSubScreen { screen: EntityId, sub: EntityId },
    EditScreenDescription(EntityId),
    EditSubScreenDescription { screen: EntityId, sub: EntityId },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputDialogState {
    pub visible: bool,
    pub title: String,
    pub value: String,
    /// Byte offset into `value`; moved by grapheme cluster.
    pub cursor: usize,
    pub kind: Option<InputDialogKind>,
}

impl InputDialogState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A destructive action parked behind the confirm dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    DeleteScreen(EntityId),
    DeleteSubScreen { screen: EntityId, sub: EntityId },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pub visible: bool,
    pub message: String,
    pub on_confirm: Option<PendingAction>,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub selection: Option<Selection>,
    /// Vertical scroll offset into the board, in terminal rows. Clamped by
    /// the renderer, which is the only layer that knows the content height.
    pub scroll: usize,
    pub input_dialog: InputDialogState,
    pub confirm_dialog: ConfirmDialogState,
    pub should_quit: bool,
}

#[derive(Debug)]
pub struct AppState {
    pub board: Board,
    pub ui: UiState,
}

impl AppState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            ui: UiState::default(),
        }
    }
}
