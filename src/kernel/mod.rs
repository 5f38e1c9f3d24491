//! Headless application core (state/action/effect).
//!
//! Nothing in here touches the terminal; the shell dispatches [`Action`]s and
//! re-renders from [`AppState`], so the whole board logic is testable without
//! a TTY.

pub mod action;
pub mod effect;
pub mod gesture;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use gesture::{
    apply_gesture, classify, preview, Container, DragItem, DragPreview, GestureDescriptor,
    GestureOutcome, RejectReason, Transition,
};
pub use state::{
    AppState, ConfirmDialogState, InputDialogKind, InputDialogState, PendingAction, Selection,
    UiState,
};
pub use store::{DispatchResult, Store};
