use crate::kernel::gesture::{apply_gesture, GestureDescriptor, GestureOutcome, RejectReason};
use crate::kernel::{Effect, Transition};

fn notice_for(transition: Transition) -> Effect {
    match transition {
        Transition::ReorderScreens { .. } => Effect::notify(
            "Screen reordered",
            "The screen has been moved to a new position",
        ),
        Transition::ReorderSubScreens { .. } => Effect::notify(
            "Sub-screen reordered",
            "The sub-screen has been moved to a new position",
        ),
        Transition::MoveSubScreen { .. } => Effect::notify(
            "Sub-screen moved",
            "The sub-screen has been moved to another screen",
        ),
        Transition::PromoteSubScreen { .. } => Effect::notify(
            "Sub-screen promoted",
            "The sub-screen has been converted to a main screen",
        ),
        Transition::DemoteScreen { .. } => Effect::notify(
            "Screen demoted",
            "The screen is now a sub-screen of another screen",
        ),
    }
}

impl super::Store {
    pub(super) fn reduce_gesture(&mut self, gesture: GestureDescriptor) -> super::DispatchResult {
        match apply_gesture(&self.state.board, &gesture) {
            GestureOutcome::Committed { board, transition } => {
                tracing::debug!(?transition, "gesture committed");
                let state_changed = board != self.state.board;
                self.state.board = board;
                self.sanitize_selection();
                super::DispatchResult {
                    effects: vec![notice_for(transition)],
                    state_changed,
                }
            }
            GestureOutcome::Rejected(reason) => {
                tracing::debug!(?reason, "gesture rejected");
                let effects = match reason {
                    RejectReason::SelfNesting => vec![Effect::notify(
                        "Drop rejected",
                        "A screen cannot become its own sub-screen",
                    )],
                    RejectReason::LastScreen => vec![Effect::notify(
                        "Drop rejected",
                        "The last remaining screen cannot be demoted",
                    )],
                    // Cancelled and stale drops are silent: nothing happened.
                    RejectReason::Cancelled
                    | RejectReason::SourceMismatch
                    | RejectReason::Stale => Vec::new(),
                };
                super::DispatchResult {
                    effects,
                    state_changed: false,
                }
            }
        }
    }
}
