use crate::kernel::{Action, Effect, PendingAction};

impl super::Store {
    pub(super) fn reduce_board_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::AddScreen => {
                let next = self.state.board.add_screen();
                self.commit_board(
                    Some(next),
                    Some(Effect::notify(
                        "Screen added",
                        "A new screen has been added to the list",
                    )),
                )
            }
            Action::AddSubScreen { screen } => {
                let next = self.state.board.add_sub_screen(screen);
                self.commit_board(
                    next,
                    Some(Effect::notify(
                        "Sub-screen added",
                        "A new sub-screen has been added",
                    )),
                )
            }
            Action::RequestDeleteScreen { screen } => {
                let Some(target) = self.state.board.screen(screen) else {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };

                let message = if target.sub_screens.is_empty() {
                    format!("Delete screen \"{}\"?", target.title)
                } else {
                    format!(
                        "Delete screen \"{}\" and its {} sub-screen(s)?",
                        target.title,
                        target.sub_screens.len()
                    )
                };
                self.state.ui.confirm_dialog.visible = true;
                self.state.ui.confirm_dialog.message = message;
                self.state.ui.confirm_dialog.on_confirm =
                    Some(PendingAction::DeleteScreen(screen));
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::RequestDeleteSubScreen { screen, sub } => {
                let title = self.state.board.screen(screen).and_then(|s| {
                    s.sub_screens
                        .iter()
                        .find(|x| x.id == sub)
                        .map(|x| x.title.clone())
                });
                let Some(title) = title else {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };

                self.state.ui.confirm_dialog.visible = true;
                self.state.ui.confirm_dialog.message =
                    format!("Delete sub-screen \"{title}\"?");
                self.state.ui.confirm_dialog.on_confirm =
                    Some(PendingAction::DeleteSubScreen { screen, sub });
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::DeleteScreen { screen } => {
                let next = self.state.board.delete_screen(screen);
                self.commit_board(
                    next,
                    Some(Effect::notify("Screen deleted", "The screen has been removed")),
                )
            }
            Action::DeleteSubScreen { screen, sub } => {
                let next = self.state.board.delete_sub_screen(screen, sub);
                self.commit_board(
                    next,
                    Some(Effect::notify(
                        "Sub-screen deleted",
                        "The sub-screen has been removed",
                    )),
                )
            }
            Action::PromoteSubScreen { screen, sub } => {
                let next = self.state.board.promote_sub_screen(screen, sub, None);
                self.commit_board(
                    next,
                    Some(Effect::notify(
                        "Sub-screen promoted",
                        "The sub-screen has been converted to a main screen",
                    )),
                )
            }
            _ => unreachable!("non-board action passed to reduce_board_action"),
        }
    }
}
