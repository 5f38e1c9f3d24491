use crate::core::Command;
use crate::models::Board;

use super::{Action, AppState, Effect, InputDialogKind, Selection};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::CommitGesture(gesture) => self.reduce_gesture(gesture),
            Action::AddScreen
            | Action::AddSubScreen { .. }
            | Action::RequestDeleteScreen { .. }
            | Action::RequestDeleteSubScreen { .. }
            | Action::DeleteScreen { .. }
            | Action::DeleteSubScreen { .. }
            | Action::PromoteSubScreen { .. } => self.reduce_board_action(action),
            Action::InputDialogAppend(_)
            | Action::InputDialogBackspace
            | Action::InputDialogCursorLeft
            | Action::InputDialogCursorRight
            | Action::InputDialogAccept
            | Action::InputDialogCancel
            | Action::ConfirmDialogAccept
            | Action::ConfirmDialogCancel => self.reduce_dialog_action(action),
            Action::SelectScreen { screen } => {
                let next = self
                    .state
                    .board
                    .screen(screen)
                    .map(|s| Selection::Screen(s.id));
                let prev = self.state.ui.selection;
                if next.is_some() {
                    self.state.ui.selection = next;
                }
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: self.state.ui.selection != prev,
                }
            }
            Action::SelectSubScreen { screen, sub } => {
                let valid = self
                    .state
                    .board
                    .screen(screen)
                    .is_some_and(|s| s.sub_screens.iter().any(|x| x.id == sub));
                let prev = self.state.ui.selection;
                if valid {
                    self.state.ui.selection = Some(Selection::SubScreen { screen, sub });
                }
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: self.state.ui.selection != prev,
                }
            }
            Action::MoveSelection { delta } => self.move_selection(delta),
            Action::Scroll { delta } => {
                let prev = self.state.ui.scroll;
                self.state.ui.scroll = self.state.ui.scroll.saturating_add_signed(delta);
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: self.state.ui.scroll != prev,
                }
            }
        }
    }

    fn dispatch_command(&mut self, cmd: Command) -> DispatchResult {
        match cmd {
            Command::Quit => {
                self.state.ui.should_quit = true;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Command::Escape => {
                if self.state.ui.input_dialog.visible {
                    return self.reduce_dialog_action(Action::InputDialogCancel);
                }
                if self.state.ui.confirm_dialog.visible {
                    return self.reduce_dialog_action(Action::ConfirmDialogCancel);
                }
                let had_selection = self.state.ui.selection.take().is_some();
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: had_selection,
                }
            }
            Command::AddScreen => self.reduce_board_action(Action::AddScreen),
            Command::AddSubScreen => match self.state.ui.selection {
                Some(selection) => self.reduce_board_action(Action::AddSubScreen {
                    screen: selection.screen_id(),
                }),
                None => DispatchResult {
                    effects: Vec::new(),
                    state_changed: false,
                },
            },
            Command::DeleteSelected => match self.state.ui.selection {
                Some(Selection::Screen(screen)) => {
                    self.reduce_board_action(Action::RequestDeleteScreen { screen })
                }
                Some(Selection::SubScreen { screen, sub }) => {
                    self.reduce_board_action(Action::RequestDeleteSubScreen { screen, sub })
                }
                None => DispatchResult {
                    effects: Vec::new(),
                    state_changed: false,
                },
            },
            Command::RenameSelected => match self.state.ui.selection {
                Some(Selection::Screen(screen)) => {
                    self.open_input_dialog(InputDialogKind::RenameScreen(screen))
                }
                Some(Selection::SubScreen { screen, sub }) => {
                    self.open_input_dialog(InputDialogKind::RenameSubScreen { screen, sub })
                }
                None => DispatchResult {
                    effects: Vec::new(),
                    state_changed: false,
                },
            },
            Command::EditDescription => match self.state.ui.selection {
                Some(Selection::Screen(screen)) => {
                    self.open_input_dialog(InputDialogKind::EditScreenDescription(screen))
                }
                Some(Selection::SubScreen { screen, sub }) => {
                    self.open_input_dialog(InputDialogKind::EditSubScreenDescription {
                        screen,
                        sub,
                    })
                }
                None => DispatchResult {
                    effects: Vec::new(),
                    state_changed: false,
                },
            },
            Command::PromoteSelected => match self.state.ui.selection {
                Some(Selection::SubScreen { screen, sub }) => {
                    self.reduce_board_action(Action::PromoteSubScreen { screen, sub })
                }
                _ => DispatchResult {
                    effects: Vec::new(),
                    state_changed: false,
                },
            },
            Command::SelectionUp => self.move_selection(-1),
            Command::SelectionDown => self.move_selection(1),
            Command::ScrollUp => self.dispatch(Action::Scroll { delta: -1 }),
            Command::ScrollDown => self.dispatch(Action::Scroll { delta: 1 }),
        }
    }

    /// Walk the selection through the board in display order: each screen,
    /// then its sub-screens.
    fn move_selection(&mut self, delta: isize) -> DispatchResult {
        let mut entries: Vec<Selection> = Vec::new();
        for screen in self.state.board.screens() {
            entries.push(Selection::Screen(screen.id));
            for sub in &screen.sub_screens {
                entries.push(Selection::SubScreen {
                    screen: screen.id,
                    sub: sub.id,
                });
            }
        }

        if entries.is_empty() {
            return DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            };
        }

        let prev = self.state.ui.selection;
        let next_ix = match prev.and_then(|sel| entries.iter().position(|e| *e == sel)) {
            Some(current) => {
                let len = entries.len() as isize;
                (current as isize + delta).clamp(0, len - 1) as usize
            }
            // No (valid) selection yet: enter the list from the end we moved
            // towards.
            None if delta >= 0 => 0,
            None => entries.len() - 1,
        };

        self.state.ui.selection = Some(entries[next_ix]);
        DispatchResult {
            effects: Vec::new(),
            state_changed: self.state.ui.selection != prev,
        }
    }

    /// Commit the result of a pure board operation. `None` keeps the current
    /// board untouched (rejected / target vanished).
    pub(super) fn commit_board(
        &mut self,
        next: Option<Board>,
        notice: Option<Effect>,
    ) -> DispatchResult {
        let Some(next) = next else {
            return DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            };
        };

        let state_changed = next != self.state.board;
        self.state.board = next;
        self.sanitize_selection();
        DispatchResult {
            effects: notice.into_iter().collect(),
            state_changed,
        }
    }

    /// Drop the selection when the selected entity no longer exists (deleted,
    /// or converted by a promote/demote).
    pub(super) fn sanitize_selection(&mut self) {
        let board = &self.state.board;
        let valid = match self.state.ui.selection {
            None => true,
            Some(Selection::Screen(id)) => board.screen(id).is_some(),
            Some(Selection::SubScreen { screen, sub }) => board
                .screen(screen)
                .is_some_and(|s| s.sub_screens.iter().any(|x| x.id == sub)),
        };
        if !valid {
            self.state.ui.selection = None;
        }
    }
}

mod board;
mod dialog;
mod gesture;

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
