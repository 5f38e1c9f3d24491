use unicode_segmentation::UnicodeSegmentation;

use crate::kernel::{Action, InputDialogKind, PendingAction};

impl super::Store {
    pub(super) fn open_input_dialog(&mut self, kind: InputDialogKind) -> super::DispatchResult {
        let prefill = match kind {
            InputDialogKind::RenameScreen(id) => self
                .state
                .board
                .screen(id)
                .map(|s| ("Rename screen", s.title.to_string())),
            InputDialogKind::RenameSubScreen { screen, sub } => self
                .state
                .board
                .screen(screen)
                .and_then(|s| s.sub_screens.iter().find(|x| x.id == sub))
                .map(|s| ("Rename sub-screen", s.title.to_string())),
            InputDialogKind::EditScreenDescription(id) => self
                .state
                .board
                .screen(id)
                .map(|s| ("Edit description", s.description.clone())),
            InputDialogKind::EditSubScreenDescription { screen, sub } => self
                .state
                .board
                .screen(screen)
                .and_then(|s| s.sub_screens.iter().find(|x| x.id == sub))
                .map(|s| ("Edit description", s.description.clone())),
        };

        let Some((title, value)) = prefill else {
            return super::DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            };
        };

        let dialog = &mut self.state.ui.input_dialog;
        dialog.visible = true;
        dialog.title = title.to_string();
        dialog.cursor = value.len();
        dialog.value = value;
        dialog.kind = Some(kind);
        super::DispatchResult {
            effects: Vec::new(),
            state_changed: true,
        }
    }

    pub(super) fn reduce_dialog_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::InputDialogAppend(ch) => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                dialog.value.insert(dialog.cursor, ch);
                dialog.cursor += ch.len_utf8();
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::InputDialogBackspace => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor == 0 {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                if let Some((start, grapheme)) =
                    dialog.value[..dialog.cursor].grapheme_indices(true).last()
                {
                    dialog.value.replace_range(start..start + grapheme.len(), "");
                    dialog.cursor = start;
                }
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::InputDialogCursorLeft => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor == 0 {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                if let Some((start, _)) =
                    dialog.value[..dialog.cursor].grapheme_indices(true).last()
                {
                    dialog.cursor = start;
                }
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::InputDialogCursorRight => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor >= dialog.value.len() {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                if let Some(grapheme) = dialog.value[dialog.cursor..].graphemes(true).next() {
                    dialog.cursor += grapheme.len();
                }
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::InputDialogAccept => {
                if !self.state.ui.input_dialog.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                let kind = self.state.ui.input_dialog.kind;
                let value = std::mem::take(&mut self.state.ui.input_dialog.value);
                self.state.ui.input_dialog.reset();

                let next = match kind {
                    Some(InputDialogKind::RenameScreen(id)) => {
                        self.state.board.rename_screen(id, &value)
                    }
                    Some(InputDialogKind::RenameSubScreen { screen, sub }) => {
                        self.state.board.rename_sub_screen(screen, sub, &value)
                    }
                    Some(InputDialogKind::EditScreenDescription(id)) => {
                        self.state.board.set_screen_description(id, &value)
                    }
                    Some(InputDialogKind::EditSubScreenDescription { screen, sub }) => {
                        self.state.board.set_sub_screen_description(screen, sub, &value)
                    }
                    None => None,
                };

                let mut result = self.commit_board(next, None);
                // Closing the dialog is a visible change even when the edit
                // itself was a no-op.
                result.state_changed = true;
                result
            }
            Action::InputDialogCancel => {
                if !self.state.ui.input_dialog.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                self.state.ui.input_dialog.reset();
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::ConfirmDialogAccept => {
                if !self.state.ui.confirm_dialog.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                let pending = self.state.ui.confirm_dialog.on_confirm.take();
                self.state.ui.confirm_dialog = Default::default();

                let mut result = match pending {
                    Some(PendingAction::DeleteScreen(screen)) => {
                        self.dispatch(Action::DeleteScreen { screen })
                    }
                    Some(PendingAction::DeleteSubScreen { screen, sub }) => {
                        self.dispatch(Action::DeleteSubScreen { screen, sub })
                    }
                    None => super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    },
                };
                result.state_changed = true;
                result
            }
            Action::ConfirmDialogCancel => {
                if !self.state.ui.confirm_dialog.visible {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                self.state.ui.confirm_dialog = Default::default();
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            _ => unreachable!("non-dialog action passed to reduce_dialog_action"),
        }
    }
}
