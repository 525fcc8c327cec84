use crate::kernel::{Action, PendingAction};

use super::DispatchResult;

impl super::Store {
    pub(super) fn open_confirm_dialog(&mut self, message: String, on_confirm: PendingAction) {
        let dialog = &mut self.state.ui.confirm_dialog;
        dialog.visible = true;
        dialog.message = message;
        dialog.on_confirm = Some(on_confirm);
    }

    pub(super) fn reduce_confirm_dialog_action(&mut self, action: Action) -> DispatchResult {
        let dialog = &mut self.state.ui.confirm_dialog;
        if !dialog.visible {
            return DispatchResult::unchanged();
        }

        let pending = dialog.on_confirm.take();
        dialog.reset();
        if action != Action::ConfirmDialogAccept {
            return DispatchResult::changed(true);
        }

        match pending {
            Some(PendingAction::CloseTab { index }) => {
                self.state.session.close(index);
                self.scroll_current();
            }
            Some(PendingAction::Quit) => {
                self.state.ui.should_quit = true;
            }
            Some(PendingAction::OverwriteSaveAs { path }) => {
                self.save_current_as(&path);
            }
            None => {}
        }
        DispatchResult::changed(true)
    }
}
