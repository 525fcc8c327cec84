use std::path::MAIN_SEPARATOR;

use crate::kernel::services::adapters::resolve_user_path;
use crate::kernel::{Action, InputDialogKind};

impl super::Store {
    pub(super) fn open_input_dialog(&mut self, kind: InputDialogKind) {
        let title = match kind {
            InputDialogKind::OpenFile => "Open file",
            InputDialogKind::SaveAs => "Save as",
        };
        let value = match (&kind, self.state.session.current().path()) {
            (InputDialogKind::SaveAs, Some(path)) => path.display().to_string(),
            _ => {
                let mut dir = self.state.working_dir().display().to_string();
                if !dir.ends_with(MAIN_SEPARATOR) {
                    dir.push(MAIN_SEPARATOR);
                }
                dir
            }
        };

        let dialog = &mut self.state.ui.input_dialog;
        dialog.visible = true;
        dialog.title = title.to_string();
        dialog.cursor = value.len();
        dialog.value = value;
        dialog.error = None;
        dialog.kind = Some(kind);
    }

    pub(super) fn reduce_input_dialog_action(&mut self, action: Action) -> bool {
        match action {
            Action::InputDialogAppend(ch) => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return false;
                }

                dialog.error = None;
                if dialog.cursor > dialog.value.len() {
                    dialog.cursor = dialog.value.len();
                }
                dialog.value.insert(dialog.cursor, ch);
                dialog.cursor += ch.len_utf8();
                true
            }
            Action::InputDialogBackspace => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor == 0 {
                    return false;
                }

                dialog.error = None;
                let prev = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                dialog.value.drain(prev..dialog.cursor);
                dialog.cursor = prev;
                true
            }
            Action::InputDialogCursorLeft => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor == 0 {
                    return false;
                }

                let prev = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                let changed = prev != dialog.cursor;
                dialog.cursor = prev;
                changed
            }
            Action::InputDialogCursorRight => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor >= dialog.value.len() {
                    return false;
                }

                let next = dialog.value[dialog.cursor..]
                    .chars()
                    .next()
                    .map(|ch| dialog.cursor + ch.len_utf8())
                    .unwrap_or(dialog.value.len());
                let changed = next != dialog.cursor;
                dialog.cursor = next;
                changed
            }
            Action::InputDialogAccept => self.accept_input_dialog(),
            _ => false,
        }
    }

    fn accept_input_dialog(&mut self) -> bool {
        let dialog = &mut self.state.ui.input_dialog;
        if !dialog.visible {
            return false;
        }

        let Some(kind) = dialog.kind.clone() else {
            dialog.reset();
            return true;
        };

        if dialog.value.trim().is_empty() {
            let prev = dialog.error.replace("Path required".to_string());
            return prev.as_deref() != dialog.error.as_deref();
        }

        let path = resolve_user_path(&dialog.value, &self.state.cwd);
        if self.files.is_dir(&path) {
            let dialog = &mut self.state.ui.input_dialog;
            let prev = dialog.error.replace("Is a directory".to_string());
            return prev.as_deref() != dialog.error.as_deref();
        }

        self.state.ui.input_dialog.reset();
        match kind {
            InputDialogKind::OpenFile => self.open_path(&path),
            InputDialogKind::SaveAs => self.request_save_as(path),
        };
        true
    }
}
