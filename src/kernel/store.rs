use std::path::{Path, PathBuf};

use crate::core::Command;
use crate::kernel::buffer::{CursorMotion, SaveOutcome};
use crate::kernel::services::adapters::FileService;

use super::{
    Action, AppState, Effect, InputDialogKind, Notification, PendingAction,
};

mod confirm_dialog;
mod input_dialog;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn unchanged() -> Self {
        Self::changed(false)
    }
}

pub struct Store {
    state: AppState,
    files: FileService,
}

impl Store {
    pub fn new(state: AppState, files: FileService) -> Self {
        Self { state, files }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn files(&self) -> &FileService {
        &self.files
    }

    /// 记录前端侧的失败（如终端启动失败）
    pub fn notify(&mut self, notification: Notification) {
        self.state.ui.notification = Some(notification);
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => {
                let cleared = self.state.ui.notification.take().is_some();
                let mut result = self.dispatch_command(cmd);
                result.state_changed |= cleared;
                result
            }
            Action::OpenPath(path) => DispatchResult::changed(self.open_path(&path)),
            Action::SaveAsPath(path) => DispatchResult::changed(self.request_save_as(path)),
            Action::SelectTab(index) => {
                let changed = self.state.session.select(index);
                if changed {
                    self.scroll_current();
                }
                DispatchResult::changed(changed)
            }
            Action::InsertText(text) => {
                // 确认框打开时当前 buffer 不接受输入
                if self.state.ui.confirm_dialog.visible {
                    return DispatchResult::unchanged();
                }
                if self.state.ui.input_dialog.visible {
                    let mut changed = false;
                    for ch in text.chars().filter(|ch| !ch.is_control()) {
                        changed |= self.reduce_input_dialog_action(Action::InputDialogAppend(ch));
                    }
                    return DispatchResult::changed(changed);
                }
                if text.is_empty() {
                    return DispatchResult::unchanged();
                }
                // 粘贴内容统一为 \n；文件原有的换行保持不变
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                self.state.session.current_mut().insert_str(&text);
                self.after_edit();
                DispatchResult::changed(true)
            }
            Action::SetTextAreaSize { width, height } => {
                let size = &mut self.state.ui.text_area;
                if size.width == width && size.height == height {
                    return DispatchResult::unchanged();
                }
                size.width = width;
                size.height = height;
                self.scroll_current();
                DispatchResult::changed(true)
            }
            Action::InputDialogAppend(_)
            | Action::InputDialogBackspace
            | Action::InputDialogCursorLeft
            | Action::InputDialogCursorRight
            | Action::InputDialogAccept => {
                DispatchResult::changed(self.reduce_input_dialog_action(action))
            }
            Action::ConfirmDialogAccept | Action::ConfirmDialogCancel => {
                self.reduce_confirm_dialog_action(action)
            }
        }
    }

    fn dispatch_command(&mut self, cmd: Command) -> DispatchResult {
        if cmd.is_cursor_command() {
            return DispatchResult::changed(self.move_cursor(&cmd));
        }
        if cmd.is_edit_command() {
            return DispatchResult::changed(self.edit(&cmd));
        }

        match cmd {
            Command::NewTab => {
                self.state.session.new_tab();
                DispatchResult::changed(true)
            }
            Command::OpenFile => {
                self.open_input_dialog(InputDialogKind::OpenFile);
                DispatchResult::changed(true)
            }
            Command::Save => DispatchResult::changed(self.save_current()),
            Command::SaveAs => {
                self.open_input_dialog(InputDialogKind::SaveAs);
                DispatchResult::changed(true)
            }
            Command::CloseTab => DispatchResult::changed(self.request_close_current()),
            Command::NextTab => {
                let changed = self.state.session.next_tab();
                self.scroll_current();
                DispatchResult::changed(changed)
            }
            Command::PrevTab => {
                let changed = self.state.session.prev_tab();
                self.scroll_current();
                DispatchResult::changed(changed)
            }
            Command::OpenTerminal => {
                let dir = self.state.working_dir();
                tracing::debug!(dir = %dir.display(), "terminal requested");
                DispatchResult {
                    effects: vec![Effect::SpawnTerminal { dir }],
                    state_changed: false,
                }
            }
            Command::Quit => DispatchResult::changed(self.request_quit()),
            Command::Escape => {
                let ui = &mut self.state.ui;
                if ui.confirm_dialog.visible {
                    ui.confirm_dialog.reset();
                    DispatchResult::changed(true)
                } else if ui.input_dialog.visible {
                    ui.input_dialog.reset();
                    DispatchResult::changed(true)
                } else {
                    DispatchResult::unchanged()
                }
            }
            _ => DispatchResult::unchanged(),
        }
    }

    fn move_cursor(&mut self, cmd: &Command) -> bool {
        let page = (self.state.ui.text_area.height as usize).max(1);
        let motion = match cmd {
            Command::CursorLeft => CursorMotion::Left,
            Command::CursorRight => CursorMotion::Right,
            Command::CursorUp => CursorMotion::Up(1),
            Command::CursorDown => CursorMotion::Down(1),
            Command::CursorLineStart => CursorMotion::LineStart,
            Command::CursorLineEnd => CursorMotion::LineEnd,
            Command::CursorFileStart => CursorMotion::FileStart,
            Command::CursorFileEnd => CursorMotion::FileEnd,
            Command::PageUp => CursorMotion::Up(page),
            Command::PageDown => CursorMotion::Down(page),
            _ => return false,
        };

        let buffer = self.state.session.current_mut();
        let before = buffer.text().cursor();
        buffer.move_cursor(motion);
        let moved = buffer.text().cursor() != before;
        let scrolled = self.scroll_current();
        moved || scrolled
    }

    fn edit(&mut self, cmd: &Command) -> bool {
        let tab = self.state.editor_config.tab_string();
        let buffer = self.state.session.current_mut();
        let changed = match cmd {
            Command::InsertChar(ch) => {
                buffer.insert_char(*ch);
                true
            }
            Command::InsertNewline => {
                buffer.insert_char('\n');
                true
            }
            Command::InsertTab => {
                buffer.insert_str(&tab);
                true
            }
            Command::DeleteBackward => buffer.delete_backward(),
            Command::DeleteForward => buffer.delete_forward(),
            _ => false,
        };
        if changed {
            self.after_edit();
        }
        changed
    }

    fn after_edit(&mut self) {
        // 手动改回原文时清除未保存标记
        self.state.session.current_mut().refresh_saved();
        self.scroll_current();
    }

    fn scroll_current(&mut self) -> bool {
        let size = self.state.ui.text_area;
        let config = &self.state.editor_config;
        let (margin, tab_size) = (config.scroll_margin, config.tab_size as usize);
        self.state.session.current_mut().scroll_to_cursor(
            size.width as usize,
            size.height as usize,
            margin,
            tab_size,
        )
    }

    fn open_path(&mut self, path: &Path) -> bool {
        match self.state.session.open(&self.files, path) {
            Ok(_) => {
                self.scroll_current();
                true
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "open failed");
                self.state.ui.notification =
                    Some(Notification::error(format!("Cannot open file: {}", err)));
                true
            }
        }
    }

    fn save_current(&mut self) -> bool {
        match self.state.session.save_current(&self.files) {
            Ok(SaveOutcome::Saved(path)) => {
                self.state.ui.notification =
                    Some(Notification::info(format!("Saved {}", path.display())));
                true
            }
            Ok(SaveOutcome::NeedsPath) => {
                self.open_input_dialog(InputDialogKind::SaveAs);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "save failed");
                self.state.ui.notification =
                    Some(Notification::error(format!("Cannot save file: {}", err)));
                true
            }
        }
    }

    /// Save As 目标已选定；目标是其他已存在文件时先确认覆盖
    fn request_save_as(&mut self, path: PathBuf) -> bool {
        let own = self.state.session.current().path() == Some(path.as_path());
        if !own && self.files.is_file(&path) {
            self.open_confirm_dialog(
                format!("{} already exists. Overwrite?", path.display()),
                PendingAction::OverwriteSaveAs { path },
            );
            return true;
        }
        self.save_current_as(&path)
    }

    fn save_current_as(&mut self, path: &Path) -> bool {
        match self.state.session.save_current_as(&self.files, path) {
            Ok(()) => {
                self.state.ui.notification =
                    Some(Notification::info(format!("Saved {}", path.display())));
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "save as failed");
                self.state.ui.notification =
                    Some(Notification::error(format!("Cannot save file: {}", err)));
            }
        }
        true
    }

    fn request_close_current(&mut self) -> bool {
        let index = self.state.session.current_index();
        let buffer = self.state.session.current();
        if self.state.editor_config.confirm_close_unsaved && buffer.shows_unsaved() {
            let message = format!("{} has unsaved changes. Close anyway?", buffer.title());
            self.open_confirm_dialog(message, PendingAction::CloseTab { index });
            return true;
        }
        self.state.session.close(index);
        self.scroll_current();
        true
    }

    fn request_quit(&mut self) -> bool {
        if self.state.editor_config.confirm_close_unsaved && self.state.session.any_unsaved() {
            self.open_confirm_dialog(
                "There are unsaved changes. Quit anyway?".to_string(),
                PendingAction::Quit,
            );
            return true;
        }
        self.state.ui.should_quit = true;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
