use std::path::PathBuf;

use crate::kernel::services::ports::EditorConfig;
use crate::kernel::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Editor,
    InputDialog,
    ConfirmDialog,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputDialogKind {
    OpenFile,
    SaveAs,
}

#[derive(Debug, Clone, Default)]
pub struct InputDialogState {
    pub visible: bool,
    pub title: String,
    pub value: String,
    /// `value` 中的字节偏移
    pub cursor: usize,
    pub error: Option<String>,
    pub kind: Option<InputDialogKind>,
}

impl InputDialogState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    CloseTab { index: usize },
    Quit,
    OverwriteSaveAs { path: PathBuf },
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmDialogState {
    pub visible: bool,
    pub message: String,
    pub on_confirm: Option<PendingAction>,
}

impl ConfirmDialogState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// 文本区尺寸（单元格），由前端最近一次上报
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAreaSize {
    pub width: u16,
    pub height: u16,
}

impl Default for TextAreaSize {
    fn default() -> Self {
        Self {
            width: 80,
            height: 20,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub input_dialog: InputDialogState,
    pub confirm_dialog: ConfirmDialogState,
    pub notification: Option<Notification>,
    pub text_area: TextAreaSize,
    pub should_quit: bool,
}

impl UiState {
    pub fn focus(&self) -> FocusTarget {
        if self.confirm_dialog.visible {
            FocusTarget::ConfirmDialog
        } else if self.input_dialog.visible {
            FocusTarget::InputDialog
        } else {
            FocusTarget::Editor
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    /// 工作目录：解析相对路径，也是输入框和终端的后备目录
    pub cwd: PathBuf,
    pub session: Session,
    pub ui: UiState,
    pub editor_config: EditorConfig,
}

impl AppState {
    pub fn new(cwd: PathBuf, editor_config: EditorConfig) -> Self {
        Self {
            cwd,
            session: Session::new(),
            ui: UiState::default(),
            editor_config,
        }
    }

    /// 路径输入框和外部终端的起始目录
    pub fn working_dir(&self) -> PathBuf {
        self.session
            .current_dir()
            .unwrap_or_else(|| self.cwd.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
