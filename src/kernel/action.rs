use std::path::PathBuf;

use crate::core::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    RunCommand(Command),
    /// 打开指定路径（输入框或命令行参数）
    OpenPath(PathBuf),
    /// 另存为指定路径
    SaveAsPath(PathBuf),
    SelectTab(usize),
    /// 括号粘贴
    InsertText(String),
    SetTextAreaSize {
        width: u16,
        height: u16,
    },
    InputDialogAppend(char),
    InputDialogBackspace,
    InputDialogCursorLeft,
    InputDialogCursorRight,
    InputDialogAccept,
    ConfirmDialogAccept,
    ConfirmDialogCancel,
}
