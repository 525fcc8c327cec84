//! 命令系统：语义命令定义
//!
//! 菜单、工具栏、快捷键最终都落到同一个 Command 上，
//! 由 kernel 的 Store 解释执行。

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== 光标移动 ====================
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    CursorFileStart,
    CursorFileEnd,
    PageUp,
    PageDown,

    // ==================== 编辑操作 ====================
    InsertChar(char),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,

    // ==================== 文件操作 ====================
    NewTab,
    OpenFile,
    Save,
    SaveAs,
    CloseTab,
    NextTab,
    PrevTab,

    // ==================== 系统操作 ====================
    OpenTerminal,
    Escape,
    Quit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::CursorFileStart => "cursorFileStart",
            Command::CursorFileEnd => "cursorFileEnd",
            Command::PageUp => "pageUp",
            Command::PageDown => "pageDown",
            Command::InsertChar(_) => "insertChar",
            Command::InsertNewline => "insertNewline",
            Command::InsertTab => "insertTab",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::NewTab => "newTab",
            Command::OpenFile => "openFile",
            Command::Save => "save",
            Command::SaveAs => "saveAs",
            Command::CloseTab => "closeTab",
            Command::NextTab => "nextTab",
            Command::PrevTab => "prevTab",
            Command::OpenTerminal => "openTerminal",
            Command::Escape => "escape",
            Command::Quit => "quit",
        }
    }

    /// 按名字解析命令（settings.json 的 keybindings 使用）。
    ///
    /// `insertChar` 需要参数，无法从名字构造。
    pub fn from_name(name: &str) -> Option<Self> {
        let cmd = match name.trim() {
            "cursorLeft" => Command::CursorLeft,
            "cursorRight" => Command::CursorRight,
            "cursorUp" => Command::CursorUp,
            "cursorDown" => Command::CursorDown,
            "cursorLineStart" => Command::CursorLineStart,
            "cursorLineEnd" => Command::CursorLineEnd,
            "cursorFileStart" => Command::CursorFileStart,
            "cursorFileEnd" => Command::CursorFileEnd,
            "pageUp" => Command::PageUp,
            "pageDown" => Command::PageDown,
            "insertNewline" => Command::InsertNewline,
            "insertTab" => Command::InsertTab,
            "deleteBackward" => Command::DeleteBackward,
            "deleteForward" => Command::DeleteForward,
            "newTab" => Command::NewTab,
            "openFile" => Command::OpenFile,
            "save" => Command::Save,
            "saveAs" => Command::SaveAs,
            "closeTab" => Command::CloseTab,
            "nextTab" => Command::NextTab,
            "prevTab" => Command::PrevTab,
            "openTerminal" => Command::OpenTerminal,
            "escape" => Command::Escape,
            "quit" => Command::Quit,
            _ => return None,
        };
        Some(cmd)
    }

    pub fn is_edit_command(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::InsertNewline
                | Command::InsertTab
                | Command::DeleteBackward
                | Command::DeleteForward
        )
    }

    pub fn is_cursor_command(&self) -> bool {
        matches!(
            self,
            Command::CursorLeft
                | Command::CursorRight
                | Command::CursorUp
                | Command::CursorDown
                | Command::CursorLineStart
                | Command::CursorLineEnd
                | Command::CursorFileStart
                | Command::CursorFileEnd
                | Command::PageUp
                | Command::PageDown
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
