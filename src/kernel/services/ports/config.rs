use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub tab_size: u8,
    pub show_line_numbers: bool,
    /// 关闭含未保存修改的标签（或退出）前是否确认
    pub confirm_close_unsaved: bool,
    /// 滚动时光标与视口边缘保留的行数
    pub scroll_margin: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: 4,
            show_line_numbers: true,
            confirm_close_unsaved: false,
            scroll_margin: 2,
        }
    }
}

impl EditorConfig {
    pub fn tab_string(&self) -> String {
        " ".repeat(self.tab_size.max(1) as usize)
    }
}

/// `openTerminal` 启动的外部终端
///
/// `args` 中的每个 `{dir}` 替换为目标目录
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for TerminalConfig {
    #[cfg(target_os = "macos")]
    fn default() -> Self {
        Self {
            program: "open".to_string(),
            args: vec!["-a".to_string(), "Terminal".to_string(), "{dir}".to_string()],
        }
    }

    #[cfg(target_os = "windows")]
    fn default() -> Self {
        Self {
            program: "cmd".to_string(),
            args: vec!["/C".to_string(), "start".to_string(), "cmd".to_string()],
        }
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    fn default() -> Self {
        Self {
            program: "gnome-terminal".to_string(),
            args: vec![
                "--maximize".to_string(),
                "--working-directory={dir}".to_string(),
            ],
        }
    }
}

impl TerminalConfig {
    pub fn expand_args(&self, dir: &Path) -> Vec<String> {
        let dir = dir.to_string_lossy();
        self.args
            .iter()
            .map(|arg| arg.replace("{dir}", &dir))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
