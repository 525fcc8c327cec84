//! 配置服务：管理编辑器配置
//!
//! 启动时从 Settings 构造，运行期间只读取

use crate::kernel::services::ports::config::{EditorConfig, TerminalConfig};
use crate::kernel::services::ports::settings::Settings;

pub struct ConfigService {
    editor: EditorConfig,
    terminal: TerminalConfig,
}

impl ConfigService {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            editor: settings.editor.clone(),
            terminal: settings.terminal.clone(),
        }
    }

    pub fn editor(&self) -> &EditorConfig {
        &self.editor
    }

    pub fn terminal(&self) -> &TerminalConfig {
        &self.terminal
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/config.rs"]
mod tests;
