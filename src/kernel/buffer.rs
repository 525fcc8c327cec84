//! 单个打开的文档：文本 + 保存状态

use std::path::{Path, PathBuf};

use crate::kernel::services::adapters::FileService;
use crate::kernel::services::ports::FileResult;
use crate::models::TextBuffer;

pub const UNTITLED: &str = "Untitled";

/// 普通保存的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// 尚未关联路径，调用方需要询问路径并走另存为
    NeedsPath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMotion {
    Left,
    Right,
    Up(usize),
    Down(usize),
    LineStart,
    LineEnd,
    FileStart,
    FileEnd,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub top_row: usize,
    pub left_col: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Buffer {
    text: TextBuffer,
    path: Option<PathBuf>,
    last_saved: String,
    is_saved: bool,
    viewport: Viewport,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取 `path` 到新的 buffer
    pub fn from_file(files: &FileService, path: &Path) -> FileResult<Self> {
        let mut buffer = Self::new();
        buffer.load(files, path)?;
        Ok(buffer)
    }

    pub fn text(&self) -> &TextBuffer {
        &self.text
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn last_saved(&self) -> &str {
        &self.last_saved
    }

    /// 缓存的标记，见 [`Buffer::refresh_saved`]
    pub fn is_saved(&self) -> bool {
        self.is_saved
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// 标签是否显示未保存标记；从未编辑过的 Untitled 不显示
    pub fn shows_unsaved(&self) -> bool {
        !self.is_saved && (self.path.is_some() || !self.text.is_empty())
    }

    pub fn title(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    pub fn directory(&self) -> Option<&Path> {
        self.path
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
    }

    /// 重新计算 `is_saved = text == last_saved && path.is_some()`
    pub fn refresh_saved(&mut self) -> bool {
        self.is_saved = self.path.is_some() && self.text.eq_text(&self.last_saved);
        self.is_saved
    }

    pub fn load(&mut self, files: &FileService, path: &Path) -> FileResult<()> {
        let content = files.read_file(path)?;
        self.replace_with_loaded(path, content);
        Ok(())
    }

    pub(crate) fn replace_with_loaded(&mut self, path: &Path, content: String) {
        self.text = TextBuffer::from_text(&content);
        self.last_saved = content;
        self.path = Some(path.to_path_buf());
        self.is_saved = true;
        self.viewport = Viewport::default();
    }

    pub fn save(&mut self, files: &FileService) -> FileResult<SaveOutcome> {
        let Some(path) = self.path.clone() else {
            return Ok(SaveOutcome::NeedsPath);
        };
        let content = self.text.text();
        files.write_file(&path, &content)?;
        self.last_saved = content;
        self.is_saved = true;
        Ok(SaveOutcome::Saved(path))
    }

    pub fn save_as(&mut self, files: &FileService, path: &Path) -> FileResult<()> {
        let content = self.text.text();
        files.write_file(path, &content)?;
        self.path = Some(path.to_path_buf());
        self.last_saved = content;
        self.is_saved = true;
        Ok(())
    }

    /// 恢复到新建状态
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ==================== 编辑 ====================

    pub fn set_text(&mut self, text: &str) {
        self.text = TextBuffer::from_text(text);
        self.text.move_file_end();
        self.is_saved = false;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert_char(c);
        self.is_saved = false;
    }

    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.text.insert_str(s);
        self.is_saved = false;
    }

    pub fn delete_backward(&mut self) -> bool {
        let changed = self.text.delete_backward();
        if changed {
            self.is_saved = false;
        }
        changed
    }

    pub fn delete_forward(&mut self) -> bool {
        let changed = self.text.delete_forward();
        if changed {
            self.is_saved = false;
        }
        changed
    }

    pub fn move_cursor(&mut self, motion: CursorMotion) {
        match motion {
            CursorMotion::Left => self.text.move_left(),
            CursorMotion::Right => self.text.move_right(),
            CursorMotion::Up(n) => self.text.move_up(n),
            CursorMotion::Down(n) => self.text.move_down(n),
            CursorMotion::LineStart => self.text.move_line_start(),
            CursorMotion::LineEnd => self.text.move_line_end(),
            CursorMotion::FileStart => self.text.move_file_start(),
            CursorMotion::FileEnd => self.text.move_file_end(),
        }
    }

    /// 滚动视口，使光标留在 `width` x `height` 的文本区内，并尽量保留 `margin` 行上下文
    pub fn scroll_to_cursor(
        &mut self,
        width: usize,
        height: usize,
        margin: usize,
        tab_size: usize,
    ) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        let prev = self.viewport;
        let row = self.text.cursor().0;
        let col = self.text.cursor_display_col(tab_size);
        let margin = margin.min(height.saturating_sub(1) / 2);

        if row < self.viewport.top_row + margin {
            self.viewport.top_row = row.saturating_sub(margin);
        } else if row + margin >= self.viewport.top_row + height {
            self.viewport.top_row = row + margin + 1 - height;
        }

        if col < self.viewport.left_col {
            self.viewport.left_col = col;
        } else if col >= self.viewport.left_col + width {
            self.viewport.left_col = col + 1 - width;
        }

        self.viewport != prev
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/buffer.rs"]
mod tests;
