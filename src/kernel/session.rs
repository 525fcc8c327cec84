//! 打开的 buffer 集合：每个标签一个，始终恰有一个当前标签

use std::path::{Path, PathBuf};

use crate::kernel::buffer::{Buffer, SaveOutcome};
use crate::kernel::services::adapters::FileService;
use crate::kernel::services::ports::FileResult;

#[derive(Debug, Clone)]
pub struct Session {
    buffers: Vec<Buffer>,
    current: usize,
}

impl Session {
    pub fn new() -> Self {
        Self {
            buffers: vec![Buffer::new()],
            current: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// 恒为 false：会话至少保留一个 buffer
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    pub fn buffers(&self) -> &[Buffer] {
        &self.buffers
    }

    pub fn get(&self, index: usize) -> Option<&Buffer> {
        self.buffers.get(index)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Buffer {
        &self.buffers[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Buffer {
        &mut self.buffers[self.current]
    }

    /// 当前 buffer 文件所在目录（若有）
    pub fn current_dir(&self) -> Option<PathBuf> {
        self.current().directory().map(Path::to_path_buf)
    }

    pub fn any_unsaved(&self) -> bool {
        self.buffers.iter().any(Buffer::shows_unsaved)
    }

    pub fn new_tab(&mut self) -> usize {
        self.buffers.push(Buffer::new());
        self.current = self.buffers.len() - 1;
        tracing::debug!(index = self.current, "new tab");
        self.current
    }

    /// 打开 `path`，返回显示它的标签下标
    ///
    /// 唯一且为空的标签会被复用，否则追加新标签；读取失败时状态不变
    pub fn open(&mut self, files: &FileService, path: &Path) -> FileResult<usize> {
        let content = files.read_file(path)?;

        let reuse = self.buffers.len() == 1 && self.buffers[0].text().is_empty();
        if reuse {
            self.current = 0;
        } else {
            self.buffers.push(Buffer::new());
            self.current = self.buffers.len() - 1;
        }
        self.buffers[self.current].replace_with_loaded(path, content);

        tracing::info!(path = %path.display(), index = self.current, reuse, "file opened");
        Ok(self.current)
    }

    pub fn save_current(&mut self, files: &FileService) -> FileResult<SaveOutcome> {
        let buffer = self.current_mut();
        buffer.refresh_saved();
        let outcome = buffer.save(files)?;
        if let SaveOutcome::Saved(path) = &outcome {
            tracing::info!(path = %path.display(), "file saved");
        }
        Ok(outcome)
    }

    pub fn save_current_as(&mut self, files: &FileService, path: &Path) -> FileResult<()> {
        self.current_mut().save_as(files, path)?;
        tracing::info!(path = %path.display(), "file saved as");
        Ok(())
    }

    pub fn close_current(&mut self) {
        let index = self.current;
        self.close(index);
    }

    /// 关闭 `index` 处的标签；只剩一个标签时原地重置
    ///
    /// 未保存的修改直接丢弃
    pub fn close(&mut self, index: usize) -> bool {
        if index >= self.buffers.len() {
            return false;
        }

        if self.buffers.len() == 1 {
            self.buffers[0].reset();
            self.current = 0;
            tracing::info!("last tab reset");
            return true;
        }

        self.buffers.remove(index);
        if self.current > index || (self.current == index && index > 0) {
            self.current -= 1;
        }
        self.current = self.current.min(self.buffers.len() - 1);
        tracing::info!(index, remaining = self.buffers.len(), "tab closed");
        true
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.buffers.len() || index == self.current {
            return false;
        }
        self.current = index;
        true
    }

    pub fn next_tab(&mut self) -> bool {
        let next = (self.current + 1) % self.buffers.len();
        self.select(next)
    }

    pub fn prev_tab(&mut self) -> bool {
        let len = self.buffers.len();
        let prev = (self.current + len - 1) % len;
        self.select(prev)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
