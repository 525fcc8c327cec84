//! 文件服务：对外统一的文件读写入口
//!
//! 默认后端是本地文件系统；测试可注入其他 Provider

use super::local::LocalFileProvider;
use crate::kernel::services::ports::file::{FileProvider, Result};
use std::path::Path;

pub struct FileService {
    provider: Box<dyn FileProvider>,
}

impl FileService {
    pub fn new() -> Self {
        Self::with_provider(Box::new(LocalFileProvider::new()))
    }

    /// 以给定 Provider 作为后端
    pub fn with_provider(provider: Box<dyn FileProvider>) -> Self {
        Self { provider }
    }

    pub fn read_file(&self, path: &Path) -> Result<String> {
        self.provider.read_file(path)
    }

    pub fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        self.provider.write_file(path, content)
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.provider.exists(path)
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.provider.is_dir(path)
    }

    pub fn is_file(&self, path: &Path) -> bool {
        self.provider.is_file(path)
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/service.rs"]
mod tests;
