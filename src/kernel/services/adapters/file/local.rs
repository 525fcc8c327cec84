//! 本地文件系统 Provider
//!
//! 实现 FileProvider trait：每次读写都是一次性打开、读/写、关闭，不持有句柄
//! 写入不会创建缺失的父目录

use crate::kernel::services::ports::file::{FileError, FileProvider, Result};
use std::fs;
use std::path::Path;

pub struct LocalFileProvider;

impl LocalFileProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileProvider for LocalFileProvider {
    fn read_file(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(FileError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(FileError::NotAFile(path.to_path_buf()));
        }
        fs::read_to_string(path).map_err(|e| FileError::from_io(e, path))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(FileError::InvalidPath(String::new()));
        }
        if path.is_dir() {
            return Err(FileError::NotAFile(path.to_path_buf()));
        }
        fs::write(path, content).map_err(|e| FileError::from_io(e, path))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/local.rs"]
mod tests;
