//! 文件系统 Provider trait
//!
//! 抽象整文件读写，便于测试时替换为内存实现或注入故障

use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug)]
pub enum FileError {
    Io(io::Error),
    NotFound(PathBuf),
    PermissionDenied(PathBuf),
    NotAFile(PathBuf),
    InvalidPath(String),
}

impl FileError {
    /// 附带路径信息，便于状态栏提示
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied(path.to_path_buf()),
            _ => FileError::Io(err),
        }
    }
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::Io(e) => write!(f, "IO error: {}", e),
            FileError::NotFound(p) => write!(f, "Not found: {}", p.display()),
            FileError::PermissionDenied(p) => write!(f, "Permission denied: {}", p.display()),
            FileError::NotAFile(p) => write!(f, "Not a file: {}", p.display()),
            FileError::InvalidPath(s) => write!(f, "Invalid path: {}", s),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FileError {
    fn from(e: io::Error) -> Self {
        FileError::Io(e)
    }
}

pub trait FileProvider: Send + Sync {
    fn read_file(&self, path: &Path) -> Result<String>;

    /// 整体覆盖写入，不做原子替换
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/file.rs"]
mod tests;
