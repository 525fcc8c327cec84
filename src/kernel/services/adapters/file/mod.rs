//! 文件服务模块
//!
//! 提供文件系统抽象，默认使用本地文件系统

pub mod local;
pub mod service;

pub use local::LocalFileProvider;
pub use service::FileService;
