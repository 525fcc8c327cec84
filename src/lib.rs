//! zpad - 多标签终端文本编辑器库
//!
//! 模块结构：
//! - core: 核心类型（Command, InputEvent, Key）
//! - models: 数据模型（TextBuffer）
//! - kernel: 会话、缓冲区、Store 与服务端口/适配器
//! - tui: crossterm 输入转换与终端生命周期（feature `tui`）
//! - app: 应用层（Workbench，feature `tui`）

pub mod core;
pub mod kernel;
pub mod models;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
