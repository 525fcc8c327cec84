//! 核心抽象
//!
//! - Command: 语义命令（与按键无关）
//! - Event: 统一输入事件（与终端后端无关）

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{InputEvent, Key};
