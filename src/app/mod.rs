//! 应用层：Workbench 把终端输入翻译成 kernel Action，执行 Effect，并负责渲染。

mod workbench;

pub use workbench::{EventResult, Workbench};
