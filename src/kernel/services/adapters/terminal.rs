//! 外部终端启动（启动后不再跟踪）

use crate::kernel::services::ports::config::TerminalConfig;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

pub trait TerminalLauncher {
    fn launch(&self, dir: &Path) -> io::Result<()>;
}

pub struct ProcessTerminalLauncher {
    config: TerminalConfig,
}

impl ProcessTerminalLauncher {
    pub fn new(config: TerminalConfig) -> Self {
        Self { config }
    }
}

impl TerminalLauncher for ProcessTerminalLauncher {
    fn launch(&self, dir: &Path) -> io::Result<()> {
        if self.config.program.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "no terminal program configured",
            ));
        }

        let mut cmd = Command::new(&self.config.program);
        cmd.args(self.config.expand_args(dir))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if dir.is_dir() {
            cmd.current_dir(dir);
        }

        let mut child = cmd.spawn()?;
        tracing::info!(
            program = %self.config.program,
            dir = %dir.display(),
            pid = child.id(),
            "terminal launched"
        );

        // 回收子进程，避免僵尸进程；退出状态不使用
        std::thread::Builder::new()
            .name("terminal-reaper".to_string())
            .spawn(move || {
                let _ = child.wait();
            })?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/terminal.rs"]
mod tests;
