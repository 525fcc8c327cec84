//! Raw mode / 备用屏幕的生命周期
//!
//! drop、panic 展开或信号处理线程中任意一处触发恢复，且只恢复一次

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// 信号线程等待主循环自行退出的时长
const SIGNAL_GRACE: Duration = Duration::from_secs(2);

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use crossterm::event::{EnableBracketedPaste, EnableMouseCapture};
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};

        enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )
    }

    fn restore(&self) -> io::Result<()> {
        use crossterm::event::{DisableBracketedPaste, DisableMouseCapture};
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};

        // 每一步都执行，返回第一个错误
        let raw = disable_raw_mode();
        let screen = crossterm::execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        raw.and(screen)
    }
}

/// 可克隆的恢复句柄，终端最多恢复一次
#[derive(Clone)]
pub struct TerminalRestorer {
    done: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }

    pub fn is_restored(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        let restorer = TerminalRestorer {
            done: Arc::new(AtomicBool::new(false)),
            ops,
        };
        if let Err(err) = restorer.ops.setup() {
            // 初始化失败时撤销已完成的步骤
            let _ = restorer.restore();
            return Err(err);
        }
        Ok(Self { restorer })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl TerminationSignal {
    /// shell 约定的退出码（128 + 信号值）
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::Interrupt => 130,
            TerminationSignal::Terminate => 143,
        }
    }
}

/// 把 SIGINT/SIGTERM 转发到 `tx`
///
/// 宽限期后主循环仍未退出时，由信号线程恢复终端并结束进程
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: Sender<TerminationSignal>,
) -> io::Result<JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("signal-watcher".to_string())
        .spawn(move || {
            if let Some(raw) = signals.forever().next() {
                let signal = if raw == SIGINT {
                    TerminationSignal::Interrupt
                } else {
                    TerminationSignal::Terminate
                };
                tracing::info!(?signal, "termination signal received");
                let _ = tx.send(signal);

                std::thread::sleep(SIGNAL_GRACE);
                let _ = restorer.restore();
                std::process::exit(signal.exit_code());
            }
        })
}

#[cfg(not(unix))]
pub fn install_termination_signals(
    _restorer: TerminalRestorer,
    _tx: Sender<TerminationSignal>,
) -> io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("signal-watcher".to_string())
        .spawn(|| {})
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
