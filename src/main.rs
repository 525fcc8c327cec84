use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use zpad::app::Workbench;
use zpad::kernel::services::adapters::{
    ensure_settings_file, load_settings, resolve_user_path, ConfigService, KeybindingService,
    ProcessTerminalLauncher,
};
use zpad::kernel::services::ports::Settings;
use zpad::tui::crossterm::input_event;
use zpad::tui::terminal_guard::{install_termination_signals, TerminalGuard};

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

const USAGE: &str = "usage: zpad [FILE]...\n\nOpens each FILE in its own tab.";

#[derive(Debug, PartialEq, Eq)]
enum CliCommand {
    Help,
    Version,
    Edit(Vec<String>),
}

fn parse_args(args: impl IntoIterator<Item = String>) -> CliCommand {
    let mut files = Vec::new();
    let mut only_files = false;
    for arg in args {
        if only_files {
            files.push(arg);
            continue;
        }
        match arg.as_str() {
            "-h" | "--help" => return CliCommand::Help,
            "-V" | "--version" => return CliCommand::Version,
            "--" => only_files = true,
            _ => files.push(arg),
        }
    }
    CliCommand::Edit(files)
}

fn resolve_startup_files(cwd: &Path, args: &[String]) -> Vec<PathBuf> {
    args.iter()
        .filter(|arg| !arg.trim().is_empty())
        .map(|arg| resolve_user_path(arg, cwd))
        .collect()
}

fn load_startup_settings() -> Settings {
    if let Err(err) = ensure_settings_file() {
        tracing::warn!(error = %err, "cannot create settings file");
    }
    load_settings().unwrap_or_default()
}

fn main() -> io::Result<()> {
    let files = match parse_args(std::env::args().skip(1)) {
        CliCommand::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        CliCommand::Version => {
            println!("zpad {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        CliCommand::Edit(files) => files,
    };

    let _logging = logging::init();

    let cwd = std::env::current_dir()?;
    let settings = load_startup_settings();
    let config = ConfigService::from_settings(&settings);
    let keybindings = KeybindingService::with_rules(&settings.keybindings);
    let launcher = ProcessTerminalLauncher::new(config.terminal().clone());

    let mut workbench = Workbench::new(cwd.clone(), &config, keybindings, Box::new(launcher));
    workbench.open_paths(&resolve_startup_files(&cwd, &files));

    let guard = TerminalGuard::new()?;
    let restorer = guard.restorer();
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restorer.restore();
        previous_hook(info);
    }));

    let (signal_tx, signal_rx) = mpsc::channel();
    let _signals = install_termination_signals(guard.restorer(), signal_tx)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut dirty = true;

    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, "exiting on signal");
            break;
        }

        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                workbench.render(frame, area);
            })?;
            dirty = false;
        }

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Some(event) = input_event(crossterm::event::read()?) else {
            continue;
        };

        let result = workbench.handle_input(&event);
        if result.is_quit() {
            break;
        }
        dirty = true;
    }

    tracing::info!("zpad exiting");
    drop(terminal);
    drop(guard);
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/cli_startup_paths.rs"]
mod tests;
