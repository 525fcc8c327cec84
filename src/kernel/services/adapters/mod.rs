//! Service adapters: OS specific implementations (filesystem, process spawning, settings IO).

pub mod config;
pub mod file;
pub mod keybinding;
pub mod paths;
pub mod settings;
pub mod terminal;

pub use config::ConfigService;
pub use file::{FileService, LocalFileProvider};
pub use keybinding::{KeybindingContext, KeybindingService};
pub use paths::{ensure_log_dir, get_log_dir, resolve_user_path};
pub use settings::{ensure_settings_file, get_settings_path, load_settings, parse_keybinding};
pub use terminal::{ProcessTerminalLauncher, TerminalLauncher};
