//! 工作台：持有 Store，分发输入、执行副作用、渲染整屏。

use std::path::PathBuf;

use ratatui::layout::Rect;

use crate::kernel::services::adapters::{
    ConfigService, FileService, KeybindingService, TerminalLauncher,
};
use crate::kernel::{Action, AppState, Effect, FocusTarget, Notification, Store};

use tab_row::TabRowLayout;

mod input;
mod render;
mod tab_row;

const TAB_ROW_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

impl EventResult {
    pub fn is_quit(&self) -> bool {
        matches!(self, EventResult::Quit)
    }
}

pub struct Workbench {
    store: Store,
    keybindings: KeybindingService,
    launcher: Box<dyn TerminalLauncher>,
    last_tab_row_area: Option<Rect>,
    last_tab_layout: TabRowLayout,
}

impl Workbench {
    pub fn new(
        cwd: PathBuf,
        config: &ConfigService,
        keybindings: KeybindingService,
        launcher: Box<dyn TerminalLauncher>,
    ) -> Self {
        let state = AppState::new(cwd, config.editor().clone());
        Self::with_store(Store::new(state, FileService::new()), keybindings, launcher)
    }

    pub fn with_store(
        store: Store,
        keybindings: KeybindingService,
        launcher: Box<dyn TerminalLauncher>,
    ) -> Self {
        Self {
            store,
            keybindings,
            launcher,
            last_tab_row_area: None,
            last_tab_layout: TabRowLayout::default(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn focus(&self) -> FocusTarget {
        self.store.state().ui.focus()
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }

    /// 按顺序打开命令行给出的文件
    pub fn open_paths(&mut self, paths: &[PathBuf]) {
        for path in paths {
            self.dispatch_kernel(Action::OpenPath(path.clone()));
        }
    }

    pub fn dispatch_kernel(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        let effects_changed = self.run_effects(result.effects);
        result.state_changed || effects_changed
    }

    fn run_effects(&mut self, effects: Vec<Effect>) -> bool {
        let mut changed = false;
        for effect in effects {
            match effect {
                Effect::SpawnTerminal { dir } => {
                    if let Err(err) = self.launcher.launch(&dir) {
                        tracing::warn!(dir = %dir.display(), error = %err, "terminal launch failed");
                        self.store
                            .notify(Notification::error(format!("Cannot open terminal: {}", err)));
                        changed = true;
                    }
                }
            }
        }
        changed
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
