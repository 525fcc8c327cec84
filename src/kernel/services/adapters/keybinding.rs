//! 快捷键：按键 → 命令（支持上下文）

use crate::core::event::Key;
use crate::core::event::KeyCode;
use crate::core::Command;
use crate::kernel::services::ports::settings::KeybindingRule;
use rustc_hash::FxHashMap;

use super::settings::parse_keybinding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Editor,
    /// 路径输入框与确认框；不回退到 `Global`
    Dialog,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "editor" => Some(Self::Editor),
            "dialog" | "prompt" => Some(Self::Dialog),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    editor: FxHashMap<Key, Command>,
    dialog: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            editor: default_editor_keybindings(),
            dialog: default_dialog_keybindings(),
        }
    }

    /// 默认绑定叠加用户规则；`command` 为空表示解绑
    pub fn with_rules(rules: &[KeybindingRule]) -> Self {
        let mut service = Self::with_defaults();
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "ignoring keybinding with unparsable key");
                continue;
            };
            let context = rule
                .context
                .as_deref()
                .and_then(KeybindingContext::parse)
                .unwrap_or(KeybindingContext::Global);
            if rule.command.trim().is_empty() {
                let _ = service.unbind(context, &key);
                continue;
            }
            match Command::from_name(&rule.command) {
                Some(command) => service.bind(context, key, command),
                None => {
                    tracing::warn!(command = %rule.command, "ignoring keybinding for unknown command")
                }
            }
        }
        service
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Editor => self.editor.get(key).or_else(|| self.global.get(key)),
            KeybindingContext::Dialog => self.dialog.get(key),
        }
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Editor => &self.editor,
            KeybindingContext::Dialog => &self.dialog,
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Editor => &mut self.editor,
            KeybindingContext::Dialog => &mut self.dialog,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::simple(KeyCode::Esc), Command::Escape);

    bindings.insert(Key::ctrl(KeyCode::Char('n')), Command::NewTab);
    bindings.insert(Key::ctrl(KeyCode::Char('o')), Command::OpenFile);
    bindings.insert(Key::ctrl(KeyCode::Char('s')), Command::Save);
    bindings.insert(Key::ctrl_shift(KeyCode::Char('s')), Command::SaveAs);
    bindings.insert(Key::ctrl(KeyCode::Char('w')), Command::CloseTab);
    bindings.insert(Key::ctrl(KeyCode::Char('t')), Command::OpenTerminal);
    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::PageDown), Command::NextTab);
    bindings.insert(Key::ctrl(KeyCode::PageUp), Command::PrevTab);

    bindings
}

fn default_editor_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Up), Command::CursorUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::CursorDown);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);
    bindings.insert(Key::ctrl(KeyCode::Home), Command::CursorFileStart);
    bindings.insert(Key::ctrl(KeyCode::End), Command::CursorFileEnd);
    bindings.insert(Key::simple(KeyCode::PageUp), Command::PageUp);
    bindings.insert(Key::simple(KeyCode::PageDown), Command::PageDown);

    bindings.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
    bindings.insert(Key::simple(KeyCode::Tab), Command::InsertTab);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);

    bindings
}

fn default_dialog_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::simple(KeyCode::Esc), Command::Escape);
    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
