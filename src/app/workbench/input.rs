use super::{EventResult, Workbench};
use crate::core::event::{
    InputEvent, Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::{Action, FocusTarget};

impl Workbench {
    pub fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        let result = match event {
            InputEvent::Key(key) => self.handle_key_event(key),
            InputEvent::Paste(text) => {
                self.consumed_if(Action::InsertText(text.clone()))
            }
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            // 下一次渲染会重新测量文本区
            InputEvent::Resize(..) => EventResult::Consumed,
            InputEvent::FocusGained | InputEvent::FocusLost => EventResult::Ignored,
        };

        if self.should_quit() {
            EventResult::Quit
        } else {
            result
        }
    }

    fn handle_key_event(&mut self, event: &KeyEvent) -> EventResult {
        if event.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }

        let action = match self.focus() {
            FocusTarget::ConfirmDialog => confirm_dialog_action(event),
            FocusTarget::InputDialog => self.input_dialog_action(event),
            FocusTarget::Editor => self.editor_action(event),
        };

        match action {
            Some(action) => {
                self.dispatch_kernel(action);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    fn input_dialog_action(&self, event: &KeyEvent) -> Option<Action> {
        let key = Key::from(*event);
        if let Some(cmd) = self.keybindings.resolve(KeybindingContext::Dialog, &key) {
            return Some(Action::RunCommand(cmd.clone()));
        }

        match event.code {
            KeyCode::Enter => Some(Action::InputDialogAccept),
            KeyCode::Backspace => Some(Action::InputDialogBackspace),
            KeyCode::Left => Some(Action::InputDialogCursorLeft),
            KeyCode::Right => Some(Action::InputDialogCursorRight),
            KeyCode::Char(ch) if is_plain_text(event.modifiers) => {
                Some(Action::InputDialogAppend(ch))
            }
            _ => None,
        }
    }

    fn editor_action(&self, event: &KeyEvent) -> Option<Action> {
        let key = Key::from(*event);
        if let Some(cmd) = self.keybindings.resolve(KeybindingContext::Editor, &key) {
            return Some(Action::RunCommand(cmd.clone()));
        }

        match event.code {
            KeyCode::Char(ch) if is_plain_text(event.modifiers) => {
                Some(Action::RunCommand(Command::InsertChar(ch)))
            }
            _ => None,
        }
    }

    fn handle_mouse(&mut self, event: &MouseEvent) -> EventResult {
        if event.kind != MouseEventKind::Down(MouseButton::Left)
            || self.focus() != FocusTarget::Editor
        {
            return EventResult::Ignored;
        }

        let Some(area) = self.last_tab_row_area else {
            return EventResult::Ignored;
        };
        if event.row < area.y || event.row >= area.bottom() {
            return EventResult::Ignored;
        }

        match self.last_tab_layout.hit_test(event.column) {
            Some(index) => self.consumed_if(Action::SelectTab(index)),
            None => EventResult::Ignored,
        }
    }

    fn consumed_if(&mut self, action: Action) -> EventResult {
        if self.dispatch_kernel(action) {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

fn confirm_dialog_action(event: &KeyEvent) -> Option<Action> {
    match event.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
            Some(Action::ConfirmDialogAccept)
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            Some(Action::ConfirmDialogCancel)
        }
        _ => None,
    }
}

/// 仅按 Shift 仍视为输入；ctrl/alt 组合键即使未绑定也按快捷键处理
fn is_plain_text(modifiers: KeyModifiers) -> bool {
    !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
