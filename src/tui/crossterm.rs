use crossterm::event as ct;

use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Converts a crossterm event. Key releases are dropped; the editor only reacts to presses
/// and repeats.
pub fn input_event(event: ct::Event) -> Option<InputEvent> {
    let converted = match event {
        ct::Event::Key(key) => {
            let key = key_event(key);
            if key.kind == KeyEventKind::Release {
                return None;
            }
            InputEvent::Key(key)
        }
        ct::Event::Mouse(mouse) => InputEvent::Mouse(mouse_event(mouse)),
        ct::Event::Resize(width, height) => InputEvent::Resize(width, height),
        ct::Event::FocusGained => InputEvent::FocusGained,
        ct::Event::FocusLost => InputEvent::FocusLost,
        ct::Event::Paste(text) => InputEvent::Paste(text),
    };
    Some(converted)
}

pub fn key_event(event: ct::KeyEvent) -> KeyEvent {
    let mut modifiers = modifiers(event.modifiers);
    let code = match event.code {
        ct::KeyCode::Char(ch) => KeyCode::Char(ch),
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Tab => KeyCode::Tab,
        // Terminals report shift+tab as BackTab, sometimes with SHIFT already set.
        ct::KeyCode::BackTab => {
            modifiers |= KeyModifiers::SHIFT;
            KeyCode::BackTab
        }
        ct::KeyCode::Esc => KeyCode::Esc,
        ct::KeyCode::Backspace => KeyCode::Backspace,
        ct::KeyCode::Delete => KeyCode::Delete,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        ct::KeyCode::Home => KeyCode::Home,
        ct::KeyCode::End => KeyCode::End,
        ct::KeyCode::PageUp => KeyCode::PageUp,
        ct::KeyCode::PageDown => KeyCode::PageDown,
        ct::KeyCode::F(n) => KeyCode::F(n),
        // ctrl+space arrives as NUL on most terminals.
        ct::KeyCode::Null => {
            modifiers |= KeyModifiers::CONTROL;
            KeyCode::Char(' ')
        }
        _ => KeyCode::Unknown,
    };

    let kind = match event.kind {
        ct::KeyEventKind::Press => KeyEventKind::Press,
        ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
        ct::KeyEventKind::Release => KeyEventKind::Release,
    };

    KeyEvent {
        code,
        modifiers,
        kind,
    }
}

pub fn mouse_event(event: ct::MouseEvent) -> MouseEvent {
    let kind = match event.kind {
        ct::MouseEventKind::Down(button) => MouseEventKind::Down(mouse_button(button)),
        ct::MouseEventKind::Up(button) => MouseEventKind::Up(mouse_button(button)),
        ct::MouseEventKind::Drag(button) => MouseEventKind::Drag(mouse_button(button)),
        ct::MouseEventKind::Moved => MouseEventKind::Moved,
        ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
        ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
        ct::MouseEventKind::ScrollLeft => MouseEventKind::ScrollLeft,
        ct::MouseEventKind::ScrollRight => MouseEventKind::ScrollRight,
    };

    MouseEvent {
        kind,
        column: event.column,
        row: event.row,
        modifiers: modifiers(event.modifiers),
    }
}

fn mouse_button(button: ct::MouseButton) -> MouseButton {
    match button {
        ct::MouseButton::Left => MouseButton::Left,
        ct::MouseButton::Right => MouseButton::Right,
        ct::MouseButton::Middle => MouseButton::Middle,
    }
}

fn modifiers(mods: ct::KeyModifiers) -> KeyModifiers {
    [
        (ct::KeyModifiers::SHIFT, KeyModifiers::SHIFT),
        (ct::KeyModifiers::CONTROL, KeyModifiers::CONTROL),
        (ct::KeyModifiers::ALT, KeyModifiers::ALT),
        (ct::KeyModifiers::SUPER, KeyModifiers::SUPER),
    ]
    .into_iter()
    .filter(|(from, _)| mods.contains(*from))
    .fold(KeyModifiers::NONE, |acc, (_, to)| acc | to)
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
